//! The interactive menu
//!
//! Collects raw strings from the operator, re-prompts while a field fails
//! validation, and hands finished input to the ledger service.

use std::io::Write;

use super::input::{Input, LineSource};
use crate::display::{format_balance, format_record_list, format_search_results, Palette};
use crate::error::WalletResult;
use crate::models::{Record, RecordEdit, SearchCriterion};
use crate::services::LedgerService;
use crate::storage::LoadStatus;
use crate::validation;

const MENU: &str = "\nPersonal wallet\n\
    1. Show balance\n\
    2. Add record\n\
    3. Edit record\n\
    4. Search records\n\
    5. Exit\n";

/// Last line of every session
pub const FAREWELL: &str = "Goodbye.";

/// Whether the menu loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive console over a ledger service
pub struct Console<'s, 'a, S, W> {
    service: &'s mut LedgerService<'a>,
    source: S,
    out: W,
    palette: Palette,
}

impl<'s, 'a, S: LineSource, W: Write> Console<'s, 'a, S, W> {
    pub fn new(service: &'s mut LedgerService<'a>, source: S, out: W, palette: Palette) -> Self {
        Self {
            service,
            source,
            out,
            palette,
        }
    }

    /// Run the menu until the operator exits, interrupts, or input ends
    pub fn run(mut self) -> WalletResult<()> {
        if self.service.load_status() == LoadStatus::Missing {
            let notice = self.palette.error("No data yet. Add a record first.");
            writeln!(self.out, "\n{}", notice)?;
        }

        loop {
            write!(self.out, "{}", MENU)?;
            let prompt = format!("\n{}", self.palette.prompt("Choose an action: "));
            let Some(choice) = self.ask(&prompt)? else {
                break;
            };

            let flow = match choice.trim() {
                "1" => self.show_balance()?,
                "2" => self.add()?,
                "3" => self.edit()?,
                "4" => self.search()?,
                "5" => Flow::Quit,
                _ => {
                    writeln!(self.out, "Unknown choice, try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(self.out, "{}", FAREWELL)?;
        self.out.flush()?;
        Ok(())
    }

    fn show_balance(&mut self) -> WalletResult<Flow> {
        match self.service.balance() {
            Ok(balance) => {
                let text = format_balance(&balance, &self.palette);
                write!(self.out, "\n{}", text)?;
            }
            Err(e) => self.report(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> WalletResult<Flow> {
        let Some(date) = self.ask_valid("Date (DD.MM.YYYY): ", validation::parse_date)? else {
            return Ok(Flow::Quit);
        };
        let Some(category) =
            self.ask_valid("Category (Доход/Расход): ", validation::parse_category)?
        else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.ask_valid("Amount: ", validation::parse_amount)? else {
            return Ok(Flow::Quit);
        };
        let Some(description) = self.ask("Description: ")? else {
            return Ok(Flow::Quit);
        };

        match self
            .service
            .add_record(&date, &category, &amount, &description)
        {
            Ok(_) => {
                let message = self.palette.success("Record added.");
                writeln!(self.out, "\n{}", message)?;
            }
            Err(e) => self.report(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn edit(&mut self) -> WalletResult<Flow> {
        let listing = format_record_list(self.service.ledger().records());
        write!(self.out, "{}", listing)?;
        if self.service.ledger().is_empty() {
            return Ok(Flow::Continue);
        }

        let Some(answer) = self.ask("Record number to edit: ")? else {
            return Ok(Flow::Quit);
        };
        let number = match answer.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                self.report("Not a record number.")?;
                return Ok(Flow::Continue);
            }
        };

        let index = number - 1;
        let current: Record = match self.service.ledger().get(index) {
            Ok(record) => record.clone(),
            Err(e) => {
                self.report(&e.to_string())?;
                return Ok(Flow::Continue);
            }
        };

        let prompt = format!("New date (DD.MM.YYYY) [{}]: ", current.date_text());
        let Some(date) = self.ask_optional(&prompt, validation::parse_date)? else {
            return Ok(Flow::Quit);
        };
        let prompt = format!("New category (Доход/Расход) [{}]: ", current.category());
        let Some(category) = self.ask_optional(&prompt, validation::parse_category)? else {
            return Ok(Flow::Quit);
        };
        let prompt = format!("New amount [{}]: ", current.amount());
        let Some(amount) = self.ask_optional(&prompt, validation::parse_amount)? else {
            return Ok(Flow::Quit);
        };
        let prompt = format!("New description [{}]: ", current.description());
        let Some(description) = self.ask(&prompt)? else {
            return Ok(Flow::Quit);
        };

        let edit = RecordEdit {
            date: Some(date),
            category: Some(category),
            amount: Some(amount),
            description: Some(description),
        };

        match self.service.edit_record(index, &edit) {
            Ok(_) => {
                let message = self.palette.success("Record updated.");
                writeln!(self.out, "{}", message)?;
            }
            Err(e) => self.report(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> WalletResult<Flow> {
        let Some(kind) = self.ask("Search by (date, category, amount): ")? else {
            return Ok(Flow::Quit);
        };

        let criterion = match kind.trim().to_lowercase().as_str() {
            "date" | "дата" => {
                let Some(date) = self.ask("Date to find (DD.MM.YYYY): ")? else {
                    return Ok(Flow::Quit);
                };
                SearchCriterion::Date(date.trim().to_string())
            }
            "category" | "категория" => {
                let Some(category) = self.ask("Category to find (Доход/Расход): ")? else {
                    return Ok(Flow::Quit);
                };
                SearchCriterion::Category(category.trim().to_string())
            }
            "amount" | "сумма" => {
                let Some(amount) = self.ask_valid("Amount to find: ", validation::parse_amount)?
                else {
                    return Ok(Flow::Quit);
                };
                SearchCriterion::Amount(validation::parse_amount(&amount)?)
            }
            _ => {
                writeln!(self.out, "Unknown search type, try again.")?;
                return Ok(Flow::Continue);
            }
        };

        let text = format_search_results(&self.service.search(criterion));
        write!(self.out, "{}", text)?;
        Ok(Flow::Continue)
    }

    /// One line of input, or `None` when the operator wants out
    fn ask(&mut self, prompt: &str) -> WalletResult<Option<String>> {
        match self.source.read_line(prompt)? {
            Input::Line(line) => Ok(Some(line)),
            Input::Interrupted | Input::Eof => Ok(None),
        }
    }

    /// Ask until `check` accepts the answer
    fn ask_valid<T>(
        &mut self,
        prompt: &str,
        check: impl Fn(&str) -> WalletResult<T>,
    ) -> WalletResult<Option<String>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match check(answer.trim()) {
                Ok(_) => return Ok(Some(answer.trim().to_string())),
                Err(e) if e.is_validation() => self.report(&e.to_string())?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Like `ask_valid`, but an empty answer is accepted and means "keep"
    fn ask_optional<T>(
        &mut self,
        prompt: &str,
        check: impl Fn(&str) -> WalletResult<T>,
    ) -> WalletResult<Option<String>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(Some(String::new()));
            }
            match check(answer) {
                Ok(_) => return Ok(Some(answer.to_string())),
                Err(e) if e.is_validation() => self.report(&e.to_string())?,
                Err(e) => return Err(e),
            }
        }
    }

    fn report(&mut self, message: &str) -> WalletResult<()> {
        let text = self.palette.error(message);
        writeln!(self.out, "{}", text)?;
        Ok(())
    }
}
