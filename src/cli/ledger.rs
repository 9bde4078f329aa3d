//! Ledger CLI commands
//!
//! One-shot versions of the console's menu entries, for scripts.

use clap::Subcommand;

use crate::display::{format_balance, format_record_list, format_search_results, Palette};
use crate::error::{WalletError, WalletResult};
use crate::models::{RecordEdit, SearchCriterion};
use crate::services::LedgerService;
use crate::validation;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Show balance, income and expense totals
    Balance,
    /// List all records with their numbers
    List,
    /// Add a record
    Add {
        /// Date (DD.MM.YYYY)
        date: String,
        /// Category (Доход or Расход)
        category: String,
        /// Amount, up to two decimal places
        amount: String,
        /// Free-form description
        description: Option<String>,
    },
    /// Edit a record; omitted fields keep their values
    Edit {
        /// Record number as shown by `list`
        number: usize,
        /// New date (DD.MM.YYYY)
        #[arg(short, long)]
        date: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },
    /// Search records
    #[command(subcommand)]
    Search(SearchCommands),
}

/// Search subcommands
#[derive(Subcommand)]
pub enum SearchCommands {
    /// Records on an exact date
    Date {
        /// Date (DD.MM.YYYY)
        date: String,
    },
    /// Records in a category, any letter case
    Category {
        /// Category label
        category: String,
    },
    /// Records with an exact amount
    Amount {
        /// Amount
        amount: String,
    },
}

/// Handle a ledger command
pub fn handle_ledger_command(
    service: &mut LedgerService<'_>,
    palette: &Palette,
    cmd: LedgerCommands,
) -> WalletResult<()> {
    match cmd {
        LedgerCommands::Balance => {
            print!("{}", format_balance(&service.balance()?, palette));
        }

        LedgerCommands::List => {
            print!("{}", format_record_list(service.ledger().records()));
        }

        LedgerCommands::Add {
            date,
            category,
            amount,
            description,
        } => {
            let description = description.unwrap_or_default();
            let record = service.add_record(&date, &category, &amount, &description)?;
            println!("{}", palette.success("Record added."));
            println!("  {}", record);
        }

        LedgerCommands::Edit {
            number,
            date,
            category,
            amount,
            description,
        } => {
            let index = number.checked_sub(1).ok_or_else(|| {
                WalletError::validation("record number", "numbers start at 1")
            })?;

            let edit = RecordEdit {
                date,
                category,
                amount,
                description,
            };
            let record = service.edit_record(index, &edit)?;
            println!("{}", palette.success("Record updated."));
            println!("  {}. {}", number, record);
        }

        LedgerCommands::Search(search) => {
            let criterion = match search {
                SearchCommands::Date { date } => SearchCriterion::Date(date),
                SearchCommands::Category { category } => SearchCriterion::Category(category),
                SearchCommands::Amount { amount } => {
                    SearchCriterion::Amount(validation::parse_amount(&amount)?)
                }
            };
            print!("{}", format_search_results(&service.search(criterion)));
        }
    }

    Ok(())
}
