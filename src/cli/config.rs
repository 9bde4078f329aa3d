//! Config command: show paths and settings, optionally change settings

use crate::config::{Settings, WalletPaths};
use crate::error::WalletResult;

/// Apply any requested changes, then print the configuration
pub fn handle_config_command(
    paths: &WalletPaths,
    settings: &mut Settings,
    audit: Option<bool>,
    color: Option<bool>,
) -> WalletResult<()> {
    if audit.is_some() || color.is_some() {
        if let Some(audit) = audit {
            settings.audit_enabled = audit;
        }
        if let Some(color) = color {
            settings.color = color;
        }
        settings.save(paths)?;
        println!("Settings saved.");
        println!();
    }

    println!("Wallet Configuration");
    println!("====================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Ledger file:    {}", paths.records_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Audit log enabled: {}", settings.audit_enabled);
    println!("  Colour output:     {}", settings.color);

    Ok(())
}
