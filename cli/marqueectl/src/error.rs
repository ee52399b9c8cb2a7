//! Error display for the CLI.

use colored::Colorize;
use marquee_dataset::DatasetError;
use marquee_returns::ReturnError;

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(return_err) = err.downcast_ref::<ReturnError>() {
        match return_err {
            ReturnError::NotFound { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `mq actors` to list the known actor names.".yellow()
                );
            }
            ReturnError::InvalidInput => {
                eprintln!("\n{}", "Hint: Pass a non-empty actor name.".yellow());
            }
        }
    } else if err.downcast_ref::<DatasetError>().is_some() {
        eprintln!(
            "\n{}",
            "Hint: Point --data-dir (or MARQUEE_DATA_DIR) at the directory holding the CSV files."
                .yellow()
        );
    }
}
