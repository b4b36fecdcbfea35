//! Command line and environment configuration.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::transaction::TransactionId;
use crate::operations::list::TypeFilter;

#[derive(Debug, Parser)]
#[command(name = "ledger", version, about = "Track personal income and expenses")]
pub struct Cli {
    /// SQLite file holding the ledger.
    #[arg(long, env = "LEDGER_DB", default_value = "ledger.db", global = true)]
    pub db: PathBuf,

    /// Log filter, e.g. `warn` or `ledger_app=debug`. `RUST_LOG` takes precedence.
    #[arg(long, env = "LEDGER_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a new transaction.
    Add(AddArgs),
    /// Change fields of an existing transaction.
    Edit(EditArgs),
    /// Delete a transaction.
    Delete { id: TransactionId },
    /// Show a single transaction.
    Show { id: TransactionId },
    /// List transactions, newest first.
    List {
        #[arg(long, value_enum, default_value_t = TypeFilter::All)]
        filter: TypeFilter,
    },
    /// Show income, expense and balance.
    Totals,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    pub description: String,
    pub amount: String,
    /// One of food, transport, shopping, entertainment, bills, health, income, other.
    #[arg(long, default_value = "other")]
    pub category: String,
    /// YYYY-MM-DD, defaults to today.
    #[arg(long)]
    pub date: Option<String>,
    /// income or expense.
    #[arg(long = "type", default_value = "expense")]
    pub transaction_type: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: TransactionId,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub amount: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long = "type")]
    pub transaction_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "ledger", "--db", "test.db", "add", "Coffee", "4.50", "--category", "food", "--type", "expense",
        ])
        .unwrap();

        assert_eq!(cli.db, PathBuf::from("test.db"));
        match cli.command {
            Command::Add(args) => {
                assert_eq!(args.description, "Coffee");
                assert_eq!(args.amount, "4.50");
                assert_eq!(args.category, "food");
                assert!(args.date.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_filter() {
        let cli = Cli::try_parse_from(["ledger", "list", "--filter", "income"]).unwrap();
        assert!(matches!(cli.command, Command::List { filter: TypeFilter::Income }));
    }

    #[test]
    fn test_parse_edit_partial() {
        let cli = Cli::try_parse_from(["ledger", "edit", "3", "--amount", "20"]).unwrap();
        match cli.command {
            Command::Edit(args) => {
                assert_eq!(args.id, 3);
                assert_eq!(args.amount.as_deref(), Some("20"));
                assert!(args.description.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["ledger", "delete", "abc"]).is_err());
    }
}
