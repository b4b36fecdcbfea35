use clap::Parser;
use std::process::ExitCode;

use ledger_app::config::{Cli, Command};
use ledger_app::db::connection::establish_connection;
use ledger_app::db::storage::{DurableStorage, SqliteStorage};
use ledger_app::operations::add::{add_transaction, parse_new_transaction};
use ledger_app::operations::edit::{EditInput, edit_transaction};
use ledger_app::operations::list::{filter_transactions, render_list, render_transaction};
use ledger_app::operations::remove::remove_transaction;
use ledger_app::operations::totals::render_totals;
use ledger_app::{LedgerStore, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();
    ledger_app::logging::init(&cli.log_level);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let conn = establish_connection(&cli.db)?;
    let mut store = LedgerStore::open(SqliteStorage::new(conn))?;

    match cli.command {
        Command::Add(args) => {
            let fields = parse_new_transaction(
                &args.description,
                &args.amount,
                &args.category,
                args.date.as_deref(),
                &args.transaction_type,
            )?;
            let created = add_transaction(&mut store, fields)?;
            println!("Transaction added successfully!");
            println!("{}", render_transaction(&created));
            print_totals(&store);
        }
        Command::Edit(args) => {
            let input = EditInput {
                description: args.description.as_deref(),
                amount: args.amount.as_deref(),
                category: args.category.as_deref(),
                date: args.date.as_deref(),
                transaction_type: args.transaction_type.as_deref(),
            };
            match edit_transaction(&mut store, args.id, &input)? {
                Some(updated) => {
                    println!("Transaction updated.");
                    println!("{}", render_transaction(&updated));
                    print_totals(&store);
                }
                None => return Ok(not_found(args.id)),
            }
        }
        Command::Delete { id } => {
            if !remove_transaction(&mut store, id)? {
                return Ok(not_found(id));
            }
            println!("Transaction removed successfully.");
            print_totals(&store);
        }
        Command::Show { id } => match store.get_by_id(id) {
            Some(transaction) => println!("{}", render_transaction(transaction)),
            None => return Ok(not_found(id)),
        },
        Command::List { filter } => {
            let transactions = filter_transactions(store.get_all(), filter);
            for line in render_list(&transactions) {
                println!("{line}");
            }
        }
        Command::Totals => print_totals(&store),
    }

    Ok(ExitCode::SUCCESS)
}

fn print_totals<S: DurableStorage>(store: &LedgerStore<S>) {
    println!("{}", render_totals(&store.totals()));
}

fn not_found(id: u64) -> ExitCode {
    eprintln!("Transaction {id} not found");
    ExitCode::FAILURE
}
