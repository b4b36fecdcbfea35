//! Validation of user input for new transactions.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::db::storage::DurableStorage;
use crate::error::{LedgerError, Result};
use crate::models::transaction::{NewTransaction, Transaction, TransactionType};
use crate::store::LedgerStore;

pub fn parse_amount(input: &str) -> Result<Decimal> {
    let amount = Decimal::from_str(input.trim()).map_err(|_| {
        LedgerError::InvalidInput(format!(
            "Invalid amount format {input}. Please provide a valid decimal number."
        ))
    })?;
    if amount.is_sign_negative() {
        return Err(LedgerError::InvalidInput(
            "Amount cannot be negative. Use the transaction type to record an expense.".to_string(),
        ));
    }
    Ok(amount)
}

pub fn parse_transaction_type(input: &str) -> Result<TransactionType> {
    match input.trim().to_lowercase().as_str() {
        "income" => Ok(TransactionType::Income),
        "expense" => Ok(TransactionType::Expense),
        _ => Err(LedgerError::InvalidInput(
            "Invalid transaction type. Use 'income' or 'expense'.".to_string(),
        )),
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidInput("Invalid date format. Please use YYYY-MM-DD.".to_string()))
}

/// Builds the field set for a new transaction. A missing date means today.
pub fn parse_new_transaction(
    description: &str,
    amount: &str,
    category: &str,
    date: Option<&str>,
    transaction_type: &str,
) -> Result<NewTransaction> {
    let date = match date {
        Some(date) => parse_date(date)?,
        None => Local::now().date_naive(),
    };

    Ok(NewTransaction {
        description: description.trim().to_string(),
        amount: parse_amount(amount)?,
        category: category.trim().to_string(),
        date,
        transaction_type: parse_transaction_type(transaction_type)?,
    })
}

pub fn add_transaction<S: DurableStorage>(
    store: &mut LedgerStore<S>,
    fields: NewTransaction,
) -> Result<Transaction> {
    store.create(fields)
}
