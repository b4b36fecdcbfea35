use super::add::{parse_amount, parse_date, parse_transaction_type};
use crate::db::storage::DurableStorage;
use crate::error::{LedgerError, Result};
use crate::models::transaction::{Transaction, TransactionId, TransactionPatch};
use crate::store::LedgerStore;

/// Raw edit fields as typed by the user. `None` leaves a field unchanged.
#[derive(Debug, Default)]
pub struct EditInput<'a> {
    pub description: Option<&'a str>,
    pub amount: Option<&'a str>,
    pub category: Option<&'a str>,
    pub date: Option<&'a str>,
    pub transaction_type: Option<&'a str>,
}

pub fn parse_patch(input: &EditInput) -> Result<TransactionPatch> {
    let patch = TransactionPatch {
        description: input.description.map(|d| d.trim().to_string()),
        amount: input.amount.map(parse_amount).transpose()?,
        category: input.category.map(|c| c.trim().to_string()),
        date: input.date.map(parse_date).transpose()?,
        transaction_type: input.transaction_type.map(parse_transaction_type).transpose()?,
    };

    if patch.is_empty() {
        return Err(LedgerError::InvalidInput("Nothing to change. Provide at least one field.".to_string()));
    }
    Ok(patch)
}

pub fn edit_transaction<S: DurableStorage>(
    store: &mut LedgerStore<S>,
    id: TransactionId,
    input: &EditInput,
) -> Result<Option<Transaction>> {
    let patch = parse_patch(input)?;
    store.update(id, patch)
}
