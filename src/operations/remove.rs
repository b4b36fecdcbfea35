use crate::db::storage::DurableStorage;
use crate::error::Result;
use crate::models::transaction::TransactionId;
use crate::store::LedgerStore;

/// Returns `Ok(false)` when there was no transaction with `id`.
pub fn remove_transaction<S: DurableStorage>(store: &mut LedgerStore<S>, id: TransactionId) -> Result<bool> {
    store.delete(id)
}
