//! The ledger store: the only owner of the transaction sequence.
//!
//! The whole sequence, plus the next id to hand out, lives in one durable
//! slot and is rewritten after every change.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::db::storage::DurableStorage;
use crate::error::Result;
use crate::models::totals::Totals;
use crate::models::transaction::{
    NewTransaction, Transaction, TransactionId, TransactionPatch, parse_stored_amount,
};

pub const TRANSACTIONS_KEY: &str = "transactions";
/// Receives the raw slot value when it cannot be decoded, so the next write
/// does not destroy it.
pub const CORRUPT_TRANSACTIONS_KEY: &str = "transactions.corrupt";
/// Receives the raw slot value when some stored amount is not a number and
/// will be written back as zero.
pub const COERCED_TRANSACTIONS_KEY: &str = "transactions.coerced";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LedgerDocumentRef<'a> {
    next_id: TransactionId,
    transactions: &'a [Transaction],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredLedger {
    #[serde(rename_all = "camelCase")]
    Document {
        next_id: TransactionId,
        transactions: Vec<Transaction>,
    },
    Legacy(Vec<Transaction>),
}

pub struct LedgerStore<S: DurableStorage> {
    storage: S,
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl<S: DurableStorage> LedgerStore<S> {
    /// Load the ledger from `storage`. An empty slot gives an empty ledger,
    /// and so does a slot that cannot be decoded. In that case the damaged
    /// value is copied to [CORRUPT_TRANSACTIONS_KEY] first. A slot holding
    /// non-numeric amounts is copied to [COERCED_TRANSACTIONS_KEY] before those
    /// amounts are read as zero.
    pub fn open(mut storage: S) -> Result<Self> {
        let (transactions, next_id) = match storage.read(TRANSACTIONS_KEY)? {
            None => (Vec::new(), 1),
            Some(raw) if raw.trim().is_empty() => (Vec::new(), 1),
            Some(raw) => match serde_json::from_str::<StoredLedger>(&raw) {
                Ok(stored) => {
                    if has_non_numeric_amounts(&raw) {
                        if let Some(key) = back_up(&mut storage, COERCED_TRANSACTIONS_KEY, &raw)? {
                            tracing::warn!(
                                "Stored ledger has non-numeric amounts, reading them as zero. \
                                 The old value was saved under '{key}'"
                            );
                        }
                    }
                    match stored {
                        StoredLedger::Document {
                            next_id,
                            transactions,
                        } => {
                            let next_id = next_id.max(following_id(&transactions));
                            (transactions, next_id)
                        }
                        StoredLedger::Legacy(transactions) => {
                            let next_id = following_id(&transactions);
                            (transactions, next_id)
                        }
                    }
                }
                Err(e) => {
                    let saved = back_up(&mut storage, CORRUPT_TRANSACTIONS_KEY, &raw)?;
                    let key = saved.as_deref().unwrap_or(CORRUPT_TRANSACTIONS_KEY);
                    tracing::warn!(
                        "Stored ledger could not be decoded ({e}), starting empty. \
                         The old value was saved under '{key}'"
                    );
                    (Vec::new(), 1)
                }
            },
        };

        tracing::info!("Opened ledger with {} transactions", transactions.len());
        Ok(Self {
            storage,
            transactions,
            next_id,
        })
    }

    /// Record a new transaction at the front of the ledger.
    pub fn create(&mut self, fields: NewTransaction) -> Result<Transaction> {
        let transaction = Transaction::new(self.next_id, fields, Utc::now());

        let mut transactions = Vec::with_capacity(self.transactions.len() + 1);
        transactions.push(transaction.clone());
        transactions.extend(self.transactions.iter().cloned());
        self.commit(transactions, self.next_id + 1)?;

        tracing::debug!("Created transaction {}", transaction.id);
        Ok(transaction)
    }

    /// Merge `patch` onto the transaction with `id`. Returns `None`, and
    /// changes nothing, when there is no such transaction.
    pub fn update(&mut self, id: TransactionId, patch: TransactionPatch) -> Result<Option<Transaction>> {
        let Some(index) = self.position(id) else {
            tracing::debug!("Update skipped, transaction {id} not found");
            return Ok(None);
        };

        let mut transactions = self.transactions.clone();
        transactions[index].apply(patch);
        let updated = transactions[index].clone();
        self.commit(transactions, self.next_id)?;

        tracing::debug!("Updated transaction {id}");
        Ok(Some(updated))
    }

    /// Remove the transaction with `id`, returning whether one was removed.
    /// The ledger is persisted either way.
    pub fn delete(&mut self, id: TransactionId) -> Result<bool> {
        let transactions: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|transaction| transaction.id != id)
            .cloned()
            .collect();
        let removed = transactions.len() != self.transactions.len();
        self.commit(transactions, self.next_id)?;

        tracing::debug!("Deleted transaction {id}: removed = {removed}");
        Ok(removed)
    }

    pub fn get_by_id(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|transaction| transaction.id == id)
    }

    /// All transactions, newest first.
    pub fn get_all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn totals(&self) -> Totals {
        Totals::from_transactions(&self.transactions)
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|transaction| transaction.id == id)
    }

    // Memory is only replaced once the write has succeeded.
    fn commit(&mut self, transactions: Vec<Transaction>, next_id: TransactionId) -> Result<()> {
        let encoded = serde_json::to_string(&LedgerDocumentRef {
            next_id,
            transactions: &transactions,
        })?;
        self.storage.write(TRANSACTIONS_KEY, &encoded)?;

        self.transactions = transactions;
        self.next_id = next_id;
        Ok(())
    }
}

/// Copies `raw` to the first free key of `base`, `base.2`, `base.3`, ...
/// so an earlier backup is never replaced. Returns `None` when one of those
/// keys already holds `raw`.
fn back_up<S: DurableStorage>(storage: &mut S, base: &str, raw: &str) -> Result<Option<String>> {
    for n in 1.. {
        let key = if n == 1 { base.to_string() } else { format!("{base}.{n}") };
        match storage.read(&key)? {
            None => {
                storage.write(&key, raw)?;
                return Ok(Some(key));
            }
            Some(existing) if existing == raw => return Ok(None),
            Some(_) => tracing::debug!("Backup '{key}' is taken, keeping it"),
        }
    }
    Ok(None)
}

fn has_non_numeric_amounts(raw: &str) -> bool {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) else {
        return false;
    };
    let transactions = match &value {
        serde_json::Value::Array(_) => &value,
        _ => &value["transactions"],
    };
    transactions.as_array().is_some_and(|transactions| {
        transactions
            .iter()
            .filter_map(|transaction| transaction.get("amount"))
            .any(|amount| parse_stored_amount(amount).is_none())
    })
}

fn following_id(transactions: &[Transaction]) -> TransactionId {
    transactions
        .iter()
        .map(|transaction| transaction.id)
        .max()
        .map_or(1, |id| id + 1)
}
