use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

pub type TransactionId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
    /// A stored `type` that is neither income nor expense, kept verbatim so it
    /// is written back unchanged. Only produced when reading old data; such
    /// records count towards neither total.
    Unrecognized(String),
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Unrecognized(raw) => raw,
        }
    }
}

impl Serialize for TransactionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "income" => TransactionType::Income,
            "expense" => TransactionType::Expense,
            _ => TransactionType::Unrecognized(raw),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(id: TransactionId, fields: NewTransaction, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            description: fields.description,
            amount: fields.amount,
            category: fields.category,
            date: fields.date,
            transaction_type: fields.transaction_type,
            created_at,
        }
    }

    /// Overwrites every field the patch supplies. `id` and `created_at` are
    /// never touched.
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(transaction_type) = patch.transaction_type {
            self.transaction_type = transaction_type;
        }
    }
}

/// The caller supplied fields of a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub transaction_type: TransactionType,
}

/// A partial update. Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub transaction_type: Option<TransactionType>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.transaction_type.is_none()
    }
}

/// Reads an amount the way older ledgers may hold it: a JSON number or a
/// numeric string. Anything else gives `None`.
pub(crate) fn parse_stored_amount(raw: &serde_json::Value) -> Option<Decimal> {
    match raw {
        serde_json::Value::Number(number) => {
            let text = number.to_string();
            Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)).ok()
        }
        serde_json::Value::String(text) => Decimal::from_str(text.trim()).ok(),
        _ => None,
    }
}

// Junk counts as zero.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(parse_stored_amount(&raw).unwrap_or_else(|| {
        tracing::warn!("Stored amount {raw} is not a number, counting it as zero");
        Decimal::ZERO
    }))
}
