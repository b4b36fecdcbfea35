use rust_decimal::Decimal;

use super::transaction::{Transaction, TransactionType};

/// Aggregate view of the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

impl Totals {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;
        for transaction in transactions {
            match transaction.transaction_type {
                TransactionType::Income => income = saturating_add(income, transaction.amount),
                TransactionType::Expense => expense = saturating_add(expense, transaction.amount),
                TransactionType::Unrecognized(_) => {}
            }
        }

        Self {
            income,
            expense,
            balance: saturating_add(income, -expense),
        }
    }
}

// Sums past the `Decimal` range are clamped to its bounds.
fn saturating_add(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        tracing::warn!("Total exceeds the largest representable amount, clamping it");
        if amount.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}
