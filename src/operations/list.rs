use clap::ValueEnum;

use super::format::{format_currency, format_date};
use crate::models::category::Category;
use crate::models::transaction::{Transaction, TransactionType};

pub const EMPTY_LIST_MESSAGE: &str = "No transactions yet. Add your first transaction to get started!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => transaction.transaction_type == TransactionType::Income,
            TypeFilter::Expense => transaction.transaction_type == TransactionType::Expense,
        }
    }
}

/// Keeps the stored (newest first) order.
pub fn filter_transactions(transactions: &[Transaction], filter: TypeFilter) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|transaction| filter.matches(transaction))
        .collect()
}

pub fn render_transaction(transaction: &Transaction) -> String {
    let icon = Category::from_label(&transaction.category).icon();
    let sign = match transaction.transaction_type {
        TransactionType::Income => '+',
        _ => '-',
    };

    format!(
        "{icon} {} | {} • {} | {sign}{} [#{}]",
        transaction.description,
        transaction.category,
        format_date(transaction.date),
        format_currency(transaction.amount),
        transaction.id,
    )
}

pub fn render_list(transactions: &[&Transaction]) -> Vec<String> {
    if transactions.is_empty() {
        return vec![EMPTY_LIST_MESSAGE.to_string()];
    }
    transactions.iter().map(|t| render_transaction(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::NewTransaction;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    fn create_test_transaction(id: u64, category: &str, transaction_type: TransactionType) -> Transaction {
        Transaction::new(
            id,
            NewTransaction {
                description: "Test Description".to_string(),
                amount: Decimal::new(10050, 2),
                category: category.to_string(),
                date: NaiveDate::from_ymd_opt(2025, 11, 9).expect("Invalid date"),
                transaction_type,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_filter_all() {
        let transactions = vec![
            create_test_transaction(3, "food", TransactionType::Expense),
            create_test_transaction(2, "income", TransactionType::Income),
        ];

        assert_eq!(filter_transactions(&transactions, TypeFilter::All).len(), 2);
    }

    #[test]
    fn test_filter_by_type_keeps_order() {
        let transactions = vec![
            create_test_transaction(3, "food", TransactionType::Expense),
            create_test_transaction(2, "income", TransactionType::Income),
            create_test_transaction(1, "bills", TransactionType::Expense),
        ];

        let expenses = filter_transactions(&transactions, TypeFilter::Expense);
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].id, 3);
        assert_eq!(expenses[1].id, 1);

        let income = filter_transactions(&transactions, TypeFilter::Income);
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].id, 2);
    }

    #[test]
    fn test_filter_excludes_unrecognized_from_typed_views() {
        let transactions = vec![create_test_transaction(1, "food", TransactionType::Unrecognized("transfer".to_string()))];

        assert!(filter_transactions(&transactions, TypeFilter::Income).is_empty());
        assert!(filter_transactions(&transactions, TypeFilter::Expense).is_empty());
        assert_eq!(filter_transactions(&transactions, TypeFilter::All).len(), 1);
    }

    #[test]
    fn test_render_expense() {
        let line = render_transaction(&create_test_transaction(9, "food", TransactionType::Expense));
        assert_eq!(line, "🍔 Test Description | food • Nov 9, 2025 | -$100.50 [#9]");
    }

    #[test]
    fn test_render_income_with_unknown_category() {
        let line = render_transaction(&create_test_transaction(4, "lottery", TransactionType::Income));
        assert!(line.starts_with("📌 "));
        assert!(line.contains("+$100.50"));
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_list(&[]), vec![EMPTY_LIST_MESSAGE.to_string()]);
    }
}
