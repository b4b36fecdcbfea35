use rust_decimal::Decimal;

use super::format::format_currency;
use crate::models::totals::Totals;

pub fn render_totals(totals: &Totals) -> String {
    let balance = if totals.balance < Decimal::ZERO {
        format!("-{} (deficit)", format_currency(totals.balance))
    } else {
        format_currency(totals.balance)
    };

    format!(
        "Income: {}\nExpense: {}\nBalance: {balance}",
        format_currency(totals.income),
        format_currency(totals.expense),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_positive_balance() {
        let totals = Totals {
            income: Decimal::new(50, 0),
            expense: Decimal::new(10, 0),
            balance: Decimal::new(40, 0),
        };

        assert_eq!(render_totals(&totals), "Income: $50.00\nExpense: $10.00\nBalance: $40.00");
    }

    #[test]
    fn test_render_deficit() {
        let totals = Totals {
            income: Decimal::ZERO,
            expense: Decimal::new(1250, 0),
            balance: Decimal::new(-1250, 0),
        };

        assert!(render_totals(&totals).ends_with("Balance: -$1,250.00 (deficit)"));
    }
}
