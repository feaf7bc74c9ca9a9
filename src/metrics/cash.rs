use crate::data::records::{CashSnapshot, DailyPnlEntry, Transaction, TransactionType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

//cash and roi metrics: reconcile the account principal, deposits and
//withdrawals, and accumulated daily p&l into a point-in-time balance

//the account principal; 0 when no snapshot has been recorded
pub fn initial_cash(snapshot: Option<&CashSnapshot>) -> f64 {
    snapshot.map(|s| s.initial_cash).unwrap_or(0.0)
}

//sum of deposit amounts
pub fn total_deposits(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Deposit)
        .map(|t| t.amount)
        .sum()
}

//sum of withdrawal amounts
pub fn total_withdrawals(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Withdrawal)
        .map(|t| t.amount)
        .sum()
}

//sum of signed daily p&l balances
pub fn net_pl(entries: &[DailyPnlEntry]) -> f64 {
    entries.iter().map(|entry| entry.balance).sum()
}

//initial cash + deposits - withdrawals + net p&l
pub fn available_cash(initial_cash: f64, net_pl: f64, transactions: &[Transaction]) -> f64 {
    initial_cash + total_deposits(transactions) - total_withdrawals(transactions) + net_pl
}

//alias of available_cash; both names are used at different call sites
pub fn cash_balance(initial_cash: f64, net_pl: f64, transactions: &[Transaction]) -> f64 {
    available_cash(initial_cash, net_pl, transactions)
}

//net p&l over total invested, as a percentage; 0 when nothing is invested
pub fn roi(total_invested: f64, net_pl: f64) -> f64 {
    if total_invested == 0.0 {
        return 0.0;
    }
    net_pl / total_invested * 100.0
}

//deposit and withdrawal totals over a date range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub total_deposits: f64,
    pub total_withdrawals: f64,
}

//totals the deposits and withdrawals dated within [start, end], inclusive
//transactions without a date never match a period
pub fn period_transaction_totals(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> PeriodTotals {
    let in_period: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| {
            t.transaction_date
                .map(|date| date >= start && date <= end)
                .unwrap_or(false)
        })
        .collect();

    PeriodTotals {
        total_deposits: in_period
            .iter()
            .filter(|t| t.transaction_type == TransactionType::Deposit)
            .map(|t| t.amount)
            .sum(),
        total_withdrawals: in_period
            .iter()
            .filter(|t| t.transaction_type == TransactionType::Withdrawal)
            .map(|t| t.amount)
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn transaction(kind: TransactionType, amount: f64, day: &str) -> Transaction {
        Transaction {
            transaction_type: kind,
            amount,
            transaction_date: Some(date(day)),
        }
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            transaction(TransactionType::Deposit, 1000.0, "2024-01-05"),
            transaction(TransactionType::Withdrawal, 250.0, "2024-02-10"),
            transaction(TransactionType::Deposit, 500.0, "2024-03-01"),
            transaction(TransactionType::Trade, 75.0, "2024-03-02"),
        ]
    }

    #[test]
    fn initial_cash_defaults_to_zero() {
        assert_eq!(initial_cash(None), 0.0);

        let snapshot = CashSnapshot {
            initial_cash: 5000.0,
            entry_date: Some(date("2024-01-01")),
        };
        assert_eq!(initial_cash(Some(&snapshot)), 5000.0);
    }

    #[test]
    fn deposit_and_withdrawal_totals_ignore_trade_transactions() {
        let transactions = sample_transactions();
        assert_eq!(total_deposits(&transactions), 1500.0);
        assert_eq!(total_withdrawals(&transactions), 250.0);
    }

    #[test]
    fn available_cash_reconciles_all_flows() {
        let transactions = sample_transactions();
        //5000 + 1500 - 250 + 320
        assert_eq!(available_cash(5000.0, 320.0, &transactions), 6570.0);
        assert_eq!(
            cash_balance(5000.0, 320.0, &transactions),
            available_cash(5000.0, 320.0, &transactions)
        );
    }

    #[test]
    fn net_pl_sums_daily_balances() {
        let entries = vec![
            DailyPnlEntry {
                entry_date: date("2024-01-02"),
                balance: 100.0,
                open_cash: 5000.0,
                close_cash: 5100.0,
            },
            DailyPnlEntry {
                entry_date: date("2024-01-03"),
                balance: -40.0,
                open_cash: 5100.0,
                close_cash: 5060.0,
            },
        ];
        assert_eq!(net_pl(&entries), 60.0);
    }

    #[test]
    fn roi_guards_division_by_zero() {
        assert_eq!(roi(0.0, 1234.5), 0.0);
        assert_eq!(roi(1000.0, 250.0), 25.0);
    }

    #[test]
    fn period_totals_respect_the_date_range() {
        let transactions = sample_transactions();
        let totals =
            period_transaction_totals(&transactions, date("2024-01-01"), date("2024-02-28"));
        assert_eq!(totals.total_deposits, 1000.0);
        assert_eq!(totals.total_withdrawals, 250.0);
    }

    #[test]
    fn undated_transactions_never_match_a_period() {
        let transactions = vec![Transaction {
            transaction_type: TransactionType::Deposit,
            amount: 100.0,
            transaction_date: None,
        }];
        let totals =
            period_transaction_totals(&transactions, date("2024-01-01"), date("2024-12-31"));
        assert_eq!(totals.total_deposits, 0.0);
    }
}
