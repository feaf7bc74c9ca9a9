//a Rust-based metrics engine for a personal trading dashboard

pub mod config;
pub mod data;
pub mod metrics;

//prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{CalendarView, ReportConfiguration};
    pub use crate::data::{
        load_cash_json, load_daily_pnl_csv, load_financials_csv, load_trades_csv,
        load_transactions_csv, CashSnapshot, DailyPnlEntry, FinancialEntry, Trade, Transaction,
        TransactionType,
    };
    pub use crate::metrics::{
        absolute_return, available_cash, average_days_in_trade, average_loss, average_win,
        cash_balance, count_losers, count_trades, count_winners, current_month_groups,
        current_networth, current_week_entries, initial_cash, initial_networth,
        month_of_year_buckets, net_pl, networth_difference, networth_percent_change,
        period_transaction_totals, previous_networth, risk_reward_ratio, roi, sharpe_ratio,
        standard_deviation, total_deposits, total_withdrawals, win_rate, year_buckets,
        DashboardSummary, PeriodBucket, PeriodTotals,
    };
}
