pub mod loader;
pub mod records;

pub use loader::{
    load_cash_json, load_daily_pnl_csv, load_financials_csv, load_trades_csv,
    load_transactions_csv,
};
pub use records::{
    CashSnapshot, DailyPnlEntry, FinancialEntry, RecordError, Trade, Transaction, TransactionType,
};
