use crate::data::records::{
    CashSnapshot, DailyPnlEntry, FinancialEntry, Trade, Transaction, TransactionType,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use log::warn;
use serde::Deserialize;
use std::path::Path;

//coerces a raw field to a number
//empty fields coerce to 0, unparseable fields to NaN which propagates
//through the metrics unless an explicit zero-guard intercepts it
fn coerce_number(raw: &str, field: &str, line: usize) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            warn!("unparseable {} '{}' at line {}, coercing to NaN", field, raw, line);
            f64::NAN
        }
    }
}

//coerces a raw field to an optional date
//empty and unparseable fields both yield None; the record stays in the
//collection and date-dependent metrics skip it
fn coerce_date(raw: &str, field: &str, line: usize) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            warn!("unparseable {} '{}' at line {}, skipping date", field, raw, line);
            None
        }
    }
}

#[derive(Debug, Deserialize)]
struct TradeCsvRecord {
    entry_price: String,
    #[serde(default)]
    exit_price: String,
    #[serde(default)]
    entry_date: String,
    #[serde(default)]
    close_date: String,
    contracts: String,
    #[serde(default)]
    profit_loss: String,
    #[serde(default)]
    roi: String,
}

//loads trades from a csv file
pub fn load_trades_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Trade>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(format!("Failed to open trades CSV file: {:?}", path))?;

    let mut trades = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let line = index + 2;
        let record: TradeCsvRecord =
            result.context(format!("Failed to parse trade record at line {}", line))?;

        let exit_price = {
            let trimmed = record.exit_price.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(coerce_number(trimmed, "exit_price", line))
            }
        };

        let trade = Trade::new_unchecked(
            coerce_number(&record.entry_price, "entry_price", line),
            exit_price,
            coerce_date(&record.entry_date, "entry_date", line),
            coerce_date(&record.close_date, "close_date", line),
            coerce_number(&record.contracts, "contracts", line),
            coerce_number(&record.profit_loss, "profit_loss", line),
            coerce_number(&record.roi, "roi", line),
        );

        trades.push(trade);
    }

    //sort by entry date to ensure chronological order; undated trades sort first
    trades.sort_by_key(|trade| trade.entry_date);

    Ok(trades)
}

#[derive(Debug, Deserialize)]
struct TransactionCsvRecord {
    transaction_type: String,
    amount: String,
    #[serde(default)]
    transaction_date: String,
}

//loads transactions from a csv file
//records with an unknown transaction type are skipped with a diagnostic
pub fn load_transactions_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(format!("Failed to open transactions CSV file: {:?}", path))?;

    let mut transactions = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let line = index + 2;
        let record: TransactionCsvRecord =
            result.context(format!("Failed to parse transaction record at line {}", line))?;

        let Some(transaction_type) = TransactionType::parse(&record.transaction_type) else {
            warn!(
                "unknown transaction type '{}' at line {}, skipping record",
                record.transaction_type, line
            );
            continue;
        };

        transactions.push(Transaction {
            transaction_type,
            amount: coerce_number(&record.amount, "amount", line),
            transaction_date: coerce_date(&record.transaction_date, "transaction_date", line),
        });
    }

    transactions.sort_by_key(|transaction| transaction.transaction_date);

    Ok(transactions)
}

#[derive(Debug, Deserialize)]
struct DailyPnlCsvRecord {
    entry_date: String,
    #[serde(default)]
    balance: String,
    #[serde(default)]
    open_cash: String,
    #[serde(default)]
    close_cash: String,
}

//loads daily p&l entries from a csv file
//entries without a parseable date are skipped with a diagnostic since every
//calendar rollup keys off the date
pub fn load_daily_pnl_csv<P: AsRef<Path>>(path: P) -> Result<Vec<DailyPnlEntry>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(format!("Failed to open daily P&L CSV file: {:?}", path))?;

    let mut entries = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let line = index + 2;
        let record: DailyPnlCsvRecord =
            result.context(format!("Failed to parse daily P&L record at line {}", line))?;

        let Some(entry_date) = coerce_date(&record.entry_date, "entry_date", line) else {
            warn!("daily P&L record at line {} has no valid date, skipping record", line);
            continue;
        };

        entries.push(DailyPnlEntry {
            entry_date,
            balance: coerce_number(&record.balance, "balance", line),
            open_cash: coerce_number(&record.open_cash, "open_cash", line),
            close_cash: coerce_number(&record.close_cash, "close_cash", line),
        });
    }

    entries.sort_by_key(|entry| entry.entry_date);

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct FinancialCsvRecord {
    entry_date: String,
    #[serde(default)]
    income: String,
    #[serde(default)]
    expenses: String,
    #[serde(default, alias = "NEC")]
    nec: String,
    #[serde(default, alias = "FFA")]
    ffa: String,
    #[serde(default, alias = "PLAY")]
    play: String,
    #[serde(default, alias = "LTSS")]
    ltss: String,
    #[serde(default, alias = "GIVE")]
    give: String,
    #[serde(default)]
    networth: String,
}

//loads financial entries from a csv file
pub fn load_financials_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FinancialEntry>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(format!("Failed to open financials CSV file: {:?}", path))?;

    let mut entries = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let line = index + 2;
        let record: FinancialCsvRecord =
            result.context(format!("Failed to parse financial record at line {}", line))?;

        let Some(entry_date) = coerce_date(&record.entry_date, "entry_date", line) else {
            warn!("financial record at line {} has no valid date, skipping record", line);
            continue;
        };

        entries.push(FinancialEntry {
            entry_date,
            income: coerce_number(&record.income, "income", line),
            expenses: coerce_number(&record.expenses, "expenses", line),
            nec: coerce_number(&record.nec, "NEC", line),
            ffa: coerce_number(&record.ffa, "FFA", line),
            play: coerce_number(&record.play, "PLAY", line),
            ltss: coerce_number(&record.ltss, "LTSS", line),
            give: coerce_number(&record.give, "GIVE", line),
            networth: coerce_number(&record.networth, "networth", line),
        });
    }

    entries.sort_by_key(|entry| entry.entry_date);

    Ok(entries)
}

//loads the cash snapshot (account principal) from a json file
pub fn load_cash_json<P: AsRef<Path>>(path: P) -> Result<CashSnapshot> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .context(format!("Failed to read cash snapshot file: {:?}", path))?;
    let snapshot: CashSnapshot = serde_json::from_str(&contents)
        .context(format!("Failed to parse cash snapshot file: {:?}", path))?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_trades_and_sorts_by_entry_date() {
        let file = write_temp(
            "entry_price,exit_price,entry_date,close_date,contracts,profit_loss,roi\n\
             12.0,14.0,2024-02-01,2024-02-03,2,400.0,0.16\n\
             10.0,15.0,2024-01-01,2024-01-11,1,500.0,0.5\n",
        );

        let trades = load_trades_csv(file.path()).unwrap();
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].entry_price, 10.0);
        assert_eq!(trades[0].exit_price, Some(15.0));
        assert_eq!(
            trades[0].close_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 11).unwrap())
        );
    }

    #[test]
    fn open_trade_fields_coerce_to_none() {
        let file = write_temp(
            "entry_price,exit_price,entry_date,close_date,contracts,profit_loss,roi\n\
             10.0,,2024-01-01,,1,0,0\n",
        );

        let trades = load_trades_csv(file.path()).unwrap();
        assert_eq!(trades[0].exit_price, None);
        assert_eq!(trades[0].close_date, None);
    }

    #[test]
    fn unparseable_numeric_coerces_to_nan() {
        let file = write_temp(
            "entry_price,exit_price,entry_date,close_date,contracts,profit_loss,roi\n\
             oops,15.0,2024-01-01,2024-01-02,1,0,0\n",
        );

        let trades = load_trades_csv(file.path()).unwrap();
        assert!(trades[0].entry_price.is_nan());
    }

    #[test]
    fn unknown_transaction_type_is_skipped() {
        let file = write_temp(
            "transaction_type,amount,transaction_date\n\
             deposit,100.0,2024-01-01\n\
             transfer,50.0,2024-01-02\n\
             withdrawal,25.0,2024-01-03\n",
        );

        let transactions = load_transactions_csv(file.path()).unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].transaction_type, TransactionType::Deposit);
        assert_eq!(transactions[1].transaction_type, TransactionType::Withdrawal);
    }

    #[test]
    fn daily_pnl_without_date_is_skipped() {
        let file = write_temp(
            "entry_date,balance,open_cash,close_cash\n\
             2024-01-02,25.0,1000.0,1025.0\n\
             not-a-date,10.0,1025.0,1035.0\n",
        );

        let entries = load_daily_pnl_csv(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].balance, 25.0);
    }

    #[test]
    fn loads_cash_snapshot_json() {
        let file = write_temp("{\"initial_cash\": 5000.0, \"entry_date\": \"2024-01-01\"}");
        let snapshot = load_cash_json(file.path()).unwrap();
        assert_eq!(snapshot.initial_cash, 5000.0);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_trades_csv("/nonexistent/trades.csv").is_err());
    }
}
