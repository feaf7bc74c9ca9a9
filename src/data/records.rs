use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Negative entry price: {0}")]
    NegativeEntryPrice(f64),
    #[error("Invalid contract count: {0}")]
    InvalidContracts(f64),
    #[error("Negative transaction amount: {0}")]
    NegativeAmount(f64),
    #[error("Unknown transaction type: {0}")]
    UnknownTransactionType(String),
}

//a single options trade as logged in the journal
//exit_price and close_date are absent while the trade is still open
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub entry_price: f64,
    pub exit_price: Option<f64>,
    pub entry_date: Option<NaiveDate>,
    pub close_date: Option<NaiveDate>,
    pub contracts: f64,
    pub profit_loss: f64,
    pub roi: f64,
}

impl Trade {
    //creates a new Trade with validation
    pub fn new(
        entry_price: f64,
        exit_price: Option<f64>,
        entry_date: Option<NaiveDate>,
        close_date: Option<NaiveDate>,
        contracts: f64,
        profit_loss: f64,
        roi: f64,
    ) -> Result<Self, RecordError> {
        //validate non-negative entry price
        if entry_price < 0.0 {
            return Err(RecordError::NegativeEntryPrice(entry_price));
        }

        //validate positive contract count
        if !(contracts > 0.0) {
            return Err(RecordError::InvalidContracts(contracts));
        }

        Ok(Trade {
            entry_price,
            exit_price,
            entry_date,
            close_date,
            contracts,
            profit_loss,
            roi,
        })
    }

    //creates a Trade without validation
    pub fn new_unchecked(
        entry_price: f64,
        exit_price: Option<f64>,
        entry_date: Option<NaiveDate>,
        close_date: Option<NaiveDate>,
        contracts: f64,
        profit_loss: f64,
        roi: f64,
    ) -> Self {
        Trade {
            entry_price,
            exit_price,
            entry_date,
            close_date,
            contracts,
            profit_loss,
            roi,
        }
    }

    //per-trade price excess (exit - entry)
    //NaN while the trade is open, so open trades classify as neither win nor loss
    pub fn price_change(&self) -> f64 {
        self.exit_price.unwrap_or(f64::NAN) - self.entry_price
    }
}

//the account principal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashSnapshot {
    pub initial_cash: f64,
    pub entry_date: Option<NaiveDate>,
}

//transaction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Trade,
}

impl TransactionType {
    //parse transaction type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deposit" => Some(TransactionType::Deposit),
            "withdrawal" => Some(TransactionType::Withdrawal),
            "trade" => Some(TransactionType::Trade),
            _ => None,
        }
    }
}

//a cash movement on the account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub transaction_date: Option<NaiveDate>,
}

impl Transaction {
    //creates a new Transaction with validation
    pub fn new(
        transaction_type: TransactionType,
        amount: f64,
        transaction_date: Option<NaiveDate>,
    ) -> Result<Self, RecordError> {
        //validate non-negative amount
        if amount < 0.0 {
            return Err(RecordError::NegativeAmount(amount));
        }

        Ok(Transaction {
            transaction_type,
            amount,
            transaction_date,
        })
    }
}

//one trading day's profit and loss
//balance is the signed daily p&l; close_cash - open_cash is expected to
//reconcile with balance but is not enforced
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyPnlEntry {
    pub entry_date: NaiveDate,
    pub balance: f64,
    pub open_cash: f64,
    pub close_cash: f64,
}

//a personal finance snapshot with budget category allocations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialEntry {
    pub entry_date: NaiveDate,
    pub income: f64,
    pub expenses: f64,
    #[serde(alias = "NEC")]
    pub nec: f64,
    #[serde(alias = "FFA")]
    pub ffa: f64,
    #[serde(alias = "PLAY")]
    pub play: f64,
    #[serde(alias = "LTSS")]
    pub ltss: f64,
    #[serde(alias = "GIVE")]
    pub give: f64,
    pub networth: f64,
}
