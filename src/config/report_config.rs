use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

//calendar rollup view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarView {
    Week,
    Month,
    Year,
    Decade,
}

impl CalendarView {
    //parse calendar view from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "week" | "weekly" => Some(CalendarView::Week),
            "month" | "monthly" => Some(CalendarView::Month),
            "year" | "yearly" => Some(CalendarView::Year),
            "decade" => Some(CalendarView::Decade),
            _ => None,
        }
    }
}

//complete report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfiguration {
    //record files
    pub trades_csv: Option<PathBuf>,
    pub transactions_csv: Option<PathBuf>,
    pub daily_pnl_csv: Option<PathBuf>,
    pub financials_csv: Option<PathBuf>,
    pub cash_json: Option<PathBuf>,

    //reference date for "current" week and month rollups; defaults to today
    pub as_of: Option<NaiveDate>,

    //optional output path
    pub output_summary_json: Option<PathBuf>,
}

impl Default for ReportConfiguration {
    fn default() -> Self {
        ReportConfiguration {
            trades_csv: Some(PathBuf::from("trades.csv")),
            transactions_csv: Some(PathBuf::from("transactions.csv")),
            daily_pnl_csv: Some(PathBuf::from("daily_pnl.csv")),
            financials_csv: Some(PathBuf::from("financials.csv")),
            cash_json: Some(PathBuf::from("cash.json")),
            as_of: None,
            output_summary_json: None,
        }
    }
}

impl ReportConfiguration {
    //load configuration from a JSON file
    pub fn from_json_file(path: &PathBuf) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ReportConfiguration = serde_json::from_str(&contents)?;
        Ok(config)
    }

    //save configuration to a JSON file
    pub fn to_json_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn calendar_view_parsing() {
        assert_eq!(CalendarView::parse("week"), Some(CalendarView::Week));
        assert_eq!(CalendarView::parse("Monthly"), Some(CalendarView::Month));
        assert_eq!(CalendarView::parse("decade"), Some(CalendarView::Decade));
        assert_eq!(CalendarView::parse("fortnight"), None);
    }

    #[test]
    fn configuration_round_trips_through_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        let config = ReportConfiguration {
            as_of: NaiveDate::from_ymd_opt(2024, 6, 12),
            ..ReportConfiguration::default()
        };
        config.to_json_file(&path).unwrap();

        let loaded = ReportConfiguration::from_json_file(&path).unwrap();
        assert_eq!(loaded.as_of, config.as_of);
        assert_eq!(loaded.trades_csv, config.trades_csv);
    }
}
