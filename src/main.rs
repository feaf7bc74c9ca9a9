use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use prettytable::{Cell, Row, Table};
use std::path::PathBuf;
use tradetally::prelude::*;

#[derive(Parser)]
#[command(name = "tradetally")]
#[command(about = "A Rust-based metrics engine for a personal trading dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    //print the dashboard summary
    Report {
        //path to a json report configuration (individual flags override it)
        #[arg(long)]
        config: Option<PathBuf>,

        //path to trades csv
        #[arg(long)]
        trades: Option<PathBuf>,

        //path to transactions csv
        #[arg(long)]
        transactions: Option<PathBuf>,

        //path to daily p&l csv
        #[arg(long)]
        daily_pnl: Option<PathBuf>,

        //path to financial entries csv
        #[arg(long)]
        financials: Option<PathBuf>,

        //path to cash snapshot json
        #[arg(long)]
        cash: Option<PathBuf>,

        //output path for the summary as json
        #[arg(long)]
        output_summary_json: Option<PathBuf>,
    },

    //print calendar rollups of the daily p&l
    Calendar {
        //path to daily p&l csv
        #[arg(long)]
        daily_pnl: PathBuf,

        //rollup view (week, month, year, decade)
        #[arg(long, default_value = "year")]
        view: String,

        //reference date for week/month views (yyyy-mm-dd, defaults to today)
        #[arg(long)]
        as_of: Option<String>,

        //path to transactions csv for per-period cash-flow columns
        #[arg(long)]
        transactions: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            config,
            trades,
            transactions,
            daily_pnl,
            financials,
            cash,
            output_summary_json,
        } => {
            let mut report_config = match config {
                Some(path) => ReportConfiguration::from_json_file(&path)
                    .context(format!("Failed to load report configuration {:?}", path))?,
                None => ReportConfiguration {
                    trades_csv: None,
                    transactions_csv: None,
                    daily_pnl_csv: None,
                    financials_csv: None,
                    cash_json: None,
                    as_of: None,
                    output_summary_json: None,
                },
            };

            //flags override the configuration file
            if trades.is_some() {
                report_config.trades_csv = trades;
            }
            if transactions.is_some() {
                report_config.transactions_csv = transactions;
            }
            if daily_pnl.is_some() {
                report_config.daily_pnl_csv = daily_pnl;
            }
            if financials.is_some() {
                report_config.financials_csv = financials;
            }
            if cash.is_some() {
                report_config.cash_json = cash;
            }
            if output_summary_json.is_some() {
                report_config.output_summary_json = output_summary_json;
            }

            run_report(&report_config)?;
        }
        Commands::Calendar {
            daily_pnl,
            view,
            as_of,
            transactions,
        } => {
            run_calendar(daily_pnl, view, as_of, transactions)?;
        }
    }

    Ok(())
}

fn run_report(config: &ReportConfiguration) -> Result<()> {
    println!("Tradetally Dashboard Report");
    println!("===========================\n");

    let trades = match &config.trades_csv {
        Some(path) => load_trades_csv(path)?,
        None => Vec::new(),
    };
    let transactions = match &config.transactions_csv {
        Some(path) => load_transactions_csv(path)?,
        None => Vec::new(),
    };
    let daily_pnl = match &config.daily_pnl_csv {
        Some(path) => load_daily_pnl_csv(path)?,
        None => Vec::new(),
    };
    let financials = match &config.financials_csv {
        Some(path) => load_financials_csv(path)?,
        None => Vec::new(),
    };
    let snapshot = match &config.cash_json {
        Some(path) => Some(load_cash_json(path)?),
        None => None,
    };

    println!(
        "Loaded {} trades, {} transactions, {} daily P&L entries, {} financial entries\n",
        trades.len(),
        transactions.len(),
        daily_pnl.len(),
        financials.len()
    );

    let summary = DashboardSummary::from_records(
        &trades,
        snapshot.as_ref(),
        &transactions,
        &daily_pnl,
        &financials,
    );
    summary.pretty_print_table();

    if let Some(path) = &config.output_summary_json {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(path, json)?;
        println!("\nSummary saved to {:?}", path);
    }

    Ok(())
}

fn run_calendar(
    daily_pnl_path: PathBuf,
    view_name: String,
    as_of: Option<String>,
    transactions_path: Option<PathBuf>,
) -> Result<()> {
    let view = CalendarView::parse(&view_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown calendar view: {}", view_name))?;

    let as_of = match as_of {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .context(format!("Failed to parse --as-of date '{}'", raw))?,
        None => chrono::Local::now().date_naive(),
    };

    let entries = load_daily_pnl_csv(&daily_pnl_path)
        .context(format!("Failed to load daily P&L from {:?}", daily_pnl_path))?;
    let transactions = match &transactions_path {
        Some(path) => load_transactions_csv(path)?,
        None => Vec::new(),
    };

    println!("Tradetally Calendar ({:?} view, as of {})", view, as_of);
    println!("==========================================\n");

    match view {
        CalendarView::Week => {
            let week = current_week_entries(&entries, as_of);
            let mut table = Table::new();
            table.add_row(Row::new(vec![
                Cell::new("Date"),
                Cell::new("Open"),
                Cell::new("Close"),
                Cell::new("Balance"),
            ]));
            for entry in &week {
                table.add_row(Row::new(vec![
                    Cell::new(&entry.entry_date.to_string()),
                    Cell::new(&format!("${:.2}", entry.open_cash)),
                    Cell::new(&format!("${:.2}", entry.close_cash)),
                    Cell::new(&format!("${:.2}", entry.balance)),
                ]));
            }
            table.printstd();
        }
        CalendarView::Month => {
            let groups = current_month_groups(&entries, as_of);
            let mut table = Table::new();
            table.add_row(Row::new(vec![
                Cell::new("Trading Week"),
                Cell::new("Balance"),
            ]));
            for group in &groups {
                let balance: f64 = group.iter().map(|entry| entry.balance).sum();
                let label = format!(
                    "{} - {}",
                    group
                        .first()
                        .map(|e| e.entry_date.to_string())
                        .unwrap_or_default(),
                    group
                        .last()
                        .map(|e| e.entry_date.to_string())
                        .unwrap_or_default()
                );
                table.add_row(Row::new(vec![
                    Cell::new(&label),
                    Cell::new(&format!("${:.2}", balance)),
                ]));
            }
            table.printstd();
        }
        CalendarView::Year => {
            let buckets = month_of_year_buckets(&entries);
            print_bucket_table(
                buckets
                    .iter()
                    .map(|(month, bucket)| (month_name(*month).to_string(), bucket)),
                &transactions,
            );
        }
        CalendarView::Decade => {
            let buckets = year_buckets(&entries);
            print_bucket_table(
                buckets
                    .iter()
                    .map(|(year, bucket)| (year.to_string(), bucket)),
                &transactions,
            );
        }
    }

    Ok(())
}

fn print_bucket_table<'a, I>(buckets: I, transactions: &[Transaction])
where
    I: Iterator<Item = (String, &'a PeriodBucket)>,
{
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Period"),
        Cell::new("Open"),
        Cell::new("Close"),
        Cell::new("Balance"),
        Cell::new("RoI"),
        Cell::new("Deposits"),
        Cell::new("Withdrawals"),
    ]));

    for (label, bucket) in buckets {
        //render a fallback when the bucket opened at zero
        let roi_display = if bucket.roi.is_finite() {
            format!("{:.2}%", bucket.roi)
        } else {
            "n/a".to_string()
        };

        let totals = match (bucket.entries.first(), bucket.entries.last()) {
            (Some(first), Some(last)) => {
                period_transaction_totals(transactions, first.entry_date, last.entry_date)
            }
            _ => PeriodTotals {
                total_deposits: 0.0,
                total_withdrawals: 0.0,
            },
        };

        table.add_row(Row::new(vec![
            Cell::new(&label),
            Cell::new(&format!("${:.2}", bucket.open_cash)),
            Cell::new(&format!("${:.2}", bucket.close_cash)),
            Cell::new(&format!("${:.2}", bucket.balance)),
            Cell::new(&roi_display),
            Cell::new(&format!("${:.2}", totals.total_deposits)),
            Cell::new(&format!("${:.2}", totals.total_withdrawals)),
        ]));
    }

    table.printstd();
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
