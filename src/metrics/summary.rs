use crate::data::records::{CashSnapshot, DailyPnlEntry, FinancialEntry, Trade, Transaction};
use crate::metrics::{cash, networth, trades};
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

//composed dashboard summary across every record collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub num_trades: usize,
    pub num_winning_trades: usize,
    pub num_losing_trades: usize,
    pub win_rate: f64,
    pub avg_win: f64,
    pub avg_loss: f64,
    pub risk_reward_ratio: f64,
    pub absolute_return: f64,
    pub std_deviation: f64,
    pub sharpe_ratio: f64,
    pub avg_days_in_trade: f64,
    pub initial_cash: f64,
    pub total_deposits: f64,
    pub total_withdrawals: f64,
    pub net_pl: f64,
    pub available_cash: f64,
    pub roi: f64,
    pub initial_networth: f64,
    pub previous_networth: f64,
    pub current_networth: f64,
    pub networth_difference: f64,
    pub networth_percent_change: f64,
}

impl DashboardSummary {
    //calculate the full summary from the record collections
    pub fn from_records(
        trade_log: &[Trade],
        snapshot: Option<&CashSnapshot>,
        transactions: &[Transaction],
        daily_pnl: &[DailyPnlEntry],
        financials: &[FinancialEntry],
    ) -> Self {
        let initial_cash = cash::initial_cash(snapshot);
        let net_pl = cash::net_pl(daily_pnl);
        let previous_networth = networth::previous_networth(financials);
        let current_networth = networth::current_networth(financials);

        DashboardSummary {
            num_trades: trades::count_trades(trade_log),
            num_winning_trades: trades::count_winners(trade_log),
            num_losing_trades: trades::count_losers(trade_log),
            win_rate: trades::win_rate(trade_log),
            avg_win: trades::average_win(trade_log),
            avg_loss: trades::average_loss(trade_log),
            risk_reward_ratio: trades::risk_reward_ratio(trade_log),
            absolute_return: trades::absolute_return(trade_log),
            std_deviation: trades::standard_deviation(trade_log),
            sharpe_ratio: trades::sharpe_ratio(trade_log),
            avg_days_in_trade: trades::average_days_in_trade(trade_log),
            initial_cash,
            total_deposits: cash::total_deposits(transactions),
            total_withdrawals: cash::total_withdrawals(transactions),
            net_pl,
            available_cash: cash::available_cash(initial_cash, net_pl, transactions),
            roi: cash::roi(initial_cash, net_pl),
            initial_networth: networth::initial_networth(financials),
            previous_networth,
            current_networth,
            networth_difference: networth::networth_difference(
                previous_networth,
                current_networth,
            ),
            networth_percent_change: networth::networth_percent_change(
                previous_networth,
                current_networth,
            ),
        }
    }

    //prints the summary in a formatted table
    pub fn pretty_print_table(&self) {
        let mut table = Table::new();

        table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

        table.add_row(Row::new(vec![
            Cell::new("Number of Trades"),
            Cell::new(&format!("{}", self.num_trades)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Wins"),
            Cell::new(&format!("{}", self.num_winning_trades)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Losses"),
            Cell::new(&format!("{}", self.num_losing_trades)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Win Rate"),
            Cell::new(&format!("{:.2}%", self.win_rate)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Avg Win"),
            Cell::new(&format!("${:.2}", self.avg_win)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Avg Loss"),
            Cell::new(&format!("${:.2}", self.avg_loss)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Risk Reward"),
            Cell::new(&format!("{:.2}", self.risk_reward_ratio)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Absolute Return"),
            Cell::new(&format!("{:.2}", self.absolute_return)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Sharpe Ratio"),
            Cell::new(&format!("{:.2}", self.sharpe_ratio)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Avg Days in Trade"),
            Cell::new(&format!("{:.0}", self.avg_days_in_trade)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Initial Cash"),
            Cell::new(&format!("${:.2}", self.initial_cash)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Total Deposits"),
            Cell::new(&format!("${:.2}", self.total_deposits)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Total Withdrawals"),
            Cell::new(&format!("${:.2}", self.total_withdrawals)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Net P&L"),
            Cell::new(&format!("${:.2}", self.net_pl)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Available Cash"),
            Cell::new(&format!("${:.2}", self.available_cash)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("RoI"),
            Cell::new(&format!("{:.2}%", self.roi)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Current Net Worth"),
            Cell::new(&format!("${:.2}", self.current_networth)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Net Worth Change"),
            Cell::new(&format!(
                "${:.2} ({:.2}%)",
                self.networth_difference, self.networth_percent_change
            )),
        ]));

        table.printstd();
    }
}
