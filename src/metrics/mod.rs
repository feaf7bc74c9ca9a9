pub mod calendar;
pub mod cash;
pub mod networth;
pub mod summary;
pub mod trades;

pub use calendar::{
    current_month_groups, current_week_entries, month_of_year_buckets, start_of_week,
    year_buckets, PeriodBucket,
};
pub use cash::{
    available_cash, cash_balance, initial_cash, net_pl, period_transaction_totals, roi,
    total_deposits, total_withdrawals, PeriodTotals,
};
pub use networth::{
    current_networth, initial_networth, networth_difference, networth_percent_change,
    previous_networth,
};
pub use summary::DashboardSummary;
pub use trades::{
    absolute_return, average_days_in_trade, average_loss, average_win, count_losers,
    count_trades, count_winners, risk_reward_ratio, sharpe_ratio, standard_deviation, win_rate,
};
