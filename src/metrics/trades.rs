use crate::data::records::Trade;
use statrs::statistics::Statistics;

//trade performance metrics
//
//every ratio and average guards its denominator and returns exactly 0 when
//the denominator is zero or the input is empty: the dashboard must always
//render a number. break-even trades (price change of exactly zero) count as
//neither winners nor losers, and open trades (no exit price) have a NaN
//price change which keeps them out of both classes while still counting
//toward the trade total.

//number of trades in the collection
pub fn count_trades(trades: &[Trade]) -> usize {
    trades.len()
}

//number of trades closed above their entry price
pub fn count_winners(trades: &[Trade]) -> usize {
    trades
        .iter()
        .filter(|trade| trade.price_change() > 0.0)
        .count()
}

//number of trades closed below their entry price
pub fn count_losers(trades: &[Trade]) -> usize {
    trades
        .iter()
        .filter(|trade| trade.price_change() < 0.0)
        .count()
}

//percentage of winning trades, in [0, 100]
pub fn win_rate(trades: &[Trade]) -> f64 {
    let total = count_trades(trades);
    if total == 0 {
        return 0.0;
    }
    count_winners(trades) as f64 / total as f64 * 100.0
}

//arithmetic mean gain over winning trades only
pub fn average_win(trades: &[Trade]) -> f64 {
    let wins: Vec<f64> = trades
        .iter()
        .map(Trade::price_change)
        .filter(|change| *change > 0.0)
        .collect();

    if wins.is_empty() {
        return 0.0;
    }
    wins.iter().sum::<f64>() / wins.len() as f64
}

//arithmetic mean loss magnitude over losing trades only
pub fn average_loss(trades: &[Trade]) -> f64 {
    let losses: Vec<f64> = trades
        .iter()
        .map(Trade::price_change)
        .filter(|change| *change < 0.0)
        .map(f64::abs)
        .collect();

    if losses.is_empty() {
        return 0.0;
    }
    losses.iter().sum::<f64>() / losses.len() as f64
}

//average win over average loss; 0 when there are no losing trades
pub fn risk_reward_ratio(trades: &[Trade]) -> f64 {
    let avg_loss = average_loss(trades);
    if avg_loss == 0.0 {
        return 0.0;
    }
    average_win(trades) / avg_loss
}

//sum of per-trade price changes
//not scaled by contract size or the x100 options multiplier; kept as the
//original dashboard computes it (see DESIGN.md)
pub fn absolute_return(trades: &[Trade]) -> f64 {
    trades.iter().map(Trade::price_change).sum()
}

//population standard deviation of per-trade price changes (divides by N)
pub fn standard_deviation(trades: &[Trade]) -> f64 {
    if trades.is_empty() {
        return 0.0;
    }

    let changes: Vec<f64> = trades.iter().map(Trade::price_change).collect();
    changes.population_std_dev()
}

//mean price change over its standard deviation
//0 when the deviation is 0, which covers empty and single-trade collections
pub fn sharpe_ratio(trades: &[Trade]) -> f64 {
    let total = count_trades(trades);
    if total == 0 {
        return 0.0;
    }

    let deviation = standard_deviation(trades);
    if deviation == 0.0 {
        return 0.0;
    }

    (absolute_return(trades) / total as f64) / deviation
}

//average holding period in days over trades with both dates present
//trades missing either date were already flagged at load time and are skipped
pub fn average_days_in_trade(trades: &[Trade]) -> f64 {
    let mut total_days = 0i64;
    let mut valid_trades = 0usize;

    for trade in trades {
        let (Some(entry), Some(close)) = (trade.entry_date, trade.close_date) else {
            continue;
        };

        total_days += (close - entry).num_days().abs();
        valid_trades += 1;
    }

    if valid_trades == 0 {
        return 0.0;
    }
    total_days as f64 / valid_trades as f64
}
