use crate::data::records::DailyPnlEntry;
use chrono::{Datelike, Duration, NaiveDate};
use indexmap::IndexMap;
use serde::Serialize;

//calendar and period aggregation: bucket daily p&l entries into weekly,
//monthly, and yearly rollups for the heatmap and bar-chart views
//
//"current" week and month computations take an explicit reference date
//instead of reading the clock, so the rollups stay pure and testable

//a rollup over one calendar period
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PeriodBucket {
    //first entry's opening cash
    pub open_cash: f64,
    //last entry's closing cash
    pub close_cash: f64,
    //sum of the signed daily balances
    pub balance: f64,
    //(close - open) / open * 100, from the bucket's own open and close
    //rather than the balance sum; NaN or infinite when the open is 0
    pub roi: f64,
    pub entries: Vec<DailyPnlEntry>,
}

fn build_bucket(entries: Vec<DailyPnlEntry>) -> PeriodBucket {
    let open_cash = entries.first().map(|e| e.open_cash).unwrap_or(0.0);
    let close_cash = entries.last().map(|e| e.close_cash).unwrap_or(0.0);
    let balance = entries.iter().map(|e| e.balance).sum();
    let roi = (close_cash - open_cash) / open_cash * 100.0;

    PeriodBucket {
        open_cash,
        close_cash,
        balance,
        roi,
        entries,
    }
}

fn sorted_by_date(entries: &[DailyPnlEntry]) -> Vec<DailyPnlEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|entry| entry.entry_date);
    sorted
}

//start of the week containing the given date (weeks start on Sunday)
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

//entries falling within the week containing `today`, inclusive both ends,
//sorted ascending by date
pub fn current_week_entries(entries: &[DailyPnlEntry], today: NaiveDate) -> Vec<DailyPnlEntry> {
    let start = start_of_week(today);
    let end = start + Duration::days(6);

    let mut week: Vec<DailyPnlEntry> = entries
        .iter()
        .filter(|entry| entry.entry_date >= start && entry.entry_date <= end)
        .cloned()
        .collect();
    week.sort_by_key(|entry| entry.entry_date);
    week
}

//entries of the current month partitioned into consecutive groups of 5,
//mimicking trading weeks; the partial final group is kept
//the month number is compared without the year, as the original dashboard does
pub fn current_month_groups(
    entries: &[DailyPnlEntry],
    today: NaiveDate,
) -> Vec<Vec<DailyPnlEntry>> {
    let mut month: Vec<DailyPnlEntry> = entries
        .iter()
        .filter(|entry| entry.entry_date.month() == today.month())
        .cloned()
        .collect();
    month.sort_by_key(|entry| entry.entry_date);

    month.chunks(5).map(|group| group.to_vec()).collect()
}

//twelve buckets keyed by calendar month number, independent of year:
//entries from different years in the same month collapse together
//(preserved behavior, see DESIGN.md); empty months are omitted
pub fn month_of_year_buckets(entries: &[DailyPnlEntry]) -> IndexMap<u32, PeriodBucket> {
    let sorted = sorted_by_date(entries);
    let mut buckets = IndexMap::new();

    for month in 1..=12u32 {
        let bucket_entries: Vec<DailyPnlEntry> = sorted
            .iter()
            .filter(|entry| entry.entry_date.month() == month)
            .cloned()
            .collect();

        if !bucket_entries.is_empty() {
            buckets.insert(month, build_bucket(bucket_entries));
        }
    }

    buckets
}

//buckets keyed by calendar year, in chronological order
pub fn year_buckets(entries: &[DailyPnlEntry]) -> IndexMap<i32, PeriodBucket> {
    let sorted = sorted_by_date(entries);
    let mut groups: IndexMap<i32, Vec<DailyPnlEntry>> = IndexMap::new();

    for entry in sorted {
        groups.entry(entry.entry_date.year()).or_default().push(entry);
    }

    groups
        .into_iter()
        .map(|(year, bucket_entries)| (year, build_bucket(bucket_entries)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(day: &str, balance: f64, open_cash: f64, close_cash: f64) -> DailyPnlEntry {
        DailyPnlEntry {
            entry_date: date(day),
            balance,
            open_cash,
            close_cash,
        }
    }

    fn flat_entry(day: &str, balance: f64) -> DailyPnlEntry {
        entry(day, balance, 1000.0, 1000.0 + balance)
    }

    #[test]
    fn week_starts_on_sunday() {
        //2024-06-12 is a wednesday
        assert_eq!(start_of_week(date("2024-06-12")), date("2024-06-09"));
        assert_eq!(start_of_week(date("2024-06-09")), date("2024-06-09"));
    }

    #[test]
    fn weekly_bucket_sums_and_excludes_adjacent_weeks() {
        //week of sunday 2024-06-09 through saturday 2024-06-15
        let balances = [10.0, -5.0, 0.0, 3.0, -2.0, 1.0, 4.0];
        let mut entries: Vec<DailyPnlEntry> = balances
            .iter()
            .enumerate()
            .map(|(i, balance)| flat_entry(&format!("2024-06-{:02}", 9 + i), *balance))
            .collect();
        //adjacent-week entries must not leak in
        entries.push(flat_entry("2024-06-08", 99.0));
        entries.push(flat_entry("2024-06-16", -99.0));

        let week = current_week_entries(&entries, date("2024-06-12"));
        assert_eq!(week.len(), 7);
        assert_eq!(week.iter().map(|e| e.balance).sum::<f64>(), 11.0);
        assert_eq!(week.first().unwrap().entry_date, date("2024-06-09"));
        assert_eq!(week.last().unwrap().entry_date, date("2024-06-15"));
    }

    #[test]
    fn monthly_groups_of_five_keep_the_partial_tail() {
        let entries: Vec<DailyPnlEntry> = (1..=12)
            .map(|day| flat_entry(&format!("2024-06-{:02}", day), day as f64))
            .collect();

        let groups = current_month_groups(&entries, date("2024-06-20"));
        let sizes: Vec<usize> = groups.iter().map(|g| g.len()).collect();
        assert_eq!(sizes, vec![5, 5, 2]);

        //groups stay in date order
        assert_eq!(groups[0][0].entry_date, date("2024-06-01"));
        assert_eq!(groups[2][1].entry_date, date("2024-06-12"));
    }

    #[test]
    fn monthly_groups_ignore_other_months() {
        let entries = vec![
            flat_entry("2024-06-03", 1.0),
            flat_entry("2024-05-03", 2.0),
            flat_entry("2024-07-03", 3.0),
        ];
        let groups = current_month_groups(&entries, date("2024-06-20"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 1);
        assert_eq!(groups[0][0].balance, 1.0);
    }

    #[test]
    fn month_buckets_aggregate_open_close_and_balance() {
        let entries = vec![
            entry("2024-06-03", 50.0, 1000.0, 1050.0),
            entry("2024-06-04", -20.0, 1050.0, 1030.0),
            entry("2024-06-05", 70.0, 1030.0, 1100.0),
        ];

        let buckets = month_of_year_buckets(&entries);
        let june = buckets.get(&6).unwrap();
        assert_eq!(june.open_cash, 1000.0);
        assert_eq!(june.close_cash, 1100.0);
        assert_eq!(june.balance, 100.0);
        assert!((june.roi - 10.0).abs() < 1e-12);
        assert_eq!(june.entries.len(), 3);
    }

    #[test]
    fn month_buckets_collapse_years_with_the_same_month_number() {
        //known simplification carried over from the original dashboard
        let entries = vec![
            entry("2023-06-10", 10.0, 500.0, 510.0),
            entry("2024-06-10", 20.0, 800.0, 820.0),
        ];

        let buckets = month_of_year_buckets(&entries);
        assert_eq!(buckets.len(), 1);
        let june = buckets.get(&6).unwrap();
        assert_eq!(june.balance, 30.0);
        assert_eq!(june.open_cash, 500.0);
        assert_eq!(june.close_cash, 820.0);
    }

    #[test]
    fn month_buckets_sort_entries_before_aggregating() {
        let entries = vec![
            entry("2024-06-05", 70.0, 1030.0, 1100.0),
            entry("2024-06-03", 50.0, 1000.0, 1050.0),
        ];
        let buckets = month_of_year_buckets(&entries);
        let june = buckets.get(&6).unwrap();
        assert_eq!(june.open_cash, 1000.0);
        assert_eq!(june.close_cash, 1100.0);
    }

    #[test]
    fn year_buckets_key_by_calendar_year_in_order() {
        let entries = vec![
            entry("2024-02-01", 5.0, 2000.0, 2005.0),
            entry("2023-03-01", 10.0, 1000.0, 1010.0),
            entry("2023-09-01", -4.0, 1010.0, 1006.0),
        ];

        let buckets = year_buckets(&entries);
        let years: Vec<i32> = buckets.keys().copied().collect();
        assert_eq!(years, vec![2023, 2024]);

        let y2023 = buckets.get(&2023).unwrap();
        assert_eq!(y2023.open_cash, 1000.0);
        assert_eq!(y2023.close_cash, 1006.0);
        assert_eq!(y2023.balance, 6.0);
    }

    #[test]
    fn zero_opening_balance_yields_non_finite_roi_without_panicking() {
        let entries = vec![entry("2024-06-03", 50.0, 0.0, 50.0)];
        let buckets = month_of_year_buckets(&entries);
        assert!(!buckets.get(&6).unwrap().roi.is_finite());
    }
}
