use crate::data::records::FinancialEntry;

//net worth metrics: compare the latest and prior financial entries in
//chronological order by entry_date, never insertion order

fn sorted_by_date(entries: &[FinancialEntry]) -> Vec<&FinancialEntry> {
    let mut sorted: Vec<&FinancialEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.entry_date);
    sorted
}

//net worth of the earliest entry; 0 when empty
pub fn initial_networth(entries: &[FinancialEntry]) -> f64 {
    sorted_by_date(entries)
        .first()
        .map(|entry| entry.networth)
        .unwrap_or(0.0)
}

//net worth of the second-to-last entry
//falls back to the initial net worth when fewer than 2 entries exist
pub fn previous_networth(entries: &[FinancialEntry]) -> f64 {
    if entries.len() < 2 {
        return initial_networth(entries);
    }

    let sorted = sorted_by_date(entries);
    sorted[sorted.len() - 2].networth
}

//net worth of the latest entry; 0 when empty
pub fn current_networth(entries: &[FinancialEntry]) -> f64 {
    sorted_by_date(entries)
        .last()
        .map(|entry| entry.networth)
        .unwrap_or(0.0)
}

//current minus previous
pub fn networth_difference(previous: f64, current: f64) -> f64 {
    current - previous
}

//percent change from previous to current; 0 when previous is 0
pub fn networth_percent_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}
