use crate::models::{DayCategory, DayDetailResponse, ResponseKind, VoteEntry};
use std::collections::BTreeMap;

/// Collapses one day's votes into its display category.
///
/// Priority is fixed and total: No > IfNeedBe > Yes > Empty. A single
/// `no` outranks any number of other responses, and `if-need-be`
/// outranks `yes`, regardless of entry order or counts.
pub fn categorize(entries: &[&VoteEntry]) -> DayCategory {
    if entries.is_empty() {
        return DayCategory::Empty;
    }
    if entries.iter().any(|e| e.response == ResponseKind::No) {
        return DayCategory::Red;
    }
    if entries.iter().any(|e| e.response == ResponseKind::IfNeedBe) {
        return DayCategory::Yellow;
    }
    // Only Yes entries can remain.
    DayCategory::Green
}

/// Per-date categories for one visible month. Entries are matched by
/// their `YYYY-MM` string prefix, grouped by date, and categorized per
/// group. Pure function of its inputs, recomputed on every read.
pub fn monthly_categories(
    entries: &[VoteEntry],
    year: i32,
    month0: u32,
) -> BTreeMap<String, DayCategory> {
    let prefix = format!("{year:04}-{:02}", month0 + 1);
    let mut grouped: BTreeMap<&str, Vec<&VoteEntry>> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.date.starts_with(&prefix)) {
        grouped.entry(&entry.date).or_default().push(entry);
    }
    grouped
        .into_iter()
        .map(|(date, group)| (date.to_string(), categorize(&group)))
        .collect()
}

/// Groups one date's responses into Yes / If Need Be / No name lists,
/// keeping store order inside each column.
pub fn day_detail(date: &str, entries: &[&VoteEntry]) -> DayDetailResponse {
    let mut detail = DayDetailResponse {
        date: date.to_string(),
        ..DayDetailResponse::default()
    };
    for entry in entries {
        let column = match entry.response {
            ResponseKind::Yes => &mut detail.yes,
            ResponseKind::IfNeedBe => &mut detail.if_need_be,
            ResponseKind::No => &mut detail.no,
        };
        column.push(entry.voter_name.clone());
    }
    detail
}
