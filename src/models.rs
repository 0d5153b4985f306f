use serde::{Deserialize, Serialize};

use crate::selection::SelectionState;

/// A single voter's recorded availability for a single date.
/// Replaced wholesale on revote, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteEntry {
    pub date: String,
    pub voter_name: String,
    pub response: ResponseKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseKind {
    Yes,
    No,
    IfNeedBe,
}

/// Aggregated color class for one day, derived from its votes on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayCategory {
    Empty,
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Deserialize)]
pub struct StepRequest {
    pub delta: i32,
}

#[derive(Debug, Deserialize)]
pub struct VoteChoiceRequest {
    pub response: ResponseKind,
}

#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub date: String,
    pub voter: String,
}

/// One slot of the 7-column month grid. Leading placeholder slots before
/// day 1 carry no day number and stay in the `Empty` category.
#[derive(Debug, Serialize)]
pub struct GridCell {
    pub day: Option<u32>,
    pub date: Option<String>,
    pub category: DayCategory,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month0: u32,
    pub label: String,
    pub today: String,
    pub cells: Vec<GridCell>,
    pub selection: SelectionState,
}

/// Voter names for one date, grouped by response kind for the
/// three-column detail card.
#[derive(Debug, Default, Serialize)]
pub struct DayDetailResponse {
    pub date: String,
    pub yes: Vec<String>,
    pub if_need_be: Vec<String>,
    pub no: Vec<String>,
}
