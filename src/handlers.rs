use crate::aggregate;
use crate::errors::AppError;
use crate::models::{
    CalendarResponse, ClickRequest, DayCategory, DayDetailResponse, GridCell, StepRequest,
    VoteChoiceRequest,
};
use crate::selection::ClickOutcome;
use crate::state::{AppState, PollState};
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&data.view.label()))
}

pub async fn get_calendar(State(state): State<AppState>) -> Json<CalendarResponse> {
    let data = state.data.lock().await;
    Json(calendar_response(&data))
}

pub async fn step_month(
    State(state): State<AppState>,
    Json(payload): Json<StepRequest>,
) -> Result<Json<CalendarResponse>, AppError> {
    if payload.delta != 1 && payload.delta != -1 {
        return Err(AppError::bad_request("delta must be 1 or -1"));
    }

    let mut data = state.data.lock().await;
    data.view.step(payload.delta);
    Ok(Json(calendar_response(&data)))
}

pub async fn toggle_vote_mode(State(state): State<AppState>) -> Json<CalendarResponse> {
    let mut data = state.data.lock().await;
    data.selection.toggle_vote_mode();
    Json(calendar_response(&data))
}

pub async fn choose_vote_type(
    State(state): State<AppState>,
    Json(payload): Json<VoteChoiceRequest>,
) -> Result<Json<CalendarResponse>, AppError> {
    let mut data = state.data.lock().await;
    if !data.selection.vote_mode_active {
        return Err(AppError::bad_request("vote mode is not active"));
    }

    data.selection.choose_vote_type(payload.response);
    Ok(Json(calendar_response(&data)))
}

/// A day click either records a vote (vote mode, response armed) or
/// toggles the detail card (viewing mode). The voter identity comes
/// from the request; the core never assumes one.
pub async fn click_day(
    State(state): State<AppState>,
    Json(payload): Json<ClickRequest>,
) -> Result<Json<CalendarResponse>, AppError> {
    let voter = payload.voter.trim();
    if voter.is_empty() {
        return Err(AppError::bad_request("voter must not be empty"));
    }
    let date = parse_date_key(&payload.date)?;

    let mut data = state.data.lock().await;
    if let ClickOutcome::Vote(kind) = data.selection.click_date(&date) {
        data.votes.upsert(date, voter, kind);
    }
    Ok(Json(calendar_response(&data)))
}

pub async fn day_detail(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayDetailResponse>, AppError> {
    let date = parse_date_key(&date)?;
    let data = state.data.lock().await;
    Ok(Json(aggregate::day_detail(
        &date,
        &data.votes.entries_for_date(&date),
    )))
}

/// Dates enter the core only through here; anything that is not a real
/// calendar date is rejected, and accepted dates are normalized to the
/// padded `YYYY-MM-DD` key form.
fn parse_date_key(raw: &str) -> Result<String, AppError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// The whole view-model for the visible month, built under one lock so
/// a vote and the categories derived from it always land in the same
/// payload.
fn calendar_response(data: &PollState) -> CalendarResponse {
    let categories =
        aggregate::monthly_categories(data.votes.entries(), data.view.year, data.view.month0);

    let cells = data
        .view
        .grid_cells()
        .into_iter()
        .map(|slot| match slot {
            Some(day) => {
                let date = data.view.date_string(day);
                let category = categories
                    .get(&date)
                    .copied()
                    .unwrap_or(DayCategory::Empty);
                GridCell {
                    day: Some(day),
                    date: Some(date),
                    category,
                }
            }
            None => GridCell {
                day: None,
                date: None,
                category: DayCategory::Empty,
            },
        })
        .collect();

    CalendarResponse {
        year: data.view.year,
        month0: data.view.month0,
        label: data.view.label(),
        today: Local::now().date_naive().to_string(),
        cells,
        selection: data.selection.clone(),
    }
}
