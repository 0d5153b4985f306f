use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/calendar/step", post(handlers::step_month))
        .route("/api/vote-mode/toggle", post(handlers::toggle_vote_mode))
        .route("/api/vote-mode/choice", post(handlers::choose_vote_type))
        .route("/api/day/click", post(handlers::click_day))
        .route("/api/day/:date", get(handlers::day_detail))
        .with_state(state)
}
