pub mod aggregate;
pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod month;
pub mod seed;
pub mod selection;
pub mod store;
pub mod ui;
pub mod state;

pub use app::router;
pub use month::CalendarView;
pub use seed::{load_votes, resolve_seed_path};
pub use state::AppState;
