use crate::models::{
    ResponseKind,
    ResponseKind::{IfNeedBe, No, Yes},
    VoteEntry,
};
use crate::month::CalendarView;
use crate::store::VoteStore;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::{error, info};

/// Optional path to a JSON seed file (an array of vote entries),
/// supplied by the environment.
pub fn resolve_seed_path() -> Option<PathBuf> {
    env::var("DATE_POLL_SEED").ok().map(PathBuf::from)
}

/// Loads the initial vote feed. With no seed path configured, or when
/// the file cannot be read or parsed, falls back to the built-in sample
/// fixture for the visible month.
pub async fn load_votes(path: Option<&Path>, view: &CalendarView) -> VoteStore {
    let Some(path) = path else {
        return sample_votes(view);
    };
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Vec<VoteEntry>>(&bytes) {
            Ok(entries) => {
                info!("loaded {} seed votes from {}", entries.len(), path.display());
                VoteStore::from_entries(entries)
            }
            Err(err) => {
                error!("failed to parse seed file: {err}");
                sample_votes(view)
            }
        },
        Err(err) => {
            error!("failed to read seed file: {err}");
            sample_votes(view)
        }
    }
}

/// Sample votes pinned to the visible month so the grid shows every
/// category on first load: mixed days where a lone `no` wins, an
/// if-need-be day, all-yes days, and a crowded day for the detail card.
const SAMPLE: &[(u32, &str, ResponseKind)] = &[
    // Yes + No + IfNeedBe together: the no wins.
    (1, "PersonA", Yes),
    (1, "PersonB", No),
    (1, "PersonC", IfNeedBe),
    // Yes + No: still red.
    (2, "PersonD", Yes),
    (2, "PersonE", No),
    // Yes + IfNeedBe: yellow.
    (3, "PersonF", Yes),
    (3, "PersonG", IfNeedBe),
    // All yes: green.
    (4, "PersonH", Yes),
    (4, "PersonI", Yes),
    (5, "PersonP", Yes),
    // Lone if-need-be and lone no days.
    (12, "PersonQ", IfNeedBe),
    (18, "PersonR", No),
    // Heavily if-need-be day with one yes and one no.
    (6, "PersonS", IfNeedBe),
    (6, "PersonT", IfNeedBe),
    (6, "PersonU", IfNeedBe),
    (6, "PersonV", IfNeedBe),
    (6, "PersonW", IfNeedBe),
    (6, "PersonX", IfNeedBe),
    (6, "PersonY", IfNeedBe),
    (6, "PersonZ", IfNeedBe),
    (6, "PersonAA", IfNeedBe),
    (6, "PersonBB", IfNeedBe),
    (6, "PersonCC", Yes),
    (6, "PersonDD", No),
    // Crowded day for the three-column detail card.
    (20, "PersonJ", Yes),
    (20, "PersonK", Yes),
    (20, "PersonL", IfNeedBe),
    (20, "PersonM", No),
    (20, "PersonN", Yes),
    (20, "PersonO", IfNeedBe),
    // A very long voter name next to a no voter.
    (7, "PersonWithAJokeNameThatsLongAndTryingToBreakThings", IfNeedBe),
    (7, "PersonEE", No),
];

pub fn sample_votes(view: &CalendarView) -> VoteStore {
    let mut store = VoteStore::new();
    for (day, voter, response) in SAMPLE {
        store.upsert(view.date_string(*day), *voter, *response);
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate;
    use crate::models::DayCategory;

    #[test]
    fn sample_votes_land_in_the_given_month() {
        let view = CalendarView { year: 2025, month0: 11 };
        let store = sample_votes(&view);

        assert!(store
            .entries()
            .iter()
            .all(|entry| entry.date.starts_with("2025-12")));
    }

    #[test]
    fn sample_votes_cover_every_category() {
        let view = CalendarView { year: 2025, month0: 11 };
        let store = sample_votes(&view);
        let categories = aggregate::monthly_categories(store.entries(), 2025, 11);

        assert_eq!(categories.get("2025-12-01"), Some(&DayCategory::Red));
        assert_eq!(categories.get("2025-12-03"), Some(&DayCategory::Yellow));
        assert_eq!(categories.get("2025-12-04"), Some(&DayCategory::Green));
        assert_eq!(categories.get("2025-12-06"), Some(&DayCategory::Red));
        assert_eq!(categories.get("2025-12-31"), None);
    }
}
