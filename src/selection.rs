use crate::models::ResponseKind;
use serde::Serialize;

/// Interaction state for the calendar page: whether vote mode is on,
/// which response is armed, and which date's detail card is open.
/// A date is only selected for viewing while vote mode is off, and
/// arming a response dismisses any open card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub vote_mode_active: bool,
    pub active_vote_choice: Option<ResponseKind>,
    pub selected_date: Option<String>,
}

/// What a day click meant under the current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Vote mode with an armed response: record this vote.
    Vote(ResponseKind),
    /// Vote mode without an armed response: clicking is inert.
    Ignored,
    /// Viewing mode: the detail card for this date opened.
    Selected(String),
    /// Viewing mode: the open card for this date closed.
    Deselected,
}

impl SelectionState {
    /// Enters or leaves vote mode. Leaving always resets both the armed
    /// response and any open detail card.
    pub fn toggle_vote_mode(&mut self) {
        if self.vote_mode_active {
            self.vote_mode_active = false;
            self.active_vote_choice = None;
            self.selected_date = None;
        } else {
            self.vote_mode_active = true;
        }
    }

    /// Arms a response for subsequent day clicks. Inert while vote mode
    /// is off; dismisses a pending detail card.
    pub fn choose_vote_type(&mut self, kind: ResponseKind) {
        if !self.vote_mode_active {
            return;
        }
        self.active_vote_choice = Some(kind);
        self.selected_date = None;
    }

    /// Resolves a day click. In vote mode the selection is left alone:
    /// voting and detail-viewing are mutually exclusive interactions.
    /// In viewing mode the click toggles the detail card open or closed.
    pub fn click_date(&mut self, date: &str) -> ClickOutcome {
        if self.vote_mode_active {
            return match self.active_vote_choice {
                Some(kind) => ClickOutcome::Vote(kind),
                None => ClickOutcome::Ignored,
            };
        }
        if self.selected_date.as_deref() == Some(date) {
            self.selected_date = None;
            ClickOutcome::Deselected
        } else {
            self.selected_date = Some(date.to_string());
            ClickOutcome::Selected(date.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_returns_to_a_clean_viewing_state() {
        let mut selection = SelectionState::default();
        selection.toggle_vote_mode();
        selection.choose_vote_type(ResponseKind::Yes);
        selection.toggle_vote_mode();

        assert_eq!(selection, SelectionState::default());
    }

    #[test]
    fn leaving_vote_mode_clears_choice_and_selection() {
        let mut selection = SelectionState {
            vote_mode_active: true,
            active_vote_choice: Some(ResponseKind::No),
            selected_date: Some("2025-12-22".into()),
        };
        selection.toggle_vote_mode();

        assert!(!selection.vote_mode_active);
        assert_eq!(selection.active_vote_choice, None);
        assert_eq!(selection.selected_date, None);
    }

    #[test]
    fn choosing_a_response_requires_vote_mode() {
        let mut selection = SelectionState::default();
        selection.choose_vote_type(ResponseKind::Yes);
        assert_eq!(selection.active_vote_choice, None);

        selection.toggle_vote_mode();
        selection.choose_vote_type(ResponseKind::Yes);
        assert_eq!(selection.active_vote_choice, Some(ResponseKind::Yes));
    }

    #[test]
    fn choosing_a_response_dismisses_an_open_card() {
        let mut selection = SelectionState::default();
        selection.click_date("2025-12-18");
        assert_eq!(selection.selected_date.as_deref(), Some("2025-12-18"));

        selection.toggle_vote_mode();
        selection.choose_vote_type(ResponseKind::IfNeedBe);
        assert_eq!(selection.selected_date, None);
    }

    #[test]
    fn armed_click_yields_a_vote_and_leaves_selection_alone() {
        let mut selection = SelectionState::default();
        selection.toggle_vote_mode();
        selection.choose_vote_type(ResponseKind::Yes);

        let outcome = selection.click_date("2025-12-21");
        assert_eq!(outcome, ClickOutcome::Vote(ResponseKind::Yes));
        assert_eq!(selection.selected_date, None);
    }

    #[test]
    fn unarmed_click_in_vote_mode_is_inert() {
        let mut selection = SelectionState::default();
        selection.toggle_vote_mode();

        let outcome = selection.click_date("2025-12-21");
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(selection.selected_date, None);
    }

    #[test]
    fn viewing_click_toggles_the_detail_card() {
        let mut selection = SelectionState::default();

        let opened = selection.click_date("2025-12-18");
        assert_eq!(opened, ClickOutcome::Selected("2025-12-18".into()));
        assert_eq!(selection.selected_date.as_deref(), Some("2025-12-18"));

        let closed = selection.click_date("2025-12-18");
        assert_eq!(closed, ClickOutcome::Deselected);
        assert_eq!(selection.selected_date, None);
    }

    #[test]
    fn clicking_a_different_date_moves_the_card() {
        let mut selection = SelectionState::default();
        selection.click_date("2025-12-18");

        let outcome = selection.click_date("2025-12-20");
        assert_eq!(outcome, ClickOutcome::Selected("2025-12-20".into()));
        assert_eq!(selection.selected_date.as_deref(), Some("2025-12-20"));
    }
}
