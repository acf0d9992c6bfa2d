use crate::catalog::{self, ComponentRecord, CATALOG};

/// Transient message shown in the status bar (copy confirmations, errors).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    /// Tick count when the message appeared, for auto-dismissal.
    pub tick_shown: u32,
}

/// Application state. Owned by the runtime loop; mutated only by the reducer.
///
/// The filtered view is never stored here — it is derived from the catalog
/// and the query on demand, so it can't go stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    /// The live search query, scoped to this session.
    pub query: String,
    /// Selection index into the current filtered view.
    pub selected: usize,
    /// Whether the action menu is open for the selected row.
    pub menu_open: bool,
    pub status_message: Option<StatusMessage>,
    pub tick_count: u32,
    pub terminal_size: (u16, u16),
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            query: String::new(),
            selected: 0,
            menu_open: false,
            status_message: None,
            tick_count: 0,
            terminal_size: (80, 24),
        }
    }
}

impl AppState {
    pub fn with_query(query: String) -> Self {
        Self {
            query,
            ..Default::default()
        }
    }

    /// The current filtered view, recomputed from catalog + query.
    pub fn filtered(&self) -> Vec<&'static ComponentRecord> {
        catalog::filter(CATALOG, &self.query)
    }

    /// The record under the cursor, if the filtered view is non-empty.
    pub fn selected_record(&self) -> Option<&'static ComponentRecord> {
        self.filtered().get(self.selected).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_selects_first_record() {
        let state = AppState::default();
        assert_eq!(state.selected_record().map(|r| r.name), Some("accordion"));
    }

    #[test]
    fn test_filtered_view_tracks_query() {
        let state = AppState::with_query("badge".into());
        let view = state.filtered();
        assert_eq!(view.len(), 1);
        assert_eq!(state.selected_record().map(|r| r.name), Some("badge"));
    }

    #[test]
    fn test_selected_record_none_when_view_empty() {
        let state = AppState::with_query("zzz-nonexistent".into());
        assert!(state.selected_record().is_none());
    }
}
