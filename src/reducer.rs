use crate::action::Action;
use crate::effect::{DispatchResult, Effect};
use crate::state::{AppState, StatusMessage};

/// Ticks (at 100ms) before a status message auto-dismisses.
const STATUS_DISMISS_TICKS: u32 = 30;

/// The single state-mutation point: apply an action, report whether a
/// re-render is needed and which side effects to run.
pub fn reduce(state: &mut AppState, action: Action) -> DispatchResult {
    // Auto-dismiss stale status messages (~3 seconds). Clearing one is a
    // state change in its own right, so it must force a re-render even when
    // the action below reports unchanged.
    let mut swept = false;
    if let Some(ref msg) = state.status_message {
        if state.tick_count.saturating_sub(msg.tick_shown) > STATUS_DISMISS_TICKS {
            state.status_message = None;
            swept = true;
        }
    }

    let mut result = match action {
        // Query
        Action::QueryChange(text) => {
            state.query = text;
            // A new view invalidates the old cursor position.
            state.selected = 0;
            DispatchResult::changed()
        }
        Action::QueryClear => {
            state.query.clear();
            state.selected = 0;
            DispatchResult::changed()
        }

        // Selection
        Action::SelectionSet(index) => {
            let len = state.filtered().len();
            let clamped = index.min(len.saturating_sub(1));
            if len > 0 && clamped != state.selected {
                state.selected = clamped;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Action menu
        Action::MenuOpen => {
            if state.selected_record().is_some() && !state.menu_open {
                state.menu_open = true;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }
        Action::MenuClose => {
            if state.menu_open {
                state.menu_open = false;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Clipboard / browser (async)
        Action::CopySnippet(record) => {
            state.menu_open = false;
            DispatchResult::changed_with(Effect::CopyText {
                text: record.snippet.to_string(),
                confirm: format!("✓ Copied {}", record.title),
            })
        }
        Action::CopyTag(record) => {
            state.menu_open = false;
            DispatchResult::changed_with(Effect::CopyText {
                text: record.tag(),
                confirm: "Copied component tag".to_string(),
            })
        }
        Action::CopyInstallCommand(record) => {
            state.menu_open = false;
            DispatchResult::changed_with(Effect::CopyText {
                text: record.install_command(),
                confirm: "Copied install command".to_string(),
            })
        }
        Action::OpenDocs(record) => {
            state.menu_open = false;
            DispatchResult::changed_with(Effect::OpenUrl {
                url: record.docs_url(),
            })
        }
        Action::ClipboardDidCopy(confirm) => {
            state.status_message = Some(StatusMessage {
                text: confirm,
                is_error: false,
                tick_shown: state.tick_count,
            });
            DispatchResult::changed()
        }
        Action::ClipboardDidError(error) => {
            state.status_message = Some(StatusMessage {
                text: format!("Copy failed: {}", error),
                is_error: true,
                tick_shown: state.tick_count,
            });
            DispatchResult::changed()
        }
        Action::DocsDidOpen => DispatchResult::unchanged(),
        Action::DocsDidError(error) => {
            state.status_message = Some(StatusMessage {
                text: format!("Open failed: {}", error),
                is_error: true,
                tick_shown: state.tick_count,
            });
            DispatchResult::changed()
        }

        // UI
        Action::UiTerminalResize(width, height) => {
            if state.terminal_size != (width, height) {
                state.terminal_size = (width, height);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Global
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.status_message.is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }
        Action::Quit => DispatchResult::unchanged(),
    };

    result.changed |= swept;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    fn record(name: &str) -> &'static crate::catalog::ComponentRecord {
        CATALOG.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_query_change_resets_selection() {
        let mut state = AppState::default();
        state.selected = 7;

        let result = reduce(&mut state, Action::QueryChange("bad".into()));

        assert!(result.changed);
        assert_eq!(state.query, "bad");
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_record().map(|r| r.name), Some("badge"));
    }

    #[test]
    fn test_query_clear_restores_full_view() {
        let mut state = AppState::with_query("badge".into());

        let result = reduce(&mut state, Action::QueryClear);

        assert!(result.changed);
        assert!(state.query.is_empty());
        assert_eq!(state.filtered().len(), CATALOG.len());
    }

    #[test]
    fn test_selection_clamped_to_view() {
        let mut state = AppState::with_query("badge".into());

        let result = reduce(&mut state, Action::SelectionSet(99));

        // One match, already at index 0, so nothing changed.
        assert!(!result.changed);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_selection_moves_within_view() {
        let mut state = AppState::default();

        let result = reduce(&mut state, Action::SelectionSet(3));

        assert!(result.changed);
        assert_eq!(state.selected, 3);
    }

    #[test]
    fn test_menu_requires_a_selected_record() {
        let mut state = AppState::with_query("zzz-nonexistent".into());

        let result = reduce(&mut state, Action::MenuOpen);

        assert!(!result.changed);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_menu_open_close() {
        let mut state = AppState::default();

        assert!(reduce(&mut state, Action::MenuOpen).changed);
        assert!(state.menu_open);
        assert!(reduce(&mut state, Action::MenuClose).changed);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_copy_snippet_emits_verbatim_text_effect() {
        let mut state = AppState::default();
        let accordion = record("accordion");

        let result = reduce(&mut state, Action::CopySnippet(accordion));

        assert!(result.changed);
        assert_eq!(
            result.effects,
            vec![Effect::CopyText {
                text: accordion.snippet.to_string(),
                confirm: "✓ Copied Accordion".to_string(),
            }]
        );
    }

    #[test]
    fn test_copy_tag_effect() {
        let mut state = AppState::default();

        let result = reduce(&mut state, Action::CopyTag(record("badge")));

        assert_eq!(
            result.effects,
            vec![Effect::CopyText {
                text: "<x-ui.badge>".to_string(),
                confirm: "Copied component tag".to_string(),
            }]
        );
    }

    #[test]
    fn test_copy_install_command_effect() {
        let mut state = AppState::default();

        let result = reduce(&mut state, Action::CopyInstallCommand(record("modal")));

        match &result.effects[0] {
            Effect::CopyText { text, .. } => {
                assert!(text.starts_with("php artisan sheaf:install"));
                assert!(text.contains("modal"));
            }
            other => panic!("unexpected effect: {:?}", other),
        }
    }

    #[test]
    fn test_open_docs_effect() {
        let mut state = AppState::default();

        let result = reduce(&mut state, Action::OpenDocs(record("tabs")));

        assert_eq!(
            result.effects,
            vec![Effect::OpenUrl {
                url: "https://sheafui.dev/docs/components/tabs".to_string(),
            }]
        );
    }

    #[test]
    fn test_copy_actions_close_the_menu() {
        let mut state = AppState::default();
        state.menu_open = true;

        reduce(&mut state, Action::CopySnippet(record("button")));

        assert!(!state.menu_open);
    }

    #[test]
    fn test_clipboard_ack_shows_confirmation() {
        let mut state = AppState::default();

        let result = reduce(&mut state, Action::ClipboardDidCopy("✓ Copied Badge".into()));

        assert!(result.changed);
        let msg = state.status_message.as_ref().unwrap();
        assert_eq!(msg.text, "✓ Copied Badge");
        assert!(!msg.is_error);
    }

    #[test]
    fn test_clipboard_error_shows_error_status_and_session_survives() {
        let mut state = AppState::default();

        let result = reduce(&mut state, Action::ClipboardDidError("denied".into()));

        assert!(result.changed);
        let msg = state.status_message.as_ref().unwrap();
        assert!(msg.is_error);
        assert!(msg.text.contains("denied"));
        // The list stays interactive: selection still works afterwards.
        assert!(reduce(&mut state, Action::SelectionSet(2)).changed);
    }

    #[test]
    fn test_docs_error_shows_error_status() {
        let mut state = AppState::default();

        let result = reduce(&mut state, Action::DocsDidError("no browser".into()));

        assert!(result.changed);
        let msg = state.status_message.as_ref().unwrap();
        assert!(msg.is_error);
        assert!(msg.text.contains("no browser"));
    }

    #[test]
    fn test_status_message_auto_dismisses() {
        let mut state = AppState::default();
        reduce(&mut state, Action::ClipboardDidCopy("✓ Copied Card".into()));

        for _ in 0..=STATUS_DISMISS_TICKS + 1 {
            reduce(&mut state, Action::Tick);
        }

        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_dismissing_tick_reports_changed() {
        let mut state = AppState::default();
        reduce(&mut state, Action::ClipboardDidCopy("✓ Copied Card".into()));

        let mut dismissed = false;
        for _ in 0..=STATUS_DISMISS_TICKS + 1 {
            let result = reduce(&mut state, Action::Tick);
            if state.status_message.is_none() {
                // The dispatch that cleared the message must re-render,
                // otherwise it stays painted until the next keystroke.
                assert!(result.changed);
                dismissed = true;
                break;
            }
        }
        assert!(dismissed, "status message never auto-dismissed");
    }

    #[test]
    fn test_resize_noop_when_size_unchanged() {
        let mut state = AppState::default();

        assert!(reduce(&mut state, Action::UiTerminalResize(120, 40)).changed);
        assert!(!reduce(&mut state, Action::UiTerminalResize(120, 40)).changed);
    }
}
