use crate::catalog::ComponentRecord;

/// Intents dispatched to the reducer.
///
/// Record-bearing variants carry a `&'static` reference into the catalog;
/// the catalog is immutable for the life of the process so the reference is
/// always valid. `…Did…` variants are completions sent back by effect tasks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    // Query
    QueryChange(String),
    QueryClear,

    // Selection
    SelectionSet(usize),

    // Action menu
    MenuOpen,
    MenuClose,

    // Clipboard / browser (async)
    CopySnippet(&'static ComponentRecord),
    CopyTag(&'static ComponentRecord),
    CopyInstallCommand(&'static ComponentRecord),
    OpenDocs(&'static ComponentRecord),
    ClipboardDidCopy(String),
    ClipboardDidError(String),
    DocsDidOpen,
    DocsDidError(String),

    // UI
    UiTerminalResize(u16, u16),

    // Global
    Tick,
    Quit,
}

impl Action {
    /// Action name for dispatch logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::QueryChange(_) => "QueryChange",
            Action::QueryClear => "QueryClear",
            Action::SelectionSet(_) => "SelectionSet",
            Action::MenuOpen => "MenuOpen",
            Action::MenuClose => "MenuClose",
            Action::CopySnippet(_) => "CopySnippet",
            Action::CopyTag(_) => "CopyTag",
            Action::CopyInstallCommand(_) => "CopyInstallCommand",
            Action::OpenDocs(_) => "OpenDocs",
            Action::ClipboardDidCopy(_) => "ClipboardDidCopy",
            Action::ClipboardDidError(_) => "ClipboardDidError",
            Action::DocsDidOpen => "DocsDidOpen",
            Action::DocsDidError(_) => "DocsDidError",
            Action::UiTerminalResize(_, _) => "UiTerminalResize",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
