//! Declarative side effects emitted by the reducer.
//!
//! Effects describe work to be done, not the work itself; the runtime hands
//! them to an effect handler which spawns the actual clipboard/browser calls
//! and feeds completions back as actions.

/// Side effects the reducer can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write `text` to the system clipboard; on acknowledgement show
    /// `confirm` in the status bar.
    CopyText { text: String, confirm: String },
    /// Open a URL in the default browser. Fire-and-forget.
    OpenUrl { url: String },
}

/// Result of dispatching an action: whether state changed (re-render needed)
/// plus any effects to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub changed: bool,
    pub effects: Vec<Effect>,
}

impl Default for DispatchResult {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl DispatchResult {
    /// No state change and no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// A single effect with no state change.
    #[inline]
    pub fn effect(effect: Effect) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed with a single effect.
    #[inline]
    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}
