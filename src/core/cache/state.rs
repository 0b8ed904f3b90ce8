//! Entity cache load state

use std::fmt;

/// Lifecycle of the entity cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    /// Loading failed; collections are empty but views still work
    LoadFailed,
}

impl LoadState {
    /// Views can be derived in this state
    pub fn is_settled(self) -> bool {
        matches!(self, LoadState::Ready | LoadState::LoadFailed)
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoadState::Uninitialized => "uninitialized",
            LoadState::Loading => "loading",
            LoadState::Ready => "ready",
            LoadState::LoadFailed => "load_failed",
        };
        f.write_str(name)
    }
}
