use std::fmt;

/// Lifecycle of a holder's slot.
///
/// The only transition is `Uninitialized -> Initialized`, taken by the first
/// `obtain`. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolderState {
    /// The slot is empty.
    Uninitialized,
    /// The slot holds the instance and its payload.
    Initialized,
}

impl HolderState {
    pub fn is_initialized(self) -> bool {
        matches!(self, HolderState::Initialized)
    }
}

impl fmt::Display for HolderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolderState::Uninitialized => write!(f, "uninitialized"),
            HolderState::Initialized => write!(f, "initialized"),
        }
    }
}
