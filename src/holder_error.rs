use std::fmt;

/// Errors returned by the read-only holder accessors.
///
/// `obtain` never fails; only `get`, `value_cloned` and `is_initialized`
/// surface these.
#[derive(Debug, PartialEq)]
pub enum HolderError {
    HolderLock,
    NotInitialized { type_name: &'static str },
}

impl fmt::Display for HolderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolderError::HolderLock => write!(f, "Failed to acquire holder lock"),
            HolderError::NotInitialized { type_name } => {
                write!(f, "Singleton not initialized: {type_name}")
            }
        }
    }
}

impl std::error::Error for HolderError {}
