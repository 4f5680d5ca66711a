/// Events emitted by a holder during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`,
/// and to the `log` facade at trace level when the `log` feature is enabled.
///
/// # Examples
///
/// ```rust
/// use singleton_holder::HolderEvent;
///
/// let event = HolderEvent::Create { type_name: "i32" };
/// assert_eq!(event.to_string(), "create { type_name: i32 }");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum HolderEvent {
    /// The instance was created by this call. Emitted once per holder.
    Create {
        /// The payload type (e.g., "i32", "alloc::string::String")
        type_name: &'static str,
    },

    /// `obtain` was called.
    Obtain {
        /// The payload type
        type_name: &'static str,
        /// `false` when the instance already existed and the offered value was dropped
        created: bool,
    },

    /// The instance was requested without offering a payload.
    Get {
        /// The payload type
        type_name: &'static str,
        /// Whether the instance exists
        found: bool,
    },

    /// An initialization check was performed.
    Contains {
        /// The payload type
        type_name: &'static str,
        /// Whether the instance exists
        found: bool,
    },
}

impl std::fmt::Display for HolderEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolderEvent::Create { type_name } => {
                write!(f, "create {{ type_name: {type_name} }}")
            }
            HolderEvent::Obtain { type_name, created } => {
                write!(f, "obtain {{ type_name: {type_name}, created: {created} }}")
            }
            HolderEvent::Get { type_name, found } => {
                write!(f, "get {{ type_name: {type_name}, found: {found} }}")
            }
            HolderEvent::Contains { type_name, found } => {
                write!(f, "contains {{ type_name: {type_name}, found: {found} }}")
            }
        }
    }
}
