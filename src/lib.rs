//! # Singleton Holder
//!
//! Thread-safe holders that hand out exactly one shared instance per process.
//! The first `obtain` creates the instance with the offered payload; every
//! later `obtain` returns that same instance and drops the value it was offered.
//!
//! ## Quick Start
//!
//! ```rust
//! use singleton_holder::{define_singleton, Singleton};
//!
//! define_singleton!(greeting, String);
//!
//! let first = greeting::obtain("First instance".to_string());
//! let second = greeting::obtain("Second instance".to_string());
//!
//! assert!(Singleton::same(&first, &second));
//! assert_eq!(second.value(), "First instance");
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: creation is a single critical section, concurrent first calls create one instance
//! - **First write wins**: the payload is fixed by the first `obtain` and never replaced
//! - **Isolated**: every `define_singleton!` holder has its own slot
//! - **Tracing support**: per-holder callback, plus the `log` facade behind the `log` feature
//!
//! ## Main API
//!
//! - [`define_singleton!`] - Declare a named holder for a payload type
//! - [`HolderApi`] - The trait behind every holder, for hand-written statics
//! - [`Singleton`] - The shared instance and its payload
//! - [`HolderState`] - `Uninitialized` / `Initialized`
//! - [`HolderEvent`] - Events passed to the trace callback

mod holder_error;
mod holder_event;
mod holder_state;
mod holder_trait;
mod macros;
mod singleton;

pub use holder_error::HolderError;
pub use holder_event::HolderEvent;
pub use holder_state::HolderState;
pub use holder_trait::{HolderApi, Slot, TraceCallback};
pub use singleton::Singleton;
