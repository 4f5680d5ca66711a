//! Macros for declaring singleton holders.
//!
//! This module provides a macro-based approach to declare type-safe,
//! thread-safe singleton holders without writing the statics by hand.

/// Declares a named singleton holder with a single macro invocation.
///
/// The macro generates a module containing:
/// - Slot static (hidden)
/// - Trace callback static (hidden)
/// - An `Api` struct that implements `HolderApi`, and an `API` constant
/// - Free functions delegating to `API`
///
/// # Examples
///
/// ```rust
/// use singleton_holder::{define_singleton, Singleton};
///
/// define_singleton!(greeting, String);
///
/// let first = greeting::obtain("First instance".to_string());
/// let second = greeting::obtain("Second instance".to_string());
///
/// assert!(Singleton::same(&first, &second));
/// assert_eq!(first.value(), "First instance");
/// ```
///
/// # Multiple Holders
///
/// Each declared holder has its own slot, even for the same payload type:
///
/// ```rust
/// use singleton_holder::define_singleton;
///
/// define_singleton!(primary, u32);
/// define_singleton!(replica, u32);
///
/// primary::obtain(1);
/// replica::obtain(2);
///
/// assert_eq!(*primary::get().unwrap().value(), 1);
/// assert_eq!(*replica::get().unwrap().value(), 2);
/// ```
///
/// # Trait-Based Usage
///
/// The `API` constant exposes the full `HolderApi`, including `value_cloned`:
///
/// ```rust
/// use singleton_holder::{define_singleton, HolderApi};
///
/// define_singleton!(app_name, String);
///
/// app_name::API.obtain("demo".to_string());
/// let owned: String = app_name::API.value_cloned().unwrap();
/// assert_eq!(owned, "demo");
/// ```
///
/// # Limitations
///
/// The generated module reaches its payload type through `use super::*`, which
/// resolves to the enclosing *module*. A type declared inside a function body is
/// not visible there:
///
/// ```compile_fail
/// use singleton_holder::define_singleton;
///
/// fn local_payload() {
///     struct Local(u8);
///     define_singleton!(local, Local);
/// }
/// ```
///
/// Declare such a type at module level, or write the statics and the
/// `HolderApi` impl by hand in the same function (see `tests/without_macro.rs`).
#[macro_export]
macro_rules! define_singleton {
    ($name:ident, $payload:ty) => {
        pub mod $name {
            #[allow(unused_imports)]
            use super::*;

            use std::sync::{Arc, LazyLock, Mutex};

            // Instance slot (module-private)
            static SLOT: LazyLock<Mutex<Option<Arc<$crate::Singleton<$payload>>>>> =
                LazyLock::new(|| Mutex::new(None));

            // Trace callback storage (module-private)
            static TRACE: LazyLock<Mutex<Option<Arc<dyn Fn(&$crate::HolderEvent) + Send + Sync>>>> =
                LazyLock::new(|| Mutex::new(None));

            /// Zero-sized type that implements the holder API.
            ///
            /// All operations come from the `HolderApi` trait's default
            /// implementations. This struct only provides access to the statics.
            pub struct Api;

            impl $crate::HolderApi for Api {
                type Payload = $payload;

                fn slot() -> &'static LazyLock<Mutex<Option<Arc<$crate::Singleton<$payload>>>>> {
                    &SLOT
                }

                fn trace() -> &'static LazyLock<Mutex<Option<Arc<dyn Fn(&$crate::HolderEvent) + Send + Sync>>>> {
                    &TRACE
                }
            }

            /// Convenient constant for trait-based access.
            pub const API: Api = Api;

            /// Return the one instance, creating it with `value` on the first call.
            pub fn obtain(value: $payload) -> Arc<$crate::Singleton<$payload>> {
                use $crate::HolderApi;
                API.obtain(value)
            }

            /// Retrieve the instance without offering a payload.
            pub fn get() -> Result<Arc<$crate::Singleton<$payload>>, $crate::HolderError> {
                use $crate::HolderApi;
                API.get()
            }

            /// Check whether the instance has been created.
            pub fn is_initialized() -> Result<bool, $crate::HolderError> {
                use $crate::HolderApi;
                API.is_initialized()
            }

            /// Current state of the holder.
            pub fn state() -> $crate::HolderState {
                use $crate::HolderApi;
                API.state()
            }

            /// Set a tracing callback for holder operations.
            pub fn set_trace_callback(callback: impl Fn(&$crate::HolderEvent) + Send + Sync + 'static) {
                use $crate::HolderApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::HolderApi;
                API.clear_trace_callback()
            }
        }
    };
}
