//! Core trait defining holder behavior.
//!
//! This module provides the `HolderApi` trait with default implementations for
//! once-only creation, retrieval, and tracing of a single shared instance.
//!
//! A holder owns one slot. The first `obtain` fills it with an instance carrying
//! the offered payload; every later `obtain` returns that same instance and drops
//! the value it was offered.

use std::any::type_name;
use std::sync::{Arc, LazyLock, Mutex};

use crate::{HolderError, HolderEvent, HolderState, Singleton};

/// Storage for a holder's trace callback.
///
/// Note: This type is also spelled out in the `define_singleton!` macro.
/// Keep both definitions in sync.
pub type TraceCallback = LazyLock<Mutex<Option<Arc<dyn Fn(&HolderEvent) + Send + Sync>>>>;

/// Storage for a holder's instance: empty until the first `obtain`.
pub type Slot<T> = LazyLock<Mutex<Option<Arc<Singleton<T>>>>>;

/// Core trait defining holder behavior.
///
/// Provides default implementations for all holder operations, requiring only
/// the payload type and two accessor methods (`slot` and `trace`) from the implementor.
pub trait HolderApi {
    /// The payload carried by the instance.
    type Payload: Send + Sync + 'static;

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback static.
    fn trace() -> &'static TraceCallback;

    /// Set a tracing callback for holder operations.
    ///
    /// The callback will be invoked for every holder operation (obtain, get, is_initialized).
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the trace lock is poisoned (due to a panic while holding the lock),
    /// this method automatically recovers by extracting the inner value.
    fn set_trace_callback(&self, callback: impl Fn(&HolderEvent) + Send + Sync + 'static) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    ///
    /// Does not affect the instance, only the tracing callback.
    fn clear_trace_callback(&self) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Emit a holder event to the current callback and, with the `log` feature, to `log`.
    ///
    /// Neither the trace lock nor the slot lock is held while the callback runs,
    /// so the callback may use this holder.
    ///
    /// # Panics
    ///
    /// If the callback itself panics, the panic will propagate to the caller.
    fn emit_event(&self, event: &HolderEvent) {
        #[cfg(feature = "log")]
        log::trace!(target: "singleton_holder", "{event}");

        let callback = Self::trace()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();

        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Holder
    // -------------------------------------------------------------------------------------------------

    /// Access the slot static.
    fn slot() -> &'static Slot<Self::Payload>;

    /// Return the one instance, creating it with `value` if the slot is empty.
    ///
    /// The check and the creation happen under the slot lock, so concurrent
    /// first calls create exactly one instance. When the instance already
    /// exists, `value` is dropped and the existing payload is kept.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// The slot is written at most once, and only after the instance is fully
    /// built, so a poisoned lock still guards a consistent slot and is recovered.
    fn obtain(&self, value: Self::Payload) -> Arc<Singleton<Self::Payload>> {
        let mut slot = Self::slot().lock().unwrap_or_else(|p| p.into_inner());

        let created = slot.is_none();
        let instance = slot
            .get_or_insert_with(|| Arc::new(Singleton::new(value)))
            .clone();

        drop(slot);

        let type_name = type_name::<Self::Payload>();
        if created {
            self.emit_event(&HolderEvent::Create { type_name });
        }
        self.emit_event(&HolderEvent::Obtain { type_name, created });

        instance
    }

    /// Retrieve the instance without offering a payload.
    ///
    /// # Errors
    ///
    /// - The holder has not been obtained yet
    /// - Holder lock is poisoned
    fn get(&self) -> Result<Arc<Singleton<Self::Payload>>, HolderError> {
        let instance = Self::slot()
            .lock()
            .map_err(|_| HolderError::HolderLock)?
            .clone();

        let type_name = type_name::<Self::Payload>();
        self.emit_event(&HolderEvent::Get {
            type_name,
            found: instance.is_some(),
        });

        instance.ok_or(HolderError::NotInitialized { type_name })
    }

    /// Retrieve an owned copy of the payload.
    ///
    /// # Errors
    ///
    /// Same as [`HolderApi::get`].
    fn value_cloned(&self) -> Result<Self::Payload, HolderError>
    where
        Self::Payload: Clone,
    {
        let instance = self.get()?;
        Ok(instance.value().clone())
    }

    /// Check whether the instance has been created.
    ///
    /// # Errors
    ///
    /// - Holder lock is poisoned
    fn is_initialized(&self) -> Result<bool, HolderError> {
        let found = Self::slot()
            .lock()
            .map(|slot| slot.is_some())
            .map_err(|_| HolderError::HolderLock)?;

        self.emit_event(&HolderEvent::Contains {
            type_name: type_name::<Self::Payload>(),
            found,
        });

        Ok(found)
    }

    /// Current state of the holder. Not traced.
    fn state(&self) -> HolderState {
        let slot = Self::slot().lock().unwrap_or_else(|p| p.into_inner());
        match *slot {
            Some(_) => HolderState::Initialized,
            None => HolderState::Uninitialized,
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
