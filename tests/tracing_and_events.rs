//! Integration tests for tracing and event monitoring.
//!
//! The trace callback is how a holder reports creation and the silent discard
//! of later payloads.

use singleton_holder::{define_singleton, HolderEvent};
use std::sync::{Arc, Mutex};

fn collector() -> (
    Arc<Mutex<Vec<String>>>,
    impl Fn(&HolderEvent) + Send + Sync + 'static,
) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();
    let callback = move |event: &HolderEvent| {
        events_clone.lock().unwrap().push(format!("{}", event));
    };
    (events, callback)
}

#[test]
fn test_basic_tracing() {
    define_singleton!(traced1, i32);

    let (events, callback) = collector();
    traced1::set_trace_callback(callback);

    traced1::obtain(42);
    let _ = traced1::get().unwrap();
    let _ = traced1::is_initialized();

    let captured = events.lock().unwrap();
    assert_eq!(
        *captured,
        vec![
            "create { type_name: i32 }",
            "obtain { type_name: i32, created: true }",
            "get { type_name: i32, found: true }",
            "contains { type_name: i32, found: true }",
        ]
    );
}

#[test]
fn test_create_emitted_once() {
    define_singleton!(traced2, u32);

    let (events, callback) = collector();
    traced2::set_trace_callback(callback);

    traced2::obtain(1);
    traced2::obtain(2);
    traced2::obtain(3);

    let captured = events.lock().unwrap();
    let creates = captured.iter().filter(|e| e.starts_with("create")).count();
    let discards = captured
        .iter()
        .filter(|e| e.contains("created: false"))
        .count();

    assert_eq!(creates, 1);
    assert_eq!(discards, 2);

    traced2::clear_trace_callback();
}

#[test]
fn test_trace_get_found_and_not_found() {
    define_singleton!(traced3, i64);

    let (events, callback) = collector();
    traced3::set_trace_callback(callback);

    let _ = traced3::get();
    traced3::obtain(123);
    let _ = traced3::get();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 4);
    assert_eq!(captured[0], "get { type_name: i64, found: false }");
    assert_eq!(captured[3], "get { type_name: i64, found: true }");

    traced3::clear_trace_callback();
}

#[test]
fn test_state_is_not_traced() {
    define_singleton!(traced4, bool);

    let (events, callback) = collector();
    traced4::set_trace_callback(callback);

    let _ = traced4::state();
    traced4::obtain(true);
    let _ = traced4::state();

    assert_eq!(events.lock().unwrap().len(), 2);

    traced4::clear_trace_callback();
}

#[test]
fn test_clear_trace_callback() {
    define_singleton!(traced5, u8);

    let (events, callback) = collector();
    traced5::set_trace_callback(callback);

    traced5::obtain(1);

    traced5::clear_trace_callback();

    traced5::obtain(2);
    let _ = traced5::get().unwrap();

    // create + obtain from the first call only
    assert_eq!(events.lock().unwrap().len(), 2);
}

#[test]
fn test_trace_callback_replacement() {
    define_singleton!(traced6, usize);

    let (events1, callback1) = collector();
    let (events2, callback2) = collector();

    traced6::set_trace_callback(callback1);
    traced6::obtain(100);

    traced6::set_trace_callback(callback2);
    traced6::obtain(200);

    assert_eq!(events1.lock().unwrap().len(), 2);
    assert_eq!(
        *events2.lock().unwrap(),
        vec!["obtain { type_name: usize, created: false }"]
    );

    traced6::clear_trace_callback();
}

#[test]
fn test_callback_can_use_same_holder() {
    define_singleton!(reentrant, String);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();

    reentrant::set_trace_callback(move |event| {
        if let HolderEvent::Create { .. } = event {
            let value = reentrant::get().map(|s| s.value().clone());
            seen_clone.lock().unwrap().push(value);
        }
    });

    reentrant::obtain("ready".to_string());

    let captured = seen.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].as_deref(), Ok("ready"));

    reentrant::clear_trace_callback();
}

#[test]
fn test_callback_can_use_different_holder() {
    define_singleton!(main_holder, i32);
    define_singleton!(first_event, String);

    main_holder::set_trace_callback(move |event| {
        first_event::obtain(format!("First event: {}", event));
    });

    main_holder::obtain(42);
    main_holder::obtain(43);

    let first = first_event::get().unwrap();
    assert_eq!(first.value(), "First event: create { type_name: i32 }");

    main_holder::clear_trace_callback();
}
