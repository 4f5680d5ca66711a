//! Traced holder example for singleton-holder.
//!
//! Demonstrates:
//! - Watching creation and discarded payloads through the trace callback
//! - Racing first calls from several threads
//! - Reading the instance back with `get()` and `state()`
//!
//! Run with: `cargo run --example traced_holder`
//! (add `--features log` to also route events to the `log` facade)

use singleton_holder::{define_singleton, HolderEvent, Singleton};
use std::thread;

/// Settings fixed by whichever worker starts first.
#[derive(Debug)]
pub struct WorkerSettings {
    pub owner: usize,
    pub batch_size: u32,
}

define_singleton!(settings, WorkerSettings);

fn main() {
    println!("=== singleton-holder: Traced Holder ===\n");

    // -------------------------------------------------------------------------
    // 1. Install a trace callback
    // -------------------------------------------------------------------------
    println!("1. Installing trace callback...");

    settings::set_trace_callback(|event| match event {
        HolderEvent::Obtain { created: false, .. } => {
            println!("   [trace] {event} (payload discarded)")
        }
        _ => println!("   [trace] {event}"),
    });

    println!("   state: {}", settings::state());

    // -------------------------------------------------------------------------
    // 2. Race four workers on the empty holder
    // -------------------------------------------------------------------------
    println!("\n2. Starting workers...");

    let handles: Vec<_> = (0..4)
        .map(|owner| {
            thread::spawn(move || {
                settings::obtain(WorkerSettings {
                    owner,
                    batch_size: 64 * (owner as u32 + 1),
                })
            })
        })
        .collect();

    let instances: Vec<_> = handles
        .into_iter()
        .filter_map(|handle| handle.join().ok())
        .collect();

    // -------------------------------------------------------------------------
    // 3. Inspect the result
    // -------------------------------------------------------------------------
    println!("\n3. Inspecting the holder...");

    let same = instances
        .windows(2)
        .all(|pair| Singleton::same(&pair[0], &pair[1]));
    println!("   all workers share one instance: {same}");
    println!("   state: {}", settings::state());

    match settings::get() {
        Ok(winner) => println!(
            "   winner: worker {} (batch size {})",
            winner.owner, winner.batch_size
        ),
        Err(e) => println!("   error: {e}"),
    }

    settings::clear_trace_callback();

    println!("\n=== Example Complete ===");
}
