//! The two-call singleton demo.
//!
//! Obtains the holder twice with different payloads, prints whether both
//! handles are the same instance, then prints the payload that won.
//!
//! Run with: `cargo run --example first_instance`
//!
//! Output:
//!
//! ```text
//! true
//! First instance
//! ```
//!
//! Rust prints `bool` in lowercase.

use singleton_holder::{define_singleton, Singleton};

define_singleton!(newtone, String);

fn main() {
    let singleton1 = newtone::obtain("First instance".to_string());
    let singleton2 = newtone::obtain("Second instance".to_string());

    println!("{}", Singleton::same(&singleton1, &singleton2));
    println!("{}", singleton1.value());
}
