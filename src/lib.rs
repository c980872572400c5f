//! This file is the root of the `railfence` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`kernels`, `bridge`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the small string-level API most callers need.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
pub mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;

// Used by `log_metric!` so callers do not need their own `log` dependency.
#[doc(hidden)]
pub use log;

//==================================================================================
// 2. Public API
//==================================================================================
pub use bridge::{decrypt, encrypt};
pub use config::RailFenceConfig;
pub use error::RailFenceError;
