// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public-facing string API of the railfence library. It wraps
// the generic, I/O-free `kernels` and owns everything that touches the outside
// world: turning `&str` into Unicode scalar values, the persisted cipher record,
// and human-readable rendering.
//
// Data Flow (Encryption):
//
//   1. [Stateless API (encrypt / encrypt_to_record)] -> Receives `&str`, rails
//         |
//         `-> collects `char`s and calls `kernels::dispatch(Encode, ..)`
//         |
//   2. [Format (save_record)] -> Writes `{ "cipher": .., "rails": .. }` as JSON
//
// Data Flow (Decryption):
//
//   1. [Format (load_record)] -> Reads the JSON record
//         |
//   2. [Stateless API (decrypt_record)] -> Checks the declared length, then calls
//         `kernels::dispatch(Decode, ..)` with the stored rail count
//
// ====================================================================================
pub mod display;
pub mod format;
pub mod stateless_api;

pub use display::render_fence;
pub use format::{load_record, save_record, CipherRecord};
pub use stateless_api::{
    decrypt, decrypt_record, encrypt, encrypt_to_record, round_trip, RoundTripReport,
};
