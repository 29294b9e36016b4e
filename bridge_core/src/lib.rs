//! Host-agnostic core of the browser bridge
//!
//! Keydown routing through a single handler slot and a result-typed facade
//! over a string key/value store. The wasm crate binds both to the browser.

pub mod config;
pub mod error;
pub mod keyboard;
pub mod params;
pub mod storage;

pub use config::*;
pub use error::*;
pub use keyboard::*;
pub use params::*;
pub use storage::*;
