//! WebAssembly bindings for the 6502 core.
//!
//! This module provides a JavaScript-callable wrapper that owns a CPU and its
//! memory, so a browser host can load bytes, reset, execute and inspect state.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator6502;
