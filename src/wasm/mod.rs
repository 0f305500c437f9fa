//! WebAssembly bindings for the execution core.
//!
//! Compiled only with the `wasm` feature; exposes [`Emulator`] to JavaScript.

pub mod api;

pub use api::Emulator;
