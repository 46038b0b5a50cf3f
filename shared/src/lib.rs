//! Shared types, models and the crop advisory engine for Agro-Info
//!
//! This crate contains the types shared between the backend, the browser
//! front end (via WASM), and the phase inference engine itself. Everything
//! in here is synchronous and free of I/O.

pub mod engine;
pub mod models;
pub mod types;
pub mod validation;

pub use engine::*;
pub use models::*;
pub use types::*;
pub use validation::*;
