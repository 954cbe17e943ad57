//! Shared types and engines for the crop advisor
//!
//! This crate contains the farm risk assessment and product recommendation
//! engines together with the records they read and produce. It does no I/O
//! and is used by the command-line tools and the WASM bindings alike.

pub mod catalog;
pub mod error;
pub mod models;
pub mod scoring;
pub mod validation;

pub use catalog::*;
pub use error::*;
pub use models::*;
pub use scoring::*;
pub use validation::*;
