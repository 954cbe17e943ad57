//! Risk assessment and recommendation engines
//!
//! Both engines are pure functions over the models in [`crate::models`]. The
//! current time is always passed in by the caller.

pub mod banding;
mod recommendation;
mod risk;
mod soil;

pub use recommendation::*;
pub use risk::*;
pub use soil::*;
