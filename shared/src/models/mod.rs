//! Domain models for the crop advisor

mod crop;
mod product;
mod recommendation;
mod risk;
mod soil;
mod weather;

pub use crop::*;
pub use product::*;
pub use recommendation::*;
pub use risk::*;
pub use soil::*;
pub use weather::*;
