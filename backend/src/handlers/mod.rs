//! HTTP handlers for the Hawaii Climate API

mod climate;
mod health;
mod index;

pub use climate::*;
pub use health::*;
pub use index::*;
