//! Error types

mod config;
mod display;
mod grid;
mod remote;

pub use config::*;
pub use display::*;
pub use grid::*;
pub use remote::*;
