//! Headless data grid controller
//!
//! Drives a searchable, sortable, paged table over either an in-memory
//! collection or a remote source paged by offset or by cursor, with bounded
//! fetch retries and confirmed row actions. Renderers draw the
//! [`view::GridView`] snapshot and forward user interactions to [`DataGrid`].

pub mod action;
pub mod config;
pub mod error;
pub mod image;
pub mod model;
pub mod retry;
pub mod source;
pub mod state;
pub mod view;

mod grid;

pub use grid::*;
