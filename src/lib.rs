//! Core library for the safeincloud-xlsx command line application.
//!
//! The crate turns a SafeInCloud XML export into a flat Excel worksheet. The
//! modules keep responsibilities narrow: file adapters live under [`io`], the
//! record and field types inside [`model`], entry filtering in [`extract`],
//! the column layout in [`plan`], and the end-to-end pipeline in [`convert`].

pub mod convert;
pub mod error;
pub mod extract;
pub mod io;
pub mod model;
pub mod plan;

pub use error::{Result, ToolError};
