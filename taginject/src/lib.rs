//! Expose taginject's internal API for use in unit testing and by the xtask
//! crate. The injection logic itself lives in `taginject-core`.
pub mod cli;
pub mod config;
pub mod error;
pub mod tags;
