//! Common utilities for the Wallaby style mapper.
//!
//! This crate provides shared infrastructure used by the pipeline and the CLI:
//! - **Warning System** - de-duplicated, colored stderr output for soft fallbacks

pub mod warning;
