//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used by both tools:
//! - Filesystem helpers with path-carrying errors
//! - Time measurement
//! - Logging setup

pub mod fs;
pub mod logging;
pub mod time;
