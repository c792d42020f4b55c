//! I/O helpers for unitfrac commands.

pub mod config;
