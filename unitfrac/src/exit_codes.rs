//! Stable exit codes for unitfrac CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to an invalid fraction, bad arguments, bad config, or I/O errors.
pub const INVALID: i32 = 1;
/// `unitfrac check` found the proposed terms are not an expansion of the fraction.
pub const MISMATCH: i32 = 2;
