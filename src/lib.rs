//! Trinum: birth-date digit triangle calculator
//!
//! date → DateDigits → inner triangle → outer triangle → core codes

pub mod core;
pub mod logging;
pub mod types;

// =============================================================================
// DATE DOMAIN
// =============================================================================

/// Smallest year a `BirthDate` accepts
pub const YEAR_MIN: i32 = 1;

/// Largest year a `BirthDate` accepts (year digits fill exactly 4 slots)
pub const YEAR_MAX: i32 = 9999;

/// Oldest year offered by the date picker
pub const PICKER_YEAR_MIN: i32 = 1905;

/// Newest year offered by the date picker
pub const PICKER_YEAR_MAX: i32 = 2030;

// =============================================================================
// SERVER
// =============================================================================

/// Default bind address for `--serve`
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
