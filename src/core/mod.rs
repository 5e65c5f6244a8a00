//! Core modules for Trinum

pub mod reduce;
pub mod calculator;
pub mod calendar;
pub mod date_parser;
pub mod analysis;
pub mod api;

pub use reduce::{reduce_to_single_digit, digit_sum};
pub use calculator::{
    compute_triangle, decompose_date, inner_code, outer_code, subconscious_code,
    TriangleCalculator,
};
pub use calendar::{days_in_month, default_selection, month_days, picker_days, picker_years};
pub use date_parser::DateParser;
pub use analysis::{analyze, NO_INTERPRETATION};
pub use api::{create_router, create_router_with_state, run_server, AppState};
