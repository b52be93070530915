//! Validation utilities for the varbuf format
//!
//! Pure bounds arithmetic and pattern parsing with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{checked_end, offset_cursor, remaining_from, take_exact};
pub use parsing::{first_unknown_tag, parse_pattern, parse_pattern_strict};
