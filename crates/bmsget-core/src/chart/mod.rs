//! Chart-related types and parsing.
//!
//! This module contains types for local BMS charts:
//! - `ChartRecord` - title + content identity of one parsed chart file
//! - `ChartScanner` - lazy directory scan producing `ChartRecord`s
//! - `common_title_prefix` - canonical title inference

mod parse;
mod scan;
mod title;

pub use parse::*;
pub use scan::*;
pub use title::*;
