//! Review filtering, aggregation and selection.
//!
//! This module keeps reviews with meaningful comments, decorates them with a
//! display location, computes the rating and regional statistics, and picks
//! the featured and fully ordered review lists for the front end.

pub mod aggregate;
pub mod analyzer;
pub mod filter;
pub mod select;
pub mod types;
pub mod utility;
