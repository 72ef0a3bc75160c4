//! Display locations assigned to reviews.
//!
//! [`REGION_MAPPING`] is the fixed location pool and its region lookup.
//! [`LocationSampler`] is the seam for choosing a location per review.
//! [`RandomSampler`] implements [`LocationSampler`] with a uniform draw over the pool.

mod random;
mod regions;

pub use random::RandomSampler;
pub use regions::{REGION_MAPPING, region_for};

/// Picks a display location for one review.
///
/// Any `FnMut() -> &'static str` closure is a sampler, which lets callers
/// substitute a fixed sequence for the random draw.
pub trait LocationSampler {
    fn sample(&mut self) -> &'static str;
}

impl<F> LocationSampler for F
where
    F: FnMut() -> &'static str,
{
    fn sample(&mut self) -> &'static str {
        self()
    }
}
