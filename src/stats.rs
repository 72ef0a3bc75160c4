//! Rating histogram accumulated over every row of the review export.

use anyhow::{Context, Result, bail};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Running count of reviews per whole-star rating.
///
/// Every input row is recorded, including rows whose comment is later
/// filtered out. Serializes as a JSON object keyed by rating, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingHistogram {
    counts: BTreeMap<i64, usize>,
}

impl RatingHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one review and returns the truncated rating it was filed under.
    pub fn record(&mut self, rating: f64) -> i64 {
        let key = rating.trunc() as i64;
        *self.counts.entry(key).or_default() += 1;
        key
    }

    pub fn count(&self, rating: i64) -> usize {
        self.counts.get(&rating).copied().unwrap_or(0)
    }

    /// Total number of recorded reviews.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of `rating * count` over all buckets.
    ///
    /// # Errors
    ///
    /// Fails if the sum does not fit in an `i64`.
    pub fn weighted_sum(&self) -> Result<i64> {
        self.counts
            .iter()
            .try_fold(0i64, |sum, (rating, count)| {
                i64::try_from(*count)
                    .ok()
                    .and_then(|count| rating.checked_mul(count))
                    .and_then(|weighted| sum.checked_add(weighted))
            })
            .context("rating sum overflows")
    }

    /// Mean rating over every recorded review.
    ///
    /// # Errors
    ///
    /// Fails when nothing has been recorded or the rating sum overflows.
    pub fn mean(&self) -> Result<f64> {
        if self.is_empty() {
            bail!("no reviews recorded, cannot compute an average rating");
        }
        Ok(self.weighted_sum()? as f64 / self.total() as f64)
    }

    /// Buckets ordered from the highest rating to the lowest.
    pub fn iter_desc(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.counts.iter().rev().map(|(rating, count)| (*rating, *count))
    }
}

impl Serialize for RatingHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (rating, count) in self.iter_desc() {
            map.serialize_entry(&rating.to_string(), &count)?;
        }
        map.end()
    }
}
