//! Data types emitted by the review pipeline.

use crate::stats::RatingHistogram;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// A published review: a retained row decorated with a display location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub id: usize,
    pub name: String,
    pub rating: i64,
    pub date: String,
    pub location: String,
    pub region: String,
    pub comment: String,
    pub verified: bool,
}

/// Headline numbers over every input row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_reviews: usize,
    pub average_rating: f64,
    pub reviews_with_comments: usize,
    pub distribution: RatingHistogram,
}

/// Share of retained reviews attributed to one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionShare {
    pub count: usize,
    pub percentage: f64,
}

/// Per-region shares, in the order each region first appears.
///
/// Serializes as a JSON object keyed by region name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionalBreakdown {
    entries: Vec<(String, RegionShare)>,
}

impl RegionalBreakdown {
    pub(crate) fn push(&mut self, region: String, share: RegionShare) {
        self.entries.push((region, share));
    }

    pub fn get(&self, region: &str) -> Option<&RegionShare> {
        self.entries
            .iter()
            .find(|(name, _)| name == region)
            .map(|(_, share)| share)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionShare)> {
        self.entries.iter().map(|(name, share)| (name.as_str(), share))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RegionalBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (region, share) in &self.entries {
            map.serialize_entry(region, share)?;
        }
        map.end()
    }
}

/// Complete pipeline result, written as `reviews.json` for the front end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsDigest {
    pub stats: Stats,
    pub regional_breakdown: RegionalBreakdown,
    pub featured_reviews: Vec<Review>,
    pub all_reviews: Vec<Review>,
}
