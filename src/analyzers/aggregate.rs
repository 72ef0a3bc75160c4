use crate::analyzers::types::{RegionShare, RegionalBreakdown, Review, Stats};
use crate::analyzers::utility::{pct, round1};
use crate::stats::RatingHistogram;
use anyhow::Result;
use std::collections::HashMap;

/// Builds the headline [`Stats`] from the rating histogram of every input row
/// and the list of retained reviews.
///
/// Pure over its inputs: the same histogram and reviews always produce the
/// same result.
///
/// # Errors
///
/// Fails when the histogram is empty, since there is no average to report.
pub fn aggregate_stats(histogram: &RatingHistogram, reviews: &[Review]) -> Result<Stats> {
    let average_rating = round1(histogram.mean()?);

    Ok(Stats {
        total_reviews: histogram.total(),
        average_rating,
        reviews_with_comments: reviews.len(),
        distribution: histogram.clone(),
    })
}

/// Counts retained reviews per region and converts the counts to rounded
/// percentages of all retained reviews.
///
/// Regions appear in the order they are first seen in `reviews`; regions
/// with no reviews are absent.
pub fn regional_breakdown(reviews: &[Review]) -> RegionalBreakdown {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for review in reviews {
        let count = counts.entry(review.region.as_str()).or_insert_with(|| {
            order.push(review.region.as_str());
            0
        });
        *count += 1;
    }

    let total = reviews.len();
    let mut breakdown = RegionalBreakdown::default();

    for region in order {
        let count = counts[region];
        breakdown.push(
            region.to_string(),
            RegionShare {
                count,
                percentage: round1(pct(count, total)),
            },
        );
    }

    breakdown
}
