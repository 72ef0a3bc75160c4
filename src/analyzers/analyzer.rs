use crate::analyzers::aggregate::{aggregate_stats, regional_breakdown};
use crate::analyzers::filter::is_meaningful;
use crate::analyzers::select::{featured_reviews, sort_all_reviews};
use crate::analyzers::types::{Review, ReviewsDigest};
use crate::analyzers::utility::is_iso_date;
use crate::config::PipelineConfig;
use crate::locations::{LocationSampler, region_for};
use crate::output::write_digest;
use crate::parser::{RawReviewRow, read_reviews};
use crate::stats::RatingHistogram;
use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::{debug, info, warn};

/// Name shown for reviews submitted without a student name.
pub const ANONYMOUS: &str = "Anonymous";

/// Reads the export at `input`, builds the digest, and writes it to `output`.
///
/// The output file is only opened once every stage has succeeded, so a
/// failed run leaves any previous digest untouched.
#[tracing::instrument(
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn analyze_file(
    input: &Path,
    output: &Path,
    sampler: &mut impl LocationSampler,
    config: &PipelineConfig,
) -> Result<ReviewsDigest> {
    let rows = read_reviews(input)?;
    info!(rows = rows.len(), "Review export loaded");

    let digest = analyze(&rows, sampler, config)?;
    write_digest(output, &digest)?;

    Ok(digest)
}

/// Runs filter, enrichment, aggregation and selection over parsed rows.
#[tracing::instrument(skip_all, fields(rows = rows.len()))]
pub fn analyze(
    rows: &[RawReviewRow],
    sampler: &mut impl LocationSampler,
    config: &PipelineConfig,
) -> Result<ReviewsDigest> {
    let mut histogram = RatingHistogram::new();
    let mut reviews = retain_reviews(rows, sampler, &mut histogram)?;

    let stats = aggregate_stats(&histogram, &reviews)?;
    let breakdown = regional_breakdown(&reviews);
    let featured = featured_reviews(&reviews, config.featured_limit);

    sort_all_reviews(&mut reviews);
    warn_on_irregular_dates(&reviews);

    Ok(ReviewsDigest {
        stats,
        regional_breakdown: breakdown,
        featured_reviews: featured,
        all_reviews: reviews,
    })
}

/// Records every row's rating in `histogram` and promotes rows with a
/// meaningful comment to [`Review`]s.
///
/// Ids are assigned 1, 2, 3... in input order, counting retained rows only.
pub fn retain_reviews(
    rows: &[RawReviewRow],
    sampler: &mut impl LocationSampler,
    histogram: &mut RatingHistogram,
) -> Result<Vec<Review>> {
    let mut reviews = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        let row_number = idx + 1;

        let rating = row
            .rating_value()
            .with_context(|| format!("review row {row_number}"))?;
        let rating = histogram.record(rating);

        if !is_meaningful(&row.comment) {
            debug!(row = row_number, rating, "Comment filtered out");
            continue;
        }

        let review = enrich(row, reviews.len() + 1, rating, sampler)
            .with_context(|| format!("review row {row_number}"))?;
        debug!(
            row = row_number,
            id = review.id,
            location = %review.location,
            "Review retained"
        );
        reviews.push(review);
    }

    Ok(reviews)
}

fn enrich(
    row: &RawReviewRow,
    id: usize,
    rating: i64,
    sampler: &mut impl LocationSampler,
) -> Result<Review> {
    let date = row.date()?;

    let location = sampler.sample();
    let Some(region) = region_for(location) else {
        bail!("sampled location {location:?} has no region");
    };

    Ok(Review {
        id,
        name: row.name().unwrap_or(ANONYMOUS).to_string(),
        rating,
        date: date.to_string(),
        location: location.to_string(),
        region: region.to_string(),
        comment: row.comment.trim().to_string(),
        verified: true,
    })
}

/// Reviews are ordered by their date string. Flag dates for which that is
/// not chronological order.
fn warn_on_irregular_dates(reviews: &[Review]) {
    let irregular = reviews.iter().filter(|r| !is_iso_date(&r.date)).count();
    if irregular > 0 {
        warn!(
            irregular,
            total = reviews.len(),
            "Some review dates are not YYYY-MM-DD; date ordering may not be chronological"
        );
    }
}
