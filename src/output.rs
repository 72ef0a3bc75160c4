//! Output formatting and persistence for the review digest.
//!
//! Supports pretty JSON rendering, writing the front-end asset, and logging
//! a run summary.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::analyzers::types::ReviewsDigest;
use std::fs;
use std::path::Path;

/// Renders the digest as UTF-8 JSON with 2-space indentation.
///
/// Non-ASCII text is written as-is, not escaped.
pub fn render_json(digest: &ReviewsDigest) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(digest)?)
}

/// Writes the digest to `path`, creating parent directories as needed.
///
/// The JSON is rendered before the file is opened, so a serialization
/// failure never truncates an existing file.
pub fn write_digest(path: &Path, digest: &ReviewsDigest) -> Result<()> {
    let bytes = render_json(digest)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    fs::write(path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        "Digest written"
    );

    Ok(())
}

/// Logs a human-readable summary of a finished run.
pub fn log_summary(digest: &ReviewsDigest, output: &Path) {
    let stats = &digest.stats;

    info!(
        total_reviews = stats.total_reviews,
        reviews_with_comments = stats.reviews_with_comments,
        average_rating = stats.average_rating,
        "Successfully processed reviews"
    );

    for (rating, count) in stats.distribution.iter_desc() {
        info!(rating, count, "Rating distribution");
    }

    let mut regions: Vec<_> = digest.regional_breakdown.iter().collect();
    regions.sort_by(|a, b| b.1.percentage.total_cmp(&a.1.percentage));
    for (region, share) in regions {
        info!(
            region,
            count = share.count,
            percentage = share.percentage,
            "Regional breakdown"
        );
    }

    info!(
        featured = digest.featured_reviews.len(),
        output = %output.display(),
        "Featured reviews selected, digest written"
    );
}
