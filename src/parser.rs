//! CSV parser for course review exports.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A single row of the review export, exactly as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReviewRow {
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Comment")]
    pub comment: String,
    #[serde(rename = "Student Name", default)]
    pub student_name: Option<String>,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

impl RawReviewRow {
    /// Parses the `Rating` column as a finite number whose whole part fits
    /// in an `i64`.
    pub fn rating_value(&self) -> Result<f64> {
        let value: f64 = self
            .rating
            .trim()
            .parse()
            .with_context(|| format!("invalid rating {:?}", self.rating))?;

        if !value.is_finite() {
            bail!("invalid rating {:?}", self.rating);
        }

        // i64::MAX as f64 rounds up to 2^63, so the bound is exclusive.
        if value.trunc().abs() >= i64::MAX as f64 {
            bail!("rating {:?} is out of range", self.rating);
        }

        Ok(value)
    }

    /// Date portion of the timestamp: everything before the first whitespace.
    pub fn date(&self) -> Result<&str> {
        match self.timestamp.split_whitespace().next() {
            Some(date) => Ok(date),
            None => bail!("empty timestamp"),
        }
    }

    /// Trimmed student name, or `None` when the column is absent or blank.
    pub fn name(&self) -> Option<&str> {
        self.student_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Decodes every row of a review CSV held in `reader`.
///
/// # Errors
///
/// Returns an error naming the 1-based data row if a row is missing a
/// required column or cannot be decoded.
pub fn parse_reviews<R: Read>(reader: R) -> Result<Vec<RawReviewRow>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for (idx, result) in rdr.deserialize().enumerate() {
        let row: RawReviewRow =
            result.with_context(|| format!("malformed review row {}", idx + 1))?;
        rows.push(row);
    }

    Ok(rows)
}

/// Opens `path` and decodes it with [`parse_reviews`].
pub fn read_reviews(path: &Path) -> Result<Vec<RawReviewRow>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_reviews(file).with_context(|| format!("failed to parse {}", path.display()))
}
