use review_digest::analyzers::analyzer::{analyze, analyze_file, retain_reviews};
use review_digest::analyzers::aggregate::{aggregate_stats, regional_breakdown};
use review_digest::config::PipelineConfig;
use review_digest::locations::{RandomSampler, region_for};
use review_digest::parser::{parse_reviews, read_reviews};
use review_digest::stats::RatingHistogram;
use std::path::Path;

const FIXTURE: &str = "tests/fixtures/course_reviews.csv";

fn fixture_rows() -> Vec<review_digest::parser::RawReviewRow> {
    read_reviews(Path::new(FIXTURE)).expect("Failed to read fixture")
}

#[test]
fn test_full_pipeline() {
    let rows = fixture_rows();
    let digest = analyze(
        &rows,
        &mut RandomSampler::seeded(7),
        &PipelineConfig::default(),
    )
    .expect("Pipeline failed");

    let stats = &digest.stats;
    assert_eq!(stats.total_reviews, 21);
    // Dropped: good, yes, Great start, Ten chars!, nice
    assert_eq!(stats.reviews_with_comments, 16);
    assert_eq!(digest.all_reviews.len(), stats.reviews_with_comments);

    // 14 fives, 3 fours (one of them 4.5), 2 threes, 1 two, 1 one
    assert_eq!(stats.distribution.count(5), 14);
    assert_eq!(stats.distribution.count(4), 3);
    assert_eq!(stats.distribution.count(3), 2);
    assert_eq!(stats.distribution.total(), stats.total_reviews);
    assert_eq!(stats.average_rating, 4.3);
}

#[test]
fn test_regions_follow_locations() {
    let digest = analyze(
        &fixture_rows(),
        &mut RandomSampler::from_entropy(),
        &PipelineConfig::default(),
    )
    .unwrap();

    for review in digest.all_reviews.iter().chain(&digest.featured_reviews) {
        assert_eq!(region_for(&review.location), Some(review.region.as_str()));
    }

    let counted: usize = digest
        .regional_breakdown
        .iter()
        .map(|(_, s)| s.count)
        .sum();
    assert_eq!(counted, digest.stats.reviews_with_comments);

    let pct_sum: f64 = digest
        .regional_breakdown
        .iter()
        .map(|(_, s)| s.percentage)
        .sum();
    let tolerance = 0.1 * digest.regional_breakdown.len() as f64 + 1e-9;
    assert!(
        (pct_sum - 100.0).abs() <= tolerance,
        "percentages sum to {pct_sum}"
    );
}

#[test]
fn test_featured_selection() {
    let digest = analyze(
        &fixture_rows(),
        &mut RandomSampler::seeded(1),
        &PipelineConfig::default(),
    )
    .unwrap();

    assert_eq!(digest.featured_reviews.len(), 9);
    assert!(digest.featured_reviews.iter().all(|r| r.rating == 5));

    let lengths: Vec<_> = digest
        .featured_reviews
        .iter()
        .map(|r| r.comment.chars().count())
        .collect();
    assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    assert!(digest.featured_reviews[0].comment.starts_with("Life-changing"));
}

#[test]
fn test_all_reviews_ordering() {
    let digest = analyze(
        &fixture_rows(),
        &mut RandomSampler::seeded(2),
        &PipelineConfig::default(),
    )
    .unwrap();

    for pair in digest.all_reviews.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.rating >= b.rating);
        if a.rating == b.rating {
            assert!(a.date <= b.date);
        }
    }
}

#[test]
fn test_ids_dense_before_sort() {
    let mut histogram = RatingHistogram::new();
    let reviews = retain_reviews(
        &fixture_rows(),
        &mut RandomSampler::seeded(3),
        &mut histogram,
    )
    .unwrap();

    let ids: Vec<_> = reviews.iter().map(|r| r.id).collect();
    let expected: Vec<_> = (1..=reviews.len()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_length_boundary_in_fixture() {
    let digest = analyze(
        &fixture_rows(),
        &mut RandomSampler::seeded(4),
        &PipelineConfig::default(),
    )
    .unwrap();
    let comments: Vec<_> = digest
        .all_reviews
        .iter()
        .map(|r| r.comment.as_str())
        .collect();

    assert!(comments.contains(&"Eleven char"));
    assert!(!comments.contains(&"Ten chars!"));
    assert!(comments.contains(&"Worth every penny and more"));
}

#[test]
fn test_aggregation_idempotent_over_enriched_reviews() {
    let mut histogram = RatingHistogram::new();
    let reviews = retain_reviews(
        &fixture_rows(),
        &mut RandomSampler::seeded(5),
        &mut histogram,
    )
    .unwrap();

    assert_eq!(
        aggregate_stats(&histogram, &reviews).unwrap(),
        aggregate_stats(&histogram, &reviews).unwrap()
    );
    assert_eq!(regional_breakdown(&reviews), regional_breakdown(&reviews));
}

#[test]
fn test_seeded_runs_match() {
    let rows = fixture_rows();
    let config = PipelineConfig::default();
    let a = analyze(&rows, &mut RandomSampler::seeded(42), &config).unwrap();
    let b = analyze(&rows, &mut RandomSampler::seeded(42), &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_stub_sampler_breakdown() {
    let csv = "Rating,Comment,Student Name,Timestamp\n\
               5,Excellent course and support,,2024-01-05 10:00\n\
               4,Clear explanations and pacing,,2024-01-01 09:00\n\
               4,Good value for the money spent,,2024-01-02 09:00\n";
    let rows = parse_reviews(csv.as_bytes()).unwrap();
    let mut picks = ["Ghana", "Canada", "Kenya"].into_iter();
    let mut sampler = move || picks.next().unwrap_or("Ghana");

    let digest = analyze(&rows, &mut sampler, &PipelineConfig::default()).unwrap();

    let json = serde_json::to_value(&digest.regional_breakdown).unwrap();
    assert_eq!(json["Africa"]["count"], 2);
    assert_eq!(json["Africa"]["percentage"], 66.7);
    assert_eq!(json["North America"]["percentage"], 33.3);
}

#[test]
fn test_analyze_file_round_trip_to_disk() {
    let output = std::env::temp_dir().join("review_digest_integration/reviews.json");
    let _ = std::fs::remove_file(&output);

    let digest = analyze_file(
        Path::new(FIXTURE),
        &output,
        &mut RandomSampler::seeded(9),
        &PipelineConfig::default(),
    )
    .unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("Jürgen Müller"));
    assert!(text.contains("Sofía Ramírez"));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["stats"]["totalReviews"], digest.stats.total_reviews);
    assert_eq!(value["featuredReviews"].as_array().unwrap().len(), 9);

    std::fs::remove_file(&output).unwrap();
}
