use crate::analyzers::types::Review;

/// Picks the five-star reviews for the featured carousel.
///
/// Longest comment first; equal lengths fall back to the later date string.
/// At most `limit` reviews are returned.
pub fn featured_reviews(reviews: &[Review], limit: usize) -> Vec<Review> {
    let mut five_star: Vec<Review> = reviews.iter().filter(|r| r.rating == 5).cloned().collect();

    five_star.sort_by(|a, b| {
        let a_key = (a.comment.chars().count(), a.date.as_str());
        let b_key = (b.comment.chars().count(), b.date.as_str());
        b_key.cmp(&a_key)
    });
    five_star.truncate(limit);

    five_star
}

/// Orders reviews by rating, highest first, then by date string ascending.
///
/// Stable: reviews with equal rating and date keep their relative order.
pub fn sort_all_reviews(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| b.rating.cmp(&a.rating).then_with(|| a.date.cmp(&b.date)));
}
