/// Comments long enough to pass the length check that still say nothing.
static STOPLIST: &[&str] = &["yes", "good", "best", "great", "great start", "nice"];

/// A comment must be strictly longer than this many characters to be kept.
pub const MIN_COMMENT_CHARS: usize = 10;

/// Decides whether a review comment is worth publishing.
///
/// The comment is trimmed first. It is kept when it has more than
/// [`MIN_COMMENT_CHARS`] characters and its lowercase form is not in the
/// stoplist.
pub fn is_meaningful(comment: &str) -> bool {
    let comment = comment.trim();

    match comment.chars().count() {
        n if n <= MIN_COMMENT_CHARS => false,
        _ => !STOPLIST.contains(&comment.to_lowercase().as_str()),
    }
}
