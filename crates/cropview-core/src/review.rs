//! Product review route resolution.
//!
//! Two routes take a product identifier and a review identifier from the
//! URL path and render a single line of text. Review identifiers that
//! parse as a number greater than 1000 resolve to not-found; non-numeric
//! identifiers render normally.

/// Outcome of resolving a review route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewPage {
    /// The heading text to render.
    Found(String),
    /// The route should render the not-found page.
    NotFound,
}

/// Resolve a review route from its path parameters.
pub fn resolve_review(product_id: &str, review_id: &str) -> ReviewPage {
    if leading_number_exceeds(review_id, 1000) {
        return ReviewPage::NotFound;
    }
    ReviewPage::Found(format!("Review {review_id} for product {product_id}"))
}

/// Whether the identifier starts with a digit run whose value exceeds the
/// threshold.
///
/// Identifiers are numeric by prefix, the way the page's number parsing
/// treats them: `"1001abc"` reads as 1001, while `"abc"` is not numeric at
/// all. A digit run too large for `u64` is still a number far above any
/// threshold.
fn leading_number_exceeds(id: &str, threshold: u64) -> bool {
    let digits = id.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    match id[..digits].parse::<u64>() {
        Ok(n) => n > threshold,
        // Overflow: more digits than u64 holds
        Err(_) => true,
    }
}
