//! WASM binding for the review route resolver.

use cropview_core::{resolve_review as core_resolve, ReviewPage};
use wasm_bindgen::prelude::*;

/// Resolve a review route from its path parameters.
///
/// Returns the heading text to render, or `undefined` when the route
/// should show the not-found page (review identifiers above 1000).
///
/// # Example (TypeScript)
///
/// ```typescript
/// const text = resolve_review(params.productID, params.reviewID);
/// if (text === undefined) notFound();
/// ```
#[wasm_bindgen]
pub fn resolve_review(product_id: &str, review_id: &str) -> Option<String> {
    match core_resolve(product_id, review_id) {
        ReviewPage::Found(text) => Some(text),
        ReviewPage::NotFound => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found() {
        assert_eq!(
            resolve_review("3", "12"),
            Some("Review 12 for product 3".to_string())
        );
    }

    #[test]
    fn test_not_found_above_threshold() {
        assert_eq!(resolve_review("3", "1001"), None);
    }
}
