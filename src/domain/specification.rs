//! Composable filters over collections of feedback records.
//!
//! A [`FeedbackSpecification`] narrows anything implementing
//! [`FeedbackCollection`]: the SQL query builder in the repository layer or a
//! plain in-memory list. Specifications are pure AND-filters, so a list of
//! them gives the same result in any order and applying one twice changes
//! nothing.

use crate::domain::feedback::{Feedback, FeedbackFilter};

/// A collection of feedback records that can be narrowed one criterion at a
/// time.
pub trait FeedbackCollection: Sized {
    fn with_id(self, id: i32) -> Self;
    fn with_customer_id(self, customer_id: i32) -> Self;
    fn with_product_id(self, product_id: i32) -> Self;
    fn with_rating(self, rating: i32) -> Self;
    /// Keep records whose comment contains `needle`, ignoring case.
    /// Records without a comment are dropped.
    fn with_comment_containing(self, needle: &str) -> Self;
}

/// One filter predicate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedbackSpecification {
    ById(Option<i32>),
    ByCustomerId(i32),
    ByProductId(Option<i32>),
    ByRating(Option<i32>),
    /// No-op when the text is missing or blank.
    ByComment(Option<String>),
}

impl FeedbackSpecification {
    /// Narrow `collection` by this predicate.
    pub fn apply<C: FeedbackCollection>(&self, collection: C) -> C {
        match self {
            Self::ById(Some(id)) => collection.with_id(*id),
            Self::ByCustomerId(customer_id) => collection.with_customer_id(*customer_id),
            Self::ByProductId(Some(product_id)) => collection.with_product_id(*product_id),
            Self::ByRating(Some(rating)) => collection.with_rating(*rating),
            Self::ByComment(Some(text)) if !text.trim().is_empty() => {
                collection.with_comment_containing(text)
            }
            Self::ById(None)
            | Self::ByProductId(None)
            | Self::ByRating(None)
            | Self::ByComment(_) => collection,
        }
    }
}

/// Apply every specification in sequence, which amounts to their logical AND.
pub fn apply_all<C: FeedbackCollection>(
    specifications: &[FeedbackSpecification],
    collection: C,
) -> C {
    specifications
        .iter()
        .fold(collection, |narrowed, spec| spec.apply(narrowed))
}

/// Derive the specifications for every active field of `filter`.
///
/// Numeric fields count as active only when present and greater than zero, so
/// `0` and negative values behave like "not provided". The comment is active
/// whenever it is non-empty, whitespace included; the blank check then
/// happens inside [`FeedbackSpecification::ByComment`].
pub fn build_specifications(filter: Option<&FeedbackFilter>) -> Vec<FeedbackSpecification> {
    let mut specifications = Vec::new();

    let Some(filter) = filter else {
        return specifications;
    };

    if let Some(id) = filter.id.filter(|id| *id > 0) {
        specifications.push(FeedbackSpecification::ById(Some(id)));
    }

    if let Some(customer_id) = filter.customer_id.filter(|id| *id > 0) {
        specifications.push(FeedbackSpecification::ByCustomerId(customer_id));
    }

    if let Some(product_id) = filter.product_id.filter(|id| *id > 0) {
        specifications.push(FeedbackSpecification::ByProductId(Some(product_id)));
    }

    if let Some(rating) = filter.rating.filter(|rating| *rating > 0) {
        specifications.push(FeedbackSpecification::ByRating(Some(rating)));
    }

    if let Some(comment) = filter.comment.as_ref().filter(|c| !c.is_empty()) {
        specifications.push(FeedbackSpecification::ByComment(Some(comment.clone())));
    }

    specifications
}

impl FeedbackCollection for Vec<Feedback> {
    fn with_id(mut self, id: i32) -> Self {
        self.retain(|f| f.id == id);
        self
    }

    fn with_customer_id(mut self, customer_id: i32) -> Self {
        self.retain(|f| f.customer_id == customer_id);
        self
    }

    fn with_product_id(mut self, product_id: i32) -> Self {
        self.retain(|f| f.product_id == product_id);
        self
    }

    fn with_rating(mut self, rating: i32) -> Self {
        self.retain(|f| f.rating == rating);
        self
    }

    fn with_comment_containing(mut self, needle: &str) -> Self {
        let needle = needle.to_lowercase();
        self.retain(|f| {
            f.comment
                .as_deref()
                .is_some_and(|comment| comment.to_lowercase().contains(&needle))
        });
        self
    }
}
