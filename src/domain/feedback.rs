use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerId, ProductId, Rating};

/// Page size used when the caller asks for a non-positive one.
pub const DEFAULT_PAGE_SIZE: i32 = 1000;

/// A single customer feedback submission.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i32,
    pub customer_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    /// Set once on insert and never changed afterwards.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new feedback record.
#[derive(Clone, Debug, PartialEq)]
pub struct NewFeedback {
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub rating: Rating,
    pub comment: Option<String>,
    pub created_at: NaiveDateTime,
}

impl NewFeedback {
    /// Build a new feedback payload stamped with the current UTC time.
    #[must_use]
    pub fn new(
        customer_id: CustomerId,
        product_id: ProductId,
        rating: Rating,
        comment: Option<String>,
    ) -> Self {
        Self {
            customer_id,
            product_id,
            rating,
            comment,
            created_at: Utc::now().naive_utc(),
        }
    }
}

/// Fields overwritten when a feedback record is updated.
///
/// The identifier and creation timestamp are never part of an update.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateFeedback {
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub rating: Rating,
    pub comment: Option<String>,
}

impl UpdateFeedback {
    #[must_use]
    pub fn new(
        customer_id: CustomerId,
        product_id: ProductId,
        rating: Rating,
        comment: Option<String>,
    ) -> Self {
        Self {
            customer_id,
            product_id,
            rating,
            comment,
        }
    }
}

/// Corrects a raw page/page size pair.
///
/// Non-positive pages become `1` and non-positive page sizes become
/// [`DEFAULT_PAGE_SIZE`]. There is no upper bound and no error.
pub fn normalize_pagination(page: i32, page_size: i32) -> (i32, i32) {
    let page = if page <= 0 { 1 } else { page };
    let page_size = if page_size <= 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    (page, page_size)
}

/// Pagination-only request descriptor.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryOptions {
    /// 1-based page number.
    pub page: i32,
    pub page_size: i32,
}

impl QueryOptions {
    pub fn new(page: i32, page_size: i32) -> Self {
        Self { page, page_size }
    }

    /// Repair the page and page size in place.
    pub fn normalize(&mut self) {
        (self.page, self.page_size) = normalize_pagination(self.page, self.page_size);
    }
}

/// Transient search request: every filter field is optional and an absent
/// field does not constrain the result.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackFilter {
    pub id: Option<i32>,
    pub customer_id: Option<i32>,
    pub product_id: Option<i32>,
    pub rating: Option<i32>,
    /// Case-insensitive substring searched in the comment.
    pub comment: Option<String>,
    pub page: i32,
    pub page_size: i32,
}

impl FeedbackFilter {
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn customer_id(mut self, customer_id: i32) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn product_id(mut self, product_id: i32) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn paginate(mut self, page: i32, page_size: i32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Repair the pagination fields in place, same rules as [`QueryOptions::normalize`].
    pub fn normalize_pagination(&mut self) {
        (self.page, self.page_size) = normalize_pagination(self.page, self.page_size);
    }
}
