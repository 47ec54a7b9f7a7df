use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::feedback::{
    Feedback as DomainFeedback, NewFeedback as DomainNewFeedback,
    UpdateFeedback as DomainUpdateFeedback,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::feedbacks)]
/// Diesel model for [`crate::domain::feedback::Feedback`].
pub struct Feedback {
    pub id: i32,
    pub customer_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::feedbacks)]
/// Insertable form of [`Feedback`].
pub struct NewFeedback<'a> {
    pub customer_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub comment: Option<&'a str>,
    pub created_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::feedbacks)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Feedback`] record. A missing comment clears
/// the stored one.
pub struct UpdateFeedback<'a> {
    pub customer_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub comment: Option<&'a str>,
}

impl From<Feedback> for DomainFeedback {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id,
            customer_id: feedback.customer_id,
            product_id: feedback.product_id,
            rating: feedback.rating,
            comment: feedback.comment,
            created_at: feedback.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewFeedback> for NewFeedback<'a> {
    fn from(feedback: &'a DomainNewFeedback) -> Self {
        Self {
            customer_id: feedback.customer_id.get(),
            product_id: feedback.product_id.get(),
            rating: feedback.rating.get(),
            comment: feedback.comment.as_deref(),
            created_at: feedback.created_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateFeedback> for UpdateFeedback<'a> {
    fn from(feedback: &'a DomainUpdateFeedback) -> Self {
        Self {
            customer_id: feedback.customer_id.get(),
            product_id: feedback.product_id.get(),
            rating: feedback.rating.get(),
            comment: feedback.comment.as_deref(),
        }
    }
}
