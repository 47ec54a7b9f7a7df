use diesel::expression_methods::EscapeExpressionMethods;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    db::lower_utf8,
    domain::feedback::{
        Feedback as DomainFeedback, NewFeedback as DomainNewFeedback,
        UpdateFeedback as DomainUpdateFeedback,
    },
    domain::specification::{FeedbackCollection, apply_all},
    domain::types::FeedbackId,
    models::feedback::{
        Feedback as DbFeedback, NewFeedback as DbNewFeedback, UpdateFeedback as DbUpdateFeedback,
    },
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, FeedbackListQuery, FeedbackReader, FeedbackWriter},
    schema::feedbacks,
};

/// Rows per multi-row INSERT. Each row binds five parameters and SQLite
/// caps a statement at 32766.
const INSERT_CHUNK_ROWS: usize = 500;

/// Escape `%`, `_` and the escape character itself so user input is matched
/// literally inside a `LIKE` pattern.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl<'a> FeedbackCollection for feedbacks::BoxedQuery<'a, Sqlite> {
    fn with_id(self, id: i32) -> Self {
        self.filter(feedbacks::id.eq(id))
    }

    fn with_customer_id(self, customer_id: i32) -> Self {
        self.filter(feedbacks::customer_id.eq(customer_id))
    }

    fn with_product_id(self, product_id: i32) -> Self {
        self.filter(feedbacks::product_id.eq(product_id))
    }

    fn with_rating(self, rating: i32) -> Self {
        self.filter(feedbacks::rating.eq(rating))
    }

    fn with_comment_containing(self, needle: &str) -> Self {
        // NULL comments yield NULL from LIKE and are filtered out.
        let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
        self.filter(lower_utf8(feedbacks::comment).like(pattern).escape('\\'))
    }
}

impl FeedbackReader for DieselRepository {
    fn get_feedback_by_id(&self, id: FeedbackId) -> RepositoryResult<Option<DomainFeedback>> {
        let mut conn = self.conn()?;
        let feedback = feedbacks::table
            .find(id.get())
            .first::<DbFeedback>(&mut conn)
            .optional()?;

        Ok(feedback.map(Into::into))
    }

    fn list_feedbacks(
        &self,
        query: FeedbackListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainFeedback>)> {
        let mut conn = self.conn()?;

        let query_builder = || {
            apply_all(
                &query.specifications,
                feedbacks::table.into_boxed::<Sqlite>(),
            )
        };

        // Count before pagination so the total covers every match.
        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order(feedbacks::id.asc());

        if let Some(pagination) = &query.pagination {
            let offset = (pagination.page.max(1) - 1).saturating_mul(pagination.per_page);
            let offset = i64::try_from(offset).unwrap_or(i64::MAX);
            let limit = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
            items = items.offset(offset).limit(limit);
        }

        let feedbacks = items
            .load::<DbFeedback>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total, feedbacks))
    }
}

impl FeedbackWriter for DieselRepository {
    fn create_feedback(&self, new_feedback: &DomainNewFeedback) -> RepositoryResult<DomainFeedback> {
        let mut conn = self.conn()?;
        let db_new = DbNewFeedback::from(new_feedback);

        let created = diesel::insert_into(feedbacks::table)
            .values(&db_new)
            .get_result::<DbFeedback>(&mut conn)?;

        Ok(created.into())
    }

    fn create_feedbacks(&self, new_feedbacks: &[DomainNewFeedback]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let insertables: Vec<DbNewFeedback> = new_feedbacks.iter().map(Into::into).collect();

        conn.transaction::<usize, RepositoryError, _>(|conn| {
            let mut affected = 0;
            for chunk in insertables.chunks(INSERT_CHUNK_ROWS) {
                affected += diesel::insert_into(feedbacks::table)
                    .values(chunk)
                    .execute(conn)?;
            }
            Ok(affected)
        })
    }

    fn update_feedback(
        &self,
        feedback_id: FeedbackId,
        updates: &DomainUpdateFeedback,
    ) -> RepositoryResult<DomainFeedback> {
        let mut conn = self.conn()?;
        let db_updates = DbUpdateFeedback::from(updates);

        let updated = diesel::update(feedbacks::table.find(feedback_id.get()))
            .set(&db_updates)
            .get_result::<DbFeedback>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_feedback(&self, feedback_id: FeedbackId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(feedbacks::table.find(feedback_id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
