use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::feedback::{NewFeedback, UpdateFeedback};
use crate::domain::types::{CustomerId, ProductId, Rating};
use crate::forms::FormError;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body accepted when creating or updating a feedback record.
pub struct FeedbackForm {
    #[validate(range(min = 1, message = "Customer Id is required."))]
    pub customer_id: i32,
    #[validate(range(min = 1, message = "Product Id is required."))]
    pub product_id: i32,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5."))]
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

impl FeedbackForm {
    fn typed_fields(&self) -> Result<(CustomerId, ProductId, Rating), FormError> {
        self.validate()?;

        let customer_id =
            CustomerId::new(self.customer_id).map_err(|_| FormError::InvalidCustomerId)?;
        let product_id =
            ProductId::new(self.product_id).map_err(|_| FormError::InvalidProductId)?;
        let rating = Rating::new(self.rating).map_err(|_| FormError::InvalidRating)?;

        Ok((customer_id, product_id, rating))
    }

    /// Validate the form and build an insert payload stamped with the current time.
    pub fn to_new_feedback(&self) -> Result<NewFeedback, FormError> {
        let (customer_id, product_id, rating) = self.typed_fields()?;
        Ok(NewFeedback::new(
            customer_id,
            product_id,
            rating,
            self.comment.clone(),
        ))
    }

    /// Validate the form and build the overwrite applied by an update.
    pub fn to_update_feedback(&self) -> Result<UpdateFeedback, FormError> {
        let (customer_id, product_id, rating) = self.typed_fields()?;
        Ok(UpdateFeedback::new(
            customer_id,
            product_id,
            rating,
            self.comment.clone(),
        ))
    }
}
