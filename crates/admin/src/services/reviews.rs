//! Social review management.

use revendo_core::{ReviewBrand, ReviewId, SocialReview};
use revendo_store::{Domain, JsonStore};

use crate::AdminError;

/// Social proof screenshot CRUD.
pub struct ReviewService<'a> {
    domain: &'a mut Domain,
    store: &'a JsonStore,
}

impl<'a> ReviewService<'a> {
    /// Create a review service over the domain state.
    pub fn new(domain: &'a mut Domain, store: &'a JsonStore) -> Self {
        Self { domain, store }
    }

    /// Append a new review.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] for a blank image URL.
    pub fn add_review(
        &mut self,
        image_url: &str,
        brand: ReviewBrand,
    ) -> Result<ReviewId, AdminError> {
        let image_url = image_url.trim();
        if image_url.is_empty() {
            return Err(AdminError::Validation("review image URL is required".into()));
        }
        let id = ReviewId::generate();
        self.domain.social_reviews.push(SocialReview {
            id: id.clone(),
            image_url: image_url.to_owned(),
            brand,
        });
        self.domain.persist_social_reviews(self.store);
        Ok(id)
    }

    /// Remove a review.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] for an unknown review.
    pub fn delete_review(&mut self, id: &ReviewId) -> Result<(), AdminError> {
        let before = self.domain.social_reviews.len();
        self.domain.social_reviews.retain(|r| &r.id != id);
        if self.domain.social_reviews.len() == before {
            return Err(AdminError::NotFound(format!("review {id}")));
        }
        self.domain.persist_social_reviews(self.store);
        Ok(())
    }
}
