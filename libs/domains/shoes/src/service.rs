//! Shoe Service - Business logic layer

use axum_helpers::validation_messages;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ShoeError, ShoeResult};
use crate::models::{CreateShoe, Shoe, ShoeFilter, UpdateShoe};
use crate::repository::ShoeRepository;

/// Shoe service providing business logic operations
///
/// The service layer validates payloads, enforces the path/body id
/// agreement on updates, and turns repository absence into not-found
/// results. It is the only component that maps outcomes; the repository
/// below it never raises for missing data.
pub struct ShoeService<R: ShoeRepository> {
    repository: Arc<R>,
}

impl<R: ShoeRepository> ShoeService<R> {
    /// Create a new ShoeService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List shoes matching the filter
    #[instrument(skip(self))]
    pub async fn list_shoes(&self, filter: ShoeFilter) -> ShoeResult<Vec<Shoe>> {
        self.repository.list(filter).await
    }

    /// Get a shoe by ID
    #[instrument(skip(self))]
    pub async fn get_shoe(&self, id: Uuid) -> ShoeResult<Shoe> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ShoeError::NotFound(id))
    }

    /// Create a new shoe
    #[instrument(skip(self, input), fields(shoe_name = %input.name))]
    pub async fn create_shoe(&self, input: CreateShoe) -> ShoeResult<Shoe> {
        input
            .validate()
            .map_err(|e| ShoeError::Validation(validation_messages(&e)))?;

        self.repository.create(input).await
    }

    /// Update an existing shoe
    ///
    /// A payload carrying an id that disagrees with the addressed id is
    /// rejected before the repository is consulted.
    #[instrument(skip(self, input))]
    pub async fn update_shoe(&self, id: Uuid, input: UpdateShoe) -> ShoeResult<Shoe> {
        if let Some(body_id) = input.id {
            if body_id != id {
                return Err(ShoeError::IdMismatch);
            }
        }

        input
            .validate()
            .map_err(|e| ShoeError::Validation(validation_messages(&e)))?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(ShoeError::NotFound(id))
    }

    /// Delete a shoe
    #[instrument(skip(self))]
    pub async fn delete_shoe(&self, id: Uuid) -> ShoeResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ShoeError::NotFound(id))
        }
    }

    /// Unique brands currently in the catalog
    #[instrument(skip(self))]
    pub async fn list_brands(&self) -> ShoeResult<Vec<String>> {
        self.repository.distinct_brands().await
    }

    /// Unique categories currently in the catalog
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ShoeResult<Vec<String>> {
        self.repository.distinct_categories().await
    }
}

impl<R: ShoeRepository> Clone for ShoeService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
