use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ShoeResult;
use crate::models::{CreateShoe, Shoe, ShoeFilter, UpdateShoe};

/// Repository trait for shoe persistence
///
/// Absence is a first-class result: lookups return `Option`, delete returns
/// `bool`. No method fails for a missing id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShoeRepository: Send + Sync {
    /// List shoes matching the filter, in storage (insertion) order
    async fn list(&self, filter: ShoeFilter) -> ShoeResult<Vec<Shoe>>;

    /// Get a shoe by ID
    async fn get_by_id(&self, id: Uuid) -> ShoeResult<Option<Shoe>>;

    /// Create a new shoe with a fresh id and timestamps
    async fn create(&self, input: CreateShoe) -> ShoeResult<Shoe>;

    /// Merge the supplied fields over an existing shoe
    async fn update(&self, id: Uuid, input: UpdateShoe) -> ShoeResult<Option<Shoe>>;

    /// Delete a shoe by ID
    async fn delete(&self, id: Uuid) -> ShoeResult<bool>;

    /// Unique brand values currently present, first-seen order, verbatim
    async fn distinct_brands(&self) -> ShoeResult<Vec<String>>;

    /// Unique category values currently present, first-seen order, verbatim
    async fn distinct_categories(&self) -> ShoeResult<Vec<String>>;
}

/// In-memory implementation of ShoeRepository
///
/// A `Vec` keeps the records in insertion order, which is the listing order.
/// The `RwLock` makes every operation atomic with respect to the collection
/// under the multi-threaded runtime.
#[derive(Debug, Default, Clone)]
pub struct InMemoryShoeRepository {
    shoes: Arc<RwLock<Vec<Shoe>>>,
}

impl InMemoryShoeRepository {
    /// An empty catalog
    pub fn new() -> Self {
        Self {
            shoes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// A catalog pre-loaded with the fixed seed set.
    ///
    /// The binary starts from this set on every boot; nothing survives a
    /// restart.
    pub fn seeded() -> Self {
        let seed = [
            CreateShoe {
                name: "Air Max 90".to_string(),
                brand: "Nike".to_string(),
                price: 120.0,
                size: 9.0,
                color: "White/Black".to_string(),
                material: "Leather".to_string(),
                description: Some("Classic Nike running shoes".to_string()),
                in_stock: true,
                stock_quantity: 15,
                category: "Running".to_string(),
                image_url: Some("https://example.com/images/air-max-90.jpg".to_string()),
            },
            CreateShoe {
                name: "Ultra Boost 22".to_string(),
                brand: "Adidas".to_string(),
                price: 180.0,
                size: 10.0,
                color: "Black".to_string(),
                material: "Primeknit".to_string(),
                description: Some("High-performance running shoes".to_string()),
                in_stock: true,
                stock_quantity: 8,
                category: "Running".to_string(),
                image_url: Some("https://example.com/images/ultra-boost-22.jpg".to_string()),
            },
            CreateShoe {
                name: "Chuck Taylor All Star".to_string(),
                brand: "Converse".to_string(),
                price: 65.0,
                size: 8.0,
                color: "Red".to_string(),
                material: "Canvas".to_string(),
                description: Some("Classic canvas sneakers".to_string()),
                in_stock: true,
                stock_quantity: 25,
                category: "Casual".to_string(),
                image_url: Some("https://example.com/images/chuck-taylor.jpg".to_string()),
            },
            CreateShoe {
                name: "Classic Leather".to_string(),
                brand: "Dr. Martens".to_string(),
                price: 140.0,
                size: 9.0,
                color: "Black".to_string(),
                material: "Leather".to_string(),
                description: Some("Iconic leather boots".to_string()),
                in_stock: true,
                stock_quantity: 12,
                category: "Boots".to_string(),
                image_url: Some("https://example.com/images/classic-leather.jpg".to_string()),
            },
        ];

        Self {
            shoes: Arc::new(RwLock::new(seed.into_iter().map(Shoe::new).collect())),
        }
    }
}

#[async_trait]
impl ShoeRepository for InMemoryShoeRepository {
    async fn list(&self, filter: ShoeFilter) -> ShoeResult<Vec<Shoe>> {
        let shoes = self.shoes.read().await;

        let result: Vec<Shoe> = shoes
            .iter()
            .filter(|s| {
                if let Some(ref brand) = filter.brand {
                    if s.brand.to_lowercase() != brand.to_lowercase() {
                        return false;
                    }
                }
                if let Some(ref category) = filter.category {
                    if s.category.to_lowercase() != category.to_lowercase() {
                        return false;
                    }
                }
                if let Some(min_price) = filter.min_price {
                    if s.price < min_price {
                        return false;
                    }
                }
                if let Some(max_price) = filter.max_price {
                    if s.price > max_price {
                        return false;
                    }
                }
                if let Some(size) = filter.size {
                    if s.size != size {
                        return false;
                    }
                }
                if let Some(ref color) = filter.color {
                    if !s.color.to_lowercase().contains(&color.to_lowercase()) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        Ok(result)
    }

    async fn get_by_id(&self, id: Uuid) -> ShoeResult<Option<Shoe>> {
        let shoes = self.shoes.read().await;
        Ok(shoes.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, input: CreateShoe) -> ShoeResult<Shoe> {
        let mut shoes = self.shoes.write().await;

        let shoe = Shoe::new(input);
        shoes.push(shoe.clone());

        tracing::info!(shoe_id = %shoe.id, "Created shoe");
        Ok(shoe)
    }

    async fn update(&self, id: Uuid, input: UpdateShoe) -> ShoeResult<Option<Shoe>> {
        let mut shoes = self.shoes.write().await;

        let Some(shoe) = shoes.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };

        shoe.apply_update(input);
        let updated = shoe.clone();

        tracing::info!(shoe_id = %id, "Updated shoe");
        Ok(Some(updated))
    }

    async fn delete(&self, id: Uuid) -> ShoeResult<bool> {
        let mut shoes = self.shoes.write().await;

        match shoes.iter().position(|s| s.id == id) {
            Some(index) => {
                shoes.remove(index);
                tracing::info!(shoe_id = %id, "Deleted shoe");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn distinct_brands(&self) -> ShoeResult<Vec<String>> {
        let shoes = self.shoes.read().await;

        let mut brands: Vec<String> = Vec::new();
        for shoe in shoes.iter() {
            if !brands.contains(&shoe.brand) {
                brands.push(shoe.brand.clone());
            }
        }
        Ok(brands)
    }

    async fn distinct_categories(&self) -> ShoeResult<Vec<String>> {
        let shoes = self.shoes.read().await;

        let mut categories: Vec<String> = Vec::new();
        for shoe in shoes.iter() {
            if !categories.contains(&shoe.category) {
                categories.push(shoe.category.clone());
            }
        }
        Ok(categories)
    }
}
