use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Shoe entity - one product record in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shoe {
    /// Unique identifier, assigned at creation and never reassigned
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Manufacturer brand
    pub brand: String,
    /// Price, non-negative
    pub price: f64,
    /// Shoe size
    pub size: f64,
    /// Colorway
    pub color: String,
    /// Upper material
    pub material: String,
    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the product is currently available
    pub in_stock: bool,
    /// Units on hand
    pub stock_quantity: u32,
    /// Catalog category (Running, Casual, Boots, ...)
    pub category: String,
    /// Optional image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Set once at insert
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new shoe
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShoe {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub brand: String,
    #[validate(range(min = 0.0, message = "must be a non-negative number"))]
    pub price: f64,
    #[validate(range(min = 0.0, message = "must be a non-negative number"))]
    pub size: f64,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub color: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub material: String,
    pub description: Option<String>,
    pub in_stock: bool,
    pub stock_quantity: u32,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,
    pub image_url: Option<String>,
}

/// DTO for partially updating an existing shoe
///
/// Fields left out of the payload are left unchanged. The optional `id` is
/// never applied to the record; it only exists so the adapter can reject a
/// payload whose id disagrees with the path.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShoe {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub brand: Option<String>,
    #[validate(range(min = 0.0, message = "must be a non-negative number"))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0, message = "must be a non-negative number"))]
    pub size: Option<f64>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub color: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub material: Option<String>,
    pub description: Option<String>,
    pub in_stock: Option<bool>,
    pub stock_quantity: Option<u32>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// Query filters for listing shoes
///
/// All supplied predicates are AND-combined; an absent predicate imposes no
/// constraint. An empty query value (`?brand=`) counts as absent.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ShoeFilter {
    /// Exact brand match, case-insensitive
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub brand: Option<String>,
    /// Exact category match, case-insensitive
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category: Option<String>,
    /// Inclusive lower price bound
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub max_price: Option<f64>,
    /// Exact size match
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub size: Option<f64>,
    /// Substring color match, case-insensitive
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub color: Option<String>,
}

impl ShoeFilter {
    /// Names of the predicates actually supplied, in wire parameter form
    pub fn applied(&self) -> Vec<String> {
        let mut applied = Vec::new();
        if self.brand.is_some() {
            applied.push("brand".to_string());
        }
        if self.category.is_some() {
            applied.push("category".to_string());
        }
        if self.min_price.is_some() {
            applied.push("minPrice".to_string());
        }
        if self.max_price.is_some() {
            applied.push("maxPrice".to_string());
        }
        if self.size.is_some() {
            applied.push("size".to_string());
        }
        if self.color.is_some() {
            applied.push("color".to_string());
        }
        applied
    }
}

/// Treats `?param=` the same as an absent parameter, while still rejecting
/// values that fail to parse into the target type.
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

impl Shoe {
    /// Create a new shoe from the CreateShoe DTO
    pub fn new(input: CreateShoe) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            brand: input.brand,
            price: input.price,
            size: input.size,
            color: input.color,
            material: input.material,
            description: input.description,
            in_stock: input.in_stock,
            stock_quantity: input.stock_quantity,
            category: input.category,
            image_url: input.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from the UpdateShoe DTO
    ///
    /// The record id and creation timestamp are left untouched regardless of
    /// the payload contents; `updated_at` is refreshed.
    pub fn apply_update(&mut self, update: UpdateShoe) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(size) = update.size {
            self.size = size;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(material) = update.material {
            self.material = material;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
        if let Some(stock_quantity) = update.stock_quantity {
            self.stock_quantity = stock_quantity;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateShoe {
        CreateShoe {
            name: "Gel-Kayano 30".to_string(),
            brand: "Asics".to_string(),
            price: 160.0,
            size: 9.5,
            color: "Blue".to_string(),
            material: "Mesh".to_string(),
            description: None,
            in_stock: true,
            stock_quantity: 5,
            category: "Running".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_new_sets_both_timestamps_equal() {
        let shoe = Shoe::new(create_input());
        assert_eq!(shoe.created_at, shoe.updated_at);
    }

    #[test]
    fn test_apply_update_keeps_id_and_created_at() {
        let mut shoe = Shoe::new(create_input());
        let id = shoe.id;
        let created_at = shoe.created_at;

        shoe.apply_update(UpdateShoe {
            id: Some(Uuid::new_v4()),
            price: Some(120.0),
            ..Default::default()
        });

        assert_eq!(shoe.id, id);
        assert_eq!(shoe.created_at, created_at);
        assert_eq!(shoe.price, 120.0);
        assert!(shoe.updated_at >= created_at);
    }

    #[test]
    fn test_apply_update_leaves_absent_fields_unchanged() {
        let mut shoe = Shoe::new(create_input());

        shoe.apply_update(UpdateShoe {
            stock_quantity: Some(0),
            in_stock: Some(false),
            ..Default::default()
        });

        assert_eq!(shoe.name, "Gel-Kayano 30");
        assert_eq!(shoe.brand, "Asics");
        assert_eq!(shoe.stock_quantity, 0);
        assert!(!shoe.in_stock);
    }

    #[test]
    fn test_filter_applied_names_in_wire_form() {
        let filter = ShoeFilter {
            brand: Some("Nike".to_string()),
            min_price: Some(50.0),
            ..Default::default()
        };
        assert_eq!(filter.applied(), vec!["brand", "minPrice"]);

        assert!(ShoeFilter::default().applied().is_empty());
    }

    #[test]
    fn test_create_shoe_validation_rules() {
        let mut input = create_input();
        assert!(input.validate().is_ok());

        input.price = -1.0;
        input.name = String::new();
        let binding = input.validate().unwrap_err();
        let errors = binding.field_errors();
        assert!(errors.contains_key("price"));
        assert!(errors.contains_key("name"));
    }

    #[test]
    fn test_shoe_serializes_camel_case() {
        let shoe = Shoe::new(create_input());
        let json = serde_json::to_value(&shoe).unwrap();

        assert!(json.get("inStock").is_some());
        assert!(json.get("stockQuantity").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        // Absent optional fields are omitted entirely
        assert!(json.get("description").is_none());
        assert!(json.get("imageUrl").is_none());
    }
}
