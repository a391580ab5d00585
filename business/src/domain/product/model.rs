use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;

/// A catalog product. `category_slug` is a soft reference; it is not
/// checked against the categories collection.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_slug: String,
    pub images: Vec<String>,
    pub featured: bool,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_slug: String,
    pub images: Vec<String>,
    pub featured: bool,
    pub in_stock: bool,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if props.price < 0.0 {
            return Err(ProductError::PriceNegative);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            price: props.price,
            category_slug: props.category_slug,
            images: props.images,
            featured: props.featured,
            in_stock: props.in_stock,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: f64,
        category_slug: String,
        images: Vec<String>,
        featured: bool,
        in_stock: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            category_slug,
            images,
            featured,
            in_stock,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str, price: f64) -> NewProductProps {
        NewProductProps {
            name: name.to_string(),
            description: "Anillo solitario".to_string(),
            price,
            category_slug: "anillos".to_string(),
            images: vec!["https://example.com/ring.jpg".to_string()],
            featured: false,
            in_stock: true,
        }
    }

    #[test]
    fn should_create_product_when_valid() {
        let product = Product::new(props("Anillo Solitario Diamante", 2500.0)).unwrap();
        assert_eq!(product.name, "Anillo Solitario Diamante");
        assert_eq!(product.category_slug, "anillos");
        assert!(product.in_stock);
    }

    #[test]
    fn should_reject_empty_name() {
        let result = Product::new(props(" ", 100.0));
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = Product::new(props("Anillo", -1.0));
        assert!(matches!(result.unwrap_err(), ProductError::PriceNegative));
    }

    #[test]
    fn should_accept_zero_price() {
        assert!(Product::new(props("Muestra", 0.0)).is_ok());
    }
}
