use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::category::model::Category;

#[derive(Debug, Clone, Object)]
pub struct CreateCategoryRequest {
    /// Category name (cannot be empty)
    pub name: String,
    /// URL-friendly identifier referenced by products (cannot be empty)
    pub slug: String,
    /// Image URL
    #[oai(default)]
    pub image: String,
    /// Category description
    #[oai(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub description: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            image: category.image,
            description: category.description,
        }
    }
}
