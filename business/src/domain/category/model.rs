use uuid::Uuid;

use super::errors::CategoryError;

/// A product category. The slug is what products reference; referential
/// integrity towards products is intentionally not enforced.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub description: String,
}

pub struct NewCategoryProps {
    pub name: String,
    pub slug: String,
    pub image: String,
    pub description: String,
}

impl Category {
    pub fn new(props: NewCategoryProps) -> Result<Self, CategoryError> {
        if props.name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }
        if props.slug.trim().is_empty() {
            return Err(CategoryError::SlugEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            slug: props.slug,
            image: props.image,
            description: props.description,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        slug: String,
        image: String,
        description: String,
    ) -> Self {
        Self {
            id,
            name,
            slug,
            image,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_category_with_fresh_id() {
        let category = Category::new(NewCategoryProps {
            name: "Anillos".to_string(),
            slug: "anillos".to_string(),
            image: "https://example.com/anillos.jpg".to_string(),
            description: "Anillos de oro".to_string(),
        })
        .unwrap();

        assert_eq!(category.name, "Anillos");
        assert_eq!(category.slug, "anillos");
    }

    #[test]
    fn should_reject_empty_name() {
        let result = Category::new(NewCategoryProps {
            name: "  ".to_string(),
            slug: "anillos".to_string(),
            image: String::new(),
            description: String::new(),
        });

        assert!(matches!(result.unwrap_err(), CategoryError::NameEmpty));
    }

    #[test]
    fn should_reject_empty_slug() {
        let result = Category::new(NewCategoryProps {
            name: "Anillos".to_string(),
            slug: "".to_string(),
            image: String::new(),
            description: String::new(),
        });

        assert!(matches!(result.unwrap_err(), CategoryError::SlugEmpty));
    }
}
