use async_trait::async_trait;
use bigdecimal::BigDecimal;
use num_traits::FromPrimitive;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::{ProductFilter, ProductRepository};

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        // NULL binds disable the matching predicate, so one statement
        // covers every filter combination.
        let entities = sqlx::query_as::<_, ProductEntity>(
            r#"SELECT id, name, description, price, category_slug, images, featured, in_stock, created_at
            FROM products
            WHERE ($1::text IS NULL OR category_slug = $1)
              AND ($2::boolean IS NULL OR featured = $2)
            ORDER BY created_at DESC"#,
        )
        .bind(filter.category_slug.as_deref())
        .bind(filter.featured)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, category_slug, images, featured, in_stock, created_at FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, description, price, category_slug, images, featured, in_stock, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                category_slug = EXCLUDED.category_slug,
                images = EXCLUDED.images,
                featured = EXCLUDED.featured,
                in_stock = EXCLUDED.in_stock"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(BigDecimal::from_f64(product.price).unwrap_or_default())
        .bind(&product.category_slug)
        .bind(Json(&product.images))
        .bind(product.featured)
        .bind(product.in_stock)
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
