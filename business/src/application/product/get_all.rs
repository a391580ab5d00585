use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::{ProductFilter, ProductRepository};
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, filter: ProductFilter) -> Result<Vec<Product>, ProductError> {
        self.logger.debug(&format!(
            "Listing products (category: {:?}, featured: {:?})",
            filter.category_slug, filter.featured
        ));
        Ok(self.repository.get_all(&filter).await?)
    }
}
