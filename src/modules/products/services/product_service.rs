use std::sync::Arc;

use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::products::models::{Product, ProductDto};
use crate::modules::products::repositories::product_repository::ProductRepository;

/// Service for product business logic
///
/// Validates incoming DTOs and orchestrates create/update against the
/// repository. Holds no state of its own, so one instance is shared across
/// all worker threads.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Validate the business rules on an incoming DTO.
    ///
    /// Name is checked before price: when both are invalid, the name error
    /// wins. Messages use the exact Portuguese wording the API contract
    /// promises.
    pub fn validate(&self, dto: &ProductDto) -> Result<()> {
        if dto.name.trim().is_empty() {
            return Err(AppError::validation("Campo nome inválido"));
        }

        if dto.price <= Decimal::ZERO {
            return Err(AppError::validation("Campo preco inválido"));
        }

        Ok(())
    }

    /// Create a new product record.
    ///
    /// Any id carried by the DTO is ignored; the store assigns one. The
    /// returned DTO mirrors exactly what the repository persisted.
    pub async fn insert(&self, dto: ProductDto) -> Result<ProductDto> {
        self.validate(&dto)?;

        let product = Product::new(dto.name, dto.price);
        let saved = self.repository.save(product).await?;

        tracing::info!(id = ?saved.id, "product created");

        Ok(ProductDto::from(saved))
    }

    /// Replace the name and price of an existing product.
    ///
    /// Validation runs before the repository is touched. An absent row
    /// becomes a domain not-found error; any other repository failure
    /// propagates unchanged.
    pub async fn update(&self, id: i64, dto: ProductDto) -> Result<ProductDto> {
        self.validate(&dto)?;

        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Produto de id {} não encontrado", id)))?;

        product.name = dto.name;
        product.price = dto.price;

        let saved = self.repository.save(product).await?;

        tracing::info!(id, "product updated");

        Ok(ProductDto::from(saved))
    }
}
