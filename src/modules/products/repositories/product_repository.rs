// ProductRepository boundary
//
// The service only sees the trait; the MySQL implementation lives behind it
// so tests can swap in a canned in-memory double. `find_by_id` returns an
// Option instead of failing on absent rows, which keeps the not-found
// decision in the service.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::products::models::Product;

/// Persistence boundary for product records
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a transient or mutated product, returning the canonical
    /// stored form (with an id assigned when the product was new).
    async fn save(&self, product: Product) -> Result<Product>;

    /// Fetch a product by id, `None` when no row exists
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;
}

pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn save(&self, product: Product) -> Result<Product> {
        match product.id {
            None => {
                let result = sqlx::query("INSERT INTO products (name, price) VALUES (?, ?)")
                    .bind(&product.name)
                    .bind(product.price)
                    .execute(&self.pool)
                    .await?;

                Ok(Product {
                    id: Some(result.last_insert_id() as i64),
                    ..product
                })
            }
            Some(id) => {
                sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
                    .bind(&product.name)
                    .bind(product.price)
                    .bind(id)
                    .execute(&self.pool)
                    .await?;

                Ok(product)
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let product =
            sqlx::query_as::<_, Product>("SELECT id, name, price FROM products WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(product)
    }
}
