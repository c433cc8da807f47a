use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::products::models::ProductDto;
use crate::modules::products::services::product_service::ProductService;

/// Create a new product
/// POST /products
pub async fn insert_product(
    service: web::Data<Arc<ProductService>>,
    request: web::Json<ProductDto>,
) -> Result<HttpResponse, AppError> {
    let product = service.insert(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(product))
}

/// Update an existing product
/// PUT /products/{id}
pub async fn update_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
    request: web::Json<ProductDto>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let product = service.update(id, request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::post().to(insert_product))
            .route("/{id}", web::put().to(update_product)),
    );
}
