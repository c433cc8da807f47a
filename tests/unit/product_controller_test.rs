// HTTP contract for the product routes
//
// Exercises the actix handlers end to end against a canned repository:
// status codes, JSON bodies, and the AppError -> HTTP status mapping.

use std::sync::Arc;

use actix_web::{test, web, App};
use async_trait::async_trait;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use catalogo::core::Result;
use catalogo::modules::products::controllers::product_controller;
use catalogo::modules::products::models::Product;
use catalogo::modules::products::repositories::ProductRepository;
use catalogo::modules::products::services::ProductService;

struct MockProductRepository {
    save_response: Option<Product>,
    find_response: Option<Product>,
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn save(&self, _product: Product) -> Result<Product> {
        Ok(self
            .save_response
            .clone()
            .expect("save called without a canned response"))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Product>> {
        Ok(self.find_response.clone())
    }
}

fn product_service(repository: MockProductRepository) -> web::Data<Arc<ProductService>> {
    web::Data::new(Arc::new(ProductService::new(Arc::new(repository))))
}

#[actix_web::test]
async fn test_post_products_returns_created_with_assigned_id() {
    let service = product_service(MockProductRepository {
        save_response: Some(Product {
            id: Some(1),
            name: "Teste".to_string(),
            price: dec!(10.0),
        }),
        find_response: None,
    });
    let app = test::init_service(
        App::new()
            .app_data(service)
            .configure(product_controller::configure),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({"name": "Teste", "price": "10.0"}))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 201);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Teste");
}

#[actix_web::test]
async fn test_post_products_with_blank_name_is_unprocessable() {
    let service = product_service(MockProductRepository {
        save_response: None,
        find_response: None,
    });
    let app = test::init_service(
        App::new()
            .app_data(service)
            .configure(product_controller::configure),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({"name": "  ", "price": "10.0"}))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 422);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"]["message"], "Campo nome inválido");
}

#[actix_web::test]
async fn test_put_products_updates_existing_record() {
    let service = product_service(MockProductRepository {
        save_response: Some(Product {
            id: Some(1),
            name: "Teste Atualizado".to_string(),
            price: dec!(20.0),
        }),
        find_response: Some(Product {
            id: Some(1),
            name: "Teste".to_string(),
            price: dec!(10.0),
        }),
    });
    let app = test::init_service(
        App::new()
            .app_data(service)
            .configure(product_controller::configure),
    )
    .await;

    let request = test::TestRequest::put()
        .uri("/products/1")
        .set_json(json!({"name": "Teste Atualizado", "price": "20.0"}))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 200);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Teste Atualizado");
}

#[actix_web::test]
async fn test_put_products_unknown_id_is_not_found() {
    let service = product_service(MockProductRepository {
        save_response: None,
        find_response: None,
    });
    let app = test::init_service(
        App::new()
            .app_data(service)
            .configure(product_controller::configure),
    )
    .await;

    let request = test::TestRequest::put()
        .uri("/products/99")
        .set_json(json!({"name": "Teste", "price": "10.0"}))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 404);
}
