use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::DieselRepository;
use crate::routes::{json_error, json_message, unhandled};
use crate::services::ServiceError;
use crate::services::products::{
    create_product, load_product, load_products, modify_product, remove_product,
};

const NOT_FOUND: &str = "Product not found";

#[get("/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match web::block(move || load_products(repo.get_ref())).await {
        Ok(Ok(products)) => HttpResponse::Ok().json(products),
        Ok(Err(err)) => {
            log::error!("Failed to list products: {err}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to retrieve products",
            )
        }
        Err(err) => unhandled(err),
    }
}

#[get("/products/{product_id}")]
pub async fn get_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match web::block(move || load_product(repo.get_ref(), product_id)).await {
        Ok(Ok(product)) => HttpResponse::Ok().json(product),
        Ok(Err(ServiceError::NotFound)) => json_message(StatusCode::NOT_FOUND, NOT_FOUND),
        Ok(Err(err)) => {
            log::error!("Failed to load product {product_id}: {err}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to retrieve the product",
            )
        }
        Err(err) => unhandled(err),
    }
}

#[post("/products")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddProductForm>,
) -> impl Responder {
    match web::block(move || create_product(repo.get_ref(), form)).await {
        Ok(Ok(product)) => HttpResponse::Created().json(product),
        Ok(Err(ServiceError::Form(message))) => {
            log::warn!("Rejected product payload: {message}");
            json_error(StatusCode::BAD_REQUEST, "Failed to create the product")
        }
        Ok(Err(err)) => {
            log::error!("Failed to create product: {err}");
            json_error(StatusCode::BAD_REQUEST, "Failed to create the product")
        }
        Err(err) => unhandled(err),
    }
}

/// Unlike categories and tags, a successful update answers with the stored product.
#[put("/products/{product_id}")]
pub async fn edit_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<EditProductForm>,
) -> impl Responder {
    let product_id = path.into_inner();

    match web::block(move || modify_product(repo.get_ref(), product_id, form)).await {
        Ok(Ok(product)) => HttpResponse::Ok().json(product),
        Ok(Err(ServiceError::NotFound)) => json_message(StatusCode::NOT_FOUND, NOT_FOUND),
        Ok(Err(ServiceError::Form(message))) => {
            log::warn!("Rejected update for product {product_id}: {message}");
            json_error(StatusCode::BAD_REQUEST, "Failed to update the product")
        }
        Ok(Err(err)) => {
            log::error!("Failed to update product {product_id}: {err}");
            json_error(StatusCode::BAD_REQUEST, "Failed to update the product")
        }
        Err(err) => unhandled(err),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match web::block(move || remove_product(repo.get_ref(), product_id)).await {
        Ok(Ok(())) => HttpResponse::NoContent().finish(),
        Ok(Err(ServiceError::NotFound)) => json_message(StatusCode::NOT_FOUND, NOT_FOUND),
        Ok(Err(err)) => {
            log::error!("Failed to delete product {product_id}: {err}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to delete the product",
            )
        }
        Err(err) => unhandled(err),
    }
}
