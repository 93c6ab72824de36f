use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::categories::{AddCategoryForm, EditCategoryForm};
use crate::repository::DieselRepository;
use crate::routes::{json_error, json_message, unhandled};
use crate::services::ServiceError;
use crate::services::categories::{
    create_category, load_categories, load_category, modify_category, remove_category,
};

const NOT_FOUND: &str = "Category not found";

#[get("/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match web::block(move || load_categories(repo.get_ref())).await {
        Ok(Ok(categories)) => HttpResponse::Ok().json(categories),
        Ok(Err(err)) => {
            log::error!("Failed to list categories: {err}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to retrieve categories",
            )
        }
        Err(err) => unhandled(err),
    }
}

#[get("/categories/{category_id}")]
pub async fn get_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = path.into_inner();

    match web::block(move || load_category(repo.get_ref(), category_id)).await {
        Ok(Ok(category)) => HttpResponse::Ok().json(category),
        Ok(Err(ServiceError::NotFound)) => json_message(StatusCode::NOT_FOUND, NOT_FOUND),
        Ok(Err(err)) => {
            log::error!("Failed to load category {category_id}: {err}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to retrieve the category",
            )
        }
        Err(err) => unhandled(err),
    }
}

#[post("/categories")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddCategoryForm>,
) -> impl Responder {
    match web::block(move || create_category(repo.get_ref(), form)).await {
        Ok(Ok(category)) => HttpResponse::Created().json(category),
        Ok(Err(ServiceError::Form(message))) => {
            log::warn!("Rejected category payload: {message}");
            json_error(StatusCode::BAD_REQUEST, "Failed to create the category")
        }
        Ok(Err(err)) => {
            log::error!("Failed to create category: {err}");
            json_error(StatusCode::BAD_REQUEST, "Failed to create the category")
        }
        Err(err) => unhandled(err),
    }
}

#[put("/categories/{category_id}")]
pub async fn edit_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<EditCategoryForm>,
) -> impl Responder {
    let category_id = path.into_inner();

    match web::block(move || modify_category(repo.get_ref(), category_id, form)).await {
        Ok(Ok(_)) => json_message(StatusCode::OK, "Category updated successfully"),
        Ok(Err(ServiceError::NotFound)) => json_message(StatusCode::NOT_FOUND, NOT_FOUND),
        Ok(Err(ServiceError::Form(message))) => {
            log::warn!("Rejected update for category {category_id}: {message}");
            json_error(StatusCode::BAD_REQUEST, "Failed to update the category")
        }
        Ok(Err(err)) => {
            log::error!("Failed to update category {category_id}: {err}");
            json_error(StatusCode::BAD_REQUEST, "Failed to update the category")
        }
        Err(err) => unhandled(err),
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = path.into_inner();

    match web::block(move || remove_category(repo.get_ref(), category_id)).await {
        Ok(Ok(())) => HttpResponse::NoContent().finish(),
        Ok(Err(ServiceError::NotFound)) => json_message(StatusCode::NOT_FOUND, NOT_FOUND),
        Ok(Err(err)) => {
            log::error!("Failed to delete category {category_id}: {err}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to delete the category",
            )
        }
        Err(err) => unhandled(err),
    }
}
