use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::tags::{AddTagForm, EditTagForm};
use crate::repository::DieselRepository;
use crate::routes::{json_error, json_message, unhandled};
use crate::services::ServiceError;
use crate::services::tags::{create_tag, load_tag, load_tags, modify_tag, remove_tag};

const NOT_FOUND: &str = "Tag not found";

#[get("/tags")]
pub async fn list_tags(repo: web::Data<DieselRepository>) -> impl Responder {
    match web::block(move || load_tags(repo.get_ref())).await {
        Ok(Ok(tags)) => HttpResponse::Ok().json(tags),
        Ok(Err(err)) => {
            log::error!("Failed to list tags: {err}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve tags")
        }
        Err(err) => unhandled(err),
    }
}

#[get("/tags/{tag_id}")]
pub async fn get_tag(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let tag_id = path.into_inner();

    match web::block(move || load_tag(repo.get_ref(), tag_id)).await {
        Ok(Ok(tag)) => HttpResponse::Ok().json(tag),
        Ok(Err(ServiceError::NotFound)) => json_message(StatusCode::NOT_FOUND, NOT_FOUND),
        Ok(Err(err)) => {
            log::error!("Failed to load tag {tag_id}: {err}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to retrieve the tag",
            )
        }
        Err(err) => unhandled(err),
    }
}

#[post("/tags")]
pub async fn add_tag(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddTagForm>,
) -> impl Responder {
    match web::block(move || create_tag(repo.get_ref(), form)).await {
        Ok(Ok(tag)) => HttpResponse::Created().json(tag),
        Ok(Err(ServiceError::Form(message))) => {
            log::warn!("Rejected tag payload: {message}");
            json_error(StatusCode::BAD_REQUEST, "Failed to create the tag")
        }
        Ok(Err(err)) => {
            log::error!("Failed to create tag: {err}");
            json_error(StatusCode::BAD_REQUEST, "Failed to create the tag")
        }
        Err(err) => unhandled(err),
    }
}

#[put("/tags/{tag_id}")]
pub async fn edit_tag(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<EditTagForm>,
) -> impl Responder {
    let tag_id = path.into_inner();

    match web::block(move || modify_tag(repo.get_ref(), tag_id, form)).await {
        Ok(Ok(_)) => json_message(StatusCode::OK, "Tag updated successfully"),
        Ok(Err(ServiceError::NotFound)) => json_message(StatusCode::NOT_FOUND, NOT_FOUND),
        Ok(Err(ServiceError::Form(message))) => {
            log::warn!("Rejected update for tag {tag_id}: {message}");
            json_error(StatusCode::BAD_REQUEST, "Failed to update the tag")
        }
        Ok(Err(err)) => {
            log::error!("Failed to modify tag {tag_id}: {err}");
            json_error(StatusCode::BAD_REQUEST, "Failed to update the tag")
        }
        Err(err) => unhandled(err),
    }
}

#[delete("/tags/{tag_id}")]
pub async fn delete_tag(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let tag_id = path.into_inner();

    match web::block(move || remove_tag(repo.get_ref(), tag_id)).await {
        Ok(Ok(())) => HttpResponse::NoContent().finish(),
        Ok(Err(ServiceError::NotFound)) => json_message(StatusCode::NOT_FOUND, NOT_FOUND),
        Ok(Err(err)) => {
            log::error!("Failed to delete tag {tag_id}: {err}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete the tag")
        }
        Err(err) => unhandled(err),
    }
}
