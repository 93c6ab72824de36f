use std::fmt::Display;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, error, web};
use serde::Serialize;

pub mod categories;
pub mod products;
pub mod tags;

/// JSON body of failed requests. The text is fixed per route.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// JSON body carrying a human-readable status message.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Register the `/api` resources, the JSON extractor config and the fallback route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/api")
                .service(categories::list_categories)
                .service(categories::get_category)
                .service(categories::add_category)
                .service(categories::edit_category)
                .service(categories::delete_category)
                .service(tags::list_tags)
                .service(tags::get_tag)
                .service(tags::add_tag)
                .service(tags::edit_tag)
                .service(tags::delete_tag)
                .service(products::list_products)
                .service(products::get_product)
                .service(products::add_product)
                .service(products::edit_product)
                .service(products::delete_product),
        )
        .default_service(web::to(not_found));
}

/// Unparsable or mistyped bodies are rejected before any handler runs.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        log::warn!("Rejected request body for {}: {err}", req.path());
        let response = HttpResponse::BadRequest().json(ErrorBody {
            error: "Invalid request body",
        });
        error::InternalError::from_response(err, response).into()
    })
}

/// Fallback for paths that match no route.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body("Sorry can't find that!")
}

pub(crate) fn json_error(status: StatusCode, error: &'static str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody { error })
}

pub(crate) fn json_message(status: StatusCode, message: &'static str) -> HttpResponse {
    HttpResponse::build(status).json(MessageBody { message })
}

/// Last-resort response when the blocking executor itself fails.
pub(crate) fn unhandled(err: impl Display) -> HttpResponse {
    log::error!("Unhandled server error: {err}");
    HttpResponse::InternalServerError()
        .content_type("text/plain; charset=utf-8")
        .body("Something broke!")
}
