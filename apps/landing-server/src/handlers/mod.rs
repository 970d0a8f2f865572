//! HTTP handlers and route configuration.

mod pages;
mod signup;

use actix_web::web;

pub use signup::client_identity;

/// Configure all application routes.
///
/// Only exact path and method matches reach the API and the assets; every
/// other request, including a `GET /api/signup`, gets the landing page.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/signup")
            .route(web::post().to(signup::signup))
            .default_service(web::to(pages::landing)),
    )
    .service(
        web::resource("/favicon.svg")
            .route(web::get().to(pages::favicon))
            .default_service(web::to(pages::landing)),
    )
    .service(
        web::resource("/logo.svg")
            .route(web::get().to(pages::logo))
            .default_service(web::to(pages::landing)),
    )
    .default_service(web::to(pages::landing));
}
