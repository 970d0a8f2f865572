//! Landing page and themed SVG assets.

use actix_web::{HttpResponse, http::header, web};

use crate::templates;
use crate::state::AppState;

const SVG: &str = "image/svg+xml";
const ASSET_CACHE: &str = "public, max-age=86400";

/// Any unmatched route.
pub async fn landing(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(templates::landing_html(&state.site))
}

/// GET /favicon.svg
pub async fn favicon(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(SVG)
        .insert_header((header::CACHE_CONTROL, ASSET_CACHE))
        .body(templates::favicon_svg(&state.site))
}

/// GET /logo.svg
pub async fn logo(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(SVG)
        .insert_header((header::CACHE_CONTROL, ASSET_CACHE))
        .body(templates::logo_svg(&state.site))
}
