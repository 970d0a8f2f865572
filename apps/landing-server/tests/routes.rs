//! Dispatch table: exact matches for the API and assets, landing page for
//! everything else.

use std::sync::Arc;

use actix_web::http::{Method, StatusCode, header};
use actix_web::{App, test, web};

use landing_server::{AppConfig, AppState, configure_routes};
use launchpad_infra::InMemoryStore;

fn state() -> AppState {
    let config = AppConfig::from_lookup(|key| match key {
        "BRAND_NAME" => Some("Nebula".to_string()),
        "THEME_PRIMARY" => Some("#112233".to_string()),
        _ => None,
    });
    AppState::with_backends(&config, Arc::new(InMemoryStore::new()), None)
}

fn content_type(resp: &actix_web::dev::ServiceResponse) -> String {
    resp.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[actix_web::test]
async fn test_svg_assets() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    for path in ["/favicon.svg", "/logo.svg"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(content_type(&resp), "image/svg+xml");
        assert!(resp.headers().contains_key(header::CACHE_CONTROL));

        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("#112233"), "{path} should use the theme");
    }

    let resp = test::call_service(&app, test::TestRequest::get().uri("/logo.svg").to_request()).await;
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains(">Nebula</text>"));
}

#[actix_web::test]
async fn test_everything_else_is_the_landing_page() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let cases = [
        (Method::GET, "/"),
        (Method::GET, "/pricing"),
        (Method::GET, "/api/signup"),
        (Method::POST, "/favicon.svg"),
        (Method::DELETE, "/logo.svg"),
        (Method::POST, "/api/signup/extra"),
    ];

    for (method, path) in cases {
        let req = test::TestRequest::default()
            .method(method.clone())
            .uri(path)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{method} {path}");
        assert!(content_type(&resp).starts_with("text/html"), "{method} {path}");

        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("Nebula - coming soon"), "{method} {path}");
        assert!(body.contains(r#"action="/api/signup""#));
    }
}
