use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use iet::catalog::{Registry, all_routes};
use iet_server::Server;
use tower::ServiceExt;

fn server() -> Server {
    Server::builder().build().expect("builtin catalog builds")
}

async fn get(path: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(path).body(Body::empty()).expect("request");
    let response = server().router().oneshot(request).await.expect("infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn landing_page_lists_every_section() {
    let (status, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert_eq!(body.matches("section-card").count(), Registry::builtin().len());
    assert!(body.contains("about-card"));
}

#[tokio::test]
async fn every_registered_route_is_served() {
    for item in all_routes() {
        let (status, body) = get(item.url).await;
        assert_eq!(status, StatusCode::OK, "{}", item.url);
        assert!(body.contains(item.title), "{} should render its title", item.url);
    }
}

#[tokio::test]
async fn tool_page_shows_legacy_form() {
    let (status, body) = get("/work-sampling/calculator").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("frmWSCalc"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, body) = get("/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
    assert!(body.contains("/nonexistent"));
}

#[tokio::test]
async fn child_prefix_without_registration_is_not_found() {
    // Prefix lookup belongs to the sidebar, routing is exact.
    let (status, _) = get("/time-study/observations/extra").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_route_count() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(json["status"], "up");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["routes"], all_routes().len());
}

#[test]
fn empty_catalog_is_rejected() {
    static NONE: [iet::catalog::NavSection; 0] = [];
    let err = Server::builder().registry(Registry::new(&NONE)).build().expect_err("empty");
    assert!(err.to_string().contains("no sections"));
}

#[test]
fn port_override_lands_in_state() {
    let server = Server::builder().port(9191).build().expect("build");
    assert_eq!(server.state().config.server.port, 9191);
}

#[test]
fn duplicate_urls_fail_at_build_time() {
    use iet::catalog::{Icon, NavItem, NavSection};

    static ITEMS: [NavItem; 2] = [NavItem::new("One", "/same"), NavItem::new("Two", "/same")];
    static SECTIONS: [NavSection; 1] = [NavSection::new("Dupes", Icon::Info, &ITEMS)];

    let err = Server::builder().registry(Registry::new(&SECTIONS)).build().expect_err("duplicate");
    assert!(format!("{err:#}").contains("/same"));
}

#[test]
fn relative_urls_fail_at_build_time() {
    use iet::catalog::{Icon, NavItem, NavSection};

    static ITEMS: [NavItem; 1] = [NavItem::new("Relative", "relative")];
    static SECTIONS: [NavSection; 1] = [NavSection::new("Bad", Icon::Info, &ITEMS)];

    assert!(Server::builder().registry(Registry::new(&SECTIONS)).build().is_err());
}

#[test]
fn server_owned_paths_cannot_be_claimed() {
    use iet::catalog::{Icon, NavItem, NavSection};

    static ROOT: [NavItem; 1] = [NavItem::new("Home", "/")];
    static HEALTH: [NavItem; 1] = [NavItem::new("Health", "/health")];
    static ASSETS: [NavItem; 1] = [NavItem::new("Logo", "/assets/logo")];
    static SECTIONS: [[NavSection; 1]; 3] = [
        [NavSection::new("Root", Icon::Info, &ROOT)],
        [NavSection::new("Health", Icon::Info, &HEALTH)],
        [NavSection::new("Assets", Icon::Info, &ASSETS)],
    ];

    for sections in &SECTIONS {
        let err = Server::builder().registry(Registry::new(sections)).build().expect_err("reserved");
        assert!(err.to_string().contains("clashes with a built-in server path"), "{err}");
    }
}
