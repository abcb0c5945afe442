use std::fs;

use anyhow::Result;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
    response::Response,
    routing::get,
};
use i18n_flow::config::PluginOptions;
use i18n_flow::server::{
    DevServerConfig, I18nFlowPlugin, Middleware, Mode, build_app, host_config,
};
use i18n_flow::update::UpdateSettings;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

const ROUTE: &str = "/i18n-flow/update";

struct ServerTest {
    _temp_dir: TempDir,
    settings: UpdateSettings,
}

impl ServerTest {
    fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let settings = UpdateSettings::new(temp_dir.path().canonicalize()?);
        fs::create_dir_all(settings.locale_dir(i18n_flow::update::Locale::En))?;
        fs::create_dir_all(settings.locale_dir(i18n_flow::update::Locale::Cn))?;
        Ok(Self {
            _temp_dir: temp_dir,
            settings,
        })
    }

    fn plugin(&self, mode: Mode) -> I18nFlowPlugin {
        I18nFlowPlugin::new(PluginOptions::default(), mode, self.settings.clone())
    }

    fn app(&self, mode: Mode) -> Router {
        build_app(&self.plugin(mode), host_config())
    }

    fn bundle(&self, locale_dir: &str, stem: &str) -> std::path::PathBuf {
        self.settings
            .locales_root()
            .join(locale_dir)
            .join(format!("{}.ts", stem))
    }
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn json_body(response: Response) -> Result<Value> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn content_type(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn test_update_writes_bundle_and_acknowledges() -> Result<()> {
    let test = ServerTest::new()?;
    let path = test.bundle("zh-CN", "greet");
    fs::write(&path, "export default { hello: 'Hi', bye: 'Bye' };")?;

    let body = json!({
        "key": ["ns", "greet", "hello"],
        "en": "Hello",
        "cn": "你好",
        "lang": "cn"
    });
    let response = test
        .app(Mode::Development)
        .oneshot(post(ROUTE, body.to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), Some("application/json"));
    assert_eq!(json_body(response).await?, json!({ "message": "Received" }));
    assert_eq!(
        fs::read_to_string(&path)?,
        "export default {\n  \"hello\": \"你好\",\n  \"bye\": \"Bye\"\n}\n"
    );
    assert!(!test.bundle("en-US", "greet").exists());

    Ok(())
}

#[tokio::test]
async fn test_update_without_lang_writes_english() -> Result<()> {
    let test = ServerTest::new()?;

    let body = json!({ "key": ["ns", "home", "title"], "en": "Home", "cn": "首页" });
    let response = test
        .app(Mode::Development)
        .oneshot(post(ROUTE, body.to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        fs::read_to_string(test.bundle("en-US", "home"))?,
        "export default {\n  \"title\": \"Home\"\n}\n"
    );

    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_internal_error() -> Result<()> {
    let test = ServerTest::new()?;
    let path = test.bundle("en-US", "greet");
    let original = "export default { hello: 'Hi' };";
    fs::write(&path, original)?;

    let response = test
        .app(Mode::Development)
        .oneshot(post(ROUTE, "{ not json"))
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type(&response), Some("application/json"));
    assert_eq!(
        json_body(response).await?,
        json!({ "message": "Internal Server Error" })
    );
    assert_eq!(fs::read_to_string(&path)?, original);

    Ok(())
}

#[tokio::test]
async fn test_short_key_is_internal_error() -> Result<()> {
    let test = ServerTest::new()?;

    let body = json!({ "key": ["ns", "greet"], "en": "Hello", "cn": "你好" });
    let response = test
        .app(Mode::Development)
        .oneshot(post(ROUTE, body.to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

#[tokio::test]
async fn test_write_failure_is_internal_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let plugin = I18nFlowPlugin::new(
        PluginOptions::default(),
        Mode::Development,
        UpdateSettings::new(temp_dir.path()),
    );

    let body = json!({ "key": ["ns", "greet", "hello"], "en": "Hello", "cn": "你好" });
    let response = build_app(&plugin, DevServerConfig::default())
        .oneshot(post(ROUTE, body.to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!temp_dir.path().join("src").exists());

    Ok(())
}

#[tokio::test]
async fn test_route_matches_any_method() -> Result<()> {
    let test = ServerTest::new()?;

    let request = Request::builder()
        .method(Method::PUT)
        .uri(ROUTE)
        .body(Body::from(
            json!({ "key": ["ns", "greet", "hello"], "en": "Hello", "cn": "你好" }).to_string(),
        ))?;
    let response = test.app(Mode::Development).oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_other_paths_pass_through() -> Result<()> {
    let test = ServerTest::new()?;

    let response = test
        .app(Mode::Development)
        .oneshot(post("/i18n-flow/other", "{}"))
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_host_routes_still_answer() -> Result<()> {
    let test = ServerTest::new()?;
    let config = test
        .plugin(Mode::Development)
        .modify_config(DevServerConfig::default(), i18n_flow::server::merge_dev_config);
    let app = config.into_router(Router::new().route("/health", get(|| async { "ok" })));

    let request = Request::builder().uri("/health").body(Body::empty())?;
    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    assert_eq!(&bytes[..], b"ok");

    Ok(())
}

#[tokio::test]
async fn test_production_does_not_intercept() -> Result<()> {
    let test = ServerTest::new()?;

    let body = json!({ "key": ["ns", "greet", "hello"], "en": "Hello", "cn": "你好" });
    let response = test
        .app(Mode::Production)
        .oneshot(post(ROUTE, body.to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(!test.bundle("en-US", "greet").exists());

    Ok(())
}

#[tokio::test]
async fn test_update_runs_before_host_middlewares() -> Result<()> {
    let test = ServerTest::new()?;
    let blocking = Middleware::new("block-all", |router: Router| {
        router.layer(axum::middleware::from_fn(
            |_request: axum::extract::Request, _next: axum::middleware::Next| async {
                StatusCode::FORBIDDEN
            },
        ))
    });
    let host = DevServerConfig::default().with_middleware(blocking);
    let app = build_app(&test.plugin(Mode::Development), host);

    let body = json!({ "key": ["ns", "greet", "hello"], "en": "Hello", "cn": "你好" });
    let response = app.clone().oneshot(post(ROUTE, body.to_string())).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(post("/elsewhere", "")).await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}
