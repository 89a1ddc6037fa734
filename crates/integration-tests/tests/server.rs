mod harness;

use harness::config::ConfigBuilder;
use harness::mock_openai::MockOpenAi;
use harness::server::TestServer;

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let mock = MockOpenAi::answering("a", "b").await.unwrap();
    let config = ConfigBuilder::new().with_upstream(&mock.base_url()).build();

    let server = TestServer::start(config).await.unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn health_endpoint_disabled() {
    let mock = MockOpenAi::answering("a", "b").await.unwrap();
    let public = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new()
        .with_upstream(&mock.base_url())
        .with_public_dir(public.path())
        .without_health()
        .build();

    let server = TestServer::start(config).await.unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn results_page_ignores_query() {
    let mock = MockOpenAi::answering("a", "b").await.unwrap();
    let public = tempfile::tempdir().unwrap();
    std::fs::write(public.path().join("results.html"), "<p id=\"answer\"></p>").unwrap();
    let config = ConfigBuilder::new()
        .with_upstream(&mock.base_url())
        .with_public_dir(public.path())
        .build();

    let server = TestServer::start(config).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/results?question=hello%20world&answer=hi%20there"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(
        resp.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    assert_eq!(resp.text().await.unwrap(), "<p id=\"answer\"></p>");
}

#[tokio::test]
async fn static_assets_are_served() {
    let mock = MockOpenAi::answering("a", "b").await.unwrap();
    let public = tempfile::tempdir().unwrap();
    std::fs::write(public.path().join("index.html"), "<button>record</button>").unwrap();
    let config = ConfigBuilder::new()
        .with_upstream(&mock.base_url())
        .with_public_dir(public.path())
        .build();

    let server = TestServer::start(config).await.unwrap();

    let resp = server.client().get(server.url("/")).send().await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "<button>record</button>");
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let mock = MockOpenAi::answering("a", "b").await.unwrap();
    let config = ConfigBuilder::new().with_upstream(&mock.base_url()).build();

    let server = TestServer::start(config).await.unwrap();

    let resp = server
        .client()
        .request(reqwest::Method::OPTIONS, server.url("/api/process-audio"))
        .header("Origin", "https://recorder.example")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}
