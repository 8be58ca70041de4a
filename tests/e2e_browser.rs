//! Full-pipeline test that drives a real headless browser against a local
//! HTTP server. Requires a Chrome/Chromium install; run with:
//!
//!     cargo test --features integration --test e2e_browser

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use testforge::api::LlmClient;
use testforge::errors::GenerationError;
use testforge::{Config, TestGenerator};

const SEARCH_PAGE: &str = r#"<html>
<head><title>Search</title></head>
<body>
<form action="/s">
  <input id="kw" name="wd" type="text">
  <input id="su" type="submit" value="Search">
</form>
</body>
</html>"#;

struct MockClient;

#[async_trait]
impl LlmClient for MockClient {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Ok(r#"```python
await page.fill('input#kw', 'query')
await page.click('input#su')
print('Test Result: pass')
```"#
            .to_string())
    }
}

/// Serve `SEARCH_PAGE` for a handful of requests, then stop.
async fn serve_page(listener: TcpListener) {
    let body = SEARCH_PAGE;
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    for _ in 0..8 {
        let Ok((mut stream, _)) = listener.accept().await else {
            return;
        };
        let mut buf = [0u8; 4096];
        let _ = stream.read(&mut buf).await;
        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;
    }
}

#[tokio::test]
async fn full_pipeline_against_local_page() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(serve_page(listener));

    let config = Config {
        api_key: Some("sk-test".to_string()),
        nav_timeout_secs: 30,
        ..Config::default()
    };
    let generator = TestGenerator::with_client(config, Box::new(MockClient));

    let url = format!("http://{}/", addr);
    let scenario = "Fill the search box (input#kw) and click submit (input#su).";
    let script = generator.generate(&url, scenario).await.unwrap();

    assert!(!script.is_empty());
    assert!(!script
        .lines()
        .any(|line| line.trim_start().starts_with("```")));
    assert!(script.contains("kw"));
    assert!(script.contains("su"));

    server.abort();
}
