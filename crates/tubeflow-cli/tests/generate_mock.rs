
use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fixtures::{GENERATE_PATH, strategy_text, text_response};

#[tokio::test]
async fn test_generate_single_section_plain() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-api-key"))
        .and(body_string_contains("Urban Gardening"))
        .respond_with(text_response(&strategy_text()))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("tubeflow")
        .env("TUBEFLOW_HOME", home.path())
        .env("GEMINI_API_KEY", "test-api-key")
        .env("GEMINI_BASE_URL", server.uri())
        .args(["generate", "Urban Gardening", "--section", "seo", "--format", "plain"])
        .assert()
        .success()
        .stdout("Trending Hashtags\n#gardening #urban\n")
        .stderr(predicate::str::contains("Generating strategy"));
}

#[tokio::test]
async fn test_generate_sends_niche_verbatim() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_string_contains("niche: \\\"  Urban Gardening  \\\""))
        .respond_with(text_response(&strategy_text()))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("tubeflow")
        .env("TUBEFLOW_HOME", home.path())
        .env("GEMINI_API_KEY", "test-api-key")
        .env("GEMINI_BASE_URL", server.uri())
        .args(["generate", "  Urban Gardening  ", "-s", "seo", "-f", "plain"])
        .assert()
        .success()
        .stdout("Trending Hashtags\n#gardening #urban\n");
}

#[tokio::test]
async fn test_generate_all_sections_json() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(text_response(&strategy_text()))
        .mount(&server)
        .await;

    let assert = cargo_bin_cmd!("tubeflow")
        .env("TUBEFLOW_HOME", home.path())
        .env("GEMINI_API_KEY", "test-api-key")
        .env("GEMINI_BASE_URL", server.uri())
        .args(["generate", "Urban Gardening", "--format", "json"])
        .assert()
        .success();
    let doc: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(doc["uploadStrategy"], "Post at 9am");
    assert_eq!(doc.as_object().unwrap().len(), 8);
}

#[tokio::test]
async fn test_generate_uses_model_override() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-pro:generateContent"))
        .respond_with(text_response(&strategy_text()))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("tubeflow")
        .env("TUBEFLOW_HOME", home.path())
        .env("GEMINI_API_KEY", "test-api-key")
        .env("GEMINI_BASE_URL", server.uri())
        .args(["generate", "Chess", "--model", "gemini-2.5-pro", "-s", "strategy", "-f", "markdown"])
        .assert()
        .success()
        .stdout("Post at 9am\n");
}

#[tokio::test]
async fn test_generate_writes_output_file() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    let out = home.path().join("strategy.html");

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(text_response(&strategy_text()))
        .mount(&server)
        .await;

    cargo_bin_cmd!("tubeflow")
        .env("TUBEFLOW_HOME", home.path())
        .env("GEMINI_API_KEY", "test-api-key")
        .env("GEMINI_BASE_URL", server.uri())
        .args(["generate", "Urban Gardening", "--format", "html", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("data-niche=\"Urban Gardening\""));
    assert!(html.contains("<section id=\"monetization\">"));
    assert!(html.contains("<span class=\"md-hashtag\">#gardening</span>"));
}

#[tokio::test]
async fn test_generate_uses_api_key_from_config() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    fs::write(
        home.path().join("config.toml"),
        "[gemini]\napi_key = \"file-key\"\n",
    )
    .unwrap();

    Mock::given(method("POST"))
        .and(header("x-goog-api-key", "file-key"))
        .respond_with(text_response(&strategy_text()))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("tubeflow")
        .env("TUBEFLOW_HOME", home.path())
        .env("GEMINI_API_KEY", "env-key")
        .env("GEMINI_BASE_URL", server.uri())
        .args(["generate", "Chess", "--section", "script", "--format", "plain"])
        .assert()
        .success()
        .stdout("Intro: hey\n");
}

#[tokio::test]
async fn test_missing_api_key_fails_without_request() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    cargo_bin_cmd!("tubeflow")
        .env("TUBEFLOW_HOME", home.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .env("GEMINI_BASE_URL", server.uri())
        .args(["generate", "Chess"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API Key is missing"));
}

#[tokio::test]
async fn test_non_json_model_text_fails_with_parse_error() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(text_response("Sorry, I can't help with that."))
        .mount(&server)
        .await;

    cargo_bin_cmd!("tubeflow")
        .env("TUBEFLOW_HOME", home.path())
        .env("GEMINI_API_KEY", "test-api-key")
        .env("GEMINI_BASE_URL", server.uri())
        .args(["generate", "Chess"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse the strategy response"));
}

#[tokio::test]
async fn test_http_error_is_reported() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": { "code": 403, "message": "API key not valid.", "status": "PERMISSION_DENIED" }
        })))
        .mount(&server)
        .await;

    cargo_bin_cmd!("tubeflow")
        .env("TUBEFLOW_HOME", home.path())
        .env("GEMINI_API_KEY", "bad-key")
        .env("GEMINI_BASE_URL", server.uri())
        .args(["generate", "Chess"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 403"))
        .stderr(predicate::str::contains("API key not valid."));
}

#[test]
fn test_blank_niche_is_rejected() {
    let home = tempdir().unwrap();

    cargo_bin_cmd!("tubeflow")
        .env("TUBEFLOW_HOME", home.path())
        .env("GEMINI_API_KEY", "test-api-key")
        .args(["generate", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("niche must not be empty"));
}
