//! End-to-end tests for the `shodan-tools` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The binary with an isolated config directory and no ambient key
fn shodan_tools(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shodan-tools").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("SHODAN_API_KEY")
        .env_remove("SHODAN_TOOLS_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Run a prepared command off the async runtime
async fn run(mut cmd: Command) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || cmd.assert())
        .await
        .unwrap()
}

#[test]
fn list_shows_every_tool() {
    let home = TempDir::new().unwrap();
    let output = shodan_tools(&home)
        .args(["list", "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let tools: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tools.len(), 20);
    assert!(tools.iter().any(|t| t["name"] == "list_trends_search_facets"));
}

#[test]
fn schema_for_one_tool() {
    let home = TempDir::new().unwrap();
    let output = shodan_tools(&home)
        .args(["schema", "get_host_info", "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let def: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(def["type"], "function");
    assert_eq!(def["function"]["name"], "get_host_info");
    assert_eq!(def["function"]["parameters"]["required"], json!(["ip"]));
}

#[test]
fn schema_rejects_unknown_tool() {
    let home = TempDir::new().unwrap();
    shodan_tools(&home)
        .args(["schema", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool: nope"));
}

#[test]
fn config_set_then_show_masks_key() {
    let home = TempDir::new().unwrap();

    shodan_tools(&home)
        .args(["config", "set", "api_key", "abcdefghijklmnop"])
        .assert()
        .success();

    shodan_tools(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abcd...mnop"))
        .stdout(predicate::str::contains("abcdefghijklmnop").not());
}

#[test]
fn config_rejects_unknown_key() {
    let home = TempDir::new().unwrap();
    shodan_tools(&home)
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[tokio::test(flavor = "multi_thread")]
async fn call_prints_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns/resolve"))
        .and(query_param("key", "flag-key"))
        .and(query_param("hostnames", "example.com"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "example.com": "93.184.216.34" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let mut cmd = shodan_tools(&home);
    cmd.args([
        "call", "dns_lookup", "-a", "hostnames=example.com", "-k", "flag-key", "-o", "json",
        "--base-url",
    ])
    .arg(server.uri());

    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("93.184.216.34"));
}

#[tokio::test(flavor = "multi_thread")]
async fn call_uses_configured_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api-info"))
        .and(query_param("key", "from-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "plan": "dev" })))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    shodan_tools(&home)
        .args(["config", "set", "api_key", "from-config"])
        .assert()
        .success();

    let mut cmd = shodan_tools(&home);
    cmd.args(["call", "get_api_plan_info", "-o", "json", "--base-url"])
        .arg(server.uri());

    run(cmd).await.success().stdout(predicate::str::contains("dev"));
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_call_exits_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shodan/host/1.2.3.4"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "error": "No information available for that IP." })),
        )
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let mut cmd = shodan_tools(&home);
    cmd.args(["call", "get_host_info", "-a", "ip=1.2.3.4", "-k", "k", "-o", "json", "--base-url"])
        .arg(server.uri());

    run(cmd)
        .await
        .code(1)
        .stdout(predicate::str::contains(
            "An error occurred while retrieving host information",
        ))
        .stdout(predicate::str::contains("No information available"));
}

#[test]
fn missing_required_argument_fails_without_network() {
    let home = TempDir::new().unwrap();
    shodan_tools(&home)
        .args(["call", "get_host_info", "-k", "k", "-o", "json"])
        .args(["--base-url", "http://127.0.0.1:9"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ip"));
}

#[test]
fn list_reports_base_url_override() {
    let home = TempDir::new().unwrap();
    let output = shodan_tools(&home)
        .args(["list", "-o", "json", "--base-url", "http://127.0.0.1:9/"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let tools: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert!(tools.iter().all(|t| t["host"] == "http://127.0.0.1:9"));
}

#[tokio::test(flavor = "multi_thread")]
async fn verbose_logs_the_call_without_the_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ports": [53] })))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let mut cmd = shodan_tools(&home);
    cmd.args(["call", "get_ip_info", "-a", "ip=8.8.8.8", "-k", "secret-key-1234"])
        .args(["-o", "json", "-v", "--no-color", "--base-url"])
        .arg(server.uri());

    run(cmd)
        .await
        .success()
        .stderr(predicate::str::contains("invoking tool"))
        .stderr(predicate::str::contains("resolved API key"))
        .stderr(predicate::str::contains("secret-key-1234").not());
}
