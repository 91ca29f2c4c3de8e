use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".wealth-dashboard").join("config.json")
}

/// Serves a single HTTP response on a local port and returns the base URL.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // Read until the end of the request headers
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}", addr)
}

/// A base URL with nothing listening behind it.
fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

const HOME_PAYLOAD: &str = r##"{"total_net_worth":1000000,"liquid_capital":200000,"currency":"ILS","breakdown":[{"name":"Home","value":600000,"color":"#22c55e","icon":"Home"}]}"##;

const BINARY_NAME: &str = "wealth-dashboard";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Family net-worth dashboard"));
}

#[test]
/// Summary should print formatted totals and category shares.
fn summary_prints_formatted_dashboard() {
    let tmp = temp_home_dir();
    let api_url = serve_once("200 OK", HOME_PAYLOAD);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("summary")
        .arg("--api-url")
        .arg(&api_url)
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("₪1,000,000"))
        .stdout(contains("₪200,000"))
        .stdout(contains("Home"))
        .stdout(contains("60.0%"));
}

#[test]
/// A backend error status is reported with the single failure message.
fn summary_reports_http_error_as_communication_failure() {
    let tmp = temp_home_dir();
    let api_url = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("summary")
        .arg("--api-url")
        .arg(&api_url)
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stdout(contains("Could not connect to the server"));
}

#[test]
/// A malformed body is reported the same way as an unreachable backend.
fn summary_reports_malformed_payload_as_communication_failure() {
    let tmp = temp_home_dir();
    let api_url = serve_once("200 OK", r#"{"total_net_worth":"a lot"}"#);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("summary")
        .arg("--api-url")
        .arg(&api_url)
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stdout(contains("Could not connect to the server"));
}

#[test]
/// An unreachable backend fails with the single failure message.
fn summary_reports_unreachable_backend() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("summary")
        .arg("--api-url")
        .arg(unreachable_url())
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stdout(contains("Could not connect to the server"));
}

#[test]
/// Summary should use the URL saved in the config file when no flag is given.
fn summary_uses_saved_api_url() {
    let tmp = temp_home_dir();
    let api_url = serve_once("200 OK", HOME_PAYLOAD);

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("set-api-url")
        .arg("--url")
        .arg(&api_url)
        .env("HOME", tmp.path())
        .assert()
        .success();

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("summary")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains(api_url.as_str()))
        .stdout(contains("₪1,000,000"));
}

#[test]
/// Status should print the backend's liveness report.
fn status_prints_backend_report() {
    let tmp = temp_home_dir();
    let api_url = serve_once(
        "200 OK",
        r#"{"status":"System is online","project":"Family Wealth OS"}"#,
    );

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("status")
        .arg("--api-url")
        .arg(&api_url)
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("System is online"))
        .stdout(contains("Family Wealth OS"));
}

#[test]
/// set-api-url should write the config file.
fn set_api_url_creates_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-api-url")
        .arg("--url")
        .arg("http://10.0.0.7:8000")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Saved API URL"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("http://10.0.0.7:8000"));
}

#[test]
/// set-api-url should refuse URLs without an http(s) scheme.
fn set_api_url_rejects_invalid_url() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-api-url")
        .arg("--url")
        .arg("localhost:8000")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Invalid API URL"));

    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// reset-config should delete an existing config file.
fn reset_config_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset-config")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Removing configuration file"));

    assert!(!config_path.exists());
}
