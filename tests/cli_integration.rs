use assert_cmd::cargo::cargo_bin_cmd;
use httpmock::Method::GET;
use httpmock::MockServer;
use tempfile::tempdir;

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

#[test]
fn test_cli_help_succeeds() {
    let output = cargo_bin_cmd!("webby")
        .arg("--help")
        .output()
        .expect("run webby");
    assert!(output.status.success(), "help should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "help should include usage text");
}

#[test]
fn test_cli_segment() {
    let output = cargo_bin_cmd!("webby")
        .args(["segment", "https://test.com/path1/path2/filename.zip?a=b&z=3"])
        .output()
        .expect("run webby");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "filename.zip\n");
}

#[test]
fn test_cli_segment_invalid_url_exit_code() {
    let output = cargo_bin_cmd!("webby")
        .args(["segment", "https://exa mple.com/file.zip"])
        .output()
        .expect("run webby");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("webby: error:"));
}

#[test]
fn test_cli_url_builder() {
    let output = cargo_bin_cmd!("webby")
        .args([
            "url",
            "--base",
            "https://api.example.com",
            "--path",
            "/v1/search",
            "--param",
            "q=rust",
            "--param",
            "page=",
        ])
        .output()
        .expect("run webby");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "https://api.example.com/v1/search?q=rust\n"
    );
}

#[test]
fn test_cli_json_pretty_prints() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data");
        then.status(200).body(r#"{"key":"value"}"#);
    });

    let output = cargo_bin_cmd!("webby")
        .arg("json")
        .arg(server.url("/data"))
        .output()
        .expect("run webby");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"key\": \"value\""));
}

#[test]
fn test_cli_json_to_file() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data");
        then.status(200).body(r#"{"key":"value"}"#);
    });

    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("data.json");
    let output = cargo_bin_cmd!("webby")
        .arg("json")
        .arg(server.url("/data"))
        .arg("-o")
        .arg(&path)
        .output()
        .expect("run webby");
    assert!(output.status.success());
    let written = std::fs::read_to_string(path).expect("read output");
    assert_eq!(written, "{\n  \"key\": \"value\"\n}\n");
}

#[test]
fn test_cli_csv_to_file() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rows");
        then.status(200).body("1,2,row1\n4,5,row2");
    });

    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("rows.csv");
    let output = cargo_bin_cmd!("webby")
        .arg("csv")
        .arg(server.url("/rows"))
        .arg("-o")
        .arg(&path)
        .output()
        .expect("run webby");
    assert!(output.status.success());
    let written = std::fs::read_to_string(path).expect("read output");
    assert_eq!(written, "1,2,row1\n4,5,row2\n");
}

#[test]
fn test_cli_body_not_found_exit_code() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404).body("nope");
    });

    let output = cargo_bin_cmd!("webby")
        .arg("body")
        .arg(server.url("/missing"))
        .output()
        .expect("run webby");
    assert_eq!(output.status.code(), Some(22));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("404"));
}
