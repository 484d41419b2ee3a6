use std::path::{Path, PathBuf};

use asserting::prelude::*;
use tokio::process::Command;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const SAMPLE_LOG: &str = "\
path_to_file,timestamp,browser,status,request_size
/images/splash.png,2014-01-27 00:14:20,Mozilla/5.0 AppleWebKit/537.36 Chrome/70.0 Safari/537.36,200,2048
/funny.html,2014-01-27 00:16:19,Mozilla/5.0 Gecko/20100101 Firefox/64.0,200,512
/pics/morning.JPG,2014-01-27 14:23:01,Mozilla/5.0 AppleWebKit/537.36 Chrome/70.0 Safari/537.36,200,4096
";

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("weblog-stats-it-{}-{name}", std::process::id()))
}

async fn serve(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weblog.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    server
}

async fn run_against(server: &MockServer, output_file: &Path, extra: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_weblog-stats"))
        .args([
            "--url",
            &format!("{}/weblog.csv", server.uri()),
            "--output",
            output_file.to_str().unwrap(),
        ])
        .args(extra)
        .output()
        .await
        .expect("failed to run weblog-stats")
}

#[tokio::test]
async fn reports_image_share_browser_and_hourly_histogram() {
    let server = serve(SAMPLE_LOG).await;
    let output_file = scratch_file("report.csv");

    let output = run_against(&server, &output_file, &[]).await;
    let stdout = String::from_utf8(output.stdout).unwrap();
    tokio::fs::remove_file(&output_file).await.ok();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_that!(stdout).is_equal_to(
        "Image requests account for 66.7% of all requests\n\
         The total size of all image requests equals 0.0 MB\n\
         The most popular browser is: Chrome\n\
         \n\
         Hourly Log Report:\n\
         Hour 00 has 2 hits\n\
         Hour 14 has 1 hits\n"
            .to_string(),
    );
}

#[tokio::test]
async fn json_format_reports_the_same_numbers() {
    let server = serve(SAMPLE_LOG).await;
    let output_file = scratch_file("json.csv");

    let output = run_against(&server, &output_file, &["--format", "json"]).await;
    let stdout = String::from_utf8(output.stdout).unwrap();
    tokio::fs::remove_file(&output_file).await.ok();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["total_requests"], 3);
    assert_eq!(value["image_requests"], 2);
    assert_eq!(value["image_bytes"], 6144);
    assert_eq!(value["most_popular_browser"], "Chrome");
    assert_eq!(value["browsers"]["Chrome"], 2);
    assert_eq!(value["browsers"]["Firefox"], 1);
}

#[tokio::test]
async fn unreachable_url_produces_a_transport_error_and_no_report() {
    let port = portpicker::pick_unused_port().expect("no free ports");
    let output_file = scratch_file("unreachable.csv");

    let output = Command::new(env!("CARGO_BIN_EXE_weblog-stats"))
        .args([
            "--url",
            &format!("http://127.0.0.1:{port}/weblog.csv"),
            "--output",
            output_file.to_str().unwrap(),
        ])
        .output()
        .await
        .expect("failed to run weblog-stats");

    assert!(!output.status.success());
    assert_that!(output.stdout.len()).is_equal_to(0);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error downloading the log"), "stderr: {stderr}");
}

#[tokio::test]
async fn http_error_status_fails_the_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let output_file = scratch_file("status.csv");

    let output = run_against(&server, &output_file, &[]).await;

    assert!(!output.status.success());
    assert_that!(output.stdout.len()).is_equal_to(0);
}

#[tokio::test]
async fn malformed_row_aborts_with_its_line_number() {
    let server = serve("path,ts,agent,status,size\n/a.html,2014-01-27 00:00:01,curl/7.0,200\n").await;
    let output_file = scratch_file("malformed.csv");

    let output = run_against(&server, &output_file, &[]).await;
    tokio::fs::remove_file(&output_file).await.ok();

    assert!(!output.status.success());
    assert_that!(output.stdout.len()).is_equal_to(0);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
}

#[tokio::test]
async fn header_only_log_reports_empty_input() {
    let server = serve("path,ts,agent,status,size\n").await;
    let output_file = scratch_file("empty.csv");

    let output = run_against(&server, &output_file, &[]).await;
    tokio::fs::remove_file(&output_file).await.ok();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no data rows"), "stderr: {stderr}");
}
