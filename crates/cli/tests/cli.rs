//! Command-line behavior of `entity-console`.

use std::io::Write;

use assert_cmd::Command;
use axum::routing::post;
use axum::{Json, Router};
use predicates::prelude::*;
use serde_json::{Value, json};

/// Port nothing listens on; requests to it fail to connect
const DEAD_BACKEND: &str = "http://127.0.0.1:1";

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("entity-console").unwrap();
    cmd.env_remove("CONSOLE_BACKEND_URL")
        .env_remove("CONSOLE_REQUEST_TIMEOUT_SECS")
        .env("RUST_LOG", "off")
        .env("NO_COLOR", "1");
    cmd
}

/// Serve every endpoint with `{code, message: <entityname>}` on a background runtime
fn spawn_backend(code: i64) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            let reply = move |Json(body): Json<Value>| async move {
                Json(json!({"code": code, "message": body["entityname"]}))
            };
            let app = Router::new()
                .route("/entity/add", post(reply))
                .route("/entity/insertdemo", post(reply))
                .route("/entity/indexall", post(reply));
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });

    format!("http://{addr}")
}

#[test]
fn help_lists_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create-entity"))
        .stdout(predicate::str::contains("insert-demo"))
        .stdout(predicate::str::contains("create-index"))
        .stdout(predicate::str::contains("fields"));
}

#[test]
fn fields_previews_labels_in_order() {
    cli()
        .args(["fields", "--field", "id:long:pk", "--field", "vec:feature:indexed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. id (long, pk)"))
        .stdout(predicate::str::contains("2. vec (feature, indexed)"));
}

#[test]
fn fields_rejects_empty_name() {
    cli()
        .args(["fields", "--field", ":long"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please specify a name for the field."));
}

#[test]
fn malformed_field_spec_is_an_argument_error() {
    cli()
        .args(["fields", "--field", "age"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid field specification 'age'"));
}

#[test]
fn empty_entity_is_rejected_before_network() {
    cli()
        .args(["--base-url", DEAD_BACKEND, "create-entity", "--entity", "", "--field", "id:long"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please specify an entity."))
        .stderr(predicate::str::contains("Unspecified error").not());
}

#[test]
fn empty_datatype_is_rejected_before_network() {
    cli()
        .args(["--base-url", DEAD_BACKEND, "create-index", "--entity", "features", "--field", "id:"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please specify a datatype for the field."));
}

#[test]
fn unreachable_backend_reports_transport_failure() {
    cli()
        .args(["--base-url", DEAD_BACKEND, "--timeout", "5", "create-entity", "--entity", "features"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unspecified error in request."));
}

#[test]
fn invalid_base_url_is_a_config_error() {
    cli()
        .args(["--base-url", "ftp://example.com", "create-entity", "--entity", "features"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn unknown_config_key_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "base_url = \"http://127.0.0.1:8080\"\nretries = 3").unwrap();

    cli()
        .arg("--config")
        .arg(file.path())
        .args(["create-entity", "--entity", "features"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn config_file_supplies_base_url() {
    let base_url = spawn_backend(200);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "base_url = \"{base_url}\"\ntimeout_secs = 5").unwrap();

    cli()
        .arg("--config")
        .arg(file.path())
        .args(["create-entity", "--entity", "features", "--field", "id:long:pk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("features created"));
}

#[test]
fn insert_demo_success() {
    let base_url = spawn_backend(200);

    cli()
        .args(["--base-url", &base_url, "insert-demo", "--entity", "features"])
        .args(["--ntuples", "100", "--ndims", "16", "--field", "vec:feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data inserted"));
}

#[test]
fn backend_error_code_exits_nonzero() {
    let base_url = spawn_backend(500);

    cli()
        .args(["--base-url", &base_url, "create-index", "--entity", "features"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error in request: features"));
}
