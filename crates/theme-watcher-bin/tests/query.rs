mod common;

use common::{stderr, stdout, Sandbox};
use std::path::Path;

const DARK_REPLY: &str = "echo '(<<uint32 1>>,)'";
const LIGHT_REPLY: &str = "echo '(<<uint32 2>>,)'";

#[test]
fn dark_reply_prints_one() {
    let sandbox = Sandbox::new();
    let gdbus = sandbox.fake_gdbus("gdbus", DARK_REPLY);

    let output = sandbox.run(&gdbus, &[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "1\n");
}

#[test]
fn light_reply_prints_zero() {
    let sandbox = Sandbox::new();
    let gdbus = sandbox.fake_gdbus("gdbus", LIGHT_REPLY);

    let output = sandbox.run(&gdbus, &[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "0\n");
}

#[test]
fn json_reply_includes_color_scheme() {
    let sandbox = Sandbox::new();
    let gdbus = sandbox.fake_gdbus("gdbus", DARK_REPLY);

    let output = sandbox.run(&gdbus, &["--format", "json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["is_dark"], true);
    assert_eq!(value["color_scheme"], "prefer-dark");
}

#[test]
fn failing_gdbus_exits_one_with_error() {
    let sandbox = Sandbox::new();
    let gdbus = sandbox.fake_gdbus(
        "gdbus",
        "echo 'Error: GDBus.Error:org.freedesktop.DBus.Error.ServiceUnknown: The name is not activatable' >&2\nexit 1",
    );

    let output = sandbox.run(&gdbus, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("Error: Settings portal is unavailable"), "stderr: {err}");
}

#[test]
fn missing_gdbus_exits_one() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(Path::new("/nonexistent/gdbus"), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: gdbus is not installed"));
}

#[test]
fn gdbus_path_env_wins_over_config_file() {
    let sandbox = Sandbox::new();
    let configured = sandbox.fake_gdbus("configured-gdbus", LIGHT_REPLY);
    let from_env = sandbox.fake_gdbus("env-gdbus", DARK_REPLY);
    sandbox.write_config(&format!(
        r#"{{ "gdbus_path": "{}" }}"#,
        configured.display()
    ));

    let output = sandbox.run(&from_env, &[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "1\n");
}

#[test]
fn malformed_config_is_fatal() {
    let sandbox = Sandbox::new();
    let gdbus = sandbox.fake_gdbus("gdbus", DARK_REPLY);
    sandbox.write_config("{ not json");

    let output = sandbox.run(&gdbus, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error:"));
}
