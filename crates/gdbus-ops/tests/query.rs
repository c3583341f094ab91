mod common;

use gdbus_ops::{read_color_scheme, ColorScheme, GdbusCommandRunner, GdbusError};

#[tokio::test]
async fn dark_reply_reads_prefer_dark() {
    let dir = common::temp_dir();
    let gdbus = common::fake_gdbus(dir.path(), "echo '(<<uint32 1>>,)'");
    let runner = GdbusCommandRunner::with_executable(gdbus.to_string_lossy());

    let scheme = read_color_scheme(&runner, 5).await.expect("query failed");
    assert_eq!(scheme, ColorScheme::PreferDark);
    assert!(scheme.is_dark());
}

#[tokio::test]
async fn light_reply_reads_prefer_light() {
    let dir = common::temp_dir();
    let gdbus = common::fake_gdbus(dir.path(), "echo '(<<uint32 2>>,)'");
    let runner = GdbusCommandRunner::with_executable(gdbus.to_string_lossy());

    let scheme = read_color_scheme(&runner, 5).await.expect("query failed");
    assert_eq!(scheme, ColorScheme::PreferLight);
    assert!(!scheme.is_dark());
}

#[tokio::test]
async fn fake_gdbus_receives_settings_read_arguments() {
    let dir = common::temp_dir();
    // Answer dark only when invoked with the expected method and key.
    let gdbus = common::fake_gdbus(
        dir.path(),
        r#"case "$*" in
  *"--method org.freedesktop.portal.Settings.Read org.freedesktop.appearance color-scheme"*) echo '(<<uint32 1>>,)' ;;
  *) echo "unexpected: $*" >&2; exit 2 ;;
esac"#,
    );
    let runner = GdbusCommandRunner::with_executable(gdbus.to_string_lossy());

    let scheme = read_color_scheme(&runner, 5).await.expect("query failed");
    assert!(scheme.is_dark());
}

#[tokio::test]
async fn missing_executable_is_not_installed() {
    let dir = common::temp_dir();
    let runner =
        GdbusCommandRunner::with_executable(dir.path().join("no-such-gdbus").to_string_lossy());

    let err = read_color_scheme(&runner, 5).await.unwrap_err();
    assert!(matches!(err, GdbusError::GdbusNotInstalled));
    assert_eq!(err.code(), "gdbus_not_installed");
}

#[tokio::test]
async fn portal_error_is_classified() {
    let dir = common::temp_dir();
    let gdbus = common::fake_gdbus(
        dir.path(),
        "echo 'Error: GDBus.Error:org.freedesktop.DBus.Error.ServiceUnknown: The name is not activatable' >&2; exit 1",
    );
    let runner = GdbusCommandRunner::with_executable(gdbus.to_string_lossy());

    let err = read_color_scheme(&runner, 5).await.unwrap_err();
    assert!(matches!(err, GdbusError::PortalUnavailable { .. }));
}

#[tokio::test]
async fn other_failure_keeps_exit_code_and_stderr() {
    let dir = common::temp_dir();
    let gdbus = common::fake_gdbus(dir.path(), "echo 'boom' >&2; exit 3");
    let runner = GdbusCommandRunner::with_executable(gdbus.to_string_lossy());

    match read_color_scheme(&runner, 5).await.unwrap_err() {
        GdbusError::CommandFailed {
            exit_code, stderr, ..
        } => {
            assert_eq!(exit_code, Some(3));
            assert_eq!(stderr, "boom");
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_gdbus_times_out() {
    let dir = common::temp_dir();
    let gdbus = common::fake_gdbus(dir.path(), "sleep 5; echo '(<<uint32 1>>,)'");
    let runner = GdbusCommandRunner::with_executable(gdbus.to_string_lossy());

    let err = read_color_scheme(&runner, 1).await.unwrap_err();
    match err {
        GdbusError::Timeout { timeout_secs, .. } => assert_eq!(timeout_secs, 1),
        other => panic!("expected Timeout, got {other:?}"),
    }
}
