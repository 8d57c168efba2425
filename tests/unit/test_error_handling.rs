use defang::executor::InterpreterRunner;
use defang::{Defanger, DefangError, ErrorCategory, InterpreterConfig};
use std::path::Path;

#[tokio::test]
async fn missing_source_is_an_input_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.php");

    let err = Defanger::new(InterpreterConfig::default())
        .run(&input)
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::InputAccess);
    assert!(err.to_string().contains("absent.php"));
}

#[tokio::test]
async fn non_utf8_source_is_an_input_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("latin1.php");
    std::fs::write(&input, [0x3c, 0x3f, 0x70, 0x68, 0x70, 0x20, 0xe9, 0x0a]).unwrap();

    let err = Defanger::new(InterpreterConfig::default())
        .run(&input)
        .await
        .unwrap_err();

    assert!(matches!(err, DefangError::InvalidEncoding { .. }));
    assert_eq!(err.category(), ErrorCategory::InputAccess);
    assert!(!dir.path().join("latin1_safe.php").exists());
}

#[tokio::test]
async fn unwritable_destination_is_an_output_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.php");
    std::fs::write(&input, "<?php eval($x); ?>").unwrap();
    // A directory sitting on the sanitized path makes the write fail.
    std::fs::create_dir(dir.path().join("in_safe.php")).unwrap();

    let err = Defanger::new(InterpreterConfig::default())
        .run(&input)
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::OutputWrite);
    assert!(!dir.path().join("in_output.txt").exists());
}

#[tokio::test]
async fn unknown_interpreter_is_an_interpreter_error() {
    let runner = InterpreterRunner::new(
        InterpreterConfig::default().with_command("no-such-php-binary-7c1e"),
    );

    let err = runner.execute(Path::new("x_safe.php")).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Interpreter);
}

#[test]
fn empty_interpreter_is_a_usage_error() {
    let err = InterpreterConfig::new(String::new()).validate().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Usage);
}
