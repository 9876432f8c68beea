//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use roster_match::error::RosterError;
use roster_match::loader;
use roster_match_common::HeaderAliases;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_load_nonexistent_file() {
    let result = loader::load_students(Path::new("/nonexistent/path/exam.csv"), &HeaderAliases::default());
    assert!(matches!(result, Err(RosterError::FileNotFound(_))));
}

/// 入力ファイル未指定
#[test]
fn test_missing_input() {
    let err = loader::require_input(None, "名簿ファイル").unwrap_err();
    assert!(matches!(err, RosterError::MissingInput(_)));
    assert!(format!("{}", err).contains("名簿ファイル"));
}

/// 対応していない拡張子
#[test]
fn test_unsupported_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("roster.pdf");
    std::fs::write(&path, "dummy").unwrap();

    let result = loader::load_roster(&path, &HeaderAliases::default());
    assert!(matches!(result, Err(RosterError::UnsupportedFormat(_))));
}

/// 空のCSV
#[test]
fn test_empty_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("exam.csv");
    std::fs::write(&path, "").unwrap();

    let result = loader::load_students(&path, &HeaderAliases::default());
    assert!(matches!(
        result,
        Err(RosterError::Common(roster_match_common::Error::EmptyInput(_)))
    ));
}

/// UTF-8でないCSV
#[test]
fn test_invalid_utf8_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("exam.csv");
    std::fs::write(&path, b"Full Name\n\xff\xfe\xfd\n").unwrap();

    let result = loader::load_students(&path, &HeaderAliases::default());
    assert!(matches!(
        result,
        Err(RosterError::Common(roster_match_common::Error::Csv(_)))
    ));
}

/// RosterErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        RosterError::Config("テスト設定エラー".to_string()),
        RosterError::MissingInput("試験結果ファイル".to_string()),
        RosterError::FileNotFound("exam.csv".to_string()),
        RosterError::UnsupportedFormat("roster.pdf".to_string()),
        RosterError::Export("書き込み失敗".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: RosterError = io_err.into();

    assert!(matches!(err, RosterError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: RosterError = json_err.into();

    assert!(matches!(err, RosterError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = roster_match_common::Error::Spreadsheet("シートがありません".to_string());
    let err: RosterError = common_err.into();

    assert!(matches!(err, RosterError::Common(_)));
    assert_eq!(format!("{}", err), "Spreadsheet error: シートがありません");
}
