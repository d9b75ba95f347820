//! エラーハンドリング
//!
//! iolib 全体で使用される統一されたエラー型を定義
//! 方針：open失敗や不正モードは即エラー、ストリーム末尾は通常値（Option）で表現

use thiserror::Error;

/// I/O操作のエラー型
///
/// 失敗はすべて同期的にこの型で呼び出し元へ伝播する。
/// リトライや回復処理はこの層では行わない（呼び出し元の責任）。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IoError {
    /// ファイルオープン失敗（パス不在、権限不足など）
    #[error("Failed to open file: {path}: {message}")]
    Open { path: String, message: String },

    /// 読み込み不可モードのハンドルに対する読み込み
    #[error("File not open for reading")]
    NotReadable,

    /// 書き込み不可モードのハンドルに対する書き込み
    #[error("File not open for writing")]
    NotWritable,

    /// クローズ済みハンドルに対する操作
    #[error("File is closed")]
    Closed,

    /// コンソール入力の失敗（EOF、パース失敗）
    #[error("Console read failed: {message}")]
    Console { message: String },

    /// OSレベルのI/O失敗（read/write/seek中のエラー）
    #[error("IO error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for IoError {
    fn from(err: std::io::Error) -> Self {
        IoError::Io {
            message: err.to_string(),
        }
    }
}

/// iolib 全体で使用するResult型
pub type Result<T> = std::result::Result<T, IoError>;
