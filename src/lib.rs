//! iolib - コンソールとファイルのテキストI/O便利レイヤー
//!
//! 型付きのフォーマット出力・入力と、RAIIファイルハンドルの実装

// コアモジュール
pub mod error;
pub mod stream;

// 入出力層
pub mod console;
pub mod file;

// 公開API
pub use error::{IoError, Result};
pub use file::{FileMode, FileStream, append_file, read_file, read_lines, write_file};
pub use stream::{TextReadable, TextWritable};
