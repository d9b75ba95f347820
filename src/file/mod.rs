//! ファイルI/Oモジュール
//!
//! RAIIファイルハンドル（`FileStream`）と、その上に構築された
//! ファイル単位の便利関数を提供

pub mod handle;
pub mod io;

// 基本公開API
pub use handle::{FileMode, FileStream};
pub use io::{append_file, read_file, read_lines, write_file};
