//! ファイルI/O便利関数
//!
//! `FileStream`を適切なモードでオープンし、1つの論理操作だけを行う
//! 薄いラッパー群。リソースはスコープ終了時に解放される

use crate::error::Result;
use crate::file::handle::{FileMode, FileStream};
use crate::stream::TextWritable;
use std::path::Path;

/// ファイル全体をテキストとして読み込み
///
/// # Examples
/// ```
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("sample.txt");
/// std::fs::write(&path, "hello").unwrap();
/// assert_eq!(iolib::read_file(&path).unwrap(), "hello");
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut file = FileStream::open(path, FileMode::Read)?;
    file.read_all()
}

/// 値のテキスト表現でファイルを上書き
pub fn write_file<P: AsRef<Path>, T: TextWritable + ?Sized>(path: P, content: &T) -> Result<()> {
    let mut file = FileStream::open(path, FileMode::Write)?;
    file.write(content)
}

/// 値のテキスト表現をファイル末尾へ追記
pub fn append_file<P: AsRef<Path>, T: TextWritable + ?Sized>(path: P, content: &T) -> Result<()> {
    let mut file = FileStream::open(path, FileMode::Append)?;
    file.write(content)
}

/// ファイル全体を行のリストとして読み込み（各行の終端`\n`は除去）
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let mut file = FileStream::open(path, FileMode::Read)?;
    let mut lines = Vec::new();

    while let Some(line) = file.read_line() {
        lines.push(line);
    }

    Ok(lines)
}
