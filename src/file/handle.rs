//! ファイルストリーム管理
//!
//! RAIIによるファイルハンドルの所有と、テキスト単位の読み書き操作を実装
//! ハンドルはムーブのみ可能（複製不可）で、スコープ終了時に確実に解放される

use crate::error::{IoError, Result};
use crate::stream::{TextReadable, TextWritable};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// ファイルオープンモード
///
/// オープン時に固定され、以後再解釈されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// 既存ファイルを読み込み（存在しない場合は失敗）
    Read,
    /// 作成または切り詰めて書き込み
    Write,
    /// 作成または既存ファイルの末尾へ追記
    Append,
    /// 作成または既存ファイルを読み書き両用でオープン
    ReadWrite,
}

impl FileMode {
    /// このモードで読み込みが許可されているか
    pub fn is_readable(self) -> bool {
        matches!(self, FileMode::Read | FileMode::ReadWrite)
    }

    /// このモードで書き込みが許可されているか
    pub fn is_writable(self) -> bool {
        matches!(
            self,
            FileMode::Write | FileMode::Append | FileMode::ReadWrite
        )
    }

    /// OSのオープンフラグへ変換
    fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            FileMode::Read => {
                options.read(true);
            }
            FileMode::Write => {
                options.write(true).create(true).truncate(true);
            }
            FileMode::Append => {
                options.append(true).create(true);
            }
            FileMode::ReadWrite => {
                options.read(true).write(true).create(true);
            }
        }
        options
    }
}

/// 管理されたファイルハンドル
///
/// 生存期間中ひとつのOSファイルリソースを所有する。所有権はムーブで移動し、
/// 複製はできない。リソースはドロップ時または`close`で正確に一度だけ解放される。
///
/// バイト単位のオフセット（`seek`/`tell`）が安定するよう、改行変換のない
/// バイナリセーフなアクセスを前提とする。
#[derive(Debug)]
pub struct FileStream {
    /// 所有するOSファイルリソース（Noneはクローズ済み）
    file: Option<File>,
    /// オープン時のモード
    mode: FileMode,
}

impl FileStream {
    /// ファイルをオープンしてハンドルを作成
    ///
    /// OSがオープンを拒否した場合（Read時のパス不在、権限不足など）は
    /// 即座に`IoError::Open`で失敗する。
    pub fn open<P: AsRef<Path>>(path: P, mode: FileMode) -> Result<Self> {
        let path = path.as_ref();
        let file = mode.open_options().open(path).map_err(|e| IoError::Open {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        log::debug!("opened {} in {:?} mode", path.display(), mode);

        Ok(Self {
            file: Some(file),
            mode,
        })
    }

    /// ハンドルがオープン状態かどうか（副作用なし）
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// オープン時のモードを取得
    pub fn mode(&self) -> FileMode {
        self.mode
    }

    /// リソースを早期解放（冪等）
    ///
    /// クローズ済みハンドルへの呼び出しは何もしない。
    pub fn close(&mut self) {
        if self.file.take().is_some() {
            log::debug!("file stream closed");
        }
    }

    /// ファイル全体の内容をテキストとして読み込み
    ///
    /// 末尾までシークして長さを確定し、先頭から読み直す。
    /// 空ファイルはエラーではなく`""`を返す。
    pub fn read_all(&mut self) -> Result<String> {
        if !self.mode.is_readable() {
            return Err(IoError::NotReadable);
        }
        let file = self.file.as_mut().ok_or(IoError::Closed)?;

        let len = file.seek(SeekFrom::End(0))?;
        file.seek(SeekFrom::Start(0))?;

        if len == 0 {
            return Ok(String::new());
        }

        let mut content = String::with_capacity(len as usize);
        file.read_to_string(&mut content)?;
        Ok(content)
    }

    /// 次の行を読み込み（終端の`\n`は除去）
    ///
    /// ストリーム末尾・クローズ済み・読み込み不可モードでは`None`を返す。
    /// 末尾到達は通常の結果であり、エラーにはならない。
    pub fn read_line(&mut self) -> Option<String> {
        if !self.mode.is_readable() {
            return None;
        }
        let file = self.file.as_mut()?;

        let mut reader = BufReader::new(file);
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                // 先読みした分だけカーソルを戻す
                let unread = reader.buffer().len() as i64;
                if unread > 0 {
                    reader.into_inner().seek(SeekFrom::Current(-unread)).ok()?;
                }
                if line.ends_with('\n') {
                    line.pop();
                }
                Some(line)
            }
            Err(_) => None,
        }
    }

    /// 次の空白区切りトークンを型付きで読み込み
    ///
    /// 先頭の空白（改行含む）を読み飛ばし、1トークンをパースする。
    /// トークンを終端させた区切り文字はストリームに残る。
    /// 末尾到達・パース失敗は`None`（エラーにはならない）。
    pub fn read_value<T: TextReadable>(&mut self) -> Option<T> {
        if !self.mode.is_readable() {
            return None;
        }
        let file = self.file.as_mut()?;

        let mut byte = [0u8; 1];

        // 先頭の空白を読み飛ばす
        let first = loop {
            match file.read(&mut byte) {
                Ok(0) | Err(_) => return None,
                Ok(_) if byte[0].is_ascii_whitespace() => continue,
                Ok(_) => break byte[0],
            }
        };

        let mut token = vec![first];
        loop {
            match file.read(&mut byte) {
                Ok(0) => break,
                Err(_) => return None,
                Ok(_) if byte[0].is_ascii_whitespace() => {
                    // 区切り文字はストリームに残す
                    let _ = file.seek(SeekFrom::Current(-1));
                    break;
                }
                Ok(_) => token.push(byte[0]),
            }
        }

        let token = String::from_utf8(token).ok()?;
        match token.parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("read_value: failed to parse token: {:?}", token);
                None
            }
        }
    }

    /// 値のテキスト表現を現在の書き込み位置へ書き込み
    pub fn write<T: TextWritable + ?Sized>(&mut self, value: &T) -> Result<()> {
        let file = self.writable_file()?;
        write!(file, "{}", value)?;
        Ok(())
    }

    /// フォーマット済みテキストを書き込み
    ///
    /// 引数は`format_args!`で構築する。
    ///
    /// # Examples
    /// ```
    /// use iolib::{FileStream, FileMode};
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let path = dir.path().join("log.txt");
    /// let mut file = FileStream::open(&path, FileMode::Write).unwrap();
    /// file.write_formatted(format_args!("{} + {} = {}", 1, 2, 3)).unwrap();
    /// ```
    pub fn write_formatted(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        let file = self.writable_file()?;
        file.write_fmt(args)?;
        Ok(())
    }

    /// 値を書き込み、改行を1つ追加
    pub fn write_line<T: TextWritable + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.write(value)?;
        self.write("\n")
    }

    /// フォーマット済みテキストを書き込み、改行を1つ追加
    pub fn write_line_formatted(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.write_formatted(args)?;
        self.write("\n")
    }

    /// 読み書きカーソルを絶対バイトオフセットへ移動
    ///
    /// 範囲の検証はOSに委ねる。
    pub fn seek(&mut self, pos: u64) -> Result<()> {
        let file = self.file.as_mut().ok_or(IoError::Closed)?;
        file.seek(SeekFrom::Start(pos))?;
        Ok(())
    }

    /// 現在のバイトオフセットを取得
    pub fn tell(&self) -> Result<u64> {
        let file = self.file.as_ref().ok_or(IoError::Closed)?;
        let mut handle: &File = file;
        Ok(handle.stream_position()?)
    }

    /// 書き込み可能な状態を検証してリソースを取得
    fn writable_file(&mut self) -> Result<&mut File> {
        if !self.mode.is_writable() {
            return Err(IoError::NotWritable);
        }
        self.file.as_mut().ok_or(IoError::Closed)
    }
}
