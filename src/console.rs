//! コンソール入出力
//!
//! 標準入出力に対する型付きの読み書きヘルパー。状態を持たず、
//! 呼び出しごとに完結する

use crate::error::{IoError, Result};
use crate::stream::TextReadable;
use std::fmt;
use std::io::{self, BufRead, Write};

/// フォーマット済みテキストを標準出力へ書き込み
///
/// 標準出力への書き込み失敗は特別扱いしない（エラー経路なし）。
///
/// # Examples
/// ```
/// iolib::console::print(format_args!("{} + {} = {}", 1, 2, 3));
/// ```
pub fn print(args: fmt::Arguments<'_>) {
    let mut stdout = io::stdout().lock();
    let _ = stdout.write_fmt(args);
    let _ = stdout.flush();
}

/// フォーマット済みテキストを標準出力へ書き込み、改行を1つ追加
pub fn println(args: fmt::Arguments<'_>) {
    let mut stdout = io::stdout().lock();
    let _ = stdout.write_fmt(args);
    let _ = stdout.write_all(b"\n");
    let _ = stdout.flush();
}

/// 標準入力から1行読み込み（終端の改行は除去）
///
/// ストリーム末尾や読み込み失敗は`IoError::Console`になる。
pub fn read_line() -> Result<String> {
    let stdin = io::stdin();
    let mut line = String::new();
    let read = stdin.lock().read_line(&mut line).map_err(|e| IoError::Console {
        message: e.to_string(),
    })?;

    if read == 0 {
        return Err(IoError::Console {
            message: "Failed to read line from console".to_string(),
        });
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// 標準入力から値を1つ型付きで読み込み
///
/// 先頭の空白（改行含む）を読み飛ばして1トークンをパースする。
/// 成功時は同じ行の残りを次の改行まで含めて破棄し、以降の読み込みが
/// 次の行から始まるようにする。EOF・パース失敗は`IoError::Console`。
pub fn read_value<T: TextReadable>() -> Result<T> {
    let stdin = io::stdin();
    let mut lock = stdin.lock();
    read_value_from(&mut lock)
}

/// メッセージを表示してから値を1つ読み込み
pub fn prompt<T: TextReadable>(message: &str) -> Result<T> {
    print(format_args!("{}", message));
    read_value()
}

/// 任意の`BufRead`から値を1つ読み込み（`read_value`の実体）
fn read_value_from<R: BufRead, T: TextReadable>(reader: &mut R) -> Result<T> {
    let token = read_token(reader)
        .map_err(|e| IoError::Console {
            message: e.to_string(),
        })?
        .ok_or_else(|| IoError::Console {
            message: "Failed to read value from console".to_string(),
        })?;

    let value = token.parse::<T>().map_err(|_| IoError::Console {
        message: format!("Failed to parse value from console: {:?}", token),
    })?;

    // パース成功後、行末までの残りを破棄する
    discard_line(reader).map_err(|e| IoError::Console {
        message: e.to_string(),
    })?;

    Ok(value)
}

/// 空白区切りトークンを1つ読み込み（EOFは`None`）
///
/// トークンを終端させた空白は消費しない。
fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut token: Vec<u8> = Vec::new();

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        for &b in buf {
            if b.is_ascii_whitespace() {
                if token.is_empty() {
                    // 先頭の空白は読み飛ばす
                    used += 1;
                    continue;
                }
                break;
            }
            token.push(b);
            used += 1;
        }

        let stopped_at_delimiter = used < buf.len();
        reader.consume(used);
        if stopped_at_delimiter && !token.is_empty() {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&token).into_owned()))
}

/// 次の改行まで（改行を含めて）読み捨てる
fn discard_line<R: BufRead>(reader: &mut R) -> io::Result<()> {
    let mut rest = Vec::new();
    reader.read_until(b'\n', &mut rest)?;
    Ok(())
}
