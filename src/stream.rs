//! 型付きストリーム制約
//!
//! テキストストリームに対して読み書き可能な型をコンパイル時に制約する
//! 能力トレイト（capability trait）を定義

use std::fmt;
use std::str::FromStr;

/// テキストとして書き出し可能な型
///
/// 値からテキスト表現への全域変換（`Display`）を持つ型はすべて書き出し可能。
/// ブランケット実装により個別のimplは不要。
pub trait TextWritable: fmt::Display {}

impl<T: fmt::Display + ?Sized> TextWritable for T {}

/// テキストから読み取り可能な型
///
/// テキストトークンからのパース（`FromStr`）を持つ型はすべて読み取り可能。
/// パース失敗はプロセスを停止させず、呼び出し側で通常値として扱える。
pub trait TextReadable: FromStr {}

impl<T: FromStr> TextReadable for T {}
