//! File round-trip property tests
//!
//! These complement the unit tests by exercising only the exposed functions
//! over arbitrary content so downstream integrations can rely on exact
//! byte-for-byte persistence.

use iolib::{append_file, read_file, read_lines, write_file, FileMode, FileStream};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use tempfile::TempDir;

fn arbitrary_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<char>(), 0..256)
        .prop_map(|chars| chars.into_iter().collect::<String>())
}

fn line_without_newline() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        any::<char>().prop_filter("no newline inside a line", |c| *c != '\n'),
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn write_then_read_all_is_identity(content in arbitrary_text()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prop.txt");

        write_file(&path, content.as_str()).unwrap();
        prop_assert_eq!(read_file(&path).unwrap(), content);
    }

    #[test]
    fn append_concatenates_in_order(first in arbitrary_text(), second in arbitrary_text()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prop.txt");

        write_file(&path, first.as_str()).unwrap();
        append_file(&path, second.as_str()).unwrap();

        let mut expected = first.clone();
        expected.push_str(&second);
        prop_assert_eq!(read_file(&path).unwrap(), expected);
    }

    #[test]
    fn read_lines_recovers_written_lines(
        lines in proptest::collection::vec(line_without_newline(), 0..20)
    ) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prop.txt");

        {
            let mut file = FileStream::open(&path, FileMode::Write).unwrap();
            for line in &lines {
                file.write_line(line.as_str()).unwrap();
            }
        }

        prop_assert_eq!(read_lines(&path).unwrap(), lines);
    }

    #[test]
    fn seek_back_rereads_same_content(content in arbitrary_text()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prop.txt");

        let mut file = FileStream::open(&path, FileMode::ReadWrite).unwrap();
        file.write(content.as_str()).unwrap();

        file.seek(0).unwrap();
        prop_assert_eq!(file.tell().unwrap(), 0);
        let first_pass = file.read_all().unwrap();

        file.seek(0).unwrap();
        let second_pass = file.read_all().unwrap();

        prop_assert_eq!(&first_pass, &content);
        prop_assert_eq!(&second_pass, &content);
    }
}
