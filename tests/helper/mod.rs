use std::fs;

use uryb::syntax_analyze;
use uryb::util::pretty_format::Siblings;

const PATH_TO_TEST_FILES: &str = "static/test_files";

/// Parses `program.uryb` in the named fixture directory and compares the
/// rendered tree with the `expected` file next to it.
pub fn test_with(test_name: &str) {
    let path_to_test = format!("{PATH_TO_TEST_FILES}/{test_name}");

    let program = fs::read_to_string(format!("{path_to_test}/program.uryb")).unwrap();
    let expected = fs::read_to_string(format!("{path_to_test}/expected")).unwrap();

    test_output(&program, &expected);
}

fn test_output(source_code: &str, expected: &str) {
    let statements = match syntax_analyze(source_code) {
        Ok(statements) => statements,
        Err(e) => panic!("{e}"),
    };
    let output = Siblings(&statements).to_string();
    assert_eq!(output.trim_end(), expected.trim_end());
}
