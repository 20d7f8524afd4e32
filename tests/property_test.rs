use proptest::prelude::*;
use uryb::{syntax_analyze, tokenize};

/// Names are prefixed so generated words never collide with keywords.
fn name() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_map(|s| format!("x{s}"))
}

fn statement() -> impl Strategy<Value = String> {
    prop_oneof![
        (name(), 0u32..1000).prop_map(|(target, n)| format!("{target} = {n}")),
        (name(), "[a-z ]{0,8}").prop_map(|(callee, s)| format!("{callee}(\"{s}\")")),
        (name(), name(), name()).prop_map(|(a, b, target)| format!("{target} = {a} or {b}")),
        (name(), name()).prop_map(|(condition, target)| {
            format!("if {condition}\n{target} = 1\nend")
        }),
    ]
}

proptest! {
    #[test]
    fn blank_lines_never_change_the_program(
        lines in prop::collection::vec((statement(), 0usize..3), 0..12),
    ) {
        let compact = lines
            .iter()
            .map(|(line, _)| line.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let spaced = lines.iter().fold(String::new(), |code, (line, blanks)| {
            format!("{code}{line}\n{}", "\n".repeat(*blanks))
        });

        let compact = syntax_analyze(&compact).unwrap();
        let spaced = syntax_analyze(&spaced).unwrap();
        prop_assert_eq!(compact.len(), lines.len());
        prop_assert_eq!(compact, spaced);
    }

    #[test]
    fn arbitrary_input_never_panics(code in r"[\x00-\x7F]{0,200}") {
        let _ = tokenize(&code);
        let _ = syntax_analyze(&code);
    }
}
