use serde_json::json;
use uryb::{syntax_analyze, tokenize};

#[test]
fn test_tokens_serialize_with_kind_labels() {
    let tokens = tokenize("a == (1.5)\n").unwrap();
    assert_eq!(
        serde_json::to_value(&tokens).unwrap(),
        json!([
            { "kind": "IDENTIFIER", "value": "a" },
            { "kind": "EQUALEQUAL", "value": "==" },
            { "kind": "PARENS_OPEN", "value": "(" },
            { "kind": "NUMBER", "value": 1.5 },
            { "kind": "PARENS_CLOSE", "value": ")" },
            { "kind": "NEWLINE", "value": "\n" },
        ])
    );
}

#[test]
fn test_program_serializes_as_tree() {
    let program = syntax_analyze("a = f(1, \"x\", true)\nif a and b\nend").unwrap();
    assert_eq!(
        serde_json::to_value(&program).unwrap(),
        json!([
            {
                "Assignment": {
                    "target": "a",
                    "value": {
                        "FunctionCall": {
                            "name": "f",
                            "arguments": [
                                { "NumberLiteral": 1 },
                                { "StringLiteral": "x" },
                                { "BooleanLiteral": true },
                            ],
                        },
                    },
                },
            },
            {
                "If": {
                    "condition": {
                        "BinaryOperation": {
                            "operator": "AND",
                            "left": { "Identifier": "a" },
                            "right": { "Identifier": "b" },
                        },
                    },
                    "body": [],
                },
            },
        ])
    );
}
