//! Golden-file tests: run queries from a JSON fixture against a
//! dictionary built from the fixture's own word list.
//!
//! The fixture lives at tests/data/queries.json and holds three sections:
//! `words` (word -> frequency), `valid`/`invalid` (exact-lookup cases)
//! and `queries` (typed string, expected suggestions, optional expected
//! top result).

use std::path::PathBuf;

use serde_json::Value;

use keydict_engine::handle::BinaryDictionary;
use keydict_trie::builder::DictionaryBuilder;

fn load_fixture() -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/queries.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {}", path.display(), e))
}

fn build_dictionary(fixture: &Value) -> BinaryDictionary {
    let words = fixture["words"]
        .as_object()
        .expect("fixture 'words' should be an object");
    let mut builder = DictionaryBuilder::new();
    for (word, freq) in words {
        let freq = freq
            .as_u64()
            .unwrap_or_else(|| panic!("frequency for '{}' should be a number", word));
        builder.add(word, freq as u8);
    }
    BinaryDictionary::from_bytes(&builder.build()).expect("fixture dictionary should load")
}

#[test]
fn golden_validity() {
    let fixture = load_fixture();
    let dict = build_dictionary(&fixture);

    for word in fixture["valid"].as_array().expect("'valid' array") {
        let word = word.as_str().expect("valid entry should be a string");
        assert!(dict.is_valid_word(word), "'{}' should be valid", word);
    }
    for word in fixture["invalid"].as_array().expect("'invalid' array") {
        let word = word.as_str().expect("invalid entry should be a string");
        assert!(!dict.is_valid_word(word), "'{}' should not be valid", word);
    }
}

#[test]
fn golden_queries() {
    let fixture = load_fixture();
    let mut dict = build_dictionary(&fixture);

    let mut mismatches = Vec::new();

    for case in fixture["queries"].as_array().expect("'queries' array") {
        let typed = case["typed"].as_str().expect("query 'typed' string");
        let expect: Vec<&str> = case["expect"]
            .as_array()
            .expect("query 'expect' array")
            .iter()
            .map(|v| v.as_str().expect("expected suggestion string"))
            .collect();

        let result = dict.suggest(&keydict_engine::composer::compose_exact(typed));
        let got: Vec<&str> = result.words.iter().map(|s| s.word.as_str()).collect();

        for want in &expect {
            if !got.contains(want) {
                mismatches.push(format!("  [{}] missing '{}', got {:?}", typed, want, got));
            }
        }
        if expect.is_empty() && !got.is_empty() {
            mismatches.push(format!("  [{}] expected no results, got {:?}", typed, got));
        }
        if let Some(first) = case["first"].as_str() {
            if got.first() != Some(&first) {
                mismatches.push(format!(
                    "  [{}] expected '{}' first, got {:?}",
                    typed, first, got
                ));
            }
        }
    }

    assert!(
        mismatches.is_empty(),
        "golden query mismatches:\n{}",
        mismatches.join("\n"),
    );
}
