//! End-to-end properties of the suggestion engine over built dictionaries.
//!
//! These tests exercise the public handle the way an input-method host
//! would: load a blob, feed per-position alternatives, consume the ranked
//! result.

use keydict_core::InputPosition;
use keydict_core::limits::{MAX_INPUT_LENGTH, MAX_WORDS};
use keydict_engine::composer::{compose, compose_exact};
use keydict_engine::handle::BinaryDictionary;
use keydict_engine::proximity::KeyProximityModel;
use keydict_trie::builder::DictionaryBuilder;

fn dictionary_with(words: &[(&str, u8)]) -> BinaryDictionary {
    let mut builder = DictionaryBuilder::new();
    for (word, freq) in words {
        builder.add(word, *freq);
    }
    BinaryDictionary::from_bytes(&builder.build()).unwrap()
}

#[test]
fn every_stored_word_is_valid_and_suggestible() {
    let words: &[(&str, u8)] = &[
        ("the", 255),
        ("this", 230),
        ("that", 225),
        ("cat", 180),
        ("cart", 60),
        ("don't", 150),
    ];
    let mut dict = dictionary_with(words);
    for (word, _) in words {
        assert!(dict.is_valid_word(word), "{word} should be valid");
        let result = dict.suggest(&compose_exact(word));
        assert!(result.contains(word), "{word} missing from suggestions");
    }
}

#[test]
fn results_are_bounded_and_emitted_scores_positive() {
    // 40 words sharing the prefix "pre" so a single query sees more
    // candidates than the result cap.
    let mut builder = DictionaryBuilder::new();
    for i in 0..40u32 {
        let tail: String = format!("{i:02}")
            .bytes()
            .map(|b| (b'a' + (b - b'0')) as char)
            .collect();
        builder.add(&format!("pre{tail}"), (i + 1).min(255) as u8);
    }
    let mut dict = BinaryDictionary::from_bytes(&builder.build()).unwrap();

    let result = dict.suggest(&compose_exact("pre"));
    assert!(result.len() <= MAX_WORDS);
    assert!(result.words.iter().all(|s| s.score >= 1));
}

#[test]
fn results_are_in_non_increasing_score_order() {
    let mut dict = dictionary_with(&[
        ("can", 90),
        ("cap", 10),
        ("car", 200),
        ("cat", 60),
        ("cab", 120),
    ]);
    let result = dict.suggest(&compose_exact("ca"));
    let scores: Vec<u64> = result.words.iter().map(|s| s.score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{scores:?}");
}

#[test]
fn oversized_input_returns_empty_without_fault() {
    let mut dict = dictionary_with(&[("cat", 100)]);
    let positions = compose_exact(&"a".repeat(MAX_INPUT_LENGTH + 1));
    let result = dict.suggest(&positions);
    assert!(result.is_empty());
    // The handle is still usable afterwards.
    assert!(dict.is_valid_word("cat"));
}

#[test]
fn wildcard_fallback_recovers_cat_from_cxt() {
    let mut dict = dictionary_with(&[("cat", 100)]);
    // Position 1 offers only 'x', so the primary pass finds nothing.
    let positions = vec![
        InputPosition::new(b'c' as u16),
        InputPosition::new(b'x' as u16),
        InputPosition::new(b't' as u16),
    ];
    let result = dict.suggest(&positions);
    assert!(result.contains("cat"));
}

#[test]
fn truncated_blob_degrades_to_empty_store() {
    let mut blob = {
        let mut builder = DictionaryBuilder::new();
        builder.add("cat", 100);
        builder.build()
    };
    blob.truncate(blob.len() - 4);

    let mut dict = BinaryDictionary::new();
    assert!(dict.load(&blob).is_err());
    assert!(!dict.is_valid_word("cat"));
    assert!(dict.suggest(&compose_exact("cat")).is_empty());
    assert_eq!(dict.size(), 0);
}

#[test]
fn release_twice_matches_release_once() {
    let mut dict = dictionary_with(&[("cat", 100)]);
    dict.release();
    let size_once = dict.size();
    let valid_once = dict.is_valid_word("cat");
    dict.release();
    assert_eq!(dict.size(), size_once);
    assert_eq!(dict.is_valid_word("cat"), valid_once);
    assert!(dict.suggest(&compose_exact("cat")).is_empty());
}

#[test]
fn proximity_model_corrects_neighbor_key_slips() {
    let mut dict = dictionary_with(&[("hello", 200), ("world", 180)]);
    let model = KeyProximityModel::qwerty();

    // 'j' slipped for 'h', 'e' for 'w': both are adjacent keys.
    let result = dict.suggest(&compose("jello", &model));
    assert!(result.contains("hello"));
    let result = dict.suggest(&compose("eorld", &model));
    assert!(result.contains("world"));
}

#[test]
fn suggest_for_composes_and_queries() {
    let mut dict = dictionary_with(&[("hello", 200)]);
    let model = KeyProximityModel::qwerty();
    let result = dict.suggest_for("hwllo", &model);
    assert!(result.contains("hello"));
}

#[test]
fn next_letter_histogram_reflects_continuations() {
    let mut dict = dictionary_with(&[("the", 255), ("this", 230), ("that", 225)]);
    let result = dict.suggest_with_next_letters(&compose_exact("th"), 128);
    let hist = result.next_letters.expect("histogram requested");
    assert_eq!(hist[b'e' as usize], 1);
    assert_eq!(hist[b'i' as usize], 1);
    assert_eq!(hist[b'a' as usize], 1);
    assert_eq!(hist[b'q' as usize], 0);
}
