// WASM bindings for the keydict suggestion engine.
//
// Provides a `WasmKeydict` class exported via wasm-bindgen that wraps
// the `BinaryDictionary` from keydict-engine. Suggestion results are
// serialized to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const dict = new WasmKeydict(dictBytes);
//   dict.isValidWord("hello");        // => true
//   dict.suggest("jello");            // => [{ word: "hello", score: ... }, ...]
//   dict.suggestKeys([[104], [105]]); // => raw per-position alternative codes
//   dict.release();                   // optional cleanup

use serde::Serialize;
use wasm_bindgen::prelude::*;

use keydict_core::InputPosition;
use keydict_core::suggestion::SuggestionResult;
use keydict_engine::handle::BinaryDictionary;
use keydict_engine::proximity::KeyProximityModel;
use keydict_engine::{QueryError, composer};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of one ranked suggestion.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSuggestion {
    word: String,
    score: u64,
}

/// Serializable representation of a full query result.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSuggestionResult {
    words: Vec<JsSuggestion>,
    next_letters: Option<Vec<u32>>,
}

fn result_to_js(result: SuggestionResult) -> Result<JsValue, JsError> {
    let js_result = JsSuggestionResult {
        words: result
            .words
            .into_iter()
            .map(|s| JsSuggestion {
                word: s.word,
                score: s.score,
            })
            .collect(),
        next_letters: result.next_letters,
    };
    serde_wasm_bindgen::to_value(&js_result).map_err(|e| JsError::new(&e.to_string()))
}

fn words_to_js(result: SuggestionResult) -> Result<JsValue, JsError> {
    let words: Vec<JsSuggestion> = result
        .words
        .into_iter()
        .map(|s| JsSuggestion {
            word: s.word,
            score: s.score,
        })
        .collect();
    serde_wasm_bindgen::to_value(&words).map_err(|e| JsError::new(&e.to_string()))
}

fn query_error_to_js(e: QueryError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmKeydict
// ============================================================================

/// Compact-dictionary suggestion engine for WebAssembly.
///
/// Wraps a loaded binary dictionary with exact-word lookup and
/// proximity-aware ranked suggestions.
#[wasm_bindgen]
pub struct WasmKeydict {
    dict: BinaryDictionary,
    model: KeyProximityModel,
}

#[wasm_bindgen]
impl WasmKeydict {
    /// Create a new WasmKeydict instance from a raw dictionary blob.
    #[wasm_bindgen(constructor)]
    pub fn new(data: &[u8]) -> Result<WasmKeydict, JsError> {
        let dict = BinaryDictionary::from_bytes(data).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmKeydict {
            dict,
            model: KeyProximityModel::qwerty(),
        })
    }

    /// Check whether a word is an exact dictionary entry.
    #[wasm_bindgen(js_name = "isValidWord")]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.dict.is_valid_word(word)
    }

    /// Ranked suggestions for a typed word, expanding each keystroke with
    /// the QWERTY proximity model.
    ///
    /// Returns a JavaScript array of `{ word, score }` objects, best first.
    pub fn suggest(&mut self, typed: &str) -> Result<JsValue, JsError> {
        let result = self.dict.suggest_for(typed, &self.model);
        words_to_js(result)
    }

    /// Ranked suggestions for explicit per-position alternative codes.
    ///
    /// `positions` is an array of arrays of character codes; the first code
    /// of each inner array is the typed key, the rest its alternatives.
    /// More than 16 codes in one position are ignored.
    #[wasm_bindgen(js_name = "suggestKeys")]
    pub fn suggest_keys(&mut self, positions: JsValue) -> Result<JsValue, JsError> {
        let raw: Vec<Vec<u16>> =
            serde_wasm_bindgen::from_value(positions).map_err(|e| JsError::new(&e.to_string()))?;
        let positions: Vec<InputPosition> = raw
            .iter()
            .map(|codes| InputPosition::from_codes(codes))
            .collect();
        let result = self
            .dict
            .try_suggest(&positions, 0)
            .map_err(query_error_to_js)?;
        words_to_js(result)
    }

    /// Like `suggest`, also collecting the next-letter histogram.
    ///
    /// Returns `{ words: [{ word, score }, ...], nextLetters: [...] }` where
    /// `nextLetters` has `width` counters indexed by character code.
    #[wasm_bindgen(js_name = "suggestWithNextLetters")]
    pub fn suggest_with_next_letters(
        &mut self,
        typed: &str,
        width: usize,
    ) -> Result<JsValue, JsError> {
        let positions = composer::compose(typed, &self.model);
        let result = self.dict.suggest_with_next_letters(&positions, width);
        result_to_js(result)
    }

    /// Override the scoring multipliers (primary-key weight and
    /// exact-length-word weight; both default to 2).
    #[wasm_bindgen(js_name = "setMultipliers")]
    pub fn set_multipliers(&mut self, typed_letter: u64, full_word: u64) {
        self.dict.set_multipliers(typed_letter, full_word);
    }

    /// Byte length of the loaded dictionary blob, 0 after release.
    pub fn size(&self) -> usize {
        self.dict.size()
    }

    /// Whether a dictionary is currently loaded.
    #[wasm_bindgen(js_name = "isLoaded")]
    pub fn is_loaded(&self) -> bool {
        self.dict.is_loaded()
    }

    /// Drop the loaded dictionary. Idempotent; later queries return no
    /// matches. WASM memory is ultimately managed by the garbage collector
    /// (or FinalizationRegistry), but this method allows explicit cleanup.
    pub fn release(&mut self) {
        self.dict.release();
    }
}
