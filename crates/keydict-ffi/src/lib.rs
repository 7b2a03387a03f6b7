// FFI functions are inherently unsafe — callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// keydict-ffi: C-compatible FFI layer for BinaryDictionary.
//
// This crate exposes a stable C ABI that can be consumed by any language
// with C FFI support (Java/JNI wrappers, Python/ctypes, C#/P-Invoke, etc.).
//
// Memory management rules:
// - Opaque `BinaryDictionary` pointer: created by `keydict_new`, freed by `keydict_free`.
// - Returned suggestion arrays: caller must free with `keydict_free_suggestions`.
// - Returned strings: caller must free with `keydict_free_str`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::slice;

use keydict_core::InputPosition;
use keydict_core::limits::MAX_ALTERNATIVES;
use keydict_engine::handle::BinaryDictionary;
use keydict_engine::proximity::KeyProximityModel;

/// Empty slot marker in flattened alternative-code arrays.
const NO_CODE: u16 = u16::MAX;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new dictionary handle from a raw blob.
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `keydict_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn keydict_new(
    data: *const u8,
    len: usize,
    error_out: *mut *mut c_char,
) -> *mut BinaryDictionary {
    if data.is_null() || len == 0 {
        set_error(error_out, "data is null or empty");
        return ptr::null_mut();
    }

    let blob = unsafe { slice::from_raw_parts(data, len) };
    match BinaryDictionary::from_bytes(blob) {
        Ok(dict) => Box::into_raw(Box::new(dict)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a dictionary handle created by `keydict_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn keydict_free(handle: *mut BinaryDictionary) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

/// Byte length of the loaded blob, 0 when empty or on a NULL handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn keydict_size(handle: *const BinaryDictionary) -> usize {
    match unsafe { handle.as_ref() } {
        Some(dict) => dict.size(),
        None => 0,
    }
}

/// Whether a dictionary is loaded. Returns 1 or 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn keydict_is_loaded(handle: *const BinaryDictionary) -> c_int {
    match unsafe { handle.as_ref() } {
        Some(dict) if dict.is_loaded() => 1,
        _ => 0,
    }
}

/// Drop the loaded dictionary without freeing the handle. Idempotent;
/// later queries return no matches.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn keydict_release(handle: *mut BinaryDictionary) {
    if let Some(dict) = unsafe { handle.as_mut() } {
        dict.release();
    }
}

/// Override the scoring multipliers (both default to 2).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn keydict_set_multipliers(
    handle: *mut BinaryDictionary,
    typed_letter: u64,
    full_word: u64,
) {
    if let Some(dict) = unsafe { handle.as_mut() } {
        dict.set_multipliers(typed_letter, full_word);
    }
}

// ── Exact lookup ────────────────────────────────────────────────

/// Check whether a word is an exact dictionary entry.
/// Returns 1 for present, 0 for absent, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn keydict_is_valid_word(
    handle: *const BinaryDictionary,
    word: *const c_char,
) -> c_int {
    let Some(dict) = (unsafe { handle.as_ref() }) else {
        return -1;
    };
    let Some(word) = cstr_to_str(word) else {
        return -1;
    };
    if dict.is_valid_word(word) { 1 } else { 0 }
}

// ── Suggestions ─────────────────────────────────────────────────

/// Ranked suggestion list returned by FFI.
#[repr(C)]
pub struct KeydictSuggestionArray {
    /// NULL-terminated array of suggested words (C strings).
    pub words: *mut *mut c_char,
    /// Scores parallel to `words` (count entries, no terminator).
    pub scores: *mut u64,
    pub count: usize,
}

/// Ranked suggestions for a typed word, expanding each keystroke with
/// the built-in QWERTY proximity model.
///
/// Returns a `KeydictSuggestionArray`. Caller must free with
/// `keydict_free_suggestions`. Returns a struct with count=0 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn keydict_suggest(
    handle: *mut BinaryDictionary,
    word: *const c_char,
) -> KeydictSuggestionArray {
    let empty = KeydictSuggestionArray {
        words: ptr::null_mut(),
        scores: ptr::null_mut(),
        count: 0,
    };

    let Some(dict) = (unsafe { handle.as_mut() }) else {
        return empty;
    };
    let Some(word) = cstr_to_str(word) else {
        return empty;
    };

    let model = KeyProximityModel::qwerty();
    suggestions_to_c(dict.suggest_for(word, &model))
}

/// Ranked suggestions for explicit per-position alternative codes.
///
/// `codes` is a flattened array of `input_len * 16` character codes:
/// 16 slots per input position, first slot the typed key, the rest its
/// alternatives, unused slots set to 0xFFFF.
///
/// `next_letters` (optional, NULL to skip) receives a histogram of
/// `next_letters_len` counters indexed by character code.
///
/// Returns a `KeydictSuggestionArray`. Caller must free with
/// `keydict_free_suggestions`. Returns a struct with count=0 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn keydict_suggest_codes(
    handle: *mut BinaryDictionary,
    codes: *const u16,
    input_len: usize,
    next_letters: *mut u32,
    next_letters_len: usize,
) -> KeydictSuggestionArray {
    let empty = KeydictSuggestionArray {
        words: ptr::null_mut(),
        scores: ptr::null_mut(),
        count: 0,
    };

    let Some(dict) = (unsafe { handle.as_mut() }) else {
        return empty;
    };
    if codes.is_null() && input_len > 0 {
        return empty;
    }

    let flat: &[u16] = if input_len == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(codes, input_len * MAX_ALTERNATIVES) }
    };
    let positions: Vec<InputPosition> = flat
        .chunks_exact(MAX_ALTERNATIVES)
        .map(|slots| {
            let filled: Vec<u16> = slots.iter().copied().filter(|&c| c != NO_CODE).collect();
            InputPosition::from_codes(&filled)
        })
        .collect();

    let width = if next_letters.is_null() {
        0
    } else {
        next_letters_len
    };
    let Ok(result) = dict.try_suggest(&positions, width) else {
        return empty;
    };

    if let Some(hist) = &result.next_letters {
        let out = unsafe { slice::from_raw_parts_mut(next_letters, next_letters_len) };
        out.copy_from_slice(hist);
    }

    suggestions_to_c(result)
}

/// Free a suggestion array returned by `keydict_suggest` or
/// `keydict_suggest_codes`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn keydict_free_suggestions(arr: KeydictSuggestionArray) {
    free_null_terminated_array(arr.words);
    if !arr.scores.is_null() && arr.count > 0 {
        drop(unsafe { Vec::from_raw_parts(arr.scores, arr.count, arr.count) });
    }
}

/// Free a heap-allocated C string returned by keydict functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn keydict_free_str(s: *mut c_char) {
    free_c_str(s);
}

// ── Internal helpers ────────────────────────────────────────────

fn suggestions_to_c(result: keydict_core::suggestion::SuggestionResult) -> KeydictSuggestionArray {
    let count = result.words.len();
    if count == 0 {
        return KeydictSuggestionArray {
            words: ptr::null_mut(),
            scores: ptr::null_mut(),
            count: 0,
        };
    }

    let mut words: Vec<*mut c_char> = Vec::with_capacity(count + 1);
    let mut scores: Vec<u64> = Vec::with_capacity(count);
    for s in &result.words {
        words.push(str_to_c(&s.word));
        scores.push(s.score);
    }
    words.push(ptr::null_mut()); // NULL terminator

    let words_ptr = words.as_mut_ptr();
    let scores_ptr = scores.as_mut_ptr();
    std::mem::forget(words);
    std::mem::forget(scores);

    KeydictSuggestionArray {
        words: words_ptr,
        scores: scores_ptr,
        count,
    }
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    // The array was allocated as a Vec with capacity i+1.
    drop(unsafe { Vec::from_raw_parts(arr, i + 1, i + 1) });
}
