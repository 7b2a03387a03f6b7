// keydict-check: Check whether words are present in the dictionary.
//
// Reads words from stdin (one per line) and reports whether each word
// is an exact dictionary entry:
//   C: word    (present)
//   W: word    (absent)
//
// Usage:
//   keydict-check [-d DICT_PATH | -w WORDLIST] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary blob, or directory containing main.dict
//   -w, --wordlist PATH    Build the dictionary from a plain-text word list
//   -s, --suggest          Also print suggestions for absent words
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use keydict_engine::composer::compose;
use keydict_engine::proximity::KeyProximityModel;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, wordlist, args) = keydict_cli::parse_dict_args(&args);

    if keydict_cli::wants_help(&args) {
        println!("keydict-check: Check whether words are present in the dictionary.");
        println!();
        println!("Usage: keydict-check [-d DICT_PATH | -w WORDLIST] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (present)");
        println!("  W: word    (absent)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary blob, or directory containing main.dict");
        println!("  -w, --wordlist PATH    Build the dictionary from a plain-text word list");
        println!("  -s, --suggest          Also print suggestions for absent words");
        println!("  -h, --help             Print this help");
        return;
    }

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let mut dict = keydict_cli::open_dictionary(dict_path.as_deref(), wordlist.as_deref())
        .unwrap_or_else(|e| keydict_cli::fatal(&e));
    let model = KeyProximityModel::qwerty();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if dict.is_valid_word(word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                let result = dict.suggest(&compose(word, &model));
                for s in &result.words {
                    let _ = writeln!(out, "S: {}", s.word);
                }
            }
        }
    }
}
