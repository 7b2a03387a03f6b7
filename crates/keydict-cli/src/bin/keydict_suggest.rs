// keydict-suggest: Print ranked suggestions for typed words.
//
// Reads words from stdin (one per line) or from the command line and
// prints the ranked candidate list for each, using the QWERTY proximity
// model to expand every keystroke into its neighboring keys.
//
// Usage:
//   keydict-suggest [-d DICT_PATH | -w WORDLIST] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Dictionary blob, or directory containing main.dict
//   -w, --wordlist PATH    Build the dictionary from a plain-text word list
//   -e, --exact            No proximity expansion, exact keys only
//   --scores               Also print the score of each suggestion
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use keydict_engine::composer::{compose, compose_exact};
use keydict_engine::proximity::KeyProximityModel;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, wordlist, args) = keydict_cli::parse_dict_args(&args);

    if keydict_cli::wants_help(&args) {
        println!("keydict-suggest: Print ranked suggestions for typed words.");
        println!();
        println!("Usage: keydict-suggest [-d DICT_PATH | -w WORDLIST] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary blob, or directory containing main.dict");
        println!("  -w, --wordlist PATH    Build the dictionary from a plain-text word list");
        println!("  -e, --exact            No proximity expansion, exact keys only");
        println!("  --scores               Also print the score of each suggestion");
        println!("  -h, --help             Print this help");
        return;
    }

    let exact = args.iter().any(|a| a == "-e" || a == "--exact");
    let show_scores = args.iter().any(|a| a == "--scores");
    let words: Vec<String> = args
        .iter()
        .filter(|a| !a.starts_with('-'))
        .cloned()
        .collect();

    let mut dict = keydict_cli::open_dictionary(dict_path.as_deref(), wordlist.as_deref())
        .unwrap_or_else(|e| keydict_cli::fatal(&e));
    let model = KeyProximityModel::qwerty();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut suggest_word = |word: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let positions = if exact {
            compose_exact(word)
        } else {
            compose(word, &model)
        };
        let result = dict.suggest(&positions);
        if result.is_empty() {
            let _ = writeln!(out, "{word}: (no suggestions)");
        } else {
            let _ = writeln!(out, "{word}:");
            for s in &result.words {
                if show_scores {
                    let _ = writeln!(out, "  {} ({})", s.word, s.score);
                } else {
                    let _ = writeln!(out, "  {}", s.word);
                }
            }
        }
    };

    if words.is_empty() {
        // Read from stdin
        let stdin = io::stdin();
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
            suggest_word(word, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &mut out);
        }
    }
}
