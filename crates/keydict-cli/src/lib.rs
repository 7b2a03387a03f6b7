// keydict-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use keydict_engine::BinaryDictionary;
use keydict_trie::builder::DictionaryBuilder;

/// Dictionary blob file name looked up inside search directories.
const MAIN_DICT: &str = "main.dict";

/// Locate a dictionary blob and create a BinaryDictionary.
///
/// Search order:
/// 1. `dict_path` argument (a blob file or a directory containing `main.dict`)
/// 2. `KEYDICT_PATH` environment variable (same interpretation)
/// 3. `~/.keydict/main.dict`
/// 4. `/usr/share/keydict/main.dict`
/// 5. Current working directory (looks for `main.dict` directly)
pub fn load_dictionary(dict_path: Option<&str>) -> Result<BinaryDictionary, String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        let blob_path = if candidate.is_dir() {
            candidate.join(MAIN_DICT)
        } else {
            candidate.clone()
        };
        if blob_path.is_file() {
            let data = std::fs::read(&blob_path)
                .map_err(|e| format!("failed to read {}: {}", blob_path.display(), e))?;
            return BinaryDictionary::from_bytes(&data)
                .map_err(|e| format!("failed to load {}: {}", blob_path.display(), e));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        MAIN_DICT,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build a dictionary in memory from a plain-text word list.
///
/// One entry per line: `word` or `word<whitespace>frequency`. Frequency
/// defaults to 128 and is clamped to 0..=255. Lines starting with `#`
/// and blank lines are skipped.
pub fn load_wordlist(path: &str) -> Result<BinaryDictionary, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;

    let mut builder = DictionaryBuilder::new();
    for (lineno, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let word = parts.next().unwrap_or_default();
        let freq = match parts.next() {
            Some(f) => f
                .parse::<u32>()
                .map_err(|_| format!("{path}:{}: invalid frequency '{f}'", lineno + 1))?
                .min(255) as u8,
            None => 128,
        };
        builder.add(word, freq);
    }

    BinaryDictionary::from_bytes(&builder.build())
        .map_err(|e| format!("failed to build dictionary from {path}: {e}"))
}

/// Build the list of paths to search for the dictionary blob.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. KEYDICT_PATH environment variable
    if let Ok(env_path) = std::env::var("KEYDICT_PATH") {
        paths.push(PathBuf::from(&env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".keydict"));
    }

    // 4. System path
    paths.push(PathBuf::from("/usr/share/keydict"));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse `--dict-path=PATH` / `-d PATH` and `--wordlist=PATH` / `-w PATH`
/// arguments from the command line.
///
/// Returns `(dict_path, wordlist, remaining_args)`.
pub fn parse_dict_args(args: &[String]) -> (Option<String>, Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut wordlist = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if let Some(val) = arg.strip_prefix("--wordlist=") {
            wordlist = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else if arg == "--wordlist" || arg == "-w" {
            if i + 1 < args.len() {
                wordlist = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, wordlist, remaining)
}

/// Open a dictionary per the parsed `--wordlist` / `--dict-path` options.
pub fn open_dictionary(
    dict_path: Option<&str>,
    wordlist: Option<&str>,
) -> Result<BinaryDictionary, String> {
    match wordlist {
        Some(path) => load_wordlist(path),
        None => load_dictionary(dict_path),
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
