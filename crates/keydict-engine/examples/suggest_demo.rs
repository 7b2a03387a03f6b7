// Interactive demo: build a small dictionary in memory and print ranked
// suggestions for a few noisy inputs.
//
// Run: cargo run -p keydict-engine --example suggest_demo

use keydict_engine::composer::compose;
use keydict_engine::handle::BinaryDictionary;
use keydict_engine::proximity::KeyProximityModel;
use keydict_trie::builder::DictionaryBuilder;

fn main() {
    let mut builder = DictionaryBuilder::new();
    for (word, freq) in [
        ("the", 255u8),
        ("this", 230),
        ("that", 225),
        ("hello", 200),
        ("help", 180),
        ("world", 170),
        ("work", 165),
        ("word", 160),
        ("don't", 150),
        ("keyboard", 90),
    ] {
        builder.add(word, freq);
    }
    let mut dict = BinaryDictionary::from_bytes(&builder.build()).expect("demo dictionary");
    let model = KeyProximityModel::qwerty();

    println!("dictionary blob: {} bytes", dict.size());
    println!();

    for typed in ["th", "jello", "wprld", "dont", "cxt"] {
        let result = dict.suggest(&compose(typed, &model));
        println!("{typed}:");
        if result.is_empty() {
            println!("  (no suggestions)");
        }
        for s in &result.words {
            println!("  {:<12} {}", s.word, s.score);
        }
        println!();
    }
}
