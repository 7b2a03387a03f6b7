// Build a small dictionary in memory and dump every word it contains.
//
// Run: cargo run -p keydict-trie --features builder --example dict_walk

use keydict_trie::builder::DictionaryBuilder;
use keydict_trie::store::{DictionaryStore, NodeId};

fn dump(store: &DictionaryStore, node: NodeId, prefix: &mut String) {
    for child in store.children(node) {
        let code = store.code(child).unwrap_or(0);
        let Some(c) = char::from_u32(u32::from(code)) else {
            continue;
        };
        prefix.push(c);
        if let Some(freq) = store.terminal_frequency(child) {
            println!("{prefix}\t{freq}");
        }
        dump(store, child, prefix);
        prefix.pop();
    }
}

fn main() {
    let mut builder = DictionaryBuilder::new();
    builder
        .add("the", 255)
        .add("this", 230)
        .add("that", 225)
        .add("cat", 180)
        .add("car", 170)
        .add("cart", 60)
        .add("don't", 150);

    let blob = builder.build();
    println!("blob size: {} bytes", blob.len());

    let store = DictionaryStore::from_bytes(&blob).expect("blob should load");
    let mut prefix = String::new();
    dump(&store, NodeId::ROOT, &mut prefix);
}
