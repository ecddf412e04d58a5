//! Distinct word counter
//!
//! Demonstrates:
//! - String keys borrowed from a caller-owned buffer
//! - First-insert-wins on duplicate keys
//! - Growth as the table fills

use assoc_core::{AssocTable, Insertion, KeyKind};

const TEXT: &str = "the quick brown fox jumps over the lazy dog \
    while the lazy cat watches the quick fox run past the old brown barn";

fn main() {
    let words: Vec<&str> = TEXT.split_whitespace().collect();
    let positions: Vec<usize> = (0..words.len()).collect();

    let mut table: AssocTable<str, usize> = AssocTable::new(KeyKind::Str);
    let mut repeats = 0;
    for (word, position) in words.iter().zip(&positions) {
        match table.insert(word, position) {
            Ok(Insertion::Inserted) => {}
            Ok(Insertion::Duplicate) => repeats += 1,
            Ok(Insertion::Saturated) => eprintln!("no slot left for {:?}", word),
            Err(err) => eprintln!("insert failed: {}", err),
        }
    }

    println!("Words:          {}", words.len());
    println!("Distinct words: {}", table.count());
    println!("Repeats:        {}", repeats);
    println!("Table size:     {}", table.table_size());
    println!("Load factor:    {:.2}", table.load_factor());

    for word in ["fox", "barn", "wolf"] {
        match table.lookup(word) {
            Some(position) => println!("  {:>5} first seen at word {}", word, position),
            None => println!("  {:>5} not present", word),
        }
    }

    table.destroy();
}
