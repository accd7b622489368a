use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use vocab_data::{Source, TopicSet};

fn main() -> Result<()> {
    let source = env::args()
        .nth(1)
        .map(|p| Source::File(PathBuf::from(p)))
        .unwrap_or(Source::Embedded);

    let set = TopicSet::load_from(&source)
        .with_context(|| format!("loading topics from {:?}", source))?;

    println!("Source       : {:?}", source);
    println!("Topics       : {}", set.len());
    println!("Entry rows   : {}", set.row_count());

    for topic in &set {
        println!(
            "{:<40} words={:>3} pronounce={:>3} meaning={:>3}",
            topic.name,
            topic.words.len(),
            topic.pronounce.len(),
            topic.meaning.len()
        );
    }

    let misaligned: Vec<_> = set.misaligned().map(|t| t.name.as_str()).collect();
    if misaligned.is_empty() {
        println!("All topics aligned.");
    } else {
        println!("Misaligned topics: {}", misaligned.join(", "));
    }

    Ok(())
}
