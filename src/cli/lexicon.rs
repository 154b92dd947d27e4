use crate::engine::Engine;
use crate::error::Result;

/// Print lexicon size and fingerprint.
pub fn run(engine: &Engine, json: bool) -> Result<i32> {
    let lexicon = engine.lexicon();
    let fingerprint = lexicon.fingerprint();

    if json {
        let out = serde_json::json!({
            "block_terms": lexicon.block().len(),
            "mask_terms": lexicon.mask().len(),
            "fingerprint": fingerprint,
        });
        println!("{out}");
    } else {
        println!("block terms: {}", lexicon.block().len());
        println!("mask terms: {}", lexicon.mask().len());
        println!("fingerprint: {fingerprint}");
    }

    Ok(0)
}
