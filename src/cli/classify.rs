use std::io::Read;

use crate::decision::Decision;
use crate::engine::Engine;
use crate::error::Result;

/// Classify one piece of text. Exit code 2 when blocked.
pub fn run(engine: &Engine, text: Option<&str>, json: bool) -> Result<i32> {
    let input = match text {
        Some(t) => t.to_string(),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf.trim_end_matches(['\n', '\r']).to_string()
        }
    };

    let result = engine.classify(&input);

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", result.decision);
        if !result.matched_terms.is_empty() {
            println!("matched: {}", result.matched_terms.join(", "));
        }
        if let Some(masked) = &result.masked_text {
            println!("masked: {masked}");
        }
    }

    Ok(if result.decision == Decision::Block { 2 } else { 0 })
}
