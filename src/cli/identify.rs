use crate::engine::Engine;
use crate::error::Result;

/// Print the detected script code.
pub fn run_detect(engine: &Engine, identifier: &str, json: bool) -> Result<i32> {
    let script = engine.detect_script(identifier);
    if json {
        let out = serde_json::json!({ "identifier": identifier, "script": script });
        println!("{out}");
    } else {
        println!("{script}");
    }
    Ok(0)
}

/// Validate a nickname. Exit code 1 when invalid.
pub fn run_validate(engine: &Engine, identifier: &str, json: bool) -> Result<i32> {
    let result = engine.validate_identifier_format(identifier);

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else if let Some(kind) = &result.error {
        println!("invalid {}: {kind}", kind.code());
    } else if let Some(script) = result.script {
        println!("ok {script}");
    }

    Ok(if result.is_valid() { 0 } else { 1 })
}
