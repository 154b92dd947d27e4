use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::decision::Decision;
use crate::engine::Engine;
use crate::error::Result;

/// A flagged line.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub path: String,
    pub line: usize,
    pub decision: Decision,
    pub matched_terms: Vec<String>,
}

/// Classify every line of staged files, a file, or a directory tree
/// (current directory when no path is given). Exit code 1 when any line is
/// blocked.
pub fn run(engine: &Engine, staged: bool, path: Option<&str>, json: bool) -> Result<i32> {
    let mut findings = Vec::new();

    if staged {
        let output = std::process::Command::new("git")
            .args(["diff", "--cached", "--name-only"])
            .output()?;

        if !output.status.success() {
            eprintln!("lexguard: failed to get staged files (not a git repo?)");
            return Ok(1);
        }

        let file_list = String::from_utf8_lossy(&output.stdout);
        let files: Vec<&str> = file_list.lines().filter(|l| !l.is_empty()).collect();

        if files.is_empty() {
            eprintln!("lexguard: no staged files to scan.");
            return Ok(0);
        }

        eprintln!("lexguard: scanning {} staged file(s)...", files.len());
        for file in files {
            scan_file(engine, Path::new(file), &mut findings);
        }
    } else {
        let path_buf = PathBuf::from(path.unwrap_or("."));
        if path_buf.is_dir() {
            eprintln!("lexguard: scanning directory {}...", path_buf.display());
            scan_dir(engine, &path_buf, &mut findings)?;
        } else if path_buf.is_file() {
            eprintln!("lexguard: scanning file {}...", path_buf.display());
            scan_file(engine, &path_buf, &mut findings);
        } else {
            eprintln!("lexguard: path not found: {}", path_buf.display());
            return Ok(1);
        }
    }

    let blocked = findings
        .iter()
        .filter(|f| f.decision == Decision::Block)
        .count();

    if json {
        println!("{}", serde_json::to_string(&findings)?);
    } else {
        for f in &findings {
            println!("{}:{}: {}", f.path, f.line, f.decision);
        }
    }

    if blocked > 0 {
        eprintln!("\nlexguard: {blocked} blocked line(s) found.");
        Ok(1)
    } else {
        if findings.is_empty() {
            eprintln!("lexguard: scan clean.");
        } else {
            eprintln!("lexguard: {} line(s) would be masked.", findings.len());
        }
        Ok(0)
    }
}

fn scan_file(engine: &Engine, path: &Path, findings: &mut Vec<Finding>) {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(err) => {
            // Binary or unreadable.
            tracing::debug!(path = %path.display(), %err, "skipping file");
            return;
        }
    };

    for (line_num, line) in contents.lines().enumerate() {
        let result = engine.classify(line);
        if result.is_allowed() {
            continue;
        }
        findings.push(Finding {
            path: path.display().to_string(),
            line: line_num + 1,
            decision: result.decision,
            matched_terms: result.matched_terms,
        });
    }
}

fn scan_dir(engine: &Engine, dir: &Path, findings: &mut Vec<Finding>) -> Result<()> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .collect();
    entries.sort();

    for path in entries {
        if path.is_dir() {
            // Skip hidden directories
            if path
                .file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with('.'))
            {
                continue;
            }
            scan_dir(engine, &path, findings)?;
        } else if path.is_file() {
            scan_file(engine, &path, findings);
        }
    }

    Ok(())
}
