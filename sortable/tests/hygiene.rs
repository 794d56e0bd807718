//! Hygiene: enforces coding standards at test time
//!
//! These tests scan the sortable crate source tree for antipatterns that violate
//! project standards. Each has a budget (ideally zero). If you must add one,
//! you have to fix an existing one first; the budget never grows.
//!
//! The crate must also stay free of browser bindings: the Leptos client owns
//! every DOM call and only feeds coordinates in.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics. These crash the drag gesture mid-flight.
    Budget { pattern: ".unwrap()", max: 0, why: "propagate or default instead" },
    Budget { pattern: ".expect(", max: 0, why: "propagate or default instead" },
    Budget { pattern: "panic!(", max: 0, why: "gestures must never abort" },
    Budget { pattern: "unreachable!(", max: 0, why: "model the state explicitly" },
    Budget { pattern: "todo!(", max: 0, why: "no stubs in shipped code" },
    Budget { pattern: "unimplemented!(", max: 0, why: "no stubs in shipped code" },
    // Silent loss. Discards results without inspecting.
    Budget { pattern: "let _ =", max: 0, why: "inspect or name the value" },
    // Style / structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" },
    // Browser bindings belong to the client crate.
    Budget { pattern: "web_sys", max: 0, why: "keep sortable browser-independent" },
    Budget { pattern: "wasm_bindgen", max: 0, why: "keep sortable browser-independent" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `sortable/src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_not_empty() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("session.rs")), "hygiene scan found no sources");
}

#[test]
fn every_budget_holds() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let hits = hits_for(&files, budget.pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = hits
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` budget exceeded: found {count}, max {} ({}).\n{detail}",
                budget.pattern, budget.max, budget.why
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
