//! Hygiene checks over the production sources.
//!
//! Scans the crate's `src/` tree (test files excluded) for patterns that can
//! crash the wheel mid-spin or swallow errors. Each pattern has a budget; the
//! budget never grows.

use std::fs;
use std::path::{Path, PathBuf};

/// A source pattern and how many lines may contain it.
struct Budget {
    pattern: &'static str,
    max: usize,
}

// Panics.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
];

// Discarded errors. The three `.ok()` lines are the env fallbacks in config.rs.
const DISCARDS: &[Budget] = &[Budget { pattern: "let _ =", max: 0 }, Budget { pattern: ".ok()", max: 3 }];

// Unsynchronized sharing of the angle.
const SHARING: &[Budget] = &[Budget { pattern: "static mut ", max: 0 }, Budget { pattern: "unsafe ", max: 0 }];

const STRUCTURE: &[Budget] = &[Budget { pattern: "#[allow(dead_code)]", max: 0 }];

/// Production sources under `src/`, as `(path, contents)`.
fn production_sources() -> Vec<(PathBuf, String)> {
    let mut pending = vec![PathBuf::from("src")];
    let mut sources = Vec::new();
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else { continue };
        for path in entries.flatten().map(|e| e.path()) {
            if path.is_dir() {
                pending.push(path);
            } else if is_production_rs(&path) {
                if let Ok(text) = fs::read_to_string(&path) {
                    sources.push((path, text));
                }
            }
        }
    }
    sources.sort();
    sources
}

fn is_production_rs(path: &Path) -> bool {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    name.ends_with(".rs") && !name.ends_with("_test.rs")
}

/// Check every budget in `group`, reporting all overruns at once.
fn enforce(group: &[Budget]) {
    let sources = production_sources();
    let mut overruns = Vec::new();

    for budget in group {
        let hits: Vec<String> = sources
            .iter()
            .flat_map(|(path, text)| {
                text.lines()
                    .enumerate()
                    .filter(|(_, line)| line.contains(budget.pattern))
                    .map(move |(n, _)| format!("    {}:{}", path.display(), n + 1))
            })
            .collect();
        if hits.len() > budget.max {
            overruns.push(format!(
                "`{}`: {} lines, budget {}\n{}",
                budget.pattern,
                hits.len(),
                budget.max,
                hits.join("\n")
            ));
        }
    }

    assert!(overruns.is_empty(), "hygiene budget exceeded:\n{}", overruns.join("\n"));
}

#[test]
fn panic_budgets() {
    enforce(PANICS);
}

#[test]
fn discard_budgets() {
    enforce(DISCARDS);
}

#[test]
fn sharing_budgets() {
    enforce(SHARING);
}

#[test]
fn structure_budgets() {
    enforce(STRUCTURE);
}

#[test]
fn source_tree_is_scanned() {
    let sources = production_sources();
    assert!(sources.iter().any(|(p, _)| p.ends_with("spin.rs")), "hygiene scan found no sources");
    assert!(sources.iter().all(|(p, _)| is_production_rs(p)));
}
