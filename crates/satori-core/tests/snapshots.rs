use satori_core::{ParseOptions, normalize, parse};
use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn fixtures_root() -> PathBuf {
    workspace_root().join("fixtures").join("markup")
}

fn list_fixture_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let Ok(entries) = std::fs::read_dir(root) else {
        return out;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|e| e == "satori") {
            out.push(path);
        }
    }
    out.sort();
    out
}

#[test]
fn fixtures_match_golden_snapshots() {
    let fixtures = list_fixture_files(&fixtures_root());
    assert!(
        !fixtures.is_empty(),
        "no fixtures found under {}",
        fixtures_root().display()
    );

    for path in fixtures {
        let text = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        let snapshot = serde_json::to_value(parse(&text))
            .unwrap_or_else(|e| panic!("failed to serialize {}: {e}", path.display()));

        let golden_path = path.with_extension("golden.json");
        let golden_text = std::fs::read_to_string(&golden_path)
            .unwrap_or_else(|_| panic!("missing golden snapshot {}", golden_path.display()));
        let golden: Value = serde_json::from_str(&golden_text)
            .unwrap_or_else(|e| panic!("invalid golden JSON {}: {e}", golden_path.display()));

        assert_eq!(snapshot, golden, "snapshot mismatch for {}", path.display());
    }
}

#[test]
fn fixtures_normalize_to_a_fixed_point() {
    for path in list_fixture_files(&fixtures_root()) {
        let text = std::fs::read_to_string(&path).unwrap();
        let once = normalize(&text, ParseOptions::strict())
            .unwrap_or_else(|e| panic!("transform failed for {}: {e}", path.display()));
        let twice = normalize(&once, ParseOptions::strict()).unwrap();
        assert_eq!(once, twice, "normalize not idempotent for {}", path.display());
    }
}
