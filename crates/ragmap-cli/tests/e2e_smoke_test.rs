use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use ragmap_cli::Args;

fn catalogs_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../catalogs")
}

/// Collects all .toml files from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(catalog: Option<&Path>, output: &Path) -> Args {
    Args {
        catalog: catalog.map(|path| path.to_string_lossy().to_string()),
        output: output.to_string_lossy().to_string(),
        config: None,
        physics: false,
        graph_only: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_catalogs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_catalogs = collect_toml_files(catalogs_dir());

    assert!(
        !valid_catalogs.is_empty(),
        "No valid catalogs found in catalogs/"
    );

    let mut failed_catalogs = Vec::new();

    for catalog_path in &valid_catalogs {
        let output_filename = format!(
            "{}.html",
            catalog_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        for graph_only in [false, true] {
            let mut cli_args = args(Some(catalog_path), &output_path);
            cli_args.graph_only = graph_only;

            if let Err(e) = ragmap_cli::run(&cli_args) {
                failed_catalogs.push((catalog_path.clone(), e));
            } else {
                let html = fs::read_to_string(&output_path).unwrap();
                assert!(html.contains("vis.Network"), "{}", catalog_path.display());
            }
        }
    }

    if !failed_catalogs.is_empty() {
        eprintln!("\nValid catalogs that failed:");
        for (path, err) in &failed_catalogs {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!(
            "{} valid catalog render(s) failed unexpectedly",
            failed_catalogs.len()
        );
    }

    println!("✅ All {} valid catalogs passed", valid_catalogs.len());
}

#[test]
fn e2e_smoke_test_error_catalogs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_catalogs = collect_toml_files(catalogs_dir().join("errors"));

    assert!(
        !error_catalogs.is_empty(),
        "No error catalogs found in catalogs/errors/"
    );

    let mut unexpected_successes = Vec::new();

    for catalog_path in &error_catalogs {
        let output_path = temp_dir.path().join("error.html");

        if ragmap_cli::run(&args(Some(catalog_path), &output_path)).is_ok() {
            unexpected_successes.push(catalog_path.clone());
        }
    }

    if !unexpected_successes.is_empty() {
        eprintln!("\nError catalogs that unexpectedly succeeded:");
        for path in &unexpected_successes {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error catalog(s) succeeded unexpectedly",
            unexpected_successes.len()
        );
    }

    println!("✅ All {} error catalogs failed as expected", error_catalogs.len());
}

#[test]
fn e2e_builtin_catalog_page() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("graph.html");

    let mut cli_args = args(None, &output_path);
    cli_args.physics = true;
    ragmap_cli::run(&cli_args).expect("Built-in catalog should render");

    let html = fs::read_to_string(&output_path).unwrap();
    assert!(html.contains("Fyzika (táhni uzly myší)"));
    assert!(html.contains(r#"id="physics" checked"#));
    assert!(html.contains("LangGraph"));
}

#[test]
fn e2e_missing_catalog_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("graph.html");

    let result = ragmap_cli::run(&args(Some(Path::new("does-not-exist.toml")), &output_path));
    assert!(matches!(result, Err(ragmap::RagmapError::Io(_))));
    assert!(!output_path.exists());
}
