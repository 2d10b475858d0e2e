use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use xmigraph_cli::{Args, run};

/// Collects all .xmi files from a directory
fn collect_xmi_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("xmi")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Samples live at the workspace root, not next to the crate
fn samples_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
}

fn args_for(input: &Path, output: PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_samples = collect_xmi_files(samples_path());

    assert!(
        !valid_samples.is_empty(),
        "No valid samples found in samples/"
    );

    let mut failed_samples = Vec::new();

    for sample_path in &valid_samples {
        let output_filename = format!(
            "{}.txt",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if let Err(e) = run(&args_for(sample_path, output_path)) {
            failed_samples.push((sample_path.clone(), e));
        }
    }

    if !failed_samples.is_empty() {
        eprintln!("\nValid samples that failed:");
        for (path, err) in &failed_samples {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!(
            "{} valid sample(s) failed unexpectedly",
            failed_samples.len()
        );
    }

    println!("✅ All {} valid samples passed", valid_samples.len());
}

#[test]
fn e2e_smoke_test_error_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_samples = collect_xmi_files(samples_path().join("errors"));

    assert!(
        !error_samples.is_empty(),
        "No error samples found in samples/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for sample_path in &error_samples {
        let output_filename = format!(
            "error_{}.txt",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(sample_path, output_path)).is_ok() {
            unexpectedly_succeeded.push(sample_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError samples that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error sample(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error samples failed as expected",
        error_samples.len()
    );
}

#[test]
fn e2e_greeter_report() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("greeter.txt");

    run(&args_for(
        &samples_path().join("greeter.xmi"),
        output_path.clone(),
    ))
    .expect("greeter sample renders");

    let report = fs::read_to_string(output_path).expect("report written");
    assert!(report.starts_with("interfaces: 1\n  Greeter (I_GREETER)\n"));
    assert!(report.contains("    operation wave (O_WAVE)\n"));
    assert!(report.contains("  Lobby -> EnglishGreeter via Greeter\n"));
}

#[test]
fn e2e_json_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[report]\nformat = \"json\"\n").expect("write config");
    let output_path = temp_dir.path().join("shop.json");

    let mut args = args_for(&samples_path().join("shop.xmi"), output_path.clone());
    args.config = Some(config_path.to_string_lossy().to_string());
    run(&args).expect("shop sample renders");

    let report = fs::read_to_string(output_path).expect("report written");
    assert!(report.contains("\"unrealized_interfaces\": [\n    \"I_MAIL\"\n  ]"));
    assert!(report.contains("\"consumer\": \"C_CHECKOUT\""));
}
