//! Black-box harness that drives the `domtypo` binary and asserts on its
//! text output, end to end (CLI invocation to stdout), rather than
//! duplicating the in-process unit tests.

use std::env;
use std::path::PathBuf;
use std::process::Command;

#[derive(Debug, Clone)]
struct Row {
    domain: String,
    algorithm: String,
}

fn find_domtypo_binary() -> PathBuf {
    if let Ok(path) = env::var("DOMTYPO_BIN") {
        let p = PathBuf::from(path);
        if p.is_file() {
            return p;
        }
    }

    let candidates = [
        "../../target/release/domtypo",
        "../../target/debug/domtypo",
        "../target/release/domtypo",
        "../target/debug/domtypo",
        "./target/release/domtypo",
        "./target/debug/domtypo",
    ];

    for cand in candidates {
        let p = PathBuf::from(cand);
        if p.is_file() {
            return p;
        }
    }

    if let Ok(paths) = env::var("PATH") {
        for dir in paths.split(':') {
            let mut p = PathBuf::from(dir);
            p.push("domtypo");
            if p.is_file() {
                return p;
            }
        }
    }

    panic!("Unable to locate domtypo binary. Set DOMTYPO_BIN env var to the path of ./target/release/domtypo.");
}

fn run_domtypo(args: &[&str]) -> (i32, String, String) {
    let bin = find_domtypo_binary();

    let output = Command::new(bin).args(args).output().expect("failed to execute domtypo");

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

/// Parses the default tab-separated text sink: a header row
/// (`ID  DOMAIN  ALGORITHM  LD  LIVE  IP`) followed by one row per variant.
fn parse_output(stdout: &str) -> Vec<Row> {
    let mut lines = stdout.lines();
    lines.next(); // header
    lines
        .filter(|l| !l.trim().is_empty())
        .filter_map(|line| {
            let cols: Vec<&str> = line.split('\t').collect();
            if cols.len() < 3 {
                return None;
            }
            Some(Row { domain: cols[1].to_string(), algorithm: cols[2].to_string() })
        })
        .collect()
}

fn assert_contains_domain(rows: &[Row], expected: &str) -> Result<(), String> {
    if rows.iter().any(|r| r.domain == expected) {
        Ok(())
    } else {
        Err(format!("expected domain '{expected}' not found in output"))
    }
}

fn assert_algorithm_present(rows: &[Row], algorithm: &str) -> Result<(), String> {
    if rows.iter().any(|r| r.algorithm == algorithm) {
        Ok(())
    } else {
        Err(format!("expected algorithm '{algorithm}' not present in output"))
    }
}

/// Character omission.
fn test_character_omission() -> Result<(), String> {
    let (_code, stdout, _stderr) = run_domtypo(&["-t", "co", "-i", "ld", "google.com"]);
    let rows = parse_output(&stdout);
    for expected in
        ["gogle.com", "oogle.com", "goole.com", "googe.com", "googl.com", "google.om", "google.cm", "google.co"]
    {
        assert_contains_domain(&rows, expected)?;
    }
    if rows.iter().any(|r| r.domain == "google.com") {
        return Err("target's own canonical form leaked into output".to_string());
    }
    Ok(())
}

/// Character swap.
fn test_character_swap() -> Result<(), String> {
    let (_code, stdout, _stderr) = run_domtypo(&["-t", "cs", "-i", "ld", "google.com"]);
    let rows = parse_output(&stdout);
    for expected in ["ogogle.com", "gogole.com", "goolge.com", "googel.com"] {
        assert_contains_domain(&rows, expected)?;
    }
    Ok(())
}

/// Vowel swap.
fn test_vowel_swap() -> Result<(), String> {
    let (_code, stdout, _stderr) = run_domtypo(&["-t", "vs", "-i", "ld", "example.com"]);
    let rows = parse_output(&stdout);
    assert_contains_domain(&rows, "excmple.com")?;
    if rows.iter().any(|r| r.domain == "example.com") {
        return Err("target's own canonical form leaked into output".to_string());
    }
    Ok(())
}

fn test_all_algorithms_run_without_crashing() -> Result<(), String> {
    let (code, stdout, stderr) = run_domtypo(&["-t", "all", "-i", "ld,idna", "example.com"]);
    if code != 0 {
        return Err(format!("exit code {code}, stderr: {stderr}"));
    }
    let rows = parse_output(&stdout);
    if rows.is_empty() {
        return Err("expected at least one variant with -t all".to_string());
    }
    assert_algorithm_present(&rows, "co")?;
    assert_algorithm_present(&rows, "hg")?;
    Ok(())
}

fn test_unknown_algorithm_code_is_a_config_error() -> Result<(), String> {
    let (code, _stdout, _stderr) = run_domtypo(&["-t", "not-a-real-code", "example.com"]);
    if code != 2 {
        return Err(format!("expected exit code 2 for an unknown algorithm code, got {code}"));
    }
    Ok(())
}

fn main() {
    let bin = find_domtypo_binary();
    eprintln!("using domtypo binary: {}", bin.display());

    let tests: Vec<(&str, fn() -> Result<(), String>)> = vec![
        ("character omission", test_character_omission),
        ("character swap", test_character_swap),
        ("vowel swap", test_vowel_swap),
        ("all algorithms run without crashing", test_all_algorithms_run_without_crashing),
        ("unknown algorithm code is a config error", test_unknown_algorithm_code_is_a_config_error),
    ];

    let mut failures = Vec::new();
    for (name, f) in &tests {
        match f() {
            Ok(()) => println!("[PASS] {name}"),
            Err(err) => {
                println!("[FAIL] {name} -> {err}");
                failures.push(format!("{name}: {err}"));
            }
        }
    }

    if failures.is_empty() {
        println!("\nAll tests passed");
        std::process::exit(0);
    } else {
        println!("\n{} test(s) failed:", failures.len());
        for f in &failures {
            println!(" - {f}");
        }
        std::process::exit(1);
    }
}
