use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "relgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark suites and summarize the results
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const SUITES: &[&str] = &["relation_benchmark", "traversal_benchmark"];

/// The slice of criterion's estimates.json we consume.
#[derive(Deserialize)]
struct Estimates {
    mean: Measure,
}

#[derive(Deserialize)]
struct Measure {
    point_estimate: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--benches", "--release"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for suite in SUITES {
        println!("\n>>> Running suite: {suite}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.arg("bench").arg("--bench").arg(suite);

        // Args for the Criterion runner go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.5");
            cmd.arg("--sample-size").arg("10");
            cmd.arg("--noplot");
        }

        let status = cmd
            .status()
            .context(format!("Failed to run bench suite {suite}"))?;

        if !status.success() {
            eprintln!("Warning: suite {suite} failed");
        } else {
            println!("Finished {suite} in {:.2?}", start.elapsed());
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut means = BTreeMap::new();
    collect_means(criterion_dir, criterion_dir, &mut means);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Benchmark Report")?;

    writeln!(file, "\n## Iterative vs Recursive Traversal\n")?;
    writeln!(
        file,
        "| Benchmark | Iterative | Recursive | Recursive / Iterative |"
    )?;
    writeln!(file, "|---|---|---|---|")?;
    for (id, iterative_ns) in &means {
        let Some(partner) = id
            .contains("/iterative_")
            .then(|| id.replace("/iterative_", "/recursive_"))
        else {
            continue;
        };
        let Some(recursive_ns) = means.get(&partner) else {
            continue;
        };
        let label = id.replace("/iterative_", "/");
        writeln!(
            file,
            "| {label} | {} | {} | **{:.2}x** |",
            format_ns(*iterative_ns),
            format_ns(*recursive_ns),
            recursive_ns / iterative_ns,
        )?;
    }

    writeln!(file, "\n## All Measurements\n")?;
    writeln!(file, "| Benchmark | Mean time |")?;
    writeln!(file, "|---|---|")?;
    for (id, ns) in &means {
        writeln!(file, "| {id} | {} |", format_ns(*ns))?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Walks `target/criterion` for `new/estimates.json` files, keying each
/// mean by the benchmark id path relative to the criterion root.
fn collect_means(root: &Path, dir: &Path, means: &mut BTreeMap<String, f64>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_means(root, &path, means);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        // Only the freshest run; parent layout is <id...>/new/estimates.json
        let Some(new_dir) = path.parent() else {
            continue;
        };
        if new_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(id_dir) = new_dir.parent() else {
            continue;
        };
        let Ok(id) = id_dir.strip_prefix(root) else {
            continue;
        };
        if id.components().next().is_none() || id.starts_with("report") {
            continue;
        }

        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        let Ok(estimates) = serde_json::from_str::<Estimates>(&content) else {
            continue;
        };
        means.insert(
            id.to_string_lossy().replace('\\', "/"),
            estimates.mean.point_estimate,
        );
    }
}

fn format_ns(ns: f64) -> String {
    if ns >= 1e6 {
        format!("{:.2} ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.2} µs", ns / 1e3)
    } else {
        format!("{ns:.0} ns")
    }
}
