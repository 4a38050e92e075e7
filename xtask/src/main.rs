use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const CORE_PACKAGE: &str = "hello_handler_core";
const LAMBDA_PACKAGE: &str = "hello_handler_lambda";
const LAMBDA_BINARY: &str = "hello_lambda";
const LOCAL_BINARY: &str = "invoke_local";
const DIST_DIR: &str = "dist";
const DEFAULT_TARGET: &str = "x86_64-unknown-linux-gnu";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the hello handler workspace",
    long_about = "A unified CLI for CI checks, Lambda packaging, and local\n\
                  invocation of the hello handler."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run CI checks
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Build the Lambda binary and zip it as `bootstrap`
    Package {
        /// Compilation target triple for the Lambda binary
        #[arg(long, env = "LAMBDA_TARGET", default_value = DEFAULT_TARGET)]
        target: String,
        /// Build profile used for the binary
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
    },
    /// Run the handler once against a local event document
    Invoke {
        /// Event JSON file
        #[arg(long)]
        event: String,
        /// Context JSON file
        #[arg(long)]
        context: Option<String>,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Check, then package a debug bootstrap zip
    All,
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }
}

// ── cargo ──────────────────────────────────────────────────────────

/// Runs one cargo invocation under a labelled banner.
fn cargo(label: &str, args: &[&str]) -> Result<(), String> {
    eprintln!("\n=== {label} ===\n+ cargo {}", args.join(" "));
    let status = Command::new("cargo")
        .args(args)
        .status()
        .map_err(|error| format!("failed to execute cargo: {error}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("{label} failed ({status})"))
    }
}

fn ci_check() -> Result<(), String> {
    let steps: [(&str, &[&str]); 4] = [
        ("Check formatting", &["fmt", "--all", "--", "--check"]),
        (
            "Clippy",
            &["clippy", "--all-targets", "--all-features", "--", "-D", "warnings"],
        ),
        ("Test handler core", &["test", "-p", CORE_PACKAGE]),
        ("Test lambda adapter", &["test", "-p", LAMBDA_PACKAGE]),
    ];

    for (label, args) in steps {
        cargo(label, args)?;
    }
    Ok(())
}

// ── packaging ──────────────────────────────────────────────────────

fn require_rust_target(target: &str) -> Result<(), String> {
    let output = match Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
    {
        Ok(output) => output,
        Err(error) => {
            eprintln!("warning: rustup unavailable ({error}); skipping target check");
            return Ok(());
        }
    };

    if !output.status.success() {
        return Err(format!(
            "`rustup target list --installed` failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    let installed = String::from_utf8_lossy(&output.stdout);
    if installed.lines().any(|line| line.trim() == target) {
        Ok(())
    } else {
        Err(format!(
            "rust target `{target}` is not installed; run `rustup target add {target}`"
        ))
    }
}

/// Builds the Lambda binary for `target` and writes it as the `bootstrap`
/// entry of `dist/hello_lambda.zip`.
fn package_lambda(target: &str, profile: BuildProfile) -> Result<PathBuf, String> {
    require_rust_target(target)?;

    let mut build_args = vec![
        "build",
        "-p",
        LAMBDA_PACKAGE,
        "--bin",
        LAMBDA_BINARY,
        "--target",
        target,
    ];
    if let BuildProfile::Release = profile {
        build_args.push("--release");
    }
    cargo("Build lambda binary", &build_args)?;

    let binary_path = Path::new("target")
        .join(target)
        .join(profile.dir_name())
        .join(LAMBDA_BINARY);
    let binary = fs::read(&binary_path)
        .map_err(|error| format!("failed to read '{}': {error}", binary_path.display()))?;

    fs::create_dir_all(DIST_DIR).map_err(|error| format!("failed to create {DIST_DIR}: {error}"))?;
    let zip_path = Path::new(DIST_DIR).join(format!("{LAMBDA_BINARY}.zip"));
    let file = fs::File::create(&zip_path)
        .map_err(|error| format!("failed to create '{}': {error}", zip_path.display()))?;

    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    let write_failed = |error: String| format!("failed to write '{}': {error}", zip_path.display());
    zip.start_file("bootstrap", options)
        .map_err(|error| write_failed(error.to_string()))?;
    zip.write_all(&binary)
        .map_err(|error| write_failed(error.to_string()))?;
    zip.finish()
        .map_err(|error| write_failed(error.to_string()))?;

    Ok(zip_path)
}

// ── main ───────────────────────────────────────────────────────────

fn run(command: Commands) -> Result<(), String> {
    match command {
        Commands::Ci { job } => {
            ci_check()?;
            if let CiJob::All = job {
                package_lambda(DEFAULT_TARGET, BuildProfile::Debug)?;
            }
            eprintln!("\nCI job passed.");
        }
        Commands::Package { target, profile } => {
            let zip_path = package_lambda(&target, profile)?;
            eprintln!("\nPackaged artifact:\n- {}", zip_path.display());
        }
        Commands::Invoke { event, context } => {
            let mut args = vec![
                "run",
                "-p",
                LAMBDA_PACKAGE,
                "--bin",
                LOCAL_BINARY,
                "--",
                "--event",
                event.as_str(),
            ];
            if let Some(path) = context.as_deref() {
                args.extend(["--context", path]);
            }
            cargo("Invoke handler locally", &args)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse().command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
