//! Command-line driver for sparse matrix file arithmetic

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};

#[cfg(feature = "cli")]
use smtx::{load, render_dense, save, Op};

#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "SMTX CLI - Combine two sparse matrix text files and write the result")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Add two matrices
    Add(OpArgs),
    /// Subtract the second matrix from the first
    Sub(OpArgs),
    /// Multiply two matrices
    Multiply(OpArgs),
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct OpArgs {
    /// First matrix file
    a: PathBuf,

    /// Second matrix file
    b: PathBuf,

    /// Result file (defaults to result_<a>_<b>.txt next to the first input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the result as a dense grid
    #[arg(long)]
    print: bool,
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (op, args) = match &cli.command {
        Commands::Add(args) => (Op::Add, args),
        Commands::Sub(args) => (Op::Sub, args),
        Commands::Multiply(args) => (Op::Multiply, args),
    };

    let a = load(&args.a)?;
    let b = load(&args.b)?;
    let result = op.apply(&a, &b)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_result_path(&args.a, &args.b));
    save(&result, &output)?;

    if args.print {
        print!("{}", render_dense(&result));
    }
    println!("{op} successful, result saved to {}", output.display());

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example matrix_cli");
    std::process::exit(1);
}

/// Build `result_<stem1>_<stem2>.txt` next to the first input file
#[cfg(feature = "cli")]
fn default_result_path(a: &Path, b: &Path) -> PathBuf {
    let stem = |path: &Path| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "matrix".to_string())
    };
    let name = format!("result_{}_{}.txt", stem(a), stem(b));
    match a.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn default_result_path_uses_both_stems() {
        let path = default_result_path(
            Path::new("inputs/easy_sample_03_1.txt"),
            Path::new("inputs/easy_sample_03_2.txt"),
        );
        assert_eq!(
            path,
            Path::new("inputs/result_easy_sample_03_1_easy_sample_03_2.txt")
        );
    }

    #[test]
    fn default_result_path_without_parent() {
        let path = default_result_path(Path::new("a.txt"), Path::new("b.txt"));
        assert_eq!(path, Path::new("result_a_b.txt"));
    }
}
