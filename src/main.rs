use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use symbol_packr::{Codec, SymbolTable};

/// symbol-packr - compact single-letter notation for algebraic symbols
///
/// Rewrites verbose notation tokens (like X_"D1") into single lowercase
/// letters and back, using an ordered substitution table.
#[derive(Parser)]
#[command(name = "symbol-packr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode verbose notation into single-letter symbols
    Encode {
        /// Path to the input file (stdin when omitted)
        path: Option<PathBuf>,

        /// YAML file with a custom substitution table
        #[arg(long, short)]
        table: Option<PathBuf>,

        /// Write the result to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Decode single-letter symbols back into verbose notation
    Decode {
        /// Path to the input file (stdin when omitted)
        path: Option<PathBuf>,

        /// YAML file with a custom substitution table
        #[arg(long, short)]
        table: Option<PathBuf>,

        /// Write the result to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print the active substitution table in order
    Table {
        /// YAML file with a custom substitution table
        #[arg(long, short)]
        table: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

/// Load the substitution table: a custom YAML file, or the built-in
/// notation table when none is given.
fn load_table(path: Option<&PathBuf>) -> Result<SymbolTable> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read table file {:?}", path))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid substitution table in {:?}", path))
        }
        None => Ok(SymbolTable::notation()),
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {:?}", path)),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(result: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, result)
                .with_context(|| format!("Failed to write output file {:?}", path))?;
            println!("✓ Wrote {:?}", path);
        }
        None => print!("{}", result),
    }
    Ok(())
}

fn handle_encode(
    path: Option<PathBuf>,
    table: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let codec = Codec::new(load_table(table.as_ref())?);
    let text = read_input(path.as_ref())?;
    write_output(&codec.encode(&text), output.as_ref())
}

fn handle_decode(
    path: Option<PathBuf>,
    table: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let codec = Codec::new(load_table(table.as_ref())?);
    let text = read_input(path.as_ref())?;
    write_output(&codec.decode(&text), output.as_ref())
}

fn handle_table(table: Option<PathBuf>) -> Result<()> {
    let table = load_table(table.as_ref())?;

    println!(
        "Substitution table ({} entries, applied in order):",
        table.len()
    );
    for (token, symbol) in table.entries() {
        println!("  {} -> {}", token, symbol);
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            path,
            table,
            output,
        } => handle_encode(path, table, output),
        Commands::Decode {
            path,
            table,
            output,
        } => handle_decode(path, table, output),
        Commands::Table { table } => handle_table(table),
        Commands::Version => {
            println!("symbol-packr {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
