//! Creates the statistics and remap reports and the `keymap.json` file.

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use eyre::WrapErr;
use radkey::{assembly::Assembly, keymap::KeymapFile, projection::Projection, report};
use std::{
    collections::{BTreeSet, HashMap},
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Stats { assembly, output } => {
            create_statistics(&assembly, output.as_deref())?;
        }
        Command::Keymap {
            assembly,
            keymap_version: version,
            output,
        } => {
            create_keymap(&assembly, version, &output)?;
        }
        Command::Remap {
            assembly,
            keymap,
            corpus,
            output,
        } => {
            create_remap(assembly.as_deref(), keymap.as_deref(), &corpus, &output)?;
        }
    }

    Ok(())
}

fn create_statistics(assembly_path: &Path, output_path: Option<&Path>) -> eyre::Result<()> {
    let assembly = parse_assembly(assembly_path)?;

    tracing::info!("producing statistics");
    let report = report::statistics(&assembly);
    match output_path {
        Some(path) => write_report(path, &report)?,
        None => print!("{report}"),
    }
    Ok(())
}

fn create_keymap(assembly_path: &Path, version: String, output_path: &Path) -> eyre::Result<()> {
    let assembly = parse_assembly(assembly_path)?;

    tracing::info!("producing keymap");
    let keymap = KeymapFile::derive(&assembly, version);

    tracing::info!("writing output");
    let out = File::create(output_path)?;
    serde_json::to_writer_pretty(BufWriter::new(out), &keymap)?;
    Ok(())
}

fn create_remap(
    assembly_path: Option<&Path>,
    keymap_path: Option<&Path>,
    corpus_path: &Path,
    output_path: &Path,
) -> eyre::Result<()> {
    let radical_to_keys = match (assembly_path, keymap_path) {
        (Some(assembly), None) => parse_assembly(assembly)?.radical_to_keys,
        (None, Some(keymap)) => load_keymap(keymap)?,
        _ => eyre::bail!("exactly one of --assembly and --keymap must be given"),
    };

    tracing::info!("projecting corpus");
    let corpus = open(corpus_path)?;
    let projection = Projection::from_reader(BufReader::new(corpus), &radical_to_keys)
        .wrap_err_with(|| format!("Failed to read corpus at '{}'", corpus_path.display()))?;

    tracing::info!("writing output");
    write_report(output_path, &report::mapping(&projection))?;
    Ok(())
}

fn parse_assembly(path: &Path) -> eyre::Result<Assembly> {
    tracing::info!("parsing assembly table");
    let file = open(path)?;
    Assembly::from_reader(BufReader::new(file))
        .wrap_err_with(|| format!("Failed to read assembly table at '{}'", path.display()))
}

fn load_keymap(path: &Path) -> eyre::Result<HashMap<String, BTreeSet<String>>> {
    tracing::info!("loading keymap");
    let file = open(path)?;
    let keymap: KeymapFile = serde_json::from_reader(BufReader::new(file))?;
    tracing::info!("keymap version {}", keymap.header.version);
    Ok(keymap.into_index())
}

fn open(path: &Path) -> eyre::Result<File> {
    File::open(path).wrap_err_with(|| format!("Failed to open file at '{}'", path.display()))
}

// the proofreading toolchain that consumes the reports expects UTF-8 with a BOM
fn write_report(path: &Path, contents: &str) -> eyre::Result<()> {
    std::fs::write(path, format!("\u{feff}{contents}"))
        .wrap_err_with(|| format!("Failed to write report to '{}'", path.display()))?;
    Ok(())
}
