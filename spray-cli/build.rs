//! Build script for spray-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("spray")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compute hierarchical path identifiers for tree documents")
        .long_about(
            "Command-line tool for computing stable, hierarchical path identifiers \
             (such as body/div[1]/p) for the elements of a tree document",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file layered above discovered configuration")
                .value_name("PATH")
                .global(true)
                .env("SPRAY_CONFIG"),
        )
        .subcommands(vec![
            Command::new("index")
                .about("Run a scenario and print the identifiers it produces")
                .long_about(
                    "Build the document a YAML scenario describes, mount and unmount its \
                     elements, and print every tracked element's identifier",
                ),
            Command::new("show-config")
                .about("Print the resolved configuration")
                .long_about("Merge every configuration layer and print the result as YAML"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a spray configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("spray.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
