//! Command-line tools for the resources sidebar.
//!
//! - `manifest` - scan a content directory into `resources.json`
//! - `tree` - print the sidebar as it will be rendered
//! - `suggest` - print not-found suggestions for a path

pub mod frontmatter;
pub mod render;
pub mod scan;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docnav_core::{
    Manifest, PathCorrector, SegmentCorrector, TreeBuilder, resource_paths, sidebar_sections,
};

/// Root prefix of resource links.
pub const DEFAULT_ROOT: &str = "/resources";

/// Suggestions listed on the not-found page.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

#[derive(Debug, Parser)]
#[command(name = "docnav", version, about = "Resources sidebar tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan a content directory and emit the resource manifest
    Manifest {
        content_dir: PathBuf,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the sidebar tree for a manifest
    Tree {
        manifest: PathBuf,
        #[arg(long, default_value = DEFAULT_ROOT)]
        root: String,
    },
    /// Print not-found suggestions for a path
    Suggest {
        manifest: PathBuf,
        path: String,
        #[arg(long, default_value = DEFAULT_ROOT)]
        root: String,
        #[arg(long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
        max: usize,
    },
}

/// Execute a parsed command, returning what it prints on stdout.
pub fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Manifest {
            content_dir,
            output,
        } => {
            let manifest = scan::scan(&content_dir)?;
            let json = manifest.to_json_pretty();
            match output {
                Some(path) => {
                    fs::write(&path, format!("{}\n", json))
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    Ok(String::new())
                }
                None => Ok(format!("{}\n", json)),
            }
        }
        Command::Tree { manifest, root } => {
            let manifest = load_manifest(&manifest)?;
            warn_skipped(&manifest, &root);
            Ok(render::render_tree(&sidebar_sections(
                &manifest.resources,
                &root,
            )))
        }
        Command::Suggest {
            manifest,
            path,
            root,
            max,
        } => {
            let manifest = load_manifest(&manifest)?;
            let known = resource_paths(&manifest.resources, &root);
            let suggestions = SegmentCorrector::new(&root).corrections(&path, &known, max);
            Ok(suggestions
                .iter()
                .map(|s| format!("{}\n", s))
                .collect())
        }
    }
}

/// Write command output, flushing so a closed pipe surfaces as an error.
pub fn write_output(out: &mut impl Write, output: &str) -> Result<()> {
    out.write_all(output.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write output")
}

fn warn_skipped(manifest: &Manifest, root: &str) {
    let mut builder = TreeBuilder::new(root);
    for record in &manifest.resources {
        builder.insert(record);
    }
    for path in builder.skipped() {
        eprintln!("warning: duplicate resource skipped: {}", path);
    }
}

fn load_manifest(path: &Path) -> Result<Manifest> {
    let json =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let mut manifest = Manifest::from_json(&json)
        .with_context(|| format!("failed to load {}", path.display()))?;
    for index in manifest.drop_empty_paths() {
        eprintln!("warning: resource record {} has an empty path, skipped", index);
    }
    Ok(manifest)
}
