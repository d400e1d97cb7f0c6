/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibcite_processor::{RenderFormat, Style};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bibcite", version)]
#[command(about = "Recognize identifiers, normalize provider metadata and render references")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./bibcite.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Classify identifiers as URL, DOI, PMCID, PMID or ISBN")]
    Recognize {
        ids: Vec<String>,

        /// Read one identifier per line; list markers are ignored
        #[arg(long)]
        file: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Render a reference file as a bibliography or in-text citations")]
    Render {
        refs: PathBuf,

        #[arg(long)]
        style: Option<Style>,

        #[arg(long)]
        format: Option<RenderFormat>,

        #[arg(long)]
        intext: bool,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Normalize a saved provider payload into CSL-JSON")]
    Normalize {
        /// webpage, crossref, openlibrary, pmc or pubmed
        provider: String,

        payload: PathBuf,

        /// Address the page was fetched from (webpage)
        #[arg(long)]
        url: Option<String>,

        /// ISBN that was queried (openlibrary)
        #[arg(long)]
        isbn: Option<String>,
    },

    #[command(about = "Convert a reference file between CSL-JSON, YAML and BibJSON")]
    Convert {
        refs: PathBuf,

        #[arg(long, value_enum, default_value = "csl-json")]
        to: ConvertTarget,
    },

    #[command(about = "Search the citation style catalog")]
    Styles {
        query: Option<String>,

        /// A styles.json index to search instead of the built-in list
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    #[cfg(feature = "schema")]
    #[command(about = "Print the JSON schema of a reference record")]
    Schema,

    #[command(about = "Generate shell completion scripts")]
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum ConvertTarget {
    CslJson,
    Yaml,
    Bibjson,
}
