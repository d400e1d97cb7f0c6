/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod cli;
mod config;

use anyhow::{bail, Context, Result};
use bibcite_core::style::{builtin_catalog, load_catalog, sort_popular_first, suggest_styles};
use bibcite_core::{parse_identifier_list, recognize, search_styles, Identifier};
use bibcite_processor::{
    format_bibliography, format_intext, load_references, write_references, Provider,
    ReferenceFormat,
};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command, ConvertTarget};
use config::Config;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_project()?.unwrap_or_default(),
    };
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Recognize { ids, file, json } => {
            let mut inputs = ids;
            if let Some(path) = file {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                inputs.extend(parse_identifier_list(&text));
            }
            let identifiers: Vec<Identifier> = inputs.iter().map(|s| recognize(s)).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&identifiers)?);
            } else {
                for id in &identifiers {
                    println!("{}\t{}", id.kind, id.value);
                }
            }
        }

        Command::Render {
            refs,
            style,
            format,
            intext,
            json,
        } => {
            let style = match style {
                Some(style) => style,
                None => config.style()?,
            };
            let format = match format {
                Some(format) => format,
                None => config.format()?,
            };
            let references = load_references(&refs)
                .with_context(|| format!("failed to load references from {}", refs.display()))?;

            let entries: Vec<String> = if intext {
                references
                    .iter()
                    .map(|content| format_intext(style, content))
                    .collect()
            } else {
                format_bibliography(style, &references, format)
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in entries {
                    println!("{}", entry);
                }
            }
        }

        Command::Normalize {
            provider,
            payload,
            url,
            isbn,
        } => {
            let provider: Provider = provider.parse()?;
            let body = std::fs::read_to_string(&payload)
                .with_context(|| format!("failed to read {}", payload.display()))?;
            let key = match provider {
                Provider::Webpage => match url {
                    Some(url) => url,
                    None => bail!("--url is required for web pages"),
                },
                Provider::OpenLibrary => isbn.unwrap_or_default(),
                _ => String::new(),
            };
            let content = provider
                .normalize(&body, &key)
                .with_context(|| format!("{} payload in {}", provider, payload.display()))?;
            println!("{}", serde_json::to_string_pretty(&content)?);
        }

        Command::Convert { refs, to } => {
            let references = load_references(&refs)
                .with_context(|| format!("failed to load references from {}", refs.display()))?;
            let format = match to {
                ConvertTarget::CslJson => ReferenceFormat::CslJson,
                ConvertTarget::Yaml => ReferenceFormat::Yaml,
                ConvertTarget::Bibjson => ReferenceFormat::BibJson,
            };
            println!("{}", write_references(&references, format)?);
        }

        Command::Styles { query, catalog } => {
            let path = catalog.or_else(|| config.styles.catalog.clone());
            let mut entries = match path {
                Some(path) => read_catalog(&path)?,
                None => builtin_catalog(),
            };
            sort_popular_first(&mut entries);

            let query = query.unwrap_or_default();
            let found = search_styles(&entries, &query);
            if found.is_empty() {
                let suggestions = suggest_styles(&entries, &query);
                if suggestions.is_empty() {
                    bail!("no style matches {:?}", query);
                }
                eprintln!("No style matches {:?}. Did you mean:", query);
                for entry in suggestions {
                    println!("{}", entry);
                }
            } else {
                for entry in found {
                    println!("{}", entry);
                }
            }
        }

        #[cfg(feature = "schema")]
        Command::Schema => {
            let schema = schemars::schema_for!(bibcite_core::Content);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }

        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_catalog(path: &Path) -> Result<Vec<bibcite_core::StyleEntry>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    load_catalog(&json).with_context(|| format!("invalid style catalog {}", path.display()))
}
