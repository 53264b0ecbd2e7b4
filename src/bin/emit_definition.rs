//! Build definitions and emit their host registration calls as JSON.
//!
//! Usage:
//!   emit-definition --file definitions.json
//!   emit-definition --name "Event" --icon dashicons-calendar --rewrite '{"with_front": false}'
//!   emit-definition --kind taxonomy --name Genre --attach event,post
//!   emit-definition --file definitions.json --check
//!
//! One registration call per stdout line. Taxonomies produce a
//! registration line followed by one association line per attached
//! content type.

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::Value;
use std::io::{Read, stdin};
use std::path::PathBuf;
use typeforge::{
    Definition, Forge, Manifest, OptionsRecord, RecordingHost, ensure_object, parse_type_list,
};

#[derive(Parser, Debug)]
#[command(name = "emit-definition")]
#[command(about = "Build content-type/taxonomy definitions and emit registration records")]
struct Cli {
    /// Definition manifest file; reads stdin when no --name is given either.
    #[arg(long, conflicts_with = "name")]
    file: Option<PathBuf>,

    /// Display name for a single inline definition.
    #[arg(long)]
    name: Option<String>,

    /// Definition kind for inline mode.
    #[arg(long, default_value = "content-type", value_parser = ["content-type", "taxonomy"])]
    kind: String,

    /// Definition description.
    #[arg(long)]
    description: Option<String>,

    /// Key prefix applied to the derived (or explicit) machine key.
    #[arg(long)]
    prefix: Option<String>,

    /// Explicit machine key; still prefixed when a prefix is set.
    #[arg(long)]
    key: Option<String>,

    /// Localization text domain.
    #[arg(long)]
    text_domain: Option<String>,

    /// Admin menu icon identifier (content types only).
    #[arg(long)]
    icon: Option<String>,

    /// Base-argument overrides as a JSON object.
    #[arg(long)]
    options: Option<String>,

    /// Rewrite overrides as a JSON object; pass '{}' for pure defaults.
    #[arg(long)]
    rewrite: Option<String>,

    /// Expose the definition over REST.
    #[arg(long)]
    rest: bool,

    /// REST base path; implies --rest.
    #[arg(long)]
    rest_base: Option<String>,

    /// REST controller class; implies --rest.
    #[arg(long)]
    rest_controller_class: Option<String>,

    /// Comma- or space-separated object types a taxonomy attaches to.
    #[arg(long)]
    attach: Option<String>,

    /// Validate inputs and build, but emit nothing.
    #[arg(long)]
    check: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let definitions = if cli.name.is_some() {
        vec![build_inline(&cli)?]
    } else {
        load_manifest(&cli)?.build_definitions()?
    };

    if cli.check {
        return Ok(());
    }

    let mut host = RecordingHost::new();
    for definition in &definitions {
        definition.register(&mut host)?;
    }
    for call in host.calls() {
        println!("{}", serde_json::to_string(call)?);
    }
    Ok(())
}

fn load_manifest(cli: &Cli) -> Result<Manifest> {
    match &cli.file {
        Some(path) => Manifest::load(path),
        None => {
            let mut buf = String::new();
            stdin()
                .read_to_string(&mut buf)
                .context("reading manifest from stdin")?;
            if buf.trim().is_empty() {
                bail!("no input: pass --name for inline mode or a manifest via --file/stdin");
            }
            let value: Value = serde_json::from_str(&buf).context("parsing manifest from stdin")?;
            Manifest::from_value(&value)
        }
    }
}

fn parse_object(raw: &str, what: &str) -> Result<OptionsRecord> {
    let value: Value =
        serde_json::from_str(raw).with_context(|| format!("parsing {what} as JSON"))?;
    ensure_object(&value, what)
}

fn build_inline(cli: &Cli) -> Result<Definition> {
    let name = cli.name.as_deref().unwrap_or_default();
    let mut forge = Forge::new();
    if let Some(domain) = &cli.text_domain {
        forge = forge.with_text_domain(domain);
    }
    if let Some(prefix) = &cli.prefix {
        forge.set_prefix(prefix);
    }

    let options = match cli.options.as_deref() {
        Some(raw) => parse_object(raw, "options")?,
        None => OptionsRecord::new(),
    };
    let rewrite = match cli.rewrite.as_deref() {
        Some(raw) => Some(parse_object(raw, "rewrite")?),
        None => None,
    };
    let rest = cli.rest || cli.rest_base.is_some() || cli.rest_controller_class.is_some();
    let rest_base = cli.rest_base.as_deref().unwrap_or_default();
    let rest_controller = cli.rest_controller_class.as_deref().unwrap_or_default();

    match cli.kind.as_str() {
        "content-type" => {
            if cli.attach.is_some() {
                bail!("--attach only applies to taxonomies");
            }
            let mut builder = forge.content_type(name);
            if let Some(description) = &cli.description {
                builder = builder.description(description);
            }
            if let Some(key) = &cli.key {
                builder = builder.key(key);
            }
            builder = builder.args(cli.icon.as_deref(), options);
            if let Some(rewrite) = rewrite {
                builder = builder.rewrite(rewrite);
            }
            if rest {
                builder = builder.restful(rest_base, rest_controller);
            }
            Ok(builder.build())
        }
        "taxonomy" => {
            if cli.icon.is_some() {
                bail!("--icon only applies to content types");
            }
            let mut builder = forge.taxonomy(name);
            if let Some(description) = &cli.description {
                builder = builder.description(description);
            }
            if let Some(key) = &cli.key {
                builder = builder.key(key);
            }
            builder = builder.args(options);
            if let Some(rewrite) = rewrite {
                builder = builder.rewrite(rewrite);
            }
            if rest {
                builder = builder.restful(rest_base, rest_controller);
            }
            if let Some(attach) = &cli.attach {
                let object_types = parse_type_list(attach);
                if object_types.is_empty() {
                    bail!("--attach was given but contained no object types");
                }
                builder = builder.attach_to(object_types);
            }
            Ok(builder.build())
        }
        other => bail!("unknown kind '{}'", other),
    }
}
