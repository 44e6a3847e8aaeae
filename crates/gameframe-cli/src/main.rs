use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tabwriter::TabWriter;

use gameframe_io::embed::{to_minified_json, to_pretty_json};
use gameframe_io::prelude::*;

static VARIANT_SCHEMA: Lazy<Result<Validator, String>> = Lazy::new(|| {
    let schema_json: Value = serde_json::from_str(include_str!(
        "../../../schemas/variant.schema.json"
    ))
    .map_err(|e| format!("invalid variant schema JSON: {e}"))?;

    Validator::new(&schema_json).map_err(|e| format!("compile variant schema: {e}"))
});

#[derive(Debug, Parser)]
#[command(name = "gameframe", version, about = "Inline game assets and embed them in a host page")]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the self-contained document for an asset directory.
    Inline {
        /// Directory holding index.html, style.css and game.js
        dir: PathBuf,
        /// Reference table to apply (game or web)
        #[arg(long, default_value = "game")]
        layout: Layout,
        /// Print the inline report JSON to stderr
        #[arg(long)]
        report: bool,
    },
    /// Check that an asset directory inlines without dangling references.
    Check {
        dir: PathBuf,
        #[arg(long, default_value = "game")]
        layout: Layout,
        /// Accept every historical reference form, not just the layout's
        #[arg(long)]
        all_forms: bool,
        /// Print errors as {"code","message"} JSON
        #[arg(long)]
        diagnostics_json: bool,
    },
    /// Print the embedding config for a profile.
    Embed {
        dir: PathBuf,
        /// inline-panel or full-viewport
        #[arg(long)]
        profile: String,
        #[arg(long, default_value = "game")]
        layout: Layout,
        /// Container height in pixels
        #[arg(long)]
        height: Option<u32>,
        /// Minimum container height in pixels
        #[arg(long)]
        min_height: Option<u32>,
        /// Print the host stylesheet instead of JSON
        #[arg(long)]
        css: bool,
        /// Output minified JSON
        #[arg(long)]
        min: bool,
    },
    /// Show which reference forms an asset directory uses.
    Inspect {
        dir: PathBuf,
        #[arg(long, default_value = "game")]
        layout: Layout,
    },
    /// Render a standalone host page for a deployment variant.
    Render {
        /// Deployment root containing the variant's asset directory
        root: PathBuf,
        /// Built-in variant (classic, hyperdrive, wrapper)
        #[arg(long, conflicts_with = "config")]
        variant: Option<String>,
        /// Variant config JSON file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Command::Inline { dir, layout, report } => {
            let bundle = load_or_exit(&dir);
            let names = AssetNames::default();
            match inline_with_report(&bundle, &layout.patterns(&names), &InlineOptions::default()) {
                Ok((doc, r)) => {
                    print!("{doc}");
                    if report {
                        eprintln!("{}", serde_json::to_string_pretty(&r)?);
                    }
                }
                Err(e) => contract_violation(e.code(), &e.to_string(), false),
            }
        }

        Command::Check {
            dir,
            layout,
            all_forms,
            diagnostics_json,
        } => {
            let bundle = load_or_exit(&dir);
            let names = AssetNames::default();
            let patterns = if all_forms {
                all_known(&names)
            } else {
                layout.patterns(&names)
            };

            match inline(&bundle, &patterns) {
                Ok(_) => println!("OK"),
                Err(e) => contract_violation(e.code(), &e.to_string(), diagnostics_json),
            }
        }

        Command::Embed {
            dir,
            profile,
            layout,
            height,
            min_height,
            css,
            min,
        } => {
            let bundle = load_or_exit(&dir);
            let doc = match inline(&bundle, &layout.patterns(&AssetNames::default())) {
                Ok(d) => d,
                Err(e) => contract_violation(e.code(), &e.to_string(), false),
            };

            let opts = AdaptOptions {
                height_px: height,
                min_height_px: min_height,
                ..AdaptOptions::default()
            };
            let (directive, config) = match adapt_with_options(&doc, &profile, &opts) {
                Ok(pair) => pair,
                Err(e) => contract_violation(e.code(), &e.to_string(), false),
            };
            log::debug!(
                "render directive: {}px, scrolling={}",
                directive.height_px,
                directive.scrolling
            );

            if css {
                print!("{}", config.host_stylesheet());
            } else if min {
                println!("{}", to_minified_json(&config)?);
            } else {
                println!("{}", to_pretty_json(&config)?);
            }
        }

        Command::Inspect { dir, layout } => {
            let bundle = load_or_exit(&dir);
            let report = match inline_with_report(
                &bundle,
                &layout.patterns(&AssetNames::default()),
                &InlineOptions::default(),
            ) {
                Ok((_, r)) => r,
                Err(e) => contract_violation(e.code(), &e.to_string(), false),
            };

            let mut tw = TabWriter::new(io::stdout());
            writeln!(tw, "pattern\tasset\tmatches")?;
            for hit in &report.patterns {
                writeln!(tw, "{}\t{}\t{}", hit.match_form, hit.asset, hit.matches)?;
            }
            tw.flush()?;
        }

        Command::Render {
            root,
            variant,
            config,
            output,
        } => {
            let variant = match (variant, config) {
                (_, Some(path)) => load_variant_config(&path),
                (Some(name), None) => DeploymentVariant::builtin(&name).unwrap_or_else(|e| {
                    eprintln!("{e}");
                    process::exit(1);
                }),
                (None, None) => DeploymentVariant::classic(),
            };

            let rendered = match render_variant(&root, &variant, &mut StaticPageRenderer) {
                Ok(r) => r,
                Err(RenderError::Load(e)) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
                Err(e) => contract_violation(e.code(), &e.to_string(), false),
            };

            match output {
                Some(path) => {
                    fs::write(&path, &rendered.output)?;
                    eprintln!("wrote {} ({})", path.display(), rendered.cache_key);
                }
                None => print!("{}", rendered.output),
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn load_or_exit(dir: &Path) -> AssetBundle {
    match load_bundle(dir, &AssetNames::default()) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Inliner/adapter contract violations exit 2 with a stable message.
fn contract_violation(code: &str, message: &str, as_json: bool) -> ! {
    if as_json {
        eprintln!("{}", json!({ "code": code, "message": message }));
    } else {
        eprintln!("{message}");
    }
    process::exit(2);
}

fn load_variant_config(path: &Path) -> DeploymentVariant {
    let raw = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            process::exit(1);
        }
    };

    let instance: Value = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid JSON: {e}");
            process::exit(1);
        }
    };

    let schema = match VARIANT_SCHEMA.as_ref() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    let errors: Vec<String> = schema.iter_errors(&instance).map(|e| e.to_string()).collect();
    if !errors.is_empty() {
        eprintln!("variant config does not match schema:\n{}", errors.join("\n"));
        process::exit(1);
    }

    match parse_variant_json_str(&raw) {
        Ok(v) => v,
        Err(VariantJsonError::UnsupportedProfile(e)) => {
            contract_violation(e.code(), &e.to_string(), false)
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
