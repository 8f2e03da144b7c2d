// SPDX-License-Identifier: MIT
//
// tinct — derive light and dark design-token sheets from a few HSL seeds.
//
// This is the binary that wires the crates together:
//
//   tinct-color → HSL color value and its two CSS encodings
//   tinct-theme → settings, derivation engine, token table, presets
//
// Each run flows through:
//
//   --config TOML (or built-in presets) → ThemeSettings per scheme
//   derive → ThemeColors → TokenTable → CSS rule(s) or JSON → stdout
//
// Without --scheme both variants are printed: CSS puts the light tokens on
// `:root` and the dark tokens on `.<dark_class>`, JSON nests them under
// "light" and "dark".

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tinct_theme::{ColorScheme, ThemeConfig, TokenTable, builtin};

// ─── Command line ───────────────────────────────────────────────────────────

/// Output encoding of the token table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Format {
    /// CSS custom properties (`--colors-*`, `--shadows-*`).
    #[default]
    Css,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "tinct", version, about = "Derive light and dark design tokens from HSL seeds")]
struct Cli {
    /// Theme configuration file (TOML). Uses the built-in presets when omitted.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Css)]
    format: Format,

    /// Print only this variant (`light` or `dark`).
    #[arg(short, long, value_name = "SCHEME")]
    scheme: Option<ColorScheme>,

    /// Log at debug level (overrides RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

// ─── Rendering ──────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<ThemeConfig> {
    let Some(path) = path else {
        debug!("no config given, using built-in presets");
        return Ok(ThemeConfig::default());
    };
    let config = ThemeConfig::load(path)?;
    info!(path = %path.display(), "using theme config");
    Ok(config)
}

fn tokens(config: &ThemeConfig, scheme: ColorScheme) -> TokenTable {
    TokenTable::from_colors(&config.derive(scheme))
}

/// Render the requested variant(s) in the requested format.
fn render(config: &ThemeConfig, format: Format, scheme: Option<ColorScheme>) -> Result<String> {
    let output = match (format, scheme) {
        (Format::Css, Some(scheme)) => tokens(config, scheme).to_css(":root"),
        (Format::Css, None) => builtin::stylesheet(
            &tokens(config, ColorScheme::Light),
            &tokens(config, ColorScheme::Dark),
            config.dark_class(),
        ),
        (Format::Json, Some(scheme)) => {
            let mut json = serde_json::to_string_pretty(&tokens(config, scheme))
                .context("failed to encode tokens as JSON")?;
            json.push('\n');
            json
        }
        (Format::Json, None) => {
            let both: BTreeMap<&str, TokenTable> = ColorScheme::ALL
                .iter()
                .map(|&scheme| (scheme.name(), tokens(config, scheme)))
                .collect();
            let mut json =
                serde_json::to_string_pretty(&both).context("failed to encode tokens as JSON")?;
            json.push('\n');
            json
        }
    };
    Ok(output)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let output = render(&config, cli.format, cli.scheme)?;
    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("failed to write tokens to stdout")?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("tinct: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
