#![deny(unsafe_code)]
//! CLI binary for the blob-engine organic shape generator.
//!
//! Subcommands:
//! - `generate`: build a blob from params or a recipe, write SVG, path data, or JSON
//! - `list`: print stitch methods and the parameter schema

mod error;

use blob_engine_core::params::param_schema;
use blob_engine_core::svg::{path_data, svg_document};
use blob_engine_core::{
    generate_blob_points, stitch_path, BlobParams, BlobPath, BlobPoint, Recipe, Srgb,
    StitchMethod, Xorshift64,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use error::CliError;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "blob-engine", about = "Organic blob shape generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a blob and write it as SVG, path data, or JSON.
    Generate(GenerateArgs),
    /// List stitch methods and blob parameters.
    List,
}

#[derive(Args)]
struct GenerateArgs {
    /// Blob parameters as a JSON string (missing keys use defaults).
    #[arg(long, default_value = "{}")]
    params: String,

    /// Recipe JSON file to start from; `--params` keys override it.
    #[arg(long)]
    recipe: Option<PathBuf>,

    /// Noise seed, overriding params and recipe.
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<f64>,

    /// Draw a fresh noise seed.
    #[arg(long, conflicts_with = "seed")]
    shuffle: bool,

    /// Seed for the shuffle PRNG; defaults to the system clock.
    #[arg(long, requires = "shuffle")]
    rng_seed: Option<u64>,

    /// Stitch method (simple, advanced).
    #[arg(short, long)]
    method: Option<String>,

    /// Fill color for SVG output, e.g. "#ff0066".
    #[arg(long)]
    fill: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Output file path; prints to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Standalone SVG document.
    Svg,
    /// SVG path data (`d` attribute) only.
    Path,
    /// Recipe, vertices, and segments as JSON.
    Json,
}

/// Resolves the final recipe from a recipe file, `--params`, and overrides.
///
/// Real parameters are clamped to their slider ranges, as a UI would; an edge
/// count below 3 is left for the generator to reject.
fn build_recipe(args: &GenerateArgs) -> Result<Recipe, CliError> {
    let mut recipe = match &args.recipe {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
            serde_json::from_str::<Recipe>(&text)
                .map_err(|e| CliError::Input(format!("invalid recipe {}: {e}", path.display())))?
        }
        None => Recipe::default(),
    };

    let overrides: Value = serde_json::from_str(&args.params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    let overrides = overrides
        .as_object()
        .ok_or_else(|| CliError::Input("--params must be a JSON object".into()))?;
    let mut merged = recipe.params.to_json();
    if let Some(base) = merged.as_object_mut() {
        for (key, value) in overrides {
            base.insert(key.clone(), value.clone());
        }
    }
    recipe.params = BlobParams::from_json(&merged);

    if let Some(seed) = args.seed {
        recipe.params = recipe.params.with_seed(seed);
    }
    if args.shuffle {
        let mut rng = Xorshift64::new(args.rng_seed.unwrap_or_else(clock_seed));
        recipe.params = recipe.params.reshuffled(&mut rng);
    }
    if let Some(name) = &args.method {
        recipe.method = StitchMethod::from_name(name)?;
    }
    if let Some(hex) = &args.fill {
        recipe.fill = Srgb::from_hex(hex)?;
    }

    recipe.params = recipe.params.clamped();
    Ok(recipe)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Renders a generated blob in the requested format.
fn render(
    recipe: &Recipe,
    points: &[BlobPoint],
    path: &BlobPath,
    format: Format,
) -> Result<String, CliError> {
    Ok(match format {
        Format::Svg => svg_document(path, recipe.fill),
        Format::Path => format!("{}\n", path_data(path)),
        Format::Json => {
            let doc = json!({
                "recipe": recipe,
                "points": points,
                "path": path,
                "d": path_data(path),
            });
            format!("{}\n", serde_json::to_string_pretty(&doc)?)
        }
    })
}

fn generate(args: &GenerateArgs, json_mode: bool) -> Result<(), CliError> {
    let recipe = build_recipe(args)?;
    let points = generate_blob_points(&recipe.params)?;
    let path = stitch_path(&points, recipe.method, recipe.params.smoothness)?;
    let rendered = render(&recipe, &points, &path, args.format)?;

    let Some(output) = &args.output else {
        print!("{rendered}");
        return Ok(());
    };

    std::fs::write(output, rendered).map_err(|e| CliError::write(output, e))?;

    let p = &recipe.params;
    if json_mode {
        let info = json!({
            "edge_count": p.edge_count,
            "method": recipe.method.name(),
            "seed": p.seed,
            "format": format!("{:?}", args.format).to_lowercase(),
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "generated {}-edge {} blob (seed {}) -> {}",
            p.edge_count,
            recipe.method.name(),
            p.seed,
            output.display()
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let methods = StitchMethod::list_names();
            let schema = param_schema();
            if cli.json {
                let info = json!({
                    "methods": methods,
                    "params": schema,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Stitch methods:");
                println!("  {}", methods.join(", "));
                println!("Parameters:");
                if let Some(entries) = schema.as_object() {
                    for (name, entry) in entries {
                        println!("  {name:<12} {}", entry["description"].as_str().unwrap_or(""));
                    }
                }
            }
        }
        Command::Generate(args) => generate(&args, cli.json)?,
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
