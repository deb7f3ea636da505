use clap::{Parser, Subcommand};
use flatskin::{ConverterBuilder, ConverterConfig, JsonDocumentSource, PipelineError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Flatten layered documents into JSON scenes with exported PNG assets.
#[derive(Parser, Debug)]
#[command(name = "flatskin", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a JSON layer tree into a scene, writing assets to disk.
    Convert {
        /// Path to the document tree (JSON).
        input: PathBuf,
        /// Document name; defaults to the input file stem.
        #[arg(long)]
        name: Option<String>,
        /// Root of the per-document asset directories.
        #[arg(long)]
        assets_root: Option<PathBuf>,
        /// Prefix of asset paths inside the scene.
        #[arg(long)]
        src_prefix: Option<String>,
        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write the result here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Look up font files by font name.
    Fonts {
        /// Directory holding the `.ttf` files.
        #[arg(long)]
        store: PathBuf,
        /// Font names, as they appear in a scene's `fonts` list.
        names: Vec<String>,
        /// Write the result here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn emit(json: &str, output: Option<&Path>) -> Result<(), PipelineError> {
    match output {
        Some(path) => {
            fs::write(path, json)?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    match cli.command {
        Command::Convert {
            input,
            name,
            assets_root,
            src_prefix,
            config,
            output,
        } => {
            let mut source = JsonDocumentSource::from_path(&input);
            let name = name.or_else(|| source.file_stem()).ok_or_else(|| {
                PipelineError::Config(format!(
                    "Cannot derive a document name from '{}'; pass --name",
                    input.display()
                ))
            })?;

            let mut builder = ConverterBuilder::new();
            if let Some(path) = config {
                builder = builder.with_config(ConverterConfig::from_json_file(path)?);
            }
            if let Some(root) = assets_root {
                builder = builder.with_assets_root(root);
            }
            if let Some(prefix) = src_prefix {
                builder = builder.with_src_prefix(prefix);
            }
            let converter = builder.build()?;

            log::info!("Converting {} as '{}'", input.display(), name);
            let conversion = converter.convert_source(&mut source, &name)?;
            emit(&conversion.to_json_pretty()?, output.as_deref())
        }
        Command::Fonts {
            store,
            names,
            output,
        } => {
            let converter = ConverterBuilder::new().with_font_dir(store).build()?;
            let fonts = converter.fetch_fonts(&names);
            log::info!("Found {} of {} fonts", fonts.len(), names.len());
            emit(&serde_json::to_string_pretty(&fonts)?, output.as_deref())
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
