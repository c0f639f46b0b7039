use clap::Parser;
use icon_namer::config::{self, Backend, Config};
use icon_namer::output;
use icon_namer::process::{self, RunOptions};
use icon_namer::provider::{DeepAiProvider, Describe, OllamaProvider};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "icon-namer")]
#[command(about = "Batch-rename icon files from AI image descriptions")]
#[command(long_about = "\
Batch-rename icon files from AI image descriptions

Every .png/.jpg/.jpeg in the folder is described by the configured backend,
the description becomes a safe filename stem, and the pixel size picks the
density suffix (24px base: @2x up to 48px, @3x above).

  IMG_0231.png (48x48, \"a gear wheel\")  →  ic_gear_wheel@2x.png

Targets that already exist are never overwritten; those entries are skipped
and reported, so re-running a partial batch is safe.

Configuration lives in icon-namer.toml (in the target folder or the working
directory). The DEEPAI_API_KEY environment variable overrides the file's
API key.")]
#[command(version)]
struct Cli {
    /// Folder containing the icons to rename
    #[arg(default_value = ".")]
    path: String,

    /// Recurse into subfolders (files are renamed in place)
    #[arg(short, long)]
    recursive: bool,

    /// Show the planned renames without executing them
    #[arg(short, long)]
    preview: bool,

    /// Config file (default: icon-namer.toml in the folder or cwd)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured pause between description calls
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Drag-and-drop on some terminals wraps the path in quotes.
    let path = cli.path.trim();
    let path = path
        .strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path);
    let folder = PathBuf::from(path);

    let mut config = config::load_config(&folder, cli.config.as_deref())?;
    if let Some(delay_ms) = cli.delay_ms {
        config.provider.delay_ms = delay_ms;
    }
    config.validate()?;

    let provider = build_provider(&config);

    let options = RunOptions {
        folder,
        recursive: cli.recursive,
        preview: cli.preview,
    };

    if options.preview {
        println!(
            "==> Preview: planning renames in {} via {}",
            options.folder.display(),
            provider.name()
        );
    } else {
        println!(
            "==> Renaming icons in {} via {}",
            options.folder.display(),
            provider.name()
        );
    }

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_run_event(&event);
        }
    });

    let result = process::run(&options, &config, provider.as_ref(), Some(tx));
    printer.join().unwrap();
    let report = result?;

    output::print_run_summary(&report);
    Ok(())
}

fn build_provider(config: &Config) -> Box<dyn Describe> {
    let provider = &config.provider;
    match provider.backend {
        Backend::DeepAi => Box::new(DeepAiProvider::new(
            provider.api_key.clone().unwrap_or_default(),
            provider.endpoint.clone(),
        )),
        Backend::Ollama => Box::new(OllamaProvider::new(
            provider.endpoint.clone(),
            provider.model.clone(),
        )),
    }
}
