use anyhow::{Context, Result};
use clap::Parser;
use media_hub::capability::{
    ConsoleSink, DefaultSource, FormField, JsonFileSource, LogNotifier, MapForm, PlaylistSource,
};
use media_hub::{PlaylistStore, StoreConfig};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "media-hub")]
#[command(about = "Run a Media Hub playlist session from the command line", long_about = None)]
struct Args {
    /// Load playlists from a JSON file instead of the built-in default
    #[arg(short = 's', long)]
    source: Option<String>,

    /// Create a playlist with this name (can be specified multiple times)
    #[arg(short = 'c', long = "create")]
    create: Vec<String>,

    /// Description for created playlists
    #[arg(long, default_value = "")]
    description: String,

    /// Make created playlists public
    #[arg(long)]
    public: bool,

    /// Delete the playlist with this ID (can be specified multiple times)
    #[arg(short = 'd', long = "delete")]
    delete: Vec<String>,

    /// Thumbnail shown for playlists without videos
    #[arg(long)]
    placeholder: Option<String>,

    /// Write the final playlists as JSON
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = StoreConfig::new();
    if let Some(ref url) = args.placeholder {
        config = config.with_placeholder(url.clone());
    }

    // Same session either way, only the playlist source differs
    match args.source {
        Some(ref source) => {
            let path = PathBuf::from(shellexpand::tilde(source).as_ref());
            run_session(&args, config, JsonFileSource::new(path))
        }
        None => {
            let source = DefaultSource::from_config(&config);
            run_session(&args, config, source)
        }
    }
}

fn run_session<S: PlaylistSource>(args: &Args, config: StoreConfig, source: S) -> Result<()> {
    let mut store = PlaylistStore::new(
        config,
        source,
        LogNotifier::new(),
        MapForm::new(),
        ConsoleSink::new(io::stdout()),
    );

    if let Err(e) = store.initialize() {
        log::warn!("Continuing with an empty playlist collection: {}", e);
    }

    for name in &args.create {
        let form = store.form_mut();
        form.set(FormField::Name, name.as_str());
        form.set(FormField::Description, args.description.as_str());
        form.set(FormField::IsPublic, args.public);

        match store.create_playlist() {
            Ok(id) => log::info!("Playlist id: {}", id),
            Err(e) => log::debug!("Skipped playlist: {}", e),
        }
    }

    for id in &args.delete {
        store.delete_playlist(id);
    }

    if let Some(ref output) = args.output {
        let path = PathBuf::from(shellexpand::tilde(output).as_ref());
        let file = File::create(&path)
            .with_context(|| format!("Failed to create snapshot file: {:?}", path))?;

        serde_json::to_writer_pretty(BufWriter::new(file), &store.snapshot())
            .with_context(|| format!("Failed to write snapshot: {:?}", path))?;

        log::info!("Wrote {} playlists to {:?}", store.len(), path);
    }

    log::info!("Session finished with {} playlists", store.len());
    Ok(())
}
