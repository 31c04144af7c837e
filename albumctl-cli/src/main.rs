//! albumctl CLI - query and extend the album table of the recordings database
//!
//! Credentials come from DBUSER and DBPASS (optionally via a .env file).
//! Running without a subcommand performs the demonstration sequence:
//! connect, albums by "John Coltrane", album #2, insert a new album.

use std::time::Duration;

use albumctl_core::config::{DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PORT};
use albumctl_core::{connect, run_demo, AlbumRepo, AlbumStore, DbConfig, MySqlPool, NewAlbum};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

mod env;
mod output;
mod tracing_setup;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "albumctl",
    author,
    version,
    about = "Look up and add albums in the recordings MySQL database"
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Database server host
    #[arg(long, env = "DBHOST", default_value = DEFAULT_HOST, global = true)]
    host: String,

    /// Database server port
    #[arg(long, env = "DBPORT", default_value_t = DEFAULT_PORT, global = true)]
    port: u16,

    /// Database name
    #[arg(long, env = "DBNAME", default_value = DEFAULT_DATABASE, global = true)]
    database: String,

    /// Seconds to wait for the server before giving up
    #[arg(long, value_name = "SECS", default_value_t = 30, global = true)]
    connect_timeout: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the demonstration sequence (default)
    Demo,
    /// Connect and verify the server answers
    Ping,
    /// List albums by an artist
    ByArtist {
        /// Artist name, matched exactly
        name: String,
    },
    /// Show one album by its ID
    Get {
        /// Album ID
        id: i64,
    },
    /// Add an album and print its new ID
    Add {
        /// Album title
        #[arg(long)]
        title: String,
        /// Artist name
        #[arg(long)]
        artist: String,
        /// Price
        #[arg(long)]
        price: f64,
    },
}

impl Cli {
    /// Credentials from the environment plus network overrides from flags.
    fn db_config(&self) -> Result<DbConfig> {
        let config = DbConfig::from_env()
            .context("database credentials are read from DBUSER and DBPASS")?
            .with_host(&self.host)
            .with_port(self.port)
            .with_database(&self.database)
            .with_connect_timeout(Duration::from_secs(self.connect_timeout));
        config.validate().context("invalid database configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let loaded_from = env::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    for path in &loaded_from {
        debug!("Loaded .env from {}", path.display());
    }

    let format = OutputFormat::from_flag(cli.json);
    let config = cli.db_config()?;
    let pool = connect(&config).await?;

    let result = run(cli.command, format, &config, &pool).await;
    pool.close().await;
    result
}

async fn run(
    command: Option<Commands>,
    format: OutputFormat,
    config: &DbConfig,
    pool: &MySqlPool,
) -> Result<()> {
    let repo = AlbumRepo::new(pool);

    match command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            if format == OutputFormat::Text {
                output::connected(format, &config.redacted_url())?;
            }
            let report = run_demo(&repo).await?;
            output::demo(format, &report)
        }
        Commands::Ping => output::connected(format, &config.redacted_url()),
        Commands::ByArtist { name } => {
            let albums = repo.albums_by_artist(&name).await?;
            output::albums(format, &albums)
        }
        Commands::Get { id } => {
            let album = repo.album_by_id(id).await?;
            output::album(format, &album)
        }
        Commands::Add {
            title,
            artist,
            price,
        } => {
            let id = repo.add_album(&NewAlbum::new(title, artist, price)).await?;
            output::added(format, id)
        }
    }
}
