//! CLI entry point for folio

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::content::ListOptions;
use folio::Folio;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Frontmatter-driven blog content engine", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Directory name for the post (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,

        /// Mark the post as a draft
        #[arg(long)]
        draft: bool,
    },

    /// List posts or tags
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,

        /// Include drafts
        #[arg(long)]
        drafts: bool,
    },

    /// Show one post
    Show {
        slug: String,

        /// Allow showing a draft
        #[arg(long)]
        drafts: bool,
    },

    /// Generate the feed, sitemap and post listing
    #[command(alias = "g")]
    Generate,

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Show drafts (preview mode)
        #[arg(long)]
        drafts: bool,
    },

    /// Remove the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { title, slug, draft } => {
            let site = Folio::new(&base_dir)?;
            let path = folio::commands::new::create_post(&site, &title, slug.as_deref(), draft)?;
            println!("Created: {:?}", path);
        }

        Commands::List { r#type, drafts } => {
            let site = Folio::new(&base_dir)?;
            folio::commands::list::run(&site, &r#type, list_options(drafts))?;
        }

        Commands::Show { slug, drafts } => {
            let site = Folio::new(&base_dir)?;
            folio::commands::show::run(&site, &slug, list_options(drafts))?;
        }

        Commands::Generate => {
            let site = Folio::new(&base_dir)?;
            tracing::info!("Generating...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip, drafts } => {
            let site = Folio::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio::server::start(site, &ip, port, drafts).await?;
        }

        Commands::Clean => {
            let site = Folio::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn list_options(include_drafts: bool) -> ListOptions {
    ListOptions { include_drafts }
}
