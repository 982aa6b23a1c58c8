use clap::{Parser, Subcommand};
use folio::{Config, ContentDir, Ssg};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, env = "FOLIO_CONFIG", default_value = folio::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static site
    Build,

    /// List article slugs, newest first
    List {
        /// Maximum number of slugs (0 lists all)
        #[arg(long)]
        limit: Option<usize>,

        /// Print a JSON array instead of one slug per line
        #[arg(long)]
        json: bool,
    },

    /// Print the summary of one article
    Summary {
        /// Article slug
        slug: String,
    },

    /// Print the routes to prerender
    Routes,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Build => {
            let report = Ssg::new(config).build()?;
            println!(
                "Built {} articles ({} routes)",
                report.articles,
                report.routes.len()
            );
        }
        Commands::List { limit, json } => {
            let slugs = ContentDir::new(config.articles_dir()).slugs(limit)?;
            if json {
                println!("{}", serde_json::to_string(&slugs)?);
            } else {
                for slug in slugs {
                    println!("{}", slug);
                }
            }
        }
        Commands::Summary { slug } => {
            let article = ContentDir::new(config.articles_dir()).load(&slug)?;
            println!("{}", article.summary(config.summary_length));
        }
        Commands::Routes => {
            for route in ContentDir::new(config.articles_dir()).prerender_routes()? {
                println!("{}", route);
            }
        }
    }

    Ok(())
}
