use core::time::Duration;
use std::{env::current_dir, path::Path, process::exit};

use clap::{Parser, Subcommand};
use color_eyre::{
    Section,
    config::HookBuilder,
    eyre::{self},
};
use dialoguer::{Input, Select, theme::ColorfulTheme};
use indicatif::{ProgressBar, ProgressStyle};
use keypoint::{serve, workspace::Workspace};
use keypoint_core::Category;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;

#[derive(Parser)]
#[command(about = "Privacy articles, in every language you publish", long_about = None)]
#[command(version, author)]
struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit machine-readable JSON output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new site workspace
    Create { name: Option<String> },

    #[command(subcommand)]
    Article(ArticleCommands),

    /// List the articles of a locale
    List {
        /// Locale to list, defaults to the site's default locale
        #[arg(short, long)]
        locale: Option<String>,
        /// Only articles of this level, e.g. `beginner`
        #[arg(long)]
        level: Option<String>,
    },

    /// Search titles, descriptions and categories
    Search {
        query: String,
        /// Locale to search, defaults to the site's default locale
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Write the static site to `build/`
    Generate,

    /// Serve the workspace locally
    Serve {
        /// Host address to bind (default 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Remove the build directory
    Clean,
}

#[derive(Subcommand)]
enum ArticleCommands {
    /// Add an article to every locale's catalog
    Create {
        title: String,
        /// Category label, e.g. `Beginner`
        #[arg(short, long)]
        category: Option<String>,
        /// Short summary shown on cards
        #[arg(short, long, default_value = "")]
        description: String,
    },
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    HookBuilder::default()
        .display_env_section(true)
        .issue_url("https://github.com/keypoint/keypoint/issues/new")
        .panic_section("It looks like Keypoint encountered a bug")
        .install()
        .expect("Failed to install color-eyre hook");

    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false);
    let filter_layer = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    if let Err(err) = entry(cli).await {
        error!("{:#}", err);
        exit(1);
    }
}

async fn entry(cli: Cli) -> eyre::Result<()> {
    let current_dir = current_dir()?;
    let emit_json = cli.json;

    match cli.command {
        Commands::Create { name } => {
            let name = match name {
                Some(name) => name,
                None => prompt_site_name()?,
            };
            Workspace::create(current_dir, name).await?;
            info!("Workspace created successfully");
        }
        Commands::Article(ArticleCommands::Create {
            title,
            category,
            description,
        }) => {
            let workspace = open_workspace(&current_dir).await?;
            let category = match category {
                Some(category) => category,
                None => prompt_category()?,
            };
            let slug = workspace
                .create_article(&title, &description, &category)
                .await
                .note("Failed to create article")?;
            info!("Article `{slug}` created successfully");
        }
        Commands::List { locale, level } => {
            let workspace = open_workspace(&current_dir).await?;
            catalog::list(&workspace, locale.as_deref(), level.as_deref(), emit_json).await?;
        }
        Commands::Search { query, locale } => {
            let workspace = open_workspace(&current_dir).await?;
            catalog::search(&workspace, &query, locale.as_deref(), emit_json).await?;
        }
        Commands::Generate => {
            let workspace = open_workspace(&current_dir).await?;
            long_task(
                "Generating site...",
                workspace.generate(workspace.build_dir()),
                "Site generated successfully",
            )
            .await?;
        }
        Commands::Serve { host, port } => {
            let workspace = open_workspace(&current_dir).await?;
            let (port, allow_fallback) = match port {
                Some(port) => (port, false),
                None => (2006, true),
            };
            serve::serve(workspace, host, port, allow_fallback).await?;
        }
        Commands::Clean => {
            let workspace = open_workspace(&current_dir).await?;
            workspace
                .clean()
                .await
                .note("Failed to remove build directory")?;
            info!("Build directory removed");
        }
    }
    Ok(())
}

async fn open_workspace(dir: &Path) -> eyre::Result<Workspace> {
    Workspace::open(dir).await.note("Can't open workspace")
}

pub async fn long_task<T, E>(
    loading_msg: &'static str,
    f: impl Future<Output = Result<T, E>>,
    complete_msg: &'static str,
) -> Result<T, E> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message(loading_msg);

    let result = f.await?;

    pb.finish_with_message(complete_msg);
    Ok(result)
}

fn prompt_site_name() -> eyre::Result<String> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Site name")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Site name cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(name.trim().to_string())
}

fn prompt_category() -> eyre::Result<String> {
    let named = Category::NAMED;
    let labels: Vec<&str> = named.iter().map(Category::label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(labels[selection].to_string())
}
