use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bookdash_api::{CollectionLoader, DetailLoader};
use bookdash_core::{
    compute_stats, decade_distribution, edition_range_distribution, filter_books_now, AppConfig,
    EraFilter,
};
use bookdash_tui::app::App;

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "bookdash",
    about = "Terminal dashboard for Open Library programming books",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output in JSON format (for scripts).
    /// Also enabled by setting BOOKDASH_JSON=1.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the collection and print summary statistics and chart data.
    Stats,

    /// Fetch the collection and list it, optionally filtered.
    List {
        /// Case-insensitive substring matched against title or authors.
        #[arg(long, default_value = "")]
        query: String,
        /// One of: all, recent, classic, 2000s, 2010s, 2020s.
        #[arg(long, default_value = "all")]
        era: EraFilter,
    },

    /// Show the detail record for one work id (e.g. OL45883W).
    Book { id: String },
}

// ─── Entry point ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json || std::env::var("BOOKDASH_JSON").is_ok_and(|v| v == "1");

    if let Err(e) = run(cli.command, json).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(command: Option<Commands>, json: bool) -> Result<()> {
    let config = AppConfig::load()?;

    match command {
        None => run_tui_mode(config).await,
        Some(Commands::Stats) => {
            init_cli_tracing();
            cmd_stats(&config, json).await
        }
        Some(Commands::List { query, era }) => {
            init_cli_tracing();
            cmd_list(&config, &query, era, json).await
        }
        Some(Commands::Book { id }) => {
            init_cli_tracing();
            cmd_book(&config, &id, json).await
        }
    }
}

// ─── Tracing setup ──────────────────────────────────────────────────────────

fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

/// The TUI owns the terminal, so its tracing output goes to a log file.
fn init_tui_tracing() {
    let dir = AppConfig::log_dir();
    let _ = std::fs::create_dir_all(&dir);
    let Ok(file) = std::fs::File::create(dir.join("bookdash.log")) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

// ─── Commands ───────────────────────────────────────────────────────────────

async fn run_tui_mode(config: AppConfig) -> Result<()> {
    init_tui_tracing();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(config, tx);
    bookdash_tui::run_tui(&mut app, &mut rx).await
}

async fn cmd_stats(config: &AppConfig, json: bool) -> Result<()> {
    let books = CollectionLoader::new(&config.api).fetch().await?;
    let stats = compute_stats(&books);
    let decades = decade_distribution(&books);
    let ranges = edition_range_distribution(&books);

    if json {
        let out = serde_json::json!({
            "stats": stats,
            "decades": decades,
            "edition_ranges": ranges,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Total books:        {}", stats.total_books);
    println!("Avg editions:       {}", stats.avg_editions);
    println!("Oldest year:        {}", stats.oldest_year);
    println!("Newest year:        {}", stats.newest_year);
    println!("With known authors: {}", stats.books_with_authors);
    println!("Author credits:     {}", stats.total_authors);

    println!("\nBooks by decade:");
    for bucket in &decades {
        println!("  {:<6} {}", bucket.label(), bucket.count);
    }

    println!("\nEdition count distribution:");
    for bucket in &ranges {
        println!("  {:<7} {}", bucket.range, bucket.value);
    }
    Ok(())
}

async fn cmd_list(config: &AppConfig, query: &str, era: EraFilter, json: bool) -> Result<()> {
    let books = CollectionLoader::new(&config.api).fetch().await?;
    let filtered = filter_books_now(&books, query, era);

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    for book in &filtered {
        println!(
            "{:<12} {:>4}  {} by {} ({} ed.)",
            book.id,
            book.year_label(),
            book.title,
            book.authors_joined(),
            book.edition_count
        );
    }
    println!("\nShowing {} of {} books", filtered.len(), books.len());
    Ok(())
}

async fn cmd_book(config: &AppConfig, id: &str, json: bool) -> Result<()> {
    let detail = DetailLoader::new(&config.api).fetch(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    println!("{}", detail.title);
    println!("First published: {}", detail.first_publish_date);
    println!("Cover: {}", detail.cover_image_url);

    if !detail.authors.is_empty() {
        println!("\nAuthor(s):");
        for author in &detail.authors {
            println!("  {} (born {})", author.name, author.birth_date);
            println!("    {}", author.bio);
        }
    }

    println!("\nDescription:\n{}", detail.description);

    if !detail.subjects.is_empty() {
        println!("\nSubjects: {}", detail.subjects.join(", "));
    }
    for excerpt in &detail.excerpts {
        println!("\nExcerpt: {excerpt}");
    }
    if !detail.links.is_empty() {
        println!("\nExternal resources:");
        for link in &detail.links {
            println!("  {}: {}", link.title, link.url);
        }
    }
    Ok(())
}
