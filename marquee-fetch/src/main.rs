//! marquee-fetch - Fetch movie listings from the TMDB catalog
//!
//! Unix-style tool that prints catalog pages to stdout so they can be
//! piped into jq, grep, or anything else.

use clap::{Parser, Subcommand};
use libmarquee::logging::{self, LogFormat};
use libmarquee::{
    Config, Listing, MarqueeError, MovieDetail, MovieListPage, PosterSize, Result,
    SessionSnapshot, TmdbClient,
};

#[derive(Parser, Debug)]
#[command(name = "marquee-fetch")]
#[command(version)]
#[command(about = "Fetch movie listings from the TMDB catalog")]
#[command(long_about = "\
marquee-fetch - Fetch movie listings from the TMDB catalog

DESCRIPTION:
    marquee-fetch is a Unix-style tool for pulling pages of the TMDB movie
    catalog onto stdout. Use it to browse the popular listing, search by
    title, or dump one movie's full record, in plain text or JSON.

COMMANDS:
    popular     Fetch a page of the popular listing
    search      Search movies by title
    detail      Fetch the full record for one movie

USAGE EXAMPLES:
    # First page of the popular listing
    marquee-fetch popular

    # Later pages
    marquee-fetch popular --page 3

    # Search by title
    marquee-fetch search \"기생충\"
    marquee-fetch search \"기생충\" --page 2

    # Full record for one movie
    marquee-fetch detail 496243

    # JSON output for scripting
    marquee-fetch popular --format json | jq -r '.results[].title'
    marquee-fetch detail 496243 --format json | jq -r '.poster_url'

    # JSONL output (one movie per line)
    marquee-fetch popular --format jsonl | head -5

OUTPUT FORMATS:
    text  - Human-readable lines (default)
    json  - Pretty-printed JSON (complete data structure)
    jsonl - JSON lines, one object per line (streaming-friendly)

CONFIGURATION:
    Configuration file: ~/.config/marquee/config.toml

        [tmdb]
        api_key = \"...\"
        language = \"ko-KR\"

    Override with environment variables:
        MARQUEE_CONFIG - Path to config file
        TMDB_API_KEY   - API key (takes precedence over the file)

EXIT CODES:
    0 - Success (including empty results)
    1 - Fetch or configuration error
    2 - Rejected credentials
    3 - Invalid input (empty query, page out of range, etc.)

For more information, visit: https://github.com/marquee-movies/marquee
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, global = true, default_value = "text", value_name = "FORMAT")]
    #[arg(help = "Output format: text (human-readable), json (pretty), or jsonl (streaming)")]
    #[arg(value_parser = ["text", "json", "jsonl"])]
    format: String,

    /// Override the catalog response language
    #[arg(short, long, global = true, value_name = "TAG")]
    #[arg(help = "BCP 47 language tag for catalog responses (default: ko-KR)")]
    language: Option<String>,

    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    #[arg(help = "Enable verbose logging to stderr (useful for debugging)")]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a page of the popular listing
    Popular {
        /// Page number to fetch (starts at 1)
        #[arg(short, long, default_value = "1", value_name = "N")]
        page: u32,
    },

    /// Search movies by title
    Search {
        /// Title text to look for
        query: String,

        /// Page number to fetch (starts at 1)
        #[arg(short, long, default_value = "1", value_name = "N")]
        page: u32,
    },

    /// Fetch the full record for one movie
    Detail {
        /// Catalog id of the movie
        movie_id: u64,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        logging::init(LogFormat::Text, "debug");
    } else {
        logging::init_from_env();
    }

    tracing::debug!("marquee-fetch started with args: {:?}", cli);

    // Run the main logic and handle errors
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let mut config = Config::load()?;
    if let Some(language) = cli.language {
        config.tmdb.language = language;
    }

    let client = TmdbClient::from_config(&config)?;

    // Execute command
    match cli.command {
        Commands::Popular { page } => {
            let snapshot = listing_snapshot(Listing::Popular, page, None)?;
            cmd_list(&client, &snapshot, &cli.format).await
        }
        Commands::Search { query, page } => {
            let query = query.trim().to_string();
            if query.is_empty() {
                return Err(MarqueeError::InvalidInput(
                    "Search query cannot be empty".to_string(),
                ));
            }
            let snapshot = listing_snapshot(Listing::Search, page, Some(query))?;
            cmd_list(&client, &snapshot, &cli.format).await
        }
        Commands::Detail { movie_id } => cmd_detail(&client, movie_id, &cli.format).await,
    }
}

/// Describe the one-shot fetch a listing command asks for
fn listing_snapshot(listing: Listing, page: u32, query: Option<String>) -> Result<SessionSnapshot> {
    if page < 1 {
        return Err(MarqueeError::InvalidInput(format!(
            "Page must be 1 or higher, got {}",
            page
        )));
    }

    Ok(SessionSnapshot {
        listing,
        page,
        query,
    })
}

/// Fetch one listing page and print it
async fn cmd_list(client: &TmdbClient, snapshot: &SessionSnapshot, format: &str) -> Result<()> {
    let page = client.fetch_movie_list(snapshot).await?;

    let output = match format {
        "json" => format_list_json(&page),
        "jsonl" => format_list_jsonl(&page),
        _ => format_list_text(&page),
    };

    // Empty results - output nothing and exit 0
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

/// Fetch one movie's record and print it
async fn cmd_detail(client: &TmdbClient, movie_id: u64, format: &str) -> Result<()> {
    let detail = client.fetch_movie_detail(movie_id).await?;

    let output = match format {
        "json" => format_detail_json(&detail, client.image_base()),
        "jsonl" => format_detail_jsonl(&detail, client.image_base()),
        _ => format_detail_text(&detail, client.image_base()),
    };
    println!("{}", output);

    Ok(())
}

/// One movie per line: id, title, vote average
fn format_list_text(page: &MovieListPage) -> String {
    page.results
        .iter()
        .map(|movie| format!("{} | {} | ★ {}", movie.id, movie.title, movie.vote_display()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_list_json(page: &MovieListPage) -> String {
    serde_json::to_string_pretty(page).unwrap()
}

fn format_list_jsonl(page: &MovieListPage) -> String {
    page.results
        .iter()
        .map(|movie| serde_json::to_string(movie).unwrap())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Detail record with composed fields for scripting
fn detail_view(detail: &MovieDetail, image_base: &str) -> serde_json::Value {
    serde_json::json!({
        "id": detail.id,
        "title": detail.title,
        "genres": detail.genres,
        "vote_average": detail.vote_average,
        "overview": detail.overview_text(),
        "poster_url": detail.poster_url(image_base, PosterSize::W500),
    })
}

fn format_detail_json(detail: &MovieDetail, image_base: &str) -> String {
    serde_json::to_string_pretty(&detail_view(detail, image_base)).unwrap()
}

fn format_detail_jsonl(detail: &MovieDetail, image_base: &str) -> String {
    serde_json::to_string(&detail_view(detail, image_base)).unwrap()
}

fn format_detail_text(detail: &MovieDetail, image_base: &str) -> String {
    let mut lines = vec![format!("{} ({})", detail.title, detail.id)];

    if !detail.genres.is_empty() {
        lines.push(format!("장르: {}", detail.genres_line()));
    }
    lines.push(format!("평점: {}", detail.vote_display()));
    if let Some(url) = detail.poster_url(image_base, PosterSize::W500) {
        lines.push(format!("포스터: {}", url));
    }

    lines.push(String::new());
    lines.push(detail.overview_text().to_string());
    lines.join("\n")
}
