//! Standalone `reviewbattle` CLI binary.
//!
//! Thin command-line front end over the ReviewBattle API client:
//!
//! ```text
//! reviewbattle login --username jane --password s3cret123
//! reviewbattle whoami
//! reviewbattle movies --search "the"
//! reviewbattle leaderboard --limit 10
//! reviewbattle watchlist --add 42
//! reviewbattle logout
//! ```
//!
//! The session token is kept in a single file (REVIEWBATTLE_TOKEN_FILE or
//! ~/.reviewbattle/access_token); every authenticated command reads it
//! from there.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use reviewbattle_client::auth;
use reviewbattle_client::configuration::get_configuration;
use reviewbattle_client::connectors::{
    ReviewServiceClient, ReviewServiceConfig, ReviewServiceConnector,
};
use reviewbattle_client::helpers::{collapse_whitespace, friendly_author_name, initials};
use reviewbattle_client::session::{FileSessionStore, SessionStore};
use reviewbattle_client::telemetry::{get_subscriber, init_subscriber};

#[derive(Parser, Debug)]
#[command(
    name = "reviewbattle",
    version,
    about = "Browse movies, reviews and battles from the terminal"
)]
struct Cli {
    /// API base URL (default: from configuration / REVIEWBATTLE_API_URL)
    #[arg(long, env = "REVIEWBATTLE_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Authenticate and store the session token
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the stored session token
    Logout,
    /// Show the identity encoded in the stored token
    Whoami,
    /// List the movie catalog, optionally filtered by title
    Movies {
        /// Title search term
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one movie with its reviews
    Movie {
        id: i64,
    },
    /// List all published reviews
    Reviews,
    /// Top reviews by votes
    Leaderboard {
        #[arg(long, default_value_t = 15)]
        limit: u32,
    },
    /// Current achievement holders
    Achievements,
    /// Show the watchlist, optionally adding a movie first
    Watchlist {
        /// Movie id to add before listing
        #[arg(long, value_name = "MOVIE_ID")]
        add: Option<String>,
    },
    /// The signed-in user's own reviews
    Home,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("reviewbattle".into(), "warn".into());
    init_subscriber(subscriber);

    let cli = Cli::parse();
    let settings = get_configuration().context("failed to load configuration")?;

    let mut api_settings = settings.api;
    if let Some(api_url) = cli.api_url {
        api_settings.base_url = api_url;
    }

    let session = Arc::new(FileSessionStore::new(settings.session.token_file));
    let client = ReviewServiceClient::new(ReviewServiceConfig::from(api_settings), session.clone());

    match cli.command {
        Commands::Login { username, password } => {
            let login = client.login(&username, &password).await?;
            println!("Signed in ({} token stored).", login.token_type);
        }
        Commands::Logout => {
            client.sign_out()?;
            println!("Signed out.");
        }
        Commands::Whoami => match session.access_token() {
            None => println!("Not signed in."),
            Some(token) => match auth::decode_claims(&token) {
                None => println!("Stored token is unreadable; try logging in again."),
                Some(claims) => {
                    let user = claims.user_id().unwrap_or_else(|| "<no id>".to_string());
                    let role = claims.role.clone().unwrap_or_else(|| "user".to_string());
                    let state = if claims.is_expired() { "expired" } else { "valid" };
                    println!("{} ({}) — token {}", user, role, state);
                }
            },
        },
        Commands::Movies { search } => {
            let movies = match search {
                Some(term) => client.search_movies(&term).await?,
                None => client.list_movies().await?,
            };
            for movie in movies {
                println!("{:>4}  {}  [{}]", movie.id, movie.title, movie.genre);
            }
        }
        Commands::Movie { id } => {
            let movie = client.get_movie(id).await?;
            println!("{} ({})", movie.title, movie.release);
            println!("{}", collapse_whitespace(&movie.description));
        }
        Commands::Reviews => {
            for review in client.list_reviews().await? {
                print_review(&review);
            }
        }
        Commands::Leaderboard { limit } => {
            for (rank, review) in client.leaderboard(limit).await?.iter().enumerate() {
                println!(
                    "{:>2}. {} — {} ({} votes)",
                    rank + 1,
                    review.review_title,
                    friendly_author_name(&review.author_id),
                    review.votes
                );
            }
        }
        Commands::Achievements => {
            for winner in client.achievements().await? {
                println!("{}: {} ({})", winner.label, winner.username, winner.value);
            }
        }
        Commands::Watchlist { add } => {
            let list = match add {
                Some(movie_id) => client.add_to_watchlist(&movie_id).await?,
                None => client.watchlist().await?,
            };
            println!("Watchlist #{} — {} movie(s)", list.id, list.movie_ids.len());
            for movie_id in list.movie_ids {
                println!("  - {}", movie_id);
            }
        }
        Commands::Home => {
            for review in client.home().await? {
                print_review(&review);
            }
        }
    }

    Ok(())
}

fn print_review(review: &reviewbattle_client::connectors::Review) {
    println!(
        "[{}] {} — {} ({:.1}/5, {} votes)",
        initials(&review.author_id),
        review.review_title,
        friendly_author_name(&review.author_id),
        review.rating,
        review.votes
    );
    println!("     {}", collapse_whitespace(&review.review_body));
}
