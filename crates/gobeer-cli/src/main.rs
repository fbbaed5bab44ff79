//! GoBeer CLI - Browse and review beers
//!
//! Simple CLI for interacting with the GoBeer API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use api::{CreateBeerRequest, CreateReviewRequest, GoBeerClient};
use config::Config;

#[derive(Parser)]
#[command(name = "gobeer")]
#[command(about = "GoBeer CLI - Browse and review beers", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL (overrides config)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Beer catalog
    Beers {
        #[command(subcommand)]
        action: BeerAction,
    },

    /// Beer reviews
    Reviews {
        #[command(subcommand)]
        action: ReviewAction,
    },

    /// Check that the API is reachable
    Health,

    /// Show or update configuration
    Config {
        /// Set the API base URL
        #[arg(long)]
        set_url: Option<String>,
        /// Set the default user ID for reviews
        #[arg(long)]
        set_user: Option<String>,
    },
}

#[derive(Subcommand)]
enum BeerAction {
    /// List all beers
    List,
    /// Add a beer
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        brewery: String,
        #[arg(long)]
        style: String,
        /// Alcohol by volume, in percent
        #[arg(long)]
        abv: f64,
        /// Short description
        #[arg(long = "desc")]
        short_desc: String,
    },
}

#[derive(Subcommand)]
enum ReviewAction {
    /// List reviews of a beer
    List {
        /// Beer ID
        beer_id: String,
    },
    /// Review a beer
    Add {
        /// Beer ID
        beer_id: String,
        /// Reviewing user (defaults to the configured user)
        #[arg(short, long)]
        user: Option<String>,
        #[arg(short, long)]
        score: f64,
        #[arg(short, long)]
        comment: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let base_url = cli.base_url.unwrap_or_else(|| config.base_url.clone());

    match cli.command {
        Commands::Beers { action } => cmd_beers(&base_url, action).await,
        Commands::Reviews { action } => cmd_reviews(&base_url, &config, action).await,
        Commands::Health => cmd_health(&base_url).await,
        Commands::Config { set_url, set_user } => cmd_config(config, set_url, set_user),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_beers(base_url: &str, action: BeerAction) -> Result<()> {
    let client = GoBeerClient::new(base_url);

    match action {
        BeerAction::List => {
            let beers = client.list_beers().await?;

            if beers.is_empty() {
                println!("No beers found.");
                println!("\n{}", "Add one with:".dimmed());
                println!("  gobeer beers add --name <NAME> --brewery <BREWERY> --style <STYLE> --abv <ABV> --desc <DESC>");
                return Ok(());
            }

            println!("{}", "Beers:".bold());
            for beer in beers {
                println!(
                    "  {} {} ({}) {} {:.1}% {}",
                    beer.id.to_string().dimmed(),
                    beer.name.cyan().bold(),
                    beer.brewery,
                    beer.style.dimmed(),
                    beer.abv,
                    format_score(beer.score)
                );
            }
        }

        BeerAction::Add {
            name,
            brewery,
            style,
            abv,
            short_desc,
        } => {
            let beer = client
                .add_beer(&CreateBeerRequest {
                    name: &name,
                    brewery: &brewery,
                    style: &style,
                    abv,
                    short_desc: &short_desc,
                })
                .await?;

            println!(
                "{} Beer '{}' added ({})",
                "✓".green(),
                beer.name,
                beer.id.to_string().dimmed()
            );
        }
    }

    Ok(())
}

async fn cmd_reviews(base_url: &str, config: &Config, action: ReviewAction) -> Result<()> {
    let client = GoBeerClient::new(base_url);

    match action {
        ReviewAction::List { beer_id } => {
            let reviews = client.list_reviews(&beer_id).await?;

            if reviews.is_empty() {
                println!("No reviews for {}", beer_id);
                return Ok(());
            }

            println!("{} reviews:", reviews.len().to_string().green());
            for review in reviews {
                println!(
                    "  {} {} {} {}",
                    review.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
                    review.user_id.cyan(),
                    format!("[{}]", review.score).yellow(),
                    truncate_string(&review.comment, 60)
                );
            }
        }

        ReviewAction::Add {
            beer_id,
            user,
            score,
            comment,
        } => {
            let user_id = user
                .or_else(|| config.user_id.clone())
                .context("No user specified. Use --user or 'gobeer config --set-user <ID>'.")?;

            let review = client
                .add_review(
                    &beer_id,
                    &CreateReviewRequest {
                        user_id: &user_id,
                        score,
                        comment: &comment,
                    },
                )
                .await?;

            println!(
                "{} Review recorded ({})",
                "✓".green(),
                review.id.to_string().dimmed()
            );
        }
    }

    Ok(())
}

async fn cmd_health(base_url: &str) -> Result<()> {
    let client = GoBeerClient::new(base_url);
    print!("Checking {}... ", base_url);

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
            Ok(())
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach GoBeer API at {}", base_url);
        }
    }
}

fn cmd_config(mut config: Config, set_url: Option<String>, set_user: Option<String>) -> Result<()> {
    if set_url.is_some() || set_user.is_some() {
        if let Some(url) = set_url {
            config.base_url = url;
        }
        if let Some(user) = set_user {
            config.user_id = Some(user);
        }
        config.save()?;
        println!("{} Configuration saved to {:?}", "✓".green(), Config::config_path()?);
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  User: {}",
        config.user_id.as_deref().unwrap_or("Not set").cyan()
    );

    Ok(())
}

fn format_score(score: f64) -> String {
    if score == 0.0 {
        "unrated".dimmed().to_string()
    } else {
        format!("★ {:.1}", score).yellow().to_string()
    }
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}
