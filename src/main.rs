mod api;
mod controllers;
mod models;
mod view;

use anyhow::{bail, Result};
use api::{ClientConfig, HttpBookingApi};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use controllers::search::SearchError;
use controllers::{CartController, ClearOutcome, ConfirmPrompt, LoadingIndicator, SearchController};
use models::SearchCriteria;
use std::io::{self, Write};
use tracing::{info, warn, Level};

#[derive(Parser)]
#[command(name = "stayfinder", about = "Hotel booking storefront client")]
struct Cli {
    /// Base URL of the booking backend
    #[arg(
        long,
        global = true,
        env = "BOOKING_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for available hotel offers
    Search {
        /// City to search in
        #[arg(long)]
        city: String,
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        checkin: NaiveDate,
        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        checkout: NaiveDate,
        /// Number of guests
        #[arg(long, default_value_t = 1)]
        guests: u32,
        /// Add result number N to the cart after searching
        #[arg(long, value_name = "N")]
        add: Option<usize>,
    },
    /// Show and manage the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// List cart contents (the default)
    List,
    /// Remove one item by its id
    Remove { id: i64 },
    /// Clear the whole cart
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Checkout (not implemented)
    Checkout,
}

/// Prints a status line while a search is in flight
struct CliLoading;

impl LoadingIndicator for CliLoading {
    fn set_busy(&self, busy: bool) {
        if busy {
            info!("Searching hotels...");
        }
    }
}

/// Blocking y/N prompt on stdin
struct StdinConfirm;

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&self, question: &str) -> bool {
        print!("{} [y/N] ", question);
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Answers yes without asking, for `cart clear --yes`
struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&self, _question: &str) -> bool {
        true
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    let api = HttpBookingApi::new(&ClientConfig {
        base_url: cli.api_url.clone(),
        timeout_secs: 30,
    })?;

    match cli.command {
        Command::Search {
            city,
            checkin,
            checkout,
            guests,
            add,
        } => {
            let criteria = SearchCriteria {
                city,
                checkin,
                checkout,
                guests,
            };
            run_search(&api, &criteria, add).await
        }
        Command::Cart { action } => run_cart(&api, action.unwrap_or(CartAction::List)).await,
    }
}

async fn run_search(
    api: &HttpBookingApi,
    criteria: &SearchCriteria,
    add: Option<usize>,
) -> Result<()> {
    let loading = CliLoading;
    let confirm = StdinConfirm;
    let searcher = SearchController::new(api, &loading, Utc::now().date_naive());
    let cart = CartController::new(api, &confirm);

    // Page-load contract: refresh the cart badge first
    match cart.count().await {
        Ok(count) => info!("Cart: {} item(s)", count),
        Err(e) => warn!("Could not refresh cart count: {}", e),
    }

    let offers = match searcher.search(criteria).await {
        Ok(offers) => offers,
        Err(SearchError::Validation(e)) => bail!("{}", e),
        Err(SearchError::Api(e)) => {
            warn!("Search failed: {}", e);
            bail!("Error searching hotels. Please try again.");
        }
    };

    print!("{}", view::search_view(&offers));

    if let Some(n) = add {
        let Some(offer) = offers.get(n.wrapping_sub(1)) else {
            bail!("No search result number {} to add", n);
        };
        match searcher.add_to_cart(offer, criteria).await {
            Ok(_) => {
                println!("Added to cart!");
                match cart.count().await {
                    Ok(count) => println!("Cart: {} item(s)", count),
                    Err(e) => warn!("Could not refresh cart count: {}", e),
                }
            }
            Err(e) => {
                warn!("Add to cart failed: {}", e);
                bail!("Error adding to cart");
            }
        }
    }

    Ok(())
}

async fn run_cart(api: &HttpBookingApi, action: CartAction) -> Result<()> {
    let confirm = StdinConfirm;
    let always = AlwaysConfirm;

    match action {
        CartAction::List => {
            let controller = CartController::new(api, &confirm);
            match controller.load().await {
                Ok(view) => print!("{}", view),
                Err(e) => {
                    warn!("Cart load failed: {}", e);
                    bail!("Error loading cart");
                }
            }
        }
        CartAction::Remove { id } => {
            let controller = CartController::new(api, &confirm);
            match controller.remove(id).await {
                Ok(view) => {
                    println!("Removed item {}", id);
                    print!("{}", view);
                }
                Err(e) => {
                    warn!("Remove failed: {}", e);
                    bail!("Error removing item from cart");
                }
            }
        }
        CartAction::Clear { yes } => {
            let controller = if yes {
                CartController::new(api, &always)
            } else {
                CartController::new(api, &confirm)
            };
            match controller.clear().await {
                Ok(ClearOutcome::Declined) => println!("Cart unchanged."),
                Ok(ClearOutcome::Cleared(view)) => {
                    println!("Cart cleared.");
                    print!("{}", view);
                }
                Err(e) => {
                    warn!("Clear failed: {}", e);
                    bail!("Error clearing cart");
                }
            }
        }
        CartAction::Checkout => {
            let controller = CartController::new(api, &confirm);
            println!("{}", controller.checkout());
        }
    }

    Ok(())
}
