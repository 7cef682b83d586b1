//! Pure rendering: payload data in, structured view descriptions out.
//! No I/O happens here, so everything is unit-testable without a
//! network or a terminal.

use crate::models::{CartItem, Offer};
use chrono::NaiveDate;
use std::fmt;

/// Stand-in unit price used for the cart estimate. Cart read payloads
/// carry no pricing, so the summary total is an approximation only and
/// is labeled as such wherever it is shown.
pub const PLACEHOLDER_UNIT_PRICE: i64 = 100_000;

/// Format a minor-unit amount with uz-UZ digit grouping: three-digit
/// groups separated by NBSP, no fractional digits.
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    let first = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == first % 3 {
            grouped.push('\u{a0}');
        }
        grouped.push(c);
    }
    grouped
}

/// One rendered offer. The index is the add-to-cart handle bound to
/// this card.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferCard {
    pub index: usize,
    pub hotel_name: String,
    pub stars: String,
    pub room: String,
    pub rate: String,
    pub refundable: bool,
    pub nights: u32,
    pub price: String,
}

/// Rendered search results
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    NoResults,
    Offers(Vec<OfferCard>),
}

pub fn search_view(offers: &[Offer]) -> SearchView {
    if offers.is_empty() {
        return SearchView::NoResults;
    }
    let cards = offers
        .iter()
        .enumerate()
        .map(|(i, offer)| OfferCard {
            index: i + 1,
            hotel_name: offer.hotel.name.clone(),
            // No range validation, the star count is taken as given
            stars: "⭐".repeat(offer.hotel.stars as usize),
            room: format!("{} ({} guests)", offer.room_type.name, offer.room_type.capacity),
            rate: format!("{} - {}", offer.rate_plan.title, offer.rate_plan.meal),
            refundable: offer.rate_plan.refundable,
            nights: offer.nights,
            price: format!("{} {}", format_price(offer.total_price), offer.currency),
        })
        .collect();
    SearchView::Offers(cards)
}

impl fmt::Display for SearchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchView::NoResults => {
                writeln!(f, "No hotels found. Try different search criteria.")
            }
            SearchView::Offers(cards) => {
                for card in cards {
                    writeln!(f, "{}. {}", card.index, card.hotel_name)?;
                    if !card.stars.is_empty() {
                        writeln!(f, "   {}", card.stars)?;
                    }
                    writeln!(f, "   Room: {}", card.room)?;
                    writeln!(f, "   Rate: {}", card.rate)?;
                    writeln!(
                        f,
                        "   Refundable: {}",
                        if card.refundable { "Yes" } else { "No" }
                    )?;
                    writeln!(f, "   Nights: {}", card.nights)?;
                    writeln!(f, "   Price: {}", card.price)?;
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}

/// One rendered cart line. The id is the remove handle for the row.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub id: i64,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub guests: u32,
}

/// Cart totals. `approx_total` is count x placeholder rate, never a
/// pricing source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub total_items: usize,
    pub approx_total: i64,
}

/// Rendered cart. The summary is computed even for an empty cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub summary: CartSummary,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn cart_view(items: &[CartItem]) -> CartView {
    let rows = items
        .iter()
        .map(|item| CartRow {
            id: item.id,
            checkin: item.checkin,
            checkout: item.checkout,
            guests: item.guests,
        })
        .collect();
    CartView {
        rows,
        summary: CartSummary {
            total_items: items.len(),
            approx_total: items.len() as i64 * PLACEHOLDER_UNIT_PRICE,
        },
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "Your cart is empty.")?;
            writeln!(f, "Run `stayfinder search` to find a hotel.")?;
        } else {
            for row in &self.rows {
                writeln!(f, "[{}] Hotel booking", row.id)?;
                writeln!(f, "    Check-in:  {}", row.checkin)?;
                writeln!(f, "    Check-out: {}", row.checkout)?;
                writeln!(f, "    Guests:    {}", row.guests)?;
            }
        }
        writeln!(f, "Items: {}", self.summary.total_items)?;
        writeln!(
            f,
            "Estimated total: {} UZS (estimate only, actual prices come from offers)",
            format_price(self.summary.approx_total)
        )
    }
}
