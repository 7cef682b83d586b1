use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hotel as embedded in a search offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub stars: u32,
    #[serde(default)]
    pub city: Option<String>,
}

/// Room type as embedded in a search offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: i64,
    pub name: String,
    pub capacity: u32,
}

/// Rate plan as embedded in a search offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatePlan {
    pub id: i64,
    pub title: String,
    pub meal: String,
    pub refundable: bool,
}

/// One bookable offer returned by the search endpoint.
/// Immutable once received; lives for a single render cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub hotel: Hotel,
    pub room_type: RoomType,
    pub rate_plan: RatePlan,
    pub nights: u32,
    /// Total stay price in minor currency units
    pub total_price: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "UZS".to_string()
}

/// Search criteria collected from the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub city: String,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub guests: u32,
}

/// Payload for the cart-add endpoint: the join of an offer with the
/// criteria that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemRequest {
    pub hotel_id: i64,
    pub room_type_id: i64,
    pub rate_id: i64,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub guests: u32,
}

impl CartItemRequest {
    /// Bind an offer to the search criteria that produced it
    pub fn from_offer(offer: &Offer, criteria: &SearchCriteria) -> Self {
        Self {
            hotel_id: offer.hotel.id,
            room_type_id: offer.room_type.id,
            rate_id: offer.rate_plan.id,
            checkin: criteria.checkin,
            checkout: criteria.checkout,
            guests: criteria.guests,
        }
    }
}

/// Cart line item as returned by the backend. The client only ever holds
/// a read-only copy for rendering; all mutations happen server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub hotel_id: i64,
    pub room_type_id: i64,
    pub rate_id: i64,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub guests: u32,
}
