//! Card schemas

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::Uuid4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Virtual,
    Physical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Active,
    Frozen,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardPaymentSystem {
    Visa,
    Mastercard,
}

/// A bank card as seen through the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSchema {
    pub id: Uuid4,
    pub pin: String,
    pub cvv: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub status: CardStatus,
    pub account_id: Uuid4,
    pub card_number: String,
    pub card_holder: String,
    pub expiry_date: NaiveDate,
    pub payment_system: CardPaymentSystem,
}

/// `GET /api/v1/cards/{card_id}` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetCardResponseSchema {
    pub card: CardSchema,
}

/// `GET /api/v1/cards` query parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCardsQuerySchema {
    pub account_id: Uuid4,
}

/// `GET /api/v1/cards` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetCardsResponseSchema {
    pub cards: Vec<CardSchema>,
}
