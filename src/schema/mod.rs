//! HTTP contract schemas for the downstream banking services
//!
//! These types describe users, cards and accounts the way the services
//! expose them over HTTP, not how they are stored. JSON keys are camelCase.
//! Every field is required: a fixture that omits one fails validation
//! instead of receiving a zero value.

mod accounts;
mod cards;
mod ids;
mod users;

pub use accounts::{
    AccountSchema, AccountStatus, AccountType, GetAccountResponseSchema,
    GetAccountsQuerySchema, GetAccountsResponseSchema,
};
pub use cards::{
    CardPaymentSystem, CardSchema, CardStatus, CardType, GetCardResponseSchema,
    GetCardsQuerySchema, GetCardsResponseSchema,
};
pub use ids::Uuid4;
pub use users::{Email, GetUserResponseSchema, UserSchema};
