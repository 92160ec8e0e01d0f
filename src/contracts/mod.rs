//! gRPC contracts generated from `proto/`.
//!
//! Generated messages also derive serde so fixtures can be written in the
//! protobuf JSON mapping: camelCase keys and enum values by symbolic name.
//! Unlike the stock mapping, every field must be present and `*_UNSPECIFIED`
//! enum values are rejected.

use serde::{Deserialize, Deserializer};

pub mod users {
    tonic::include_proto!("bank.users.v1");
}

pub mod cards {
    tonic::include_proto!("bank.cards.v1");
}

pub mod accounts {
    tonic::include_proto!("bank.accounts.v1");
}

/// Deserialize a message field that must be present and non-null.
pub fn required<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

macro_rules! enum_name_serde {
    ($($module:ident => $enum:ty),* $(,)?) => {
        $(
            pub mod $module {
                use serde::{de, Deserialize, Deserializer, Serializer};

                pub fn serialize<S: Serializer>(value: &i32, serializer: S) -> Result<S::Ok, S::Error> {
                    match <$enum>::try_from(*value) {
                        Ok(known) => serializer.serialize_str(known.as_str_name()),
                        Err(_) => serializer.serialize_i32(*value),
                    }
                }

                pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
                    let name = String::deserialize(deserializer)?;
                    match <$enum>::from_str_name(&name) {
                        Some(known) if known as i32 != 0 => Ok(known as i32),
                        _ => Err(de::Error::custom(format!(
                            "'{}' is not a valid {} value",
                            name,
                            stringify!($module)
                        ))),
                    }
                }
            }
        )*
    };
}

/// Serde adapters mapping protobuf enum fields to their symbolic names.
pub mod enum_name {
    enum_name_serde! {
        card_type => crate::contracts::cards::CardType,
        card_status => crate::contracts::cards::CardStatus,
        card_payment_system => crate::contracts::cards::CardPaymentSystem,
        account_type => crate::contracts::accounts::AccountType,
        account_status => crate::contracts::accounts::AccountStatus,
    }
}
