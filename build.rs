//! Build script for generating gRPC contracts from Protocol Buffer definitions.

const PROTOS: &[&str] = &[
    "proto/bank/users/v1/users.proto",
    "proto/bank/cards/v1/cards.proto",
    "proto/bank/accounts/v1/accounts.proto",
];

/// Nested response messages are required in fixtures, so `Option` fields
/// must not silently default to `None`.
const REQUIRED_FIELDS: &[&str] = &[
    ".bank.users.v1.GetUserResponse.user",
    ".bank.cards.v1.GetCardResponse.card",
    ".bank.accounts.v1.GetAccountResponse.account",
];

const ENUM_FIELDS: &[(&str, &str)] = &[
    (".bank.cards.v1.Card.type", "card_type"),
    (".bank.cards.v1.Card.status", "card_status"),
    (".bank.cards.v1.Card.payment_system", "card_payment_system"),
    (".bank.accounts.v1.Account.type", "account_type"),
    (".bank.accounts.v1.Account.status", "account_status"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for proto in PROTOS {
        println!("cargo:rerun-if-changed={proto}");
    }

    if std::env::var_os("PROTOC").is_none() {
        std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }

    let mut builder = tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .message_attribute(
            ".",
            "#[derive(serde::Serialize, serde::Deserialize)] #[serde(rename_all = \"camelCase\", deny_unknown_fields)]",
        );

    for field in REQUIRED_FIELDS {
        builder = builder.field_attribute(
            field,
            "#[serde(deserialize_with = \"crate::contracts::required\")]",
        );
    }
    for (field, module) in ENUM_FIELDS {
        builder = builder.field_attribute(
            field,
            format!("#[serde(with = \"crate::contracts::enum_name::{module}\")]"),
        );
    }

    builder.compile_protos(PROTOS, &["proto"])?;

    Ok(())
}
