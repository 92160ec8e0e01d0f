//! gRPC mock service tests
//!
//! Service implementations are called directly with metadata-carrying
//! requests; one test goes over a real socket with the generated clients.

mod common;

use bankmock::api::grpc::{grpc_router, AccountsMockService, CardsMockService, UsersMockService};
use bankmock::api::ServiceLoaders;
use bankmock::context::{build_grpc_metadata, RequestContext};
use bankmock::contracts::accounts::accounts_service_server::AccountsService;
use bankmock::contracts::accounts::{AccountStatus, AccountType, GetAccountRequest, GetAccountsRequest};
use bankmock::contracts::cards::cards_service_client::CardsServiceClient;
use bankmock::contracts::cards::cards_service_server::CardsService;
use bankmock::contracts::cards::{CardPaymentSystem, GetCardRequest, GetCardsRequest};
use bankmock::contracts::users::users_service_client::UsersServiceClient;
use bankmock::contracts::users::users_service_server::UsersService;
use bankmock::contracts::users::{GetUserRequest, GetUserResponse};
use bankmock::scenario::{Scenario, SCENARIO_KEY};

use common::{fixture_json, grpc_fixtures_root, grpc_loaders, write_fixture, CREDIT, DEBIT};
use prost::Message;
use tempfile::tempdir;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::Code;

fn users() -> UsersMockService {
    UsersMockService::new(grpc_loaders().users)
}

fn cards() -> CardsMockService {
    CardsMockService::new(grpc_loaders().cards)
}

fn accounts() -> AccountsMockService {
    AccountsMockService::new(grpc_loaders().accounts)
}

fn with_scenario<T>(message: T, scenario: &str) -> tonic::Request<T> {
    let mut request = tonic::Request::new(message);
    request
        .metadata_mut()
        .insert(SCENARIO_KEY, scenario.parse().unwrap());
    request
}

fn user_request(id: &str) -> GetUserRequest {
    GetUserRequest { id: id.to_string() }
}

#[tokio::test]
async fn test_get_user_returns_exact_fixture() {
    let response = users()
        .get_user(with_scenario(user_request("u-1"), "user_with_active_debit_card_account"))
        .await
        .expect("GetUser should succeed")
        .into_inner();

    let expected = fixture_json(
        &grpc_fixtures_root(),
        "users/GetUser/user_with_active_debit_card_account.json",
    );
    assert_eq!(serde_json::to_value(&response).unwrap(), expected);

    let user = response.user.expect("user is present");
    assert_eq!(user.email, "anna.petrova@bank.test");
    assert_eq!(user.phone_number, "+79001234567");
}

#[tokio::test]
async fn test_every_rpc_serves_its_fixture_for_every_scenario() {
    let root = grpc_fixtures_root();
    for scenario in Scenario::ALL {
        let s = scenario.as_str();

        let got = users().get_user(with_scenario(user_request("x"), s)).await.unwrap();
        assert_eq!(
            serde_json::to_value(got.get_ref()).unwrap(),
            fixture_json(&root, &format!("users/GetUser/{s}.json"))
        );

        let got = cards()
            .get_card(with_scenario(GetCardRequest { id: "x".into() }, s))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(got.get_ref()).unwrap(),
            fixture_json(&root, &format!("cards/GetCard/{s}.json"))
        );

        let got = cards()
            .get_cards(with_scenario(GetCardsRequest { account_id: "x".into() }, s))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(got.get_ref()).unwrap(),
            fixture_json(&root, &format!("cards/GetCards/{s}.json"))
        );

        let got = accounts()
            .get_account(with_scenario(GetAccountRequest { id: "x".into() }, s))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(got.get_ref()).unwrap(),
            fixture_json(&root, &format!("accounts/GetAccount/{s}.json"))
        );

        let got = accounts()
            .get_accounts(with_scenario(GetAccountsRequest { user_id: "x".into() }, s))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(got.get_ref()).unwrap(),
            fixture_json(&root, &format!("accounts/GetAccounts/{s}.json"))
        );
    }
}

#[tokio::test]
async fn test_enum_fields_decode_to_protobuf_values() {
    let account = accounts()
        .get_account(with_scenario(GetAccountRequest { id: "x".into() }, CREDIT.as_str()))
        .await
        .unwrap()
        .into_inner()
        .account
        .unwrap();
    assert_eq!(account.r#type(), AccountType::CreditCard);
    assert_eq!(account.status(), AccountStatus::Active);

    let cards = cards()
        .get_cards(with_scenario(GetCardsRequest { account_id: "x".into() }, CREDIT.as_str()))
        .await
        .unwrap()
        .into_inner()
        .cards;
    assert!(!cards.is_empty());
    assert!(cards
        .iter()
        .all(|card| card.payment_system() == CardPaymentSystem::Mastercard));
}

#[tokio::test]
async fn test_parameters_do_not_affect_response() {
    for scenario in Scenario::ALL {
        let a = users()
            .get_user(with_scenario(user_request("first"), scenario.as_str()))
            .await
            .unwrap()
            .into_inner();
        let b = users()
            .get_user(with_scenario(user_request("second"), scenario.as_str()))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(a.encode_to_vec(), b.encode_to_vec());

        let a = cards()
            .get_cards(with_scenario(GetCardsRequest { account_id: "a".into() }, scenario.as_str()))
            .await
            .unwrap()
            .into_inner();
        let b = cards()
            .get_cards(with_scenario(GetCardsRequest { account_id: "b".into() }, scenario.as_str()))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(a.encode_to_vec(), b.encode_to_vec());
    }
}

#[tokio::test]
async fn test_missing_metadata_is_invalid_argument() {
    let status = users()
        .get_user(tonic::Request::new(user_request("u-1")))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert!(status.message().contains("required"));

    let status = accounts()
        .get_accounts(tonic::Request::new(GetAccountsRequest { user_id: "u".into() }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_unknown_scenario_is_invalid_argument() {
    for raw in ["xyz", "not_a_real_scenario"] {
        let status = cards()
            .get_card(with_scenario(GetCardRequest { id: "c".into() }, raw))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(status.message().contains("Unknown"), "{}", status.message());
        assert!(status.message().contains(raw));
    }
}

#[tokio::test]
async fn test_rejection_happens_before_fixture_lookup() {
    // An empty root would make any load fail with INTERNAL.
    let dir = tempdir().unwrap();
    let service = UsersMockService::new(ServiceLoaders::new(dir.path()).users);

    let status = service
        .get_user(tonic::Request::new(user_request("u")))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_missing_fixture_is_internal() {
    let dir = tempdir().unwrap();
    let service = UsersMockService::new(ServiceLoaders::new(dir.path()).users);

    let status = service
        .get_user(with_scenario(user_request("u"), DEBIT.as_str()))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Internal);
    assert!(status.message().contains("Mock file not found"));
}

#[tokio::test]
async fn test_fixture_without_required_message_is_internal() {
    let dir = tempdir().unwrap();
    write_fixture(
        dir.path(),
        "users/GetUser/user_with_active_debit_card_account.json",
        "{}",
    );
    let service = UsersMockService::new(ServiceLoaders::new(dir.path()).users);

    let status = service
        .get_user(with_scenario(user_request("u"), DEBIT.as_str()))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Internal);
    assert!(status.message().contains("GetUserResponse"), "{}", status.message());
    assert!(status.message().contains("user"));
}

#[tokio::test]
async fn test_round_trip_over_the_wire() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(
        grpc_router(&grpc_loaders()).serve_with_incoming(TcpListenerStream::new(listener)),
    );

    let endpoint = format!("http://{addr}");
    let mut users_client = UsersServiceClient::connect(endpoint.clone()).await.unwrap();
    let mut cards_client = CardsServiceClient::connect(endpoint).await.unwrap();

    let context = RequestContext::new(DEBIT);
    let response = users_client
        .get_user(context.attach(tonic::Request::new(user_request("u-1"))))
        .await
        .unwrap()
        .into_inner();
    let expected: GetUserResponse = serde_json::from_value(fixture_json(
        &grpc_fixtures_root(),
        "users/GetUser/user_with_active_debit_card_account.json",
    ))
    .unwrap();
    assert_eq!(response, expected);

    let mut request = tonic::Request::new(GetCardRequest { id: "c".into() });
    *request.metadata_mut() = build_grpc_metadata(&RequestContext::new(CREDIT));
    let card = cards_client.get_card(request).await.unwrap().into_inner();
    assert_eq!(card.card.unwrap().card_holder, "IVAN SOKOLOV");

    let status = users_client
        .get_user(tonic::Request::new(user_request("u-1")))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    server.abort();
}
