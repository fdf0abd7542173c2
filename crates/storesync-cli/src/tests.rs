use super::*;
use storesync_core::RequestTimeouts;
use storesync_woo::WooClient;

fn store_flags<'a>() -> [&'a str; 7] {
    [
        "storesync-cli",
        "--store-url",
        "shop.example.com",
        "--consumer-key",
        "ck_test",
        "--consumer-secret",
        "cs_test",
    ]
}

#[test]
fn parses_test_command_with_store_flags() {
    let cli = Cli::try_parse_from(store_flags().into_iter().chain(["test"]))
        .expect("expected valid cli args");

    assert!(matches!(cli.command, Commands::Test));
    let config = cli.store.into_config().expect("complete store config");
    assert_eq!(config.store_url, "shop.example.com");
    assert_eq!(config.api_version, "wc/v3");
    assert!(config.use_ssl);
}

#[test]
fn fetch_defaults_to_first_page_of_ten() {
    let cli = Cli::try_parse_from(store_flags().into_iter().chain(["fetch"]))
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Fetch { limit: 10, page: 1 }
    ));
}

#[test]
fn fetch_accepts_limit_and_page() {
    let cli = Cli::try_parse_from(
        store_flags()
            .into_iter()
            .chain(["fetch", "--limit", "50", "--page", "3"]),
    )
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Fetch { limit: 50, page: 3 }
    ));
}

#[test]
fn use_ssl_can_be_turned_off() {
    let cli = Cli::try_parse_from(
        store_flags()
            .into_iter()
            .chain(["--use-ssl", "false", "test"]),
    )
    .expect("expected valid cli args");

    assert!(!cli.store.use_ssl);
}

#[test]
fn update_parses_product_data_object() {
    let cli = Cli::try_parse_from(store_flags().into_iter().chain([
        "update",
        "--product-id",
        "42",
        "--data",
        r#"{"regular_price": "19.99"}"#,
    ]))
    .expect("expected valid cli args");

    match cli.command {
        Commands::Update { product_id, data } => {
            assert_eq!(product_id, "42");
            assert_eq!(data["regular_price"], "19.99");
        }
        other => panic!("expected update, got {other:?}"),
    }
}

#[test]
fn update_rejects_non_object_data() {
    let result = Cli::try_parse_from(store_flags().into_iter().chain([
        "update",
        "--product-id",
        "42",
        "--data",
        "[1, 2]",
    ]));
    assert!(result.is_err());
}

#[test]
fn missing_store_url_is_reported() {
    let args = StoreArgs {
        store_url: None,
        consumer_key: Some("k".to_owned()),
        consumer_secret: Some("s".to_owned()),
        api_version: "wc/v3".to_owned(),
        use_ssl: true,
    };
    let err = args.into_config().unwrap_err();
    assert!(err.to_string().contains("WOO_STORE_URL"));
}

#[tokio::test]
async fn update_with_invalid_id_fails_without_network() {
    let client = WooClient::new("storesync-test/0.1", RequestTimeouts::default()).unwrap();
    let store = StoreConfig {
        store_url: "127.0.0.1:1".to_owned(),
        consumer_key: "k".to_owned(),
        consumer_secret: "s".to_owned(),
        api_version: "wc/v3".to_owned(),
        use_ssl: false,
    };

    let report = commands::run(
        &client,
        &store,
        Commands::Update {
            product_id: "../orders".to_owned(),
            data: serde_json::json!({}),
        },
    )
    .await;

    assert!(!report.success);
    assert_eq!(report.body["success"], false);
    assert!(report.body["message"]
        .as_str()
        .unwrap()
        .contains("invalid product id"));
}
