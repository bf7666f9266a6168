//! Record and description building end to end over mock store and quote servers
use mockito::{Matcher, Mock, Server};
use steam_price_card_lib::ProductService;
use steam_price_card_lib::domain::{Currency, ProductPrice};
use steam_price_card_lib::infrastructure::AppConfig;

const STORE_PAGE: &str = include_str!("fixtures/store_page.html");
const QUOTE_JSON: &str = include_str!("fixtures/quote.json");
const QUOTE_PATH: &str = "/dolarcripto/variacion";

fn config_for(server: &Server) -> AppConfig {
    let mut config = AppConfig::default();
    config.store.base_url = server.url();
    config.exchange.quote_url = format!("{}{QUOTE_PATH}", server.url());
    config
}

async fn mock_store_page(server: &mut Server, id: &str) -> Mock {
    server
        .mock("GET", format!("/app/{id}").as_str())
        .match_query(Matcher::UrlEncoded("cc".into(), "AR".into()))
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(STORE_PAGE)
        .create_async()
        .await
}

async fn mock_quote(server: &mut Server, status: usize, body: &str) -> Mock {
    server
        .mock("GET", QUOTE_PATH)
        .with_status(status)
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn describe_builds_full_card() {
    let mut server = Server::new_async().await;
    let page = mock_store_page(&mut server, "1145360").await;
    let quote = mock_quote(&mut server, 200, QUOTE_JSON).await;
    let service = ProductService::from_config(&config_for(&server)).unwrap();

    let (record, description) = service.describe("1145360").await.unwrap();

    assert_eq!(record.id(), "1145360");
    assert_eq!(record.title(), "Hades");
    assert_eq!(record.price(), Some(&ProductPrice::new(Currency::Usd, "20.00")));
    assert_eq!(record.image_urls(), ["https://cdn.example/hades/header.jpg".to_string()]);
    assert_eq!(
        record.video_urls(),
        Some(&["https://video.akamai.steamstatic.com/store_trailers/1145360/movie480.mp4".to_string()][..])
    );
    assert_eq!(record.developer(), "Supergiant Games");
    assert_eq!(record.reviews(), "250314");
    assert_eq!(
        description,
        "Defy the god of the dead as you hack and slash out of the Underworld. \r\n\n USD$20.00 - ARS$\u{a0}24.010,00 🧉"
    );
    page.assert_async().await;
    quote.assert_async().await;
}

#[tokio::test]
async fn quote_outage_keeps_dollar_price() {
    let mut server = Server::new_async().await;
    let _page = mock_store_page(&mut server, "1145360").await;
    let _quote = mock_quote(&mut server, 503, "").await;
    let service = ProductService::from_config(&config_for(&server)).unwrap();

    let (_, description) = service.describe("1145360").await.unwrap();

    assert!(description.ends_with(" \r\n\n USD$20.00"));
    assert!(!description.contains("ARS$"));
}

#[tokio::test]
async fn missing_product_fails_without_quoting() {
    let mut server = Server::new_async().await;
    let _page = server
        .mock("GET", "/app/404404")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;
    let quote = server
        .mock("GET", QUOTE_PATH)
        .expect(0)
        .create_async()
        .await;
    let service = ProductService::from_config(&config_for(&server)).unwrap();

    let err = service.describe("404404").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.url(), Some(format!("{}/app/404404?cc=AR", server.url()).as_str()));
    quote.assert_async().await;
}

#[tokio::test]
async fn non_dollar_price_skips_conversion() {
    let mut server = Server::new_async().await;
    let page = STORE_PAGE.replace(r#"content="USD""#, r#"content="BRL""#);
    let _page = server
        .mock("GET", "/app/1145360")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(page)
        .create_async()
        .await;
    let quote = server
        .mock("GET", QUOTE_PATH)
        .expect(0)
        .create_async()
        .await;
    let service = ProductService::from_config(&config_for(&server)).unwrap();

    let (record, description) = service.describe("1145360").await.unwrap();

    assert_eq!(record.price().map(|p| p.currency.code()), Some("BRL"));
    assert_eq!(
        description,
        "Defy the god of the dead as you hack and slash out of the Underworld."
    );
    quote.assert_async().await;
}

#[tokio::test]
async fn record_serializes_with_store_field_names() {
    let mut server = Server::new_async().await;
    let _page = mock_store_page(&mut server, "1145360").await;
    let service = ProductService::from_config(&config_for(&server)).unwrap();

    let record = service.build_record("1145360").await.unwrap();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["id"], "1145360");
    assert_eq!(json["imagesUrl"][0], "https://cdn.example/hades/header.jpg");
    assert!(json["videosUrl"].is_array());
}
