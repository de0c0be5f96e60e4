mod common;

use axum::http::StatusCode;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use std::time::Duration;

use common::{
    image_reply, structured_copy, test_png, LogBuffer, StubServer, CHAT_PATH, FULL_CREDENTIALS,
    IMAGE_PATH, PINS_PATH,
};
use spiralwick_pins::catalog::{Catalog, SCENE_STYLES};
use spiralwick_pins::pinterest::publisher::encode_jpeg;
use spiralwick_pins::{AppError, Config, PinOutcome, Pipeline};

async fn full_stub(pin_status: StatusCode) -> StubServer {
    StubServer::spawn(vec![
        (CHAT_PATH, StatusCode::OK, structured_copy()),
        (IMAGE_PATH, StatusCode::OK, image_reply(&test_png(1024, 1024))),
        (PINS_PATH, pin_status, json!({"id": "pin-1"})),
    ])
    .await
}

#[tokio::test]
async fn safe_mode_with_no_credentials_completes() {
    let config = Config::from_lookup(|key| (key == "DRY_RUN").then(|| "1".to_string()));
    let pipeline = Pipeline::new(&config);
    let mut rng = StdRng::seed_from_u64(2024);

    let pin = pipeline.prepare(&mut rng).await.unwrap();
    let catalog = Catalog::spiralwick(None);
    assert!(catalog.products.iter().any(|p| p.name == pin.product.name));
    assert!(SCENE_STYLES.contains(&pin.scene.as_str()));

    let outcome = pipeline.run_once(&mut rng).await.unwrap();
    assert_eq!(outcome, PinOutcome::DryRun);
}

#[tokio::test]
async fn live_run_publishes_each_iteration() {
    let stub = full_stub(StatusCode::CREATED).await;
    let config = stub.config(&FULL_CREDENTIALS);
    let pipeline = Pipeline::new(&config);
    let mut rng = StdRng::seed_from_u64(9);

    let outcomes = pipeline.run(3, &mut rng).await.unwrap();
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|o| o.id() == "pin-1"));
    assert_eq!(stub.hits(CHAT_PATH), 3);
    assert_eq!(stub.hits(IMAGE_PATH), 3);
    assert_eq!(stub.hits(PINS_PATH), 3);

    for request in stub.requests(PINS_PATH) {
        assert_eq!(request.body["title"], "Blush Bubble Candle");
        assert_eq!(
            request.body["link"],
            "https://shop.example.com/candles?utm_source=pinterest&utm_medium=social&utm_campaign=organic_pins"
        );
    }
}

#[tokio::test]
async fn failed_publish_stops_remaining_iterations() {
    let stub = full_stub(StatusCode::INTERNAL_SERVER_ERROR).await;
    let config = stub.config(&FULL_CREDENTIALS);
    let pipeline = Pipeline::new(&config);
    let mut rng = StdRng::seed_from_u64(9);

    let err = pipeline.run(3, &mut rng).await.unwrap_err();
    assert!(matches!(err, AppError::Upstream { service: "pinterest", .. }));
    assert_eq!(stub.hits(PINS_PATH), 1);
    assert_eq!(stub.hits(CHAT_PATH), 1);
}

#[tokio::test]
async fn generator_failures_do_not_stop_the_run() {
    let stub = StubServer::spawn(vec![
        (CHAT_PATH, StatusCode::BAD_GATEWAY, json!({"error": "down"})),
        (IMAGE_PATH, StatusCode::BAD_GATEWAY, json!({"error": "down"})),
        (PINS_PATH, StatusCode::OK, json!({"id": "pin-2"})),
    ])
    .await;
    let config = stub.config(&FULL_CREDENTIALS);
    let pipeline = Pipeline::new(&config);
    let mut rng = StdRng::seed_from_u64(4);

    let outcome = pipeline.run_once(&mut rng).await.unwrap();
    assert_eq!(outcome.id(), "pin-2");
    let body = &stub.requests(PINS_PATH)[0].body;
    assert!(body["title"].as_str().unwrap().starts_with("Spiralwick Candles • "));
}

#[tokio::test]
async fn same_seed_selects_same_products() {
    let config = Config::from_lookup(|key| (key == "DRY_RUN").then(|| "1".to_string()));
    let pipeline = Pipeline::new(&config);
    let a = pipeline.prepare(&mut StdRng::seed_from_u64(77)).await.unwrap();
    let b = pipeline.prepare(&mut StdRng::seed_from_u64(77)).await.unwrap();
    assert_eq!(a.product, b.product);
    assert_eq!(a.scene, b.scene);
    assert_eq!(a.image, b.image);
}

#[tokio::test]
async fn preview_image_can_be_written_to_disk() {
    let config = Config::from_lookup(|key| (key == "DRY_RUN").then(|| "1".to_string()));
    let pipeline = Pipeline::new(&config);
    let pin = pipeline.prepare(&mut StdRng::seed_from_u64(1)).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pin.jpg");
    std::fs::write(&path, encode_jpeg(&pin.image).unwrap()).unwrap();
    let reloaded = image::open(&path).unwrap();
    assert_eq!((reloaded.width(), reloaded.height()), (1024, 1024));
}

#[tokio::test]
async fn each_pin_logs_product_scene_and_id() {
    let logs = LogBuffer::default();
    let _guard = logs.install();

    let config = Config::from_lookup(|key| (key == "DRY_RUN").then(|| "1".to_string()));
    let pipeline = Pipeline::new(&config);
    let outcomes = pipeline.run(3, &mut StdRng::seed_from_u64(8)).await.unwrap();
    assert_eq!(outcomes.len(), 3);

    assert_eq!(logs.count("[run] product: "), 3);
    assert_eq!(logs.count("[run] scene: "), 3);
    assert_eq!(logs.count("[done] pin id: dry_run"), 3);
}

#[tokio::test]
async fn huge_pin_count_starts_without_preallocating() {
    let stub = StubServer::spawn(vec![(CHAT_PATH, StatusCode::OK, structured_copy())]).await;
    let config = stub.config(&[
        ("OPENAI_API_KEY", "sk-test-0123456789"),
        ("DRY_RUN", "1"),
        ("DAILY_PINS", "4611686018427387904"),
    ]);
    let pipeline = Pipeline::new(&config);
    let mut rng = StdRng::seed_from_u64(6);

    // The run would take forever; it only has to get going.
    let run = pipeline.run(config.pins_per_run, &mut rng);
    let result = tokio::time::timeout(Duration::from_millis(300), run).await;
    assert!(result.is_err(), "run should still be in progress");
    assert!(stub.hits(CHAT_PATH) >= 1);
}
