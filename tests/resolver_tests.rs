use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use url::Url;
use waifu_relay::providers::{NOT_SAFE_CLASS, SAFE_CLASS};
use waifu_relay::{Provider, ProviderTable, Resolution, ResolvedImage, ResponseShape, Resolver};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(name: &str, server: &MockServer, shape: ResponseShape, priority: u32) -> Provider {
    Provider::new(name, Url::parse(&server.uri()).unwrap(), shape).priority(priority)
}

fn resolver(providers: Vec<Provider>, allow_nsfw: bool) -> Resolver {
    Resolver::new(
        Arc::new(ProviderTable::new(providers)),
        reqwest::Client::new(),
        allow_nsfw,
    )
}

async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .len()
}

fn found(url: &str, provider: &str) -> Resolution {
    Resolution::Found(ResolvedImage {
        url: url.to_string(),
        provider: provider.to_string(),
    })
}

#[tokio::test]
async fn falls_back_when_first_provider_returns_500() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sfw/waifu"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&first)
        .await;
    Mock::given(method("GET"))
        .and(path("/sfw/waifu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"url": "https://img/2.png"})))
        .expect(1)
        .mount(&second)
        .await;

    let resolver = resolver(
        vec![
            provider("one", &first, ResponseShape::SimpleObject, 1)
                .categories(SAFE_CLASS, ["waifu"]),
            provider("two", &second, ResponseShape::SimpleObject, 2)
                .categories(SAFE_CLASS, ["waifu"]),
        ],
        true,
    );

    assert_eq!(
        resolver.resolve("waifu", true, None).await,
        found("https://img/2.png", "two")
    );
}

#[tokio::test]
async fn lower_priority_is_tried_first_regardless_of_declaration_order() {
    let a = MockServer::start().await;
    let b = MockServer::start().await;

    Mock::given(path("/sfw/hug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"url": "from-a"})))
        .expect(1)
        .mount(&a)
        .await;
    Mock::given(path("/sfw/hug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"url": "from-b"})))
        .expect(0)
        .mount(&b)
        .await;

    let resolver = resolver(
        vec![
            provider("B", &b, ResponseShape::SimpleObject, 2).categories(SAFE_CLASS, ["hug"]),
            provider("A", &a, ResponseShape::SimpleObject, 1).categories(SAFE_CLASS, ["hug"]),
        ],
        true,
    );

    assert_eq!(resolver.resolve("hug", true, None).await, found("from-a", "A"));
}

#[tokio::test]
async fn unknown_category_is_exhausted_without_requests() {
    let server = MockServer::start().await;
    let resolver = resolver(
        vec![provider("only", &server, ResponseShape::SimpleObject, 1)
            .categories(SAFE_CLASS, ["waifu"])],
        true,
    );

    assert_eq!(
        resolver.resolve("doesnotexist", true, None).await,
        Resolution::Exhausted
    );
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn nsfw_disabled_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    let resolver = resolver(
        vec![provider("pics", &server, ResponseShape::SimpleObject, 1)
            .categories(NOT_SAFE_CLASS, ["hentai"])],
        false,
    );

    assert_eq!(
        resolver.resolve("hentai", false, Some("token")).await,
        Resolution::NsfwDisabled
    );
    assert_eq!(request_count(&server).await, 0);
}

async fn gated_then_open(gated: &MockServer, open: &MockServer) -> Resolver {
    Mock::given(path("/nsfw/ass"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"images": [{"url": "open"}]})))
        .expect(1)
        .mount(open)
        .await;

    resolver(
        vec![
            provider("gated", gated, ResponseShape::Credentialed, 1)
                .categories(NOT_SAFE_CLASS, ["ass"]),
            provider("open", open, ResponseShape::ImagesArray, 2)
                .categories(NOT_SAFE_CLASS, ["ass"]),
        ],
        true,
    )
}

#[tokio::test]
async fn credentialed_provider_is_skipped_without_credential() {
    let gated = MockServer::start().await;
    let open = MockServer::start().await;
    let resolver = gated_then_open(&gated, &open).await;

    assert_eq!(resolver.resolve("ass", false, None).await, found("open", "open"));
    assert_eq!(request_count(&gated).await, 0);
}

#[tokio::test]
async fn blank_credential_counts_as_absent() {
    let gated = MockServer::start().await;
    let open = MockServer::start().await;
    let resolver = gated_then_open(&gated, &open).await;

    assert_eq!(
        resolver.resolve("ass", false, Some("   ")).await,
        found("open", "open")
    );
    assert_eq!(request_count(&gated).await, 0);
}

#[tokio::test]
async fn credential_is_sent_as_authorization_header() {
    let gated = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/retrieve/hentai/thighs"))
        .and(header("authorization", "secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"image": "https://hc/1.jpg"})))
        .expect(1)
        .mount(&gated)
        .await;

    let resolver = resolver(
        vec![provider("hentaicord", &gated, ResponseShape::Credentialed, 3)
            .path("/retrieve/hentai/{category}")
            .categories(NOT_SAFE_CLASS, ["thighs"])],
        true,
    );

    assert_eq!(
        resolver.resolve("thighs", false, Some("secret-token")).await,
        found("https://hc/1.jpg", "hentaicord")
    );
}

#[tokio::test]
async fn safe_only_provider_never_participates_in_nsfw() {
    let nekos = MockServer::start().await;
    let resolver = resolver(
        vec![provider("nekos.best", &nekos, ResponseShape::ResultsArray, 1)
            .path("/{category}")
            .categories(SAFE_CLASS, ["neko"])],
        true,
    );

    assert_eq!(resolver.resolve("neko", false, None).await, Resolution::Exhausted);
    assert_eq!(request_count(&nekos).await, 0);
}

#[tokio::test]
async fn malformed_and_empty_bodies_move_on() {
    let html = MockServer::start().await;
    let empty = MockServer::start().await;
    let good = MockServer::start().await;

    Mock::given(path("/pat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&html)
        .await;
    Mock::given(path("/pat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&empty)
        .await;
    Mock::given(path("/pat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"results": [{"url": "pat.gif"}]})),
        )
        .expect(1)
        .mount(&good)
        .await;

    let resolver = resolver(
        [(&html, "html"), (&empty, "empty"), (&good, "good")]
            .into_iter()
            .zip(1..)
            .map(|((server, name), priority)| {
                provider(name, server, ResponseShape::ResultsArray, priority)
                    .path("/{category}")
                    .categories(SAFE_CLASS, ["pat"])
            })
            .collect(),
        true,
    );

    assert_eq!(resolver.resolve("pat", true, None).await, found("pat.gif", "good"));
}

#[tokio::test]
async fn slow_provider_times_out_and_next_one_answers() {
    let slow = MockServer::start().await;
    let fast = MockServer::start().await;

    Mock::given(path("/sfw/smile"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"url": "late"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&slow)
        .await;
    Mock::given(path("/sfw/smile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"url": "quick"})))
        .mount(&fast)
        .await;

    let resolver = resolver(
        vec![
            provider("slow", &slow, ResponseShape::SimpleObject, 1)
                .timeout(Duration::from_millis(200))
                .categories(SAFE_CLASS, ["smile"]),
            provider("fast", &fast, ResponseShape::SimpleObject, 2)
                .categories(SAFE_CLASS, ["smile"]),
        ],
        true,
    );

    assert_eq!(resolver.resolve("smile", true, None).await, found("quick", "fast"));
}

#[tokio::test]
async fn every_provider_failing_is_exhausted() {
    let server = MockServer::start().await;
    Mock::given(path("/sfw/cry"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&server)
        .await;

    let resolver = resolver(
        vec![
            provider("x", &server, ResponseShape::SimpleObject, 1).categories(SAFE_CLASS, ["cry"]),
            provider("y", &server, ResponseShape::SimpleObject, 1).categories(SAFE_CLASS, ["cry"]),
        ],
        true,
    );

    assert_eq!(resolver.resolve("cry", true, None).await, Resolution::Exhausted);
}

#[tokio::test]
async fn list_categories_is_pure_and_repeatable() {
    let server = MockServer::start().await;
    let resolver = resolver(
        vec![
            provider("both", &server, ResponseShape::SimpleObject, 1)
                .categories(SAFE_CLASS, ["hug", "pat"])
                .categories(NOT_SAFE_CLASS, ["neko"]),
            provider("nsfw-only", &server, ResponseShape::Credentialed, 2)
                .categories(NOT_SAFE_CLASS, ["feet"]),
        ],
        true,
    );

    let first = resolver.list_categories(true);
    let second = resolver.list_categories(true);
    assert_eq!(first, second);
    assert_eq!(first["both"].iter().collect::<Vec<_>>(), ["hug", "pat"]);
    assert!(first["nsfw-only"].is_empty());
    assert_eq!(request_count(&server).await, 0);
}
