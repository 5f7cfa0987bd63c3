use episode_explorer::{CatalogProvider, FetchError, TvMazeCatalog};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_shows_sorted_case_insensitively() {
    let server = MockServer::start().await;
    mock_json(
        &server,
        "/shows",
        json!([
            {
                "id": 2,
                "name": "beta",
                "summary": null,
                "image": null,
                "url": "https://www.tvmaze.com/shows/2/beta",
                "language": "English"
            },
            {
                "id": 1,
                "name": "Alpha",
                "summary": "<p>First.</p>",
                "image": { "medium": "https://img/1-medium.jpg", "original": "https://img/1.jpg" },
                "url": "https://www.tvmaze.com/shows/1/alpha"
            },
            { "id": 3, "name": "Charlie", "summary": null, "image": null }
        ]),
    )
    .await;

    let catalog = TvMazeCatalog::with_base_url(server.uri());
    let shows = catalog.list_shows().await.expect("show list loads");

    let names: Vec<_> = shows.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "beta", "Charlie"]);
    assert_eq!(shows[0].image_url.as_deref(), Some("https://img/1-medium.jpg"));
    assert_eq!(shows[0].summary.as_deref(), Some("<p>First.</p>"));
    assert_eq!(shows[1].image_url, None);
    assert_eq!(shows[2].url, "");
}

#[tokio::test]
async fn test_list_episodes_maps_fields_and_skips_specials() {
    let server = MockServer::start().await;
    mock_json(
        &server,
        "/shows/82/episodes",
        json!([
            {
                "id": 4952,
                "season": 1,
                "number": 1,
                "name": "Winter is Coming",
                "summary": "<p>Lord Eddard Stark is troubled.</p>",
                "image": { "medium": "https://img/4952.jpg" },
                "url": "https://www.tvmaze.com/episodes/4952"
            },
            {
                "id": 4953,
                "season": 1,
                "number": null,
                "name": "Inside the Episode",
                "summary": null,
                "image": null,
                "url": "https://www.tvmaze.com/episodes/4953"
            },
            {
                "id": 4954,
                "season": 1,
                "number": 2,
                "name": null,
                "summary": null,
                "image": null,
                "url": "https://www.tvmaze.com/episodes/4954"
            }
        ]),
    )
    .await;

    let catalog = TvMazeCatalog::with_base_url(server.uri());
    let episodes = catalog.list_episodes(82).await.expect("episodes load");

    assert_eq!(episodes.len(), 2);
    assert_eq!(episodes[0].id, 4952);
    assert_eq!((episodes[0].season, episodes[0].number), (1, 1));
    assert_eq!(episodes[0].image_url.as_deref(), Some("https://img/4952.jpg"));
    assert_eq!(episodes[1].name, "Unknown");
}

#[tokio::test]
async fn test_non_success_status_is_unreachable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shows/1/episodes"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let catalog = TvMazeCatalog::with_base_url(server.uri());
    let error = catalog.list_episodes(1).await.unwrap_err();

    assert!(matches!(error, FetchError::Unreachable(ref msg) if msg.contains("404")));
}

#[tokio::test]
async fn test_wrong_shape_is_malformed() {
    let server = MockServer::start().await;
    mock_json(&server, "/shows", json!({ "shows": [] })).await;

    let catalog = TvMazeCatalog::with_base_url(server.uri());
    let error = catalog.list_shows().await.unwrap_err();

    assert!(matches!(error, FetchError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_connection_failure_is_unreachable() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let catalog = TvMazeCatalog::with_base_url(uri);
    let error = catalog.list_shows().await.unwrap_err();

    assert!(matches!(error, FetchError::Unreachable(_)));
}
