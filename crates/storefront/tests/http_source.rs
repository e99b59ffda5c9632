//! `HttpCatalogSource` against a local one-shot HTTP server.

use storefront::{
    CatalogSource, HttpCatalogSource, ListingState, LoadError, StorefrontConfig, load_catalog,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one canned response on 127.0.0.1 and return the server URL.
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        assert!(request.starts_with(b"GET /products "));

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{addr}")
}

fn source(server_url: &str) -> HttpCatalogSource {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpCatalogSource::with_client(server_url, client)
}

#[tokio::test]
async fn server_error_status_is_an_api_error() {
    let url = serve_once("500 Internal Server Error", "falha").await;

    match source(&url).fetch().await {
        Err(LoadError::Api(status, body)) => {
            assert_eq!(status, 500);
            assert_eq!(body, "falha");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_array_body_is_a_parse_error() {
    let url = serve_once("200 OK", r#"{"products":[]}"#).await;

    assert!(matches!(source(&url).fetch().await, Err(LoadError::Parse(_))));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = source(&format!("http://{addr}")).fetch().await;
    assert!(matches!(result, Err(LoadError::Network(_))));
}

#[tokio::test]
async fn failed_status_leaves_only_the_placeholder() {
    let url = serve_once("503 Service Unavailable", "").await;
    let mut state = ListingState::new(&StorefrontConfig::default(), 1280.0);

    let view = load_catalog(&source(&url), &mut state).await;

    assert!(view.is_empty_state());
    assert!(state.catalog().is_empty());
    assert!(!state.show_load_more());
}

#[tokio::test]
async fn valid_array_loads_into_the_grid() {
    let url = serve_once(
        "200 OK",
        r#"[
            {"name":"Camiseta","price":28.0,"parcelamento":[3,9.33],"color":"Cinza",
             "image":"img/1.png","size":["P","M"],"date":"2020-10-10"},
            {"name":"Saia","price":19.125,"parcelamento":[2,9.5625],"color":"Preto",
             "image":"img/2.png","size":["G"],"date":"2021-02-10"}
        ]"#,
    )
    .await;
    let mut state = ListingState::new(&StorefrontConfig::default(), 1280.0);

    let view = load_catalog(&source(&url), &mut state).await;

    assert_eq!(view.card_count(), 2);
    let cards = &view.rows()[0].cards;
    assert_eq!(cards[0].name, "Camiseta");
    assert_eq!(cards[1].price_text, "R$ 19,13");
}
