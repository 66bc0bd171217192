//! HTTP character source against a local stub server
//!
//! Each test serves one canned response and checks how the source and the
//! failure-absorbing loader react to it.

use multiverse_core::fetch::{load_characters, CharacterSource, HttpCharacterSource};
use multiverse_core::{CharacterFeed, ExplorerError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const PAGE: &str = r#"{
  "info": { "count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character?page=2", "prev": null },
  "results": [
    {
      "id": 1, "name": "Rick Sanchez", "status": "Alive", "species": "Human", "type": "",
      "gender": "Male",
      "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
      "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
      "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
      "episode": ["https://rickandmortyapi.com/api/episode/1"],
      "url": "https://rickandmortyapi.com/api/character/1",
      "created": "2017-11-04T18:48:46.250Z"
    },
    {
      "id": 2, "name": "Morty Smith", "status": "Alive", "species": "Human", "type": "",
      "gender": "Male",
      "origin": { "name": "unknown", "url": "" },
      "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
      "image": "https://rickandmortyapi.com/api/character/avatar/2.jpeg",
      "episode": ["https://rickandmortyapi.com/api/episode/1", "https://rickandmortyapi.com/api/episode/2"],
      "url": "https://rickandmortyapi.com/api/character/2",
      "created": "2017-11-04T18:50:21.651Z"
    }
  ]
}"#;

/// Serve a single HTTP response and return the endpoint URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
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

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{}/api/character", addr)
}

#[tokio::test]
async fn test_fetch_returns_results_in_order() {
    let endpoint = serve_once("200 OK", PAGE).await;
    let source = HttpCharacterSource::new(endpoint);

    let characters = source.fetch_characters().await.unwrap();

    let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Rick Sanchez", "Morty Smith"]);
    assert_eq!(characters[1].episode_count(), 2);
    assert_eq!(characters[1].origin.url.as_deref(), Some(""));
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let endpoint = serve_once("404 Not Found", r#"{"error":"There is nothing here"}"#).await;
    let source = HttpCharacterSource::new(endpoint);

    let err = source.fetch_characters().await.unwrap_err();
    assert!(matches!(err, ExplorerError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_non_json_body_is_an_error() {
    let endpoint = serve_once("200 OK", "<html>portal gun misfire</html>").await;
    let source = HttpCharacterSource::new(endpoint);

    let err = source.fetch_characters().await.unwrap_err();
    assert!(matches!(err, ExplorerError::Decode(_)));
}

#[tokio::test]
async fn test_missing_results_is_an_error() {
    let endpoint = serve_once("200 OK", r#"{"info":{"count":0,"pages":0}}"#).await;
    let source = HttpCharacterSource::new(endpoint);

    assert!(source.fetch_characters().await.is_err());
}

#[tokio::test]
async fn test_unreachable_endpoint_settles_to_empty_feed() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpCharacterSource::new(format!("http://{}/api/character", addr));

    let mut feed = CharacterFeed::new();
    assert!(feed.is_loading());
    feed.finish(load_characters(&source).await);

    assert!(!feed.is_loading());
    assert!(feed.characters().is_empty());
}

#[tokio::test]
async fn test_server_error_settles_to_empty_feed() {
    let endpoint = serve_once("500 Internal Server Error", "").await;
    let source = HttpCharacterSource::new(endpoint);

    let mut feed = CharacterFeed::new();
    feed.finish(load_characters(&source).await);

    assert!(!feed.is_loading());
    assert!(feed.characters().is_empty());
}
