//! Card data fetching tests.
//!
//! HTTP tests run against a one-shot responder on a local port; the rest use
//! in-memory card sources.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::bail;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use duel_table::fetch::{fetch_card_or_placeholder, fetch_cards, load_deck, CardSource, HttpCardSource};
use duel_table::{CardData, GameState, LayoutConfig, TableConfig};

const IMAGES: &str = "http://images.test/cards";

/// Serve one HTTP response, reporting the request line's path.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

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

        let request = String::from_utf8_lossy(&request);
        let path = request.split_whitespace().nth(1).unwrap_or_default().to_owned();
        let _ = tx.send(path);

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    (base, rx)
}

/// A base URL nothing is listening on.
async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    base
}

fn assert_placeholder(card: &CardData) {
    assert_eq!(card.name, "Error");
    assert!(card.is_placeholder());
    assert!(card.card_type.is_empty());
    assert!(card.stage.is_empty());
    assert_eq!(card.hp, None);
    assert!(card.evolves_from.is_empty());
    assert!(card.function.is_empty());
    assert!(card.skills.iter().all(|s| s.is_empty()));
    assert!(card.image_url.is_empty());
}

// =============================================================================
// HTTP Source
// =============================================================================

#[tokio::test]
async fn test_http_fetch_requests_card_path() {
    let body = r#"{"name":"Pebblecrab","cardType":"Monster","state":"Basic","monsterHP":"70","Skill1DMG":30,"Skill1EnergyQty":"2","Skill1EnergyType":"Water"}"#;
    let (base, path) = serve_once("200 OK", body).await;
    let config = TableConfig {
        image_base_url: IMAGES.to_owned(),
        ..TableConfig::default().with_api_base_url(base)
    };
    let source = HttpCardSource::from_config(&config).unwrap();

    let card = source.fetch(7).await.unwrap();

    assert_eq!(path.await.unwrap(), "/card/7");
    assert_eq!(card.name, "Pebblecrab");
    assert!(card.is_basic_monster());
    assert_eq!(card.hp, Some(70));
    assert_eq!(card.skills[0].damage, Some(30));
    assert_eq!(card.skills[0].energy_qty, Some(2));
    assert_eq!(card.skills[0].energy_type, "Water");
    assert!(card.skills[1].is_empty());
    assert_eq!(card.image_url, "http://images.test/cards/Pebblecrab.png");
}

#[tokio::test]
async fn test_http_malformed_body_is_an_error() {
    let (base, _path) = serve_once("200 OK", "{not json").await;
    let source = HttpCardSource::new(base, IMAGES).unwrap();

    assert!(source.fetch(1).await.is_err());
}

#[tokio::test]
async fn test_http_error_status_falls_back_to_placeholder() {
    let (base, _path) = serve_once("404 Not Found", r#"{"error":"no such card"}"#).await;
    let source = HttpCardSource::new(base, IMAGES).unwrap();

    let card = fetch_card_or_placeholder(&source, 999).await;

    assert_placeholder(&card);
}

#[tokio::test]
async fn test_http_unreachable_falls_back_to_placeholder() {
    let source = HttpCardSource::new(closed_port().await, IMAGES).unwrap();

    assert!(source.fetch(3).await.is_err());
    assert_placeholder(&fetch_card_or_placeholder(&source, 3).await);
}

// =============================================================================
// In-memory Sources
// =============================================================================

/// Answers with a basic monster for even ids and fails for odd ones.
struct EvenOnly;

impl CardSource for EvenOnly {
    async fn fetch(&self, card_id: u32) -> anyhow::Result<CardData> {
        if card_id % 2 == 1 {
            bail!("card {card_id} is missing");
        }
        Ok(CardData::new(format!("Card {card_id}"))
            .with_type("Monster")
            .with_stage("Basic"))
    }
}

/// Counts every request it receives.
#[derive(Default)]
struct Counting {
    requests: AtomicUsize,
}

impl CardSource for Counting {
    async fn fetch(&self, card_id: u32) -> anyhow::Result<CardData> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        Ok(CardData::new(card_id.to_string()))
    }
}

#[tokio::test]
async fn test_fetch_cards_keeps_order_and_substitutes_failures() {
    let cards = fetch_cards(&EvenOnly, &[2, 3, 4]).await;

    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].name, "Card 2");
    assert_placeholder(&cards[1]);
    assert_eq!(cards[2].name, "Card 4");
}

#[tokio::test]
async fn test_repeated_fetches_are_not_cached() {
    let source = Counting::default();

    fetch_cards(&source, &[5, 5, 5]).await;
    fetch_card_or_placeholder(&source, 5).await;

    assert_eq!(source.requests.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_load_deck_stacks_cards_in_order() {
    let mut state = GameState::new(LayoutConfig::default(), 8);

    let loaded = load_deck(&mut state, &EvenOnly, &[10, 11, 12]).await;

    assert_eq!(loaded.len(), 3);
    assert_eq!(state.deck(), loaded.as_slice());
    assert_eq!(state.card(loaded[0]).unwrap().data.name, "Card 10");
    assert!(state.card(loaded[1]).unwrap().data.is_placeholder());
    // Last loaded is on top
    assert_eq!(state.zones.top_card(duel_table::ZoneId::Deck), Some(loaded[2]));
}
