//! Card sources: where card data comes from.
//!
//! `CardSource::fetch` returns an explicit `Result`. Callers that always need
//! a record to put on the table use [`fetch_card_or_placeholder`], which logs
//! the failure and substitutes [`CardData::placeholder`].
//!
//! Each call is independent: no caching, no retries, no timeout.

use std::future::Future;

use anyhow::Context;
use reqwest::Client;
use tracing::{debug, error, warn};

use super::wire::ApiCard;
use crate::cards::CardData;
use crate::core::{EntityId, GameState, TableConfig};

/// Anything that can look up a card by numeric id.
pub trait CardSource {
    /// Fetch one card record.
    fn fetch(&self, card_id: u32) -> impl Future<Output = anyhow::Result<CardData>> + Send;
}

/// Card source backed by the card data HTTP service.
#[derive(Clone, Debug)]
pub struct HttpCardSource {
    client: Client,
    api_base_url: String,
    image_base_url: String,
}

impl HttpCardSource {
    /// Create a source for `{api_base_url}/card/{id}`.
    pub fn new(
        api_base_url: impl Into<String>,
        image_base_url: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("duel-table/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            api_base_url: api_base_url.into().trim_end_matches('/').to_owned(),
            image_base_url: image_base_url.into(),
        })
    }

    /// Create a source from the table configuration.
    pub fn from_config(config: &TableConfig) -> anyhow::Result<Self> {
        Self::new(config.api_base_url.clone(), config.image_base_url.clone())
    }

    /// URL a card id is fetched from.
    #[must_use]
    pub fn card_url(&self, card_id: u32) -> String {
        format!("{}/card/{}", self.api_base_url, card_id)
    }
}

impl CardSource for HttpCardSource {
    async fn fetch(&self, card_id: u32) -> anyhow::Result<CardData> {
        let url = self.card_url(card_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("card service rejected {url}"))?;

        let card: ApiCard = response
            .json()
            .await
            .with_context(|| format!("malformed card data from {url}"))?;

        let data = card.into_card_data(&self.image_base_url);
        debug!(card_id, name = %data.name, "fetched card data");
        Ok(data)
    }
}

/// Fetch a card, substituting the placeholder record on any failure.
///
/// Never fails. The placeholder is named `"Error"` and has every other field
/// empty.
pub async fn fetch_card_or_placeholder<S>(source: &S, card_id: u32) -> CardData
where
    S: CardSource,
{
    match source.fetch(card_id).await {
        Ok(data) => data,
        Err(err) => {
            error!(card_id, "Error fetching card data: {err:#}");
            CardData::placeholder()
        }
    }
}

/// Fetch several cards in order, one request each.
pub async fn fetch_cards<S>(source: &S, card_ids: &[u32]) -> Vec<CardData>
where
    S: CardSource,
{
    let mut cards = Vec::with_capacity(card_ids.len());
    for &card_id in card_ids {
        cards.push(fetch_card_or_placeholder(source, card_id).await);
    }
    cards
}

/// Fetch cards and put them on top of the deck in order.
///
/// Cards that could not be fetched are added as placeholders.
pub async fn load_deck<S>(state: &mut GameState, source: &S, card_ids: &[u32]) -> Vec<EntityId>
where
    S: CardSource,
{
    let cards = fetch_cards(source, card_ids).await;
    let failed = cards.iter().filter(|c| c.is_placeholder()).count();
    if failed > 0 {
        warn!(failed, total = cards.len(), "some cards could not be fetched");
    }
    cards.into_iter().map(|data| state.add_card(data)).collect()
}
