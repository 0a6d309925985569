//! Card data fetching from the card service.
//!
//! - `CardSource`: async lookup by numeric id, returning `anyhow::Result`
//! - `HttpCardSource`: `GET {base}/card/{id}` over `reqwest`
//! - `fetch_card_or_placeholder`: never-failing wrapper used at load time
//! - `ApiCard`: the service's JSON record

pub mod source;
pub mod wire;

pub use source::{fetch_card_or_placeholder, fetch_cards, load_deck, CardSource, HttpCardSource};
pub use wire::{image_url, ApiCard};
