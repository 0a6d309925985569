//! Card system: fetched card data and table instances.
//!
//! ## Key Types
//!
//! - `CardData`: Normalized record from the card service
//! - `Skill`: One of a card's two attack slots
//! - `Card`: A card on the table with position and size

pub mod definition;
pub mod instance;

pub use definition::{is_basic_monster, CardData, Skill, BASIC, MONSTER, PLACEHOLDER_NAME};
pub use instance::Card;
