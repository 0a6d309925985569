//! Terminal driver for the card table.
//!
//! Loads the deck from the card service, deals prizes, then reads one
//! command per line from stdin:
//!
//! ```text
//! s d f p o     key commands (shuffle, draw, draw opponent, place, place opponent)
//! turn          pass the turn
//! energy        place energy if allowed this turn
//! reset         return everything to the deck
//! click X Y     report the card under a point
//! show          print the table
//! quit
//! ```

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use duel_table::{
    dispatch_key, load_deck, EntityId, GameState, HttpCardSource, Side, TableConfig,
};

fn card_name(state: &GameState, entity: EntityId) -> &str {
    state.card(entity).map_or("?", |c| c.data.name.as_str())
}

fn print_table(state: &GameState) {
    println!("turn {} ({}'s turn)", state.turn.turn_number(), state.turn.active());
    println!(
        "deck: {} of {} cards, prizes: {}",
        state.deck().len(),
        state.total_cards(),
        state.prizes().len()
    );
    for side in Side::ALL {
        let hand: Vec<_> = state.hand(side).iter().map(|&e| card_name(state, e)).collect();
        println!("{side} hand: {hand:?}");
        for (_, slot) in state.field(side).iter() {
            let occupant = slot.card.map_or("-", |e| card_name(state, e));
            println!("  {side} {}: {occupant}", slot.label);
        }
    }
}

fn handle_line(state: &mut GameState, line: &str) -> bool {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return true;
    };

    match word {
        "quit" | "exit" => return false,
        "turn" => state.switch_turn(),
        "energy" => {
            if state.can_place_energy() {
                state.mark_energy_placed();
                println!("energy placed");
            } else {
                println!("energy already placed this turn");
            }
        }
        "reset" => state.move_all_cards_to_deck(),
        "show" => print_table(state),
        "click" => {
            let coords: Vec<f32> = words.filter_map(|w| w.parse().ok()).collect();
            match coords.as_slice() {
                [x, y] => match state.get_card_at_position(*x, *y) {
                    Some(entity) => println!("{entity}: {}", card_name(state, entity)),
                    None => println!("nothing there"),
                },
                _ => println!("usage: click X Y"),
            }
        }
        key if key.chars().count() == 1 => {
            let key = key.chars().next().unwrap_or_default();
            match dispatch_key(state, key) {
                Some(outcome) => println!("{outcome:?}"),
                None => println!("no command bound to {key:?}"),
            }
        }
        other => println!("unknown command {other:?}"),
    }
    true
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::default(),
    };

    let source = HttpCardSource::from_config(&config)?;
    let mut state = GameState::from_config(&config);

    tracing::info!(api = %config.api_base_url, cards = config.deck.len(), "loading deck");
    load_deck(&mut state, &source, &config.deck).await;
    state.shuffle_deck();
    state.deal_prizes(config.prize_count);
    print_table(&state);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if !handle_line(&mut state, &line) {
            break;
        }
    }

    tracing::info!("table closed");
    Ok(())
}
