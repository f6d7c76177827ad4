//! CLI demo: one round against the dealer.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pontoon::{Card, Deck, Game, GameOptions, GameState, Winner};

fn main() {
    println!("Pontoon CLI demo (one round, 'h' to hit, 's' to stick)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(["you"], Deck::standard(), GameOptions::default(), seed);

    if let Err(err) = game.start() {
        println!("Start error: {err}");
        return;
    }

    while game.state() == GameState::PlayerTurn {
        let hand = game.player("you").map(pontoon::Player::hand);
        if let Some(hand) = hand {
            println!("Your hand: {} (score {})", describe(hand.cards()), hand.score());
        }

        if let Some(up) = game.dealer().hand().up_card() {
            println!("Dealer shows: {}", card_name(*up));
        }

        match prompt_line("(h)it or (s)tick? ").as_str() {
            "h" | "hit" => match game.hit("you") {
                Ok(card) => println!("You draw {}", card_name(card)),
                Err(err) => println!("Hit error: {err}"),
            },
            "s" | "stick" => {
                if let Err(err) = game.stick("you") {
                    println!("Stick error: {err}");
                }
            }
            "q" | "quit" => return,
            other => println!("Unknown action: {other}"),
        }
    }

    if let Some(hand) = game.player("you").map(pontoon::Player::hand) {
        if hand.is_bust() {
            println!("You bust with {} (score {})", describe(hand.cards()), hand.score());
        }
    }

    if game.state() == GameState::DealerTurn {
        match game.play_dealer() {
            Ok(drawn) => {
                for card in drawn {
                    println!("Dealer draws {}", card_name(card));
                }
            }
            Err(err) => println!("Dealer error: {err}"),
        }
    }

    let dealer = game.dealer().hand();
    println!(
        "Dealer finishes with {} (score {})",
        describe(dealer.cards()),
        dealer.score()
    );

    match game.determine_winner() {
        Ok(outcome) => match outcome.winner {
            Winner::Player(name) => println!("{name} wins!"),
            Winner::Dealer => println!("Dealer wins."),
            Winner::Push => println!("Push - no winner."),
            Winner::Nobody => println!("Everyone busts - nobody wins."),
        },
        Err(err) => println!("Outcome error: {err}"),
    }
}

fn card_name(card: Card) -> String {
    format!("{:?} of {:?}", card.face, card.suit)
}

fn describe(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| card_name(*c))
        .collect::<Vec<_>>()
        .join(", ")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_lowercase()
}
