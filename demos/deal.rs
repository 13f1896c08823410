//! Shuffles a deck, deals poker hands and prints them.
//!
//! Usage: `cargo run --example deal -- [hands] [size] [--jokers]`

use cardpile::{Deck, Hand, PileOptions, ShufflePolicy};

fn main() {
    let mut hands = 4;
    let mut size = 5;
    let mut jokers = false;
    let mut positional = 0;
    for arg in std::env::args().skip(1) {
        if arg == "--jokers" {
            jokers = true;
            continue;
        }
        let Ok(value) = arg.parse::<usize>() else {
            eprintln!("ignoring argument {arg:?}");
            continue;
        };
        match positional {
            0 => hands = value,
            1 => size = value,
            _ => eprintln!("ignoring argument {arg:?}"),
        }
        positional += 1;
    }

    let options = PileOptions::default().with_shuffle(ShufflePolicy::time_boxed());
    let mut deck = Deck::standard_deck_with_options(jokers, options);
    deck.shuffle();
    println!("Shuffled a deck of {} cards.", deck.card_count());

    match deck.deal(hands, size) {
        Ok(dealt) => {
            for (i, hand) in dealt.iter().enumerate() {
                print_hand(i + 1, hand);
            }
            println!("{} cards left in the deck.", deck.card_count());
        }
        Err(err) => println!("Deal error: {err}"),
    }
}

fn print_hand(number: usize, hand: &Hand) {
    let cards: Vec<String> = hand.iter().map(ToString::to_string).collect();
    println!("Hand {number}: {}", cards.join(", "));
}
