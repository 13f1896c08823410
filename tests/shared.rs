//! Shared pile tests.

extern crate alloc;

use alloc::sync::Arc;
use std::thread;

use cardpile::{Card, Deck, PileOptions, SharedPile};

#[test]
fn threads_draw_distinct_cards() {
    let deck = Deck::standard_deck_with_options(false, PileOptions::default().with_seed(5));
    let shared = Arc::new(SharedPile::new(deck));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                (0..10)
                    .map(|_| shared.with(|deck| deck.pick_random()).unwrap())
                    .collect::<Vec<Card>>()
            })
        })
        .collect();

    let mut drawn: Vec<Card> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(drawn.len(), 40);

    let deck = Arc::into_inner(shared).unwrap().into_inner();
    assert_eq!(deck.card_count(), 12);
    for card in &drawn {
        assert!(!deck.has_card(card));
    }

    drawn.sort_by_key(|c| (c.suit().map(|s| s.to_string()), c.rank()));
    drawn.dedup();
    assert_eq!(drawn.len(), 40);
}

#[test]
fn lock_spans_several_operations() {
    let shared: SharedPile =
        Deck::standard_deck_with_options(true, PileOptions::default().with_seed(2)).into();

    {
        let mut deck = shared.lock();
        let top = deck.pick_top().unwrap();
        deck.place_bottom(top).unwrap();
        assert_eq!(deck.peek_bottom().unwrap(), top);
    }
    assert_eq!(shared.lock().card_count(), 54);
}
