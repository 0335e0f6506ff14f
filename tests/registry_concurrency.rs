use deck_service::domain::entities::{Card, Deck, STANDARD_DECK};
use deck_service::domain::repositories::DeckRegistry;
use deck_service::infrastructure::persistence::InMemoryDeckRegistry;
use deck_service::prelude::{DeckService, SequenceIdGenerator};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;

#[test]
fn test_concurrent_draws_hand_out_each_card_once() {
    let registry = InMemoryDeckRegistry::new();
    registry.insert("deck".to_string(), Deck::standard()).unwrap();

    let drawn: Vec<Vec<Card>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    let mut mine = Vec::new();
                    loop {
                        let cards = registry.draw("deck", 1).unwrap();
                        if cards.is_empty() {
                            break mine;
                        }
                        mine.extend(cards);
                    }
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let all: Vec<String> = drawn.iter().flatten().map(Card::code).collect();
    assert_eq!(all.len(), 52);

    let unique: HashSet<&String> = all.iter().collect();
    assert_eq!(unique.len(), 52);

    let expected: HashSet<&str> = STANDARD_DECK.split(' ').collect();
    let actual: HashSet<&str> = all.iter().map(String::as_str).collect();
    assert_eq!(actual, expected);

    // Each thread saw the deck shrink monotonically, so its own cards keep
    // the original relative order.
    let position = |code: &str| STANDARD_DECK.split(' ').position(|c| c == code).unwrap();
    for cards in &drawn {
        let positions: Vec<usize> = cards.iter().map(|c| position(&c.code())).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    assert!(registry.get("deck").unwrap().is_empty());
}

#[test]
fn test_concurrent_multi_card_draws() {
    let registry = InMemoryDeckRegistry::new();
    registry.insert("deck".to_string(), Deck::standard()).unwrap();

    let total: usize = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| scope.spawn(|| registry.draw("deck", 7).unwrap().len()))
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    // 8 draws of 7 against 52 cards: the last draw comes up short.
    assert_eq!(total, 52);
    assert_eq!(registry.count(), 1);
}

#[test]
fn test_concurrent_creation_yields_distinct_decks() {
    let service = Arc::new(DeckService::new(
        Arc::new(InMemoryDeckRegistry::new()),
        Arc::new(SequenceIdGenerator::new("deck")),
    ));

    let ids: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let service = Arc::clone(&service);
                scope.spawn(move || service.create_deck(None, true).unwrap().0)
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), THREADS);
    assert_eq!(service.list_decks().len(), THREADS);
}
