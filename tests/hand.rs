//! Card, deck and hand scoring tests.

use bjtable::{Card, DECK_SIZE, Deck, DeckExhausted, Hand, HandStatus, Rank, Suit, score};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn any_card() -> impl Strategy<Value = Card> {
    (0..Suit::ALL.len(), 0..Rank::ALL.len()).prop_map(|(s, r)| card(Suit::ALL[s], Rank::ALL[r]))
}

fn non_ace() -> impl Strategy<Value = Card> {
    any_card().prop_filter("no aces", |c| !c.is_ace())
}

fn base_sum(cards: &[Card]) -> u32 {
    cards.iter().map(|c| u32::from(c.base_value())).sum()
}

#[test]
fn fresh_deck_has_every_card_once() {
    let mut deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let mut seen = Vec::new();
    while let Ok(card) = deck.draw() {
        assert!(!seen.contains(&card), "{card} drawn twice");
        seen.push(card);
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckExhausted));
}

#[test]
fn shuffle_is_seeded() {
    let mut a = Deck::new();
    let mut b = Deck::new();
    a.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    b.shuffle(&mut ChaCha8Rng::seed_from_u64(7));

    assert_eq!(a.cards(), b.cards());
    assert_ne!(a.cards(), Deck::new().cards());
}

#[test]
fn shuffle_keeps_only_the_undrawn_cards() {
    let mut deck = Deck::new();
    let drawn: Vec<Card> = (0..10).map(|_| deck.draw().unwrap()).collect();

    let mut before = deck.cards().to_vec();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(11));
    assert_eq!(deck.len(), DECK_SIZE - 10);

    let mut after = deck.cards().to_vec();
    assert!(drawn.iter().all(|card| !after.contains(card)));

    let key = |card: &Card| (card.suit as u8, card.rank as u8);
    before.sort_by_key(key);
    after.sort_by_key(key);
    assert_eq!(before, after);
}

#[test]
fn draw_takes_from_the_top() {
    let mut deck = Deck::from_cards(vec![
        card(Suit::Clubs, Rank::Two),
        card(Suit::Hearts, Rank::King),
    ]);

    assert_eq!(deck.draw(), Ok(card(Suit::Hearts, Rank::King)));
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.draw(), Ok(card(Suit::Clubs, Rank::Two)));
    assert_eq!(deck.draw(), Err(DeckExhausted));
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Hearts, Rank::Ten).to_string(), "10H");
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "AS");
    assert_eq!(card(Suit::Diamonds, Rank::Queen).base_value(), 10);
    assert_eq!(card(Suit::Clubs, Rank::Ace).base_value(), 1);
}

#[test]
fn literal_scores() {
    let ace = card(Suit::Spades, Rank::Ace);
    let king = card(Suit::Hearts, Rank::King);
    let five = card(Suit::Clubs, Rank::Five);
    let nine = card(Suit::Diamonds, Rank::Nine);

    assert_eq!(score(&[]), 0);
    assert_eq!(score(&[ace, king]), 21);
    assert_eq!(score(&[ace, card(Suit::Hearts, Rank::Ace)]), 12);
    assert_eq!(score(&[ace, five, nine]), 15);
    assert_eq!(score(&[king, five, nine]), 24);

    let soft = Hand::from_cards(&[ace, five]);
    assert_eq!(soft.value(), 16);
    assert!(soft.is_soft());

    let hard = Hand::from_cards(&[ace, five, king]);
    assert_eq!(hard.value(), 16);
    assert!(!hard.is_soft());
}

#[test]
fn split_and_double_rules() {
    let tens = Hand::from_cards(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::King),
    ]);
    assert!(tens.can_split());
    assert!(tens.can_double_down());

    let mixed = Hand::from_cards(&[
        card(Suit::Clubs, Rank::Seven),
        card(Suit::Clubs, Rank::Eight),
    ]);
    assert!(!mixed.can_split());
    assert!(mixed.can_double_down());

    let three = Hand::from_cards(&[
        card(Suit::Clubs, Rank::Two),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Two),
    ]);
    assert!(!three.can_split());
    assert!(!three.can_double_down());
}

#[test]
fn take_split_card_leaves_one_card() {
    let mut hand = Hand::from_cards(&[
        card(Suit::Clubs, Rank::Eight),
        card(Suit::Hearts, Rank::Eight),
    ]);
    assert_eq!(hand.take_split_card(), Some(card(Suit::Hearts, Rank::Eight)));
    assert_eq!(hand.len(), 1);
    assert_eq!(hand.take_split_card(), None);
}

#[test]
fn adding_past_twenty_one_busts() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Clubs, Rank::King));
    hand.add_card(card(Suit::Hearts, Rank::Queen));
    assert_eq!(hand.status(), HandStatus::Active);

    hand.add_card(card(Suit::Spades, Rank::Two));
    assert!(hand.is_bust());
    assert_eq!(hand.status(), HandStatus::Bust);
    assert!(hand.status().is_terminal());

    hand.clear();
    assert!(hand.is_empty());
    assert_eq!(hand.status(), HandStatus::Active);
}

proptest! {
    #[test]
    fn no_aces_scores_the_plain_sum(cards in prop::collection::vec(non_ace(), 0..8)) {
        prop_assert_eq!(u32::from(score(&cards)), base_sum(&cards));
    }

    #[test]
    fn single_ace_counts_eleven_when_it_fits(
        others in prop::collection::vec(non_ace(), 0..4),
        suit in 0..Suit::ALL.len(),
    ) {
        prop_assume!(base_sum(&others) <= 10);

        let mut cards = others.clone();
        cards.push(card(Suit::ALL[suit], Rank::Ace));
        prop_assert_eq!(u32::from(score(&cards)), base_sum(&others) + 11);
    }

    #[test]
    fn bust_means_over_twenty_one(cards in prop::collection::vec(any_card(), 0..10)) {
        let hand = Hand::from_cards(&cards);
        prop_assert_eq!(hand.is_bust(), hand.value() > 21);
    }

    #[test]
    fn order_does_not_matter(cards in prop::collection::vec(any_card(), 0..8)) {
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(score(&cards), score(&reversed));
    }

    #[test]
    fn score_is_at_least_the_hard_total(cards in prop::collection::vec(any_card(), 0..8)) {
        let value = u32::from(score(&cards));
        let hard = base_sum(&cards);
        prop_assert!(value == hard || value == hard + 10);
    }
}
