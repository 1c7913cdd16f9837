//! Deck, hand evaluation and ledger tests.

#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use birdjack::hand::{card_value, hand_value, is_blackjack, is_busted, is_soft};
use birdjack::ledger::payout;
use birdjack::{
    Card, DECK_SIZE, Deck, DeckError, DeckSource, Ledger, LedgerError, Outcome, Rank,
    RoundResult, RoundingMode, SessionOptions, Shuffler, Suit, Trend,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank) -> Card {
    Card::new(Suit::Spades, rank)
}

#[test]
fn standard_deck_is_canonical() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.cards()[0], Card::new(Suit::Clubs, Rank::Ace));
    assert_eq!(deck.cards()[1], Card::new(Suit::Clubs, Rank::Two));
    assert_eq!(deck.cards()[13], Card::new(Suit::Diamonds, Rank::Ace));
    assert_eq!(deck.cards()[51], Card::new(Suit::Spades, Rank::King));

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn shuffle_is_a_permutation_and_leaves_input_alone() {
    let deck = Deck::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let shuffled = deck.shuffled(&mut rng);

    assert_eq!(deck, Deck::standard());
    assert_ne!(shuffled, deck);

    let mut before = deck.cards().to_vec();
    let mut after = shuffled.cards().to_vec();
    before.sort_by_key(|c| (c.suit, c.rank));
    after.sort_by_key(|c| (c.suit, c.rank));
    assert_eq!(before, after);
}

#[test]
fn drawing_whole_deck_yields_each_card_once() {
    let mut deck = Shuffler::seeded(3).fresh_deck();
    let mut seen = HashSet::new();

    for _ in 0..DECK_SIZE {
        let drawn = deck.draw().unwrap();
        assert!(seen.insert(drawn), "duplicate {drawn}");
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckError::Empty));
}

#[test]
fn seeded_shuffler_is_deterministic() {
    let mut a = Shuffler::seeded(99);
    let mut b = Shuffler::seeded(99);
    assert_eq!(a.fresh_deck(), b.fresh_deck());
    assert_eq!(a.fresh_deck(), b.fresh_deck());
}

#[test]
fn draw_order_deck_draws_front_first() {
    let mut deck = Deck::from_draw_order(&[card(Rank::Two), card(Rank::King)]);
    assert_eq!(deck.draw(), Ok(card(Rank::Two)));
    assert_eq!(deck.draw(), Ok(card(Rank::King)));
    assert_eq!(deck.draw(), Err(DeckError::Empty));
}

#[test]
fn card_values() {
    assert_eq!(card_value(card(Rank::Ace)), 11);
    assert_eq!(card_value(card(Rank::Two)), 2);
    assert_eq!(card_value(card(Rank::Ten)), 10);
    assert_eq!(card_value(card(Rank::Jack)), 10);
    assert_eq!(card_value(card(Rank::Queen)), 10);
    assert_eq!(card_value(card(Rank::King)), 10);
}

#[test]
fn aces_are_demoted_only_while_over_21() {
    let ace = card(Rank::Ace);

    assert_eq!(hand_value(&[ace, card(Rank::Six), card(Rank::Five)]), 12);
    assert_eq!(hand_value(&[ace, ace, card(Rank::Nine)]), 21);
    assert_eq!(hand_value(&[ace, ace, ace]), 13);
    assert_eq!(hand_value(&[ace, card(Rank::Six)]), 17);
    assert!(is_soft(&[ace, card(Rank::Six)]));
    assert!(!is_soft(&[ace, card(Rank::Six), card(Rank::King)]));
    assert_eq!(hand_value(&[]), 0);
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    assert!(is_blackjack(&[card(Rank::Ace), card(Rank::King)]));
    assert!(!is_blackjack(&[
        card(Rank::Seven),
        card(Rank::Seven),
        card(Rank::Seven)
    ]));
    assert!(!is_blackjack(&[card(Rank::Ten), card(Rank::Nine)]));
}

#[test]
fn bust_detection() {
    assert!(is_busted(&[
        card(Rank::King),
        card(Rank::Queen),
        card(Rank::Two)
    ]));
    assert!(!is_busted(&[card(Rank::King), card(Rank::Ace), card(Rank::Ten)]));
}

#[test]
fn card_display() {
    assert_eq!(Card::new(Suit::Hearts, Rank::Ace).to_string(), "A of hearts");
    assert_eq!(Card::new(Suit::Clubs, Rank::Ten).to_string(), "10 of clubs");
}

#[test]
fn payout_per_outcome() {
    let options = SessionOptions::default();
    assert_eq!(payout(Outcome::Blackjack, 25, &options), 87);
    assert_eq!(payout(Outcome::Win, 25, &options), 50);
    assert_eq!(payout(Outcome::Lose, 25, &options), 0);
    assert_eq!(payout(Outcome::Push, 25, &options), 25);

    let up = options.with_rounding_blackjack(RoundingMode::Up);
    assert_eq!(payout(Outcome::Blackjack, 25, &up), 88);
}

#[test]
fn ledger_bet_and_double() {
    let mut ledger = Ledger::new(500, 25);
    assert_eq!(ledger.place_bet(), Ok(25));
    assert_eq!(ledger.bankroll(), 475);

    assert_eq!(ledger.double(), Ok(50));
    assert_eq!(ledger.bankroll(), 450);
    assert_eq!(ledger.double(), Err(LedgerError::AlreadyDoubled));

    ledger.credit(100);
    ledger.reset_bet();
    assert_eq!(ledger.bankroll(), 550);
    assert_eq!(ledger.current_bet(), 25);
    assert!(!ledger.is_doubled());
}

#[test]
fn ledger_refuses_uncovered_bets() {
    let mut ledger = Ledger::new(20, 25);
    assert!(ledger.is_broke());
    assert_eq!(ledger.place_bet(), Err(LedgerError::InsufficientFunds));
    assert_eq!(ledger.bankroll(), 20);

    ledger.restart(500);
    assert!(!ledger.is_broke());
    assert_eq!(ledger.bankroll(), 500);
}

#[test]
fn result_trend() {
    let mut result = RoundResult {
        outcome: Outcome::Win,
        bet: 25,
        payout: 50,
        net: 25,
        player_value: 20,
        dealer_value: 18,
        dealer_bust: false,
    };
    assert_eq!(result.trend(), Trend::Up);
    assert_eq!(result.message(), "You Win!");

    result.outcome = Outcome::Push;
    result.payout = 25;
    assert_eq!(result.trend(), Trend::Flat);

    result.outcome = Outcome::Lose;
    result.payout = 0;
    assert_eq!(result.trend(), Trend::Down);
    assert_eq!(result.message(), "Dealer Wins");
}

#[test]
fn options_builder_sets_fields() {
    let options = SessionOptions::default()
        .with_initial_bankroll(1_000)
        .with_base_bet(10)
        .with_blackjack_pays(1.5)
        .with_rounding_blackjack(RoundingMode::Nearest);

    assert_eq!(options.initial_bankroll, 1_000);
    assert_eq!(options.base_bet, 10);
    assert_eq!(options.blackjack_pays, 1.5);
    assert_eq!(options.rounding_blackjack, RoundingMode::Nearest);
}

#[test]
fn dealer_threshold() {
    use birdjack::game::{DEALER_STANDS_ON, dealer_should_draw};

    assert_eq!(DEALER_STANDS_ON, 17);
    assert!(dealer_should_draw(16));
    assert!(dealer_should_draw(2));
    assert!(!dealer_should_draw(17));
    assert!(!dealer_should_draw(21));
    assert!(!dealer_should_draw(26));
}
