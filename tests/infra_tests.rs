// tests/infra_tests.rs

use std::collections::HashSet;

use poker_hand_engine::domain::{
    BlindLevel, Card, Chips, CommunityBoard, Game, GameStructure, GameType, Hand, HandHistory,
    Player, TournamentFormat,
};
use poker_hand_engine::engine::GameLocks;
use poker_hand_engine::infra::{
    CardSource, CardSourceError, Clock, DeterministicRng, IdGenerator, InMemoryPokerStorage,
    ManualClock, PokerStorage, RngSeed, ShuffledDeckSource, StorageError, SystemClock,
};

fn game() -> Game {
    Game::new(
        "Infra",
        GameType::Cash,
        GameStructure::from_format(TournamentFormat::OneHourSixPlayer, Chips(1000)),
    )
}

#[test]
fn id_generator_is_monotonic_per_entity() {
    let ids = IdGenerator::new();
    assert_eq!(ids.next_game_id(), 1);
    assert_eq!(ids.next_game_id(), 2);
    assert_eq!(ids.next_player_id(), 1);
    assert_eq!(ids.next_hand_id(), 1);
    assert_eq!(ids.next_board_id(), 1);
    assert_eq!(ids.next_board_id(), 2);
}

#[test]
fn ids_are_assigned_once_and_never_change() {
    let storage = InMemoryPokerStorage::new();
    let mut g = game();

    let id = storage.save_game(&mut g).unwrap();
    assert_eq!(g.id, Some(id));

    g.name = "Renamed".into();
    assert_eq!(storage.save_game(&mut g).unwrap(), id);
    assert_eq!(storage.load_game(id).unwrap().name, "Renamed");

    let mut b1 = CommunityBoard::new();
    let mut b2 = CommunityBoard::new();
    let id1 = storage.save_board(&mut b1).unwrap();
    let id2 = storage.save_board(&mut b2).unwrap();
    assert_ne!(id1, id2);
    assert_eq!(storage.board_count(), 2);
}

#[test]
fn roster_is_per_game_and_sorted_by_position() {
    let storage = InMemoryPokerStorage::new();
    let mut g1 = game();
    let mut g2 = game();
    let id1 = storage.save_game(&mut g1).unwrap();
    let id2 = storage.save_game(&mut g2).unwrap();

    for (game_id, pos) in [(id1, 3), (id1, 1), (id2, 2), (id1, 2)] {
        let mut p = Player::new(game_id, format!("p{pos}"), Chips(1000), pos);
        storage.save_player(&mut p).unwrap();
    }

    let roster: Vec<u32> = storage
        .players_for_game(id1)
        .unwrap()
        .iter()
        .map(|p| p.position)
        .collect();
    assert_eq!(roster, vec![1, 2, 3]);
    assert_eq!(storage.players_for_game(id2).unwrap().len(), 1);
}

fn empty_hand(game_id: u64) -> Hand {
    Hand {
        id: None,
        game_id,
        blind_level: BlindLevel::new(1, Chips(10), Chips(20)),
        participants: Vec::new(),
        board: CommunityBoard::new(),
        current_to_act: None,
        started_at: 0,
        history: HandHistory::new(),
    }
}

#[test]
fn hand_start_commit_writes_game_board_and_hand_together() {
    let storage = InMemoryPokerStorage::new();
    let mut g = game();
    let game_id = storage.save_game(&mut g).unwrap();

    g.blinds_mut().ensure_started(1_000);
    let mut hand = empty_hand(game_id);
    let hand_id = storage.commit_hand_start(&mut g, &mut hand).unwrap();

    assert_eq!(hand.id, Some(hand_id));
    let board_id = hand.board.id.unwrap();
    assert_eq!(storage.load_board(board_id).unwrap(), hand.board);
    assert_eq!(storage.load_hand(hand_id).unwrap(), hand);
    assert_eq!(storage.load_game(game_id).unwrap(), g);
    assert_eq!(storage.board_count(), 1);
}

#[test]
fn hand_commit_keeps_board_in_sync() {
    let storage = InMemoryPokerStorage::new();
    let mut g = game();
    let game_id = storage.save_game(&mut g).unwrap();
    let mut hand = empty_hand(game_id);
    let hand_id = storage.commit_hand_start(&mut g, &mut hand).unwrap();

    let flop: [Card; 3] = ["Ah".parse().unwrap(), "Td".parse().unwrap(), "7c".parse().unwrap()];
    hand.board.deal_flop(flop).unwrap();
    assert_eq!(storage.commit_hand(&mut hand).unwrap(), hand_id);

    assert_eq!(storage.load_board(hand.board.id.unwrap()).unwrap().cards(), flop.to_vec());
    assert_eq!(storage.load_hand(hand_id).unwrap().board, hand.board);
    assert_eq!(storage.board_count(), 1);
}

#[test]
fn missing_entities_are_not_found() {
    let storage = InMemoryPokerStorage::new();
    assert_eq!(
        storage.load_game(42).unwrap_err(),
        StorageError::NotFound { entity: "game", id: 42 }
    );
    assert!(storage.load_player(1).is_err());
    assert!(storage.load_hand(1).is_err());
    assert!(storage.load_board(1).is_err());
    assert!(storage.players_for_game(7).is_err());
}

#[test]
fn deck_source_never_repeats_cards_within_a_hand() {
    let source = ShuffledDeckSource::system();
    let mut seen = HashSet::new();

    for _ in 0..17 {
        for card in source.next_cards(1, 1, 3).unwrap() {
            assert!(seen.insert(card), "карта {card} выдана дважды");
        }
    }
    assert_eq!(source.remaining(1), Some(1));

    assert_eq!(
        source.next_cards(1, 1, 3),
        Err(CardSourceError::DeckExhausted {
            hand_id: 1,
            requested: 3,
            remaining: 1,
        })
    );
    // Неудачный запрос колоду не трогает.
    assert_eq!(source.next_cards(1, 1, 1).unwrap().len(), 1);
}

#[test]
fn hands_get_independent_decks() {
    let source = ShuffledDeckSource::with_rng(DeterministicRng::from_u64(5));
    source.next_cards(1, 1, 3).unwrap();
    source.next_cards(1, 2, 3).unwrap();

    assert_eq!(source.remaining(1), Some(49));
    assert_eq!(source.remaining(2), Some(49));

    source.forget_hand(1);
    assert_eq!(source.remaining(1), None);
}

#[test]
fn seeded_source_is_reproducible_per_hand() {
    let a = ShuffledDeckSource::seeded(RngSeed::from_u64(9));
    let b = ShuffledDeckSource::seeded(RngSeed::from_u64(9));

    // Порядок обращения к раздачам не влияет на их колоды.
    let a2 = a.next_cards(1, 2, 3).unwrap();
    let a1 = a.next_cards(1, 1, 3).unwrap();
    let b1 = b.next_cards(1, 1, 3).unwrap();
    let b2 = b.next_cards(1, 2, 3).unwrap();

    assert_eq!(a1, b1);
    assert_eq!(a2, b2);
}

#[test]
fn released_hand_drops_its_deck() {
    let source = ShuffledDeckSource::system();
    source.next_cards(1, 3, 3).unwrap();
    assert_eq!(source.remaining(3), Some(49));

    source.release_hand(3);
    assert_eq!(source.remaining(3), None);
}

#[test]
fn manual_clock_moves_only_when_told() {
    let clock = ManualClock::new(1_000);
    assert_eq!(clock.now_millis(), 1_000);
    clock.advance_millis(500);
    clock.advance_minutes(1);
    assert_eq!(clock.now_millis(), 61_500);
    clock.set(7);
    assert_eq!(clock.now_millis(), 7);

    assert!(SystemClock.now_millis() > 1_600_000_000_000);
}

#[test]
fn game_locks_serialize_one_game() {
    let locks = GameLocks::new();
    let mut counter = 0u32;

    {
        let counter = parking_lot::Mutex::new(&mut counter);
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        locks.with_game(1, || **counter.lock() += 1);
                    }
                });
            }
        });
    }

    assert_eq!(counter, 800);
    assert_eq!(locks.tracked_games(), 1);
    locks.release(1);
    assert_eq!(locks.tracked_games(), 0);
}

#[test]
fn game_locks_do_not_block_other_games() {
    let locks = GameLocks::new();
    let inner = locks.with_game(1, || locks.with_game(2, || 42));
    assert_eq!(inner, 42);
    assert_eq!(locks.tracked_games(), 2);
}
