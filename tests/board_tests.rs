// tests/board_tests.rs
//
// Машина состояний борда отдельно от хранилища и колоды.

use poker_hand_engine::domain::{BoardStage, Card, CommunityBoard, InvalidStageError};

fn cards(list: &str) -> Vec<Card> {
    list.split_whitespace().map(|s| s.parse().unwrap()).collect()
}

fn flop() -> [Card; 3] {
    let c = cards("Ah Kd 7c");
    [c[0], c[1], c[2]]
}

#[test]
fn new_board_is_empty_preflop() {
    let board = CommunityBoard::new();
    assert_eq!(board.stage(), BoardStage::Preflop);
    assert_eq!(board.id, None);
    assert!(board.is_empty());
    assert!(!board.is_complete());
    assert_eq!(board.to_string(), "-");
    for slot in [board.flop1(), board.flop2(), board.flop3(), board.turn(), board.river()] {
        assert_eq!(slot, None);
    }
}

#[test]
fn full_sequence_fills_slots_in_order() {
    let mut board = CommunityBoard::new();
    let turn_river = cards("2s 9h");

    board.deal_flop(flop()).unwrap();
    assert_eq!(board.stage(), BoardStage::Flop);
    assert_eq!(board.to_string(), "Ah Kd 7c");

    board.deal_turn(turn_river[0]).unwrap();
    assert_eq!(board.stage(), BoardStage::Turn);

    board.deal_river(turn_river[1]).unwrap();
    assert_eq!(board.stage(), BoardStage::River);
    assert!(board.is_complete());
    assert_eq!(board.cards(), cards("Ah Kd 7c 2s 9h"));
    assert_eq!(board.turn(), Some(turn_river[0]));
    assert_eq!(board.river(), Some(turn_river[1]));
}

#[test]
fn skipped_stages_are_rejected() {
    let mut board = CommunityBoard::new();
    let card: Card = "Qs".parse().unwrap();

    assert_eq!(
        board.deal_turn(card),
        Err(InvalidStageError {
            target: BoardStage::Turn,
            expected: BoardStage::Flop,
            actual: BoardStage::Preflop,
        })
    );
    assert!(board.deal_river(card).is_err());

    board.deal_flop(flop()).unwrap();
    assert_eq!(
        board.deal_river(card),
        Err(InvalidStageError {
            target: BoardStage::River,
            expected: BoardStage::Turn,
            actual: BoardStage::Flop,
        })
    );
    assert_eq!(board.stage(), BoardStage::Flop);
}

#[test]
fn every_stage_can_be_dealt_only_once() {
    let mut board = CommunityBoard::new();
    let extra = cards("2c 3c 4c");

    board.deal_flop(flop()).unwrap();
    assert!(board.deal_flop([extra[0], extra[1], extra[2]]).is_err());

    board.deal_turn(extra[0]).unwrap();
    assert!(board.deal_turn(extra[1]).is_err());
    assert!(board.deal_flop(flop()).is_err());

    board.deal_river(extra[1]).unwrap();
    assert!(board.deal_river(extra[2]).is_err());
    assert!(board.deal_turn(extra[2]).is_err());

    // Ничего не перезаписано.
    assert_eq!(board.cards(), cards("Ah Kd 7c 2c 3c"));
}

#[test]
fn preflop_can_never_be_revealed() {
    let board = CommunityBoard::new();
    assert!(board.check_can_reveal(BoardStage::Preflop).is_err());
    assert!(board.check_can_reveal(BoardStage::Flop).is_ok());
}

#[test]
fn stage_metadata() {
    assert_eq!(BoardStage::Flop.cards_revealed(), 3);
    assert_eq!(BoardStage::Turn.cards_revealed(), 1);
    assert_eq!(BoardStage::River.cards_revealed(), 1);
    assert_eq!(BoardStage::River.required_before(), Some(BoardStage::Turn));
    assert_eq!(BoardStage::Preflop.required_before(), None);
    assert!(BoardStage::Preflop < BoardStage::River);
}

#[test]
fn error_message_names_the_stages() {
    let mut board = CommunityBoard::new();
    let err = board.deal_turn("Qs".parse().unwrap()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Turn"));
    assert!(msg.contains("Preflop"));
}
