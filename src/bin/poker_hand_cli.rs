// src/bin/poker_hand_cli.rs
//
// Демонстрация жизненного цикла раздачи: 4 игрока, 2000 фишек, 10/20.
// Логи: RUST_LOG=debug cargo run --bin poker_hand_cli

use poker_hand_engine::domain::{
    Chips, Game, GameStructure, GameType, Hand, Player, TournamentFormat,
};
use poker_hand_engine::infra::{
    Clock, InMemoryPokerStorage, PokerStorage, ShuffledDeckSource, SystemClock,
};
use poker_hand_engine::{HandLifecycle, HandResult};

fn print_hand(title: &str, hand: &Hand) {
    println!(
        "{title}: hand #{} | blinds {} | board [{}] | to act: {:?}",
        hand.id.unwrap_or_default(),
        hand.blind_level,
        hand.board,
        hand.current_to_act
    );
}

fn main() -> HandResult<()> {
    env_logger::builder().format_target(false).init();

    println!("=== HAND LIFECYCLE CLI ===\n");

    let lifecycle = HandLifecycle::new(
        InMemoryPokerStorage::new(),
        ShuffledDeckSource::system(),
        SystemClock,
    );
    let storage = lifecycle.storage();

    let structure = GameStructure::from_format(TournamentFormat::TwoHourSixPlayer, Chips(2000));
    let mut game = Game::new("Demo SNG", GameType::Tournament, structure);
    game.started = true;
    game.players_remaining = 4;
    let game_id = storage.save_game(&mut game)?;

    let mut seats = Vec::new();
    for position in 1..=4u32 {
        let mut player = Player::new(game_id, format!("Player {position}"), Chips(2000), position);
        seats.push(storage.save_player(&mut player)?);
    }
    game.button = Some(seats[0]);
    game.big_blind = Some(seats[2]);
    storage.save_game(&mut game)?;

    println!("Игра {game_id}: игроки {seats:?}, BTN={}, BB={}\n", seats[0], seats[2]);

    let mut hand = lifecycle.start_new_hand(&mut game)?;
    print_hand("start", &hand);
    for p in hand.participants_in_order() {
        println!("  rotation {} -> player {} (seat {})", p.rotation_order, p.player_id, p.position);
    }

    print_hand("flop ", lifecycle.flop(&mut hand)?);
    print_hand("turn ", lifecycle.turn(&mut hand)?);
    print_hand("river", lifecycle.river(&mut hand)?);

    if let Err(err) = lifecycle.river(&mut hand) {
        println!("\nПовторный ривер отклонён: {err}");
    }

    // Принудительно "просрочим" уровень, чтобы увидеть эскалацию.
    let now = lifecycle.clock().now_millis();
    game.blinds_mut().set_current_expiry(Some(now.saturating_sub(100)));
    storage.save_game(&mut game)?;
    let next = lifecycle.start_new_hand(&mut game)?;
    println!();
    print_hand("next ", &next);
    println!(
        "Новый уровень истекает через {} мс, борд #{:?} (предыдущий #{:?})",
        game.blinds().time_remaining(lifecycle.clock().now_millis()).unwrap_or(0),
        next.board.id,
        hand.board.id
    );

    lifecycle.finish_game(game_id);
    Ok(())
}
