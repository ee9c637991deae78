use std::collections::HashMap;

use parking_lot::RwLock;
use thiserror::Error;

use crate::domain::board::CommunityBoard;
use crate::domain::game::Game;
use crate::domain::hand::Hand;
use crate::domain::player::Player;
use crate::domain::{BoardId, GameId, HandId, PlayerId};
use crate::infra::ids::IdGenerator;

/// Ошибки хранилища. Движок их не обрабатывает, а пробрасывает как есть.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("{entity} с id={id} не найден")]
    NotFound { entity: &'static str, id: u64 },

    #[error("ошибка бэкенда хранилища: {0}")]
    Backend(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Абстракция хранилища игр / игроков / раздач / бордов.
///
/// `save_*` назначает ID при первом сохранении (записывает его в сущность)
/// и дальше его не меняет. Методы берут `&self`: реализация сама отвечает
/// за внутреннюю синхронизацию, чтобы один движок можно было делить между потоками.
pub trait PokerStorage: Send + Sync {
    fn load_game(&self, id: GameId) -> StorageResult<Game>;
    fn save_game(&self, game: &mut Game) -> StorageResult<GameId>;

    fn load_player(&self, id: PlayerId) -> StorageResult<Player>;
    fn save_player(&self, player: &mut Player) -> StorageResult<PlayerId>;
    /// Рассадка игры, отсортированная по `position`.
    fn players_for_game(&self, game_id: GameId) -> StorageResult<Vec<Player>>;

    fn load_hand(&self, id: HandId) -> StorageResult<Hand>;
    fn save_hand(&self, hand: &mut Hand) -> StorageResult<HandId>;

    fn load_board(&self, id: BoardId) -> StorageResult<CommunityBoard>;
    fn save_board(&self, board: &mut CommunityBoard) -> StorageResult<BoardId>;

    /// Старт раздачи одной транзакцией: игра (расписание блайндов),
    /// новый борд и сама раздача. Либо записано всё, либо ничего.
    fn commit_hand_start(&self, game: &mut Game, hand: &mut Hand) -> StorageResult<HandId>;

    /// Раздача вместе с её бордом одной транзакцией.
    fn commit_hand(&self, hand: &mut Hand) -> StorageResult<HandId>;
}

#[derive(Debug, Default)]
struct Tables {
    games: HashMap<GameId, Game>,
    players: HashMap<PlayerId, Player>,
    hands: HashMap<HandId, Hand>,
    boards: HashMap<BoardId, CommunityBoard>,
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryPokerStorage {
    ids: IdGenerator,
    tables: RwLock<Tables>,
}

impl InMemoryPokerStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand_count(&self) -> usize {
        self.tables.read().hands.len()
    }

    pub fn board_count(&self) -> usize {
        self.tables.read().boards.len()
    }
}

fn not_found(entity: &'static str, id: u64) -> StorageError {
    StorageError::NotFound { entity, id }
}

impl PokerStorage for InMemoryPokerStorage {
    fn load_game(&self, id: GameId) -> StorageResult<Game> {
        self.tables
            .read()
            .games
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found("game", id))
    }

    fn save_game(&self, game: &mut Game) -> StorageResult<GameId> {
        let id = *game.id.get_or_insert_with(|| self.ids.next_game_id());
        self.tables.write().games.insert(id, game.clone());
        Ok(id)
    }

    fn load_player(&self, id: PlayerId) -> StorageResult<Player> {
        self.tables
            .read()
            .players
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found("player", id))
    }

    fn save_player(&self, player: &mut Player) -> StorageResult<PlayerId> {
        let id = *player.id.get_or_insert_with(|| self.ids.next_player_id());
        self.tables.write().players.insert(id, player.clone());
        Ok(id)
    }

    fn players_for_game(&self, game_id: GameId) -> StorageResult<Vec<Player>> {
        let tables = self.tables.read();
        if !tables.games.contains_key(&game_id) {
            return Err(not_found("game", game_id));
        }
        let mut seated: Vec<Player> = tables
            .players
            .values()
            .filter(|p| p.game_id == game_id)
            .cloned()
            .collect();
        seated.sort_by_key(|p| p.position);
        Ok(seated)
    }

    fn load_hand(&self, id: HandId) -> StorageResult<Hand> {
        let tables = self.tables.read();
        let mut hand = tables
            .hands
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found("hand", id))?;
        // Борд мог сохраняться отдельно после раздачи карт – берём свежую версию.
        if let Some(board) = hand.board.id.and_then(|bid| tables.boards.get(&bid)) {
            hand.board = board.clone();
        }
        Ok(hand)
    }

    fn save_hand(&self, hand: &mut Hand) -> StorageResult<HandId> {
        let id = *hand.id.get_or_insert_with(|| self.ids.next_hand_id());
        self.tables.write().hands.insert(id, hand.clone());
        Ok(id)
    }

    fn load_board(&self, id: BoardId) -> StorageResult<CommunityBoard> {
        self.tables
            .read()
            .boards
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found("board", id))
    }

    fn save_board(&self, board: &mut CommunityBoard) -> StorageResult<BoardId> {
        let id = *board.id.get_or_insert_with(|| self.ids.next_board_id());
        self.tables.write().boards.insert(id, board.clone());
        Ok(id)
    }

    fn commit_hand_start(&self, game: &mut Game, hand: &mut Hand) -> StorageResult<HandId> {
        // Весь коммит под одним write-локом: читатели не видят половину.
        let mut tables = self.tables.write();
        let game_id = *game.id.get_or_insert_with(|| self.ids.next_game_id());
        let board_id = *hand.board.id.get_or_insert_with(|| self.ids.next_board_id());
        let hand_id = *hand.id.get_or_insert_with(|| self.ids.next_hand_id());

        tables.games.insert(game_id, game.clone());
        tables.boards.insert(board_id, hand.board.clone());
        tables.hands.insert(hand_id, hand.clone());
        Ok(hand_id)
    }

    fn commit_hand(&self, hand: &mut Hand) -> StorageResult<HandId> {
        let mut tables = self.tables.write();
        let board_id = *hand.board.id.get_or_insert_with(|| self.ids.next_board_id());
        let hand_id = *hand.id.get_or_insert_with(|| self.ids.next_hand_id());

        tables.boards.insert(board_id, hand.board.clone());
        tables.hands.insert(hand_id, hand.clone());
        Ok(hand_id)
    }
}
