// src/engine/lifecycle.rs

use log::{debug, info, warn};

use crate::domain::board::{BoardStage, CommunityBoard};
use crate::domain::card::Card;
use crate::domain::game::Game;
use crate::domain::hand::Hand;
use crate::domain::history::{HandEventKind, HandHistory};
use crate::domain::GameId;
use crate::engine::errors::{HandError, HandResult};
use crate::engine::game_locks::GameLocks;
use crate::engine::seat_order::compute_seat_order;
use crate::infra::card_source::{CardSource, CardSourceError};
use crate::infra::clock::Clock;
use crate::infra::persistence::PokerStorage;

/// Сервис жизненного цикла раздачи:
/// - `start_new_hand` – уровень блайндов, рассадка, новый пустой борд;
/// - `flop` / `turn` / `river` – открытие борда строго по порядку.
///
/// Все операции одной игры идут под её локом (`GameLocks`), разные игры
/// работают параллельно. Под локом состояние читается из хранилища, а
/// результат пишется одним коммитом. Операции "всё или ничего": при ошибке
/// не меняется ни хранилище, ни игра / раздача у вызывающего.
pub struct HandLifecycle<S, D, K> {
    storage: S,
    cards: D,
    clock: K,
    locks: GameLocks,
}

impl<S, D, K> HandLifecycle<S, D, K>
where
    S: PokerStorage,
    D: CardSource,
    K: Clock,
{
    pub fn new(storage: S, cards: D, clock: K) -> Self {
        Self {
            storage,
            cards,
            clock,
            locks: GameLocks::new(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn cards(&self) -> &D {
        &self.cards
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    pub fn locks(&self) -> &GameLocks {
        &self.locks
    }

    /// Начать новую раздачу в игре.
    ///
    /// Игра должна быть сохранена (иметь id). Под локом игра перечитывается
    /// из хранилища: правки, не сохранённые вызывающим, не учитываются, а
    /// устаревшая копия не откатит уже поднятый уровень блайндов.
    /// После успеха `game` – сохранённая версия с обновлённым расписанием.
    pub fn start_new_hand(&self, game: &mut Game) -> HandResult<Hand> {
        let game_id = game.id.ok_or_else(|| {
            HandError::InvalidConfiguration(format!("игра '{}' не сохранена (нет id)", game.name))
        })?;
        let (updated, hand) = self.locks.with_game(game_id, || self.begin_hand(game_id))?;
        *game = updated;
        Ok(hand)
    }

    /// То же, но по id игры.
    pub fn start_new_hand_for(&self, game_id: GameId) -> HandResult<Hand> {
        self.locks
            .with_game(game_id, || self.begin_hand(game_id))
            .map(|(_, hand)| hand)
    }

    pub fn flop<'h>(&self, hand: &'h mut Hand) -> HandResult<&'h Hand> {
        self.reveal(hand, BoardStage::Flop)
    }

    pub fn turn<'h>(&self, hand: &'h mut Hand) -> HandResult<&'h Hand> {
        self.reveal(hand, BoardStage::Turn)
    }

    pub fn river<'h>(&self, hand: &'h mut Hand) -> HandResult<&'h Hand> {
        self.reveal(hand, BoardStage::River)
    }

    /// Игра завершена: забыть её лок. Звать, когда по игре больше нет операций.
    pub fn finish_game(&self, game_id: GameId) {
        self.locks.release(game_id);
        debug!("game {game_id}: lock released");
    }

    fn begin_hand(&self, game_id: GameId) -> HandResult<(Game, Hand)> {
        let mut game = self.storage.load_game(game_id)?;
        if !game.started {
            return Err(HandError::InvalidConfiguration(format!(
                "игра {game_id} ещё не запущена"
            )));
        }
        game.structure
            .validate()
            .map_err(HandError::InvalidConfiguration)?;

        let button = game.button.ok_or_else(|| {
            HandError::InvalidConfiguration(format!("в игре {game_id} не назначен BTN"))
        })?;
        let big_blind = game.big_blind.ok_or_else(|| {
            HandError::InvalidConfiguration(format!("в игре {game_id} не назначен BB"))
        })?;

        // Время читаем один раз на всю проверку таймера.
        let now = self.clock.now_millis();

        let mut blinds = game.structure.blinds.clone();
        let previous_level = blinds.current_level().cloned();
        if blinds.ensure_started(now) {
            debug!("game {game_id}: blind timer started, expires at {:?}", blinds.current_expiry());
        }
        blinds.advance_if_expired(now);
        let level = blinds.current_level().cloned().ok_or_else(|| {
            HandError::InvalidConfiguration(format!("в игре {game_id} пустое расписание блайндов"))
        })?;

        let roster = self.storage.players_for_game(game_id)?;
        let order = compute_seat_order(&roster, button, big_blind)?;

        let mut history = HandHistory::new();
        history.push(HandEventKind::HandStarted {
            game_id,
            started_at: now,
            button,
            big_blind,
            first_to_act: order.first_to_act.player_id,
        });
        if let Some(from) = previous_level.filter(|prev| *prev != level) {
            info!("game {game_id}: blinds raised {from} -> {level}");
            history.push(HandEventKind::BlindLevelRaised {
                from,
                to: level.clone(),
            });
        }

        // Каждой раздаче – свой новый борд (id выдаст коммит).
        let mut hand = Hand {
            id: None,
            game_id,
            blind_level: level,
            participants: order.participants,
            board: CommunityBoard::new(),
            current_to_act: Some(order.first_to_act.player_id),
            started_at: now,
            history,
        };

        game.structure.blinds = blinds;
        let hand_id = self.storage.commit_hand_start(&mut game, &mut hand)?;

        info!(
            "game {game_id}: hand {hand_id} started at {} with {} players, first to act: player {}",
            hand.blind_level,
            hand.participants.len(),
            order.first_to_act.player_id
        );

        Ok((game, hand))
    }

    fn reveal<'h>(&self, hand: &'h mut Hand, stage: BoardStage) -> HandResult<&'h Hand> {
        let game_id = hand.game_id;
        self.locks
            .with_game(game_id, || self.reveal_locked(&mut *hand, stage))?;
        Ok(hand)
    }

    fn reveal_locked(&self, hand: &mut Hand, stage: BoardStage) -> HandResult<()> {
        // Сначала проверка стадии: на неверный вызов карты из колоды не тянем.
        if let Err(err) = hand.board.check_can_reveal(stage) {
            warn!("hand {:?}: {err}", hand.id);
            return Err(err.into());
        }

        let hand_id = hand.id.ok_or_else(|| {
            HandError::InvalidConfiguration("раздача не сохранена (нет id)".into())
        })?;

        // Стадию решает сохранённый борд: копия вызывающего может отставать,
        // если улицу уже открыли через другую копию той же раздачи.
        let mut updated = self.storage.load_hand(hand_id)?;
        if updated.game_id != hand.game_id {
            return Err(HandError::InvalidConfiguration(format!(
                "раздача {hand_id} принадлежит игре {}, а не {}",
                updated.game_id, hand.game_id
            )));
        }
        if let Err(err) = updated.board.check_can_reveal(stage) {
            warn!("hand {hand_id}: stale copy, {err}");
            return Err(err.into());
        }

        let cards = self
            .cards
            .next_cards(updated.game_id, hand_id, stage.cards_revealed())?;

        deal_onto(&mut updated.board, stage, &cards)?;
        updated
            .history
            .push(HandEventKind::BoardDealt { stage, cards });

        self.storage.commit_hand(&mut updated)?;
        if stage == BoardStage::River {
            self.cards.release_hand(hand_id);
        }
        *hand = updated;

        debug!("hand {hand_id}: {stage:?} dealt, board = {}", hand.board);
        Ok(())
    }
}

/// Разложить карты из колоды в слоты борда (количество сверяется здесь же).
fn deal_onto(board: &mut CommunityBoard, stage: BoardStage, cards: &[Card]) -> HandResult<()> {
    match (stage, cards) {
        (BoardStage::Flop, &[c1, c2, c3]) => board.deal_flop([c1, c2, c3])?,
        (BoardStage::Turn, &[card]) => board.deal_turn(card)?,
        (BoardStage::River, &[card]) => board.deal_river(card)?,
        _ => {
            return Err(CardSourceError::WrongCount {
                requested: stage.cards_revealed(),
                delivered: cards.len(),
            }
            .into())
        }
    }
    Ok(())
}
