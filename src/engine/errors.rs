use thiserror::Error;

use crate::domain::board::InvalidStageError;
use crate::infra::card_source::CardSourceError;
use crate::infra::persistence::StorageError;

/// Ошибки движка раздачи.
///
/// Ни одна из них не ретраится автоматически: всё сразу отдаётся вызывающему.
#[derive(Debug, Error)]
pub enum HandError {
    /// Открытие борда не по порядку (пропуск или повтор улицы).
    #[error(transparent)]
    InvalidStage(#[from] InvalidStageError),

    /// Пустая рассадка, BTN/BB не за столом, игра не запущена, битое расписание блайндов.
    #[error("Некорректная конфигурация: {0}")]
    InvalidConfiguration(String),

    /// Ошибка хранилища – пробрасываем как есть.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Ошибка источника карт – пробрасываем как есть.
    #[error(transparent)]
    CardSource(#[from] CardSourceError),
}

impl HandError {
    /// Ошибка внешнего коллаборатора (хранилище / колода), а не вызывающего кода.
    pub fn is_collaborator(&self) -> bool {
        matches!(self, HandError::Storage(_) | HandError::CardSource(_))
    }
}

pub type HandResult<T> = Result<T, HandError>;
