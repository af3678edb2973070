mod board_card;
mod board_column;
mod drag;
mod error_banner;
mod task_preview_modal;

pub use board_card::BoardCard;
pub use board_column::BoardColumn;
pub use drag::DroppedCard;
pub use error_banner::ErrorBanner;
pub use task_preview_modal::TaskPreviewModal;
