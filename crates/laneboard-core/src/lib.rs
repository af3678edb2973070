pub mod board;
pub mod config;
pub mod csrf;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod sources;
pub mod transport;

pub use board::{
  BoardRecord,
  BoardSource,
  Card,
  Column,
  DropRequest,
  FlowOutcome
};
pub use config::{
  BoardConfig,
  BoardTarget
};
pub use endpoints::Endpoints;
pub use error::BoardError;
pub use sources::{
  ProjectSource,
  TaskSource
};
pub use transport::Transport;
