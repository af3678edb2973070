//! Errors surfaced by board loads and
//! mutations.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
  #[error("request to {path} failed: {message}")]
  Transport {
    path:    String,
    message: String
  },

  #[error("{method} {path} returned HTTP {status}")]
  HttpStatus {
    method: &'static str,
    path:   String,
    status: u16
  },

  #[error("failed to decode response from {path}: {message}")]
  Decode {
    path:    String,
    message: String
  },

  #[error("no card with identifier {0} on the board")]
  UnknownCard(Uuid),

  #[error("csrf cookie `{0}` is not set")]
  MissingCsrf(String)
}

impl BoardError {
  pub fn transport(
    path: &str,
    message: impl ToString
  ) -> Self {
    Self::Transport {
      path:    path.to_string(),
      message: message.to_string()
    }
  }

  pub fn decode(
    path: &str,
    message: impl ToString
  ) -> Self {
    Self::Decode {
      path:    path.to_string(),
      message: message.to_string()
    }
  }
}
