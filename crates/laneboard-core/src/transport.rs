use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::BoardError;

/// The HTTP calls a board needs. The
/// browser build talks to the backend
/// through `fetch`; tests record calls in
/// memory.
///
/// Mutating calls are expected to attach
/// the CSRF header themselves.
#[allow(async_fn_in_trait)]
pub trait Transport {
  async fn get_json<T>(
    &self,
    path: &str
  ) -> Result<T, BoardError>
  where
    T: DeserializeOwned;

  async fn patch_json<B>(
    &self,
    path: &str,
    body: &B
  ) -> Result<(), BoardError>
  where
    B: Serialize + ?Sized;

  /// `form` is already
  /// `application/x-www-form-urlencoded`.
  async fn post_form(
    &self,
    path: &str,
    form: &str
  ) -> Result<(), BoardError>;
}

/// Encodes key/value pairs the way
/// `URLSearchParams` does.
pub fn encode_form(
  pairs: &[(&str, &str)]
) -> String {
  url::form_urlencoded::Serializer::new(
    String::new()
  )
  .extend_pairs(pairs.iter())
  .finish()
}

#[cfg(test)]
mod tests {
  use super::encode_form;

  #[test]
  fn encodes_like_url_search_params() {
    assert_eq!(
      encode_form(&[("above", "12")]),
      "above=12"
    );
    assert_eq!(
      encode_form(&[(
        "comment",
        "C'est fait & validé"
      )]),
      "comment=C%27est+fait+%26+valid%C3%A9"
    );
  }

  #[test]
  fn empty_comment_is_still_sent() {
    assert_eq!(
      encode_form(&[("comment", "")]),
      "comment="
    );
  }
}
