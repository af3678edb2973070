use percent_encoding::percent_decode_str;

use crate::error::BoardError;

/// Looks up `name` in a `document.cookie`
/// string. Values are percent-decoded and
/// unquoted, matching what js-cookie hands
/// back.
pub fn read_cookie(
  cookies: &str,
  name: &str
) -> Option<String> {
  cookies
    .split(';')
    .filter_map(|pair| {
      pair.trim().split_once('=')
    })
    .find(|(key, _)| {
      decode(key).as_deref()
        == Some(name)
    })
    .and_then(|(_, value)| {
      let value = value
        .strip_prefix('"')
        .and_then(|v| {
          v.strip_suffix('"')
        })
        .unwrap_or(value);
      decode(value)
    })
}

/// Header name and value every mutating
/// request carries.
pub fn csrf_header(
  cookies: &str,
  cookie_name: &str,
  header_name: &str
) -> Result<(String, String), BoardError>
{
  let token = read_cookie(
    cookies,
    cookie_name
  )
  .filter(|token| !token.is_empty())
  .ok_or_else(|| {
    BoardError::MissingCsrf(
      cookie_name.to_string()
    )
  })?;
  Ok((header_name.to_string(), token))
}

fn decode(raw: &str) -> Option<String> {
  percent_decode_str(raw)
    .decode_utf8()
    .ok()
    .map(|value| value.into_owned())
}

#[cfg(test)]
mod tests {
  use super::{
    csrf_header,
    read_cookie
  };
  use crate::error::BoardError;

  #[test]
  fn finds_token_among_other_cookies() {
    let jar = "sessionid=abc; \
               csrftoken=T0k%2Ben; \
               theme=dark";
    assert_eq!(
      read_cookie(jar, "csrftoken")
        .as_deref(),
      Some("T0k+en")
    );
  }

  #[test]
  fn strips_quotes_and_keeps_equals() {
    assert_eq!(
      read_cookie(
        "csrftoken=\"a=b\"",
        "csrftoken"
      )
      .as_deref(),
      Some("a=b")
    );
  }

  #[test]
  fn missing_cookie_is_none() {
    assert!(
      read_cookie(
        "sessionid=abc",
        "csrftoken"
      )
      .is_none()
    );
    assert!(
      read_cookie("", "csrftoken")
        .is_none()
    );
  }

  #[test]
  fn header_pairs_configured_name_with_token()
  {
    let header = csrf_header(
      "sessionid=abc; csrftoken=T0k%2Ben",
      "csrftoken",
      "X-CSRFToken"
    )
    .expect("token present");
    assert_eq!(
      header,
      (
        "X-CSRFToken".to_string(),
        "T0k+en".to_string()
      )
    );
  }

  #[test]
  fn header_without_cookie_is_missing_csrf()
  {
    assert_eq!(
      csrf_header(
        "sessionid=abc",
        "csrftoken",
        "X-CSRFToken"
      ),
      Err(BoardError::MissingCsrf(
        "csrftoken".to_string()
      ))
    );
    assert_eq!(
      csrf_header(
        "csrftoken=",
        "csrftoken",
        "X-CSRFToken"
      ),
      Err(BoardError::MissingCsrf(
        "csrftoken".to_string()
      ))
    );
  }
}
