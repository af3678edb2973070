//! Display helpers for card and modal
//! content.

use std::str::FromStr;

use chrono::{
  DateTime,
  NaiveDate,
  NaiveDateTime
};
use pulldown_cmark::{
  CowStr,
  Event,
  Options,
  Parser,
  Tag,
  html
};

pub const DEFAULT_TRUNCATE: usize = 30;

/// Cuts `input` to `size` UTF-16 units,
/// the length browsers report, and
/// appends an ellipsis when it was longer.
/// A character straddling the limit is
/// dropped whole.
pub fn truncate(
  input: &str,
  size: usize
) -> String {
  if input.encode_utf16().count() <= size
  {
    return input.to_string();
  }

  let mut units = 0;
  let head: String = input
    .chars()
    .take_while(|c| {
      units += c.len_utf16();
      units <= size
    })
    .collect();
  format!("{head}...")
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum DateDisplay {
  /// `31/01/2022`
  #[default]
  LocaleDate,
  /// `Mon Jan 31 2022`
  DateString
}

impl FromStr for DateDisplay {
  type Err = String;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s.trim() {
      | "locale_date"
      | "toLocaleDateString" => {
        Ok(Self::LocaleDate)
      }
      | "date_string" | "toDateString" => {
        Ok(Self::DateString)
      }
      | other => {
        Err(format!(
          "unknown date display `{other}`"
        ))
      }
    }
  }
}

/// Parses the date shapes the backend
/// emits. The wall-clock time of the
/// given offset is kept.
pub fn parse_backend_date(
  raw: &str
) -> Option<NaiveDateTime> {
  let raw = raw.trim();
  if let Ok(parsed) =
    DateTime::parse_from_rfc3339(raw)
  {
    return Some(parsed.naive_local());
  }
  if let Ok(parsed) =
    NaiveDateTime::parse_from_str(
      raw,
      "%Y-%m-%dT%H:%M:%S%.f"
    )
  {
    return Some(parsed);
  }
  NaiveDate::parse_from_str(
    raw, "%Y-%m-%d"
  )
  .ok()
  .and_then(|date| {
    date.and_hms_opt(0, 0, 0)
  })
}

/// Card date. Unparseable input is shown
/// as received.
pub fn format_date_display(
  raw: &str,
  mode: DateDisplay
) -> String {
  let Some(parsed) =
    parse_backend_date(raw)
  else {
    return raw.to_string();
  };

  let pattern = match mode {
    | DateDisplay::LocaleDate => {
      "%d/%m/%Y"
    }
    | DateDisplay::DateString => {
      "%a %b %d %Y"
    }
  };
  parsed.format(pattern).to_string()
}

/// Follow-up timestamp.
pub fn format_timestamp(
  raw: &str
) -> String {
  match parse_backend_date(raw) {
    | Some(parsed) => {
      parsed
        .format("%d/%m/%Y %H:%M:%S")
        .to_string()
    }
    | None => raw.to_string()
  }
}

const UNSAFE_SCHEMES: [&str; 3] =
  ["javascript:", "vbscript:", "data:"];

/// Whether a link target would run code
/// or inline content when followed.
/// Browsers ignore ASCII whitespace and
/// control characters inside the scheme.
fn is_unsafe_url(url: &str) -> bool {
  let squashed: String = url
    .chars()
    .filter(|c| {
      !c.is_ascii_whitespace()
        && !c.is_ascii_control()
    })
    .take(16)
    .collect::<String>()
    .to_ascii_lowercase();
  UNSAFE_SCHEMES
    .iter()
    .any(|scheme| {
      squashed.starts_with(scheme)
    })
}

fn neutralize(
  url: CowStr<'_>
) -> CowStr<'_> {
  if is_unsafe_url(&url) {
    tracing::warn!(
      url = &*url,
      "dropping unsafe link target"
    );
    CowStr::Borrowed("#")
  } else {
    url
  }
}

/// Renders markdown to HTML. Raw HTML in
/// the source comes out escaped and
/// script-bearing link or image targets
/// are replaced by `#`.
pub fn render_markdown(
  content: &str
) -> String {
  let options = Options::ENABLE_TABLES
    | Options::ENABLE_STRIKETHROUGH;
  let parser =
    Parser::new_ext(content, options)
      .map(|event| {
        match event {
          | Event::Html(raw)
          | Event::InlineHtml(raw) => {
            Event::Text(raw)
          }
          | Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id
          }) => {
            Event::Start(Tag::Link {
              link_type,
              dest_url: neutralize(
                dest_url
              ),
              title,
              id
            })
          }
          | Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id
          }) => {
            Event::Start(Tag::Image {
              link_type,
              dest_url: neutralize(
                dest_url
              ),
              title,
              id
            })
          }
          | other => other
        }
      });

  let mut out = String::new();
  html::push_html(&mut out, parser);
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truncate_counts_characters() {
    assert_eq!(
      truncate("Réhabilitation", 30),
      "Réhabilitation"
    );
    assert_eq!(
      truncate("éééééé", 3),
      "ééé..."
    );
    assert_eq!(truncate("abc", 3), "abc");
  }

  #[test]
  fn truncate_counts_utf16_units() {
    assert_eq!(
      truncate("😀😀", 4),
      "😀😀"
    );
    assert_eq!(
      truncate("😀😀", 3),
      "😀..."
    );
    assert_eq!(
      truncate("a😀b", 2),
      "a..."
    );
  }

  #[test]
  fn formats_card_dates() {
    let raw =
      "2022-01-31T17:10:00.123456+01:00";
    assert_eq!(
      format_date_display(
        raw,
        DateDisplay::LocaleDate
      ),
      "31/01/2022"
    );
    assert_eq!(
      format_date_display(
        "2022-02-01",
        DateDisplay::DateString
      ),
      "Tue Feb 01 2022"
    );
    assert_eq!(
      format_date_display(
        "hier",
        DateDisplay::LocaleDate
      ),
      "hier"
    );
  }

  #[test]
  fn formats_followup_timestamps() {
    assert_eq!(
      format_timestamp(
        "2022-01-31T17:10:05Z"
      ),
      "31/01/2022 17:10:05"
    );
  }

  #[test]
  fn date_display_accepts_js_names() {
    assert_eq!(
      "toDateString".parse(),
      Ok(DateDisplay::DateString)
    );
    assert!(
      "iso"
        .parse::<DateDisplay>()
        .is_err()
    );
  }

  #[test]
  fn markdown_escapes_raw_html() {
    let out = render_markdown(
      "**ok** <script>x</script>"
    );
    assert!(
      out.contains("<strong>ok</strong>")
    );
    assert!(!out.contains("<script>"));
    assert!(out.contains("&lt;script&gt;"));
  }

  #[test]
  fn markdown_drops_script_link_targets() {
    let out = render_markdown(
      "[clic](javascript:alert(document.cookie))"
    );
    assert!(
      !out.contains("href=\"javascript:")
    );
    assert!(out.contains("href=\"#\""));

    let out = render_markdown(
      "<JavaScript:alert(1)> \
       ![x](data:text/html;base64,PHNjcmlwdD4=) \
       [ok](https://example.org/a)"
    );
    assert!(
      !out
        .to_ascii_lowercase()
        .contains("href=\"javascript:")
    );
    assert!(!out.contains("src=\"data:"));
    assert!(out.contains(
      "href=\"https://example.org/a\""
    ));
  }
}
