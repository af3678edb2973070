use gloo::net::http::{
  Request,
  RequestBuilder,
  Response
};
use laneboard_core::csrf::csrf_header;
use laneboard_core::{
  BoardConfig,
  BoardError,
  ProjectSource,
  TaskSource,
  Transport
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{
  HtmlDocument,
  RequestCache,
  RequestCredentials,
  RequestMode
};

/// `fetch`-backed transport. Same-origin
/// credentials carry the session; the
/// CSRF token is read from its cookie on
/// every mutating call.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserTransport {
  csrf_cookie: String,
  csrf_header: String
}

impl BrowserTransport {
  pub fn from_config(
    config: &BoardConfig
  ) -> Self {
    Self {
      csrf_cookie: config
        .csrf_cookie
        .clone(),
      csrf_header: config
        .csrf_header
        .clone()
    }
  }

  fn csrf_pair(
    &self
  ) -> Result<(String, String), BoardError>
  {
    let cookies =
      gloo::utils::document()
        .dyn_into::<HtmlDocument>()
        .ok()
        .and_then(|document| {
          document.cookie().ok()
        })
        .unwrap_or_default();

    csrf_header(
      &cookies,
      &self.csrf_cookie,
      &self.csrf_header
    )
  }

  fn mutating(
    &self,
    builder: RequestBuilder
  ) -> Result<RequestBuilder, BoardError>
  {
    let (header, token) =
      self.csrf_pair()?;
    Ok(
      builder
        .cache(RequestCache::NoCache)
        .mode(RequestMode::SameOrigin)
        .credentials(
          RequestCredentials::SameOrigin
        )
        .header(&header, &token)
    )
  }
}

async fn send(
  method: &'static str,
  path: &str,
  request: Request
) -> Result<Response, BoardError> {
  tracing::debug!(method, path, "sending request");
  let response = request
    .send()
    .await
    .map_err(|e| {
      BoardError::transport(path, e)
    })?;

  if !response.ok() {
    return Err(BoardError::HttpStatus {
      method,
      path: path.to_string(),
      status: response.status()
    });
  }
  Ok(response)
}

impl Transport for BrowserTransport {
  async fn get_json<T>(
    &self,
    path: &str
  ) -> Result<T, BoardError>
  where
    T: DeserializeOwned
  {
    let request = Request::get(path)
      .credentials(
        RequestCredentials::SameOrigin
      )
      .build()
      .map_err(|e| {
        BoardError::transport(path, e)
      })?;

    send("GET", path, request)
      .await?
      .json::<T>()
      .await
      .map_err(|e| {
        BoardError::decode(path, e)
      })
  }

  async fn patch_json<B>(
    &self,
    path: &str,
    body: &B
  ) -> Result<(), BoardError>
  where
    B: Serialize + ?Sized
  {
    let request = self
      .mutating(Request::patch(path))?
      .json(body)
      .map_err(|e| {
        BoardError::transport(path, e)
      })?;

    send("PATCH", path, request).await?;
    Ok(())
  }

  async fn post_form(
    &self,
    path: &str,
    form: &str
  ) -> Result<(), BoardError> {
    let request = self
      .mutating(Request::post(path))?
      .header(
        "Content-Type",
        "application/x-www-form-urlencoded;charset=UTF-8"
      )
      .body(form.to_string())
      .map_err(|e| {
        BoardError::transport(path, e)
      })?;

    send("POST", path, request).await?;
    Ok(())
  }
}

pub fn project_source(
  config: &BoardConfig
) -> ProjectSource<BrowserTransport> {
  ProjectSource::new(
    BrowserTransport::from_config(
      config
    ),
    config.endpoints(),
    config.name_truncate
  )
}

pub fn task_source(
  config: &BoardConfig,
  project_id: u64
) -> TaskSource<BrowserTransport> {
  TaskSource::new(
    BrowserTransport::from_config(
      config
    ),
    config.endpoints(),
    project_id
  )
}
