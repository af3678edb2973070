mod api;
mod app;
mod components;

use laneboard_core::BoardConfig;
use web_sys::Element;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting laneboard frontend"
  );

  let Some(mount) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id("app")
    })
  else {
    tracing::error!(
      "missing #app mount element"
    );
    return;
  };

  let config = match BoardConfig::load(
    data_attributes(&mount)
  ) {
    | Ok(config) => config,
    | Err(err) => {
      tracing::error!(
        error = format!("{err:#}"),
        "falling back to default board \
         configuration"
      );
      BoardConfig::default()
    }
  };

  yew::Renderer::<app::App>::with_root_and_props(
    mount,
    app::AppProps { config }
  )
  .render();
}

/// `data-*` attributes of the mount
/// element, in document order.
fn data_attributes(
  mount: &Element
) -> Vec<(String, String)> {
  mount
    .get_attribute_names()
    .iter()
    .filter_map(|name| name.as_string())
    .filter(|name| {
      name.starts_with("data-")
    })
    .filter_map(|name| {
      let value =
        mount.get_attribute(&name)?;
      Some((name, value))
    })
    .collect()
}
