use yew::{
  AttrValue,
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
  pub message:    AttrValue,
  pub on_dismiss: Callback<()>
}

#[function_component(ErrorBanner)]
pub fn error_banner(
  props: &ErrorBannerProps
) -> Html {
  let on_dismiss =
    props.on_dismiss.clone();
  html! {
      <div class="board-error" role="alert">
          <span>{ props.message.clone() }</span>
          <button class="btn" onclick={move |_| on_dismiss.emit(())}>{ "×" }</button>
      </div>
  }
}
