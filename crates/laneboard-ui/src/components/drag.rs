use uuid::Uuid;
use web_sys::DragEvent;

const DRAG_MIME: &str = "text/plain";

/// A card released over a lane, or over
/// another card (`before`).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct DroppedCard {
  pub card:   Uuid,
  pub before: Option<Uuid>
}

pub(super) fn begin_drag(
  event: &DragEvent,
  card: Uuid
) {
  if let Some(data_transfer) =
    event.data_transfer()
  {
    if let Err(error) = data_transfer
      .set_data(
        DRAG_MIME,
        &card.to_string()
      )
    {
      tracing::warn!(
        ?error,
        "failed writing drag data"
      );
    }
    data_transfer
      .set_effect_allowed("move");
  }
}

/// Reads the dragged card identifier
/// from the transfer.
pub(super) fn dragged_card(
  event: &DragEvent
) -> Option<Uuid> {
  let data_transfer =
    event.data_transfer()?;
  match data_transfer.get_data(DRAG_MIME)
  {
    | Ok(raw_uuid) => {
      match Uuid::parse_str(
        raw_uuid.trim()
      ) {
        | Ok(uuid) => Some(uuid),
        | Err(_) => {
          tracing::warn!(
            raw_uuid,
            "failed to parse dragged \
             card uuid"
          );
          None
        }
      }
    }
    | Err(error) => {
      tracing::warn!(
        ?error,
        "failed reading drag data"
      );
      None
    }
  }
}

pub(super) fn finish_drop(
  event: &DragEvent
) {
  if let Some(data_transfer) =
    event.data_transfer()
    && let Err(error) =
      data_transfer.clear_data()
  {
    tracing::debug!(
      ?error,
      "drag data already cleared"
    );
  }
}
