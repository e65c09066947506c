//! Drag-and-drop payloads. A drag source transfers a small JSON object
//! naming a content block; drop targets parse it defensively and ignore
//! anything malformed or mistyped rather than surfacing an error.

use serde::{Deserialize, Serialize};

const PAYLOAD_KIND: &str = "contentBlock";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub block_id: String,
}

impl DragPayload {
    pub fn for_block(block_id: impl Into<String>) -> Self {
        Self {
            kind: PAYLOAD_KIND.to_string(),
            block_id: block_id.into(),
        }
    }
}

/// The block id carried by a drop, if the payload is well-formed and of the
/// expected kind. Anything else is `None`, never an error.
pub fn parse_drag_payload(raw: &str) -> Option<String> {
    let payload: DragPayload = serde_json::from_str(raw).ok()?;
    if payload.kind != PAYLOAD_KIND {
        return None;
    }
    Some(payload.block_id)
}
