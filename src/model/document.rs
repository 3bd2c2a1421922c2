use crate::{
    foundation::core::{LayerId, StateKey},
    foundation::error::CastageResult,
    model::layer::Layer,
};

/// Read-only view of the document this crate animates.
///
/// The document owns layers and the active-state identity; both may change between any two
/// reads, so callers hand a fresh view to every [`crate::Stage::sync`].
pub trait DocumentView {
    /// Identity of the active state (`"Base"` when no other state is active).
    fn active_state(&self) -> &str;

    /// Layers currently mounted in the active view.
    fn layers(&self) -> &[Layer];

    fn layer(&self, id: &LayerId) -> Option<&Layer> {
        self.layers().iter().find(|l| &l.id == id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Owned snapshot of a document, e.g. decoded from the editor's JSON bridge.
pub struct DocumentSnapshot {
    #[serde(default)]
    pub active_state: StateKey,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl DocumentSnapshot {
    /// Snapshot with the given active state and layers.
    pub fn new(active_state: impl Into<String>, layers: Vec<Layer>) -> Self {
        Self {
            active_state: StateKey::new(active_state),
            layers,
        }
    }

    /// Decode a snapshot from the editor's JSON bridge.
    pub fn from_json(s: &str) -> CastageResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Mutable lookup by id.
    pub fn layer_mut(&mut self, id: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id.as_str() == id)
    }

    /// Switch the active state identity.
    pub fn set_active_state(&mut self, key: impl Into<String>) {
        self.active_state = StateKey::new(key);
    }
}

impl DocumentView for DocumentSnapshot {
    fn active_state(&self) -> &str {
        self.active_state.as_str()
    }

    fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/document.rs"]
mod tests;
