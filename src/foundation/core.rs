pub use kurbo::{Affine, Point, Size, Vec2};

/// Host frame timestamp in milliseconds (the clock of the per-frame callback).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Millis(pub f64);

impl Millis {
    /// Milliseconds elapsed since `earlier`; negative when the clock went backwards.
    pub fn since(self, earlier: Millis) -> f64 {
        self.0 - earlier.0
    }

    /// Shift by `ms` milliseconds.
    pub fn offset(self, ms: f64) -> Self {
        Self(self.0 + ms)
    }
}

/// Opaque layer identifier owned by the document.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct LayerId(pub String);

impl LayerId {
    /// Wrap a document layer id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of the document's active state.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct StateKey(pub String);

impl StateKey {
    /// Name of the sentinel default state.
    pub const BASE: &'static str = "Base";

    /// Wrap a state identity.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The `"Base"` state.
    pub fn base() -> Self {
        Self(Self::BASE.to_owned())
    }

    /// Borrow as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the `"Base"` state.
    pub fn is_base(&self) -> bool {
        self.0 == Self::BASE
    }
}

impl Default for StateKey {
    fn default() -> Self {
        Self::base()
    }
}

impl std::fmt::Display for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
