//! Non-fatal warning collection
//!
//! Per-entity failures during bounds, selection or color resolution must
//! never abort a load or a redraw. The offending entity is skipped and the
//! issue is recorded here; each warning is also emitted as a `tracing`
//! event so hosts that wire up a subscriber see them live.

use crate::types::Handle;
use std::fmt;

/// Category of a recorded warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// Per-entity bounds/selection geometry could not be computed
    Geometry,
    /// Color resolution fell back to black with no color information
    ColorResolution,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry => write!(f, "Geometry"),
            Self::ColorResolution => write!(f, "ColorResolution"),
        }
    }
}

/// A single warning produced while processing the scene
#[derive(Debug, Clone)]
pub struct Warning {
    /// The category
    pub kind: WarningKind,
    /// The entity the warning refers to, if any
    pub entity: Option<Handle>,
    /// Human-readable description
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entity {
            Some(handle) => write!(f, "[{}] {} ({})", self.kind, self.message, handle),
            None => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}

/// Collects warnings across scene operations
#[derive(Debug, Clone, Default)]
pub struct WarningLog {
    items: Vec<Warning>,
}

impl WarningLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a warning and emit the matching `tracing` event
    pub fn warn(&mut self, kind: WarningKind, entity: Option<Handle>, message: impl Into<String>) {
        let warning = Warning {
            kind,
            entity,
            message: message.into(),
        };
        tracing::warn!(kind = %warning.kind, entity = ?warning.entity, "{}", warning.message);
        self.items.push(warning);
    }

    /// Check if there are any warnings
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of warnings
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all warnings
    pub fn iter(&self) -> std::slice::Iter<'_, Warning> {
        self.items.iter()
    }

    /// All warnings of a given kind
    pub fn of_kind(&self, kind: WarningKind) -> impl Iterator<Item = &Warning> {
        self.items.iter().filter(move |w| w.kind == kind)
    }

    /// Drop all recorded warnings (done on every new load)
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
