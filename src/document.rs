//! Seam to the external document-reader collaborator
//!
//! Parsing a CAD file into layer and entity records is not this crate's
//! job. The host supplies a [`DrawingSource`]; the scene pulls an
//! already-parsed [`DrawingData`] from it on load and mirrors entity
//! deletions back so the persisted document stays in sync.

use crate::entities::Entity;
use crate::error::Result;
use crate::tables::Layer;
use crate::types::Handle;

/// An already-parsed drawing as supplied by the document collaborator
#[derive(Debug, Clone, Default)]
pub struct DrawingData {
    /// Layer records, in document order
    pub layers: Vec<Layer>,
    /// Entities in draw order (later entities draw over earlier ones)
    pub entities: Vec<Entity>,
}

impl DrawingData {
    /// Create an empty drawing
    pub fn new() -> Self {
        Self::default()
    }
}

/// The external document collaborator.
///
/// `read` may block on I/O and may fail; failure is fatal to the load call
/// only, and the scene commits nothing until it has succeeded. After a
/// successful load the scene addresses entities by [`Handle`]s allocated
/// 1-based in the order `read` supplied them, and reports deletions
/// through [`remove_entity`] using those same handles.
///
/// [`remove_entity`]: DrawingSource::remove_entity
pub trait DrawingSource {
    /// The display name of the document, e.g. the file name
    fn filename(&self) -> &str;

    /// Parse and return the drawing contents
    fn read(&mut self) -> Result<DrawingData>;

    /// Remove an entity from the persisted document
    fn remove_entity(&mut self, handle: Handle);
}

/// An in-memory [`DrawingSource`] for hosts and tests that already hold
/// parsed data
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    data: DrawingData,
    removed: Vec<Handle>,
}

impl MemorySource {
    /// Create a source over already-parsed data
    pub fn new(name: impl Into<String>, data: DrawingData) -> Self {
        MemorySource {
            name: name.into(),
            data,
            removed: Vec::new(),
        }
    }

    /// Handles whose entities have been deleted from the scene
    pub fn removed(&self) -> &[Handle] {
        &self.removed
    }
}

impl DrawingSource for MemorySource {
    fn filename(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> Result<DrawingData> {
        Ok(self.data.clone())
    }

    fn remove_entity(&mut self, handle: Handle) {
        self.removed.push(handle);
    }
}
