//! Resource host: the backing store locators point into.
//!
//! In the product the host is the renderer's object-URL store; here it is a
//! seam so session lifecycle rules can be exercised against an in-memory
//! implementation (and a failure-injecting one in tests).

use std::collections::HashMap;

use craftpad_bundle::PreviewDocument;
use uuid::Uuid;

use crate::error::Result;

pub type LocatorId = Uuid;

/// Creates and revokes the in-memory resources behind preview locators.
pub trait ResourceHost {
    /// Allocate a resource backing `doc` and return its id.
    fn create(&mut self, doc: &PreviewDocument) -> Result<LocatorId>;

    /// Release the resource behind `id`. Unknown ids are ignored.
    fn revoke(&mut self, id: LocatorId);
}

/// Default host: documents keyed by id, with create/revoke accounting.
#[derive(Debug, Default)]
pub struct InMemoryHost {
    resources: HashMap<LocatorId, String>,
    created: u64,
    revoked: u64,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self, id: LocatorId) -> Option<&str> {
        self.resources.get(&id).map(String::as_str)
    }

    pub fn live(&self) -> usize {
        self.resources.len()
    }

    pub fn created(&self) -> u64 {
        self.created
    }

    pub fn revoked(&self) -> u64 {
        self.revoked
    }
}

impl ResourceHost for InMemoryHost {
    fn create(&mut self, doc: &PreviewDocument) -> Result<LocatorId> {
        let id = Uuid::new_v4();
        self.resources.insert(id, doc.as_str().to_string());
        self.created += 1;
        Ok(id)
    }

    fn revoke(&mut self, id: LocatorId) {
        if self.resources.remove(&id).is_some() {
            self.revoked += 1;
        }
    }
}
