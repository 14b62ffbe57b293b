//! In-memory template store with built-in templates.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use srcmake_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{FileType, Language},
    error::SrcmakeResult,
};
use tracing::debug;

use crate::builtin_templates::BUILTIN_TEMPLATES;

/// Thread-safe in-memory template store.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<(Language, FileType), String>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> SrcmakeResult<Self> {
        let store = Self::new();
        for (language, file_type, text) in BUILTIN_TEMPLATES {
            store.insert(*language, *file_type, *text)?;
        }
        debug!(templates = store.len(), "Loaded built-in templates");
        Ok(store)
    }

    /// Add or replace the template for a resolved pair.
    pub fn insert(
        &self,
        language: Language,
        file_type: FileType,
        text: impl Into<String>,
    ) -> SrcmakeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert((language, file_type), text.into());
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryStore {
    fn load(&self, language: Language, file_type: FileType) -> SrcmakeResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(&(language, file_type))
            .cloned()
            .ok_or_else(|| ApplicationError::template_missing(language, file_type).into())
    }
}
