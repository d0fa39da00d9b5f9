//! Template catalog service.
//!
//! Owns the authoritative, ordered list of templates and mirrors every
//! mutation to a [`TemplateStore`].
//!
//! # Durability
//!
//! The in-memory list is the source of truth for the running session. Each
//! mutation rewrites the whole serialized sequence before returning; if that
//! write fails the failure is logged and the mutation stands.
//!
//! # Self-healing load
//!
//! | Store state | Result |
//! |-------------|--------|
//! | absent | default set, persisted |
//! | unreadable (I/O error) | default set, persisted |
//! | empty or invalid JSON | default set, persisted |
//! | valid JSON array (even `[]`) | decoded templates |
//! | records without an `id` | decoded templates with fresh ids, persisted |

use crate::models::{Template, TemplateId, default_templates};
use crate::storage::TemplateStore;
use crate::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Ordered, persisted collection of templates.
pub struct TemplateCatalog {
    /// Backing store.
    store: Arc<dyn TemplateStore>,
    /// Templates in display order.
    templates: Vec<Template>,
    /// Whether the last write reached the store.
    persisted: bool,
}

impl fmt::Debug for TemplateCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateCatalog")
            .field("templates", &self.templates.len())
            .field("persisted", &self.persisted)
            .finish_non_exhaustive()
    }
}

impl TemplateCatalog {
    /// Loads the catalog from `store`.
    ///
    /// Never fails: an absent, unreadable, or corrupt store yields the
    /// default template set, which is written back immediately.
    #[must_use]
    pub fn load(store: Arc<dyn TemplateStore>) -> Self {
        let mut catalog = Self {
            store,
            templates: Vec::new(),
            persisted: true,
        };
        catalog.reload();
        catalog
    }

    /// Re-reads the store, discarding the in-memory list.
    ///
    /// Same recovery rules as [`load`](Self::load).
    pub fn reload(&mut self) {
        if let Some(decoded) = self.read_store() {
            tracing::debug!(count = decoded.templates.len(), "Loaded template catalog");
            self.templates = decoded.templates;
            self.persisted = if decoded.generated_ids == 0 {
                true
            } else {
                tracing::info!(
                    count = decoded.generated_ids,
                    "Assigned ids to stored templates"
                );
                self.persist()
            };
            return;
        }

        self.templates = default_templates();
        tracing::info!(count = self.templates.len(), "Seeded default templates");
        self.persisted = self.persist();
    }

    /// Reads and decodes the store, or `None` if it must be re-seeded.
    fn read_store(&self) -> Option<Decoded> {
        let bytes = match self.store.read() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::info!("Template store is empty");
                return None;
            },
            Err(e) => {
                tracing::warn!("Failed to read template store, seeding defaults: {e}");
                return None;
            },
        };

        match decode(&bytes) {
            Ok(templates) => Some(templates),
            Err(e) => {
                tracing::warn!("Failed to parse template store, seeding defaults: {e}");
                None
            },
        }
    }

    /// Writes the full sequence to the store.
    ///
    /// Failures are logged rather than returned; the return value reports
    /// whether the write succeeded for callers that want to surface it.
    pub fn persist(&self) -> bool {
        let result = encode(&self.templates).and_then(|bytes| self.store.write_all(&bytes));
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(count = self.templates.len(), "Failed to save templates: {e}");
                false
            },
        }
    }

    /// Whether the most recent load or mutation was written to the store.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Returns the templates in display order.
    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog has no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// First template in display order.
    #[must_use]
    pub fn first(&self) -> Option<&Template> {
        self.templates.first()
    }

    /// Looks up a template by id.
    #[must_use]
    pub fn get(&self, id: &TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == *id)
    }

    /// Looks up the first template whose name matches, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Template> {
        let wanted = name.trim().to_lowercase();
        self.templates
            .iter()
            .find(|t| t.name.trim().to_lowercase() == wanted)
    }

    /// Resolves a user-supplied reference: an id string first, then a name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if neither matches.
    pub fn resolve(&self, reference: &str) -> Result<&Template> {
        let by_id = reference
            .parse::<TemplateId>()
            .ok()
            .and_then(|id| self.get(&id));

        by_id
            .or_else(|| self.find_by_name(reference))
            .ok_or_else(|| Error::NotFound(format!("template '{}'", reference.trim())))
    }

    /// Appends a template and persists.
    ///
    /// Id uniqueness is the caller's responsibility.
    pub fn add(&mut self, template: Template) {
        tracing::info!(id = %template.id, name = %template.name, "Adding template");
        self.templates.push(template);
        self.persisted = self.persist();
    }

    /// Replaces the template with the same id in place and persists.
    ///
    /// Returns `false` (and writes nothing) if no template has that id.
    pub fn update(&mut self, template: Template) -> bool {
        let Some(slot) = self.templates.iter_mut().find(|t| t.id == template.id) else {
            tracing::debug!(id = %template.id, "Update skipped, template not found");
            return false;
        };

        tracing::info!(id = %template.id, name = %template.name, "Updating template");
        *slot = template;
        self.persisted = self.persist();
        true
    }

    /// Removes the template with `id` and persists.
    ///
    /// Returns `false` (and writes nothing) if no template has that id.
    pub fn delete(&mut self, id: &TemplateId) -> bool {
        let Some(index) = self.templates.iter().position(|t| t.id == *id) else {
            tracing::debug!(%id, "Delete skipped, template not found");
            return false;
        };

        let removed = self.templates.remove(index);
        tracing::info!(%id, name = %removed.name, "Deleted template");
        self.persisted = self.persist();
        true
    }

    /// Replaces the whole catalog with a fresh default set and persists.
    pub fn reset_to_defaults(&mut self) {
        self.templates = default_templates();
        tracing::info!(count = self.templates.len(), "Reset templates to defaults");
        self.persisted = self.persist();
    }
}

/// A decoded store and how many records had no stored id.
struct Decoded {
    templates: Vec<Template>,
    generated_ids: usize,
}

/// Decodes a stored template sequence.
fn decode(bytes: &[u8]) -> Result<Decoded> {
    let records: Vec<serde_json::Value> =
        serde_json::from_slice(bytes).map_err(|e| Error::operation("parse_template_store", e))?;

    let generated_ids = records
        .iter()
        .filter(|record| record.get("id").is_none_or(serde_json::Value::is_null))
        .count();

    let templates = records
        .into_iter()
        .map(serde_json::from_value)
        .collect::<serde_json::Result<Vec<Template>>>()
        .map_err(|e| Error::operation("parse_template_store", e))?;

    Ok(Decoded {
        templates,
        generated_ids,
    })
}

/// Encodes a template sequence for storage.
fn encode(templates: &[Template]) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(templates).map_err(|e| Error::operation("serialize_templates", e))
}
