//! Template editing boundary.
//!
//! The catalog stores whatever it is given. Drafts are validated here, before
//! they reach it.

use crate::models::{Template, TemplateId};
use crate::services::TemplateCatalog;
use crate::{Error, Result};

/// An in-progress edit of a new or existing template.
#[derive(Debug, Clone)]
pub struct TemplateEditor {
    draft: Template,
    is_new: bool,
}

impl TemplateEditor {
    /// Starts a draft for a brand-new template.
    #[must_use]
    pub fn new_template() -> Self {
        Self {
            draft: Template::untitled(),
            is_new: true,
        }
    }

    /// Starts editing a copy of an existing template.
    #[must_use]
    pub fn edit(template: &Template) -> Self {
        Self {
            draft: template.clone(),
            is_new: false,
        }
    }

    /// Whether committing will add rather than update.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.is_new
    }

    /// The current draft.
    #[must_use]
    pub const fn draft(&self) -> &Template {
        &self.draft
    }

    /// Mutable access to the draft.
    pub const fn draft_mut(&mut self) -> &mut Template {
        &mut self.draft
    }

    /// Checks that a template can be saved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the trimmed name or objective is
    /// empty.
    pub fn validate(template: &Template) -> Result<()> {
        if template.name.trim().is_empty() {
            return Err(Error::InvalidInput("template name is required".to_string()));
        }
        if template.objective.trim().is_empty() {
            return Err(Error::InvalidInput(
                "template objective is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Validates the draft and writes it to `catalog`.
    ///
    /// New drafts are appended; edits replace the template with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if validation fails, or
    /// [`Error::NotFound`] if an edited template was deleted meanwhile.
    pub fn commit(self, catalog: &mut TemplateCatalog) -> Result<TemplateId> {
        Self::validate(&self.draft)?;

        let id = self.draft.id;
        if self.is_new {
            catalog.add(self.draft);
        } else if !catalog.update(self.draft) {
            return Err(Error::NotFound(format!("template '{id}'")));
        }

        Ok(id)
    }
}
