//! Transient state of one prompt-building run.

use super::{Clipboard, SpeechCapture};
use crate::models::{Template, TemplateId};
use crate::rendering::render_prompt;
use crate::services::TemplateCatalog;
use crate::Result;

/// Shown when a recording ends with nothing recognized.
pub const EMPTY_TRANSCRIPT_MESSAGE: &str = "Could not understand your voice prompt. Please try again.";

/// Steps of the choose, capture, review flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    /// Pick a template.
    #[default]
    ChooseTemplate,
    /// Dictate or type notes.
    CaptureContext,
    /// Inspect and copy the rendered prompt.
    ReviewPrompt,
}

impl WizardStep {
    /// The following step; the last step stays put.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::ChooseTemplate => Self::CaptureContext,
            Self::CaptureContext | Self::ReviewPrompt => Self::ReviewPrompt,
        }
    }

    /// The preceding step; the first step stays put.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::ChooseTemplate | Self::CaptureContext => Self::ChooseTemplate,
            Self::ReviewPrompt => Self::CaptureContext,
        }
    }
}

/// Session state: selection, notes, and copy status.
///
/// The catalog is passed into each call rather than held, so the session
/// never keeps its own copy of a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptSession {
    step: WizardStep,
    selected: Option<TemplateId>,
    notes: String,
    copied: bool,
    error_message: Option<String>,
}

impl PromptSession {
    /// Creates a session at the first step with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current wizard step.
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Selected template id, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<TemplateId> {
        self.selected
    }

    /// Captured notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Whether the current prompt has been copied.
    #[must_use]
    pub const fn copied(&self) -> bool {
        self.copied
    }

    /// Last user-facing error, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Resets transient state for a new run.
    ///
    /// Idempotent: returns to the first step, clears notes, the copied flag,
    /// the error, and the speech transcript. Selects the catalog's first
    /// template when nothing is selected; an existing selection is kept.
    pub fn handle_activation(&mut self, catalog: &TemplateCatalog, speech: &mut dyn SpeechCapture) {
        self.step = WizardStep::ChooseTemplate;
        self.notes.clear();
        self.copied = false;
        self.error_message = None;
        speech.reset();

        if self.selected.is_none() {
            self.selected = catalog.first().map(|t| t.id);
        }
    }

    /// Selects a template.
    pub const fn select(&mut self, id: TemplateId) {
        self.selected = Some(id);
    }

    /// Replaces the notes, e.g. with typed text.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
        self.copied = false;
    }

    /// Moves to the next step.
    pub const fn advance(&mut self) {
        self.step = self.step.next();
        self.copied = false;
    }

    /// Moves to the previous step.
    ///
    /// Leaving the review step also resets `speech`, so a transcript from
    /// the finished recording cannot leak into the next capture.
    pub fn go_back(&mut self, speech: &mut dyn SpeechCapture) {
        if self.step == WizardStep::ReviewPrompt {
            speech.reset();
        }
        self.step = self.step.previous();
        self.copied = false;
    }

    /// The template the prompt is built from.
    ///
    /// The selection if it still exists, otherwise the catalog's first
    /// template, otherwise a fresh untitled template.
    #[must_use]
    pub fn current_template(&self, catalog: &TemplateCatalog) -> Template {
        self.selected
            .and_then(|id| catalog.get(&id))
            .or_else(|| catalog.first())
            .cloned()
            .unwrap_or_else(Template::untitled)
    }

    /// Renders the prompt for the current template and notes.
    #[must_use]
    pub fn prompt(&self, catalog: &TemplateCatalog) -> String {
        render_prompt(&self.current_template(catalog), &self.notes)
    }

    /// Starts or stops recording.
    ///
    /// Stopping takes the transcript as the notes and advances, or records
    /// an error if nothing was recognized. Starting clears previous notes;
    /// a start failure is recorded as the session error.
    pub fn toggle_recording(&mut self, speech: &mut dyn SpeechCapture) {
        if speech.is_listening() {
            speech.stop();
            self.notes = speech.transcript();
            if self.notes.trim().is_empty() {
                self.error_message = Some(EMPTY_TRANSCRIPT_MESSAGE.to_string());
            } else {
                self.error_message = None;
                self.advance();
            }
            return;
        }

        self.copied = false;
        self.notes.clear();
        self.error_message = None;
        speech.reset();
        if let Err(e) = speech.start() {
            tracing::warn!("Speech capture failed to start: {e}");
            self.error_message = Some(e.to_string());
        }
    }

    /// Hands the rendered prompt to `clipboard`.
    ///
    /// Does nothing and returns `false` while the notes are blank.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard rejects the text.
    pub fn copy_prompt(
        &mut self,
        catalog: &TemplateCatalog,
        clipboard: &mut dyn Clipboard,
    ) -> Result<bool> {
        if self.notes.trim().is_empty() {
            return Ok(false);
        }

        clipboard.set_contents(&self.prompt(catalog))?;
        self.copied = true;
        Ok(true)
    }

    /// Keeps the selection valid after `id` was removed from `catalog`.
    pub fn on_template_deleted(&mut self, id: &TemplateId, catalog: &TemplateCatalog) {
        if self.selected == Some(*id) {
            self.selected = catalog.first().map(|t| t.id);
        }
        if catalog.is_empty() {
            self.step = WizardStep::ChooseTemplate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryClipboard, ScriptedSpeech};
    use crate::storage::MemoryTemplateStore;
    use std::sync::Arc;

    fn catalog() -> TemplateCatalog {
        TemplateCatalog::load(Arc::new(MemoryTemplateStore::new()))
    }

    #[test]
    fn test_wizard_step_navigation() {
        assert_eq!(WizardStep::ChooseTemplate.next(), WizardStep::CaptureContext);
        assert_eq!(WizardStep::ReviewPrompt.next(), WizardStep::ReviewPrompt);
        assert_eq!(WizardStep::ChooseTemplate.previous(), WizardStep::ChooseTemplate);
        assert_eq!(WizardStep::ReviewPrompt.previous(), WizardStep::CaptureContext);
    }

    #[test]
    fn test_activation_resets_and_selects_first() {
        let catalog = catalog();
        let mut speech = ScriptedSpeech::new("notes");
        let mut session = PromptSession::new();
        session.set_notes("old notes");
        session.advance();

        session.handle_activation(&catalog, &mut speech);

        assert_eq!(session.step(), WizardStep::ChooseTemplate);
        assert!(session.notes().is_empty());
        assert!(!session.copied());
        assert_eq!(session.selected(), catalog.first().map(|t| t.id));
    }

    #[test]
    fn test_activation_is_idempotent() {
        let catalog = catalog();
        let mut speech = ScriptedSpeech::new("");
        let mut session = PromptSession::new();
        session.select(catalog.templates()[3].id);

        session.handle_activation(&catalog, &mut speech);
        let once = session.clone();
        session.handle_activation(&catalog, &mut speech);

        assert_eq!(session, once);
        assert_eq!(session.selected(), Some(catalog.templates()[3].id));
    }

    #[test]
    fn test_recording_round_trip_advances() {
        let catalog = catalog();
        let mut speech = ScriptedSpeech::new("Launched v2 yesterday.");
        let mut session = PromptSession::new();
        session.handle_activation(&catalog, &mut speech);
        session.advance();

        session.toggle_recording(&mut speech);
        assert!(speech.is_listening());

        session.toggle_recording(&mut speech);
        assert!(!speech.is_listening());
        assert_eq!(session.notes(), "Launched v2 yesterday.");
        assert_eq!(session.step(), WizardStep::ReviewPrompt);
        assert!(session.prompt(&catalog).contains("Context:\nLaunched v2 yesterday."));
    }

    #[test]
    fn test_empty_transcript_sets_error() {
        let mut speech = ScriptedSpeech::new("   ");
        let mut session = PromptSession::new();
        session.advance();

        session.toggle_recording(&mut speech);
        session.toggle_recording(&mut speech);

        assert_eq!(session.error_message(), Some(EMPTY_TRANSCRIPT_MESSAGE));
        assert_eq!(session.step(), WizardStep::CaptureContext);
    }

    #[test]
    fn test_start_failure_sets_error() {
        let mut speech = ScriptedSpeech::unavailable("Voice to Text is not authorized");
        let mut session = PromptSession::new();
        session.toggle_recording(&mut speech);
        assert!(session.error_message().unwrap().contains("not authorized"));
    }

    #[test]
    fn test_copy_requires_notes() {
        let catalog = catalog();
        let mut clipboard = MemoryClipboard::new();
        let mut session = PromptSession::new();

        assert!(!session.copy_prompt(&catalog, &mut clipboard).unwrap());
        assert!(clipboard.contents().is_none());
        assert!(!session.copied());

        session.set_notes("Ship it.");
        assert!(session.copy_prompt(&catalog, &mut clipboard).unwrap());
        assert_eq!(clipboard.contents(), Some(session.prompt(&catalog).as_str()));
        assert!(session.copied());

        session.go_back(&mut ScriptedSpeech::new(""));
        assert!(!session.copied());
    }

    #[test]
    fn test_back_from_review_resets_speech() {
        let mut speech = ScriptedSpeech::new("First take.");
        let mut session = PromptSession::new();
        session.advance();
        session.toggle_recording(&mut speech);
        session.toggle_recording(&mut speech);
        assert_eq!(session.step(), WizardStep::ReviewPrompt);
        assert_eq!(speech.transcript(), "First take.");

        session.go_back(&mut speech);
        assert_eq!(session.step(), WizardStep::CaptureContext);
        assert!(speech.transcript().is_empty());
        assert_eq!(session.notes(), "First take.");

        session.go_back(&mut speech);
        assert_eq!(session.step(), WizardStep::ChooseTemplate);
    }

    #[test]
    fn test_current_template_fallbacks() {
        let mut catalog = catalog();
        let session = PromptSession::new();
        assert_eq!(session.current_template(&catalog).id, catalog.templates()[0].id);

        let ids: Vec<_> = catalog.templates().iter().map(|t| t.id).collect();
        for id in &ids {
            catalog.delete(id);
        }
        assert_eq!(session.current_template(&catalog).name, "Untitled template");
    }

    #[test]
    fn test_deleting_selected_template_reselects_first() {
        let mut catalog = catalog();
        let mut session = PromptSession::new();
        let doomed = catalog.templates()[0].id;
        session.select(doomed);
        session.advance();

        catalog.delete(&doomed);
        session.on_template_deleted(&doomed, &catalog);

        assert_eq!(session.selected(), catalog.first().map(|t| t.id));
        assert_eq!(session.step(), WizardStep::CaptureContext);
    }
}
