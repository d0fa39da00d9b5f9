//! Prompt-building sessions.
//!
//! A [`PromptSession`] walks a user through three steps: choose a template,
//! capture context, review and copy the prompt. Speech recognition and the
//! clipboard are reached only through the [`SpeechCapture`] and
//! [`Clipboard`] traits, and new runs are triggered by [`Activation`]
//! events on an [`ActivationBus`].

mod activation;
mod collaborators;
mod prompt_session;

pub use activation::{Activation, ActivationBus, run_activation_loop};
pub use collaborators::{
    Clipboard, FileClipboard, MemoryClipboard, ScriptedSpeech, SpeechCapture, WriterClipboard,
};
pub use prompt_session::{EMPTY_TRANSCRIPT_MESSAGE, PromptSession, WizardStep};
