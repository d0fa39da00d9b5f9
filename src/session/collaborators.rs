//! Speech capture and clipboard collaborators.
//!
//! Real microphone capture and system clipboard access live outside this
//! crate. These traits are the whole contract the session relies on.

use crate::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// A speech-to-text session.
pub trait SpeechCapture {
    /// Starts listening. Calling it while already listening is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if recognition is unavailable or not authorized.
    fn start(&mut self) -> Result<()>;

    /// Stops listening and finalizes the transcript.
    fn stop(&mut self);

    /// Clears the transcript, stopping first if needed.
    fn reset(&mut self);

    /// Whether a session is in progress.
    fn is_listening(&self) -> bool;

    /// The transcript recognized so far.
    fn transcript(&self) -> String;
}

/// Destination for the rendered prompt.
pub trait Clipboard {
    /// Replaces the clipboard contents with `text`, unmodified.
    ///
    /// # Errors
    ///
    /// Returns an error if the contents cannot be written.
    fn set_contents(&mut self, text: &str) -> Result<()>;
}

/// Speech capture that "recognizes" a fixed script.
///
/// Stands in for a recognizer when notes come from text (CLI arguments,
/// files, stdin) and in tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSpeech {
    script: String,
    transcript: String,
    listening: bool,
    unavailable: Option<String>,
}

impl ScriptedSpeech {
    /// Creates a capture that yields `script` once started.
    #[must_use]
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            ..Self::default()
        }
    }

    /// Creates a capture whose `start` always fails with `reason`.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            ..Self::default()
        }
    }
}

impl SpeechCapture for ScriptedSpeech {
    fn start(&mut self) -> Result<()> {
        if let Some(reason) = &self.unavailable {
            return Err(Error::operation("start_speech_capture", reason));
        }
        if self.listening {
            return Ok(());
        }
        self.transcript.clone_from(&self.script);
        self.listening = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.listening = false;
    }

    fn reset(&mut self) {
        self.transcript.clear();
        if self.listening {
            self.stop();
        }
    }

    fn is_listening(&self) -> bool {
        self.listening
    }

    fn transcript(&self) -> String {
        self.transcript.clone()
    }
}

/// Clipboard that keeps the last value in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Creates an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last value set, if any.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_contents(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that writes to any [`Write`], such as stdout.
pub struct WriterClipboard<W: Write> {
    writer: W,
    terminator: &'static str,
}

impl<W: Write> WriterClipboard<W> {
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            terminator: "",
        }
    }

    /// Appends `terminator` after each value, e.g. a newline for terminals.
    #[must_use]
    pub const fn with_terminator(mut self, terminator: &'static str) -> Self {
        self.terminator = terminator;
        self
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Clipboard for WriterClipboard<W> {
    fn set_contents(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.write_all(self.terminator.as_bytes()))
            .and_then(|()| self.writer.flush())
            .map_err(|e| Error::operation("write_clipboard", e))
    }
}

/// Clipboard that replaces the contents of a file.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    /// Targets `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Clipboard for FileClipboard {
    fn set_contents(&mut self, text: &str) -> Result<()> {
        fs::write(&self.path, text).map_err(|e| {
            Error::operation("write_clipboard_file", format!("{}: {e}", self.path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scripted_speech_lifecycle() {
        let mut speech = ScriptedSpeech::new("hello there");
        assert!(!speech.is_listening());
        assert!(speech.transcript().is_empty());

        speech.start().unwrap();
        assert!(speech.is_listening());
        assert_eq!(speech.transcript(), "hello there");

        speech.stop();
        assert!(!speech.is_listening());
        assert_eq!(speech.transcript(), "hello there");

        speech.reset();
        assert!(speech.transcript().is_empty());
    }

    #[test]
    fn test_unavailable_speech() {
        let mut speech = ScriptedSpeech::unavailable("not authorized");
        let err = speech.start().unwrap_err();
        assert!(err.to_string().contains("not authorized"));
        assert!(!speech.is_listening());
    }

    #[test]
    fn test_writer_clipboard_passes_text_unmodified() {
        let mut clipboard = WriterClipboard::new(Vec::new());
        clipboard.set_contents("  line one\nline two  ").unwrap();
        assert_eq!(clipboard.into_inner(), b"  line one\nline two  ");
    }

    #[test]
    fn test_writer_clipboard_terminator() {
        let mut clipboard = WriterClipboard::new(Vec::new()).with_terminator("\n");
        clipboard.set_contents("prompt").unwrap();
        assert_eq!(clipboard.into_inner(), b"prompt\n");
    }

    #[test]
    fn test_file_clipboard() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.txt");
        let mut clipboard = FileClipboard::new(&path);
        clipboard.set_contents("first").unwrap();
        clipboard.set_contents("second").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }
}
