//! System clipboard access.

#[derive(Debug)]
pub enum ClipboardError {
    Unavailable(String),
    WriteFailed(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "clipboard unavailable: {msg}"),
            ClipboardError::WriteFailed(msg) => write!(f, "could not write clipboard: {msg}"),
        }
    }
}
impl std::error::Error for ClipboardError {}

/// Somewhere copied text can go.
pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard via `arboard`.
///
/// The handle is opened lazily on first copy so a headless session without a
/// display server only fails when the user actually copies.
#[derive(Default)]
pub struct SystemClipboard {
    #[cfg(not(target_os = "android"))]
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(not(target_os = "android"))]
impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let cb = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(cb);
        }
        let Some(cb) = self.inner.as_mut() else {
            return Err(ClipboardError::Unavailable("no clipboard handle".into()));
        };
        tracing::debug!(len = text.len(), "writing clipboard text");
        cb.set_text(text.to_owned())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

#[cfg(target_os = "android")]
impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(
            "clipboard is not supported on Android".into(),
        ))
    }
}
