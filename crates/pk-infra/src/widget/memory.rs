//! In-process widgets used by the CLI and by tests in place of real DOM
//! elements.

use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use pk_core::password::{IconState, InputType};
use pk_core::ports::{PasswordFieldPort, TextFieldPort, UploadViewPatch, UploadViewPort};

#[derive(Debug, Default)]
struct TextFieldInner {
    value: String,
    cursor: usize,
}

/// A text input holding its value and caret in memory.
#[derive(Debug, Default)]
pub struct MemoryTextField {
    inner: Mutex<TextFieldInner>,
}

impl MemoryTextField {
    pub fn new(initial: impl Into<String>) -> Self {
        let value = initial.into();
        let cursor = value.chars().count();
        Self {
            inner: Mutex::new(TextFieldInner { value, cursor }),
        }
    }

    pub fn cursor(&self) -> usize {
        self.inner.lock().map(|inner| inner.cursor).unwrap_or_default()
    }

    /// Inserts `text` at the caret, as typing or pasting would.
    pub fn insert(&self, text: &str) {
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        let at = inner
            .value
            .char_indices()
            .nth(inner.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(inner.value.len());
        inner.value.insert_str(at, text);
        inner.cursor += text.chars().count();
    }
}

impl TextFieldPort for MemoryTextField {
    fn value(&self) -> String {
        self.inner
            .lock()
            .map(|inner| inner.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&self, value: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.value = value.to_string();
            inner.cursor = inner.cursor.min(value.chars().count());
        }
    }

    fn set_cursor(&self, position: usize) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.cursor = position.min(inner.value.chars().count());
        }
    }
}

/// A password input with its show/hide icon pair.
#[derive(Debug)]
pub struct MemoryPasswordField {
    input_type: Mutex<InputType>,
    icons: Mutex<Option<IconState>>,
}

impl Default for MemoryPasswordField {
    fn default() -> Self {
        Self {
            input_type: Mutex::new(InputType::Password),
            icons: Mutex::new(None),
        }
    }
}

impl MemoryPasswordField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
            .lock()
            .map(|guard| *guard)
            .unwrap_or(InputType::Password)
    }

    /// Last icon state applied; `None` until a toggle with icons fires.
    pub fn icons(&self) -> Option<IconState> {
        self.icons.lock().ok().and_then(|guard| *guard)
    }
}

impl PasswordFieldPort for MemoryPasswordField {
    fn set_input_type(&self, input_type: InputType) {
        if let Ok(mut guard) = self.input_type.lock() {
            *guard = input_type;
        }
    }

    fn set_icons(&self, icons: IconState) {
        if let Ok(mut guard) = self.icons.lock() {
            *guard = Some(icons);
        }
    }
}

/// What an upload widget currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadViewSnapshot {
    pub highlighted: bool,
    pub has_file: bool,
    pub preview_visible: bool,
    pub image_src: String,
    pub file_name: String,
    pub size_label: String,
    pub status_text: String,
    pub button_label: String,
    /// How many times the file input's stored value was reset.
    pub input_resets: usize,
}

#[derive(Debug, Default)]
struct RecordingInner {
    snapshot: UploadViewSnapshot,
    patches: Vec<UploadViewPatch>,
}

/// Upload view that records every patch and folds it into a snapshot.
#[derive(Debug, Default)]
pub struct RecordingUploadView {
    inner: Mutex<RecordingInner>,
}

impl RecordingUploadView {
    pub fn new(status_text: impl Into<String>, button_label: impl Into<String>) -> Self {
        let snapshot = UploadViewSnapshot {
            status_text: status_text.into(),
            button_label: button_label.into(),
            ..UploadViewSnapshot::default()
        };
        Self {
            inner: Mutex::new(RecordingInner {
                snapshot,
                patches: Vec::new(),
            }),
        }
    }

    pub fn snapshot(&self) -> UploadViewSnapshot {
        self.inner
            .lock()
            .map(|inner| inner.snapshot.clone())
            .unwrap_or_default()
    }

    pub fn patches(&self) -> Vec<UploadViewPatch> {
        self.inner
            .lock()
            .map(|inner| inner.patches.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl UploadViewPort for RecordingUploadView {
    async fn apply(&self, patch: UploadViewPatch) -> Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| anyhow!("upload view lock poisoned"))?;
        let snapshot = &mut inner.snapshot;
        match &patch {
            UploadViewPatch::Highlight(on) => snapshot.highlighted = *on,
            UploadViewPatch::Preview {
                image_src,
                file_name,
                size_label,
                status_text,
                button_label,
            } => {
                snapshot.has_file = true;
                snapshot.preview_visible = true;
                snapshot.image_src = image_src.clone();
                snapshot.file_name = file_name.clone();
                snapshot.size_label = size_label.clone();
                snapshot.status_text = status_text.clone();
                snapshot.button_label = button_label.clone();
            }
            UploadViewPatch::Cleared {
                status_text,
                button_label,
            } => {
                snapshot.has_file = false;
                snapshot.preview_visible = false;
                snapshot.image_src.clear();
                snapshot.file_name.clear();
                snapshot.size_label.clear();
                snapshot.status_text = status_text.clone();
                snapshot.button_label = button_label.clone();
                snapshot.input_resets += 1;
            }
        }
        inner.patches.push(patch);
        Ok(())
    }
}
