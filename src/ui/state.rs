//! Explicit per-group interaction state. Rendering is a projection of these
//! enums plus the store snapshot; nothing is encoded in output markup.

/// Label editing session. Only one group can be in `Editing` at a time
/// because each CLI invocation drives at most one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelEdit {
    Display,
    Editing { draft: String },
}

impl LabelEdit {
    /// `Display → Editing`, pre-filled with the current persisted label.
    pub fn begin(current: &str) -> Self {
        LabelEdit::Editing {
            draft: current.to_string(),
        }
    }

    /// Replace the draft while editing; a no-op in `Display`.
    pub fn type_draft(self, input: &str) -> Self {
        match self {
            LabelEdit::Editing { .. } => LabelEdit::Editing {
                draft: input.to_string(),
            },
            s => s,
        }
    }

    /// `Editing → Display` on commit: yields the trimmed draft when it is
    /// non-empty, `None` when the edit must retain the prior label.
    pub fn commit(self) -> Option<String> {
        match self {
            LabelEdit::Editing { draft } => {
                let trimmed = draft.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            LabelEdit::Display => None,
        }
    }

    /// `Editing → Display` on cancel: the draft is discarded, nothing is
    /// persisted and the last persisted label stays in effect.
    pub fn cancel(self) -> Self {
        LabelEdit::Display
    }
}

/// Per-group color picker panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Hidden,
    Visible,
}

impl PickerState {
    pub fn toggle(self) -> Self {
        match self {
            PickerState::Hidden => PickerState::Visible,
            PickerState::Visible => PickerState::Hidden,
        }
    }
}
