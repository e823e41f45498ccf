//! Row Editor
//!
//! Which row of a list is being renamed. A single value holds the row, the
//! name it had and the draft, so two rows can never be editable at once.

/// Inline rename state of one list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RowEditor {
    #[default]
    Idle,
    Editing { index: usize, original: String, draft: String },
    Saving { index: usize, original: String, draft: String },
}

impl RowEditor {
    /// Open `index` for editing, closing any other row. Refused while saving.
    pub fn begin(&mut self, index: usize, original: &str) -> bool {
        if self.is_saving() {
            return false;
        }
        *self = RowEditor::Editing {
            index,
            original: original.to_string(),
            draft: original.to_string(),
        };
        true
    }

    pub fn set_draft(&mut self, text: &str) -> bool {
        match self {
            RowEditor::Editing { draft, .. } => {
                *draft = text.to_string();
                true
            }
            _ => false,
        }
    }

    /// Drop the draft without saving
    pub fn cancel(&mut self) -> bool {
        match self {
            RowEditor::Editing { .. } => {
                *self = RowEditor::Idle;
                true
            }
            _ => false,
        }
    }

    /// Editing → Saving; returns `(index, original, draft)`
    pub fn start_save(&mut self) -> Option<(usize, String, String)> {
        if !self.is_editing() {
            return None;
        }
        let RowEditor::Editing { index, original, draft } = std::mem::take(self) else {
            return None;
        };
        *self = RowEditor::Saving {
            index,
            original: original.clone(),
            draft: draft.clone(),
        };
        Some((index, original, draft))
    }

    /// Saving → Idle
    pub fn finish_saved(&mut self) {
        if self.is_saving() {
            *self = RowEditor::Idle;
        }
    }

    /// Saving → Editing with the draft reset to the original name
    pub fn finish_conflict(&mut self) {
        match std::mem::take(self) {
            RowEditor::Saving { index, original, .. } => {
                *self = RowEditor::Editing {
                    index,
                    draft: original.clone(),
                    original,
                };
            }
            other => *self = other,
        }
    }

    /// Saving → Editing keeping the draft for correction
    pub fn finish_failed(&mut self) {
        match std::mem::take(self) {
            RowEditor::Saving { index, original, draft } => {
                *self = RowEditor::Editing { index, original, draft };
            }
            other => *self = other,
        }
    }

    /// Keep the edited row pointing at the same entry after `removed` left the list
    pub fn row_removed(&mut self, removed: usize) {
        match self {
            RowEditor::Editing { index, .. } | RowEditor::Saving { index, .. } => {
                if *index == removed {
                    *self = RowEditor::Idle;
                } else if *index > removed {
                    *index -= 1;
                }
            }
            RowEditor::Idle => {}
        }
    }

    pub fn row(&self) -> Option<usize> {
        match self {
            RowEditor::Idle => None,
            RowEditor::Editing { index, .. } | RowEditor::Saving { index, .. } => Some(*index),
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            RowEditor::Idle => None,
            RowEditor::Editing { draft, .. } | RowEditor::Saving { draft, .. } => Some(draft),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, RowEditor::Editing { .. })
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, RowEditor::Saving { .. })
    }
}
