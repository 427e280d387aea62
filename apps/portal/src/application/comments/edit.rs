use crate::domain::{
    social::comment::{Comment, CommentText},
    user::entity::CurrentUser,
};

/// Inline edit phase of one comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditPhase {
    Viewing,
    Editing { original: String, draft: String },
    Saving { original: String, draft: String },
}

/// A listed comment together with its edit state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEntry {
    pub comment: Comment,
    pub can_edit: bool,
    phase: EditPhase,
}

impl CommentEntry {
    pub fn new(comment: Comment, viewer: Option<&CurrentUser>) -> Self {
        let can_edit = comment.is_editable_by(viewer);
        Self {
            comment,
            can_edit,
            phase: EditPhase::Viewing,
        }
    }

    pub fn id(&self) -> &str {
        &self.comment.id
    }

    pub fn phase(&self) -> &EditPhase {
        &self.phase
    }

    pub fn is_editing(&self) -> bool {
        !matches!(self.phase, EditPhase::Viewing)
    }

    /// Opens the editor seeded with the current text. A no-op while already
    /// editing or saving.
    pub fn begin_edit(&mut self) -> bool {
        if !self.can_edit || self.is_editing() {
            return false;
        }
        self.phase = EditPhase::Editing {
            original: self.comment.text.clone(),
            draft: self.comment.text.clone(),
        };
        true
    }

    pub fn update_draft(&mut self, text: &str) -> bool {
        match &mut self.phase {
            EditPhase::Editing { draft, .. } => {
                *draft = text.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) -> bool {
        match std::mem::replace(&mut self.phase, EditPhase::Viewing) {
            EditPhase::Editing { original, .. } => {
                self.comment.text = original;
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// Validates the draft and moves to `Saving`. An invalid draft keeps the
    /// editor open; `None` means there was no editor to save.
    pub fn start_save(&mut self) -> Option<Result<CommentText, validator::ValidationErrors>> {
        let EditPhase::Editing { original, draft } = &self.phase else {
            return None;
        };
        let text = match CommentText::new(draft) {
            Ok(text) => text,
            Err(errors) => return Some(Err(errors)),
        };
        let saving = EditPhase::Saving {
            original: original.clone(),
            draft: draft.clone(),
        };
        self.phase = saving;
        Some(Ok(text))
    }

    /// Stores the server's version of the text and closes the editor.
    pub fn finish_save(&mut self, saved_text: String) {
        if matches!(self.phase, EditPhase::Saving { .. }) {
            self.comment.text = saved_text;
            self.phase = EditPhase::Viewing;
        }
    }

    /// The save failed; reopen the editor with the draft intact.
    pub fn abort_save(&mut self) {
        if let EditPhase::Saving { original, draft } =
            std::mem::replace(&mut self.phase, EditPhase::Viewing)
        {
            self.phase = EditPhase::Editing { original, draft };
        }
    }
}
