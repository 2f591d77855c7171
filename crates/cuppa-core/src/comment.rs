//! Comment form drafts and validation.

/// Maximum length of a commenter name, after trimming.
pub const MAX_AUTHOR_LEN: usize = 50;

/// Maximum length of a comment title, after trimming.
pub const MAX_TITLE_LEN: usize = 100;

/// The in-progress state of the comment form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub name: String,
    pub title: String,
    pub content: String,
}

/// Per-field validation messages; `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentErrors {
    pub name: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CommentErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.title.is_none() && self.content.is_none()
    }
}

impl CommentDraft {
    /// Validate the draft. Fields are trimmed before checking, but the
    /// draft itself is left untouched.
    pub fn validate(&self) -> CommentErrors {
        let mut errors = CommentErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some("Name is required.".to_string());
        } else if name.chars().count() > MAX_AUTHOR_LEN {
            errors.name = Some(format!("Name cannot exceed {MAX_AUTHOR_LEN} characters."));
        }

        let title = self.title.trim();
        if title.is_empty() {
            errors.title = Some("Title is required.".to_string());
        } else if title.chars().count() > MAX_TITLE_LEN {
            errors.title = Some(format!("Title cannot exceed {MAX_TITLE_LEN} characters."));
        }

        if self.content.trim().is_empty() {
            errors.content = Some("Comment content is required.".to_string());
        }

        errors
    }
}
