use thiserror::Error;

use crate::model::ids::SheetId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetError {
    #[error("sheet title cannot be empty")]
    EmptyTitle,
}

/// A curated practice sheet: an ordered collection of questions owned by the
/// remote API. The application only ever holds a transient copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    id: SheetId,
    title: String,
    description: Option<String>,
    image: Option<String>,
    difficulty: Option<String>,
}

impl Sheet {
    /// Creates a new Sheet.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::EmptyTitle` if the title is empty or whitespace-only.
    pub fn new(
        id: SheetId,
        title: impl Into<String>,
        description: Option<String>,
        image: Option<String>,
        difficulty: Option<String>,
    ) -> Result<Self, SheetError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SheetError::EmptyTitle);
        }

        let description = description
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty());
        let image = image.map(|i| i.trim().to_owned()).filter(|i| !i.is_empty());
        let difficulty = difficulty
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty());

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            description,
            image,
            difficulty,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &SheetId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }
}

/// Input for the admin create-sheet operation. The remote API mints the ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetDraft {
    title: String,
    description: Option<String>,
    image: Option<String>,
    difficulty: Option<String>,
}

impl SheetDraft {
    /// Creates a draft, applying the same trimming rules as `Sheet::new`.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::EmptyTitle` if the title is empty or whitespace-only.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        image: Option<String>,
        difficulty: Option<String>,
    ) -> Result<Self, SheetError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SheetError::EmptyTitle);
        }

        Ok(Self {
            title: title.trim().to_owned(),
            description: description
                .map(|d| d.trim().to_owned())
                .filter(|d| !d.is_empty()),
            image: image.map(|i| i.trim().to_owned()).filter(|i| !i.is_empty()),
            difficulty: difficulty
                .map(|d| d.trim().to_owned())
                .filter(|d| !d.is_empty()),
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_new_rejects_empty_title() {
        let err = Sheet::new(SheetId::new("s1"), "   ", None, None, None).unwrap_err();
        assert_eq!(err, SheetError::EmptyTitle);
    }

    #[test]
    fn sheet_trims_title_and_filters_empty_description() {
        let sheet = Sheet::new(
            SheetId::new("s1"),
            "  Striver SDE  ",
            Some("   ".into()),
            None,
            Some("Medium".into()),
        )
        .unwrap();

        assert_eq!(sheet.title(), "Striver SDE");
        assert_eq!(sheet.description(), None);
        assert_eq!(sheet.difficulty(), Some("Medium"));
    }

    #[test]
    fn draft_applies_same_rules() {
        let err = SheetDraft::new("", None, None, None).unwrap_err();
        assert_eq!(err, SheetError::EmptyTitle);

        let draft = SheetDraft::new("Blind 75", Some(" classics ".into()), None, None).unwrap();
        assert_eq!(draft.title(), "Blind 75");
        assert_eq!(draft.description(), Some("classics"));
    }
}
