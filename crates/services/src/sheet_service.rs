use std::sync::Arc;

use api::SheetApi;
use tracker_core::model::{Question, Sheet, SheetId};

use crate::error::SheetServiceError;

/// Read-only access to the public sheet catalog. No authentication, no
/// caching; every call goes to the remote.
pub struct SheetService {
    sheets: Arc<dyn SheetApi>,
}

impl SheetService {
    #[must_use]
    pub fn new(sheets: Arc<dyn SheetApi>) -> Self {
        Self { sheets }
    }

    /// List every sheet in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Api` when the remote call fails.
    pub async fn list_sheets(&self) -> Result<Vec<Sheet>, SheetServiceError> {
        Ok(self.sheets.list_sheets().await?)
    }

    /// Fetch one sheet by ID.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Api` when the sheet does not exist or the
    /// remote call fails.
    pub async fn get_sheet(&self, id: &SheetId) -> Result<Sheet, SheetServiceError> {
        Ok(self.sheets.get_sheet(id).await?)
    }

    /// List the questions belonging to a sheet.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Api` when the remote call fails.
    pub async fn list_questions(
        &self,
        sheet_id: &SheetId,
    ) -> Result<Vec<Question>, SheetServiceError> {
        Ok(self.sheets.list_questions(sheet_id).await?)
    }
}
