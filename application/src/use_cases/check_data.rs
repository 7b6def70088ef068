//! Check data use case.
//!
//! Loads every stored conversation to make sure all of them still parse.

use crate::ports::conversation_repository::{ConversationRepository, StorageError};
use crate::ports::view::ChatView;
use std::sync::Arc;
use tracing::{error, info};

pub struct CheckDataUseCase {
    repository: Arc<dyn ConversationRepository>,
    view: Arc<dyn ChatView>,
}

impl CheckDataUseCase {
    pub fn new(repository: Arc<dyn ConversationRepository>, view: Arc<dyn ChatView>) -> Self {
        Self { repository, view }
    }

    /// Returns how many conversations are stored. The first one that
    /// fails to load aborts the check with its error.
    pub fn execute(&self) -> Result<usize, StorageError> {
        let ids = self.repository.list_ids()?;
        self.view.show_data_report(ids.len());

        for id in &ids {
            if let Err(e) = self.repository.load(*id) {
                error!("Conversation {} failed to load: {}", id, e);
                return Err(e);
            }
        }

        info!("Checked {} stored conversations", ids.len());
        Ok(ids.len())
    }
}
