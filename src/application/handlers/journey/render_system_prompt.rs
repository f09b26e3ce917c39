//! RenderSystemPromptHandler - Query handler for the final artifact.
//!
//! Only a finished journey has a prompt. The handler reads the stored
//! profile and returns the generated prompt with its recommendation cards.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::journey::AppView;
use crate::domain::profile::UserProfile;
use crate::domain::prompt::{generate_system_prompt, Recommendations, SystemPrompt};
use crate::ports::JourneyStore;

use super::JourneyError;

/// Query for a journey's generated system prompt.
#[derive(Debug, Clone)]
pub struct RenderSystemPromptQuery {
    pub session_id: SessionId,
}

/// The final screen's content.
#[derive(Debug, Clone)]
pub struct RenderSystemPromptResult {
    pub prompt: SystemPrompt,
    pub recommendations: Recommendations,
    pub profile: UserProfile,
}

/// Handler for rendering the system prompt.
pub struct RenderSystemPromptHandler {
    store: Arc<dyn JourneyStore>,
}

impl RenderSystemPromptHandler {
    pub fn new(store: Arc<dyn JourneyStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: RenderSystemPromptQuery,
    ) -> Result<RenderSystemPromptResult, JourneyError> {
        let state = self.store.load(query.session_id).await?;

        if state.view() != AppView::Final {
            return Err(DomainError::invalid_transition(
                "System prompt is available once all modules are complete",
            )
            .with_detail("view", state.view().as_str())
            .into());
        }

        let profile = state.profile().clone();
        let prompt = generate_system_prompt(&profile);
        let recommendations = Recommendations::for_profile(&profile);

        tracing::debug!(
            session_id = %query.session_id,
            format = ?prompt.format,
            temperature = prompt.temperature,
            "System prompt rendered"
        );

        Ok(RenderSystemPromptResult {
            prompt,
            recommendations,
            profile,
        })
    }
}
