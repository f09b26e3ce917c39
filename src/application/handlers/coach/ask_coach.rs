//! AskCoachHandler - Command handler for one coach chat turn.
//!
//! The handler forwards the learner's message, with the transcript before
//! it, to the configured completion provider. Provider trouble never
//! reaches the caller: a missing provider, an empty reply and a failed call
//! each become a fixed model message in the transcript.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::adapters::ai::coach_provider;
use crate::config::AiConfig;
use crate::domain::coach::{
    CoachPanel, PendingTurn, COACH_SYSTEM_INSTRUCTION, EMPTY_REPLY, FAILURE_REPLY, OFFLINE_REPLY,
};
use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata};

/// Default cap on reply length.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 512;

/// Command to send one message to the coach.
#[derive(Debug, Clone)]
pub struct AskCoachCommand {
    /// Journey the chat belongs to, for log correlation.
    pub session_id: Option<SessionId>,
    pub text: String,
}

impl AskCoachCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            session_id: None,
            text: text.into(),
        }
    }

    pub fn for_session(session_id: SessionId, text: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id),
            text: text.into(),
        }
    }
}

/// How a reply was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachReplySource {
    /// The provider answered.
    Provider,
    /// No provider is configured.
    Offline,
    /// The provider answered with nothing.
    EmptyReply,
    /// The call failed.
    Failure,
}

/// Result of one coach turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskCoachResult {
    /// Text appended to the transcript as the model turn.
    pub reply: String,
    pub source: CoachReplySource,
}

/// Handler for coach chat turns.
pub struct AskCoachHandler {
    provider: Option<Arc<dyn AIProvider>>,
    max_output_tokens: u32,
}

impl AskCoachHandler {
    /// Creates a handler. `None` means no credential is configured and the
    /// coach answers with the offline message.
    pub fn new(provider: Option<Arc<dyn AIProvider>>) -> Self {
        Self {
            provider,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn is_online(&self) -> bool {
        self.provider.is_some()
    }

    /// Builds the handler from settings: Gemini when a credential is set,
    /// offline otherwise, with the configured reply cap.
    ///
    /// # Errors
    ///
    /// Returns `AIError::InvalidRequest` if the HTTP client cannot be built.
    pub fn from_config(config: &AiConfig) -> Result<Self, AIError> {
        Ok(Self::new(coach_provider(config)?).with_max_output_tokens(config.max_output_tokens))
    }

    /// Runs one turn against the shared panel.
    ///
    /// The panel lock is released while the provider call is outstanding, so
    /// a concurrent submission sees the pending flag and is rejected. The call
    /// runs on its own task, which always finishes the turn: dropping the
    /// returned future does not leave the panel pending.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for blank input
    /// - `CoachBusy` while another turn is outstanding
    pub async fn handle(
        &self,
        panel: &Arc<Mutex<CoachPanel>>,
        cmd: AskCoachCommand,
    ) -> Result<AskCoachResult, DomainError> {
        let turn = panel.lock().await.begin_turn(&cmd.text)?;

        let provider = self.provider.clone();
        let max_output_tokens = self.max_output_tokens;
        let shared = Arc::clone(panel);
        let task = tokio::spawn(async move {
            let (reply, source) =
                complete_turn(provider.as_deref(), turn, cmd.session_id, max_output_tokens).await;
            shared.lock().await.finish_turn(reply.clone());
            AskCoachResult { reply, source }
        });

        match task.await {
            Ok(result) => Ok(result),
            Err(err) => {
                tracing::error!(error = %err, "Coach turn task failed");
                let mut panel = panel.lock().await;
                if panel.is_pending() {
                    panel.finish_turn(FAILURE_REPLY);
                }
                Ok(AskCoachResult {
                    reply: FAILURE_REPLY.to_string(),
                    source: CoachReplySource::Failure,
                })
            }
        }
    }
}

/// Produces the model text for one turn. Never fails.
async fn complete_turn(
    provider: Option<&dyn AIProvider>,
    turn: PendingTurn,
    session_id: Option<SessionId>,
    max_output_tokens: u32,
) -> (String, CoachReplySource) {
    let Some(provider) = provider else {
        tracing::warn!("Coach has no completion provider configured; replying offline");
        return (OFFLINE_REPLY.to_string(), CoachReplySource::Offline);
    };

    let trace_id = Uuid::new_v4().to_string();
    let metadata = match session_id {
        Some(session_id) => RequestMetadata::for_session(session_id, trace_id),
        None => RequestMetadata::new(trace_id),
    };
    let request = CompletionRequest::new(metadata)
        .with_history(&turn.history)
        .with_message(MessageRole::User, turn.message.as_str())
        .with_system_prompt(COACH_SYSTEM_INSTRUCTION)
        .with_max_tokens(max_output_tokens);

    match provider.complete(request).await {
        Ok(response) if response.content.trim().is_empty() => {
            tracing::warn!(model = %response.model, "Coach provider returned an empty reply");
            (EMPTY_REPLY.to_string(), CoachReplySource::EmptyReply)
        }
        Ok(response) => {
            tracing::debug!(
                model = %response.model,
                total_tokens = response.usage.total_tokens,
                "Coach reply received"
            );
            (response.content, CoachReplySource::Provider)
        }
        Err(err) if err.is_transient() => {
            tracing::warn!(error = %err, "Coach provider call failed");
            (FAILURE_REPLY.to_string(), CoachReplySource::Failure)
        }
        Err(err) => {
            tracing::error!(error = %err, "Coach provider call failed");
            (FAILURE_REPLY.to_string(), CoachReplySource::Failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::coach::{ChatMessage, ChatRole, COACH_GREETING};
    use crate::domain::foundation::ErrorCode;
    use crate::ports::Message;
    use std::time::Duration;

    fn online(mock: &MockAIProvider) -> AskCoachHandler {
        AskCoachHandler::new(Some(Arc::new(mock.clone())))
    }

    #[tokio::test]
    async fn offline_handler_appends_offline_reply() {
        let handler = AskCoachHandler::new(None);
        let panel = Arc::new(Mutex::new(CoachPanel::new()));

        let result = handler
            .handle(&panel, AskCoachCommand::new("What is a token?"))
            .await
            .unwrap();

        assert_eq!(result.source, CoachReplySource::Offline);
        assert_eq!(result.reply, OFFLINE_REPLY);
        let panel = panel.lock().await;
        assert_eq!(panel.messages().len(), 3);
        assert_eq!(panel.messages()[2], ChatMessage::model(OFFLINE_REPLY));
        assert!(!panel.is_pending());
    }

    #[tokio::test]
    async fn request_carries_history_message_and_instruction() {
        let mock = MockAIProvider::new().with_response("A token is a chunk of text.");
        let handler = online(&mock).with_max_output_tokens(256);
        let panel = Arc::new(Mutex::new(CoachPanel::new()));

        let result = handler
            .handle(&panel, AskCoachCommand::new("  What is a token?  "))
            .await
            .unwrap();

        assert_eq!(result.source, CoachReplySource::Provider);
        let calls = mock.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].messages,
            vec![
                Message::model(COACH_GREETING),
                Message::user("What is a token?")
            ]
        );
        assert_eq!(calls[0].system_prompt.as_deref(), Some(COACH_SYSTEM_INSTRUCTION));
        assert_eq!(calls[0].max_tokens, Some(256));
        assert_eq!(
            panel.lock().await.messages().last().map(|m| m.role),
            Some(ChatRole::Model)
        );
    }

    #[tokio::test]
    async fn blank_reply_becomes_rephrase_prompt() {
        let mock = MockAIProvider::new().with_response("   ");
        let handler = online(&mock);
        let panel = Arc::new(Mutex::new(CoachPanel::new()));

        let result = handler
            .handle(&panel, AskCoachCommand::new("Hello"))
            .await
            .unwrap();

        assert_eq!(result.source, CoachReplySource::EmptyReply);
        assert_eq!(result.reply, EMPTY_REPLY);
    }

    #[tokio::test]
    async fn provider_failure_becomes_apology() {
        let mock = MockAIProvider::new().with_error(MockError::AuthenticationFailed);
        let handler = online(&mock);
        let panel = Arc::new(Mutex::new(CoachPanel::new()));

        let result = handler
            .handle(&panel, AskCoachCommand::new("Hello"))
            .await
            .unwrap();

        assert_eq!(result.source, CoachReplySource::Failure);
        assert_eq!(result.reply, FAILURE_REPLY);
        assert!(!panel.lock().await.is_pending());
    }

    #[tokio::test]
    async fn failure_is_not_retried() {
        let mock = MockAIProvider::new().with_error(MockError::Timeout { timeout_secs: 30 });
        let handler = online(&mock);
        let panel = Arc::new(Mutex::new(CoachPanel::new()));

        handler
            .handle(&panel, AskCoachCommand::new("Hello"))
            .await
            .unwrap();

        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn blank_input_is_rejected_without_calling_provider() {
        let mock = MockAIProvider::new();
        let handler = online(&mock);
        let panel = Arc::new(Mutex::new(CoachPanel::new()));

        let err = handler
            .handle(&panel, AskCoachCommand::new("   "))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(mock.call_count(), 0);
        assert_eq!(panel.lock().await.messages().len(), 1);
    }

    #[tokio::test]
    async fn second_submission_while_pending_is_busy() {
        let mock = MockAIProvider::new()
            .with_response("slow answer")
            .with_delay(Duration::from_millis(100));
        let handler = Arc::new(online(&mock));
        let panel = Arc::new(Mutex::new(CoachPanel::new()));

        let first = {
            let handler = handler.clone();
            let panel = panel.clone();
            tokio::spawn(async move {
                handler
                    .handle(&panel, AskCoachCommand::new("first"))
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        let err = handler
            .handle(&panel, AskCoachCommand::new("second"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CoachBusy);

        let reply = first.await.unwrap().unwrap();
        assert_eq!(reply.reply, "slow answer");
        let panel = panel.lock().await;
        assert_eq!(panel.messages().len(), 3);
        assert_eq!(panel.messages()[1].text, "first");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn dropped_turn_still_finishes_and_frees_the_panel() {
        let mock = MockAIProvider::new()
            .with_response("late answer")
            .with_delay(Duration::from_millis(200));
        let handler = online(&mock);
        let panel = Arc::new(Mutex::new(CoachPanel::new()));

        let timed_out = tokio::time::timeout(
            Duration::from_millis(20),
            handler.handle(&panel, AskCoachCommand::new("first")),
        )
        .await;
        assert!(timed_out.is_err());
        assert!(panel.lock().await.is_pending());

        tokio::time::sleep(Duration::from_millis(400)).await;
        {
            let panel = panel.lock().await;
            assert!(!panel.is_pending());
            assert_eq!(panel.messages().last(), Some(&ChatMessage::model("late answer")));
        }

        let later = handler
            .handle(&panel, AskCoachCommand::new("later"))
            .await
            .unwrap();
        assert_eq!(later.source, CoachReplySource::Provider);
        assert_eq!(panel.lock().await.messages().len(), 5);
    }

    #[test]
    fn from_config_without_key_is_offline_with_configured_cap() {
        let config = AiConfig {
            max_output_tokens: 128,
            ..AiConfig::default()
        };

        let handler = AskCoachHandler::from_config(&config).unwrap();

        assert!(!handler.is_online());
        assert_eq!(handler.max_output_tokens, 128);
    }

    #[test]
    fn from_config_with_key_is_online() {
        let config = AiConfig {
            gemini_api_key: Some(secrecy::Secret::new("test-key".to_string())),
            ..AiConfig::default()
        };

        let handler = AskCoachHandler::from_config(&config).unwrap();

        assert!(handler.is_online());
        assert_eq!(handler.max_output_tokens, DEFAULT_MAX_OUTPUT_TOKENS);
    }
}
