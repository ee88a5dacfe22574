//! Delivery of command feedback to the host.
//!
//! Command handling only produces reply text; how it reaches the host is
//! decided here. The default mimics a system message: the host is renamed
//! to a label, the line is sent as them, and their name is put back.

use crate::config::{FeedbackConfig, FeedbackStyle};
use crate::error::PlatformResult;
use crate::platform::Participant;
use async_trait::async_trait;
use std::sync::Arc;

/// Sends one line of feedback to a participant.
#[async_trait]
pub trait FeedbackDelivery: Send + Sync {
    async fn deliver(&self, recipient: &dyn Participant, text: &str) -> PlatformResult<()>;
}

/// Build the delivery configured in `[feedback]`.
pub fn from_config(config: &FeedbackConfig) -> Arc<dyn FeedbackDelivery> {
    match config.style {
        FeedbackStyle::Disguised => Arc::new(DisguisedChat::new(&config.label, config.private)),
        FeedbackStyle::Whisper => Arc::new(DirectWhisper),
    }
}

/// Chat as the recipient while they wear a system label.
///
/// Other players briefly see the recipient under the label name.
pub struct DisguisedChat {
    label: String,
    private: bool,
}

impl DisguisedChat {
    pub fn new(label: impl Into<String>, private: bool) -> Self {
        Self {
            label: label.into(),
            private,
        }
    }
}

#[async_trait]
impl FeedbackDelivery for DisguisedChat {
    async fn deliver(&self, recipient: &dyn Participant, text: &str) -> PlatformResult<()> {
        let original = recipient.name();
        recipient.set_name(&self.label).await?;

        let sent = if self.private {
            recipient.send_chat_private(text).await
        } else {
            recipient.send_chat(text).await
        };

        // Restore even when the send failed.
        let restored = recipient.set_name(&original).await;
        sent.and(restored)
    }
}

/// Private chat as the recipient, without renaming.
pub struct DirectWhisper;

#[async_trait]
impl FeedbackDelivery for DirectWhisper {
    async fn deliver(&self, recipient: &dyn Participant, text: &str) -> PlatformResult<()> {
        recipient.send_chat_private(text).await
    }
}
