//! Notifier trait and the webhook message model it delivers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// A webhook message, serialized in the Discord webhook JSON format.
///
/// Empty strings, empty lists and absent media are left out of the JSON
/// entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    /// Overrides the webhook's default username.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,
    /// Overrides the webhook's default avatar.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub avatar_url: String,
    /// Plain message text above the embeds.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// Rich embeds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

/// A rich embed block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    /// Author line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    /// Title text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Link attached to the title.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Body text (Markdown).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Sidebar colour as `0xRRGGBB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    /// Named text fields, rendered in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    /// Small image in the top-right corner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
    /// Large image below the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
    /// Footer line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

/// Embed author line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    /// Author name.
    pub name: String,
    /// Link attached to the name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Author icon.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon_url: String,
}

/// One named embed field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedField {
    /// Field heading.
    pub name: String,
    /// Field body (Markdown).
    pub value: String,
    /// Whether the field may share a row with its neighbours.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inline: bool,
}

impl EmbedField {
    /// Create a full-width field.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }

    /// Create an inline field.
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            inline: true,
            ..Self::new(name, value)
        }
    }
}

/// An image or thumbnail reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedMedia {
    /// Image URL.
    pub url: String,
}

/// Embed footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedFooter {
    /// Footer text.
    pub text: String,
    /// Footer icon.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon_url: String,
}

/// Delivers webhook messages.
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug + 'static {
    /// Post `message` to `webhook_url`.
    ///
    /// Fails with [`ErrorKind::Delivery`](crate::error::ErrorKind::Delivery)
    /// on transport errors or a non-success response. Never retries.
    async fn send_message(&self, webhook_url: &str, message: &WebhookMessage) -> AppResult<()>;
}
