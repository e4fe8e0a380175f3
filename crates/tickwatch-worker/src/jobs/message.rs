//! Builds the change notification.

use tracing::warn;

use tickwatch_core::config::{DiscordConfig, EventConfig};
use tickwatch_core::result::AppResult;
use tickwatch_core::traits::{Embed, EmbedField, EmbedMedia, WebhookMessage};
use tickwatch_core::types::{AttendeeSnapshot, EventInfo};
use tickwatch_revenue::{allocate, render_breakdown};

/// Currency assumed when neither config nor the platform names one.
const DEFAULT_CURRENCY: &str = "SEK";

/// Pick the configured value, else the platform's.
fn prefer<'a>(configured: &'a str, reported: &'a str) -> &'a str {
    if configured.is_empty() {
        reported
    } else {
        configured
    }
}

/// Compose the message announcing the move from `previous` to `current`.
///
/// A revenue field is added when a price list is configured; a capacity
/// field when the platform reports one.
pub fn build_message(
    current: &AttendeeSnapshot,
    previous: &AttendeeSnapshot,
    event: &EventConfig,
    discord: &DiscordConfig,
    info: &EventInfo,
) -> AppResult<WebhookMessage> {
    let description = format!(
        "**Det är {} registrerade besökare.**\n\
         Senaste kontroll var vid *{}* då fanns det {} registrerade besökare.",
        current.count,
        previous.timestamp(),
        previous.count
    );

    let mut fields = vec![EmbedField::inline(
        "Förändring",
        format!("{:+}", current.count.saturating_sub(previous.count)),
    )];

    if let Some(capacity) = info.total_capacity {
        fields.push(EmbedField::inline(
            "Kapacitet",
            format!("{} / {}", current.count, capacity),
        ));
    }

    if !event.price_list.is_empty() {
        let currency = match prefer(&event.currency, &info.currency) {
            "" => DEFAULT_CURRENCY,
            c => c,
        };
        match allocate(&event.price_list, current.count) {
            Ok(allocation) => {
                if allocation.has_overflow() {
                    warn!(
                        "{} attendees exceed the configured price list capacity",
                        allocation.overflow_units
                    );
                }
                fields.push(EmbedField::new(
                    "Uppskattad intäkt",
                    render_breakdown(&allocation, currency),
                ));
            }
            Err(e) => warn!("Skipping revenue estimate: {}", e),
        }
    }

    let image = (!event.image_url.is_empty()).then(|| EmbedMedia {
        url: event.image_url.clone(),
    });

    Ok(WebhookMessage {
        username: discord.username.clone(),
        avatar_url: discord.avatar_url.clone(),
        content: String::new(),
        embeds: vec![Embed {
            title: prefer(&event.title, &info.name).to_string(),
            url: prefer(&event.url, &info.public_url).to_string(),
            description,
            color: discord.color,
            fields,
            image,
            ..Default::default()
        }],
    })
}
