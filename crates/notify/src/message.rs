//! Webhook message payloads.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Display name the webhook posts under.
pub const BOT_NAME: &str = "Inventory Scanner Bot";

const ALERT_COLOR: u32 = 0xff0000;
const FOOTER_TEXT: &str = "Inventory Management System";
const BULK_FOOTER_TEXT: &str = "Inventory Management System - Bulk Alert";

/// Outbound webhook message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookMessage {
    pub content: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    /// ISO-8601 timestamp rendered by the chat client.
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

/// `<@id>` ping prefix, or nothing when no mention target is configured.
fn mention_prefix(mention_user_id: Option<&str>) -> String {
    match mention_user_id {
        Some(id) => format!("<@{id}> "),
        None => String::new(),
    }
}

/// Alert for a single scanned item.
pub fn low_stock_alert(
    item: &str,
    supplier: &str,
    mention_user_id: Option<&str>,
    now: DateTime<Utc>,
) -> WebhookMessage {
    WebhookMessage {
        content: format!(
            "{}🚨 LOW STOCK ALERT: {item} ({supplier})",
            mention_prefix(mention_user_id)
        ),
        username: BOT_NAME.to_string(),
        avatar_url: None,
        embeds: vec![Embed {
            title: "🚨 Low Stock Alert".to_string(),
            description: format!("**{item}** is running low and needs to be restocked"),
            color: ALERT_COLOR,
            fields: vec![
                EmbedField {
                    name: "📦 Item".to_string(),
                    value: item.to_string(),
                    inline: true,
                },
                EmbedField {
                    name: "🏢 Supplier".to_string(),
                    value: supplier.to_string(),
                    inline: true,
                },
                EmbedField {
                    name: "⏰ Alert Time".to_string(),
                    value: now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                    inline: true,
                },
                EmbedField {
                    name: "🔔 Action Required".to_string(),
                    value: "Please restock this item as soon as possible".to_string(),
                    inline: false,
                },
            ],
            footer: EmbedFooter {
                text: FOOTER_TEXT.to_string(),
            },
            timestamp: now.to_rfc3339(),
        }],
    }
}

/// One alert summarizing a multi-item selection, with one embed field per
/// supplier. `BTreeMap` keeps the field order deterministic regardless of
/// the order the caller assembled the groups in.
pub fn bulk_low_stock_alert(
    items_by_supplier: &BTreeMap<String, Vec<String>>,
    total_count: usize,
    timestamp: &str,
    mention_user_id: Option<&str>,
) -> WebhookMessage {
    let fields = items_by_supplier
        .iter()
        .map(|(supplier, items)| EmbedField {
            name: format!("🏢 {supplier} ({} items)", items.len()),
            value: items
                .iter()
                .map(|item| format!("• {item}"))
                .collect::<Vec<_>>()
                .join("\n"),
            inline: false,
        })
        .collect();

    WebhookMessage {
        content: format!(
            "{}🚨 **BULK LOW STOCK ALERT** - {total_count} items need restocking!",
            mention_prefix(mention_user_id)
        ),
        username: BOT_NAME.to_string(),
        avatar_url: None,
        embeds: vec![Embed {
            title: "🚨 Bulk Low Stock Alert".to_string(),
            description: format!(
                "**{total_count} items** are running low and need to be restocked immediately"
            ),
            color: ALERT_COLOR,
            fields,
            footer: EmbedFooter {
                text: BULK_FOOTER_TEXT.to_string(),
            },
            timestamp: timestamp.to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn single_alert_names_item_and_supplier() {
        let msg = low_stock_alert("Sugar", "FARINEX", None, test_time());

        assert!(msg.content.contains("Sugar"));
        assert!(msg.content.contains("FARINEX"));
        assert_eq!(msg.username, BOT_NAME);
        assert_eq!(msg.embeds.len(), 1);

        let embed = &msg.embeds[0];
        assert_eq!(embed.fields.len(), 4);
        assert_eq!(embed.fields[0].value, "Sugar");
        assert_eq!(embed.fields[1].value, "FARINEX");
        assert!(embed.fields[2].value.contains("2024-01-01"));
        assert_eq!(embed.timestamp, test_time().to_rfc3339());
    }

    #[test]
    fn mention_target_prefixes_the_content() {
        let with = low_stock_alert("Milk", "AGROPUR", Some("123456"), test_time());
        assert!(with.content.starts_with("<@123456> "));

        let without = low_stock_alert("Milk", "AGROPUR", None, test_time());
        assert!(without.content.starts_with("🚨"));
    }

    #[test]
    fn bulk_alert_groups_items_per_supplier() {
        let mut groups = BTreeMap::new();
        groups.insert("FARINEX".to_string(), vec!["Sugar".to_string(), "Flour".to_string()]);
        groups.insert("AGROPUR".to_string(), vec!["Milk".to_string()]);

        let msg = bulk_low_stock_alert(&groups, 3, "2024-01-01T00:00:00Z", None);

        assert!(msg.content.contains("3 items"));
        let embed = &msg.embeds[0];
        assert_eq!(embed.fields.len(), 2);

        // BTreeMap iteration: AGROPUR before FARINEX.
        assert_eq!(embed.fields[0].name, "🏢 AGROPUR (1 items)");
        assert_eq!(embed.fields[0].value, "• Milk");
        assert_eq!(embed.fields[1].name, "🏢 FARINEX (2 items)");
        assert_eq!(embed.fields[1].value, "• Sugar\n• Flour");
        assert!(embed.fields.iter().all(|f| !f.inline));
        assert_eq!(embed.timestamp, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn serialized_message_omits_missing_avatar() {
        let msg = low_stock_alert("Sugar", "FARINEX", None, test_time());
        let value = serde_json::to_value(&msg).unwrap();

        assert!(value.get("avatar_url").is_none());
        assert!(value.get("content").is_some());
        assert_eq!(value["embeds"][0]["color"], 0xff0000);
    }
}
