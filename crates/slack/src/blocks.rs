//! Slack Block Kit rendering of formatted messages.

use serde_json::{json, Value};
use statuswatch_core::{Message, Section};

/// Render message sections as Slack blocks.
///
/// Headers become `header` blocks, field groups become `section` blocks
/// with mrkdwn fields, text sections become `section` blocks with a single
/// mrkdwn text object.
pub fn render_blocks(message: &Message) -> Vec<Value> {
    message
        .sections
        .iter()
        .map(|section| match section {
            Section::Header(text) => json!({
                "type": "header",
                "text": {
                    "type": "plain_text",
                    "text": text,
                    "emoji": true,
                },
            }),
            Section::Fields(fields) => json!({
                "type": "section",
                "fields": fields
                    .iter()
                    .map(|field| json!({
                        "type": "mrkdwn",
                        "text": format!("*{}:*\n{}", field.label, field.value),
                    }))
                    .collect::<Vec<Value>>(),
            }),
            Section::Text(text) => json!({
                "type": "section",
                "text": {
                    "type": "mrkdwn",
                    "text": text,
                },
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use statuswatch_core::Field;

    #[test]
    fn sections_map_to_expected_block_types() {
        let message = Message {
            sections: vec![
                Section::Header("🔴 New York Server Incident".to_string()),
                Section::Fields(vec![Field {
                    label: "Status".to_string(),
                    value: "INVESTIGATING".to_string(),
                }]),
                Section::Text("<https://example.com|View Incident Details>".to_string()),
            ],
            accent_color: "#d63031".to_string(),
        };

        let blocks = render_blocks(&message);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0]["type"], "header");
        assert_eq!(
            blocks[0]["text"]["text"],
            "🔴 New York Server Incident"
        );
        assert_eq!(blocks[0]["text"]["emoji"], true);
        assert_eq!(blocks[1]["type"], "section");
        assert_eq!(
            blocks[1]["fields"][0]["text"],
            "*Status:*\nINVESTIGATING"
        );
        assert_eq!(blocks[2]["type"], "section");
        assert_eq!(
            blocks[2]["text"]["text"],
            "<https://example.com|View Incident Details>"
        );
    }
}
