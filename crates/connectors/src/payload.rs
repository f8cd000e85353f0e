use chrono::Utc;
use model::record::ChangelogRecord;
use serde_json::{Value, json};

const EMBED_COLOR: u32 = 0xFF0000;
const EMBED_TITLE: &str = "📢 Nova atualização";
const FOOTER_TEXT: &str = "© 2025 General Store | @everyone";

/// Builds the webhook payload (a single Discord-style embed) for one
/// changelog record.
pub fn build_message(record: &ChangelogRecord) -> Value {
    json!({
        "embeds": [{
            "title": EMBED_TITLE,
            "color": EMBED_COLOR,
            "fields": [
                {
                    "name": "📑 Mensagem",
                    "value": message_field(record),
                    "inline": false
                },
                {
                    "name": "⏰ Date",
                    "value": date_field(record),
                    "inline": false
                }
            ],
            "footer": { "text": FOOTER_TEXT }
        }]
    })
}

/// Bilingual body when the record carries split variants, the raw message
/// otherwise, with placeholders for whatever is missing.
fn message_field(record: &ChangelogRecord) -> String {
    match (&record.message_pt, &record.message_en) {
        (None, None) => record
            .message
            .clone()
            .unwrap_or_else(|| "Mensagem não encontrada".to_string()),
        (pt, en) => format!(
            "🇧🇷 {}\n🇺🇸 {}",
            pt.as_deref().unwrap_or("Mensagem PT não encontrada"),
            en.as_deref().unwrap_or("Message EN not found"),
        ),
    }
}

fn date_field(record: &ChangelogRecord) -> String {
    record
        .created_at
        .clone()
        .unwrap_or_else(|| Utc::now().to_rfc3339())
        .replace('T', " ")
        .replace('Z', "")
}
