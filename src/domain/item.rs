use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// The kind of motivational content an item carries.
///
/// Fixed at creation; the core only round-trips this field, it never
/// interprets `content` based on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Quote,
    Image,
    Video,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Quote => "quote",
            ItemKind::Image => "image",
            ItemKind::Video => "video",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "quote" => Some(ItemKind::Quote),
            "image" => Some(ItemKind::Image),
            "video" => Some(ItemKind::Video),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub kind: ItemKind,
    pub content: String,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(kind: ItemKind, content: String, score: i64) -> Self {
        let created_at = Utc::now();
        let id = Self::generate_id(kind, &content, &created_at);
        Self {
            id,
            kind,
            content,
            score,
            created_at,
        }
    }

    /// Generate a deterministic ID from the item's kind, content and
    /// creation timestamp (nanosecond precision).
    pub fn generate_id(kind: ItemKind, content: &str, created_at: &DateTime<Utc>) -> String {
        let mut hasher = Sha256::new();
        hasher.update(kind.as_str().as_bytes());
        hasher.update(content.as_bytes());
        hasher.update(
            created_at
                .timestamp_nanos_opt()
                .unwrap_or_else(|| created_at.timestamp_micros())
                .to_le_bytes(),
        );
        hex::encode(hasher.finalize())
    }

    /// Content preview for list output, truncated on a char boundary.
    pub fn display_content(&self, max_chars: usize) -> String {
        if self.content.chars().count() <= max_chars {
            self.content.clone()
        } else {
            let truncated: String = self.content.chars().take(max_chars).collect();
            format!("{}…", truncated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generation_deterministic() {
        let at = Utc::now();
        let id1 = Item::generate_id(ItemKind::Quote, "Stay strong", &at);
        let id2 = Item::generate_id(ItemKind::Quote, "Stay strong", &at);
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_id_generation_different_inputs() {
        let at = Utc::now();
        let id1 = Item::generate_id(ItemKind::Quote, "Stay strong", &at);
        let id2 = Item::generate_id(ItemKind::Quote, "Keep going", &at);
        let id3 = Item::generate_id(ItemKind::Image, "Stay strong", &at);
        assert_ne!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_id_is_hex_sha256() {
        let item = Item::new(ItemKind::Video, "https://example.com/v".into(), 10);
        assert_eq!(item.id.len(), 64); // SHA256 produces 32 bytes = 64 hex chars
        assert!(item.id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in [ItemKind::Quote, ItemKind::Image, ItemKind::Video] {
            assert_eq!(ItemKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ItemKind::parse("meme"), None);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ItemKind::Quote).unwrap();
        assert_eq!(json, "\"quote\"");
    }

    #[test]
    fn test_display_content_short() {
        let item = Item::new(ItemKind::Quote, "Stay strong".into(), 10);
        assert_eq!(item.display_content(40), "Stay strong");
    }

    #[test]
    fn test_display_content_truncates() {
        let item = Item::new(ItemKind::Quote, "abcdefghij".into(), 4);
        assert_eq!(item.display_content(4), "abcd…");
    }
}
