//! Account-level order tags.

use serde::{Deserialize, Serialize};

/// A tag defined on the account, applicable to orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// The tag identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<i64>,

    /// The tag display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The hex color the tag is shown in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_deserialization() {
        let json = r##"{"tagId": 1234, "name": "Urgent", "color": "#FF0000"}"##;
        let tag: Tag = serde_json::from_str(json).unwrap();

        assert_eq!(tag.tag_id, Some(1234));
        assert_eq!(tag.name.as_deref(), Some("Urgent"));
        assert_eq!(tag.color.as_deref(), Some("#FF0000"));
    }
}
