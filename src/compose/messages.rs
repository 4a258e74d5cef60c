use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::constants::messages::{COMMENT_TYPE_PREFIX, DEFAULT_MUTE_TYPE, KNOWN_MUTE_TYPES};

static KNOWN_TYPES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| KNOWN_MUTE_TYPES.iter().copied().collect());

/// Catalog keys for the mute explanation. Only keys, never text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuteMessageInfo {
    /// Resolved mute type
    pub name: &'static str,
    /// e.g. `comment.type.unconstructive`
    pub comment_type: String,
    pub step_header: String,
    pub step_content: Vec<String>,
}

/// Unset and unrecognized mute types both fall back to the default
pub fn mute_message_info(mute_type: Option<&str>) -> MuteMessageInfo {
    let name = mute_type
        .and_then(|t| KNOWN_TYPES.get(t).copied())
        .unwrap_or(DEFAULT_MUTE_TYPE);

    MuteMessageInfo {
        name,
        comment_type: format!("{}.{}", COMMENT_TYPE_PREFIX, name),
        step_header: format!("comment.{}.header", name),
        step_content: vec![
            format!("comment.{}.content1", name),
            format!("comment.{}.content2", name),
        ],
    }
}
