/// Mute categories the message catalog has copy for
pub const KNOWN_MUTE_TYPES: &[&str] = &[
    "pii",
    "unconstructive",
    "vulgarity",
    "spam",
    "general",
    "disrespectful",
];

/// Used whenever the mute type is unset or has no catalog entry
pub const DEFAULT_MUTE_TYPE: &str = "disrespectful";

/// Prefix for the "your comment was ..." line of the mute explanation
pub const COMMENT_TYPE_PREFIX: &str = "comment.type";

/// Prefix for rejection reasons shown in the compose error row
pub const ERROR_KEY_PREFIX: &str = "comments";

/// Server reason for rate-limited submissions
pub const FLOOD_ERROR: &str = "isFlood";

/// Server reason attached to mute rejections
pub const MUTED_ERROR: &str = "isMuted";

/// Reason used when the server rejects without saying why, or says something unreadable
pub const UNKNOWN_ERROR: &str = "isUnknown";

/// Reason used when no response arrived at all
pub const NETWORK_ERROR: &str = "isNetworkError";
