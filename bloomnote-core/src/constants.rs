//! Storage keys and defaults shared by the session controller and the web shell.

/// Storage key for the persistent miss counter (decimal string).
pub const MISS_COUNT_KEY: &str = "miss-count";

/// Storage key for the persistent nickname (raw string).
pub const NICKNAME_KEY: &str = "gf-nickname";

/// Nickname shown until the visitor types her own.
pub const DEFAULT_NICKNAME: &str = "bestie";

/// Address used in page copy when the nickname has been cleared.
pub const EMPTY_NICKNAME_ADDRESS: &str = "you";
