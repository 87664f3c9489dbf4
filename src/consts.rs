//! Project-wide constants.

/// Datamuse word-lookup endpoint. `?rel_rhy=<word>` returns rhymes.
pub const DATAMUSE_URL: &str = "https://api.datamuse.com/words";

/// Facebook Graph API base.
pub const GRAPH_API_URL: &str = "https://graph.facebook.com/v19.0";

/// Upper bound on rhyme candidates requested per lookup.
/// Datamuse caps responses at 1000; we never need that many.
pub const RHYME_LIMIT: u32 = 100;

/// The page the bot posts to when `PAGE_ID` is not set.
pub const DEFAULT_PAGE_ID: u64 = 449_469_508_916_064;

/// Display name used when registering the page.
pub const DEFAULT_PAGE_NAME: &str = "RhymeBot";

/// Default listen address when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

// Environment variable names consumed by `Config::from_env`.
pub const ENV_SECRET: &str = "REQ_SECRET";
pub const ENV_PAGE_TOKEN: &str = "FB_TOKEN";
pub const ENV_PAGE_ID: &str = "PAGE_ID";
pub const ENV_PAGE_NAME: &str = "PAGE_NAME";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!DATAMUSE_URL.is_empty());
        assert!(!GRAPH_API_URL.is_empty());
        assert!(!DEFAULT_PAGE_NAME.is_empty());
        assert!(!DEFAULT_BIND_ADDR.is_empty());
    }

    #[test]
    fn urls_are_https() {
        assert!(DATAMUSE_URL.starts_with("https://"));
        assert!(GRAPH_API_URL.starts_with("https://"));
    }

    #[test]
    fn urls_have_no_trailing_slash() {
        // Request paths are joined with format!("{}/{}", ...), so a
        // trailing slash here would produce a double slash.
        assert!(!GRAPH_API_URL.ends_with('/'));
        assert!(!DATAMUSE_URL.ends_with('/'));
    }
}
