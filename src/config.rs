//! Service configuration, built once at startup and handed to the
//! handler explicitly. Nothing reads the process environment after
//! construction, which keeps the core testable.

use anyhow::{Context, Result, bail};

use crate::consts::{
    DEFAULT_BIND_ADDR, DEFAULT_PAGE_ID, DEFAULT_PAGE_NAME, ENV_BIND_ADDR, ENV_PAGE_ID,
    ENV_PAGE_NAME, ENV_PAGE_TOKEN, ENV_SECRET,
};

/// Everything the webhook needs to run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Value the `secret` query parameter must equal.
    pub expected_secret: String,
    /// User access token passed to the publisher when resolving the page.
    pub page_auth_token: String,
    /// Numeric ID of the page the bot posts to.
    pub page_id: u64,
    /// Display name used when registering the page.
    pub page_name: String,
    /// Address the HTTP server listens on.
    pub bind_addr: String,
}

impl Config {
    /// Build a config from the process environment.
    /// `REQ_SECRET` and `FB_TOKEN` are required; the rest have defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    /// Lets tests supply variables without touching the real environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let expected_secret = match lookup(ENV_SECRET) {
            Some(s) if !s.is_empty() => s,
            _ => bail!("{} must be set to a non-empty secret", ENV_SECRET),
        };
        let page_auth_token = match lookup(ENV_PAGE_TOKEN) {
            Some(t) if !t.is_empty() => t,
            _ => bail!("{} must be set to a page access token", ENV_PAGE_TOKEN),
        };
        let page_id = match lookup(ENV_PAGE_ID) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("{} is not a valid page id: {:?}", ENV_PAGE_ID, raw))?,
            None => DEFAULT_PAGE_ID,
        };
        let page_name = lookup(ENV_PAGE_NAME).unwrap_or_else(|| DEFAULT_PAGE_NAME.to_string());
        let bind_addr = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            expected_secret,
            page_auth_token,
            page_id,
            page_name,
            bind_addr,
        })
    }
}
