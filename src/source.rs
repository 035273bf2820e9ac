//! Loading allowlists from files
//!
//! Two formats are accepted:
//! - `.json`: an array of address strings, or an object with a `whitelist` array
//! - anything else: one address per line, `#` starts a comment

use crate::model::Allowlist;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonAllowlist {
    List(Vec<String>),
    Object { whitelist: Vec<String> },
}

/// Load and parse an allowlist file
pub fn load_allowlist(path: impl AsRef<Path>) -> Result<Allowlist> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    let addresses = if is_json {
        parse_json(&content)?
    } else {
        parse_lines(&content)
    };

    debug!(path = %path.display(), count = addresses.len(), "loaded allowlist");
    Allowlist::parse(addresses)
}

/// Parse a JSON allowlist document
pub fn parse_json(content: &str) -> Result<Vec<String>> {
    match serde_json::from_str::<JsonAllowlist>(content) {
        Ok(JsonAllowlist::List(list)) | Ok(JsonAllowlist::Object { whitelist: list }) => Ok(list),
        Err(e) => Err(Error::Config(format!(
            "expected an array of addresses or an object with a `whitelist` array: {}",
            e
        ))),
    }
}

/// Parse a line-oriented allowlist, skipping blanks and comments
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
