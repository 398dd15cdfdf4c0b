//! Mention extraction
//!
//! Recognizes `@name` and `@name@host` tokens that start the text or follow
//! whitespace. An explicit local host folds into a local account.

use std::sync::LazyLock;

use regex::Regex;
use shared_types::{AccountId, Host};

static MENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)@([A-Za-z0-9_.\-]+)(?:@([A-Za-z0-9.\-]+(?::[0-9]{1,5})?))?").unwrap()
});

/// Distinct accounts mentioned in `text`, in order of first appearance.
pub fn extract_mentions(text: &str, local_host: &Host) -> Vec<AccountId> {
    let mut mentions: Vec<AccountId> = Vec::new();

    for caps in MENTION_REGEX.captures_iter(text) {
        let Some(name) = caps.get(1).map(|m| m.as_str().trim_end_matches(['.', '-'])) else {
            continue;
        };
        let handle = match caps.get(2) {
            Some(host) => format!("{name}@{}", host.as_str().trim_end_matches(['.', '-'])),
            None => name.to_string(),
        };

        let Ok(account) = AccountId::parse_relative(&handle, local_host) else {
            continue;
        };
        if !mentions.contains(&account) {
            mentions.push(account);
        }
    }

    mentions
}
