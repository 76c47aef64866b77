//! The `inject` tag grammar
//!
//! Fields opt into injection with a struct tag carrying the `inject` key:
//!
//! - `inject` or `inject:""`: marker only, resolve the field by type
//! - `inject:"provider:<Name>"`: resolve by the named provider
//!
//! The tag value is a comma-separated list of `key:value` directives;
//! `provider` is the only recognized key. Parsing happens once, here, and
//! produces a closed [`Directive`] value; resolution never re-reads the
//! raw string.

use crate::error::DirectiveError;

/// How a field selects its provider
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Directive {
    /// Resolve by the field's type (marker-only tag)
    #[default]
    ByType,
    /// Resolve by provider name; short names fall back to suffix matching
    ByName(String),
}

impl Directive {
    /// The provider name carried by a `ByName` directive
    pub fn provider_name(&self) -> Option<&str> {
        match self {
            Directive::ByType => None,
            Directive::ByName(name) => Some(name),
        }
    }
}

/// Look up a key in a raw struct tag.
///
/// Tags are space-separated tokens, each either `key:"value"` or a bare
/// marker `key`. Returns `None` when the key is absent, `Some(None)` for a
/// bare marker, and `Some(Some(value))` for the value form. Escaped quotes
/// inside values are intentionally not handled.
pub fn lookup(tag: &str, key: &str) -> Option<Option<String>> {
    let mut rest = tag.trim_start();
    while !rest.is_empty() {
        let token_key_end = rest
            .find(|c: char| c == ':' || c.is_whitespace())
            .unwrap_or(rest.len());
        let token_key = &rest[..token_key_end];
        let after = &rest[token_key_end..];

        if let Some(value_part) = after.strip_prefix(":\"") {
            let close = match value_part.find('"') {
                Some(i) => i,
                None => return None,
            };
            if token_key == key {
                return Some(Some(value_part[..close].to_string()));
            }
            rest = value_part[close + 1..].trim_start();
        } else {
            if token_key == key && !token_key.is_empty() {
                return Some(None);
            }
            rest = after.trim_start_matches(':').trim_start();
            if token_key.is_empty() {
                // Avoid spinning on malformed input.
                rest = &rest[rest.len().min(1)..];
            }
        }
    }
    None
}

/// Parse the value of an `inject` tag into a [`Directive`].
///
/// An empty value is the marker-only form and resolves by type.
pub fn parse_directive(raw: &str) -> Result<Directive, DirectiveError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Directive::ByType);
    }

    let mut provider: Option<String> = None;
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let (key, value) = cut_kv(part).ok_or(DirectiveError::Malformed)?;
        match key {
            "provider" => {
                if value.is_empty() {
                    return Err(DirectiveError::EmptyValue(key.to_string()));
                }
                if provider.is_some() {
                    return Err(DirectiveError::DuplicateKey(key.to_string()));
                }
                provider = Some(value.to_string());
            }
            other => return Err(DirectiveError::UnknownKey(other.to_string())),
        }
    }

    Ok(match provider {
        Some(name) => Directive::ByName(name),
        None => Directive::ByType,
    })
}

fn cut_kv(s: &str) -> Option<(&str, &str)> {
    let i = s.find(':')?;
    let key = s[..i].trim();
    let value = s[i + 1..].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}
