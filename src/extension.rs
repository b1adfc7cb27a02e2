use std::collections::BTreeSet;

use crate::error::PathKindError;
use crate::traits::ExtensionGroups;

/// Marks an extension, and on its own stands for "any extension".
pub const EXTENSION_MARKER: char = '.';

// ---------------------------------------------------------------------------
// ExtensionToken
// ---------------------------------------------------------------------------

/// One entry of a caller's valid-extensions list, after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionToken {
    /// `"."` — any extension, including none.
    Wildcard,

    /// `""` — no extension.
    None,

    /// A literal extension such as `".txt"`.
    Named(String),

    /// A named group such as `"image"`, already expanded to its members.
    Group { name: String, members: Vec<String> },
}

impl ExtensionToken {
    /// Classify a raw token.
    ///
    /// # Errors
    ///
    /// [`PathKindError::MalformedExtension`] if the token is neither empty,
    /// the wildcard, a group known to `groups`, nor text starting with `.`.
    pub fn parse(token: &str, groups: &dyn ExtensionGroups) -> Result<Self, PathKindError> {
        if token.len() == 1 && token.starts_with(EXTENSION_MARKER) {
            return Ok(Self::Wildcard);
        }
        if token.is_empty() {
            return Ok(Self::None);
        }
        if let Some(members) = groups.lookup(&token.to_ascii_lowercase()) {
            return Ok(Self::Group { name: token.to_string(), members });
        }
        if token.starts_with(EXTENSION_MARKER) {
            return Ok(Self::Named(token.to_string()));
        }
        Err(PathKindError::MalformedExtension(token.to_string()))
    }
}

/// Validate every raw token, failing on the first malformed one.
///
/// # Errors
///
/// [`PathKindError::EmptyExtensionSpec`] for an empty list,
/// [`PathKindError::MalformedExtension`] for a bad token.
pub fn validate<I, S>(tokens: I, groups: &dyn ExtensionGroups) -> Result<Vec<ExtensionToken>, PathKindError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed = tokens
        .into_iter()
        .map(|t| ExtensionToken::parse(t.as_ref(), groups))
        .collect::<Result<Vec<_>, _>>()?;

    if parsed.is_empty() {
        return Err(PathKindError::EmptyExtensionSpec);
    }
    Ok(parsed)
}

// ---------------------------------------------------------------------------
// ExtensionSpec
// ---------------------------------------------------------------------------

/// A resolved set of accepted extensions.
///
/// A wildcard anywhere in the input swallows every other entry, so two
/// specs that both contain a wildcard compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSpec {
    extensions:   BTreeSet<String>,
    has_wildcard: bool,
    has_none:     bool,
    has_explicit: bool,
}

impl ExtensionSpec {
    /// The spec used when the caller names no extensions: anything goes.
    pub fn wildcard() -> Self {
        Self { has_wildcard: true, ..Self::default() }
    }

    /// Collapse classified tokens into a spec. Never fails.
    pub fn resolve(tokens: &[ExtensionToken]) -> Self {
        if tokens.iter().any(|t| matches!(t, ExtensionToken::Wildcard)) {
            return Self::wildcard();
        }

        let mut spec = Self::default();
        for token in tokens {
            match token {
                ExtensionToken::Wildcard => {}
                ExtensionToken::None => {
                    spec.has_none = true;
                    spec.extensions.insert(String::new());
                }
                ExtensionToken::Named(ext) => {
                    spec.has_explicit = true;
                    spec.extensions.insert(ext.clone());
                }
                ExtensionToken::Group { members, .. } => {
                    for ext in members {
                        spec.has_explicit = true;
                        spec.extensions.insert(ext.clone());
                    }
                }
            }
        }
        spec
    }

    /// [`validate`] then [`resolve`](Self::resolve).
    pub fn parse<I, S>(tokens: I, groups: &dyn ExtensionGroups) -> Result<Self, PathKindError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::resolve(&validate(tokens, groups)?))
    }

    pub fn has_wildcard(&self) -> bool {
        self.has_wildcard
    }

    pub fn has_none(&self) -> bool {
        self.has_none
    }

    pub fn has_explicit(&self) -> bool {
        self.has_explicit
    }

    /// Every accepted extension, sorted. Contains `""` when no extension is accepted.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    /// The accepted literal extensions, sorted, without the `""` entry.
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.extensions().filter(|e| !e.is_empty())
    }

    /// Whether `ext` (empty, or starting with `.`) is accepted.
    pub fn matches(&self, ext: &str) -> bool {
        self.has_wildcard
            || (ext.is_empty() && self.has_none)
            || self.extensions.contains(ext)
    }

    /// Like [`matches`](Self::matches) but compares ASCII case-insensitively.
    pub fn matches_ignore_case(&self, ext: &str) -> bool {
        self.matches(ext) || self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}
