use crate::parser::ParseOutcome;

/// Parses a raw path string according to some platform's path grammar.
///
/// Implement this to classify paths against a grammar other than the one
/// [`NativePathParser`](crate::NativePathParser) ships with, or to script
/// outcomes in tests.
///
/// # Contract
///
/// `parse` must be deterministic. On success it returns the canonical
/// rendering (same path, platform formatting) and the normalized rendering
/// (canonical with redundant segments removed). On failure it returns a
/// reason and, when known, the 0-based character offset of the problem.
///
/// # Thread Safety
///
/// `Send + Sync` are required so a configured
/// [`Classifier`](crate::Classifier) can be shared across threads.
///
/// # Example
///
/// ```rust
/// use pathkind::{ParseOutcome, PathParser};
///
/// /// Accepts everything as-is.
/// struct Verbatim;
///
/// impl PathParser for Verbatim {
///     fn parse(&self, path: &str) -> ParseOutcome {
///         ParseOutcome::Parsed {
///             canonical:  path.to_string(),
///             normalized: path.to_string(),
///         }
///     }
/// }
/// ```
pub trait PathParser: Send + Sync {
    /// Parse `path`. Must not panic on any input.
    fn parse(&self, path: &str) -> ParseOutcome;
}

/// Lookup table from a named extension group (e.g. `"image"`) to the
/// extensions it stands for.
///
/// Names are matched case-insensitively: implementations always receive
/// the name in ASCII lowercase. Returned extensions must start with `.`.
///
/// ```rust
/// use pathkind::ExtensionGroups;
///
/// struct Images;
///
/// impl ExtensionGroups for Images {
///     fn lookup(&self, name: &str) -> Option<Vec<String>> {
///         (name == "image")
///             .then(|| vec![".png".to_string(), ".jpg".to_string()])
///     }
/// }
/// ```
pub trait ExtensionGroups: Send + Sync {
    /// The member extensions of group `name`, or `None` if no such group exists.
    fn lookup(&self, name: &str) -> Option<Vec<String>>;
}
