//! # pathkind
//!
//! Decide whether a path string is a valid file or directory path, without
//! touching the filesystem.
//!
//! pathkind checks a path against a platform's path grammar, tells a file
//! from a directory by its final component, and checks file extensions
//! against a list of accepted ones. The answer is a verdict plus two lists of
//! human-readable messages: **warnings** (things that affect validity, and
//! ambiguity) and **infos** (how the platform will read the path).
//!
//! It does **not** check existence or permissions, resolve against a working
//! directory, or accept network shares and URLs.
//!
//! # Quick Start
//!
//! ```rust
//! use pathkind::{PathStyle, PathType};
//!
//! let report = pathkind::validate("dir/sub/file.txt")
//!     .style(PathStyle::Unix)
//!     .path_type(PathType::File)
//!     .extensions([".txt"])
//!     .run()
//!     .unwrap();
//!
//! assert!(report.valid);
//! assert_eq!(report.warning(), "");
//! ```
//!
//! Use [`require()`](ValidationBuilder::require) to turn an invalid path
//! into an error whose message is the warning text:
//!
//! ```rust
//! use pathkind::{PathKindError, PathStyle};
//!
//! let err = pathkind::validate("out/report.pdf")
//!     .style(PathStyle::Unix)
//!     .path_type_str("dir")
//!     .require()
//!     .unwrap_err();
//!
//! assert!(matches!(err, PathKindError::InvalidPath(_)));
//! ```
//!
//! # Extension tokens
//!
//! | Token      | Accepts                                  |
//! |------------|------------------------------------------|
//! | `"."`      | any extension, or none (the default)     |
//! | `""`       | no extension                             |
//! | `".txt"`   | exactly `.txt`                           |
//! | `"image"`  | every extension in the named group       |
//!
//! Groups come from [`BuiltinGroups`] unless a custom [`ExtensionGroups`]
//! table is supplied. [`FileTypeGroups`] adds the `ignore` crate's file
//! types (`"rust"`, `"c"`, `"py"`, ...) on request.
//!
//! # Custom parsers
//!
//! Implement [`PathParser`] to classify against another grammar or to script
//! parse outcomes in tests:
//!
//! ```rust
//! use pathkind::{ParseOutcome, PathParser, PathType};
//!
//! struct RejectAll;
//!
//! impl PathParser for RejectAll {
//!     fn parse(&self, _path: &str) -> ParseOutcome {
//!         ParseOutcome::Rejected { reason: "nothing is valid here".into(), offset: None }
//!     }
//! }
//!
//! let report = pathkind::validate("a/b").parser(RejectAll).run().unwrap();
//! assert!(!report.valid);
//! assert_eq!(report.warning(), "Path is not valid: nothing is valid here.");
//! ```

#![forbid(unsafe_code)]

pub mod extension;
pub mod messages;

mod builder;
mod classifier;
mod error;
mod groups;
mod parser;
mod path_type;
mod report;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::ValidationBuilder;
pub use classifier::Classifier;
pub use error::PathKindError;
pub use extension::{ExtensionSpec, ExtensionToken};
pub use groups::{BuiltinGroups, FileTypeGroups};
pub use parser::{NativePathParser, ParseOutcome, PathStyle, Separators};
pub use path_type::PathType;
pub use report::{ClassificationLog, Report};
pub use traits::{ExtensionGroups, PathParser};

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a new [`ValidationBuilder`] for `path`.
///
/// # Example
///
/// ```rust
/// use pathkind::PathStyle;
///
/// let report = pathkind::validate("dir\\sub/dir")
///     .style(PathStyle::Unix)
///     .run()
///     .unwrap();
///
/// assert!(report.valid);
/// assert!(report.info().contains("mixes"));
/// ```
pub fn validate(path: impl Into<String>) -> ValidationBuilder {
    ValidationBuilder::new(path)
}

/// Classify `path` on the host platform.
///
/// `path_type` is a case-insensitive prefix of `any`, `file`, `dir` or
/// `directory`. For a single extension token pass a one-element array.
///
/// # Errors
///
/// Only for bad arguments; see [`ValidationBuilder::run`].
pub fn is_valid_path<I, S>(path: &str, path_type: &str, valid_extensions: I) -> Result<Report, PathKindError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    validate(path)
        .path_type_str(path_type)
        .extensions(valid_extensions)
        .run()
}

/// Like [`is_valid_path`], but an invalid path is an
/// [`PathKindError::InvalidPath`] carrying the warning text.
pub fn require_valid_path<I, S>(path: &str, path_type: &str, valid_extensions: I) -> Result<(), PathKindError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    validate(path)
        .path_type_str(path_type)
        .extensions(valid_extensions)
        .require()
}
