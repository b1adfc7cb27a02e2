use crate::classifier::Classifier;
use crate::error::PathKindError;
use crate::extension::ExtensionSpec;
use crate::groups::BuiltinGroups;
use crate::parser::{NativePathParser, PathStyle, Separators};
use crate::path_type::PathType;
use crate::report::Report;
use crate::traits::{ExtensionGroups, PathParser};

// ---------------------------------------------------------------------------
// ValidationBuilder
// ---------------------------------------------------------------------------

/// Configures and runs the classification of one path.
///
/// Created via [`pathkind::validate()`](crate::validate). Configure with
/// chained builder methods, then call [`run()`](ValidationBuilder::run) for a
/// [`Report`] or [`require()`](ValidationBuilder::require) to turn an invalid
/// verdict into an error.
///
/// # Example
///
/// ```rust
/// use pathkind::{PathStyle, PathType};
///
/// let report = pathkind::validate("dir/sub/file.mat")
///     .style(PathStyle::Unix)
///     .path_type(PathType::File)
///     .extensions([".csv", ".txt"])
///     .run()?;
///
/// assert!(!report.valid);
/// # Ok::<(), pathkind::PathKindError>(())
/// ```
pub struct ValidationBuilder {
    path:                  String,
    path_type:             PathTypeInput,
    extensions:            Option<Vec<String>>,
    style:                 PathStyle,
    parser:                Option<Box<dyn PathParser>>,
    groups:                Option<Box<dyn ExtensionGroups>>,
    separators:            Option<Separators>,
    ignore_extension_case: bool,
}

/// A path type is either given typed or as a token checked at `run()`.
enum PathTypeInput {
    Typed(PathType),
    Token(String),
}

impl ValidationBuilder {
    pub(crate) fn new(path: impl Into<String>) -> Self {
        Self {
            path:                  path.into(),
            path_type:             PathTypeInput::Typed(PathType::Any),
            extensions:            None,
            style:                 PathStyle::host(),
            parser:                None,
            groups:                None,
            separators:            None,
            ignore_extension_case: false,
        }
    }

    // ── Type ──────────────────────────────────────────────────────────────

    /// What the path should denote. Defaults to [`PathType::Any`].
    pub fn path_type(mut self, t: PathType) -> Self {
        self.path_type = PathTypeInput::Typed(t);
        self
    }

    /// Like [`path_type`](Self::path_type), from a token such as `"file"`,
    /// `"Dir"` or `"directory"`. Any case-insensitive prefix works.
    ///
    /// A bad token is reported by `run()` as
    /// [`PathKindError::InvalidPathType`].
    pub fn path_type_str(mut self, token: impl Into<String>) -> Self {
        self.path_type = PathTypeInput::Token(token.into());
        self
    }

    // ── Extensions ────────────────────────────────────────────────────────

    /// Accepted extensions for file paths, replacing any set before.
    ///
    /// Tokens: `"."` for any extension, `""` for none, `".txt"` for a literal,
    /// or a group name such as `"image"`. Defaults to `["."]`.
    pub fn extensions<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Add a single accepted-extension token.
    pub fn extension(mut self, token: impl Into<String>) -> Self {
        self.extensions.get_or_insert_with(Vec::new).push(token.into());
        self
    }

    /// Compare extensions ASCII case-insensitively. Off by default.
    pub fn ignore_extension_case(mut self, yes: bool) -> Self {
        self.ignore_extension_case = yes;
        self
    }

    // ── Platform ──────────────────────────────────────────────────────────

    /// Which platform grammar and separators to use. Defaults to the host.
    pub fn style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    /// Override the separators checked for wrong, mixed and repeated use.
    /// Defaults to those of [`style`](Self::style).
    pub fn separators(mut self, separators: Separators) -> Self {
        self.separators = Some(separators);
        self
    }

    /// Use a custom parser instead of [`NativePathParser`].
    pub fn parser(mut self, p: impl PathParser + 'static) -> Self {
        self.parser = Some(Box::new(p));
        self
    }

    /// Use a custom group table instead of [`BuiltinGroups`].
    pub fn groups(mut self, g: impl ExtensionGroups + 'static) -> Self {
        self.groups = Some(Box::new(g));
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Classify the path.
    ///
    /// # Errors
    ///
    /// Only for bad arguments: an unknown path type token, a malformed
    /// extension token, or an empty extension list. Problems with the path
    /// itself are in the returned [`Report`].
    pub fn run(self) -> Result<Report, PathKindError> {
        let path_type = match self.path_type {
            PathTypeInput::Typed(t)     => t,
            PathTypeInput::Token(token) => token.parse::<PathType>()?,
        };

        let style = self.style;
        let parser: Box<dyn PathParser> = match self.parser {
            Some(p) => p,
            None    => Box::new(NativePathParser::new(style)),
        };
        let groups: Box<dyn ExtensionGroups> = match self.groups {
            Some(g) => g,
            None    => Box::new(BuiltinGroups),
        };
        let separators = self.separators.unwrap_or_else(|| style.separators());

        let classifier = Classifier::from_boxed(parser, groups, separators)
            .ignore_extension_case(self.ignore_extension_case);

        let spec = match &self.extensions {
            Some(tokens) => classifier.extension_spec(tokens)?,
            None         => ExtensionSpec::wildcard(),
        };

        Ok(classifier.classify(&self.path, path_type, &spec))
    }

    /// Classify the path and fail unless it is valid.
    ///
    /// # Errors
    ///
    /// Everything [`run()`](Self::run) returns, plus
    /// [`PathKindError::InvalidPath`] carrying the report's warning text
    /// verbatim when the verdict is negative.
    pub fn require(self) -> Result<(), PathKindError> {
        let report = self.run()?;
        if report.valid {
            Ok(())
        } else {
            Err(PathKindError::InvalidPath(report.warning()))
        }
    }
}
