use tracing::{debug, trace};

use crate::error::PathKindError;
use crate::extension::{ExtensionSpec, EXTENSION_MARKER};
use crate::groups::BuiltinGroups;
use crate::messages;
use crate::parser::{split_drive, NativePathParser, ParseOutcome, Separators};
use crate::path_type::PathType;
use crate::report::{ClassificationLog, Report};
use crate::traits::{ExtensionGroups, PathParser};

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Decides whether a path string is a valid file or directory path.
///
/// Holds no per-call state, so one `Classifier` can classify any number of
/// paths from any number of threads.
///
/// # Example
///
/// ```rust
/// use pathkind::{Classifier, NativePathParser, BuiltinGroups, PathStyle, PathType};
///
/// let classifier = Classifier::new(
///     NativePathParser::new(PathStyle::Unix),
///     BuiltinGroups,
///     PathStyle::Unix.separators(),
/// );
/// let spec = classifier.extension_spec([".csv", ".txt"]).unwrap();
///
/// let report = classifier.classify("data/run.mat", PathType::File, &spec);
/// assert!(!report.valid);
/// assert!(report.warning().contains(".mat"));
/// ```
pub struct Classifier {
    parser:                Box<dyn PathParser>,
    groups:                Box<dyn ExtensionGroups>,
    separators:            Separators,
    ignore_extension_case: bool,
}

impl Classifier {
    pub fn new(
        parser: impl PathParser + 'static,
        groups: impl ExtensionGroups + 'static,
        separators: Separators,
    ) -> Self {
        Self::from_boxed(Box::new(parser), Box::new(groups), separators)
    }

    pub(crate) fn from_boxed(
        parser: Box<dyn PathParser>,
        groups: Box<dyn ExtensionGroups>,
        separators: Separators,
    ) -> Self {
        Self { parser, groups, separators, ignore_extension_case: false }
    }

    /// The host platform's grammar and separators, with [`BuiltinGroups`].
    pub fn host() -> Self {
        Self::new(NativePathParser::host(), BuiltinGroups, Separators::host())
    }

    /// Compare extensions ASCII case-insensitively. Off by default.
    pub fn ignore_extension_case(mut self, yes: bool) -> Self {
        self.ignore_extension_case = yes;
        self
    }

    pub fn separators(&self) -> Separators {
        self.separators
    }

    /// Validate and resolve raw extension tokens against this classifier's groups.
    ///
    /// # Errors
    ///
    /// See [`extension::validate`](crate::extension::validate).
    pub fn extension_spec<I, S>(&self, tokens: I) -> Result<ExtensionSpec, PathKindError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ExtensionSpec::parse(tokens, self.groups.as_ref()).inspect_err(|e| {
            debug!(error = %e, "rejected extension spec");
        })
    }

    /// Classify `path` as `path_type`, checking extensions against `spec`.
    ///
    /// Never fails: problems with the path end up in the returned
    /// [`Report`]. Infos about parsing come first, then separator infos,
    /// then type and extension warnings.
    pub fn classify(&self, path: &str, path_type: PathType, spec: &ExtensionSpec) -> Report {
        let mut log = ClassificationLog::default();

        let valid = if path.is_empty() {
            self.classify_empty(path_type, spec, &mut log)
        } else {
            let parsed = self.check_parse(path, &mut log);
            self.check_separators(path, &mut log);
            // Type checks are meaningless once the grammar has rejected the path.
            parsed && self.check_type(path, path_type, spec, &mut log)
        };

        debug!(
            path = %path,
            path_type = %path_type,
            valid,
            warnings = log.warnings.len(),
            infos = log.infos.len(),
            "classified path"
        );

        Report { valid, path_type, log }
    }

    // ── Steps ─────────────────────────────────────────────────────────────

    /// An empty path is the current location: fine for anything but a file.
    fn classify_empty(&self, path_type: PathType, spec: &ExtensionSpec, log: &mut ClassificationLog) -> bool {
        if path_type != PathType::File {
            return true;
        }
        log.warn(messages::empty_file_name());
        if !self.extension_matches("", spec) {
            log.warn(messages::invalid_extension("", spec));
        }
        false
    }

    fn check_parse(&self, path: &str, log: &mut ClassificationLog) -> bool {
        match self.parser.parse(path) {
            ParseOutcome::Rejected { reason, offset } => {
                trace!(%reason, ?offset, "parser rejected path");
                log.warn(messages::parse_rejected(&reason, offset));
                false
            }
            ParseOutcome::Parsed { canonical, normalized } => {
                if canonical != path {
                    log.info(messages::canonical_rendering(&canonical));
                }
                if normalized != path {
                    log.info(messages::normalized_rendering(&normalized));
                }
                true
            }
        }
    }

    fn check_separators(&self, path: &str, log: &mut ClassificationLog) {
        let Separators { preferred, alternate } = self.separators;

        match (path.contains(preferred), path.contains(alternate)) {
            (false, true) => log.info(messages::wrong_separator(alternate, preferred)),
            (true, true)  => log.info(messages::mixed_separators(preferred, alternate)),
            _             => {}
        }

        let mut prev_sep = false;
        for c in path.chars() {
            let sep = self.separators.is_separator(c);
            if sep && prev_sep {
                log.info(messages::repeated_separators());
                break;
            }
            prev_sep = sep;
        }
    }

    /// Returns `false` on a rule violation. Ambiguity only adds a warning.
    fn check_type(&self, path: &str, path_type: PathType, spec: &ExtensionSpec, log: &mut ClassificationLog) -> bool {
        let (name, ext) = split_name(final_component(path, self.separators));

        let resolved = match path_type {
            PathType::Any if ext.is_empty() => return true,
            PathType::Any                   => PathType::File,
            other                           => other,
        };
        trace!(%name, %ext, path_type = %resolved, "checking type");

        let mut valid = true;
        match resolved {
            PathType::Directory => {
                if !ext.is_empty() {
                    valid = false;
                    log.warn(messages::directory_with_extension(ext));
                }
                if !name.is_empty() {
                    log.warn(messages::ambiguous(path));
                }
            }
            PathType::File | PathType::Any => {
                if name.is_empty() {
                    valid = false;
                    log.warn(messages::file_without_name());
                }
                if ext.is_empty() {
                    log.warn(messages::ambiguous(path));
                }
                if !self.extension_matches(ext, spec) {
                    valid = false;
                    log.warn(messages::invalid_extension(ext, spec));
                }
            }
        }
        valid
    }

    fn extension_matches(&self, ext: &str, spec: &ExtensionSpec) -> bool {
        if self.ignore_extension_case {
            spec.matches_ignore_case(ext)
        } else {
            spec.matches(ext)
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::host()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Text after the last separator and any drive designator. Empty for a
/// path ending in a separator or a bare drive.
fn final_component(path: &str, separators: Separators) -> &str {
    let path = if separators.has_drives() { split_drive(path).1 } else { path };
    path.rsplit(|c: char| separators.is_separator(c)).next().unwrap_or(path)
}

/// Split a component into name and extension (marker included).
/// `.` and `..` are directory references with neither.
fn split_name(component: &str) -> (&str, &str) {
    if component == "." || component == ".." {
        return ("", "");
    }
    match component.rfind(EXTENSION_MARKER) {
        Some(i) => component.split_at(i),
        None    => (component, ""),
    }
}
