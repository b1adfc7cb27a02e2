use std::fmt;

use crate::path_type::PathType;

/// Messages collected while classifying one path, in the order the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationLog {
    /// Conditions that affect validity, plus ambiguity notices.
    pub warnings: Vec<String>,

    /// Formatting notices: how the platform renders the path, separator use.
    pub infos: Vec<String>,
}

impl ClassificationLog {
    pub(crate) fn warn(&mut self, msg: String) {
        self.warnings.push(msg);
    }

    pub(crate) fn info(&mut self, msg: String) {
        self.infos.push(msg);
    }

    /// Warnings joined by newlines. Empty string when there are none.
    pub fn warning_text(&self) -> String {
        self.warnings.join("\n")
    }

    /// Infos joined by newlines. Empty string when there are none.
    pub fn info_text(&self) -> String {
        self.infos.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.infos.is_empty()
    }
}

/// The outcome of classifying a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// `false` when the path breaks a rule; ambiguity alone never clears it.
    pub valid: bool,

    /// The type the caller asked for.
    pub path_type: PathType,

    pub log: ClassificationLog,
}

impl Report {
    /// Shorthand for [`ClassificationLog::warning_text`].
    pub fn warning(&self) -> String {
        self.log.warning_text()
    }

    /// Shorthand for [`ClassificationLog::info_text`].
    pub fn info(&self) -> String {
        self.log.info_text()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.valid { "valid" } else { "invalid" })?;
        for w in &self.log.warnings {
            write!(f, "\nwarning: {w}")?;
        }
        for i in &self.log.infos {
            write!(f, "\ninfo: {i}")?;
        }
        Ok(())
    }
}
