use std::fmt;
use std::str::FromStr;

use crate::error::PathKindError;

/// What the caller expects a path to denote.
///
/// `Any` is the default. A path whose final component carries an extension
/// is checked as a [`File`](PathType::File) even when `Any` was requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PathType {
    /// A file or a directory.
    #[default]
    Any,

    /// A file. Must have a name and an accepted extension.
    File,

    /// A directory. Must not have an extension.
    Directory,
}

const LITERALS: [(&str, PathType); 4] = [
    ("any", PathType::Any),
    ("file", PathType::File),
    ("dir", PathType::Directory),
    ("directory", PathType::Directory),
];

impl FromStr for PathType {
    type Err = PathKindError;

    /// Case-insensitive prefix match against `any`, `file`, `dir` and
    /// `directory`. `"d"` and `"di"` are fine since both candidates agree.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let lowered = token.to_ascii_lowercase();
        let mut found: Option<PathType> = None;

        for (literal, kind) in LITERALS {
            if lowered.is_empty() || !literal.starts_with(&lowered) {
                continue;
            }
            match found {
                Some(prev) if prev != kind => {
                    return Err(PathKindError::InvalidPathType(token.to_string()));
                }
                _ => found = Some(kind),
            }
        }

        found.ok_or_else(|| PathKindError::InvalidPathType(token.to_string()))
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Any       => "any",
            Self::File      => "file",
            Self::Directory => "dir",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_literals_parse() {
        assert_eq!("any".parse::<PathType>().unwrap(), PathType::Any);
        assert_eq!("file".parse::<PathType>().unwrap(), PathType::File);
        assert_eq!("dir".parse::<PathType>().unwrap(), PathType::Directory);
        assert_eq!("directory".parse::<PathType>().unwrap(), PathType::Directory);
    }

    #[test]
    fn prefixes_and_case_are_accepted() {
        assert_eq!("F".parse::<PathType>().unwrap(), PathType::File);
        assert_eq!("An".parse::<PathType>().unwrap(), PathType::Any);
        assert_eq!("d".parse::<PathType>().unwrap(), PathType::Directory);
        assert_eq!("DIREC".parse::<PathType>().unwrap(), PathType::Directory);
    }

    #[test]
    fn unknown_or_empty_tokens_are_rejected() {
        for token in ["", "folder", "files", "x"] {
            assert_eq!(
                token.parse::<PathType>(),
                Err(PathKindError::InvalidPathType(token.to_string())),
                "{token:?} should be rejected"
            );
        }
    }
}
