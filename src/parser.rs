use crate::traits::PathParser;

// ---------------------------------------------------------------------------
// ParseOutcome
// ---------------------------------------------------------------------------

/// What a [`PathParser`] made of a raw path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The path is syntactically valid.
    Parsed {
        /// The same path in the platform's own formatting.
        canonical: String,
        /// `canonical` with `.` segments and resolvable `..` segments removed.
        normalized: String,
    },

    /// The path is outside the platform's grammar.
    Rejected {
        reason: String,
        /// 0-based character offset of the problem, if known.
        offset: Option<usize>,
    },
}

impl ParseOutcome {
    fn rejected(reason: impl Into<String>, offset: Option<usize>) -> Self {
        Self::Rejected { reason: reason.into(), offset }
    }
}

// ---------------------------------------------------------------------------
// Separators / PathStyle
// ---------------------------------------------------------------------------

/// The separator a platform prefers, and the one it also recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    pub preferred: char,
    pub alternate: char,
}

impl Separators {
    pub const UNIX: Self = Self { preferred: '/', alternate: '\\' };
    pub const WINDOWS: Self = Self { preferred: '\\', alternate: '/' };

    /// Separators of the platform this crate was compiled for.
    pub fn host() -> Self {
        PathStyle::host().separators()
    }

    pub fn is_separator(&self, c: char) -> bool {
        c == self.preferred || c == self.alternate
    }

    /// Whether paths may start with a drive designator: true when `\` is
    /// the preferred separator.
    pub(crate) fn has_drives(&self) -> bool {
        self.preferred == '\\'
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::host()
    }
}

/// Which platform's path grammar [`NativePathParser`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    Unix,
    Windows,
}

impl PathStyle {
    pub fn host() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }

    pub fn separators(self) -> Separators {
        match self {
            Self::Unix    => Separators::UNIX,
            Self::Windows => Separators::WINDOWS,
        }
    }

    /// Longest accepted path: bytes on Unix (`PATH_MAX`), characters on
    /// Windows (`MAX_PATH`).
    fn max_len(self) -> usize {
        match self {
            Self::Unix    => 4096,
            Self::Windows => 260,
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::host()
    }
}

// ---------------------------------------------------------------------------
// NativePathParser
// ---------------------------------------------------------------------------

const WINDOWS_RESERVED: [char; 7] = ['<', '>', ':', '"', '|', '?', '*'];

/// The production [`PathParser`]: checks a path against Unix or Windows
/// grammar and renders it the way that platform would.
///
/// Both separators are recognised on either platform. The canonical
/// rendering collapses separator runs and uses the preferred separator; the
/// root, any drive prefix and a trailing separator are kept. Network shares
/// and URLs are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePathParser {
    style: PathStyle,
}

impl NativePathParser {
    pub fn new(style: PathStyle) -> Self {
        Self { style }
    }

    pub fn host() -> Self {
        Self::new(PathStyle::host())
    }

    pub fn style(&self) -> PathStyle {
        self.style
    }

    fn check_grammar(&self, path: &str) -> Result<(), ParseOutcome> {
        if let Some(offset) = url_scheme_end(path) {
            return Err(ParseOutcome::rejected("URLs are not supported", Some(offset)));
        }

        let chars: Vec<char> = path.chars().collect();
        let windows = self.style == PathStyle::Windows;

        for (i, &c) in chars.iter().enumerate() {
            if c == '\0' {
                return Err(ParseOutcome::rejected("contains a null character", Some(i)));
            }
            if !windows {
                continue;
            }
            if c.is_control() {
                return Err(ParseOutcome::rejected("contains a control character", Some(i)));
            }
            let drive_colon = c == ':' && i == 1 && chars[0].is_ascii_alphabetic();
            if WINDOWS_RESERVED.contains(&c) && !drive_colon {
                return Err(ParseOutcome::rejected(
                    format!("contains the reserved character '{c}'"),
                    Some(i),
                ));
            }
        }

        let seps = self.style.separators();
        if windows && chars.len() >= 2 && seps.is_separator(chars[0]) && seps.is_separator(chars[1]) {
            return Err(ParseOutcome::rejected("network paths are not supported", Some(0)));
        }

        let len = if windows { chars.len() } else { path.len() };
        if len > self.style.max_len() {
            return Err(ParseOutcome::rejected(
                format!("exceeds the maximum length of {}", self.style.max_len()),
                None,
            ));
        }

        Ok(())
    }
}

impl PathParser for NativePathParser {
    fn parse(&self, path: &str) -> ParseOutcome {
        if let Err(rejected) = self.check_grammar(path) {
            return rejected;
        }

        let layout = Layout::split(path, self.style);
        ParseOutcome::Parsed {
            canonical:  layout.render(&layout.segments, self.style),
            normalized: layout.render(&layout.normalized_segments(), self.style),
        }
    }
}

/// Offset of `://` when `path` starts with a URL scheme.
fn url_scheme_end(path: &str) -> Option<usize> {
    let end = path.find("://")?;
    let scheme = &path[..end];
    let mut chars = scheme.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    // A single letter is a drive, not a scheme.
    let is_scheme = first_ok
        && scheme.len() > 1
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    is_scheme.then(|| path[..end].chars().count())
}

/// Split a Windows drive designator (`C:`) off the front of `path`.
pub(crate) fn split_drive(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        path.split_at(2)
    } else {
        ("", path)
    }
}

/// A path broken into the pieces both renderings are built from.
struct Layout<'a> {
    prefix:   &'a str,
    rooted:   bool,
    trailing: bool,
    segments: Vec<&'a str>,
}

impl<'a> Layout<'a> {
    fn split(path: &'a str, style: PathStyle) -> Self {
        let seps = style.separators();

        let (prefix, rest) = if style == PathStyle::Windows { split_drive(path) } else { ("", path) };

        let segments: Vec<&str> = rest.split(|c: char| seps.is_separator(c)).filter(|s| !s.is_empty()).collect();

        Self {
            prefix,
            rooted:   rest.starts_with(|c: char| seps.is_separator(c)),
            trailing: !segments.is_empty() && rest.ends_with(|c: char| seps.is_separator(c)),
            segments,
        }
    }

    fn normalized_segments(&self) -> Vec<&'a str> {
        let mut out: Vec<&str> = Vec::with_capacity(self.segments.len());
        for &seg in &self.segments {
            match seg {
                "." => {}
                ".." => match out.last() {
                    Some(&last) if last != ".." => {
                        out.pop();
                    }
                    _ if self.rooted => {}
                    _ => out.push(".."),
                },
                other => out.push(other),
            }
        }
        out
    }

    fn render(&self, segments: &[&str], style: PathStyle) -> String {
        let sep = style.separators().preferred;
        let mut out = String::from(self.prefix);

        if self.rooted {
            out.push(sep);
        }
        out.push_str(&segments.join(&sep.to_string()));

        if segments.is_empty() {
            // "a/.." leaves nothing behind: that's the current directory.
            if out.is_empty() && !self.segments.is_empty() {
                out.push('.');
            }
        } else if self.trailing {
            out.push(sep);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(style: PathStyle, path: &str) -> (String, String) {
        match NativePathParser::new(style).parse(path) {
            ParseOutcome::Parsed { canonical, normalized } => (canonical, normalized),
            other => panic!("expected {path:?} to parse, got {other:?}"),
        }
    }

    fn rejected(style: PathStyle, path: &str) -> (String, Option<usize>) {
        match NativePathParser::new(style).parse(path) {
            ParseOutcome::Rejected { reason, offset } => (reason, offset),
            other => panic!("expected {path:?} to be rejected, got {other:?}"),
        }
    }

    #[test]
    fn clean_unix_paths_render_unchanged() {
        for path in ["dir/sub/file.txt", "/abs/path", "dir/sub/", "/", "file", "../up"] {
            assert_eq!(parsed(PathStyle::Unix, path), (path.to_string(), path.to_string()));
        }
    }

    #[test]
    fn separators_are_collapsed_and_unified() {
        let (canonical, _) = parsed(PathStyle::Unix, "dir\\sub//dir");
        assert_eq!(canonical, "dir/sub/dir");

        let (canonical, _) = parsed(PathStyle::Windows, "C:/Users//me/");
        assert_eq!(canonical, "C:\\Users\\me\\");
    }

    #[test]
    fn normalization_drops_redundant_segments() {
        assert_eq!(parsed(PathStyle::Unix, "a/./b/../c").1, "a/c");
        assert_eq!(parsed(PathStyle::Unix, "../a/../../b").1, "../../b");
        assert_eq!(parsed(PathStyle::Unix, "/../a").1, "/a");
        assert_eq!(parsed(PathStyle::Unix, "a/..").1, ".");
        assert_eq!(parsed(PathStyle::Unix, "dir/sub/./").1, "dir/sub/");
        assert_eq!(parsed(PathStyle::Windows, "C:\\a\\..\\b").1, "C:\\b");
    }

    #[test]
    fn canonical_rendering_is_a_fixed_point() {
        for path in ["a//b\\c/", "./x/../y", "C:/a//b", "\\lead"] {
            for style in [PathStyle::Unix, PathStyle::Windows] {
                let (once, _) = parsed(style, path);
                let (twice, _) = parsed(style, &once);
                assert_eq!(once, twice, "{path:?} under {style:?}");
            }
        }
    }

    #[test]
    fn null_character_is_rejected_with_offset() {
        assert_eq!(
            rejected(PathStyle::Unix, "ab\0c"),
            ("contains a null character".to_string(), Some(2))
        );
    }

    #[test]
    fn windows_reserved_characters_are_rejected() {
        assert_eq!(
            rejected(PathStyle::Windows, "dir\\fi?le.txt"),
            ("contains the reserved character '?'".to_string(), Some(6))
        );
        assert_eq!(rejected(PathStyle::Windows, "dir\\a:b").1, Some(5));
        // Fine on Unix.
        parsed(PathStyle::Unix, "dir/fi?le:txt");
    }

    #[test]
    fn drive_colon_is_allowed() {
        assert_eq!(parsed(PathStyle::Windows, "C:\\data").0, "C:\\data");
        assert_eq!(parsed(PathStyle::Windows, "C:rel").0, "C:rel");
    }

    #[test]
    fn network_and_url_forms_are_rejected() {
        assert_eq!(rejected(PathStyle::Windows, "\\\\server\\share").0, "network paths are not supported");
        assert_eq!(rejected(PathStyle::Unix, "https://example.com/a").0, "URLs are not supported");
        assert_eq!(rejected(PathStyle::Unix, "file:///tmp").1, Some(4));
    }

    #[test]
    fn overlong_paths_are_rejected_without_offset() {
        let long = "a".repeat(261);
        assert_eq!(rejected(PathStyle::Windows, &long).1, None);
        parsed(PathStyle::Unix, &long);
        assert!(matches!(
            NativePathParser::new(PathStyle::Unix).parse(&"a".repeat(4097)),
            ParseOutcome::Rejected { offset: None, .. }
        ));
    }
}
