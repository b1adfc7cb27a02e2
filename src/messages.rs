//! Fixed message templates, one per condition the classifier can report.
//!
//! Warnings are phrased as a problem with the path; infos describe how the
//! platform reads it. Every function is pure.

use crate::extension::ExtensionSpec;

// ── Parse ─────────────────────────────────────────────────────────────────────

/// `offset` is 0-based; the message shows it 1-based.
pub fn parse_rejected(reason: &str, offset: Option<usize>) -> String {
    match offset {
        Some(i) => format!("Path is not valid at character {}: {reason}.", i.saturating_add(1)),
        None    => format!("Path is not valid: {reason}."),
    }
}

pub fn canonical_rendering(canonical: &str) -> String {
    format!("Path is read by the platform as \"{canonical}\".")
}

pub fn normalized_rendering(normalized: &str) -> String {
    format!("Path normalizes to \"{normalized}\".")
}

// ── Separators ────────────────────────────────────────────────────────────────

pub fn wrong_separator(used: char, preferred: char) -> String {
    format!("Path uses '{used}' as separator; the platform separator is '{preferred}'.")
}

pub fn mixed_separators(preferred: char, alternate: char) -> String {
    format!("Path mixes '{preferred}' and '{alternate}' separators.")
}

pub fn repeated_separators() -> String {
    "Repeated separators are collapsed by the platform and ignored.".to_string()
}

// ── Type ──────────────────────────────────────────────────────────────────────

pub fn empty_file_name() -> String {
    "Path is empty, but a file path must have a name.".to_string()
}

pub fn directory_with_extension(ext: &str) -> String {
    format!("A directory cannot have an extension, but \"{ext}\" was found.")
}

pub fn file_without_name() -> String {
    "File path lacks a name.".to_string()
}

pub fn ambiguous(path: &str) -> String {
    format!("\"{path}\" could be a file without an extension or a directory.")
}

pub fn invalid_extension(ext: &str, spec: &ExtensionSpec) -> String {
    let accepted = describe_accepted(spec);
    if ext.is_empty() {
        format!("File has no extension; {accepted}.")
    } else {
        format!("Extension \"{ext}\" is not valid; {accepted}.")
    }
}

/// How the accepted forms read inside an invalid-extension message.
pub fn describe_accepted(spec: &ExtensionSpec) -> String {
    if spec.has_wildcard() {
        return "any extension is accepted".to_string();
    }

    let literals: Vec<String> = spec.literals().map(|e| format!("\"{e}\"")).collect();
    match (literals.as_slice(), spec.has_none()) {
        ([], true)        => "no extension is expected".to_string(),
        ([], false)       => "no extension is accepted".to_string(),
        ([one], false)    => format!("expected {one}"),
        ([one], true)     => format!("expected {one} or none"),
        (many, false)     => format!("expected one of {}", many.join(", ")),
        (many, true)      => format!("expected one of {}, or none", many.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::{ExtensionSpec, ExtensionToken};

    fn spec(tokens: Vec<ExtensionToken>) -> ExtensionSpec {
        ExtensionSpec::resolve(&tokens)
    }

    fn named(ext: &str) -> ExtensionToken {
        ExtensionToken::Named(ext.to_string())
    }

    #[test]
    fn offsets_are_shown_one_based() {
        assert_eq!(
            parse_rejected("contains a null character", Some(0)),
            "Path is not valid at character 1: contains a null character."
        );
        assert_eq!(parse_rejected("too long", None), "Path is not valid: too long.");
    }

    #[test]
    fn largest_offset_does_not_overflow() {
        let msg = parse_rejected("bad", Some(usize::MAX));
        assert_eq!(msg, format!("Path is not valid at character {}: bad.", usize::MAX));
    }

    #[test]
    fn accepted_forms_are_described() {
        assert_eq!(describe_accepted(&ExtensionSpec::wildcard()), "any extension is accepted");
        assert_eq!(describe_accepted(&spec(vec![ExtensionToken::None])), "no extension is expected");
        assert_eq!(describe_accepted(&spec(vec![named(".txt")])), "expected \".txt\"");
        assert_eq!(
            describe_accepted(&spec(vec![named(".txt"), ExtensionToken::None])),
            "expected \".txt\" or none"
        );
        assert_eq!(
            describe_accepted(&spec(vec![named(".txt"), named(".csv")])),
            "expected one of \".csv\", \".txt\""
        );
        assert_eq!(
            describe_accepted(&spec(vec![named(".txt"), named(".csv"), ExtensionToken::None])),
            "expected one of \".csv\", \".txt\", or none"
        );
    }

    #[test]
    fn invalid_extension_names_the_offender() {
        let s = spec(vec![named(".csv"), named(".txt")]);
        let msg = invalid_extension(".mat", &s);
        assert!(msg.contains("\".mat\""));
        assert!(msg.contains("\".csv\""));
        assert!(msg.contains("\".txt\""));

        assert!(invalid_extension("", &s).starts_with("File has no extension"));
    }
}
