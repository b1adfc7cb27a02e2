use std::collections::BTreeMap;
use std::sync::OnceLock;

use ignore::types::TypesBuilder;

use crate::traits::ExtensionGroups;

// ---------------------------------------------------------------------------
// Built-in table
// ---------------------------------------------------------------------------

const BUILTIN: &[(&str, &[&str])] = &[
    ("image", &[
        ".bmp", ".gif", ".ico", ".jpeg", ".jpg", ".png", ".svg", ".tif", ".tiff", ".webp",
    ]),
    ("audio", &[".aac", ".aif", ".aiff", ".flac", ".m4a", ".mp3", ".oga", ".ogg", ".opus", ".wav"]),
    ("video", &[".avi", ".m4v", ".mkv", ".mov", ".mp4", ".mpeg", ".mpg", ".webm", ".wmv"]),
    ("text", &[".csv", ".dat", ".log", ".md", ".txt"]),
    ("spreadsheet", &[".csv", ".ods", ".xls", ".xlsb", ".xlsm", ".xlsx"]),
    ("archive", &[".7z", ".bz2", ".gz", ".rar", ".tar", ".tgz", ".xz", ".zip"]),
];

/// The default [`ExtensionGroups`] table: `image`, `audio`, `video`,
/// `text`, `spreadsheet` and `archive`. Nothing else is a group, so a bare
/// `"txt"` stays a malformed token.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinGroups;

impl ExtensionGroups for BuiltinGroups {
    fn lookup(&self, name: &str) -> Option<Vec<String>> {
        let key = name.to_ascii_lowercase();
        BUILTIN
            .iter()
            .find(|(group, _)| *group == key)
            .map(|(_, exts)| exts.iter().map(|e| e.to_string()).collect())
    }
}

/// [`BuiltinGroups`] plus every default file type of the `ignore` crate
/// (the table behind ripgrep's `--type`), so `"rust"` means `[".rs"]` and
/// `"c"` covers `.c`, `.h` and `.cats`.
///
/// Opt-in: with this table, short type names such as `"txt"` or `"py"` are
/// groups rather than malformed tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTypeGroups;

impl ExtensionGroups for FileTypeGroups {
    fn lookup(&self, name: &str) -> Option<Vec<String>> {
        BuiltinGroups
            .lookup(name)
            .or_else(|| file_type_table().get(&name.to_ascii_lowercase()).cloned())
    }
}

// ---------------------------------------------------------------------------
// ignore's default file types
// ---------------------------------------------------------------------------

/// `ignore`'s default type definitions, reduced to plain extensions.
/// Built once per process. A type with any glob that can't be expressed as
/// extensions is left out entirely.
fn file_type_table() -> &'static BTreeMap<String, Vec<String>> {
    static TABLE: OnceLock<BTreeMap<String, Vec<String>>> = OnceLock::new();

    TABLE.get_or_init(|| {
        let mut builder = TypesBuilder::new();
        builder.add_defaults();

        builder
            .definitions()
            .into_iter()
            .filter_map(|def| {
                let mut exts = Vec::new();
                for glob in def.globs() {
                    exts.extend(glob_extensions(glob)?);
                }
                exts.sort();
                exts.dedup();
                (!exts.is_empty()).then(|| (def.name().to_ascii_lowercase(), exts))
            })
            .collect()
    })
}

/// The extensions a `*.ext` glob stands for, expanding `[abc]` classes:
/// `"*.[ch]pp"` → `[".cpp", ".hpp"]`.
///
/// `None` when the glob can't be written as extensions (filename globs,
/// ranges, negations, other wildcards). `Some(vec![])` for compound
/// suffixes like `*.h.in`: their final extension (`.in`) says nothing about
/// the type, so they contribute no members.
fn glob_extensions(glob: &str) -> Option<Vec<String>> {
    let rest = glob.strip_prefix("*.")?;
    if rest.is_empty() {
        return None;
    }

    let mut alts = vec![String::new()];
    let mut compound = false;
    let mut chars = rest.chars();

    while let Some(c) = chars.next() {
        match c {
            '[' => {
                let mut class = Vec::new();
                loop {
                    match chars.next()? {
                        ']' => break,
                        m if is_plain(m) => class.push(m),
                        _ => return None,
                    }
                }
                if class.is_empty() {
                    return None;
                }
                alts = alts
                    .iter()
                    .flat_map(|a| class.iter().map(move |m| format!("{a}{m}")))
                    .collect();
            }
            '.' => {
                compound = true;
                alts.iter_mut().for_each(|a| a.push('.'));
            }
            c if is_plain(c) || c == '-' => alts.iter_mut().for_each(|a| a.push(c)),
            _ => return None,
        }
    }

    if compound {
        return Some(Vec::new());
    }
    Some(alts.into_iter().map(|a| format!(".{a}")).collect())
}

fn is_plain(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+')
}
