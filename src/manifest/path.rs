//! Path normalization for manifest keys

use std::path::{Component, Path, PathBuf};

/// Render `path` relative to `root` using `/` separators regardless of host.
///
/// Returns `None` when `path` is not under `root`.
pub fn relative_key_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// Join a source label and a relative path into a manifest key.
///
/// An empty label yields the bare relative path.
pub fn manifest_key(label: &str, relative: &str) -> String {
    if label.is_empty() {
        relative.to_string()
    } else {
        format!("{}/{}", label, relative)
    }
}

/// Lexically normalize a path: drop `.` and trailing separators, fold `..` into the
/// preceding segment where one exists. No filesystem access.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().map(|c| c.as_os_str()).collect()
}

/// Derive the default label for a source root: its final path segment.
///
/// Roots whose lexical form has no final name (`.`, `..`, `/`) are resolved against
/// the filesystem, so `.` is labeled with the working directory's name rather than
/// `.` itself. If that fails too the label is empty.
pub fn derive_label(root: &Path) -> String {
    let normalized = normalize_lexically(root);
    if let Some(Component::Normal(name)) = normalized.components().last() {
        return name.to_string_lossy().into_owned();
    }
    dunce::canonicalize(root)
        .ok()
        .and_then(|canonical| canonical.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default()
}

/// Normalize an include extension: trimmed, lowercased, with a leading `.`.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}
