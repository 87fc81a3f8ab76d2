//! Include-spec matching for directory paths

use std::path::Path;

/// Normalize a filesystem path for comparison: lossy string, forward
/// slashes, lowercased.
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

/// Normalize a user-supplied directory spec the same way paths are
/// normalized, with surrounding separators stripped.
pub fn normalize_spec(spec: &str) -> String {
    spec.trim()
        .replace('\\', "/")
        .trim_matches('/')
        .to_lowercase()
}

/// Check whether a directory path satisfies an include spec.
///
/// The spec is either a plain name or a `/`-delimited relative subpath
/// (e.g. `src/lib`). The suffix check runs first; if it fails, the spec is
/// searched for as a contiguous run of path segments anchored at the first
/// segment match. `spec` must already be normalized via [`normalize_spec`].
pub fn matches_spec(path: &Path, spec: &str) -> bool {
    if spec.is_empty() {
        return false;
    }

    let normalized = normalize_path(path);

    // Suffix match, with or without a leading separator.
    if normalized.ends_with(&format!("/{spec}")) || normalized.ends_with(spec) {
        return true;
    }

    let candidate: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();
    let spec_segments: Vec<&str> = spec.split('/').filter(|s| !s.is_empty()).collect();
    segments_match(&candidate, &spec_segments)
}

/// Search for `spec` as a contiguous subsequence of `candidate`.
///
/// Only the first segment equal to `spec[0]` is tried as an anchor; if the
/// remaining spec segments do not follow it contiguously, the whole match
/// fails. Both slices must be pre-normalized.
pub fn segments_match(candidate: &[&str], spec: &[&str]) -> bool {
    if spec.is_empty() {
        return false;
    }

    let Some(anchor) = candidate.iter().position(|segment| *segment == spec[0]) else {
        return false;
    };

    if anchor + spec.len() > candidate.len() {
        return false;
    }

    spec.iter()
        .enumerate()
        .all(|(i, segment)| candidate[anchor + i] == *segment)
}
