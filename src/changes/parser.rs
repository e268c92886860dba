//! Parsers for `git status --porcelain` and `git diff` text.
//!
//! Both parsers are tolerant: lines they do not recognize are skipped, so
//! unexpected output yields a smaller change set rather than an error.

use tracing::debug;

use super::change_set::{ChangeSet, FileDetails};

/// Marker that opens a per-file section in a git diff.
const DIFF_HEADER: &str = "diff --git";

/// Separator before the new-side path in a diff header.
const NEW_PATH_MARKER: &str = " b/";

/// Build a change set from raw status and diff output.
pub fn parse_changes(status: &str, diff: &str) -> ChangeSet {
    let mut changes = ChangeSet::default();
    apply_status(&mut changes, status);
    changes.details = parse_diff(diff);
    changes
}

/// Sort porcelain status lines into the `modified`, `added` and `deleted` buckets.
///
/// Each line is `XY PATH`: a two-column code, a space, then the path. A code
/// holding several of `M`, `A`, `D` puts the path in every matching bucket.
/// Codes with none of them (renames, copies, untracked `??`) are dropped.
pub fn apply_status(changes: &mut ChangeSet, status: &str) {
    for line in status.lines().filter(|l| !l.is_empty()) {
        let (Some(code), Some(path)) = (line.get(..2), line.get(3..)) else {
            debug!("Skipping malformed status line: {:?}", line);
            continue;
        };
        if path.is_empty() {
            debug!("Skipping status line without a path: {:?}", line);
            continue;
        }

        let code = code.trim();
        if code.contains('M') {
            changes.modified.push(path.to_string());
        }
        if code.contains('A') {
            changes.added.push(path.to_string());
        }
        if code.contains('D') {
            changes.deleted.push(path.to_string());
        }
    }
}

/// Collect added and removed lines per file from unified diff text.
///
/// Only lines starting with `+` or `-` inside a `diff --git` section are
/// kept; `+++`/`---` file headers, hunk headers and context are skipped.
pub fn parse_diff(diff: &str) -> FileDetails {
    let mut details = FileDetails::default();
    let mut current: Option<usize> = None;

    for line in diff.lines() {
        if line.starts_with(DIFF_HEADER) {
            current = match line.split_once(NEW_PATH_MARKER) {
                Some((_, path)) => Some(details.start_file(path)),
                None => {
                    debug!("Diff header without new-side path: {:?}", line);
                    None
                }
            };
            continue;
        }

        let Some(slot) = current else {
            continue;
        };
        if is_change_line(line) {
            details.push_line(slot, line);
        }
    }

    details
}

fn is_change_line(line: &str) -> bool {
    (line.starts_with('+') || line.starts_with('-'))
        && !line.starts_with("+++")
        && !line.starts_with("---")
}
