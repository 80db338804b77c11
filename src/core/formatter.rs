//! Display formatting for entry details in cds.
//!
//! Turns raw [Stat] values into the strings shown by the details view:
//! an `ls`-style mode string, a humanized size and a short modification date.
//! Also provides [sanitize_to_exact_width] used by the renderer to fit names into cells.

use crate::core::meta::{Stat, StatKind};

use chrono::{DateTime, Local};
use humansize::{DECIMAL, format_size};
use unicode_width::UnicodeWidthChar;

use std::time::SystemTime;

/// Formats the file kind and permission bits in a unix-like format.
///
/// # Returns
/// A string like `drwxr-xr-x`, `lrwxrwxrwx` or `-rw-r--r--`.
pub fn format_attributes(stat: &Stat) -> String {
    let first = match stat.kind {
        StatKind::Directory => 'd',
        StatKind::Symlink => 'l',
        StatKind::Device { block: true } => 'b',
        StatKind::Device { block: false } => 'c',
        StatKind::File => '-',
    };
    let mode = stat.mode;
    let mut chars = [first, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = 1 + i * 3;
        if (mode >> (shift + 2)) & 1u32 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1u32 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1u32 != 0 {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// Formats the file size into a human-readable string.
pub fn format_file_size(size: u64) -> String {
    format_size(size, DECIMAL)
}

/// Formats the file modification time as `02 Jan 06 15:04`.
/// # Returns
/// The formatted local time or "-" if unknown.
pub fn format_file_time(modified: Option<SystemTime>) -> String {
    modified
        .map(|mtime| {
            let dt: DateTime<Local> = DateTime::from(mtime);
            dt.format("%d %b %y %H:%M").to_string()
        })
        .unwrap_or_else(|| "-".to_string())
}

/// Cleans the output to the width of a cell
/// by removing control characters, expanding tabs to 4 spaces,
/// and truncating or padding the string to fit exactly.
pub fn sanitize_to_exact_width(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut current_w = 0;

    for char in line.chars() {
        if char == '\t' {
            let space_count = 4 - (current_w % 4);
            if current_w + space_count > width {
                break;
            }
            out.push_str(&" ".repeat(space_count));
            current_w += space_count;
            continue;
        }

        if char.is_control() {
            continue;
        }

        let w = char.width().unwrap_or(0);
        if current_w + w > width {
            break;
        }

        out.push(char);
        current_w += w;
    }

    if current_w < width {
        out.push_str(&" ".repeat(width - current_w));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(kind: StatKind, mode: u32) -> Stat {
        Stat {
            kind,
            mode,
            size: 0,
            modified: None,
            uid: 0,
            gid: 0,
        }
    }

    #[test]
    fn attributes_look_like_ls() {
        assert_eq!(format_attributes(&stat(StatKind::Directory, 0o755)), "drwxr-xr-x");
        assert_eq!(format_attributes(&stat(StatKind::File, 0o640)), "-rw-r-----");
        assert_eq!(format_attributes(&stat(StatKind::Symlink, 0o777)), "lrwxrwxrwx");
        assert_eq!(
            format_attributes(&stat(StatKind::Device { block: false }, 0o600)),
            "crw-------"
        );
        assert_eq!(
            format_attributes(&stat(StatKind::Device { block: true }, 0o660)),
            "brw-rw----"
        );
    }

    #[test]
    fn sizes_and_times() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1_000_000), "1 MB");
        assert_eq!(format_file_time(None), "-");

        let formatted = format_file_time(Some(SystemTime::now()));
        assert_eq!(formatted.len(), "02 Jan 06 15:04".len());
    }

    #[test]
    fn sanitize_expands_tabs_and_keeps_wide_chars_whole() {
        assert_eq!(sanitize_to_exact_width("a\tb", 8), "a   b   ");
        assert_eq!(sanitize_to_exact_width("🦀🦀", 3), "🦀 ");
        assert_eq!(sanitize_to_exact_width("x\u{7}y", 3), "xy ");
        assert_eq!(sanitize_to_exact_width("abcdef", 0), "");
    }
}
