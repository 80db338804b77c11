//! Helpers for cds.
//!
//! Provides utility functions:
//! - Color parsing from strings or hex codes
//! - Home directory lookup and `~` expansion
//! - Lexical path cleaning and manual path validation
//! - Shell quoting for the emitted command line

use ratatui::style::Color;
use std::path::{Component, Path, PathBuf};

/// Parses a string (color name or hex) into a ratatui::style::color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB)
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightblue" => Color::LightBlue,
        "lightyellow" => Color::LightYellow,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "violet" => Color::Rgb(0xee, 0x82, 0xee),
        _ => {
            if let Some(color) = s.strip_prefix('#') {
                match color.len() {
                    6 => {
                        if let Ok(rgb) = u32::from_str_radix(color, 16) {
                            return rgb_from_u32(rgb);
                        }
                    }
                    3 => {
                        let expanded = color
                            .chars()
                            .map(|c| format!("{}{}", c, c))
                            .collect::<String>();
                        if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                            return rgb_from_u32(rgb);
                        }
                    }
                    _ => {}
                }
            }
            // fallback
            Color::Reset
        }
    }
}

fn rgb_from_u32(rgb: u32) -> Color {
    Color::Rgb(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    )
}

/// Home directory of the current user, `/` when it cannot be determined.
pub fn get_home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Expands a leading `~` or `~/` to `home`.
pub fn expand_home(input: &str, home: &Path) -> PathBuf {
    if input == "~" {
        home.to_path_buf()
    } else if let Some(rest) = input.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(input)
    }
}

/// Lexically normalizes a path: removes `.` components and folds `..` into its parent.
///
/// Never touches the filesystem, so symlinks are not resolved. `..` at the root stays at
/// the root.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !path.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(if path.has_root() { "/" } else { "." });
    }
    out
}

/// Turns what the user typed in path-entry mode into an absolute, clean path.
///
/// `~` is expanded and relative input is resolved against `base`.
pub fn resolve_input_path(input: &str, base: &Path, home: &Path) -> PathBuf {
    let expanded = expand_home(input.trim(), home);
    if expanded.is_absolute() {
        clean_path(&expanded)
    } else {
        clean_path(&base.join(expanded))
    }
}

/// True if `input` names an existing directory.
pub fn is_path_ok(input: &str, base: &Path, home: &Path) -> bool {
    !input.trim().is_empty() && resolve_input_path(input, base, home).is_dir()
}

/// Wraps `s` in double quotes, escaping the characters the shell still expands there.
pub fn shell_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Login name shown in the header.
pub fn current_username() -> String {
    #[cfg(unix)]
    {
        if let Some(name) = uzers::get_current_username() {
            return name.to_string_lossy().into_owned();
        }
    }
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "user".to_string())
}

/// Helper utils tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Blue"), Color::Blue);
        assert_eq!(parse_color("#ff8000"), Color::Rgb(255, 128, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("not-a-color"), Color::Reset);
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(clean_path(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(clean_path(Path::new("/a/b/")), PathBuf::from("/a/b"));
        assert_eq!(clean_path(Path::new("a/../..")), PathBuf::from(".."));
        assert_eq!(clean_path(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn test_resolve_input_path() {
        let home = Path::new("/home/surfer");
        let base = Path::new("/srv/www");
        assert_eq!(resolve_input_path("~", base, home), PathBuf::from("/home/surfer"));
        assert_eq!(resolve_input_path("~/src", base, home), PathBuf::from("/home/surfer/src"));
        assert_eq!(resolve_input_path("../log", base, home), PathBuf::from("/srv/log"));
        assert_eq!(resolve_input_path("/etc/", base, home), PathBuf::from("/etc"));
    }

    #[test]
    fn test_is_path_ok() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempfile::tempdir()?;
        std::fs::create_dir(tmp.path().join("inner"))?;
        std::fs::File::create(tmp.path().join("plain"))?;

        assert!(is_path_ok("/", tmp.path(), tmp.path()));
        assert!(!is_path_ok("/nonexistent", tmp.path(), tmp.path()));
        assert!(is_path_ok("inner", tmp.path(), tmp.path()));
        assert!(is_path_ok("~/inner", Path::new("/"), tmp.path()));
        assert!(!is_path_ok("plain", tmp.path(), tmp.path()));
        assert!(!is_path_ok("", tmp.path(), tmp.path()));
        Ok(())
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("/home/a b"), "\"/home/a b\"");
        assert_eq!(shell_quote("$HOME`x`\"\\"), "\"\\$HOME\\`x\\`\\\"\\\\\"");
    }
}
