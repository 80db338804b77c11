//! UI-related tests for cds
//!
//! These tests render full frames of the cds TUI into a ratatui `TestBackend` and
//! check the visible text: header, listing, `--More--` marker, hints and footer.
//!
//! These tests create temporary directories and files to simulate different UI scenarios.
//! These temporary resources are automatically cleaned up after the tests complete.

use cds::app::{AppState, Mode};
use cds::config::Config;
use cds::core;
use cds::ui::render::{layout_chunks, render};
use cds::ui::widgets::FOOTER_TEXT;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use std::error;
use std::fs::File;
use tempfile::tempdir;

fn screen(app: &AppState, width: u16, height: u16) -> Result<Vec<String>, Box<dyn error::Error>> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| render(f, app))?;
    let buffer = terminal.backend().buffer();
    let lines = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect();
    Ok(lines)
}

fn key(app: &mut AppState, code: KeyCode, mods: KeyModifiers) -> Result<(), Box<dyn error::Error>> {
    app.handle_keypress(KeyEvent::new(code, mods))?;
    Ok(())
}

#[test]
fn test_ui_sanitization_and_exact_width() {
    let cell_width = 10;

    let cases = vec![
        ("short.txt", 10),
        ("very_long_filename.txt", 10),
        ("🦀_crab.rs", 10),
        ("\t_tab", 10),
    ];

    for (input, expected_width) in cases {
        let result = core::sanitize_to_exact_width(input, cell_width);

        let actual_width = unicode_width::UnicodeWidthStr::width(result.as_str());

        assert_eq!(
            actual_width, expected_width,
            "Failed to produce exact width for input: '{}'. Result was: '{}' (width: {})",
            input, result, actual_width
        );

        assert!(
            !result.chars().any(|c| c.is_control() && c != ' '),
            "Result contains control characters: {:?}",
            result
        );
    }
}

#[test]
fn test_header_and_footer() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().canonicalize()?;
    File::create(path.join("notes.md"))?;

    let config = Config::default();
    let mut app = AppState::new(&config, &path)?;
    app.handle_resize(100, 12);
    let lines = screen(&app, 100, 12)?;

    let header = format!("{}: {}", app.username(), path.display());
    assert!(lines[0].starts_with(&header), "header was {:?}", lines[0]);
    assert!(lines[11].starts_with(FOOTER_TEXT));
    assert!(lines[1].contains("./") && lines[1].contains("../") && lines[1].contains("notes.md"));
    Ok(())
}

#[test]
fn test_more_marker_on_overflow() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().canonicalize()?;
    for i in 0..30 {
        File::create(path.join(format!("file_{:02}", i)))?;
    }

    let config = Config::default();
    let mut app = AppState::new(&config, &path)?;
    app.handle_resize(40, 10);
    assert!(app.grid().rows > app.grid().rows_displayed + 1);

    let lines = screen(&app, 40, 10)?;
    assert!(lines.iter().any(|l| l.starts_with("--More--")));

    key(&mut app, KeyCode::End, KeyModifiers::NONE)?;
    let last = app
        .active_items()
        .last()
        .map(|e| e.name().to_string())
        .ok_or("empty listing")?;
    let lines = screen(&app, 40, 10)?;
    assert!(!lines.iter().any(|l| l.contains("--More--")));
    assert!(lines.iter().any(|l| l.contains(&last)));
    Ok(())
}

#[test]
fn test_last_row_fits_instead_of_more() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().canonicalize()?;
    for i in 0..4 {
        File::create(path.join(format!("file_{}", i)))?;
    }

    let config = Config::default();
    let mut app = AppState::new(&config, &path)?;
    key(&mut app, KeyCode::Char('d'), KeyModifiers::ALT)?;
    // six rows, five shown, the sixth is the last one
    app.handle_resize(80, 10);
    assert_eq!(app.grid().rows, 6);
    assert_eq!(app.grid().rows_displayed, 5);

    let lines = screen(&app, 80, 10)?;
    assert!(!lines.iter().any(|l| l.contains("--More--")));
    assert!(lines.iter().any(|l| l.contains("file_3")));
    Ok(())
}

#[test]
fn test_path_entry_hints() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().canonicalize()?;

    let config = Config::default();
    let mut app = AppState::new(&config, &path)?;
    app.handle_resize(80, 12);

    key(&mut app, KeyCode::Char('l'), KeyModifiers::CONTROL)?;
    assert_eq!(app.mode(), Mode::PathEntry);
    let lines = screen(&app, 80, 12)?;
    assert!(lines[1].starts_with("Manual path input mode."));
    assert!(lines[2].starts_with("Press <enter> to enter path"));

    for c in "cds-no-such-dir-here".chars() {
        key(&mut app, KeyCode::Char(c), KeyModifiers::NONE)?;
    }
    let lines = screen(&app, 80, 12)?;
    assert!(lines[0].contains("/cds-no-such-dir-here"));
    assert!(lines[1].starts_with("Invalid path"));
    assert!(lines[2].starts_with("Fix it or press <esc> to exit path input mode"));

    key(&mut app, KeyCode::Esc, KeyModifiers::NONE)?;
    let lines = screen(&app, 80, 12)?;
    assert!(!lines.iter().any(|l| l.contains("Invalid path")));
    Ok(())
}

#[test]
fn test_search_header_shows_query() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().canonicalize()?;
    File::create(path.join("alpha"))?;
    File::create(path.join("beta"))?;

    let config = Config::default();
    let mut app = AppState::new(&config, &path)?;
    app.handle_resize(80, 12);
    key(&mut app, KeyCode::Char('b'), KeyModifiers::NONE)?;

    let lines = screen(&app, 80, 12)?;
    assert!(lines[0].trim_end().ends_with("/b"));
    assert!(lines[1].starts_with("beta"));
    assert!(!lines.iter().any(|l| l.contains("alpha")));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_details_view_shows_columns_and_links() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().canonicalize()?;
    std::fs::create_dir(path.join("docs"))?;
    std::os::unix::fs::symlink(path.join("docs"), path.join("latest"))?;

    let toml_content = r#"
        [display]
        show_details = true
    "#;
    let config = Config::parse(toml_content)?;
    let mut app = AppState::new(&config, &path)?;
    app.handle_resize(240, 12);

    let lines = screen(&app, 240, 12)?;
    let link_line = lines
        .iter()
        .find(|l| l.contains("latest/"))
        .ok_or("symlink not listed")?;
    assert!(link_line.starts_with('l'));
    assert!(link_line.contains(&format!("-> {}/", path.join("docs").display())));
    assert!(lines.iter().any(|l| l.starts_with("drwx") && l.contains("docs/")));
    Ok(())
}

#[test]
fn test_layout_chunks_with_config() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let size = Rect::new(0, 0, 100, 10);

    let config = Config::parse("[display]\nfooter = false\n")?;
    let app = AppState::new(&config, dir.path())?;

    let chunks = layout_chunks(size, &app);
    assert_eq!(chunks.header.height, 1);
    assert_eq!(chunks.list.height, 9);
    assert!(chunks.footer.is_none());
    Ok(())
}
