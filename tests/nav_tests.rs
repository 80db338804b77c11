//! Navigation tests for cds against the real filesystem.
//!
//! These tests drive [AppState] with key events inside temporary directory trees and
//! check directory changes, history, emitted commands and start-path validation.

use cds::app::{AppState, KeypressResult, Mode};
use cds::config::Config;
use cds::core::SurfError;
use cds::utils::{is_path_ok, resolve_input_path};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::error;
use std::fs::{self, File};
use std::path::Path;
use tempfile::tempdir;

fn press(app: &mut AppState, code: KeyCode) -> Result<KeypressResult, SurfError> {
    app.handle_keypress(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Searches for `query` and activates the best match.
fn open(app: &mut AppState, query: &str) -> Result<KeypressResult, SurfError> {
    for c in query.chars() {
        press(app, KeyCode::Char(c))?;
    }
    press(app, KeyCode::Enter)
}

#[test]
fn test_descend_and_ascend() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().canonicalize()?;
    fs::create_dir_all(root.join("src/app"))?;
    File::create(root.join("src/lib.rs"))?;

    let config = Config::default();
    let mut app = AppState::new(&config, &root)?;

    open(&mut app, "src")?;
    assert_eq!(app.mode(), Mode::Browse);
    assert_eq!(app.current_dir(), root.join("src"));
    assert_eq!(app.previous_dir(), root.as_path());

    app.go_parent()?;
    assert_eq!(app.current_dir(), root.as_path());
    assert_eq!(
        app.entry_under_cursor().map(|e| e.name().to_string()),
        Some("src/".to_string())
    );
    Ok(())
}

#[test]
fn test_go_previous_toggles() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().canonicalize()?;
    fs::create_dir_all(root.join("deep/er"))?;

    let config = Config::default();
    let mut app = AppState::new(&config, &root)?;
    open(&mut app, "deep")?;
    open(&mut app, "er")?;
    assert_eq!(app.current_dir(), root.join("deep/er"));

    app.go_previous()?;
    assert_eq!(app.current_dir(), root.join("deep"));
    app.go_previous()?;
    assert_eq!(app.current_dir(), root.join("deep/er"));
    Ok(())
}

#[test]
fn test_emitted_commands() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().canonicalize()?;
    File::create(root.join("readme.txt"))?;

    let config = Config::parse("[editor]\ncmd = \"nano {}\"\n")?;
    let mut app = AppState::new(&config, &root)?;

    let cd = format!("cd \"{}\"", root.display());
    assert_eq!(
        app.handle_keypress(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT))?,
        KeypressResult::QuitWithCommand(cd.clone())
    );
    assert_eq!(
        open(&mut app, "readme")?,
        KeypressResult::QuitWithCommand(format!("{} && nano \"readme.txt\"", cd))
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_executables_run_in_place() -> Result<(), Box<dyn error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir()?;
    let root = dir.path().canonicalize()?;
    let script = root.join("run.sh");
    File::create(&script)?;
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;

    let config = Config::default();
    let mut app = AppState::new(&config, &root)?;
    assert_eq!(
        open(&mut app, "run")?,
        KeypressResult::QuitWithCommand(format!("cd \"{}\" && \"./run.sh\"", root.display()))
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_broken_symlink_is_fatal() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().canonicalize()?;
    fs::create_dir(root.join("bad"))?;
    std::os::unix::fs::symlink(root.join("gone"), root.join("bad/dangling"))?;

    let config = Config::default();
    let mut app = AppState::new(&config, &root)?;
    let err = open(&mut app, "bad").err().ok_or("load should fail")?;
    assert!(matches!(err, SurfError::Symlink { .. }));
    assert_eq!(app.current_dir(), root.as_path());

    assert!(AppState::new(&config, &root.join("bad")).is_err());
    Ok(())
}

#[test]
fn test_start_path_validation() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().canonicalize()?;
    fs::create_dir(root.join("projects"))?;
    File::create(root.join("file.txt"))?;

    assert!(is_path_ok("projects", &root, Path::new("/")));
    assert!(is_path_ok("~/projects", Path::new("/"), &root));
    assert!(is_path_ok(&root.display().to_string(), Path::new("/"), Path::new("/")));
    assert!(!is_path_ok("file.txt", &root, Path::new("/")));
    assert!(!is_path_ok("missing", &root, Path::new("/")));
    assert!(!is_path_ok("  ", &root, Path::new("/")));

    assert_eq!(
        resolve_input_path("projects/../projects/", &root, Path::new("/")),
        root.join("projects")
    );
    Ok(())
}
