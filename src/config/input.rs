//! Input configuration options for cds
//!
//! This module defines the `[keys]` and `[editor]` tables which are read from the cds.toml
//! configuration file.

use crate::utils::shell_quote;

use serde::Deserialize;

/// Input configuration options of all actions
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    move_up: Vec<String>,
    move_down: Vec<String>,
    move_left: Vec<String>,
    move_right: Vec<String>,
    page_up: Vec<String>,
    page_down: Vec<String>,
    go_to_first: Vec<String>,
    go_to_last: Vec<String>,
    activate: Vec<String>,
    go_parent: Vec<String>,
    go_previous: Vec<String>,
    go_home: Vec<String>,
    go_root: Vec<String>,
    toggle_details: Vec<String>,
    toggle_selection: Vec<String>,
    path_entry: Vec<String>,
    clear_search: Vec<String>,
    cancel: Vec<String>,
    quit_with_cd: Vec<String>,
    quit: Vec<String>,
}

/// Editor configuration options
///
/// `cmd` is a command template. A `{}` in it is replaced by the quoted file name,
/// otherwise the quoted name is appended.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Editor {
    cmd: String,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    move_up,
    move_down,
    move_left,
    move_right,
    page_up,
    page_down,
    go_to_first,
    go_to_last,
    activate,
    go_parent,
    go_previous,
    go_home,
    go_root,
    toggle_details,
    toggle_selection,
    path_entry,
    clear_search,
    cancel,
    quit_with_cd,
    quit,
);

/// Default input configuration options
impl Default for Keys {
    fn default() -> Self {
        Keys {
            move_up: vec!["Up".into()],
            move_down: vec!["Down".into()],
            move_left: vec!["Left".into()],
            move_right: vec!["Right".into()],
            page_up: vec!["PageUp".into()],
            page_down: vec!["PageDown".into()],
            go_to_first: vec!["Home".into()],
            go_to_last: vec!["End".into()],

            activate: vec!["Enter".into(), "Tab".into()],
            go_parent: vec!["Alt+Backspace".into()],
            go_previous: vec!["-".into()],
            go_home: vec!["~".into()],
            go_root: vec!["/".into()],

            toggle_details: vec!["Alt+d".into()],
            toggle_selection: vec!["Space".into()],
            path_entry: vec!["Ctrl+l".into()],
            clear_search: vec!["Ctrl+u".into()],

            cancel: vec!["Esc".into()],
            quit_with_cd: vec!["Alt+Enter".into()],
            quit: vec!["Ctrl+c".into()],
        }
    }
}

/// Public methods for accessing editor configuration options
impl Editor {
    #[inline]
    pub fn cmd(&self) -> &str {
        let trimmed = self.cmd.trim();
        if trimmed.is_empty() { "vim" } else { trimmed }
    }

    /// The program part of the template, used to check that the editor is installed.
    pub fn program(&self) -> &str {
        self.cmd().split_whitespace().next().unwrap_or("vim")
    }

    pub fn exists(&self) -> bool {
        which::which(self.program()).is_ok()
    }

    /// Shell command that opens `file_name` in the editor.
    pub fn command_for(&self, file_name: &str) -> String {
        let quoted = shell_quote(file_name);
        let cmd = self.cmd();
        if cmd.contains("{}") {
            cmd.replace("{}", &quoted)
        } else {
            format!("{} {}", cmd, quoted)
        }
    }
}

/// Default editor configuration options
impl Default for Editor {
    fn default() -> Self {
        let cmd = std::env::var("VISUAL")
            .or_else(|_| std::env::var("EDITOR"))
            .unwrap_or_else(|_| "vim".into());
        Editor { cmd }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(cmd: &str) -> Editor {
        Editor { cmd: cmd.into() }
    }

    #[test]
    fn editor_template() {
        assert_eq!(editor("nvim").command_for("a b.txt"), "nvim \"a b.txt\"");
        assert_eq!(editor("code -g {}:1").command_for("x.rs"), "code -g \"x.rs\":1");
        assert_eq!(editor("   ").command_for("x"), "vim \"x\"");
        assert_eq!(editor("").program(), "vim");
        assert_eq!(editor("emacs -nw").program(), "emacs");
    }
}
