//! Command-line argument parsing and help for cds.
//!
//! This module handles all CLI flag parsing used for config initialization and help.
//!
//! When invoked with no args/flags (cds), cds simply launches the TUI in the current directory.

use crate::config::Config;

#[derive(Debug, PartialEq)]
pub enum CliAction {
    RunApp,
    RunAppAtPath(String),
    Exit,
}

pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().collect();
    parse_args(&args)
}

pub(crate) fn parse_args(args: &[String]) -> CliAction {
    if args.len() < 2 {
        return CliAction::RunApp;
    }

    if args.len() > 2 {
        eprintln!("Error: cds accepts only one argument at a time.");
        eprintln!("Usage: cds [PATH] or cds [OPTION]");
        return CliAction::Exit;
    }

    match args[1].as_str() {
        "--version" | "-v" => {
            print_version();
            CliAction::Exit
        }
        "-h" | "--help" => {
            print_help();
            CliAction::Exit
        }
        "--config-help" => {
            print_config_help();
            CliAction::Exit
        }
        "--keybinds" | "--keybind" | "--key" => {
            print_keybinds();
            CliAction::Exit
        }
        "--shell" => {
            print_shell_function();
            CliAction::Exit
        }
        "--init" => {
            if let Err(e) = Config::generate_default(&Config::default_path(), true) {
                eprintln!("Error: {}", e);
            }
            CliAction::Exit
        }
        "--init-full" => {
            if let Err(e) = Config::generate_default(&Config::default_path(), false) {
                eprintln!("Error: {}", e);
            }
            CliAction::Exit
        }
        arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
            CliAction::RunAppAtPath(arg.to_string())
        }
        arg => {
            eprintln!("Unknown argument: {}", arg);
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
    }
}

fn print_version() {
    println!("cds {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"cds - surf your directories in the terminal, then cd there

USAGE:
  cds [PATH]

PATH:
  Directory to start in (defaults to current directory)

The chosen command (cd "<dir>" or an editor/executable invocation) is printed on
stdout; the interface itself is drawn on stderr. Use --shell to get a wrapper
function that evaluates it in your shell.

OPTIONS:
      --init              Generate a minimal default configuration
      --init-full         Generate the full configuration with all options
      --config-help       Display all the configuration options
      --keybinds          Display all the default keybinds
      --shell             Print a bash/zsh wrapper function
  -h, --help              Print help information
  -v, --version           Display the current installed version of cds

ENVIRONMENT:
  CDS_CONFIG              Override the default config path
  CDS_LOG                 Append debug logs to this file
  CDS_LOG_LEVEL           Log level for CDS_LOG (default: debug)
"#
    );
}

const SHELL_FUNCTION: &str = r#"# add to ~/.bashrc or ~/.zshrc:  eval "$(cds --shell)"
cds() {
    case "$1" in
        -*) command cds "$@"; return ;;
    esac
    local __cds_cmd
    __cds_cmd="$(command cds "$@")" || return
    [ -n "$__cds_cmd" ] && eval "$__cds_cmd"
}
"#;

fn print_shell_function() {
    print!("{}", SHELL_FUNCTION);
}

const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]
  move_up                   ["Up"]
  move_down                 ["Down"]
  move_left                 ["Left"]
  move_right                ["Right"]
  page_up                   ["PageUp"]
  page_down                 ["PageDown"]
  go_to_first               ["Home"]
  go_to_last                ["End"]
  activate                  ["Enter", "Tab"]
  go_parent                 ["Alt+Backspace"]
  go_previous               ["-"]
  go_home                   ["~"]
  go_root                   ["/"]
  toggle_details            ["Alt+d"]
  toggle_selection          ["Space"]
  path_entry                ["Ctrl+l"]
  clear_search              ["Ctrl+u"]
  cancel                    ["Esc"]
  quit_with_cd              ["Alt+Enter"]
  quit                      ["Ctrl+c"]

  Typing a lowercase letter starts a search.

  Syntax Reference:
    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)
    Standard:  ctrl+x, alt+x, shift+x, meta+x
    Special:   "space", "backspace", "enter", "esc", "tab", "pageup",
               "pagedown", "home", "end", "f1".."f12", or any single character
"##;

fn print_keybinds() {
    println!("{}", KEYBINDS_TEXT);
}

fn print_config_help() {
    let help_text = r##"
cds - Full Configuration Guide (cds.toml)

=========================
 General Settings
=========================
[general]
  dirs_first                 List directories before files [default: true]
  current_dir_entry          Show a "./" entry that cds into the current dir [default: true]
  parent_dir_entry           Show a "../" entry [default: true]
  push_to_history            Append the emitted file command to shell history [default: false]

=========================
 Display Settings
=========================
[display]
  show_details               Start with the details view [default: false]
  column_separator           Blank cells between grid columns [default: 2]
  details_separator          Blank cells between detail columns [default: 2]
  footer                     Show the key hint footer [default: true]

=========================
 Theme Configuration
=========================
Each sub-table supports fg/bg colors ("Red", "Blue", hex "#RRGGBB", or "default"):

[theme.directory]            Directories and symlinks to directories
[theme.executable]           Executable files
[theme.symlink]              Symlinks to files
[theme.device]               Device files
[theme.marker]               "./" and "../" entries
[theme.cursor]               Entry under the cursor
[theme.selected]             Selected entries
[theme.matched]              Matched part of a name while searching
[theme.details]              Details view columns
[theme.path]                 Header path
[theme.valid_path]           Path input that names a directory
[theme.invalid_path]         Path input that does not
[theme.footer]               Footer line
[theme.more]                 "--More--" marker

=========================
 Editor
=========================
[editor]
  cmd                       Command to open files, "{}" is replaced by the file name
                            (e.g., "nvim", "code -g {}") [default: $VISUAL, $EDITOR or vim]
"##;

    println!("{}{}", help_text, KEYBINDS_TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn path_argument() {
        assert_eq!(parse_args(&args(&["cds"])), CliAction::RunApp);
        assert_eq!(
            parse_args(&args(&["cds", "/tmp"])),
            CliAction::RunAppAtPath("/tmp".into())
        );
        assert_eq!(parse_args(&args(&["cds", "a", "b"])), CliAction::Exit);
        assert_eq!(parse_args(&args(&["cds", "--bogus"])), CliAction::Exit);
    }
}
