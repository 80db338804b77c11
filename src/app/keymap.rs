//! Key mapping and action dispatch system for cds
//!
//! Defines key to an action, parsing from the config, and enum variants
//! for all navigation and system actions used by cds.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Represents any action in the app: cursor movement, navigation, or system.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Move(MoveAction),
    Nav(NavAction),
    System(SystemAction),
}

/// Cursor movement inside the active list
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveAction {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    First,
    Last,
}

/// Navigation actions (activate, change directory, toggles, modes)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    Activate,
    GoParent,
    GoPrevious,
    GoHome,
    GoRoot,
    ToggleDetails,
    ToggleSelection,
    PathEntry,
    ClearSearch,
}

/// System actions (leaving cds or the current mode)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SystemAction {
    Cancel,
    QuitWithCd,
    Quit,
}

/// Key + modifiers as used in keybind/keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Stores the mapping from Key to action, which is built in the config
#[derive(Debug, Default)]
pub struct Keymap {
    map: HashMap<Key, Action>,
}

impl Keymap {
    /// Builds the keymap from the config
    #[rustfmt::skip]
    pub fn from_config(config: &crate::config::Config) -> Self {
        let mut map = HashMap::new();
        let keys = config.keys();

        macro_rules! bind {
            ($keys:expr, $action:expr) => {
                bind($keys, $action, &mut map);
            };
        }

        use MoveAction as M;
        use NavAction as N;
        use SystemAction as S;

        // MoveActions
        bind!(keys.move_up(),           Action::Move(M::Up));
        bind!(keys.move_down(),         Action::Move(M::Down));
        bind!(keys.move_left(),         Action::Move(M::Left));
        bind!(keys.move_right(),        Action::Move(M::Right));
        bind!(keys.page_up(),           Action::Move(M::PageUp));
        bind!(keys.page_down(),         Action::Move(M::PageDown));
        bind!(keys.go_to_first(),       Action::Move(M::First));
        bind!(keys.go_to_last(),        Action::Move(M::Last));

        // NavActions
        bind!(keys.activate(),          Action::Nav(N::Activate));
        bind!(keys.go_parent(),         Action::Nav(N::GoParent));
        bind!(keys.go_previous(),       Action::Nav(N::GoPrevious));
        bind!(keys.go_home(),           Action::Nav(N::GoHome));
        bind!(keys.go_root(),           Action::Nav(N::GoRoot));
        bind!(keys.toggle_details(),    Action::Nav(N::ToggleDetails));
        bind!(keys.toggle_selection(),  Action::Nav(N::ToggleSelection));
        bind!(keys.path_entry(),        Action::Nav(N::PathEntry));
        bind!(keys.clear_search(),      Action::Nav(N::ClearSearch));

        // SystemActions
        bind!(keys.cancel(),            Action::System(S::Cancel));
        bind!(keys.quit_with_cd(),      Action::System(S::QuitWithCd));
        bind!(keys.quit(),              Action::System(S::Quit));

        Keymap { map }
    }

    /// Looks up the action for a given key event
    pub fn lookup(&self, key: KeyEvent) -> Option<Action> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(action) = self.map.get(&k).copied() {
            return Some(action);
        }

        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return self.map.get(&k2).copied();
        }
        None
    }
}

/// An unmodified lowercase letter starts (or extends) a search.
pub fn is_search_trigger(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(c) if c.is_lowercase())
        && (key.modifiers - KeyModifiers::SHIFT).is_empty()
}

/// A character that can be typed into the path-entry buffer.
pub fn text_input(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !c.is_control()
                && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

pub(crate) fn parse_key(s: &str) -> Option<Key> {
    // "-", "+", "~", "/" and friends are literal keys
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(Key {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        });
    }

    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    let is_bracketed = s.starts_with('<') && s.ends_with('>');
    let mut input = s.trim_start_matches('<').trim_end_matches('>').to_string();

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();

        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "a" | "m" | "alt" => modifiers |= KeyModifiers::ALT,
                "s" | "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    let normalized = input.replace('-', "+");
    for part in normalized.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "pageup" | "pgup" => code = Some(KeyCode::PageUp),
            "pagedown" | "pgdn" => code = Some(KeyCode::PageDown),
            "home" => code = Some(KeyCode::Home),
            "end" => code = Some(KeyCode::End),
            "enter" | "return" => code = Some(KeyCode::Enter),
            "esc" | "escape" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "delete" | "del" => code = Some(KeyCode::Delete),
            "tab" => code = Some(KeyCode::Tab),
            "space" | "spc" => code = Some(KeyCode::Char(' ')),

            _ => {
                if part.chars().count() == 1 {
                    let mut c = part.chars().next()?;
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        c = c.to_ascii_uppercase();
                    }
                    code = Some(KeyCode::Char(c));
                } else if p_low.starts_with('f')
                    && p_low.len() > 1
                    && p_low[1..].chars().all(|c| c.is_ascii_digit())
                {
                    let n = p_low[1..].parse().ok()?;
                    code = Some(KeyCode::F(n));
                } else if part.is_empty() {
                    continue;
                } else {
                    return None;
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

fn bind(key_list: &[String], action: Action, map: &mut HashMap<Key, Action>) {
    for k in key_list {
        match parse_key(k) {
            Some(key) => {
                map.insert(key, action);
            }
            None => log::warn!("ignoring unparsable key binding {:?}", k),
        }
    }
}
