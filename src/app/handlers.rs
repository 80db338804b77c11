//! Input action handler methods for cds.
//!
//! This module implements [AppState] methods that process key events for each mode
//! and the navigation actions they trigger.

use crate::app::keymap::{
    Action, MoveAction, NavAction, SystemAction, is_search_trigger, text_input,
};
use crate::app::state::{Activation, AppState, KeypressResult, Mode};
use crate::core::EntryKind;
use crate::core::error::Result;
use crate::utils::resolve_input_path;

use crossterm::event::{KeyCode, KeyEvent};

use std::path::PathBuf;

/// AppState input and action handlers
impl<'a> AppState<'a> {
    // Mode handlers

    pub(super) fn handle_browse(
        &mut self,
        key: KeyEvent,
        action: Option<Action>,
    ) -> Result<KeypressResult> {
        match action {
            Some(Action::Move(m)) => {
                self.handle_move(m);
                Ok(KeypressResult::Consumed)
            }
            Some(Action::Nav(n)) => self.handle_nav_action(n),
            Some(Action::System(s)) => Ok(self.handle_sys_action(s)),
            None if is_search_trigger(&key) => {
                if let KeyCode::Char(c) = key.code {
                    self.enter_search(c);
                }
                Ok(KeypressResult::Consumed)
            }
            None => Ok(KeypressResult::Continue),
        }
    }

    pub(super) fn handle_search(
        &mut self,
        key: KeyEvent,
        action: Option<Action>,
    ) -> Result<KeypressResult> {
        if is_search_trigger(&key)
            && let KeyCode::Char(c) = key.code
        {
            self.nav.push_query(c);
            self.cursor.reset();
            self.relayout();
            return Ok(KeypressResult::Consumed);
        }

        if key.code == KeyCode::Backspace && key.modifiers.is_empty() {
            if self.nav.pop_query() {
                self.exit_search();
            } else {
                self.cursor.reset();
                self.relayout();
            }
            return Ok(KeypressResult::Consumed);
        }

        match action {
            Some(Action::Move(m)) => {
                self.handle_move(m);
                Ok(KeypressResult::Consumed)
            }
            Some(Action::Nav(NavAction::Activate)) => self.activate_to_result(),
            Some(Action::Nav(NavAction::ClearSearch)) | Some(Action::System(SystemAction::Cancel)) => {
                self.exit_search();
                Ok(KeypressResult::Consumed)
            }
            Some(Action::System(s)) => Ok(self.handle_sys_action(s)),
            _ => Ok(KeypressResult::Continue),
        }
    }

    pub(super) fn handle_path_entry(
        &mut self,
        key: KeyEvent,
        action: Option<Action>,
    ) -> Result<KeypressResult> {
        if let Some(c) = text_input(&key) {
            self.path_input.push(c);
            return Ok(KeypressResult::Consumed);
        }

        let plain = key.modifiers.is_empty();
        match key.code {
            KeyCode::Enter if plain => {
                self.commit_path_input()?;
                Ok(KeypressResult::Consumed)
            }
            KeyCode::Esc if plain => {
                self.leave_path_entry();
                Ok(KeypressResult::Consumed)
            }
            KeyCode::Backspace if plain => {
                self.path_input.pop();
                if self.path_input.is_empty() {
                    self.leave_path_entry();
                }
                Ok(KeypressResult::Consumed)
            }
            _ => match action {
                Some(Action::System(s @ (SystemAction::Quit | SystemAction::QuitWithCd))) => {
                    Ok(self.handle_sys_action(s))
                }
                _ => Ok(KeypressResult::Continue),
            },
        }
    }

    // Action handlers

    fn handle_sys_action(&mut self, action: SystemAction) -> KeypressResult {
        match action {
            SystemAction::Quit => KeypressResult::Quit,
            SystemAction::QuitWithCd => KeypressResult::QuitWithCommand(self.cd_command()),
            SystemAction::Cancel => match self.mode {
                Mode::Browse => KeypressResult::Quit,
                Mode::Search => {
                    self.exit_search();
                    KeypressResult::Consumed
                }
                Mode::PathEntry => {
                    self.leave_path_entry();
                    KeypressResult::Consumed
                }
            },
        }
    }

    fn handle_nav_action(&mut self, action: NavAction) -> Result<KeypressResult> {
        match action {
            NavAction::Activate => return self.activate_to_result(),
            NavAction::GoParent => self.go_parent()?,
            NavAction::GoPrevious => self.go_previous()?,
            NavAction::GoHome => {
                let home = self.home.clone();
                self.change_dir(&home)?;
            }
            NavAction::GoRoot => self.change_dir(&PathBuf::from("/"))?,
            NavAction::ToggleDetails => {
                self.show_details = !self.show_details;
                self.relayout();
                self.cursor.center(&self.grid);
            }
            NavAction::ToggleSelection => {
                let index = self.cursor.index();
                self.nav.toggle_selected(index);
            }
            NavAction::PathEntry => {
                self.mode = Mode::PathEntry;
                self.path_input = String::from("/");
                self.relayout();
            }
            NavAction::ClearSearch => return Ok(KeypressResult::Continue),
        }
        Ok(KeypressResult::Consumed)
    }

    pub(super) fn handle_move(&mut self, action: MoveAction) {
        let len = self.active_items().len();
        let columns = self.grid.columns as isize;
        let page = columns * self.grid.rows_displayed as isize;

        match action {
            MoveAction::Up => self.step(-columns, len),
            MoveAction::Down => self.step(columns, len),
            MoveAction::Left => self.step(-1, len),
            MoveAction::Right => self.step(1, len),
            MoveAction::PageUp => {
                self.cursor.move_by(-page, len);
                self.cursor.jump_to_row(&self.grid);
            }
            MoveAction::PageDown => {
                self.cursor.move_by(page, len);
                self.cursor.jump_to_row(&self.grid);
            }
            MoveAction::First => self.cursor.reset(),
            MoveAction::Last => {
                self.cursor.set_index(len.saturating_sub(1), len);
                self.cursor.jump_to_row(&self.grid);
            }
        }
    }

    fn step(&mut self, delta: isize, len: usize) {
        self.cursor.move_by(delta, len);
        self.cursor.follow(&self.grid);
    }

    // Navigation

    /// Activates the entry under the cursor.
    ///
    /// A directory change leaves search once the new view is loaded, so a failed load
    /// keeps the query and results.
    pub fn activate(&mut self) -> Result<Activation> {
        let Some(entry) = self.entry_under_cursor().cloned() else {
            return Ok(Activation::NothingSelected);
        };

        match entry.kind() {
            EntryKind::CurrentMarker => Ok(Activation::Exit(self.cd_command())),
            EntryKind::ParentMarker => {
                self.go_parent()?;
                Ok(Activation::Stay)
            }
            _ if entry.is_dir_like() => {
                let target = self.current_dir().join(entry.file_name());
                self.change_dir(&target)?;
                Ok(Activation::Stay)
            }
            _ => Ok(Activation::Exit(self.open_command(&entry))),
        }
    }

    fn activate_to_result(&mut self) -> Result<KeypressResult> {
        Ok(match self.activate()? {
            Activation::Exit(cmd) => {
                log::info!("emitting: {}", cmd);
                KeypressResult::QuitWithCommand(cmd)
            }
            Activation::Stay | Activation::NothingSelected => KeypressResult::Consumed,
        })
    }

    /// Goes one level up and puts the cursor on the directory just left. No-op at the root.
    pub fn go_parent(&mut self) -> Result<()> {
        let Some(parent) = self.current_dir().parent().map(|p| p.to_path_buf()) else {
            return Ok(());
        };
        let left_name = self
            .current_dir()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());

        self.change_dir(&parent)?;

        if let Some(index) = left_name.and_then(|n| self.nav.view().position_of(&n)) {
            let len = self.active_items().len();
            self.cursor.set_index(index, len);
        }
        self.cursor.center(&self.grid);
        Ok(())
    }

    /// Swaps the current directory with the previous one.
    pub fn go_previous(&mut self) -> Result<()> {
        let target = self.history.previous().to_path_buf();
        self.change_dir(&target)?;

        if let Some(index) = self.nav.position_for(&target) {
            let len = self.active_items().len();
            self.cursor.set_index(index, len);
        }
        self.cursor.center(&self.grid);
        Ok(())
    }

    // Mode changes

    fn enter_search(&mut self, c: char) {
        self.mode = Mode::Search;
        self.nav.push_query(c);
        self.cursor.reset();
        self.relayout();
    }

    fn exit_search(&mut self) {
        self.mode = Mode::Browse;
        self.nav.clear_query();
        self.cursor.reset();
        self.relayout();
    }

    fn leave_path_entry(&mut self) {
        self.mode = Mode::Browse;
        self.path_input.clear();
        self.relayout();
    }

    fn commit_path_input(&mut self) -> Result<()> {
        if !self.path_input_valid() {
            return Ok(());
        }
        let target = resolve_input_path(&self.path_input, self.current_dir(), &self.home);
        self.change_dir(&target)
    }
}
