use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, ListState};

use super::list::move_selection;
use super::{Screen, ScreenEvent};
use crate::core::action::{Command, Intent};
use crate::core::logging::Logger;
use crate::core::selection::Selection;
use crate::tui::components::Hints;
use crate::tui::event::TuiEvent;
use crate::tui::ui;

const HINTS: Hints = &[("↑/k", "up"), ("↓/j", "down"), ("Enter", "select"), ("q", "quit")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Modules,
    Enrollments,
    Quit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 3] = [MenuEntry::Modules, MenuEntry::Enrollments, MenuEntry::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Modules => "List Modules",
            MenuEntry::Enrollments => "Enrollments",
            MenuEntry::Quit => "Quit",
        }
    }
}

/// Landing menu. Fetches nothing.
pub struct HomeScreen {
    selection: Selection,
    list_state: ListState,
    log: Logger,
}

impl HomeScreen {
    pub fn new(log: &Logger) -> Self {
        let log = log.with("home_view");
        log.info("Creating home view");
        Self {
            selection: Selection::new(MenuEntry::ALL.len()),
            list_state: ListState::default(),
            log,
        }
    }

    pub fn selected_entry(&self) -> Option<MenuEntry> {
        self.selection.selected().map(|i| MenuEntry::ALL[i])
    }
}

impl Screen for HomeScreen {
    fn handle_event(&mut self, event: ScreenEvent) -> Option<Command> {
        let ScreenEvent::Key(key) = event else {
            return None;
        };
        if move_selection(&mut self.selection, &key) {
            return None;
        }
        match key {
            TuiEvent::Submit => {
                let entry = self.selected_entry()?;
                self.log.info(format_args!("Selected menu entry: {}", entry.label()));
                Some(match entry {
                    MenuEntry::Modules => Command::Navigate(Intent::ModuleList),
                    MenuEntry::Enrollments => Command::Navigate(Intent::EnrollmentList),
                    MenuEntry::Quit => Command::Quit,
                })
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let body = ui::draw_chrome(frame, area, "Home", HINTS);

        let items: Vec<ListItem> = MenuEntry::ALL
            .iter()
            .map(|entry| ListItem::new(Line::from(entry.label())))
            .collect();
        let list = List::new(items)
            .highlight_style(ui::highlight_style())
            .highlight_symbol(ui::HIGHLIGHT_SYMBOL);

        self.list_state.select(self.selection.selected());
        frame.render_stateful_widget(list, body, &mut self.list_state);
    }

    fn name(&self) -> &'static str {
        "home"
    }
}
