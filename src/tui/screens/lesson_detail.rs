use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use super::list::move_selection;
use super::{Screen, ScreenEvent};
use crate::api::{ApiError, LessonAction, Module, ModuleNode};
use crate::core::action::{Command, Intent, Outcome, Request};
use crate::core::due_date::{DUE_DATE_LEN, DueDateError, format_due_date, parse_due_date};
use crate::core::logging::Logger;
use crate::core::selection::Selection;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{DateInput, DateInputEvent, Hints, LIST_HINTS};
use crate::tui::event::TuiEvent;
use crate::tui::ui;

const DATE_HINTS: Hints = &[("Enter", "save"), ("Esc", "cancel")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonMenuEntry {
    Publish,
    Unpublish,
    SetDueDate,
}

impl LessonMenuEntry {
    pub const ALL: [LessonMenuEntry; 3] = [
        LessonMenuEntry::Publish,
        LessonMenuEntry::Unpublish,
        LessonMenuEntry::SetDueDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LessonMenuEntry::Publish => "Publish",
            LessonMenuEntry::Unpublish => "Unpublish",
            LessonMenuEntry::SetDueDate => "Set Due Date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Menu,
    DueDate,
}

/// Actions on a single lesson. Nothing is fetched on entry; each action is
/// one update request, and a successful one returns to the module.
pub struct LessonDetailScreen {
    lesson: ModuleNode,
    module: Module,
    today: NaiveDate,
    selection: Selection,
    list_state: ListState,
    mode: Mode,
    date_input: DateInput,
    date_error: Option<DueDateError>,
    /// An update is in flight.
    saving: bool,
    error: Option<ApiError>,
    log: Logger,
}

impl LessonDetailScreen {
    pub fn new(lesson: ModuleNode, module: Module, today: NaiveDate, log: &Logger) -> Self {
        let log = log.with("lesson_view");
        log.info(format_args!(
            "Creating lesson view: id={} title={} module_id={}",
            lesson.item.id, lesson.item.title, module.id
        ));
        Self {
            lesson,
            module,
            today,
            selection: Selection::new(LessonMenuEntry::ALL.len()),
            list_state: ListState::default(),
            mode: Mode::Menu,
            date_input: DateInput::new(&format_due_date(today), DUE_DATE_LEN),
            date_error: None,
            saving: false,
            error: None,
            log,
        }
    }

    pub fn selected_entry(&self) -> Option<LessonMenuEntry> {
        self.selection.selected().map(|i| LessonMenuEntry::ALL[i])
    }

    pub fn date_error(&self) -> Option<&DueDateError> {
        self.date_error.as_ref()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    fn back(&self) -> Command {
        self.log.info(format_args!("Returning to module view: id={}", self.module.id));
        Command::Navigate(Intent::ModuleDetail(self.module.clone()))
    }

    fn update(&mut self, action: LessonAction) -> Command {
        self.log.info(format_args!(
            "Updating lesson: id={} action={}",
            self.lesson.item.id,
            action.wire_name()
        ));
        self.saving = true;
        Command::Request(Request::UpdateLesson {
            module_id: self.module.id,
            lesson_id: self.lesson.item.id,
            action,
        })
    }

    fn handle_menu_key(&mut self, key: TuiEvent) -> Option<Command> {
        if move_selection(&mut self.selection, &key) {
            return None;
        }
        match key {
            TuiEvent::Submit => match self.selected_entry()? {
                LessonMenuEntry::Publish => Some(self.update(LessonAction::Publish)),
                LessonMenuEntry::Unpublish => Some(self.update(LessonAction::Unpublish)),
                LessonMenuEntry::SetDueDate => {
                    self.mode = Mode::DueDate;
                    self.date_input = DateInput::new(&format_due_date(self.today), DUE_DATE_LEN);
                    self.date_error = None;
                    None
                }
            },
            TuiEvent::Back => Some(self.back()),
            _ => None,
        }
    }

    fn handle_date_key(&mut self, key: TuiEvent) -> Option<Command> {
        match self.date_input.handle_event(&key)? {
            DateInputEvent::Submit(text) => match parse_due_date(&text) {
                Ok(date) => {
                    self.date_error = None;
                    self.mode = Mode::Menu;
                    Some(self.update(LessonAction::SetDueDate(date)))
                }
                Err(e) => {
                    self.log.warn(format_args!("Rejected due date {text:?}: {e}"));
                    self.date_error = Some(e);
                    None
                }
            },
            DateInputEvent::Cancel => {
                self.mode = Mode::Menu;
                self.date_error = None;
                None
            }
            DateInputEvent::ContentChanged => None,
        }
    }

    fn render_menu(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = LessonMenuEntry::ALL
            .iter()
            .map(|entry| ListItem::new(entry.label()))
            .collect();
        let list = List::new(items)
            .highlight_style(ui::highlight_style())
            .highlight_symbol(ui::HIGHLIGHT_SYMBOL);
        self.list_state.select(self.selection.selected());
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Screen for LessonDetailScreen {
    fn handle_event(&mut self, event: ScreenEvent) -> Option<Command> {
        match event {
            ScreenEvent::Completed(Outcome::LessonUpdated(result)) => {
                self.saving = false;
                match result {
                    Ok(()) => {
                        self.log.info(format_args!("Lesson updated: id={}", self.lesson.item.id));
                        Some(self.back())
                    }
                    Err(e) => {
                        self.log.error(format_args!("Failed to update lesson: {e}"));
                        self.error = Some(e);
                        None
                    }
                }
            }
            ScreenEvent::Completed(other) => {
                self.log.warn(format_args!("Ignoring unexpected outcome: {other:?}"));
                None
            }
            ScreenEvent::Key(key) => {
                if self.error.is_some() || self.saving {
                    // Only a way out remains.
                    return match key {
                        TuiEvent::Back => Some(self.back()),
                        _ => None,
                    };
                }
                match self.mode {
                    Mode::Menu => self.handle_menu_key(key),
                    Mode::DueDate => self.handle_date_key(key),
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!("Lesson: {}", self.lesson.item.title);
        let hints = if self.mode == Mode::DueDate && self.error.is_none() {
            DATE_HINTS
        } else {
            LIST_HINTS
        };
        let body = ui::draw_chrome(frame, area, &title, hints);

        if let Some(e) = &self.error {
            ui::draw_error(frame, body, &e.to_string());
            return;
        }

        use Constraint::{Length, Min};
        let [info_area, menu_area, status_area, input_area, input_error_area, _] =
            Layout::vertical([Length(3), Length(3), Length(1), Length(3), Length(1), Min(0)])
                .areas(body);

        let dim = Style::default().fg(Color::DarkGray);
        let info = vec![
            Line::from(vec![Span::styled("Module: ", dim), Span::raw(self.module.name.clone())]),
            Line::from(vec![Span::styled("Type:   ", dim), Span::raw(self.lesson.item.kind.clone())]),
            Line::from(Span::styled(
                format!("{} nested item(s)", self.lesson.children.len()),
                dim,
            )),
        ];
        frame.render_widget(Paragraph::new(info), info_area);

        self.render_menu(frame, menu_area);

        if self.saving {
            let saving = Paragraph::new("Saving…")
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC));
            frame.render_widget(saving, status_area);
        }

        if self.mode == Mode::DueDate {
            self.date_input.render(frame, input_area);
            if let Some(e) = &self.date_error {
                let error = Paragraph::new(e.to_string()).style(Style::default().fg(Color::Red));
                frame.render_widget(error, input_error_area);
            }
        }
    }

    fn is_text_entry(&self) -> bool {
        self.mode == Mode::DueDate
    }

    fn name(&self) -> &'static str {
        "lesson_detail"
    }
}
