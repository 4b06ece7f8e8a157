use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use super::list::{LoadStatus, move_selection};
use super::{Screen, ScreenEvent};
use crate::api::Enrollment;
use crate::core::action::{Command, Intent, Outcome, Request};
use crate::core::grades::GradeBook;
use crate::core::logging::Logger;
use crate::core::selection::Selection;
use crate::tui::components::LIST_HINTS;
use crate::tui::event::TuiEvent;
use crate::tui::ui;

const NAME_WIDTH: usize = 28;
const TYPE_WIDTH: usize = 10;
const STATE_WIDTH: usize = 12;
const SEPARATOR: &str = "~~~ PASSING ~~~";

/// One table row. Kept free of styling so tests can compare plain text.
pub(crate) fn format_row(enrollment: &Enrollment) -> String {
    let kind = enrollment
        .kind
        .strip_suffix("Enrollment")
        .unwrap_or(&enrollment.kind);
    let score = match enrollment.grades.current_score {
        Some(score) => format!("{score:.1}%"),
        None => "n/a".to_string(),
    };
    format!(
        "{} {} {} {:>6}",
        ui::pad_str(&enrollment.user.name, NAME_WIDTH),
        ui::pad_str(kind, TYPE_WIDTH),
        ui::pad_str(enrollment.state.label(), STATE_WIDTH),
        score
    )
}

fn header() -> String {
    format!(
        "{} {} {} {:>6}",
        ui::pad_str("Name", NAME_WIDTH),
        ui::pad_str("Type", TYPE_WIDTH),
        ui::pad_str("State", STATE_WIDTH),
        "Score"
    )
}

/// Students ordered failing-first, with a separator row drawn before the
/// first passing student. The cursor never lands on the separator.
pub struct EnrollmentListScreen {
    book: GradeBook,
    selection: Selection,
    status: LoadStatus,
    list_state: ListState,
    log: Logger,
}

impl EnrollmentListScreen {
    pub fn new(log: &Logger) -> Self {
        let log = log.with("enrollments_view");
        log.info("Creating enrollments view");
        Self {
            book: GradeBook::default(),
            selection: Selection::new(0),
            status: LoadStatus::Loading,
            list_state: ListState::default(),
            log,
        }
    }

    pub fn book(&self) -> &GradeBook {
        &self.book
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn selected_enrollment(&self) -> Option<&Enrollment> {
        self.selection.selected().and_then(|i| self.book.get(i))
    }

    /// Position in the rendered list, which has the separator in it.
    fn list_index(&self, cursor: usize) -> usize {
        if cursor >= self.book.failing().len() {
            cursor + 1
        } else {
            cursor
        }
    }
}

impl Screen for EnrollmentListScreen {
    fn init(&mut self) -> Option<Command> {
        self.log.info("Fetching enrollments");
        Some(Command::Request(Request::Enrollments))
    }

    fn handle_event(&mut self, event: ScreenEvent) -> Option<Command> {
        match event {
            ScreenEvent::Completed(Outcome::Enrollments(result)) => {
                match result {
                    Ok(enrollments) => {
                        let total = enrollments.len();
                        self.book = GradeBook::from_enrollments(enrollments);
                        self.log.info(format_args!(
                            "Received enrollments: count={total} students={} failing={}",
                            self.book.len(),
                            self.book.failing().len()
                        ));
                        self.status = LoadStatus::Ready;
                    }
                    Err(e) => {
                        self.log.error(format_args!("Failed to fetch enrollments: {e}"));
                        self.book = GradeBook::default();
                        self.status = LoadStatus::Failed(e);
                    }
                }
                self.selection.resize(self.book.len());
                None
            }
            ScreenEvent::Completed(other) => {
                self.log.warn(format_args!("Ignoring unexpected outcome: {other:?}"));
                None
            }
            ScreenEvent::Key(key) => {
                if move_selection(&mut self.selection, &key) {
                    return None;
                }
                match key {
                    TuiEvent::Submit => {
                        if let Some(e) = self.selected_enrollment() {
                            self.log.info(format_args!(
                                "Enrollment selected: id={} user={} score={:.1}",
                                e.id,
                                e.user.name,
                                e.score()
                            ));
                        }
                        None
                    }
                    TuiEvent::Back => {
                        self.log.info("Returning to home view");
                        Some(Command::Navigate(Intent::Home))
                    }
                    _ => None,
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let body = ui::draw_chrome(frame, area, "Enrollments", LIST_HINTS);

        match &self.status {
            LoadStatus::Loading => ui::draw_loading(frame, body, "enrollments"),
            LoadStatus::Failed(e) => ui::draw_error(frame, body, &e.to_string()),
            LoadStatus::Ready if self.book.is_empty() => {
                ui::draw_empty(frame, body, "No students are enrolled in this course.")
            }
            LoadStatus::Ready => {
                use Constraint::{Length, Min};
                let [header_area, list_area] = Layout::vertical([Length(1), Min(0)]).areas(body);

                // Indented to line up with rows behind the highlight symbol
                let indent = " ".repeat(ui::HIGHLIGHT_SYMBOL.len());
                let header = Paragraph::new(format!("{indent}{}", header()))
                    .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));
                frame.render_widget(header, header_area);

                let failing_style = Style::default().fg(Color::Red);
                let separator_style = Style::default().fg(Color::DarkGray);
                let mut items: Vec<ListItem> = self
                    .book
                    .failing()
                    .iter()
                    .map(|e| ListItem::new(format_row(e)).style(failing_style))
                    .collect();
                items.push(ListItem::new(SEPARATOR).style(separator_style));
                items.extend(self.book.passing().iter().map(|e| ListItem::new(format_row(e))));

                let list = List::new(items)
                    .highlight_style(ui::highlight_style())
                    .highlight_symbol(ui::HIGHLIGHT_SYMBOL);
                let selected = self.selection.selected().map(|i| self.list_index(i));
                self.list_state.select(selected);
                frame.render_stateful_widget(list, list_area, &mut self.list_state);
            }
        }
    }

    fn name(&self) -> &'static str {
        "enrollment_list"
    }
}
