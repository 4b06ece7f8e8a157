use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem};

use super::list::{FetchedList, LoadStatus};
use super::{Screen, ScreenEvent};
use crate::api::{Module, ModuleNode};
use crate::core::action::{Command, Intent, Outcome, Request};
use crate::core::logging::Logger;
use crate::tui::components::LIST_HINTS;
use crate::tui::event::TuiEvent;
use crate::tui::ui;

/// Items of one module. Children are drawn under their parent but only
/// parents are selectable.
pub struct ModuleDetailScreen {
    module: Module,
    lessons: FetchedList<ModuleNode>,
    log: Logger,
}

impl ModuleDetailScreen {
    pub fn new(module: Module, log: &Logger) -> Self {
        let log = log.with("module_view");
        log.info(format_args!(
            "Creating module view: id={} name={}",
            module.id, module.name
        ));
        Self {
            module,
            lessons: FetchedList::loading(),
            log,
        }
    }

    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn lessons(&self) -> &FetchedList<ModuleNode> {
        &self.lessons
    }

    fn node_item(node: &ModuleNode) -> ListItem<'static> {
        let kind_style = Style::default().fg(Color::DarkGray);
        let mut lines = vec![Line::from(vec![
            Span::raw(node.item.title.clone()),
            Span::styled(format!(" ({})", node.item.kind), kind_style),
        ])];
        for child in &node.children {
            lines.push(Line::from(vec![
                Span::styled("   └ ", kind_style),
                Span::raw(child.title.clone()),
                Span::styled(format!(" ({})", child.kind), kind_style),
            ]));
        }
        ListItem::new(Text::from(lines))
    }
}

impl Screen for ModuleDetailScreen {
    fn init(&mut self) -> Option<Command> {
        self.log.info(format_args!("Fetching lessons: module_id={}", self.module.id));
        Some(Command::Request(Request::ModuleItems(self.module.id)))
    }

    fn handle_event(&mut self, event: ScreenEvent) -> Option<Command> {
        match event {
            ScreenEvent::Completed(Outcome::ModuleItems { module_id, result })
                if module_id == self.module.id =>
            {
                match &result {
                    Ok(lessons) => self
                        .log
                        .info(format_args!("Received lessons: count={}", lessons.len())),
                    Err(e) => self.log.error(format_args!("Failed to fetch lessons: {e}")),
                }
                self.lessons.replace(result);
                None
            }
            ScreenEvent::Completed(other) => {
                self.log.warn(format_args!("Ignoring unexpected outcome: {other:?}"));
                None
            }
            ScreenEvent::Key(key) => {
                if self.lessons.navigate(&key) {
                    return None;
                }
                match key {
                    TuiEvent::Submit => {
                        let lesson = self.lessons.selected_item()?.clone();
                        self.log.info(format_args!(
                            "Selected lesson: id={} title={} type={}",
                            lesson.item.id, lesson.item.title, lesson.item.kind
                        ));
                        Some(Command::Navigate(Intent::LessonDetail {
                            lesson,
                            module: self.module.clone(),
                        }))
                    }
                    TuiEvent::Back => {
                        self.log.info("Returning to modules view");
                        Some(Command::Navigate(Intent::ModuleList))
                    }
                    _ => None,
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!("Module: {}", self.module.name);
        let body = ui::draw_chrome(frame, area, &title, LIST_HINTS);

        match self.lessons.status() {
            LoadStatus::Loading => {
                ui::draw_loading(frame, body, &format!("lessons for {}", self.module.name))
            }
            LoadStatus::Failed(e) => ui::draw_error(frame, body, &e.to_string()),
            LoadStatus::Ready if self.lessons.items().is_empty() => {
                ui::draw_empty(frame, body, "This module has no items.")
            }
            LoadStatus::Ready => {
                let items: Vec<ListItem> =
                    self.lessons.items().iter().map(Self::node_item).collect();
                let list = List::new(items)
                    .highlight_style(ui::highlight_style())
                    .highlight_symbol(ui::HIGHLIGHT_SYMBOL);
                frame.render_stateful_widget(list, body, self.lessons.list_state());
            }
        }
    }

    fn name(&self) -> &'static str {
        "module_detail"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{lesson, module, node};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn loaded() -> ModuleDetailScreen {
        let mut screen = ModuleDetailScreen::new(module(3, "Week 3"), &Logger::discard());
        screen.handle_event(ScreenEvent::Completed(Outcome::ModuleItems {
            module_id: 3,
            result: Ok(vec![
                node(lesson(30, "Block 1", "SubHeader"), vec![lesson(31, "Reading", "Page")]),
                node(lesson(32, "Homework 3", "Assignment"), vec![]),
            ]),
        }));
        screen
    }

    #[test]
    fn test_init_requests_items_for_module() {
        let mut screen = ModuleDetailScreen::new(module(3, "Week 3"), &Logger::discard());
        assert_eq!(screen.init(), Some(Command::Request(Request::ModuleItems(3))));
    }

    #[test]
    fn test_enter_opens_lesson_with_module() {
        let mut screen = loaded();
        screen.handle_event(ScreenEvent::Key(TuiEvent::Down));
        let cmd = screen.handle_event(ScreenEvent::Key(TuiEvent::Submit));
        assert_eq!(
            cmd,
            Some(Command::Navigate(Intent::LessonDetail {
                lesson: node(lesson(32, "Homework 3", "Assignment"), vec![]),
                module: module(3, "Week 3"),
            }))
        );
    }

    #[test]
    fn test_esc_returns_to_module_list() {
        let mut screen = loaded();
        assert_eq!(
            screen.handle_event(ScreenEvent::Key(TuiEvent::Back)),
            Some(Command::Navigate(Intent::ModuleList))
        );
    }

    #[test]
    fn test_items_for_another_module_are_ignored() {
        let mut screen = ModuleDetailScreen::new(module(3, "Week 3"), &Logger::discard());
        screen.handle_event(ScreenEvent::Completed(Outcome::ModuleItems {
            module_id: 4,
            result: Ok(vec![node(lesson(40, "Wrong", "Page"), vec![])]),
        }));
        assert_eq!(screen.lessons().status(), &LoadStatus::Loading);
        assert!(screen.lessons().items().is_empty());
    }

    #[test]
    fn test_render_shows_children_with_types() {
        let mut screen = loaded();
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
        let text = ui::buffer_text(&terminal);

        assert!(text.contains("Module: Week 3"));
        assert!(text.contains("> Block 1 (SubHeader)"));
        assert!(text.contains("└ Reading (Page)"));
        assert!(text.contains("Homework 3 (Assignment)"));
    }
}
