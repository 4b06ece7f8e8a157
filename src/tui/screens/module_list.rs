use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{List, ListItem};

use super::list::{FetchedList, LoadStatus};
use super::{Screen, ScreenEvent};
use crate::api::Module;
use crate::core::action::{Command, Intent, Outcome, Request};
use crate::core::logging::Logger;
use crate::tui::components::LIST_HINTS;
use crate::tui::event::TuiEvent;
use crate::tui::ui;

pub struct ModuleListScreen {
    modules: FetchedList<Module>,
    log: Logger,
}

impl ModuleListScreen {
    pub fn new(log: &Logger) -> Self {
        let log = log.with("modules_view");
        log.info("Creating modules view");
        Self {
            modules: FetchedList::loading(),
            log,
        }
    }

    pub fn modules(&self) -> &FetchedList<Module> {
        &self.modules
    }
}

impl Screen for ModuleListScreen {
    fn init(&mut self) -> Option<Command> {
        self.log.info("Fetching modules");
        Some(Command::Request(Request::Modules))
    }

    fn handle_event(&mut self, event: ScreenEvent) -> Option<Command> {
        match event {
            ScreenEvent::Completed(Outcome::Modules(result)) => {
                match &result {
                    Ok(modules) => self
                        .log
                        .info(format_args!("Received modules: count={}", modules.len())),
                    Err(e) => self.log.error(format_args!("Failed to fetch modules: {e}")),
                }
                self.modules.replace(result);
                None
            }
            ScreenEvent::Completed(other) => {
                self.log.warn(format_args!("Ignoring unexpected outcome: {other:?}"));
                None
            }
            ScreenEvent::Key(key) => {
                if self.modules.navigate(&key) {
                    return None;
                }
                match key {
                    TuiEvent::Submit => {
                        let module = self.modules.selected_item()?.clone();
                        self.log.info(format_args!(
                            "Selected module: id={} name={}",
                            module.id, module.name
                        ));
                        Some(Command::Navigate(Intent::ModuleDetail(module)))
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
        let body = ui::draw_chrome(frame, area, "Course Modules", LIST_HINTS);

        match self.modules.status() {
            LoadStatus::Loading => ui::draw_loading(frame, body, "modules"),
            LoadStatus::Failed(e) => ui::draw_error(frame, body, &e.to_string()),
            LoadStatus::Ready if self.modules.items().is_empty() => {
                ui::draw_empty(frame, body, "This course has no modules.")
            }
            LoadStatus::Ready => {
                let items: Vec<ListItem> = self
                    .modules
                    .items()
                    .iter()
                    .map(|m| ListItem::new(m.name.clone()))
                    .collect();
                let list = List::new(items)
                    .highlight_style(ui::highlight_style())
                    .highlight_symbol(ui::HIGHLIGHT_SYMBOL);
                frame.render_stateful_widget(list, body, self.modules.list_state());
            }
        }
    }

    fn name(&self) -> &'static str {
        "module_list"
    }
}
