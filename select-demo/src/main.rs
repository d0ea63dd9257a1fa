mod error;
mod page;
mod render;
mod terminal;

use std::fs::File;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use custom_select::{enhance_all, route_event, tick_all, CustomSelect, SelectConfig};
use pagedom::native;
use pagedom::{Document, Event, Key, Modifiers};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::DemoError;
use crate::page::PageFile;
use crate::render::{form_values, render, Highlight, Line};
use crate::terminal::Terminal;

const IDLE_POLL: Duration = Duration::from_millis(250);

struct App {
    doc: Document,
    controls: Vec<CustomSelect>,
    config: SelectConfig,
    lines: Vec<Line>,
}

impl App {
    fn new(page: &PageFile) -> Result<Self, DemoError> {
        let mut doc = page.to_document();
        let controls = enhance_all(&mut doc, &page.config)?;
        doc.focus_next();
        Ok(Self {
            doc,
            controls,
            config: page.config.clone(),
            lines: Vec::new(),
        })
    }

    fn layout(&mut self) -> &[Line] {
        let mut lines = render(&self.doc, &self.config);
        lines.push(Line {
            text: String::new(),
            target: None,
            highlight: Highlight::Normal,
        });
        lines.extend(form_values(&self.doc));
        lines.push(Line {
            text: "Tab: focus  Space: open  Arrows: move  Type: search  Ctrl+Q: quit".to_string(),
            target: None,
            highlight: Highlight::Muted,
        });
        self.lines = lines;
        &self.lines
    }

    /// How long the loop may sleep before the next timer is due.
    fn poll_timeout(&self, now: Instant) -> Duration {
        self.doc
            .timers()
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(IDLE_POLL)
    }

    fn dispatch(&mut self, events: Vec<Event>, now: Instant) {
        for event in events {
            log::trace!("[demo] dispatch {:?}", event);
            if !route_event(&mut self.controls, &mut self.doc, &event, now).is_handled() {
                self.native_fallback(&event);
            }
        }
    }

    /// Arrow keys on a plain native select step through its options.
    fn native_fallback(&mut self, event: &Event) {
        let Event::Key {
            target: Some(target),
            key,
            ..
        } = event
        else {
            return;
        };
        let step: isize = match key {
            Key::Up => -1,
            Key::Down => 1,
            _ => return,
        };
        let Ok(options) = native::select_options(&self.doc, target) else {
            return;
        };
        let Ok(Some(current)) = native::selected_index(&self.doc, target) else {
            return;
        };
        let Some(next) = current.checked_add_signed(step).filter(|&i| i < options.len()) else {
            return;
        };
        if let Err(e) = native::set_option_selected(&mut self.doc, &options[next], true) {
            log::warn!("[demo] native select {}: {}", target, e);
        }
    }

    /// Returns false when the user asked to quit.
    fn handle(&mut self, raw: CrosstermEvent, now: Instant) -> bool {
        match raw {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    return true;
                }
                let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl && matches!(key_event.code, KeyCode::Char('q') | KeyCode::Char('c')) {
                    return false;
                }

                let events = match key_event.code {
                    KeyCode::Tab => self.doc.focus_next(),
                    KeyCode::BackTab => self.doc.focus_prev(),
                    code => vec![Event::Key {
                        target: self.doc.focused().map(str::to_string),
                        key: Key::from(code),
                        modifiers: Modifiers::from(key_event.modifiers),
                    }],
                };
                self.dispatch(events, now);
            }
            CrosstermEvent::Mouse(mouse) => {
                if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
                    return true;
                }
                let target = self
                    .lines
                    .get(usize::from(mouse.row))
                    .and_then(|line| line.target.clone());
                self.click(target, now);
            }
            _ => {}
        }
        true
    }

    /// Focus follows the click, then the click itself is delivered.
    fn click(&mut self, target: Option<String>, now: Instant) {
        let focus_events = match target.as_deref().and_then(|t| self.doc.focusable_ancestor(t)) {
            Some(focusable) => self.doc.focus(&focusable).unwrap_or_default(),
            None => self.doc.clear_focus().into_iter().collect(),
        };
        self.dispatch(focus_events, now);
        self.dispatch(vec![Event::Click { target }], now);
    }
}

fn main() -> Result<(), DemoError> {
    let log_file = File::create("select-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let page = match std::env::args().nth(1) {
        Some(path) => PageFile::load(path)?,
        None => PageFile::builtin()?,
    };
    let mut app = App::new(&page)?;
    let mut term = Terminal::new()?;

    loop {
        term.draw(app.layout())?;

        let events = term.poll(Some(app.poll_timeout(Instant::now())))?;
        let now = Instant::now();
        for raw in events {
            if !app.handle(raw, now) {
                log::info!("[demo] quit");
                return Ok(());
            }
        }
        tick_all(&mut app.controls, &mut app.doc, now);
    }
}
