use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal,
};

use crate::render::{Highlight, Line};

pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Redraw the whole screen, one `Line` per row from the top.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        let (_, height) = terminal::size()?;
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;

        for (y, line) in lines.iter().take(usize::from(height)).enumerate() {
            let row = u16::try_from(y).unwrap_or(u16::MAX);
            queue!(self.stdout, cursor::MoveTo(0, row))?;
            match line.highlight {
                Highlight::Normal => {}
                Highlight::Heading => queue!(self.stdout, SetAttribute(Attribute::Bold))?,
                Highlight::Focused => queue!(self.stdout, SetForegroundColor(Color::Cyan))?,
                Highlight::Selected => queue!(self.stdout, SetAttribute(Attribute::Reverse))?,
                Highlight::Muted => queue!(self.stdout, SetAttribute(Attribute::Dim))?,
            }
            queue!(
                self.stdout,
                Print(&line.text),
                SetAttribute(Attribute::Reset)
            )?;
        }

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
