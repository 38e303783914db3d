use crate::core::identifier::IdentifierRegistry;
use crate::terminal::event::{TerminalEvent, map_event};
use crate::terminal::inline_field::InlineField;
use crossterm::event::read;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};

pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    pub fn read_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            if let Some(event) = map_event(read()?) {
                return Ok(event);
            }
        }
    }

    /// Redraws `field` over the current line and parks the cursor inside it.
    pub fn draw_field(
        &mut self,
        registry: &IdentifierRegistry,
        field: &InlineField,
    ) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveToColumn(0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            Print(field.prefix())
        )?;
        for segment in field.segments(registry) {
            if segment.pending {
                queue!(
                    self.stdout,
                    SetForegroundColor(Color::DarkGrey),
                    Print(segment.text),
                    ResetColor
                )?;
            } else {
                queue!(self.stdout, Print(segment.text))?;
            }
        }
        let col = u16::try_from(field.cursor_col()).unwrap_or(u16::MAX);
        queue!(self.stdout, cursor::MoveToColumn(col))?;
        self.stdout.flush()
    }

    pub fn finish_line(&mut self) -> io::Result<()> {
        execute!(self.stdout, Print("\r\n"))
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}
