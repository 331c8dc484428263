use super::fabric::Fabric;

use std::io::{self, Result as IOResult, Stdout, Write};

use crossterm::cursor::MoveTo as MoveCursorTo;
use crossterm::style::{Color, Print, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear as ClearTerminal, ClearType as TerminalClearType};
use crossterm::QueueableCommand;

/// Draws fabrics to the terminal.
pub struct Renderer {
    stdout: Stdout,
}

impl Renderer {
    pub fn new() -> Self {
        let stdout = io::stdout();
        Renderer { stdout }
    }

    /// Draw the fabric starting at the top left corner of the terminal.
    ///
    /// Anything on the screen to the right of or below the fabric is cleared.
    pub fn render(&mut self, fabric: Fabric) -> IOResult<()> {
        let attributes = itertools::izip!(
            0..,
            fabric.characters(),
            fabric.colors(),
            fabric.backgrounds(),
        );

        for (row_number, row, row_colors, row_backgrounds) in attributes {
            self.lazy_move_cursor(row_number, 0)?;

            let mut row_colors_iter = row_colors.iter();
            let mut row_backgrounds_iter = row_backgrounds.iter();
            for character in row {
                match row_colors_iter.next() {
                    Some(Some(color)) => self.lazy_start_text_color(*color)?,
                    _ => self.lazy_reset_text_color()?,
                }
                match row_backgrounds_iter.next() {
                    Some(Some(color)) => self.lazy_start_background_color(*color)?,
                    _ => self.lazy_reset_background_color()?,
                }
                self.lazy_print_character(character)?;
            }
            self.lazy_reset_text_color()?;
            self.lazy_reset_background_color()?;
            self.lazy_clear(TerminalClearType::UntilNewLine)?;
        }

        self.lazy_move_cursor(fabric.size().rows, 0)?;
        self.lazy_clear(TerminalClearType::FromCursorDown)?;

        self.update_terminal()
    }

    fn lazy_move_cursor(&mut self, row: usize, column: usize) -> IOResult<()> {
        let row: u16 = row.try_into().unwrap_or(u16::MAX);
        let column: u16 = column.try_into().unwrap_or(u16::MAX);
        self.stdout.queue(MoveCursorTo(column, row))?;
        Ok(())
    }

    fn lazy_clear(&mut self, clear_type: TerminalClearType) -> IOResult<()> {
        self.stdout.queue(ClearTerminal(clear_type))?;
        Ok(())
    }

    fn lazy_print_character(&mut self, character: &char) -> IOResult<()> {
        self.stdout.queue(Print(character))?;
        Ok(())
    }

    fn lazy_start_text_color(&mut self, color: Color) -> IOResult<()> {
        self.stdout.queue(SetForegroundColor(color))?;
        Ok(())
    }

    fn lazy_reset_text_color(&mut self) -> IOResult<()> {
        self.stdout.queue(SetForegroundColor(Color::Reset))?;
        Ok(())
    }

    fn lazy_start_background_color(&mut self, color: Color) -> IOResult<()> {
        self.stdout.queue(SetBackgroundColor(color))?;
        Ok(())
    }

    fn lazy_reset_background_color(&mut self) -> IOResult<()> {
        self.stdout.queue(SetBackgroundColor(Color::Reset))?;
        Ok(())
    }

    fn update_terminal(&mut self) -> IOResult<()> {
        self.stdout.flush()
    }
}
