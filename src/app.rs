use crate::component::Component;
use crate::rendering::{Fabric, Renderer, Size};
use crate::system_effect::SystemEffect;

use std::io::{self, Result as IOResult, Stdout, Write};
use std::panic;

use crossterm::cursor::{Hide as HideCursor, Show as ShowCursor};
use crossterm::event::{read, Event as CrosstermEvent};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::terminal::{Clear as ClearTerminal, ClearType as TerminalClearType};
use crossterm::QueueableCommand;

/// Owns the terminal session and runs the event loop of a root component.
pub struct App<W: Write = Stdout> {
    /// Where the terminal commands are written.
    writer: W,
    renderer: Renderer,
}

impl App {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> App<W> {
    fn with_writer(writer: W) -> Self {
        let renderer = Renderer::new();
        App { writer, renderer }
    }

    /// Take over the terminal and run until the root component emits [`SystemEffect::Exit`].
    ///
    /// The terminal is restored before returning, even if there was an error.
    pub fn run<Props>(
        &mut self,
        root: &mut impl Component<Props, CrosstermEvent, SystemEffect>,
    ) -> IOResult<()> {
        let result = self.set_up().and_then(|()| {
            #[cfg(feature = "logging")]
            log::info!("Running.");

            self.run_loop(root)
        });

        let teardown_result = self.teardown();
        result.and(teardown_result)
    }

    fn run_loop<Props>(
        &mut self,
        root: &mut impl Component<Props, CrosstermEvent, SystemEffect>,
    ) -> IOResult<()> {
        loop {
            let size: Size = Size::from(terminal::size()?);
            let fabric: Fabric = root.render(size);

            self.renderer.render(fabric)?;

            let event: CrosstermEvent = read()?;

            let effect: Option<SystemEffect> = root.handle(event);
            match effect {
                Some(SystemEffect::Exit) => {
                    #[cfg(feature = "logging")]
                    log::info!("Exiting.");

                    // Draw the final frame before leaving the alternate screen.
                    let size: Size = Size::from(terminal::size()?);
                    return self.renderer.render(root.render(size));
                }
                None => {}
            }
        }
    }

    fn set_up(&mut self) -> IOResult<()> {
        self.lazy_enable_alternate_terminal()?;
        self.enable_raw_terminal()?;
        self.lazy_hide_cursor()?;
        self.lazy_clear_screen()?;
        self.update_terminal()?;

        self.change_panic_hook();
        Ok(())
    }

    /// Undo whatever `set_up` managed to do. Every step is attempted and the first error is
    /// returned.
    fn teardown(&mut self) -> IOResult<()> {
        let alternate_result = self.lazy_disable_alternate_terminal();
        let raw_result = self.disable_raw_terminal();
        let cursor_result = self.lazy_show_cursor();
        let update_result = self.update_terminal();
        alternate_result
            .and(raw_result)
            .and(cursor_result)
            .and(update_result)
    }

    fn lazy_enable_alternate_terminal(&mut self) -> IOResult<()> {
        self.writer.queue(EnterAlternateScreen)?;
        Ok(())
    }

    fn lazy_disable_alternate_terminal(&mut self) -> IOResult<()> {
        self.writer.queue(LeaveAlternateScreen)?;
        Ok(())
    }

    fn enable_raw_terminal(&mut self) -> IOResult<()> {
        terminal::enable_raw_mode()
    }

    fn disable_raw_terminal(&mut self) -> IOResult<()> {
        terminal::disable_raw_mode()
    }

    fn lazy_clear_screen(&mut self) -> IOResult<()> {
        self.writer.queue(ClearTerminal(TerminalClearType::All))?;
        Ok(())
    }

    fn lazy_hide_cursor(&mut self) -> IOResult<()> {
        self.writer.queue(HideCursor)?;
        Ok(())
    }

    fn lazy_show_cursor(&mut self) -> IOResult<()> {
        self.writer.queue(ShowCursor)?;
        Ok(())
    }

    fn update_terminal(&mut self) -> IOResult<()> {
        self.writer.flush()
    }

    /// Restore the terminal before the panic message is printed.
    fn change_panic_hook(&mut self) {
        let hook_before = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let mut stdout = io::stdout();
            let _ = stdout.queue(LeaveAlternateScreen);
            let _ = stdout.queue(ShowCursor);
            let _ = stdout.flush();
            let _ = terminal::disable_raw_mode();
            hook_before(info);
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::io::{Error as IOError, ErrorKind as IOErrorKind};

    /// A terminal that refuses every write and counts the attempts.
    #[derive(Default)]
    struct BrokenTerminal {
        writes: usize,
    }

    impl Write for BrokenTerminal {
        fn write(&mut self, _buffer: &[u8]) -> IOResult<usize> {
            self.writes += 1;
            Err(IOError::new(IOErrorKind::BrokenPipe, "the terminal is gone"))
        }

        fn flush(&mut self) -> IOResult<()> {
            Err(IOError::new(IOErrorKind::BrokenPipe, "the terminal is gone"))
        }
    }

    /// A root component that counts how often it is drawn.
    struct Blank {
        renders: Cell<usize>,
    }

    impl Component<(), CrosstermEvent, SystemEffect> for Blank {
        fn new(_props: ()) -> Self {
            Self {
                renders: Cell::new(0),
            }
        }

        fn handle(&mut self, _event: CrosstermEvent) -> Option<SystemEffect> {
            Some(SystemEffect::Exit)
        }

        fn render(&self, size: Size) -> Fabric {
            self.renders.set(self.renders.get() + 1);
            Fabric::new(size)
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_set_up_still_restores_the_terminal() {
        let mut app = App::with_writer(BrokenTerminal::default());
        let mut root = Blank::new(());

        let result = app.run(&mut root);

        assert_eq!(result.unwrap_err().kind(), IOErrorKind::BrokenPipe);
        assert_eq!(root.renders.get(), 0);
        // One write for entering the alternate screen, then one each for leaving it and showing
        // the cursor.
        assert_eq!(app.writer.writes, 3);
    }
}
