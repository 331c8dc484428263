use super::file_list::{self, DeletionFailure, FileList};
use super::header::{self, Header};
use super::prompt::{self, Answer, Prompt};
use crate::component::Component;
use crate::rendering::{Fabric, Size};
use crate::stateful::Stateful;
use crate::system_effect::SystemEffect;

use std::path::PathBuf;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use typed_builder::TypedBuilder;

/// The question asked before leaving.
const EXIT_PROMPT: &str = " Are you sure you want to exit? (y/n)";

#[derive(TypedBuilder)]
pub struct Props {
    files: Vec<PathBuf>,
    /// The size of the whole terminal.
    size: Size,
}

/// The root component: a title row above the list of files, stepping through the list and
/// deleting files one at a time.
pub struct Sweeper {
    state: State,
}

impl Component<Props, CrosstermEvent, SystemEffect> for Sweeper {
    fn new(props: Props) -> Self {
        let state = State::from(props);
        Self { state }
    }

    fn handle(&mut self, event: CrosstermEvent) -> Option<SystemEffect> {
        match self.map(event) {
            Some(action) => self.state.perform(action),
            None => None,
        }
    }

    fn render(&self, size: Size) -> Fabric {
        let columns = size.columns;
        let top_size = Size::new(1, columns);
        match (self.state.mode, size.rows) {
            (_, 0) => Fabric::new(size),
            (Mode::Terminated { .. }, rows) => {
                let mut fabric = self.state.header.render(top_size);
                fabric.pad_bottom(rows);
                fabric
            }
            (mode, rows) => {
                let fabric: Fabric = match mode {
                    Mode::ConfirmingExit => self.state.prompt.render(top_size),
                    _ => self.state.header.render(top_size),
                };
                if rows == 1 {
                    return fabric;
                }
                let list_fabric = self.state.file_list.render(Size::new(rows - 1, columns));
                fabric.quilt_bottom(list_fabric)
            }
        }
    }
}

impl Sweeper {
    /// Return the current mode.
    #[cfg(any(test, feature = "logging"))]
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Return the files that are still listed.
    #[cfg(test)]
    pub fn files(&self) -> &[PathBuf] {
        self.state.file_list.files()
    }

    /// Return the index of the file under the cursor.
    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.state.file_list.cursor()
    }

    /// Return the files that were stopped being listed but could not be removed.
    pub fn deletion_failures(&self) -> &[DeletionFailure] {
        &self.state.deletion_failures
    }

    fn map(&mut self, event: CrosstermEvent) -> Option<Action> {
        match (self.state.mode, event) {
            (Mode::Terminated { .. }, _) => None,
            (_, CrosstermEvent::Resize(columns, rows)) => Some(Action::Resize {
                size: Size::from((columns, rows)),
            }),
            (Mode::ConfirmingExit, event) => match self.state.prompt.handle(event) {
                Some(Answer::Yes) => Some(Action::ConfirmExit),
                Some(Answer::No) => Some(Action::CancelExit),
                None => None,
            },
            (Mode::Browsing, CrosstermEvent::Key(key_event)) => match key_event {
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Char('q'),
                    ..
                } => Some(Action::Quit),
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } => Some(Action::Delete),
                KeyEvent {
                    code: KeyCode::Char(' '),
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Char('k'),
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Down,
                    ..
                } => Some(Action::Next),
                KeyEvent {
                    code: KeyCode::Char('j'),
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Up, ..
                } => Some(Action::Previous),
                _ => None,
            },
            (Mode::Browsing, _) => None,
        }
    }
}

/// The mode the sweeper is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Stepping through the list.
    Browsing,
    /// Asking whether to leave.
    ConfirmingExit,
    /// Done. No more events are handled.
    Terminated { reason: Termination },
}

/// Why the sweeper terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The exit was confirmed.
    Quit,
    /// The cursor was moved past the last file.
    EndOfList,
}

struct State {
    mode: Mode,
    header: Header,
    prompt: Prompt,
    file_list: FileList,
    deletion_failures: Vec<DeletionFailure>,
}

impl From<Props> for State {
    fn from(props: Props) -> Self {
        let header = Header::new(header::Props::new(props.files.len()));
        let prompt = Prompt::new(prompt::Props::builder().text(EXIT_PROMPT).build());
        let file_list = FileList::new(
            file_list::Props::builder()
                .files(props.files)
                .size(Size::new(props.size.rows.saturating_sub(1), props.size.columns))
                .build(),
        );

        State {
            mode: Mode::Browsing,
            header,
            prompt,
            file_list,
            deletion_failures: Vec::new(),
        }
    }
}

impl State {
    fn terminate(&mut self, reason: Termination) -> Option<SystemEffect> {
        #[cfg(feature = "logging")]
        log::info!("Terminating: {:?}.", reason);

        self.mode = Mode::Terminated { reason };
        Some(SystemEffect::Exit)
    }

    /// Show the position of the cursor in the header.
    fn update_position(&mut self) {
        let event = header::Event::SetPosition {
            cursor: self.file_list.cursor(),
            count: self.file_list.files().len(),
        };
        self.header.handle(event);
    }

    fn quit(&mut self) -> Option<SystemEffect> {
        self.mode = Mode::ConfirmingExit;
        None
    }

    fn confirm_exit(&mut self) -> Option<SystemEffect> {
        self.terminate(Termination::Quit)
    }

    fn cancel_exit(&mut self) -> Option<SystemEffect> {
        self.mode = Mode::Browsing;
        None
    }

    fn delete(&mut self) -> Option<SystemEffect> {
        let message: Option<String> = match self.file_list.handle(file_list::Event::DeleteSelected) {
            #[allow(unused_variables)]
            Some(file_list::Effect::Deleted { file }) => {
                #[cfg(feature = "logging")]
                log::info!("Deleted \"{}\".", file.display());
                None
            }
            Some(file_list::Effect::DeleteFailed(failure)) => {
                #[cfg(feature = "logging")]
                log::error!("{}", failure);

                let message = failure.to_string();
                self.deletion_failures.push(failure);
                Some(message)
            }
            Some(file_list::Effect::EndReached) | None => {
                return None;
            }
        };

        self.header.handle(header::Event::SetMessage { message });
        self.update_position();
        None
    }

    fn next(&mut self) -> Option<SystemEffect> {
        match self.file_list.handle(file_list::Event::Next) {
            Some(file_list::Effect::EndReached) => self.terminate(Termination::EndOfList),
            _ => {
                self.update_position();
                None
            }
        }
    }

    fn previous(&mut self) -> Option<SystemEffect> {
        self.file_list.handle(file_list::Event::Previous);
        self.update_position();
        None
    }

    fn resize(&mut self, size: Size) -> Option<SystemEffect> {
        let list_size = Size::new(size.rows.saturating_sub(1), size.columns);
        self.file_list
            .handle(file_list::Event::Resize { size: list_size });
        None
    }
}

impl Stateful<Action, SystemEffect> for State {
    fn perform(&mut self, action: Action) -> Option<SystemEffect> {
        match action {
            Action::Quit => self.quit(),
            Action::ConfirmExit => self.confirm_exit(),
            Action::CancelExit => self.cancel_exit(),
            Action::Delete => self.delete(),
            Action::Next => self.next(),
            Action::Previous => self.previous(),
            Action::Resize { size } => self.resize(size),
        }
    }
}

enum Action {
    Quit,
    ConfirmExit,
    CancelExit,
    Delete,
    Next,
    Previous,
    Resize { size: Size },
}
