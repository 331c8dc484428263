mod props {
    pub struct Props {
        pub count: usize,
    }

    impl Props {
        pub fn new(count: usize) -> Self {
            Self { count }
        }
    }
}
pub use props::Props;

mod header {
    use super::{Action, Effect, Event, Props, State};
    use crate::color::Color;
    use crate::component::Component;
    use crate::rendering::{Fabric, Size, Yarn};
    use crate::stateful::Stateful;

    /// The title row above the list showing the position of the cursor and the latest problem.
    pub struct Header {
        state: State,
    }

    impl Component<Props, Event, Effect> for Header {
        fn new(props: Props) -> Self {
            let state = State::from(props);
            Self { state }
        }

        fn handle(&mut self, event: Event) -> Option<Effect> {
            let action = self.map(event);
            self.state.perform(action)
        }

        fn render(&self, size: Size) -> Fabric {
            let mut yarn = Yarn::from(self.state.title());
            yarn.color(Color::InvertedText.into());

            if let Some(message) = &self.state.message {
                let mut message_yarn = Yarn::from(format!("  {}", message));
                message_yarn.color(Color::Error.into());
                yarn = yarn.concat(message_yarn);
            }

            yarn.resize(size.columns);
            yarn.background(Color::InvertedBackground.into());

            let mut fabric = Fabric::from(yarn);
            fabric.pad_bottom(size.rows);
            fabric
        }
    }

    impl Header {
        fn map(&self, event: Event) -> Action {
            match event {
                Event::SetPosition { cursor, count } => Action::SetPosition { cursor, count },
                Event::SetMessage { message } => Action::SetMessage { message },
            }
        }
    }
}
pub use header::Header;

mod event {
    pub enum Event {
        /// The cursor moved or the number of files changed.
        SetPosition { cursor: usize, count: usize },
        /// Show a message after the title, or clear it.
        SetMessage { message: Option<String> },
    }
}
pub use event::Event;

mod state {
    use super::{Action, Effect, Props};
    use crate::stateful::Stateful;

    pub struct State {
        cursor: usize,
        count: usize,
        pub message: Option<String>,
    }

    impl State {
        pub fn title(&self) -> String {
            if self.count == 0 {
                return String::from("Files (0/0)");
            }
            format!("Files ({}/{})", self.cursor + 1, self.count)
        }
    }

    impl From<Props> for State {
        fn from(props: Props) -> Self {
            Self {
                cursor: 0,
                count: props.count,
                message: None,
            }
        }
    }

    impl Stateful<Action, Effect> for State {
        fn perform(&mut self, action: Action) -> Option<Effect> {
            match action {
                Action::SetPosition { cursor, count } => {
                    self.cursor = cursor;
                    self.count = count;
                }
                Action::SetMessage { message } => {
                    self.message = message;
                }
            }
            None
        }
    }
}
use state::State;

mod action {
    pub enum Action {
        SetPosition { cursor: usize, count: usize },
        SetMessage { message: Option<String> },
    }
}
use action::Action;

mod effect {
    pub enum Effect {}
}
pub use effect::Effect;
