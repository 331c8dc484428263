mod props {
    use typed_builder::TypedBuilder;

    #[derive(TypedBuilder)]
    pub struct Props {
        /// The question to ask.
        #[builder(setter(into))]
        pub text: String,
        /// The key that answers yes.
        #[builder(default = 'y')]
        pub yes: char,
        /// The key that answers no.
        #[builder(default = 'n')]
        pub no: char,
    }
}
pub use props::Props;

mod prompt {
    use super::{Answer, Props};
    use crate::color::Color;
    use crate::component::Component;
    use crate::rendering::{Fabric, Size, Yarn};

    use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};

    /// A yes or no question drawn in a single row.
    pub struct Prompt {
        text: String,
        yes: char,
        no: char,
    }

    impl Component<Props, CrosstermEvent, Answer> for Prompt {
        fn new(props: Props) -> Self {
            Self {
                text: props.text,
                yes: props.yes,
                no: props.no,
            }
        }

        /// Return the answer for the event, if it answers the question.
        fn handle(&mut self, event: CrosstermEvent) -> Option<Answer> {
            match event {
                CrosstermEvent::Key(KeyEvent {
                    code: KeyCode::Char(character),
                    ..
                }) if character == self.yes => Some(Answer::Yes),
                CrosstermEvent::Key(KeyEvent {
                    code: KeyCode::Char(character),
                    ..
                }) if character == self.no => Some(Answer::No),
                _ => None,
            }
        }

        fn render(&self, size: Size) -> Fabric {
            let mut yarn = Yarn::from(self.text.as_str());
            yarn.resize(size.columns);
            yarn.color(Color::InvertedText.into());
            yarn.background(Color::Highlight.into());

            let mut fabric = Fabric::from(yarn);
            fabric.pad_bottom(size.rows);
            fabric
        }
    }
}
pub use prompt::Prompt;

mod answer {
    /// The answer to a prompt.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Answer {
        Yes,
        No,
    }
}
pub use answer::Answer;
