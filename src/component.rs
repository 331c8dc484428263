use crate::rendering::{Fabric, Size};

/// A piece of the interface that reacts to events and knows how to draw itself.
pub trait Component<Props, Event, Effect> {
    fn new(props: Props) -> Self
    where
        Self: Sized;

    fn handle(&mut self, event: Event) -> Option<Effect>;

    fn render(&self, size: Size) -> Fabric;
}
