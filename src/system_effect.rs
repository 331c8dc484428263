/*!
System effects are side-effects that components can emit which the application framework will
handle.
*/

/// A side-effect that components can emit which the application framework will handle.
#[derive(Debug, PartialEq, Eq)]
pub enum SystemEffect {
    /// Leave the interactive mode.
    Exit,
}
