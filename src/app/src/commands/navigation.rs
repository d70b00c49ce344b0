use crux_core::{capability::Operation, Command, Request};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Page-level operations performed by the shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavigationOperation {
    /// Reload the page, which reopens the channel and fetches fresh configuration.
    Reload,
}

impl Operation for NavigationOperation {
    type Output = ();
}

pub struct Navigation<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Navigation<Effect, Event>
where
    Effect: Send + From<Request<NavigationOperation>> + 'static,
    Event: Send + 'static,
{
    pub fn reload() -> Command<Effect, Event> {
        Command::notify_shell(NavigationOperation::Reload).into()
    }
}
