use crate::state::{AppState, Context};
use crate::{append, digest, greeting};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Safada,
    Digest,
    Append,
}

/// Command prefixes in priority order; the first match wins. A prefix must
/// come after every longer prefix it starts, otherwise it shadows them
/// (`/r` would swallow `/resumo`).
pub const ROUTES: &[(&str, Command)] = &[
    ("/hello", Command::Hello),
    ("/safada", Command::Safada),
    ("/resumo", Command::Digest),
    ("/r", Command::Append),
];

/// Case-sensitive prefix match against [`ROUTES`].
pub fn route(text: &str) -> Option<Command> {
    ROUTES
        .iter()
        .find(|(prefix, _)| text.starts_with(*prefix))
        .map(|(_, command)| *command)
}

impl Command {
    pub async fn run(self, state: &AppState, ctx: &Context) {
        match self {
            Self::Hello => greeting::hello(state, ctx).await,
            Self::Safada => greeting::safada(state, ctx).await,
            Self::Digest => digest::handle_digest(state, ctx).await,
            Self::Append => append::handle_append(state, ctx).await,
        }
    }
}
