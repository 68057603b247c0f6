//! Input side of a round.

use std::future::Future;

use crate::error::Result;
use crate::game::types::Command;

/// Source of player intents. Each call resolves to exactly one command.
pub trait CommandSource {
    fn next_command(&mut self) -> impl Future<Output = Result<Command>>;
}
