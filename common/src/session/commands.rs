use crate::games::snake::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Start,
    Turn(Direction),
    Shutdown,
}
