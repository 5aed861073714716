//! Subcommands of the roshambo binary

pub mod inspect;
pub mod play;
pub mod simulate;
