pub mod check;
pub mod mentions;
pub mod render;

pub use check::{check, CheckArgs};
pub use mentions::{mentions, MentionsArgs};
pub use render::{render, RenderArgs};
