pub mod input;
pub mod merge;
pub mod render;
pub mod rules;

pub use input::*;
pub use merge::*;
pub use render::*;
pub use rules::*;
