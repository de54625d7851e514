mod canvas;
mod sidebar;
mod toolbar;

pub use canvas::*;
pub use sidebar::*;
pub use toolbar::*;
