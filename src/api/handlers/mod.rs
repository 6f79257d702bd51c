mod notes;
mod system;


pub use notes::*;
pub use system::*;
