pub use moves::*;
pub use tenpai::*;

mod moves;
mod tenpai;
