pub mod defaults;
pub mod golfer;
pub mod odds;
pub mod score;
pub mod state;
pub mod team;

pub use golfer::*;
pub use odds::*;
pub use score::*;
pub use state::*;
pub use team::*;
