pub mod state;
pub mod types;

pub use state::GameState;
pub use types::{Turn, Value};
