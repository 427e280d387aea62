pub mod terminal;
pub mod traits;
