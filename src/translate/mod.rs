pub mod interface;
pub mod prompt;
pub mod store;
pub mod translator;

pub use interface::*;
pub use store::*;
pub use translator::*;
