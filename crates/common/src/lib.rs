pub mod env;
pub mod signal;
pub mod utils;
