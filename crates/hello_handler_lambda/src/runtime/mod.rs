pub use hello_handler_core::{contract, error, handler};
