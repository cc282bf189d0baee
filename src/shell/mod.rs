pub mod prompt;
pub mod session;

pub use prompt::{parse_number, parse_yes_no, Prompter};
pub use session::run_session;
