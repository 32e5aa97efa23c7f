mod command;
mod session;

pub use command::MenuCommand;
pub use session::Session;
