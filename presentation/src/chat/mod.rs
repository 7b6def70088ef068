//! Interactive chat module
//!
//! Provides the readline-based chat loop and the console implementation of
//! the [`ChatView`](chatline_application::ChatView) port.

mod repl;
mod view;

pub use repl::ChatRepl;
pub use view::ConsoleView;
