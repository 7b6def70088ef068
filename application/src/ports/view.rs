//! View port
//!
//! Everything the dispatch use cases need to ask or tell the user.
//! Implementations live in the presentation layer.

use chatline_domain::{ConversationHistory, ConversationId, Model};

pub trait ChatView: Send + Sync {
    /// Ask for the value of placeholder `name`. An empty answer cancels.
    fn prompt_placeholder_value(&self, name: &str) -> String;

    /// Called before query `current` (1-based) of `total` is sent.
    fn show_progress(&self, current: usize, total: usize);

    /// Show one answered query.
    fn show_exchange(&self, model: &Model, query: &str, response: &str);

    /// Show the raw provider payload of a debug request.
    fn show_debug(&self, payload: &serde_json::Value);

    fn show_error(&self, message: &str);

    fn show_notice(&self, message: &str);

    /// Ask whether a batch of `count` queries should really run.
    fn confirm_large_batch(&self, count: usize) -> bool;

    fn show_help(&self);

    fn show_model(&self, model: &Model);

    /// Let the user pick one of `models`; never returns until a choice is made.
    fn choose_model(&self, models: &[Model]) -> Model;

    /// Full transcript of a loaded conversation.
    fn show_conversation(&self, id: ConversationId, history: &ConversationHistory);

    /// Compact, one line per message, listing of a loaded conversation.
    fn show_messages(&self, id: ConversationId, history: &ConversationHistory);

    fn show_system_prompt(&self, prompt: Option<&str>);

    /// Result of checking every stored conversation.
    fn show_data_report(&self, conversations: usize);
}
