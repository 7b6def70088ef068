//! Help text shown by `/help`

use chatline_domain::{PLACEHOLDER_PREFIX, VARIANT_MARKER};

/// Prompt that holds the help on screen until the user is done reading
pub const HELP_PAUSE_PROMPT: &str = "Press Enter to continue...";

/// Help text, with the placeholder prefix and variant marker filled in.
pub fn help_text() -> String {
    format!(
        r#"Queries
  Use placeholders written as {p}<name>, e.g.
    Who was {p}person and what did they do in {p}field?
  You will be asked for the value of each placeholder, one by one.
  Start a value with `{v}` followed by comma-separated variants to send one
  query per variant. Answering `{v} Alexander Flemming,Albert Einstein` for
  {p}person sends two queries, one per name. Only the first placeholder with
  variants multiplies the queries; other variant lists use their first entry.
  Only the first query of a batch continues the current conversation; the
  others are saved as separate conversations.
  An empty value cancels the query.

Commands
  /q, /quit, /exit           Exit
  /h, /help, /?              Show this help
  /change                    Choose another model
  /m, /model                 Show the current model
  /d, /debug <query>         Answer the query and print the raw response
  /n, /new [query]           Start a new conversation
  /l, /load <id>             Load a conversation and print it
  /lm, /messages <id>        Load a conversation and list its messages
  /s, /system [prompt]       Set (or show) the system prompt
  /check [query]             Check that every stored conversation loads
  <empty line>               Keep the current conversation"#,
        p = PLACEHOLDER_PREFIX,
        v = VARIANT_MARKER,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_mentions_placeholder_syntax() {
        let help = help_text();
        assert!(help.contains("$0person"));
        assert!(help.contains("/for Alexander Flemming,Albert Einstein"));
        assert!(help.contains("/messages"));
    }

    #[test]
    fn test_help_pause_prompt_waits_for_enter() {
        assert!(HELP_PAUSE_PROMPT.starts_with("Press Enter"));
        assert!(!help_text().contains(HELP_PAUSE_PROMPT));
    }
}
