//! Extract queries use case.
//!
//! Turns the text of a query action into the concrete queries to send:
//! finds the placeholders, asks the user for each value, and expands
//! `/for` variant lists.

use crate::ports::view::ChatView;
use chatline_domain::{
    ConcreteQuery, DomainError, PlaceholderBindings, QueryTemplate, expand,
    parse_placeholder_value,
};
use std::sync::Arc;
use tracing::{debug, info};

pub struct ExtractQueriesUseCase {
    view: Arc<dyn ChatView>,
}

impl ExtractQueriesUseCase {
    pub fn new(view: Arc<dyn ChatView>) -> Self {
        Self { view }
    }

    /// Resolve every placeholder of `text` and expand it.
    ///
    /// Returns `Ok(None)` when the user cancels by leaving a placeholder
    /// empty. Placeholders are asked for once per distinct name, in the
    /// order they first appear.
    pub fn execute(&self, text: &str) -> Result<Option<Vec<ConcreteQuery>>, DomainError> {
        let template = QueryTemplate::new(text);

        let mut bindings = PlaceholderBindings::new();
        for name in template.placeholders() {
            let raw = self.view.prompt_placeholder_value(&name);
            let Some(value) = parse_placeholder_value(&raw) else {
                info!("Placeholder ${} left empty, query cancelled", name);
                return Ok(None);
            };
            debug!("Placeholder ${} -> {:?}", name, value);
            bindings.bind(name, value);
        }

        let queries = expand(&template, &bindings)?;
        debug!("Template expanded into {} queries", queries.len());
        Ok(Some(queries))
    }
}
