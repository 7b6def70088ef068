//! Placeholder scanning

/// Marker that starts a placeholder inside a query
pub const PLACEHOLDER_PREFIX: &str = "$0";

/// A piece of a scanned template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split a template into literal text and placeholder names, in order.
///
/// A name runs from right after [`PLACEHOLDER_PREFIX`] to the first
/// character that is not alphanumeric or `_`. A prefix with no name
/// after it stays literal text.
pub fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut text_start = 0;
    let mut search_from = 0;

    while let Some(idx) = template[search_from..].find(PLACEHOLDER_PREFIX) {
        let marker = search_from + idx;
        let name_start = marker + PLACEHOLDER_PREFIX.len();
        let name_len: usize = template[name_start..]
            .chars()
            .take_while(|c| is_name_char(*c))
            .map(char::len_utf8)
            .sum();

        if name_len == 0 {
            search_from = name_start;
            continue;
        }

        if marker > text_start {
            out.push(Segment::Text(&template[text_start..marker]));
        }
        let name_end = name_start + name_len;
        out.push(Segment::Placeholder(&template[name_start..name_end]));
        text_start = name_end;
        search_from = name_end;
    }

    if text_start < template.len() {
        out.push(Segment::Text(&template[text_start..]));
    }
    out
}

/// Distinct placeholder names in first-occurrence order.
pub fn extract_placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for segment in segments(template) {
        if let Segment::Placeholder(name) = segment
            && !names.iter().any(|n| n == name)
        {
            names.push(name.to_string());
        }
    }
    names
}

/// The raw text of a query that may contain placeholders (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTemplate {
    text: String,
}

impl QueryTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct placeholder names in first-occurrence order
    pub fn placeholders(&self) -> Vec<String> {
        extract_placeholders(&self.text)
    }

    pub fn segments(&self) -> Vec<Segment<'_>> {
        segments(&self.text)
    }

    /// Placeholder names in template order, repeats included
    pub fn placeholders_iter(&self) -> impl Iterator<Item = &str> {
        segments(&self.text).into_iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name),
            Segment::Text(_) => None,
        })
    }
}

impl From<&str> for QueryTemplate {
    fn from(s: &str) -> Self {
        QueryTemplate::new(s)
    }
}

impl std::fmt::Display for QueryTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
