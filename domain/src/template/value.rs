//! Placeholder values and bindings

/// Token that turns a placeholder value into a comma-separated variant list
pub const VARIANT_MARKER: &str = "/for";

/// The value the user gave a placeholder (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderValue {
    Single(String),
    /// Two or more distinct alternatives, in the order given
    Variants(Vec<String>),
}

impl PlaceholderValue {
    /// The value used when this placeholder does not drive expansion
    pub fn first(&self) -> &str {
        match self {
            PlaceholderValue::Single(value) => value,
            PlaceholderValue::Variants(variants) => {
                variants.first().map(String::as_str).unwrap_or_default()
            }
        }
    }

    pub fn is_variants(&self) -> bool {
        matches!(self, PlaceholderValue::Variants(_))
    }

    /// Number of concrete queries this value would produce if it drove expansion
    pub fn variant_count(&self) -> usize {
        match self {
            PlaceholderValue::Single(_) => 1,
            PlaceholderValue::Variants(variants) => variants.len(),
        }
    }
}

/// Parse what the user typed for a placeholder.
///
/// Returns `None` when the answer means "cancel": nothing typed, or a
/// variant list with no usable entries. A variant list is trimmed, stripped
/// of empty entries and duplicates; if one entry survives it is a single value.
pub fn parse_placeholder_value(raw: &str) -> Option<PlaceholderValue> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let Some(list) = strip_variant_marker(raw) else {
        return Some(PlaceholderValue::Single(raw.to_string()));
    };

    let mut variants: Vec<String> = Vec::new();
    for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        if !variants.iter().any(|v| v == entry) {
            variants.push(entry.to_string());
        }
    }

    match variants.len() {
        0 => None,
        1 => variants.pop().map(PlaceholderValue::Single),
        _ => Some(PlaceholderValue::Variants(variants)),
    }
}

/// `"/for a,b"` → `Some("a,b")`; the marker must be followed by whitespace
/// or end the value.
fn strip_variant_marker(raw: &str) -> Option<&str> {
    let head = raw.get(..VARIANT_MARKER.len())?;
    if !head.eq_ignore_ascii_case(VARIANT_MARKER) {
        return None;
    }
    let rest = &raw[VARIANT_MARKER.len()..];
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest.trim_start()),
        Some(_) => None,
    }
}

/// Placeholder name → value, in the order the names were resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderBindings {
    entries: Vec<(String, PlaceholderValue)>,
}

impl PlaceholderBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`; a name bound twice keeps its first value.
    pub fn bind(&mut self, name: impl Into<String>, value: PlaceholderValue) {
        let name = name.into();
        if self.get(&name).is_none() {
            self.entries.push((name, value));
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: PlaceholderValue) -> Self {
        self.bind(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PlaceholderValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlaceholderValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}
