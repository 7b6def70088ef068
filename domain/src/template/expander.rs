//! Variant expansion

use super::placeholder::{QueryTemplate, Segment};
use super::value::{PlaceholderBindings, PlaceholderValue};
use crate::core::error::DomainError;

/// A fully substituted query, ready to send (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcreteQuery(String);

impl ConcreteQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ConcreteQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The first placeholder, in template order, bound to a variant list.
fn driving_placeholder<'a>(
    template: &'a QueryTemplate,
    bindings: &'a PlaceholderBindings,
) -> Option<(&'a str, &'a [String])> {
    template.placeholders_iter().find_map(|name| match bindings.get(name) {
        Some(PlaceholderValue::Variants(variants)) => Some((name, variants.as_slice())),
        _ => None,
    })
}

/// Expand a template into its concrete queries.
///
/// Only the first placeholder carrying a variant list fans out: one query
/// per variant, in the order given. Every other placeholder, including any
/// later variant list, contributes its first value. Without a variant list
/// the result is a single query.
///
/// Substituted values are inserted verbatim and never scanned again.
/// A variant list with fewer than two entries is rejected.
pub fn expand(
    template: &QueryTemplate,
    bindings: &PlaceholderBindings,
) -> Result<Vec<ConcreteQuery>, DomainError> {
    let segments = template.segments();

    for segment in &segments {
        let Segment::Placeholder(name) = segment else {
            continue;
        };
        match bindings.get(name) {
            None => return Err(DomainError::UnresolvedPlaceholder((*name).to_string())),
            Some(value) if value.is_variants() && value.variant_count() < 2 => {
                return Err(DomainError::InvalidVariantList((*name).to_string()));
            }
            Some(_) => {}
        }
    }

    let Some((driver, variants)) = driving_placeholder(template, bindings) else {
        return Ok(vec![render(&segments, bindings, None)]);
    };

    Ok(variants
        .iter()
        .map(|variant| render(&segments, bindings, Some((driver, variant.as_str()))))
        .collect())
}

fn render(
    segments: &[Segment<'_>],
    bindings: &PlaceholderBindings,
    driver: Option<(&str, &str)>,
) -> ConcreteQuery {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder(name) => match driver {
                Some((driver_name, variant)) if driver_name == *name => out.push_str(variant),
                // expand() checked every placeholder is bound
                _ => out.push_str(bindings.get(name).map(|v| v.first()).unwrap_or_default()),
            },
        }
    }
    ConcreteQuery(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(v: &str) -> PlaceholderValue {
        PlaceholderValue::Single(v.to_string())
    }

    fn variants(vs: &[&str]) -> PlaceholderValue {
        PlaceholderValue::Variants(vs.iter().map(|v| v.to_string()).collect())
    }

    fn texts(queries: &[ConcreteQuery]) -> Vec<&str> {
        queries.iter().map(|q| q.as_str()).collect()
    }

    #[test]
    fn zero_placeholders_yield_the_template() {
        for text in ["¿Qué es Rust?", "", "precio: $0 euros", "$0"] {
            let template = QueryTemplate::from(text);
            let queries = expand(&template, &PlaceholderBindings::new()).unwrap();
            assert_eq!(texts(&queries), vec![text]);
        }
    }

    #[test]
    fn single_values_substitute_every_occurrence() {
        let template = QueryTemplate::from("$0x y $0y, otra vez $0x");
        let bindings = PlaceholderBindings::new()
            .with("x", single("uno"))
            .with("y", single("dos"));
        let queries = expand(&template, &bindings).unwrap();
        assert_eq!(texts(&queries), vec!["uno y dos, otra vez uno"]);
    }

    #[test]
    fn persona_scenario() {
        let template = QueryTemplate::from("¿Quién fue $0persona?");
        let bindings = PlaceholderBindings::new().with(
            "persona",
            variants(&["Alexander Flemming", "Albert Einstein"]),
        );
        let queries = expand(&template, &bindings).unwrap();
        assert_eq!(
            texts(&queries),
            vec!["¿Quién fue Alexander Flemming?", "¿Quién fue Albert Einstein?"]
        );
    }

    #[test]
    fn one_variant_list_yields_one_query_per_variant_in_order() {
        let template = QueryTemplate::from("Háblame de $0tema en $0idioma");
        let bindings = PlaceholderBindings::new()
            .with("tema", variants(&["c", "a", "b", "d"]))
            .with("idioma", single("inglés"));
        let queries = expand(&template, &bindings).unwrap();
        assert_eq!(
            texts(&queries),
            vec![
                "Háblame de c en inglés",
                "Háblame de a en inglés",
                "Háblame de b en inglés",
                "Háblame de d en inglés",
            ]
        );
    }

    /// A second `/for` list never multiplies the queries: it degenerates
    /// to its first entry.
    #[test]
    fn second_variant_list_degenerates_to_first_entry() {
        let template = QueryTemplate::from("¿Quién fue $0persona y qué hizo en $0tema?");
        let bindings = PlaceholderBindings::new()
            .with("persona", variants(&["Curie", "Newton", "Darwin"]))
            .with("tema", variants(&["física", "química"]));
        let queries = expand(&template, &bindings).unwrap();
        assert_eq!(
            texts(&queries),
            vec![
                "¿Quién fue Curie y qué hizo en física?",
                "¿Quién fue Newton y qué hizo en física?",
                "¿Quién fue Darwin y qué hizo en física?",
            ]
        );
    }

    #[test]
    fn driver_is_chosen_by_template_order_not_binding_order() {
        let template = QueryTemplate::from("$0a / $0b");
        // bound out of template order on purpose
        let bindings = PlaceholderBindings::new()
            .with("b", variants(&["b1", "b2", "b3"]))
            .with("a", variants(&["a1", "a2"]));
        let queries = expand(&template, &bindings).unwrap();
        assert_eq!(texts(&queries), vec!["a1 / b1", "a2 / b1"]);
    }

    #[test]
    fn first_placeholder_single_second_variants_drives_on_second() {
        let template = QueryTemplate::from("$0a $0b");
        let bindings = PlaceholderBindings::new()
            .with("a", single("fijo"))
            .with("b", variants(&["x", "y"]));
        let queries = expand(&template, &bindings).unwrap();
        assert_eq!(texts(&queries), vec!["fijo x", "fijo y"]);
    }

    #[test]
    fn values_are_not_re_templated() {
        let template = QueryTemplate::from("Di $0a");
        let bindings = PlaceholderBindings::new()
            .with("a", single("$0b"))
            .with("b", single("nunca"));
        let queries = expand(&template, &bindings).unwrap();
        assert_eq!(texts(&queries), vec!["Di $0b"]);
    }

    #[test]
    fn unbound_placeholder_is_an_internal_error() {
        let template = QueryTemplate::from("$0a y $0b");
        let bindings = PlaceholderBindings::new().with("a", single("1"));
        assert_eq!(
            expand(&template, &bindings),
            Err(DomainError::UnresolvedPlaceholder("b".to_string()))
        );
    }
    #[test]
    fn empty_variant_list_is_rejected() {
        let template = QueryTemplate::from("¿Quién fue $0persona?");
        let bindings = PlaceholderBindings::new().with("persona", variants(&[]));
        assert_eq!(
            expand(&template, &bindings),
            Err(DomainError::InvalidVariantList("persona".to_string()))
        );
    }

    #[test]
    fn short_variant_list_is_rejected_even_when_not_driving() {
        let template = QueryTemplate::from("$0a en $0b");
        let bindings = PlaceholderBindings::new()
            .with("a", variants(&["x", "y"]))
            .with("b", variants(&["solo"]));
        assert_eq!(
            expand(&template, &bindings),
            Err(DomainError::InvalidVariantList("b".to_string()))
        );

        let bindings = PlaceholderBindings::new()
            .with("a", variants(&["x", "y"]))
            .with("b", variants(&[]));
        assert_eq!(
            expand(&template, &bindings),
            Err(DomainError::InvalidVariantList("b".to_string()))
        );
    }
}
