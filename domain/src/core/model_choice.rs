//! Parsing of the user's answer to the model selection prompt

use super::error::DomainError;
use super::model::Model;

/// Index of the model picked when the user just presses Enter
pub const DEFAULT_MODEL_INDEX: usize = 0;

/// Resolve a model selection answer against the offered list.
///
/// Empty input selects the default model; otherwise the input must be a
/// 1-based position in `models`.
pub fn parse_model_choice<'a>(input: &str, models: &'a [Model]) -> Result<&'a Model, DomainError> {
    if models.is_empty() {
        return Err(DomainError::NoModels);
    }

    let input = input.trim();
    if input.is_empty() {
        return Ok(&models[DEFAULT_MODEL_INDEX]);
    }

    let position: usize = input.parse().map_err(|_| {
        DomainError::InvalidModelChoice(format!(
            "'{}' is not a number between 1 and {}",
            input,
            models.len()
        ))
    })?;

    if position == 0 || position > models.len() {
        return Err(DomainError::InvalidModelChoice(format!(
            "{} is out of range (1-{})",
            position,
            models.len()
        )));
    }

    Ok(&models[position - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_selects_default() {
        let models = Model::default_models();
        assert_eq!(parse_model_choice("", &models).unwrap(), &Model::MistralTiny);
        assert_eq!(parse_model_choice("   ", &models).unwrap(), &Model::MistralTiny);
    }

    #[test]
    fn one_based_index() {
        let models = Model::default_models();
        assert_eq!(parse_model_choice("2", &models).unwrap(), &Model::MistralSmall);
        assert_eq!(parse_model_choice(" 4 ", &models).unwrap(), &Model::MistralLarge2402);
    }

    #[test]
    fn out_of_range_and_garbage_are_rejected() {
        let models = Model::default_models();
        assert!(matches!(
            parse_model_choice("0", &models),
            Err(DomainError::InvalidModelChoice(_))
        ));
        assert!(matches!(
            parse_model_choice("5", &models),
            Err(DomainError::InvalidModelChoice(_))
        ));
        assert!(matches!(
            parse_model_choice("large", &models),
            Err(DomainError::InvalidModelChoice(_))
        ));
    }

    #[test]
    fn no_models_configured() {
        assert_eq!(parse_model_choice("", &[]), Err(DomainError::NoModels));
    }
}
