//! Identifying route parameters built from a model's primary key.

use crate::syntax::{Syntax, SyntaxFormatter};
use crudkit_core::CoreError;

/// Route parameter name used for single-column keys
pub const SINGLE_KEY_PARAM: &str = "id";

/// Build the fragment that extracts a model's identifying parameters.
///
/// A single key is always exposed as `id`; composite keys expose every
/// column under its own name, in key order. On document stores the value is
/// coerced to a string where the dialect does not do so itself.
///
/// An empty key list fails with an `InvalidKeySet` error that names no
/// model; [`CrudGenerator`](crate::CrudGenerator) attaches the model class.
pub fn url_params(keys: &[String], syntax: Syntax, document_store: bool) -> Result<String, CoreError> {
    let formatter = syntax.formatter();
    match keys {
        [] => Err(CoreError::empty_key_set()),
        [key] => Ok(key_entry(formatter, SINGLE_KEY_PARAM, key, document_store)),
        _ => Ok(keys
            .iter()
            .map(|key| key_entry(formatter, key, key, document_store))
            .collect::<Vec<_>>()
            .join(", ")),
    }
}

fn key_entry(
    formatter: &dyn SyntaxFormatter,
    param: &str,
    attribute: &str,
    document_store: bool,
) -> String {
    let value = formatter.access(attribute);
    let value = if document_store {
        formatter.stringify(value)
    } else {
        value
    };
    formatter.association(param, &value)
}

/// Controller action arguments: `$id` or `$a, $b`
pub fn action_params(keys: &[String]) -> String {
    match keys {
        [_] => format!("${}", SINGLE_KEY_PARAM),
        _ => keys
            .iter()
            .map(|key| format!("${}", key))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Condition passed to `findOne()`: `$id` or `['a' => $a, 'b' => $b]`
pub fn find_condition(keys: &[String]) -> String {
    match keys {
        [_] => format!("${}", SINGLE_KEY_PARAM),
        _ => {
            let php = Syntax::Php.formatter();
            let entries: Vec<String> = keys
                .iter()
                .map(|key| php.association(key, &format!("${}", key)))
                .collect();
            php.mapping(&entries)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_key_php() {
        let params = url_params(&keys(&["id"]), Syntax::Php, false).unwrap();
        assert_eq!(params, "'id' => $model->id");
    }

    #[test]
    fn test_single_key_uses_id_param_name() {
        let params = url_params(&keys(&["slug"]), Syntax::Php, false).unwrap();
        assert_eq!(params, "'id' => $model->slug");

        let params = url_params(&keys(&["slug"]), Syntax::Twig, false).unwrap();
        assert_eq!(params, "'id': model.slug");
    }

    #[test]
    fn test_document_store_coerces_php_only() {
        let params = url_params(&keys(&["_id"]), Syntax::Php, true).unwrap();
        assert_eq!(params, "'id' => (string)$model->_id");

        let params = url_params(&keys(&["_id"]), Syntax::Twig, true).unwrap();
        assert_eq!(params, "'id': model._id");
    }

    #[test]
    fn test_composite_key_twig() {
        let params = url_params(&keys(&["a", "b"]), Syntax::Twig, false).unwrap();
        assert_eq!(params, "'a': model.a, 'b': model.b");
    }

    #[test]
    fn test_composite_key_keeps_order_and_coercion() {
        let params = url_params(&keys(&["user_id", "group_id"]), Syntax::Php, true).unwrap();
        assert_eq!(
            params,
            "'user_id' => (string)$model->user_id, 'group_id' => (string)$model->group_id"
        );
    }

    #[test]
    fn test_empty_key_set_is_rejected() {
        let err = url_params(&[], Syntax::Php, false).unwrap_err();
        assert!(matches!(err, CoreError::InvalidKeySet { model: None }));
        assert_eq!(err.to_string(), "Primary key list is empty");
    }

    #[test]
    fn test_url_params_are_repeatable() {
        let pks = keys(&["a", "b"]);
        assert_eq!(
            url_params(&pks, Syntax::Php, false).unwrap(),
            url_params(&pks, Syntax::Php, false).unwrap()
        );
    }

    #[test]
    fn test_action_params_and_find_condition() {
        assert_eq!(action_params(&keys(&["post_id"])), "$id");
        assert_eq!(action_params(&keys(&["a", "b"])), "$a, $b");
        assert_eq!(find_condition(&keys(&["post_id"])), "$id");
        assert_eq!(find_condition(&keys(&["a", "b"])), "['a' => $a, 'b' => $b]");
    }
}
