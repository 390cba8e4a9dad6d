use serde_json::Value;

/// Deep-merges `source` into `target`.
///
/// Objects are merged recursively. A `null` in `source` is skipped, so it never
/// erases a value. Everything else (strings, numbers, arrays) replaces the target.
pub fn deep_merge(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, source_value) in source {
                if source_value.is_null() {
                    continue;
                }

                let nested = matches!(
                    (target.get(key), source_value),
                    (Some(Value::Object(_)), Value::Object(_))
                );

                if nested {
                    if let Some(target_value) = target.get_mut(key) {
                        deep_merge(target_value, source_value);
                    }
                } else {
                    target.insert(key.clone(), source_value.clone());
                }
            }
        }

        (_, Value::Null) => {}

        (target, source) => *target = source.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_nested_objects_are_merged() {
        let mut target = json!({ "a": { "b": 1, "c": 2 }, "d": 3 });
        deep_merge(&mut target, &json!({ "a": { "c": 20, "e": 5 } }));

        assert_eq!(target, json!({ "a": { "b": 1, "c": 20, "e": 5 }, "d": 3 }));
    }

    #[test]
    fn test_null_does_not_erase() {
        let mut target = json!({ "a": 1 });
        deep_merge(&mut target, &json!({ "a": null }));

        assert_eq!(target, json!({ "a": 1 }));
    }

    #[test]
    fn test_scalars_and_arrays_replace() {
        let mut target = json!({ "a": { "b": 1 }, "list": [1, 2, 3] });
        deep_merge(&mut target, &json!({ "a": "flat", "list": [4] }));

        assert_eq!(target, json!({ "a": "flat", "list": [4] }));
    }

    #[test]
    fn test_object_replaces_scalar() {
        let mut target = json!({ "a": 1 });
        deep_merge(&mut target, &json!({ "a": { "b": 2 } }));

        assert_eq!(target, json!({ "a": { "b": 2 } }));
    }

    #[test]
    fn test_new_keys_keep_source_order() {
        let mut target = json!({ "z": 0 });
        deep_merge(&mut target, &json!({ "y": 1, "x": 2 }));

        let keys: Vec<&String> = target.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "y", "x"]);
    }
}
