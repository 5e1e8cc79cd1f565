//! The field traversal.
//!
//! [`expand`] is the single recursive algorithm of the crate: it walks a
//! record's field descriptors in declaration order, resolves each field's
//! effective key and option set from its tag, and builds the output
//! [`Map`]. Nested records recurse through [`Reflect::reflect`], which for
//! derived record types calls straight back into `expand`.
//!
//! Branching policy, per field:
//!
//! 1. Parse the tag for the selected namespace into (name, options).
//! 2. Skip the field when the name is `-`, when the value is skipped
//!    (`Option::None`), or when `omitempty` is set and the value is its
//!    type's zero value.
//! 3. The effective key is the tag name when present, the declared field
//!    name otherwise.
//! 4. `string` stores the leaf's textual form and stops.
//! 5. `omitnested` takes the opaque leaf form; otherwise the value is
//!    expanded recursively.
//! 6. `flatten` merges an object expansion into the current map with no
//!    wrapping key; a non-object value keeps its key.

use crate::tag::parse_tag;
use crate::{Map, MapOptions, Record, Value};

/// Expands field descriptors into a [`Map`] under the given options.
///
/// This is the engine behind [`to_map`](crate::to_map); generated
/// [`Reflect`](crate::Reflect) impls call it to expand nested records.
/// Most callers want the crate-level entry points instead.
pub fn expand(fields: &[crate::Field<'_>], options: &MapOptions) -> Map {
    let mut out = Map::with_capacity(fields.len());

    for field in fields {
        let (tag_name, opts) = parse_tag(field.tag(options.tag_name()));
        if tag_name == "-" {
            continue;
        }

        let value = field.value();
        if value.is_skipped() {
            continue;
        }
        if opts.has("omitempty") && value.is_empty() {
            continue;
        }

        let key = if tag_name.is_empty() {
            field.name()
        } else {
            tag_name
        };

        if opts.has("string") {
            out.insert(key.to_string(), Value::String(value.leaf().to_string()));
            continue;
        }

        let expanded = if opts.has("omitnested") {
            value.leaf()
        } else {
            value.reflect(options)
        };

        match expanded {
            Value::Object(nested) if opts.has("flatten") => out.extend(nested),
            other => {
                out.insert(key.to_string(), other);
            }
        }
    }

    out
}

/// The effective keys of a record's visible, non-excluded fields, in
/// declaration order, under the given options.
///
/// Renames from the selected tag namespace apply; skipped and empty
/// values do not (every visible field contributes its key).
///
/// # Examples
///
/// ```rust
/// use structmap::{MapOptions, Record};
///
/// #[derive(Record)]
/// struct Server {
///     #[tags(structmap = "server_name")]
///     name: String,
///     port: i64,
/// }
///
/// let server = Server { name: "api-1".to_string(), port: 8080 };
/// let names = structmap::names(&server, &MapOptions::default());
/// assert_eq!(names, vec!["server_name", "port"]);
/// ```
pub fn names<T: Record + ?Sized>(record: &T, options: &MapOptions) -> Vec<String> {
    record
        .fields()
        .iter()
        .filter_map(|field| {
            let (tag_name, _) = parse_tag(field.tag(options.tag_name()));
            match tag_name {
                "-" => None,
                "" => Some(field.name().to_string()),
                renamed => Some(renamed.to_string()),
            }
        })
        .collect()
}

/// The expanded values of a record's visible, non-excluded fields, in
/// declaration order, under the given options.
///
/// `omitnested` and `string` are honored; `omitempty` is not, so zero
/// values are included. `None` fields contribute nothing.
pub fn values<T: Record + ?Sized>(record: &T, options: &MapOptions) -> Vec<Value> {
    record
        .fields()
        .iter()
        .filter_map(|field| {
            let (tag_name, opts) = parse_tag(field.tag(options.tag_name()));
            if tag_name == "-" {
                return None;
            }

            let value = field.value();
            if value.is_skipped() {
                return None;
            }

            if opts.has("string") {
                return Some(Value::String(value.leaf().to_string()));
            }
            if opts.has("omitnested") {
                return Some(value.leaf());
            }
            Some(value.reflect(options))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, Number, Record};

    // Manual Record impls: the derive macro cannot be exercised from
    // inside the crate it expands paths into, and the manual route is a
    // supported escape hatch worth covering anyway.
    struct Server {
        name: String,
        port: i64,
        secret: String,
        enabled: bool,
    }

    impl Record for Server {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("name", &[("structmap", "server_name")], &self.name),
                Field::new("port", &[("structmap", ",omitempty")], &self.port),
                Field::new("secret", &[("structmap", "-")], &self.secret),
                Field::new("enabled", &[], &self.enabled),
            ]
        }
    }

    fn server() -> Server {
        Server {
            name: "api-1".to_string(),
            port: 8080,
            secret: "hunter2".to_string(),
            enabled: true,
        }
    }

    #[test]
    fn test_rename_and_exclusion() {
        let map = expand(&server().fields(), &MapOptions::default());

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("server_name").and_then(|v| v.as_str()), Some("api-1"));
        assert!(!map.contains_key("name"));
        assert!(!map.contains_key("secret"));
        assert_eq!(map.get("enabled").and_then(|v| v.as_bool()), Some(true));
    }

    #[test]
    fn test_omitempty_zero_value() {
        let mut s = server();
        s.port = 0;
        let map = expand(&s.fields(), &MapOptions::default());

        assert!(!map.contains_key("port"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_unknown_namespace_uses_declared_names() {
        let options = MapOptions::new().with_tag_name("json");
        let map = expand(&server().fields(), &options);

        // no json tags declared, so every field keeps its declared name
        assert_eq!(map.len(), 4);
        assert!(map.contains_key("name"));
        assert!(map.contains_key("secret"));
    }

    #[test]
    fn test_names_and_values() {
        let s = server();
        let options = MapOptions::default();
        assert_eq!(names(&s, &options), vec!["server_name", "port", "enabled"]);

        let values = values(&s, &options);
        assert_eq!(values.len(), 3);
        assert_eq!(values[1], Value::Number(Number::Integer(8080)));
    }

    #[test]
    fn test_names_follow_selected_namespace() {
        struct Tagged {
            id: i64,
        }
        impl Record for Tagged {
            fn fields(&self) -> Vec<Field<'_>> {
                vec![Field::new(
                    "id",
                    &[("structmap", "internal_id"), ("json", "externalId")],
                    &self.id,
                )]
            }
        }

        let t = Tagged { id: 7 };
        let json = MapOptions::new().with_tag_name("json");
        assert_eq!(names(&t, &json), vec!["externalId"]);
        assert_eq!(names(&t, &MapOptions::default()), vec!["internal_id"]);
        assert_eq!(values(&t, &json), vec![Value::Number(Number::Integer(7))]);
    }

    struct Wrapper {
        inner: Server,
        flat: Server,
    }

    impl Record for Wrapper {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("inner", &[], &self.inner),
                Field::new("flat", &[("structmap", ",flatten")], &self.flat),
            ]
        }
    }

    impl crate::Reflect for Server {
        fn leaf(&self) -> Value {
            let mut map = Map::new();
            map.insert("name".to_string(), self.name.leaf());
            map.insert("port".to_string(), self.port.leaf());
            map.insert("secret".to_string(), self.secret.leaf());
            map.insert("enabled".to_string(), self.enabled.leaf());
            Value::Object(map)
        }

        fn reflect(&self, options: &MapOptions) -> Value {
            Value::Object(expand(&self.fields(), options))
        }

        fn is_empty(&self) -> bool {
            self.fields().iter().all(|f| f.value().is_empty())
        }
    }

    #[test]
    fn test_nested_record_expands() {
        let w = Wrapper {
            inner: server(),
            flat: Server {
                name: "flat".to_string(),
                port: 1,
                secret: String::new(),
                enabled: false,
            },
        };
        let map = expand(&w.fields(), &MapOptions::default());

        let inner = map.get("inner").and_then(|v| v.as_object()).unwrap();
        assert_eq!(inner.get("server_name").and_then(|v| v.as_str()), Some("api-1"));

        // flattened fields land at the top level, no "flat" key
        assert!(!map.contains_key("flat"));
        assert_eq!(map.get("port").and_then(|v| v.as_i64()), Some(1));
    }

    #[test]
    fn test_omitnested_keeps_leaf_form() {
        struct Holder {
            server: Server,
        }
        impl Record for Holder {
            fn fields(&self) -> Vec<Field<'_>> {
                vec![Field::new("server", &[("structmap", ",omitnested")], &self.server)]
            }
        }

        let h = Holder { server: server() };
        let map = expand(&h.fields(), &MapOptions::default());

        // leaf form keeps declared names: no rename, no exclusion
        let obj = map.get("server").and_then(|v| v.as_object()).unwrap();
        assert!(obj.contains_key("name"));
        assert!(obj.contains_key("secret"));
        assert!(!obj.contains_key("server_name"));
    }

    #[test]
    fn test_string_option_stores_text() {
        struct Ports {
            port: i64,
        }
        impl Record for Ports {
            fn fields(&self) -> Vec<Field<'_>> {
                vec![Field::new("port", &[("structmap", ",string")], &self.port)]
            }
        }

        let map = expand(&Ports { port: 8080 }.fields(), &MapOptions::default());
        assert_eq!(map.get("port"), Some(&Value::String("8080".to_string())));
    }

    #[test]
    fn test_flatten_non_record_keeps_key() {
        struct Odd {
            count: i64,
        }
        impl Record for Odd {
            fn fields(&self) -> Vec<Field<'_>> {
                vec![Field::new("count", &[("structmap", ",flatten")], &self.count)]
            }
        }

        let map = expand(&Odd { count: 3 }.fields(), &MapOptions::default());
        assert_eq!(map.get("count").and_then(|v| v.as_i64()), Some(3));
    }

    #[test]
    fn test_none_field_emits_no_key() {
        struct MaybePort {
            port: Option<i64>,
        }
        impl Record for MaybePort {
            fn fields(&self) -> Vec<Field<'_>> {
                vec![Field::new("port", &[], &self.port)]
            }
        }

        let map = expand(&MaybePort { port: None }.fields(), &MapOptions::default());
        assert!(map.is_empty());

        let map = expand(&MaybePort { port: Some(80) }.fields(), &MapOptions::default());
        assert_eq!(map.get("port").and_then(|v| v.as_i64()), Some(80));
    }
}
