//! # structmap
//!
//! Convert structs into generic ordered key-value maps, driven by per-field
//! tag annotations.
//!
//! ## What is structmap?
//!
//! structmap walks a struct's fields and produces a [`Map`] of
//! `String` keys to dynamically-typed [`Value`]s, recursing into nested
//! structs, sequences, and maps of structs. It is built for
//! serialization-adjacent work (templating contexts, structured log
//! payloads, ad-hoc JSON-like output) where you want a struct's data in a
//! generic shape without committing to a wire format.
//!
//! Per-field annotations control the conversion: rename a key, omit a
//! field when its value is zero, keep a nested struct opaque, flatten a
//! nested struct's keys into the parent, stringify a value, or exclude a
//! field entirely.
//!
//! ## Key Features
//!
//! - **Derive-based**: `#[derive(Record)]` generates the field metadata at
//!   compile time; no runtime type registry
//! - **Tag namespaces**: a field can carry annotations for several
//!   consumers (`#[tags(structmap = "...", json = "...")]`), selected per
//!   call
//! - **Ordered output**: maps preserve field declaration order
//!   (indexmap-backed)
//! - **Serde friendly**: the output types implement `Serialize`, so
//!   expanded records feed straight into serde sinks
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! structmap = "0.1"
//! ```
//!
//! ### Basic Conversion
//!
//! ```rust
//! use structmap::{to_map, Record};
//!
//! #[derive(Record)]
//! struct Server {
//!     name: String,
//!     id: i64,
//!     enabled: bool,
//! }
//!
//! let server = Server {
//!     name: "web-1".to_string(),
//!     id: 123456,
//!     enabled: true,
//! };
//!
//! let map = to_map(&server);
//! // => {"name": "web-1", "id": 123456, "enabled": true}
//! assert_eq!(map.len(), 3);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("web-1"));
//! ```
//!
//! ### Tag Annotations
//!
//! A tag is `name[,opt1,opt2,...]`: the first segment renames the key
//! (empty keeps the field name, `-` excludes the field), the rest are
//! option flags.
//!
//! ```rust
//! use structmap::{to_map, Record};
//!
//! #[derive(Record)]
//! struct Server {
//!     // rename the key
//!     #[tags(structmap = "server_name")]
//!     name: String,
//!
//!     // omit when zero
//!     #[tags(structmap = ",omitempty")]
//!     port: i64,
//!
//!     // never include
//!     #[tags(structmap = "-")]
//!     secret: String,
//! }
//!
//! let server = Server {
//!     name: "api-1".to_string(),
//!     port: 0,
//!     secret: "hunter2".to_string(),
//! };
//!
//! let map = to_map(&server);
//! assert_eq!(map.len(), 1);
//! assert!(map.contains_key("server_name"));
//! ```
//!
//! Recognized options:
//!
//! | Option | Effect |
//! |---|---|
//! | `omitempty` | skip the field when its value is the type's zero value |
//! | `omitnested` | store a nested record opaquely instead of expanding it |
//! | `flatten` | merge a nested record's keys into the parent map |
//! | `string` | store the value's textual form |
//!
//! ### Nested Records
//!
//! ```rust
//! use structmap::{to_map, Record};
//!
//! #[derive(Record)]
//! struct Address {
//!     country: String,
//! }
//!
//! #[derive(Record)]
//! struct Person {
//!     name: String,
//!     address: Address,
//! }
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address { country: "Turkey".to_string() },
//! };
//!
//! let map = to_map(&person);
//! let address = map.get("address").and_then(|v| v.as_object()).unwrap();
//! assert_eq!(address.get("country").and_then(|v| v.as_str()), Some("Turkey"));
//! ```
//!
//! ### Custom Tag Namespaces
//!
//! ```rust
//! use structmap::{to_map_with_options, MapOptions, Record};
//!
//! #[derive(Record)]
//! struct User {
//!     #[tags(json = "userName")]
//!     name: String,
//! }
//!
//! let user = User { name: "Alice".to_string() };
//! let options = MapOptions::new().with_tag_name("json");
//! let map = to_map_with_options(&user, options);
//! assert!(map.contains_key("userName"));
//! ```
//!
//! ## Failure Semantics
//!
//! The statically-typed entry points cannot fail: only types implementing
//! [`Record`] are accepted. The dynamic entry point [`map_any`] mirrors
//! the classic reflective contract: handing it something that is not a
//! record is a usage bug and **panics**; use [`try_map_any`] for a
//! recoverable [`Result`]. Everything else degrades gracefully: `None`
//! fields are skipped, and structural surprises (e.g. `flatten` on a
//! scalar) store the value as-is rather than erroring.

pub mod error;
pub mod expand;
pub mod macros;
pub mod map;
pub mod options;
pub mod record;
pub mod reflect;
pub mod tag;
pub mod value;

pub use error::{Error, Result};
pub use expand::{expand, names, values};
pub use map::Map;
pub use options::{MapOptions, DEFAULT_TAG};
pub use record::{Field, Record};
pub use reflect::Reflect;
pub use tag::{parse_tag, TagOptions};
pub use value::{Number, Value};

// The derive macro lives in the macro namespace, the trait in the type
// namespace, so both re-exports can share the `Record` name.
pub use structmap_derive::Record;

/// Converts a record into a [`Map`] using the default options.
///
/// Fields appear in declaration order; tag annotations in the
/// `structmap` namespace apply.
///
/// # Examples
///
/// ```rust
/// use structmap::{to_map, Record};
///
/// #[derive(Record)]
/// struct Point { x: i64, y: i64 }
///
/// let map = to_map(&Point { x: 1, y: 2 });
/// assert_eq!(map.get("x").and_then(|v| v.as_i64()), Some(1));
/// ```
#[must_use]
pub fn to_map<T>(record: &T) -> Map
where
    T: Record + ?Sized,
{
    to_map_with_options(record, MapOptions::default())
}

/// Converts a record into a [`Map`] with custom options.
///
/// # Examples
///
/// ```rust
/// use structmap::{to_map_with_options, MapOptions, Record};
///
/// #[derive(Record)]
/// struct Point {
///     #[tags(json = "X")]
///     x: i64,
/// }
///
/// let options = MapOptions::new().with_tag_name("json");
/// let map = to_map_with_options(&Point { x: 1 }, options);
/// assert!(map.contains_key("X"));
/// ```
#[must_use]
pub fn to_map_with_options<T>(record: &T, options: MapOptions) -> Map
where
    T: Record + ?Sized,
{
    expand(&record.fields(), &options)
}

/// Converts a dynamically-typed value into a [`Map`], using the default
/// options.
///
/// The value must be a record, directly or through `Option`/`Box`
/// indirection.
///
/// # Panics
///
/// Panics when the value is not a record. This mirrors the reflective
/// contract for a usage bug; callers who want a recoverable outcome
/// should use [`try_map_any`].
///
/// # Examples
///
/// ```rust
/// use structmap::{map_any, Record};
///
/// #[derive(Record)]
/// struct Point { x: i64 }
///
/// let point = Point { x: 1 };
/// let map = map_any(&point);
/// assert_eq!(map.get("x").and_then(|v| v.as_i64()), Some(1));
/// ```
#[must_use]
pub fn map_any(value: &dyn Reflect) -> Map {
    map_any_with_options(value, MapOptions::default())
}

/// Converts a dynamically-typed value into a [`Map`] with custom options.
///
/// # Panics
///
/// Panics when the value is not a record; see [`map_any`].
#[must_use]
pub fn map_any_with_options(value: &dyn Reflect, options: MapOptions) -> Map {
    match try_map_any(value, options) {
        Ok(map) => map,
        Err(err) => panic!("map_any: {}", err),
    }
}

/// Fallible variant of [`map_any`]: returns [`Error::NotARecord`] instead
/// of panicking when the value is not a record.
///
/// # Examples
///
/// ```rust
/// use structmap::{try_map_any, MapOptions};
///
/// let not_a_record = 42i64;
/// assert!(try_map_any(&not_a_record, MapOptions::default()).is_err());
/// ```
///
/// # Errors
///
/// Returns an error when the expanded value is not an object.
pub fn try_map_any(value: &dyn Reflect, options: MapOptions) -> Result<Map> {
    match value.reflect(&options) {
        Value::Object(map) => Ok(map),
        other => Err(Error::not_a_record(other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i64,
        y: i64,
    }

    impl Record for Point {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("x", &[], &self.x),
                Field::new("y", &[], &self.y),
            ]
        }
    }

    impl Reflect for Point {
        fn leaf(&self) -> Value {
            let mut map = Map::new();
            map.insert("x".to_string(), self.x.leaf());
            map.insert("y".to_string(), self.y.leaf());
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
    fn test_to_map() {
        let map = to_map(&Point { x: 1, y: 2 });
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("x").and_then(|v| v.as_i64()), Some(1));
        assert_eq!(map.get("y").and_then(|v| v.as_i64()), Some(2));
    }

    #[test]
    fn test_map_any_record() {
        let point = Point { x: 1, y: 2 };
        let map = map_any(&point);
        assert_eq!(map.len(), 2);

        // one pointer indirection is fine
        let boxed: Box<Point> = Box::new(Point { x: 3, y: 4 });
        let map = map_any(&boxed);
        assert_eq!(map.get("x").and_then(|v| v.as_i64()), Some(3));

        let opt = Some(Point { x: 5, y: 6 });
        let map = map_any(&opt);
        assert_eq!(map.get("x").and_then(|v| v.as_i64()), Some(5));
    }

    #[test]
    #[should_panic(expected = "expected a record value")]
    fn test_map_any_non_record_panics() {
        let not_a_record = vec!["foo".to_string()];
        let _ = map_any(&not_a_record);
    }

    #[test]
    fn test_try_map_any_non_record() {
        let err = try_map_any(&42i64, MapOptions::default()).unwrap_err();
        assert!(matches!(err, Error::NotARecord { found: "number" }));
    }
}
