//! The [`Record`] trait and per-field descriptors.
//!
//! A record is any struct that exposes its fields to the traversal: the
//! declared name, the raw annotation strings per tag namespace, and a
//! [`Reflect`] handle on the current value. The `#[derive(Record)]` macro
//! generates the impl; a manual impl is the escape hatch for types that
//! cannot use the derive.
//!
//! ## Manual implementation
//!
//! ```rust
//! use structmap::{Field, Record};
//!
//! struct Point {
//!     x: i64,
//!     y: i64,
//! }
//!
//! impl Record for Point {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new("x", &[], &self.x),
//!             Field::new("y", &[("structmap", "y_renamed")], &self.y),
//!         ]
//!     }
//! }
//!
//! let map = structmap::to_map(&Point { x: 1, y: 2 });
//! assert_eq!(map.get("x").and_then(|v| v.as_i64()), Some(1));
//! assert_eq!(map.get("y_renamed").and_then(|v| v.as_i64()), Some(2));
//! ```

use crate::Reflect;

/// A structured record whose fields can be walked.
///
/// Normally implemented via `#[derive(Record)]`, which also generates a
/// matching [`Reflect`] impl so the type can appear nested inside other
/// records, sequences, and maps.
pub trait Record {
    /// Field descriptors for the record's fields, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// A single field of a record: declared name, annotation table, and a
/// handle on the current value.
///
/// The annotation table maps tag namespaces to raw tag strings, e.g.
/// `[("structmap", "server_name,omitempty"), ("json", "serverName")]`.
/// Both live in the type's metadata and are `'static`; only the value
/// borrow is tied to the record instance.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    tags: &'static [(&'static str, &'static str)],
    value: &'a dyn Reflect,
}

impl<'a> Field<'a> {
    /// Builds a field descriptor. Used by generated code and manual
    /// [`Record`] impls.
    #[must_use]
    pub fn new(
        name: &'static str,
        tags: &'static [(&'static str, &'static str)],
        value: &'a dyn Reflect,
    ) -> Self {
        Field { name, tags, value }
    }

    /// The declared field name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The raw tag string for a namespace, or `""` when the field carries
    /// no annotation for it.
    #[must_use]
    pub fn tag(&self, namespace: &str) -> &'static str {
        self.tags
            .iter()
            .find(|(ns, _)| *ns == namespace)
            .map(|(_, raw)| *raw)
            .unwrap_or("")
    }

    /// The field's current value.
    #[must_use]
    pub fn value(&self) -> &'a dyn Reflect {
        self.value
    }
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
