//! Configuration options for record expansion.
//!
//! This module provides [`MapOptions`], which selects the tag namespace the
//! traversal reads field annotations from. The default namespace is
//! [`DEFAULT_TAG`] (`"structmap"`); callers can point the traversal at any
//! other namespace declared in a field's `#[tags(...)]` attribute.
//!
//! ## Examples
//!
//! ```rust
//! use structmap::{to_map_with_options, MapOptions, Record};
//!
//! #[derive(Record)]
//! struct Server {
//!     #[tags(structmap = "server_name", json = "serverName")]
//!     name: String,
//! }
//!
//! let server = Server { name: "api-1".to_string() };
//!
//! // Default namespace reads the `structmap` tag
//! let map = structmap::to_map(&server);
//! assert!(map.contains_key("server_name"));
//!
//! // Custom namespace reads the `json` tag
//! let options = MapOptions::new().with_tag_name("json");
//! let map = to_map_with_options(&server, options);
//! assert!(map.contains_key("serverName"));
//! ```

use std::borrow::Cow;

/// The tag namespace read when none is selected explicitly.
pub const DEFAULT_TAG: &str = "structmap";

/// Configuration for record expansion.
///
/// Currently one knob: the tag namespace annotations are read from.
/// Cloned freely during traversal; keep it cheap.
///
/// # Examples
///
/// ```rust
/// use structmap::MapOptions;
///
/// // Default: read `structmap` tags
/// let options = MapOptions::new();
/// assert_eq!(options.tag_name(), "structmap");
///
/// // Read `json` tags instead
/// let options = MapOptions::new().with_tag_name("json");
/// assert_eq!(options.tag_name(), "json");
/// ```
#[derive(Clone, Debug)]
pub struct MapOptions {
    pub tag_name: Cow<'static, str>,
}

impl Default for MapOptions {
    fn default() -> Self {
        MapOptions {
            tag_name: Cow::Borrowed(DEFAULT_TAG),
        }
    }
}

impl MapOptions {
    /// Creates default options (reads the `structmap` tag namespace).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tag namespace annotations are read from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structmap::MapOptions;
    ///
    /// let options = MapOptions::new().with_tag_name("json");
    /// assert_eq!(options.tag_name(), "json");
    /// ```
    #[must_use]
    pub fn with_tag_name(mut self, tag_name: impl Into<Cow<'static, str>>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    /// The selected tag namespace.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }
}
