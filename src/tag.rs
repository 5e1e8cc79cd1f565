//! Tag string parsing.
//!
//! A tag is the raw annotation string attached to a field for one tag
//! namespace, e.g. the `"server_name,omitempty"` in
//! `#[tags(structmap = "server_name,omitempty")]`. Its grammar is
//! `name[,opt1,opt2,...]`:
//!
//! - the first comma-separated segment, trimmed, is the override name
//!   (empty means "use the declared field name", `-` excludes the field)
//! - the remaining segments, trimmed, form the option set
//!
//! Recognized options are `omitempty`, `omitnested`, `flatten` and
//! `string`; unknown options are carried but ignored by the traversal.
//!
//! ## Examples
//!
//! ```rust
//! use structmap::parse_tag;
//!
//! let (name, opts) = parse_tag("server_name,omitempty");
//! assert_eq!(name, "server_name");
//! assert!(opts.has("omitempty"));
//!
//! let (name, opts) = parse_tag(",omitnested");
//! assert_eq!(name, "");
//! assert!(opts.has("omitnested"));
//! ```

/// The option flags that followed the name segment of a tag.
///
/// Borrows from the raw tag string; supports a membership query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagOptions<'a>(Vec<&'a str>);

impl<'a> TagOptions<'a> {
    /// Returns `true` if the option set contains `opt`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structmap::parse_tag;
    ///
    /// let (_, opts) = parse_tag("name,omitempty,flatten");
    /// assert!(opts.has("omitempty"));
    /// assert!(opts.has("flatten"));
    /// assert!(!opts.has("string"));
    /// ```
    #[must_use]
    pub fn has(&self, opt: &str) -> bool {
        self.0.iter().any(|o| *o == opt)
    }

    /// Returns `true` if no options are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the option tokens in the order they appeared.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.0.iter().copied()
    }
}

/// Splits a raw tag into its name and trailing options.
///
/// All segments are trimmed of surrounding whitespace, so `"name, opt"`
/// and `"name,opt"` are equivalent. An empty tag yields an empty name and
/// no options.
///
/// # Examples
///
/// ```rust
/// use structmap::parse_tag;
///
/// assert_eq!(parse_tag("").0, "");
/// assert_eq!(parse_tag("name").0, "name");
/// assert_eq!(parse_tag("name , opt").0, "name");
/// assert!(parse_tag("name, opt").1.has("opt"));
/// ```
#[must_use]
pub fn parse_tag(tag: &str) -> (&str, TagOptions<'_>) {
    let mut segments = tag.split(',');
    let name = segments.next().unwrap_or("").trim();
    (name, TagOptions(segments.map(str::trim).collect()))
}
