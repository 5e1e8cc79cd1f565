//! The [`Reflect`] trait: the seam the traversal recurses through.
//!
//! Every type that can appear as a record field implements `Reflect`. The
//! trait answers the three questions the traversal asks of a value:
//!
//! - what is its tag-aware expansion ([`Reflect::reflect`]): records
//!   become nested objects, containers expand element-wise, scalars stay
//!   leaves
//! - what is its opaque leaf form ([`Reflect::leaf`]): used by the
//!   `omitnested` and `string` options, no renaming or option processing
//! - does it count as empty ([`Reflect::is_empty`]): the `omitempty`
//!   zero-value check
//!
//! `Option::None` additionally reports itself as skipped
//! ([`Reflect::is_skipped`]), which makes the traversal emit no key at all
//! for absent values.
//!
//! Impls are provided for the primitives, strings, `Option`, `Box`,
//! references, slices and `Vec`s, string-keyed maps, `chrono` date-times
//! (opaque leaves by convention), and [`Value`]/[`Map`] themselves.
//! `#[derive(Record)]` generates the impl for record types.

use crate::{MapOptions, Value};
use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use num_bigint::BigInt;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::BuildHasher;

/// A value the field traversal can expand.
///
/// Object-safe so that [`Field`](crate::Field) can carry `&dyn Reflect`
/// handles without knowing concrete field types.
pub trait Reflect {
    /// The opaque leaf form of the value: no tag processing, no renaming.
    fn leaf(&self) -> Value;

    /// The tag-aware expansion. Defaults to the leaf form; containers and
    /// derived records override this to recurse.
    fn reflect(&self, options: &MapOptions) -> Value {
        let _ = options;
        self.leaf()
    }

    /// Whether the value equals its type's zero value (`omitempty`).
    fn is_empty(&self) -> bool;

    /// Whether the value should be skipped entirely, emitting no key.
    /// Only `Option::None` reports `true`.
    fn is_skipped(&self) -> bool {
        false
    }
}

macro_rules! reflect_integer {
    ($($ty:ty),*) => {
        $(
            impl Reflect for $ty {
                fn leaf(&self) -> Value {
                    Value::Number(crate::Number::Integer(*self as i64))
                }

                fn is_empty(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

reflect_integer!(i8, i16, i32, i64, isize, u8, u16, u32);

macro_rules! reflect_big_integer {
    ($($ty:ty),*) => {
        $(
            impl Reflect for $ty {
                fn leaf(&self) -> Value {
                    // i64 when it fits, BigInt when it does not
                    match i64::try_from(*self) {
                        Ok(i) => Value::Number(crate::Number::Integer(i)),
                        Err(_) => Value::BigInt(BigInt::from(*self)),
                    }
                }

                fn is_empty(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

reflect_big_integer!(u64, usize, i128, u128);

macro_rules! reflect_float {
    ($($ty:ty),*) => {
        $(
            impl Reflect for $ty {
                fn leaf(&self) -> Value {
                    Value::Number(crate::Number::Float(*self as f64))
                }

                fn is_empty(&self) -> bool {
                    *self == 0.0
                }
            }
        )*
    };
}

reflect_float!(f32, f64);

impl Reflect for bool {
    fn leaf(&self) -> Value {
        Value::Bool(*self)
    }

    fn is_empty(&self) -> bool {
        !*self
    }
}

impl Reflect for char {
    fn leaf(&self) -> Value {
        Value::String(self.to_string())
    }

    fn is_empty(&self) -> bool {
        *self == '\0'
    }
}

impl Reflect for str {
    fn leaf(&self) -> Value {
        Value::String(self.to_owned())
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl Reflect for String {
    fn leaf(&self) -> Value {
        Value::String(self.clone())
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl Reflect for Cow<'_, str> {
    fn leaf(&self) -> Value {
        Value::String(self.clone().into_owned())
    }

    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn leaf(&self) -> Value {
        (**self).leaf()
    }

    fn reflect(&self, options: &MapOptions) -> Value {
        (**self).reflect(options)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn is_skipped(&self) -> bool {
        (**self).is_skipped()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn leaf(&self) -> Value {
        (**self).leaf()
    }

    fn reflect(&self, options: &MapOptions) -> Value {
        (**self).reflect(options)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn is_skipped(&self) -> bool {
        (**self).is_skipped()
    }
}

/// `Option` is the pointer analog: `None` is skipped at field level and
/// surfaces as `Null` inside containers.
impl<T: Reflect> Reflect for Option<T> {
    fn leaf(&self) -> Value {
        match self {
            Some(v) => v.leaf(),
            None => Value::Null,
        }
    }

    fn reflect(&self, options: &MapOptions) -> Value {
        match self {
            Some(v) => v.reflect(options),
            None => Value::Null,
        }
    }

    fn is_empty(&self) -> bool {
        self.is_none()
    }

    fn is_skipped(&self) -> bool {
        self.is_none()
    }
}

impl<T: Reflect> Reflect for [T] {
    fn leaf(&self) -> Value {
        Value::Array(self.iter().map(Reflect::leaf).collect())
    }

    fn reflect(&self, options: &MapOptions) -> Value {
        Value::Array(self.iter().map(|v| v.reflect(options)).collect())
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn leaf(&self) -> Value {
        self.as_slice().leaf()
    }

    fn reflect(&self, options: &MapOptions) -> Value {
        self.as_slice().reflect(options)
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn leaf(&self) -> Value {
        self[..].leaf()
    }

    fn reflect(&self, options: &MapOptions) -> Value {
        self[..].reflect(options)
    }

    fn is_empty(&self) -> bool {
        // the zero value of [T; N] has every element at its zero value
        self.iter().all(Reflect::is_empty)
    }
}

macro_rules! reflect_string_keyed_map {
    ($ty:ident <K, V $(, $extra:ident : $bound:path)?>) => {
        impl<K, V $(, $extra)?> Reflect for $ty<K, V $(, $extra)?>
        where
            K: Display,
            V: Reflect,
            $($extra: $bound,)?
        {
            fn leaf(&self) -> Value {
                Value::Object(
                    self.iter()
                        .map(|(k, v)| (k.to_string(), v.leaf()))
                        .collect(),
                )
            }

            fn reflect(&self, options: &MapOptions) -> Value {
                Value::Object(
                    self.iter()
                        .map(|(k, v)| (k.to_string(), v.reflect(options)))
                        .collect(),
                )
            }

            fn is_empty(&self) -> bool {
                self.is_empty()
            }
        }
    };
}

reflect_string_keyed_map!(HashMap<K, V, S: BuildHasher>);
reflect_string_keyed_map!(BTreeMap<K, V>);
reflect_string_keyed_map!(IndexMap<K, V, S: BuildHasher>);

/// Time values are structurally records but are treated as opaque leaves
/// by convention; they are never expanded.
impl<Tz: TimeZone> Reflect for DateTime<Tz> {
    fn leaf(&self) -> Value {
        Value::Date(self.with_timezone(&Utc))
    }

    fn is_empty(&self) -> bool {
        *self == DateTime::<Utc>::default()
    }
}

impl Reflect for BigInt {
    fn leaf(&self) -> Value {
        Value::BigInt(self.clone())
    }

    fn is_empty(&self) -> bool {
        *self == BigInt::default()
    }
}

/// Already-expanded values pass through unchanged.
impl Reflect for Value {
    fn leaf(&self) -> Value {
        self.clone()
    }

    fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(arr) => arr.is_empty(),
            Value::Object(obj) => obj.is_empty(),
            _ => false,
        }
    }
}

impl Reflect for crate::Map {
    fn leaf(&self) -> Value {
        Value::Object(self.clone())
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}
