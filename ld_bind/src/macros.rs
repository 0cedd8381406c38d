// === vocabulary! Macro ===

/// Declare vocabulary types: a [`TypeSchema`](crate::TypeSchema) static and
/// a typed newtype over [`Record`](crate::Record) per type.
///
/// The Rust type name is the compact type name written under `type`, and the
/// expanded IRI is the namespace followed by that name.
///
/// ```
/// use ld_bind::{Kind, Property, ScalarKind};
/// use ld_bind::vocab::OBJECT;
///
/// const SERVINGS: Property =
///     Property::functional("servings", &[Kind::Scalar(ScalarKind::NonNegativeInteger)]);
///
/// ld_bind::vocabulary! {
///     @namespace "https://example.com/ns#";
///
///     /// A recipe.
///     pub struct Recipe as RECIPE: [Object] extends OBJECT {
///         SERVINGS,
///     }
/// }
///
/// let recipe: Recipe = ld_bind::from_str(r#"{"type": "Recipe", "servings": 4}"#).unwrap();
/// assert_eq!(RECIPE.iri, "https://example.com/ns#Recipe");
/// assert_eq!(recipe.first(&SERVINGS).and_then(|c| c.as_u64()), Some(4));
/// assert_eq!(ld_bind::to_value(&recipe).unwrap()["type"], "Recipe");
/// ```
///
/// Every schema should reach a `type` property through its ancestors, as
/// `OBJECT` and `LINK` provide.
#[macro_export]
macro_rules! vocabulary {
    (
        @namespace $ns:literal;
        $(
            $(#[$meta:meta])*
            $vis:vis struct $name:ident as $schema:ident : [$($capability:ident),* $(,)?]
                $(extends $parent:path)? {
                $($property:expr),* $(,)?
            }
        )*
    ) => {
        $(
            #[doc = concat!("Schema of [`", stringify!($name), "`].")]
            $vis static $schema: $crate::TypeSchema = $crate::TypeSchema {
                name: stringify!($name),
                iri: concat!($ns, stringify!($name)),
                capabilities: &[$($crate::Capability::$capability),*],
                extends: $crate::__vocabulary_parent!($($parent)?),
                properties: &[$(&$property),*],
            };

            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq)]
            $vis struct $name($crate::Record);

            impl $name {
                pub fn new() -> Self {
                    $name($crate::Record::new(&$schema))
                }
            }

            impl ::std::default::Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl $crate::Vocabulary for $name {
                fn schema() -> &'static $crate::TypeSchema {
                    &$schema
                }

                fn as_record(&self) -> &$crate::Record {
                    &self.0
                }

                fn as_record_mut(&mut self) -> &mut $crate::Record {
                    &mut self.0
                }

                fn into_record(self) -> $crate::Record {
                    self.0
                }

                fn wrap(record: $crate::Record) -> Self {
                    $name(record)
                }
            }

            impl ::std::ops::Deref for $name {
                type Target = $crate::Record;

                fn deref(&self) -> &$crate::Record {
                    &self.0
                }
            }

            impl ::std::ops::DerefMut for $name {
                fn deref_mut(&mut self) -> &mut $crate::Record {
                    &mut self.0
                }
            }

            impl ::std::convert::From<$name> for $crate::Record {
                fn from(value: $name) -> $crate::Record {
                    value.0
                }
            }

            impl ::std::convert::TryFrom<$crate::Record> for $name {
                type Error = $crate::BindError;

                fn try_from(record: $crate::Record) -> ::std::result::Result<Self, $crate::BindError> {
                    <$name as $crate::Vocabulary>::from_record(record)
                }
            }

            impl $crate::serde::Serialize for $name {
                fn serialize<S: $crate::serde::Serializer>(
                    &self,
                    serializer: S,
                ) -> ::std::result::Result<S::Ok, S::Error> {
                    $crate::serde::Serialize::serialize(&self.0, serializer)
                }
            }

            impl<'de> $crate::serde::Deserialize<'de> for $name {
                fn deserialize<D: $crate::serde::Deserializer<'de>>(
                    deserializer: D,
                ) -> ::std::result::Result<Self, D::Error> {
                    let map = <$crate::serde_json::Map<::std::string::String, $crate::serde_json::Value>
                        as $crate::serde::Deserialize>::deserialize(deserializer)?;
                    <$name as $crate::Vocabulary>::from_map(&map)
                        .map_err(<D::Error as $crate::serde::de::Error>::custom)
                }
            }
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __vocabulary_parent {
    () => {
        ::std::option::Option::None
    };
    ($parent:path) => {
        ::std::option::Option::Some(&$parent)
    };
}
