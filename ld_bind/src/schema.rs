//! Declarative property and type schemas.
//!
//! A [`TypeSchema`] lists the properties of one vocabulary type in the order
//! they are serialized, and each [`Property`] lists the [`Kind`]s of value it
//! accepts, in the order they are tried when decoding.

use std::fmt;

/// Abstract role a concrete vocabulary type can play inside a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    Object,
    Link,
    Collection,
    CollectionPage,
    OrderedCollection,
    Image,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::Object,
        Capability::Link,
        Capability::Collection,
        Capability::CollectionPage,
        Capability::OrderedCollection,
        Capability::Image,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Object => "Object",
            Capability::Link => "Link",
            Capability::Collection => "Collection",
            Capability::CollectionPage => "CollectionPage",
            Capability::OrderedCollection => "OrderedCollection",
            Capability::Image => "Image",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal value codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `xsd:string`
    String,
    /// `rdf:langString`, written as a `{"@value", "@language"}` value object
    LangString,
    /// `xsd:float`
    Float,
    /// `xsd:boolean`
    Boolean,
    /// `xsd:dateTime`
    DateTime,
    /// `xsd:duration`
    Duration,
    /// RFC 2045 media type
    MediaType,
    /// `xsd:nonNegativeInteger`
    NonNegativeInteger,
    /// BCP 47 language tag
    Bcp47,
    /// RFC 5988 link relation
    Rfc5988,
    /// Place units keyword
    Units,
}

impl ScalarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::LangString => "language string",
            ScalarKind::Float => "float",
            ScalarKind::Boolean => "boolean",
            ScalarKind::DateTime => "date-time",
            ScalarKind::Duration => "duration",
            ScalarKind::MediaType => "media type",
            ScalarKind::NonNegativeInteger => "non-negative integer",
            ScalarKind::Bcp47 => "BCP 47 tag",
            ScalarKind::Rfc5988 => "link relation",
            ScalarKind::Units => "units",
        }
    }
}

/// One alternative a property value may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Nested(Capability),
    Iri,
    Scalar(ScalarKind),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Nested(capability) => write!(f, "{} object", capability),
            Kind::Iri => f.write_str("IRI"),
            Kind::Scalar(scalar) => f.write_str(scalar.as_str()),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Property {
    /// JSON key.
    pub name: &'static str,
    /// At most one value when set.
    pub functional: bool,
    /// Accepted alternatives in decode priority order.
    pub kinds: &'static [Kind],
    /// Sibling natural-language map key (e.g. `nameMap`).
    pub lang_map: Option<&'static str>,
}

impl Property {
    pub const fn functional(name: &'static str, kinds: &'static [Kind]) -> Self {
        Property {
            name,
            functional: true,
            kinds,
            lang_map: None,
        }
    }

    pub const fn non_functional(name: &'static str, kinds: &'static [Kind]) -> Self {
        Property {
            name,
            functional: false,
            kinds,
            lang_map: None,
        }
    }

    pub const fn with_lang_map(self, key: &'static str) -> Self {
        Property {
            lang_map: Some(key),
            ..self
        }
    }

    pub fn allows(&self, kind: Kind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
        self.kinds.iter().filter_map(|kind| match kind {
            Kind::Nested(capability) => Some(*capability),
            _ => None,
        })
    }

    pub fn scalars(&self) -> impl Iterator<Item = ScalarKind> + '_ {
        self.kinds.iter().filter_map(|kind| match kind {
            Kind::Scalar(scalar) => Some(*scalar),
            _ => None,
        })
    }

    /// True for functional properties whose only alternative is an IRI.
    pub fn is_iri_only(&self) -> bool {
        self.functional && matches!(self.kinds, [Kind::Iri])
    }
}

#[derive(Debug)]
pub struct TypeSchema {
    /// Compact type name written under `type`.
    pub name: &'static str,
    /// Expanded type IRI.
    pub iri: &'static str,
    pub capabilities: &'static [Capability],
    /// Parent type whose properties come first.
    pub extends: Option<&'static TypeSchema>,
    /// Properties declared by this type itself.
    pub properties: &'static [&'static Property],
}

impl TypeSchema {
    /// All properties in serialization order: the root ancestor's first.
    pub fn properties(&self) -> Vec<&'static Property> {
        let mut lineage = vec![self.properties];
        let mut parent = self.extends;
        while let Some(schema) = parent {
            lineage.push(schema.properties);
            parent = schema.extends;
        }
        lineage.into_iter().rev().flatten().copied().collect()
    }

    pub fn property(&self, name: &str) -> Option<&'static Property> {
        self.lineage()
            .flat_map(|schema| schema.properties.iter())
            .copied()
            .find(|property| property.name == name)
    }

    pub fn property_for_map_key(&self, key: &str) -> Option<&'static Property> {
        self.lineage()
            .flat_map(|schema| schema.properties.iter())
            .copied()
            .find(|property| property.lang_map == Some(key))
    }

    pub fn satisfies(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Whether `key` is a declared property or natural-language map key.
    pub fn declares_key(&self, key: &str) -> bool {
        self.property(key).is_some() || self.property_for_map_key(key).is_some()
    }

    /// This type followed by its ancestors.
    fn lineage(&self) -> impl Iterator<Item = &TypeSchema> {
        std::iter::successors(Some(self), |schema| schema.extends)
    }
}

impl PartialEq for TypeSchema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.iri == other.iri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IRI_ONLY: &[Kind] = &[Kind::Iri];
    const TEXT: &[Kind] = &[
        Kind::Scalar(ScalarKind::String),
        Kind::Scalar(ScalarKind::LangString),
    ];
    const OBJECT_LINK: &[Kind] = &[
        Kind::Nested(Capability::Object),
        Kind::Nested(Capability::Link),
        Kind::Iri,
    ];

    const ID: Property = Property::functional("id", IRI_ONLY);
    const NAME: Property = Property::non_functional("name", TEXT).with_lang_map("nameMap");
    const ACTOR: Property = Property::non_functional("actor", OBJECT_LINK);

    static BASE: TypeSchema = TypeSchema {
        name: "Base",
        iri: "https://example.com/ns#Base",
        capabilities: &[Capability::Object],
        extends: None,
        properties: &[&ID, &NAME],
    };

    static CHILD: TypeSchema = TypeSchema {
        name: "Child",
        iri: "https://example.com/ns#Child",
        capabilities: &[Capability::Object, Capability::Image],
        extends: Some(&BASE),
        properties: &[&ACTOR],
    };

    #[test]
    fn properties_follow_lineage_order() {
        let names: Vec<&str> = CHILD.properties().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["id", "name", "actor"]);
    }

    #[test]
    fn property_lookup_walks_ancestors() {
        assert_eq!(CHILD.property("id").map(|p| p.name), Some("id"));
        assert_eq!(CHILD.property("actor").map(|p| p.name), Some("actor"));
        assert!(BASE.property("actor").is_none());
    }

    #[test]
    fn map_key_lookup() {
        assert_eq!(
            CHILD.property_for_map_key("nameMap").map(|p| p.name),
            Some("name")
        );
        assert!(CHILD.property_for_map_key("name").is_none());
        assert!(CHILD.declares_key("nameMap"));
        assert!(!CHILD.declares_key("contentMap"));
    }

    #[test]
    fn capability_checks() {
        assert!(CHILD.satisfies(Capability::Image));
        assert!(!BASE.satisfies(Capability::Image));
    }

    #[test]
    fn property_kind_queries() {
        assert!(ACTOR.allows(Kind::Iri));
        assert!(!NAME.allows(Kind::Iri));
        let caps: Vec<Capability> = ACTOR.capabilities().collect();
        assert_eq!(caps, vec![Capability::Object, Capability::Link]);
        let scalars: Vec<ScalarKind> = NAME.scalars().collect();
        assert_eq!(scalars, vec![ScalarKind::String, ScalarKind::LangString]);
        assert!(ID.is_iri_only());
        assert!(!ACTOR.is_iri_only());
    }

    #[test]
    fn kind_display() {
        assert_eq!(Kind::Nested(Capability::Link).to_string(), "Link object");
        assert_eq!(Kind::Iri.to_string(), "IRI");
        assert_eq!(Kind::Scalar(ScalarKind::DateTime).to_string(), "date-time");
    }
}
