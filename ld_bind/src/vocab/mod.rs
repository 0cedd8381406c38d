//! The ActivityStreams 2.0 catalog.
//!
//! Each type comes as a schema static (`NOTE`) and a typed newtype (`Note`).
//! Property descriptors live in [`props`].

pub mod props;
mod types;

pub use types::*;

use crate::schema::TypeSchema;

/// Every schema in the catalog, registered by [`Registry::builtin`](crate::Registry::builtin).
pub static ALL: &[&TypeSchema] = &[
    &OBJECT,
    &LINK,
    &ACTIVITY,
    &INTRANSITIVE_ACTIVITY,
    &COLLECTION,
    &ORDERED_COLLECTION,
    &COLLECTION_PAGE,
    &ORDERED_COLLECTION_PAGE,
    &ACCEPT,
    &TENTATIVE_ACCEPT,
    &ADD,
    &ARRIVE,
    &CREATE,
    &DELETE,
    &FOLLOW,
    &IGNORE,
    &JOIN,
    &LEAVE,
    &LIKE,
    &OFFER,
    &INVITE,
    &REJECT,
    &TENTATIVE_REJECT,
    &REMOVE,
    &UNDO,
    &UPDATE,
    &VIEW,
    &LISTEN,
    &READ,
    &MOVE,
    &TRAVEL,
    &ANNOUNCE,
    &BLOCK,
    &FLAG,
    &DISLIKE,
    &QUESTION,
    &APPLICATION,
    &GROUP,
    &ORGANIZATION,
    &PERSON,
    &SERVICE,
    &RELATIONSHIP,
    &ARTICLE,
    &DOCUMENT,
    &AUDIO,
    &IMAGE,
    &VIDEO,
    &NOTE,
    &PAGE,
    &EVENT,
    &PLACE,
    &PROFILE,
    &TOMBSTONE,
    &MENTION,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Capability;
    use std::collections::HashSet;

    #[test]
    fn catalog_names_are_unique() {
        let names: HashSet<&str> = ALL.iter().map(|schema| schema.name).collect();
        assert_eq!(names.len(), ALL.len());
        assert_eq!(ALL.len(), 54);
    }

    #[test]
    fn every_type_reaches_id_and_type() {
        for schema in ALL {
            assert!(schema.property("id").is_some(), "{}", schema.name);
            assert!(schema.property("type").is_some(), "{}", schema.name);
        }
    }

    #[test]
    fn iris_use_the_activitystreams_namespace() {
        assert_eq!(NOTE.iri, "https://www.w3.org/ns/activitystreams#Note");
        assert_eq!(
            ORDERED_COLLECTION_PAGE.iri,
            "https://www.w3.org/ns/activitystreams#OrderedCollectionPage"
        );
    }

    #[test]
    fn inheritance_chain() {
        let names: Vec<&str> = BLOCK.properties().iter().map(|p| p.name).collect();
        assert_eq!(&names[..2], &["id", "type"]);
        assert!(names.contains(&"actor"));
        assert!(QUESTION.property("object").is_none());
        assert!(QUESTION.property("oneOf").is_some());
        assert!(IMAGE.satisfies(Capability::Image));
        assert!(MENTION.property("href").is_some());
    }
}
