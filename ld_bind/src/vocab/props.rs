//! ActivityStreams 2.0 properties, plus the ActivityPub actor properties and
//! `sensitive`.
//!
//! Kinds are listed in decode priority order. Nested capabilities always
//! come first, and a bare IRI is the last resort.

use crate::schema::{Capability, Kind, Property, ScalarKind};

const AS_OBJECT: Kind = Kind::Nested(Capability::Object);
const AS_LINK: Kind = Kind::Nested(Capability::Link);
const AS_COLLECTION: Kind = Kind::Nested(Capability::Collection);
const AS_COLLECTION_PAGE: Kind = Kind::Nested(Capability::CollectionPage);
const AS_ORDERED_COLLECTION: Kind = Kind::Nested(Capability::OrderedCollection);
const AS_IMAGE: Kind = Kind::Nested(Capability::Image);
const IRI: Kind = Kind::Iri;

const STRING: Kind = Kind::Scalar(ScalarKind::String);
const LANG_STRING: Kind = Kind::Scalar(ScalarKind::LangString);
const FLOAT: Kind = Kind::Scalar(ScalarKind::Float);
const BOOLEAN: Kind = Kind::Scalar(ScalarKind::Boolean);
const DATE_TIME: Kind = Kind::Scalar(ScalarKind::DateTime);
const DURATION_LITERAL: Kind = Kind::Scalar(ScalarKind::Duration);
const MEDIA_TYPE_LITERAL: Kind = Kind::Scalar(ScalarKind::MediaType);
const NON_NEGATIVE_INTEGER: Kind = Kind::Scalar(ScalarKind::NonNegativeInteger);
const BCP47: Kind = Kind::Scalar(ScalarKind::Bcp47);
const RFC5988: Kind = Kind::Scalar(ScalarKind::Rfc5988);
const UNITS_LITERAL: Kind = Kind::Scalar(ScalarKind::Units);

const IRI_ONLY: &[Kind] = &[IRI];
const OBJECT_OR_LINK: &[Kind] = &[AS_OBJECT, AS_LINK, IRI];
const OBJECT_REF: &[Kind] = &[AS_OBJECT, IRI];
const IMAGE_OR_LINK: &[Kind] = &[AS_IMAGE, AS_LINK, IRI];
const PAGE_OR_LINK: &[Kind] = &[AS_COLLECTION_PAGE, AS_LINK, IRI];
const COLLECTION_OR_LINK: &[Kind] = &[AS_COLLECTION, AS_LINK, IRI];
const COLLECTION_REF: &[Kind] = &[AS_COLLECTION, IRI];
const ORDERED_COLLECTION_REF: &[Kind] = &[AS_ORDERED_COLLECTION, IRI];
const TEXT: &[Kind] = &[STRING, LANG_STRING];
const TYPE_NAMES: &[Kind] = &[STRING, IRI];
const INSTANT: &[Kind] = &[DATE_TIME];
const DECIMAL: &[Kind] = &[FLOAT];
const COUNT: &[Kind] = &[NON_NEGATIVE_INTEGER];

// === Core ===

pub const ID: Property = Property::functional("id", IRI_ONLY);
pub const TYPE: Property = Property::non_functional("type", TYPE_NAMES);

// === Object ===

pub const ALTITUDE: Property = Property::functional("altitude", DECIMAL);
pub const ATTACHMENT: Property = Property::non_functional("attachment", OBJECT_OR_LINK);
pub const ATTRIBUTED_TO: Property = Property::non_functional("attributedTo", OBJECT_OR_LINK);
pub const AUDIENCE: Property = Property::non_functional("audience", OBJECT_OR_LINK);
pub const BCC: Property = Property::non_functional("bcc", OBJECT_OR_LINK);
pub const BTO: Property = Property::non_functional("bto", OBJECT_OR_LINK);
pub const CC: Property = Property::non_functional("cc", OBJECT_OR_LINK);
pub const CONTENT: Property = Property::non_functional("content", TEXT).with_lang_map("contentMap");
pub const CONTEXT: Property = Property::non_functional("context", OBJECT_OR_LINK);
pub const DURATION: Property = Property::functional("duration", &[DURATION_LITERAL]);
pub const END_TIME: Property = Property::functional("endTime", INSTANT);
pub const GENERATOR: Property = Property::non_functional("generator", OBJECT_OR_LINK);
pub const ICON: Property = Property::non_functional("icon", IMAGE_OR_LINK);
pub const IMAGE: Property = Property::non_functional("image", IMAGE_OR_LINK);
pub const IN_REPLY_TO: Property = Property::non_functional("inReplyTo", OBJECT_OR_LINK);
pub const LOCATION: Property = Property::non_functional("location", OBJECT_OR_LINK);
pub const MEDIA_TYPE: Property = Property::functional("mediaType", &[MEDIA_TYPE_LITERAL]);
pub const NAME: Property = Property::non_functional("name", TEXT).with_lang_map("nameMap");
pub const PREVIEW: Property = Property::non_functional("preview", OBJECT_OR_LINK);
pub const PUBLISHED: Property = Property::functional("published", &[DATE_TIME, IRI]);
pub const REPLIES: Property = Property::functional("replies", COLLECTION_REF);
pub const START_TIME: Property = Property::functional("startTime", INSTANT);
pub const SUMMARY: Property = Property::non_functional("summary", TEXT).with_lang_map("summaryMap");
pub const TAG: Property = Property::non_functional("tag", OBJECT_OR_LINK);
pub const TO: Property = Property::non_functional("to", OBJECT_OR_LINK);
pub const UPDATED: Property = Property::functional("updated", INSTANT);
pub const URL: Property = Property::non_functional("url", &[AS_LINK, IRI]);
pub const LIKES: Property = Property::functional("likes", COLLECTION_REF);
pub const SHARES: Property = Property::functional("shares", COLLECTION_REF);
pub const SENSITIVE: Property = Property::functional("sensitive", &[BOOLEAN]);

// === Link ===

pub const HREF: Property = Property::functional("href", IRI_ONLY);
pub const HREFLANG: Property = Property::functional("hreflang", &[BCP47]);
pub const REL: Property = Property::non_functional("rel", &[RFC5988]);
pub const HEIGHT: Property = Property::functional("height", COUNT);
pub const WIDTH: Property = Property::functional("width", COUNT);

// === Activity ===

pub const ACTOR: Property = Property::non_functional("actor", OBJECT_OR_LINK);
pub const OBJECT: Property = Property::non_functional("object", OBJECT_OR_LINK);
pub const TARGET: Property = Property::non_functional("target", OBJECT_OR_LINK);
pub const RESULT: Property = Property::non_functional("result", OBJECT_OR_LINK);
pub const ORIGIN: Property = Property::non_functional("origin", OBJECT_OR_LINK);
pub const INSTRUMENT: Property = Property::non_functional("instrument", OBJECT_OR_LINK);

// === Question ===

pub const ONE_OF: Property = Property::non_functional("oneOf", OBJECT_OR_LINK);
pub const ANY_OF: Property = Property::non_functional("anyOf", OBJECT_OR_LINK);
pub const CLOSED: Property =
    Property::non_functional("closed", &[AS_OBJECT, AS_LINK, DATE_TIME, BOOLEAN, IRI]);

// === Collections ===

pub const TOTAL_ITEMS: Property = Property::functional("totalItems", COUNT);
pub const CURRENT: Property = Property::functional("current", PAGE_OR_LINK);
pub const FIRST: Property = Property::functional("first", PAGE_OR_LINK);
pub const LAST: Property = Property::functional("last", PAGE_OR_LINK);
pub const ITEMS: Property = Property::non_functional("items", OBJECT_OR_LINK);
pub const ORDERED_ITEMS: Property = Property::non_functional("orderedItems", OBJECT_OR_LINK);
pub const PART_OF: Property = Property::functional("partOf", COLLECTION_OR_LINK);
pub const NEXT: Property = Property::functional("next", PAGE_OR_LINK);
pub const PREV: Property = Property::functional("prev", PAGE_OR_LINK);
pub const START_INDEX: Property = Property::functional("startIndex", COUNT);

// === Place ===

pub const ACCURACY: Property = Property::functional("accuracy", DECIMAL);
pub const LATITUDE: Property = Property::functional("latitude", DECIMAL);
pub const LONGITUDE: Property = Property::functional("longitude", DECIMAL);
pub const RADIUS: Property = Property::functional("radius", DECIMAL);
pub const UNITS: Property = Property::functional("units", &[UNITS_LITERAL, IRI]);

// === Profile, Relationship, Tombstone ===

pub const DESCRIBES: Property = Property::functional("describes", OBJECT_REF);
pub const SUBJECT: Property = Property::functional("subject", OBJECT_OR_LINK);
pub const RELATIONSHIP: Property = Property::non_functional("relationship", OBJECT_REF);
pub const FORMER_TYPE: Property = Property::non_functional("formerType", &[AS_OBJECT, STRING, IRI]);
pub const DELETED: Property = Property::functional("deleted", INSTANT);

// === ActivityPub actors ===

pub const INBOX: Property = Property::functional("inbox", ORDERED_COLLECTION_REF);
pub const OUTBOX: Property = Property::functional("outbox", ORDERED_COLLECTION_REF);
pub const FOLLOWING: Property = Property::functional("following", COLLECTION_REF);
pub const FOLLOWERS: Property = Property::functional("followers", COLLECTION_REF);
pub const LIKED: Property = Property::functional("liked", COLLECTION_REF);
pub const STREAMS: Property = Property::non_functional("streams", COLLECTION_REF);
pub const PREFERRED_USERNAME: Property =
    Property::functional("preferredUsername", TEXT).with_lang_map("preferredUsernameMap");
pub const ENDPOINTS: Property = Property::functional("endpoints", OBJECT_REF);
