use super::props;

crate::vocabulary! {
    @namespace "https://www.w3.org/ns/activitystreams#";

    // === Core ===

    /// Root of every non-link type.
    pub struct Object as OBJECT: [Object] {
        props::ID,
        props::TYPE,
        props::ALTITUDE,
        props::ATTACHMENT,
        props::ATTRIBUTED_TO,
        props::AUDIENCE,
        props::BCC,
        props::BTO,
        props::CC,
        props::CONTENT,
        props::CONTEXT,
        props::DURATION,
        props::END_TIME,
        props::GENERATOR,
        props::ICON,
        props::IMAGE,
        props::IN_REPLY_TO,
        props::LOCATION,
        props::MEDIA_TYPE,
        props::NAME,
        props::PREVIEW,
        props::PUBLISHED,
        props::REPLIES,
        props::START_TIME,
        props::SUMMARY,
        props::TAG,
        props::TO,
        props::UPDATED,
        props::URL,
        props::LIKES,
        props::SHARES,
        props::SENSITIVE,
    }

    /// A qualified reference to another resource.
    pub struct Link as LINK: [Link] {
        props::ID,
        props::TYPE,
        props::HREF,
        props::HREFLANG,
        props::MEDIA_TYPE,
        props::NAME,
        props::PREVIEW,
        props::REL,
        props::HEIGHT,
        props::WIDTH,
    }

    pub struct Activity as ACTIVITY: [Object] extends OBJECT {
        props::ACTOR,
        props::OBJECT,
        props::TARGET,
        props::RESULT,
        props::ORIGIN,
        props::INSTRUMENT,
    }

    /// An activity without an `object`.
    pub struct IntransitiveActivity as INTRANSITIVE_ACTIVITY: [Object] extends OBJECT {
        props::ACTOR,
        props::TARGET,
        props::RESULT,
        props::ORIGIN,
        props::INSTRUMENT,
    }

    pub struct Collection as COLLECTION: [Object, Collection] extends OBJECT {
        props::TOTAL_ITEMS,
        props::CURRENT,
        props::FIRST,
        props::LAST,
        props::ITEMS,
    }

    pub struct OrderedCollection as ORDERED_COLLECTION: [Object, Collection, OrderedCollection]
        extends COLLECTION {
        props::ORDERED_ITEMS,
    }

    pub struct CollectionPage as COLLECTION_PAGE: [Object, Collection, CollectionPage]
        extends COLLECTION {
        props::PART_OF,
        props::NEXT,
        props::PREV,
    }

    pub struct OrderedCollectionPage as ORDERED_COLLECTION_PAGE:
        [Object, Collection, CollectionPage, OrderedCollection] extends COLLECTION_PAGE {
        props::ORDERED_ITEMS,
        props::START_INDEX,
    }

    // === Activities ===

    pub struct Accept as ACCEPT: [Object] extends ACTIVITY {}
    pub struct TentativeAccept as TENTATIVE_ACCEPT: [Object] extends ACCEPT {}
    pub struct Add as ADD: [Object] extends ACTIVITY {}
    pub struct Arrive as ARRIVE: [Object] extends INTRANSITIVE_ACTIVITY {}
    pub struct Create as CREATE: [Object] extends ACTIVITY {}
    pub struct Delete as DELETE: [Object] extends ACTIVITY {}
    pub struct Follow as FOLLOW: [Object] extends ACTIVITY {}
    pub struct Ignore as IGNORE: [Object] extends ACTIVITY {}
    pub struct Join as JOIN: [Object] extends ACTIVITY {}
    pub struct Leave as LEAVE: [Object] extends ACTIVITY {}
    pub struct Like as LIKE: [Object] extends ACTIVITY {}
    pub struct Offer as OFFER: [Object] extends ACTIVITY {}
    pub struct Invite as INVITE: [Object] extends OFFER {}
    pub struct Reject as REJECT: [Object] extends ACTIVITY {}
    pub struct TentativeReject as TENTATIVE_REJECT: [Object] extends REJECT {}
    pub struct Remove as REMOVE: [Object] extends ACTIVITY {}
    pub struct Undo as UNDO: [Object] extends ACTIVITY {}
    pub struct Update as UPDATE: [Object] extends ACTIVITY {}
    pub struct View as VIEW: [Object] extends ACTIVITY {}
    pub struct Listen as LISTEN: [Object] extends ACTIVITY {}
    pub struct Read as READ: [Object] extends ACTIVITY {}
    pub struct Move as MOVE: [Object] extends ACTIVITY {}
    pub struct Travel as TRAVEL: [Object] extends INTRANSITIVE_ACTIVITY {}
    pub struct Announce as ANNOUNCE: [Object] extends ACTIVITY {}
    pub struct Block as BLOCK: [Object] extends IGNORE {}
    pub struct Flag as FLAG: [Object] extends ACTIVITY {}
    pub struct Dislike as DISLIKE: [Object] extends ACTIVITY {}

    /// A poll. Either `oneOf` or `anyOf` holds the choices.
    pub struct Question as QUESTION: [Object] extends INTRANSITIVE_ACTIVITY {
        props::ONE_OF,
        props::ANY_OF,
        props::CLOSED,
    }

    // === Actors ===

    pub struct Application as APPLICATION: [Object] extends OBJECT {
        props::INBOX,
        props::OUTBOX,
        props::FOLLOWING,
        props::FOLLOWERS,
        props::LIKED,
        props::STREAMS,
        props::PREFERRED_USERNAME,
        props::ENDPOINTS,
    }

    pub struct Group as GROUP: [Object] extends OBJECT {
        props::INBOX,
        props::OUTBOX,
        props::FOLLOWING,
        props::FOLLOWERS,
        props::LIKED,
        props::STREAMS,
        props::PREFERRED_USERNAME,
        props::ENDPOINTS,
    }

    pub struct Organization as ORGANIZATION: [Object] extends OBJECT {
        props::INBOX,
        props::OUTBOX,
        props::FOLLOWING,
        props::FOLLOWERS,
        props::LIKED,
        props::STREAMS,
        props::PREFERRED_USERNAME,
        props::ENDPOINTS,
    }

    pub struct Person as PERSON: [Object] extends OBJECT {
        props::INBOX,
        props::OUTBOX,
        props::FOLLOWING,
        props::FOLLOWERS,
        props::LIKED,
        props::STREAMS,
        props::PREFERRED_USERNAME,
        props::ENDPOINTS,
    }

    pub struct Service as SERVICE: [Object] extends OBJECT {
        props::INBOX,
        props::OUTBOX,
        props::FOLLOWING,
        props::FOLLOWERS,
        props::LIKED,
        props::STREAMS,
        props::PREFERRED_USERNAME,
        props::ENDPOINTS,
    }

    // === Objects ===

    pub struct Relationship as RELATIONSHIP: [Object] extends OBJECT {
        props::SUBJECT,
        props::OBJECT,
        props::RELATIONSHIP,
    }

    pub struct Article as ARTICLE: [Object] extends OBJECT {}
    pub struct Document as DOCUMENT: [Object] extends OBJECT {}
    pub struct Audio as AUDIO: [Object] extends DOCUMENT {}
    pub struct Image as IMAGE: [Object, Image] extends DOCUMENT {}
    pub struct Video as VIDEO: [Object] extends DOCUMENT {}
    pub struct Note as NOTE: [Object] extends OBJECT {}
    pub struct Page as PAGE: [Object] extends DOCUMENT {}
    pub struct Event as EVENT: [Object] extends OBJECT {}

    pub struct Place as PLACE: [Object] extends OBJECT {
        props::ACCURACY,
        props::LATITUDE,
        props::LONGITUDE,
        props::RADIUS,
        props::UNITS,
    }

    pub struct Profile as PROFILE: [Object] extends OBJECT {
        props::DESCRIBES,
    }

    /// Stands in for a deleted object.
    pub struct Tombstone as TOMBSTONE: [Object] extends OBJECT {
        props::FORMER_TYPE,
        props::DELETED,
    }

    // === Links ===

    pub struct Mention as MENTION: [Link] extends LINK {}
}
