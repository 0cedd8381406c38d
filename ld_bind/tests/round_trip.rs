use ld_bind::vocab::{props, Add, Note, Person};
use ld_bind::{Capability, Cell, Iri, Record, Vocabulary};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn round_trip<T: Vocabulary>(input: Value) -> Value {
    let decoded: T = ld_bind::from_value(&input).unwrap();
    ld_bind::to_value(&decoded).unwrap()
}

fn iris(record: &Record, property: &ld_bind::Property) -> Vec<String> {
    record
        .values(property)
        .iter()
        .filter_map(|cell| cell.as_iri().map(|iri| iri.as_str().to_string()))
        .collect()
}

#[test]
fn add_scenario() {
    let input = json!({
        "type": "Add",
        "actor": "https://example.com/alice",
        "object": {"type": "Note", "content": "hi"},
        "to": ["https://example.com/bob", "https://example.com/carol"]
    });
    let add: Add = ld_bind::from_value(&input).unwrap();

    assert_eq!(add.len(&props::ACTOR), 1);
    let actor = add.get(&props::ACTOR, 0).unwrap();
    assert!(actor.is_iri());
    assert_eq!(actor.as_iri().map(Iri::as_str), Some("https://example.com/alice"));

    assert_eq!(add.len(&props::OBJECT), 1);
    let object = add.get(&props::OBJECT, 0).unwrap();
    assert!(object.is_nested(Capability::Object));
    let note = Note::from_record(object.as_record().unwrap().clone()).unwrap();
    assert_eq!(note.first(&props::CONTENT).and_then(Cell::as_str), Some("hi"));

    assert_eq!(
        iris(&add, &props::TO),
        vec!["https://example.com/bob", "https://example.com/carol"]
    );

    assert_eq!(ld_bind::to_value(&add).unwrap(), input);
}

#[test]
fn round_trip_is_idempotent() {
    let input = json!({
        "type": "Person",
        "id": "https://social.example/users/alice",
        "name": "Alice",
        "nameMap": {"en": "Alice", "ja": "アリス"},
        "summary": {"@value": "Hello", "@language": "en"},
        "icon": {"type": "Image", "url": "https://social.example/a.png", "mediaType": "image/png"},
        "published": "2024-03-01T12:30:00Z",
        "sensitive": false,
        "inbox": "https://social.example/users/alice/inbox",
        "outbox": {"type": "OrderedCollection", "totalItems": 3},
        "followers": "https://social.example/users/alice/followers",
        "preferredUsername": "alice",
        "endpoints": {"sharedInbox": "https://social.example/inbox"},
        "tag": [
            {"type": "Mention", "href": "https://example.com/bob", "name": "@bob"},
            {"type": "Hashtag", "name": "#rust"}
        ],
        "attachment": {"type": "PropertyValue", "name": "Site", "value": "x"},
        "discoverable": true
    });
    let once = round_trip::<Person>(input.clone());
    assert_eq!(once, input);
    assert_eq!(round_trip::<Person>(once.clone()), once);
}

#[test]
fn durations_floats_and_counts_round_trip() {
    let input = json!({
        "type": "Place",
        "name": "Fresno Area",
        "latitude": 36.75,
        "longitude": 119.7667,
        "radius": 15,
        "altitude": 10,
        "units": "miles",
        "duration": "PT1H30M"
    });
    assert_eq!(round_trip::<ld_bind::vocab::Place>(input.clone()), input);
}

#[test]
fn literals_round_trip_as_written() {
    let input = json!({
        "type": "Question",
        "published": "2015-01-01T06:00:00+00:00",
        "startTime": "2015-01-01T06:00:00.000Z",
        "endTime": "2015-01-01t08:30:00z",
        "updated": "2014-12-31T23:00:00.5-08:00",
        "duration": "PT0H30M",
        "closed": "2015-01-02T00:00:00+00:00"
    });
    let once = round_trip::<ld_bind::vocab::Question>(input.clone());
    assert_eq!(once, input);
    assert_eq!(round_trip::<ld_bind::vocab::Question>(once.clone()), once);

    let question: ld_bind::vocab::Question = ld_bind::from_value(&input).unwrap();
    assert!(question.first(&props::END_TIME).and_then(Cell::as_date_time).is_some());
    assert!(question.first(&props::CLOSED).and_then(Cell::as_date_time).is_some());
}

#[test]
fn non_canonical_durations_round_trip() {
    for text in ["P0D", "PT1.50S", "P01D", "PT0H30M", "-P1W"] {
        let input = json!({"type": "Video", "duration": text});
        let video: ld_bind::vocab::Video = ld_bind::from_value(&input).unwrap();
        assert!(video.first(&props::DURATION).and_then(Cell::as_duration).is_some(), "{}", text);
        assert_eq!(ld_bind::to_value(&video).unwrap(), input);
    }
}

#[test]
fn large_integers_in_float_properties_round_trip() {
    let input = json!({"type": "Place", "altitude": 9007199254740993u64, "radius": 0.10});
    assert_eq!(round_trip::<ld_bind::vocab::Place>(input.clone()), input);
}

#[test]
fn malformed_lang_map_is_replaced_by_a_real_one() {
    let mut note: Note = ld_bind::from_value(&json!({"type": "Note", "nameMap": "oops"})).unwrap();
    assert_eq!(note.unknown("nameMap"), Some(&json!("oops")));

    note.insert_lang(&props::NAME, "en", "Hi").unwrap();
    assert!(note.unknown("nameMap").is_none());
    assert_eq!(
        ld_bind::to_value(&note).unwrap(),
        json!({"type": "Note", "nameMap": {"en": "Hi"}})
    );
}

#[test]
fn type_tag_is_inserted() {
    let add = Add::new();
    assert_eq!(ld_bind::to_value(&add).unwrap(), json!({"type": "Add"}));

    let decoded: Add = ld_bind::from_value(&json!({"actor": "https://example.com/alice"})).unwrap();
    assert_eq!(ld_bind::to_value(&decoded).unwrap()["type"], json!("Add"));
}

#[test]
fn collapse_law() {
    let mut add = Add::new();
    add.append_iri(&props::TO, "https://example.com/bob").unwrap();
    assert_eq!(
        ld_bind::to_value(&add).unwrap()["to"],
        json!("https://example.com/bob")
    );

    add.append_iri(&props::TO, "https://example.com/carol").unwrap();
    assert_eq!(
        ld_bind::to_value(&add).unwrap()["to"],
        json!(["https://example.com/bob", "https://example.com/carol"])
    );

    add.remove(&props::TO, 0).unwrap();
    assert_eq!(
        ld_bind::to_value(&add).unwrap()["to"],
        json!("https://example.com/carol")
    );

    add.remove(&props::TO, 0).unwrap();
    assert!(ld_bind::to_value(&add).unwrap().get("to").is_none());
}

#[test]
fn object_capability_wins_over_link() {
    let add: Add = ld_bind::from_value(&json!({
        "type": "Add",
        "object": {"type": ["Mention", "Article"], "name": "both"}
    }))
    .unwrap();
    let object = add.first(&props::OBJECT).unwrap();
    assert!(object.is_nested(Capability::Object));
    assert!(!object.is_nested(Capability::Link));
    assert_eq!(object.as_record().unwrap().type_name(), "Article");
}

#[test]
fn untyped_map_passes_through() {
    let value = json!({"href": "https://example.com/x", "nested": {"deep": [1, 2.5, null, "s"]}});
    let add: Add = ld_bind::from_value(&json!({"type": "Add", "object": value.clone()})).unwrap();
    assert_eq!(add.first(&props::OBJECT).and_then(Cell::as_unknown), Some(&value));
    assert_eq!(ld_bind::to_value(&add).unwrap()["object"], value);
}

#[test]
fn lang_map_is_independent_of_its_property() {
    let mut note = Note::new();
    note.insert_lang(&props::NAME, "en", "Hello").unwrap();
    note.append_string(&props::NAME, "Bonjour").unwrap();

    let json = ld_bind::to_value(&note).unwrap();
    assert_eq!(json["name"], json!("Bonjour"));
    assert_eq!(json["nameMap"], json!({"en": "Hello"}));

    note.clear(&props::NAME);
    let json = ld_bind::to_value(&note).unwrap();
    assert!(json.get("name").is_none());
    assert_eq!(json["nameMap"], json!({"en": "Hello"}));
}

#[test]
fn extension_keys_are_preserved() {
    let add: Add = ld_bind::from_value(&json!({"type": "Add", "unrecognizedKey": 42})).unwrap();
    assert_eq!(add.unknown("unrecognizedKey"), Some(&json!(42)));
    assert_eq!(
        ld_bind::to_value(&add).unwrap(),
        json!({"unrecognizedKey": 42, "type": "Add"})
    );
}

#[test]
fn context_is_dropped() {
    let add: Add = ld_bind::from_value(&json!({
        "@context": "https://www.w3.org/ns/activitystreams",
        "type": "Add",
        "object": {"@context": {"ex": "https://example.com/ns#"}, "type": "Note"}
    }))
    .unwrap();
    assert!(add.unknown("@context").is_none());
    let json = ld_bind::to_value(&add).unwrap();
    assert!(json.get("@context").is_none());
    assert!(json["object"].get("@context").is_none());
}

#[test]
fn decode_any_dispatches_inbox_payloads() {
    let record = ld_bind::decode_any(&json!({
        "type": "Follow",
        "actor": "https://example.com/alice",
        "object": "https://example.com/bob"
    }))
    .unwrap()
    .unwrap();
    assert_eq!(record.type_name(), "Follow");
    assert_eq!(iris(&record, &props::OBJECT), vec!["https://example.com/bob"]);
}

#[test]
fn builds_nested_objects() {
    let mut note = Note::new();
    note.set_iri(&props::ID, "https://example.com/notes/1").unwrap();
    note.set_string(&props::CONTENT, "hi").unwrap();

    let mut add = Add::new();
    add.append_iri(&props::ACTOR, "https://example.com/alice").unwrap();
    add.append_object(&props::OBJECT, note).unwrap();

    assert_eq!(
        add.first(&props::OBJECT).and_then(Cell::reference).map(Iri::as_str),
        Some("https://example.com/notes/1")
    );
    assert_eq!(
        ld_bind::to_value(&add).unwrap(),
        json!({
            "type": "Add",
            "actor": "https://example.com/alice",
            "object": {"type": "Note", "id": "https://example.com/notes/1", "content": "hi"}
        })
    );
}
