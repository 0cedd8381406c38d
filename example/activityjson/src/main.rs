use ld_bind::vocab::{props, Add, Note, Person};
use ld_bind::{BindError, Capability, Cell, Vocabulary};
use tracing_subscriber::EnvFilter;

const INBOUND: &str = r#"{
    "@context": "https://www.w3.org/ns/activitystreams",
    "type": "Add",
    "actor": "https://mastodon.example/users/alice",
    "object": {"type": "Note", "content": "hi"},
    "target": {"type": "OrderedCollection", "id": "https://mastodon.example/users/alice/featured"},
    "to": ["https://mastodon.example/users/bob", "https://mastodon.example/users/carol"],
    "discoverable": true
}"#;

fn main() -> Result<(), BindError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .compact()
        .init();

    // Decode an inbound activity
    let add: Add = ld_bind::from_str(INBOUND)?;
    for cell in add.values(&props::ACTOR) {
        if let Some(iri) = cell.reference() {
            println!("actor: {}", iri);
        }
    }
    if let Some(note) = add.first(&props::OBJECT).and_then(|c| c.as_nested(Capability::Object)) {
        let content = note.first(&props::CONTENT).and_then(Cell::as_str);
        println!("object: {} {:?}", note.type_name(), content);
    }
    println!("recipients: {}", add.len(&props::TO));
    println!("extensions: {:?}", add.unknown_entries().keys().collect::<Vec<_>>());

    println!("\n=== Re-serialized Add ===");
    println!("{}", ld_bind::to_string_pretty(&add)?);

    // Build a Person actor
    let mut person = Person::new();
    person.set_iri(&props::ID, "https://mastodon.example/users/alice")?;
    person.append_string(&props::NAME, "Alice")?;
    person.insert_lang(&props::NAME, "ja", "アリス")?;
    person.set_string(&props::PREFERRED_USERNAME, "alice")?;
    person.set_iri(&props::INBOX, "https://mastodon.example/users/alice/inbox")?;
    person.set_iri(&props::OUTBOX, "https://mastodon.example/users/alice/outbox")?;
    person.set_unknown("discoverable", serde_json::Value::Bool(true))?;

    println!("\n=== Person Actor ===");
    println!("{}", ld_bind::to_string_pretty(&person)?);

    // Build a Note
    let mut note = Note::new();
    note.set_iri(&props::ID, "https://mastodon.example/users/alice/statuses/1")?;
    note.append_string(&props::CONTENT, "<p>Hello, ActivityPub world!</p>")?;
    note.append_object(&props::ATTRIBUTED_TO, person.into_record())?;
    note.append_iri(&props::TO, "https://www.w3.org/ns/activitystreams#Public")?;

    println!("\n=== Note ===");
    println!("{}", ld_bind::to_string_pretty(&note)?);

    // Dispatch without knowing the type up front
    let inbound: serde_json::Value = serde_json::from_str(INBOUND)?;
    if let Some(record) = ld_bind::decode_any(&inbound)? {
        println!("\ndecode_any resolved `{}`", record.type_name());
    }
    Ok(())
}
