use ld_bind::vocab::{self, props, Create};
use ld_bind::{BindError, Capability, Kind, Options, Property, Registry, ScalarKind, Vocabulary};
use pretty_assertions::assert_eq;
use serde_json::json;

const LISTING: Property = Property::non_functional(
    "listing",
    &[Kind::Nested(Capability::Object), Kind::Iri],
);
const PRICE: Property = Property::functional("price", &[Kind::Scalar(ScalarKind::Float)]);

ld_bind::vocabulary! {
    @namespace "https://market.example/ns#";

    /// A classified ad.
    pub struct Listing as LISTING_TYPE: [Object] extends vocab::OBJECT {
        PRICE,
    }

    pub struct Catalog as CATALOG_TYPE: [Object] extends vocab::OBJECT {
        LISTING,
    }
}

fn market_registry() -> Registry {
    let mut registry = Registry::with_types(vocab::ALL);
    registry.register(&LISTING_TYPE).register(&CATALOG_TYPE);
    registry
}

#[test]
fn custom_types_resolve_through_a_custom_registry() {
    let input = json!({
        "type": "Catalog",
        "listing": [
            {"type": "Listing", "name": "Bike", "price": 120.5},
            "https://market.example/listings/2"
        ]
    });
    let registry = market_registry();
    let catalog = Catalog::from_map_with(input.as_object().unwrap(), &registry, &Options::default()).unwrap();

    let first = catalog.get(&LISTING, 0).unwrap();
    let listing = Listing::from_record(first.as_record().unwrap().clone()).unwrap();
    assert_eq!(listing.first(&PRICE).and_then(|c| c.as_f64()), Some(120.5));
    assert!(catalog.get(&LISTING, 1).unwrap().is_iri());
    assert_eq!(ld_bind::to_value(&catalog).unwrap(), input);
}

#[test]
fn builtin_registry_does_not_know_custom_types() {
    let input = json!({"type": "Catalog", "listing": {"type": "Listing", "price": 3}});
    let catalog: Catalog = ld_bind::from_value(&input).unwrap();
    assert!(catalog.first(&LISTING).unwrap().is_unknown());
    assert_eq!(ld_bind::to_value(&catalog).unwrap(), input);
}

#[test]
fn decode_any_with_custom_registry() {
    let registry = market_registry();
    let value = json!({"type": "Listing", "price": 9});
    let record = ld_bind::decode_any_with(&value, &registry, &Options::default())
        .unwrap()
        .unwrap();
    assert_eq!(record.schema().iri, "https://market.example/ns#Listing");
    assert!(ld_bind::decode_any(&value).unwrap().is_none());
}

#[test]
fn strict_iris_fail_the_whole_document() {
    let mut options = Options::new();
    options.set_strict_iris(true);
    let input = json!({
        "type": "Create",
        "object": {"type": "Note", "id": "not a valid iri"}
    });
    let err = Create::from_map_with(input.as_object().unwrap(), Registry::builtin(), &options).unwrap_err();
    assert!(matches!(err, BindError::InvalidIri { .. }));

    let lenient: Create = ld_bind::from_value(&input).unwrap();
    let note = lenient.first(&props::OBJECT).and_then(|c| c.as_record()).unwrap();
    assert!(note.first(&props::ID).unwrap().is_unknown());
    assert_eq!(ld_bind::to_value(&lenient).unwrap(), input);
}

#[test]
fn depth_limit_applies_to_deep_extensions() {
    let mut options = Options::new();
    options.set_max_depth(3);
    let input = json!({"type": "Create", "ext": {"a": {"b": {"c": 1}}}});
    let err = Create::from_map_with(input.as_object().unwrap(), Registry::builtin(), &options).unwrap_err();
    assert!(matches!(err, BindError::DepthExceeded { limit: 3 }));
}
