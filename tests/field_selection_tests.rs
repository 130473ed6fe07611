//! Behavioral tests for sparse-fieldset selection
//!
//! Covers the properties clients rely on: unknown or empty field lists never
//! error, dotted paths route into nested sub-configs, and relations that
//! share a config node are each selectable on their own.

use serde_json::json;
use std::sync::Arc;
use vitrine::prelude::*;

fn org_config() -> SerializeConfig {
    let country = Arc::new(SerializeConfig::new().leaf("code").leaf("name"));
    let address = Arc::new(
        SerializeConfig::new()
            .leaf("city")
            .leaf("zip")
            .nested("country", country),
    );
    SerializeConfig::new()
        .leaf("id")
        .leaf("name")
        .nested("address", address)
}

#[test]
fn empty_selection_is_an_empty_config() {
    let selected = org_config().select::<&str>(&[]);
    assert!(selected.is_empty());
    assert_eq!(selected.apply(&json!({"name": "acme"})), json!({}));
}

#[test]
fn unknown_paths_never_error() {
    let selected = org_config().select(&["ghost", "address.ghost", "ghost.deeper.still"]);
    // "address.ghost" keeps the relation key with nothing inside it
    let trimmed = selected.apply(&json!({
        "name": "acme",
        "address": {"city": "oslo"},
    }));
    assert_eq!(trimmed, json!({"address": {}}));
}

#[test]
fn two_level_dotted_paths_route_to_the_deepest_config() {
    let selected = org_config().select(&["name", "address.country.code"]);
    let trimmed = selected.apply(&json!({
        "id": "x",
        "name": "acme",
        "address": {
            "city": "oslo",
            "zip": "0150",
            "country": {"code": "NO", "name": "Norway"},
        },
    }));

    assert_eq!(
        trimmed,
        json!({
            "name": "acme",
            "address": {"country": {"code": "NO"}},
        })
    );
}

#[test]
fn whole_relation_selection_keeps_every_sub_field() {
    let selected = org_config().select(&["address"]);
    let trimmed = selected.apply(&json!({
        "name": "acme",
        "address": {"city": "oslo", "zip": "0150", "country": {"code": "NO"}},
    }));

    assert_eq!(trimmed["address"]["city"], "oslo");
    assert_eq!(trimmed["address"]["zip"], "0150");
    assert_eq!(trimmed["address"]["country"]["code"], "NO");
}

#[test]
fn sibling_relations_sharing_a_config_are_both_selectable() {
    // Both relations point at the same node; each gets its own selection,
    // the identity memo only breaks loops along a single descent
    let place = Arc::new(SerializeConfig::new().leaf("city").leaf("zip"));
    let root = SerializeConfig::new()
        .nested("home", place.clone())
        .nested("work", place);

    let selected = root.select(&["home.city", "work.city"]);
    assert_eq!(selected.fields.len(), 2);

    let trimmed = selected.apply(&json!({
        "home": {"city": "oslo", "zip": "0150"},
        "work": {"city": "bergen", "zip": "5003"},
    }));
    assert_eq!(
        trimmed,
        json!({
            "home": {"city": "oslo"},
            "work": {"city": "bergen"},
        })
    );
}

#[test]
fn selection_composes_with_relation_arrays() {
    let tag = Arc::new(SerializeConfig::new().leaf("label"));
    let config = SerializeConfig::new().leaf("name").nested("tags", tag);

    let selected = config.select(&["name", "tags.label"]);
    let trimmed = selected.apply(&json!({
        "name": "acme",
        "tags": [
            {"label": "red", "weight": 1},
            {"label": "blue", "weight": 2},
        ],
    }));

    assert_eq!(
        trimmed,
        json!({"name": "acme", "tags": [{"label": "red"}, {"label": "blue"}]})
    );
}
