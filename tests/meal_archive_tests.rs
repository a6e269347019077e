use food_tracker::domain::{decode, encode, DecodeError, Meal, MealError};
use serde_json::{json, Map, Value};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn spaghetti_is_constructed_and_encoded_verbatim() {
    let meal = Meal::new("Spaghetti", "June 1, 2024 at 5:00 PM").expect("valid meal");
    assert_eq!(meal.name(), "Spaghetti");
    assert_eq!(meal.creation_time(), "June 1, 2024 at 5:00 PM");

    let encoded = serde_json::to_string(&Value::Object(encode(&meal))).unwrap();
    assert_eq!(
        encoded,
        r#"{"name":"Spaghetti","creation time":"June 1, 2024 at 5:00 PM"}"#
    );
}

#[test]
fn empty_name_produces_no_meal() {
    assert_eq!(Meal::new("", "anytime"), Err(MealError::EmptyName));
}

#[test]
fn archive_without_name_produces_no_meal() {
    let map = object(json!({"creation time": "now"}));
    assert_eq!(decode(&map), Err(DecodeError::MissingName));
}

#[test]
fn archive_with_non_text_name_produces_no_meal() {
    for bad in [json!(true), json!(3.5), json!(["Soup"]), json!({"text": "Soup"})] {
        let mut map = Map::new();
        map.insert("name".into(), bad);
        map.insert("creation time".into(), json!("now"));
        assert!(
            matches!(decode(&map), Err(DecodeError::NameNotText { .. })),
            "{map:?} should not decode"
        );
    }
}

#[test]
fn decode_inverts_encode_for_constructed_meals() {
    let samples = [
        ("Pizza", "June 2, 2024 at 7:15:00 PM"),
        (" ", ""),
        ("Caprese salad", "free-form text"),
        ("Ramen 🍜", "2024-06-01T17:00:00"),
    ];
    for (name, time) in samples {
        let meal = Meal::new(name, time).unwrap();
        assert_eq!(decode(&encode(&meal)).as_ref(), Ok(&meal));
    }
}
