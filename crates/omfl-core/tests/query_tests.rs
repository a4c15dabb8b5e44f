use omfl_core::{parse, Document, Kind, OmflError};

fn weather() -> Document {
    let doc = parse(
        r#"
# Forecast settings
days = 3
frequency = 10

[location]
city = "Saint Petersburg"
latitude = 59.94
longitude = 30.31
exact = false

[display.table]
columns = ["time", "temp", "wind"]
widths = [[8, 10], [6]]
"#,
    );
    assert!(doc.valid(), "{:?}", doc.error());
    doc
}

// ============================================================================
// Dotted lookup
// ============================================================================

#[test]
fn get_top_level_key() {
    assert_eq!(weather().get("days").unwrap().as_integer().unwrap(), 3);
}

#[test]
fn get_dotted_path() {
    let doc = weather();
    assert_eq!(
        doc.get("location.city").unwrap().as_string().unwrap(),
        "Saint Petersburg"
    );
    assert_eq!(doc.get("display.table.columns").unwrap().kind(), Kind::Array);
}

#[test]
fn get_chained_lookups() {
    let doc = weather();
    let table = doc.get("display").unwrap().get("table").unwrap();
    assert_eq!(table.key(), "table");
    assert!(table.is_section());
    assert_eq!(table.get("columns").unwrap()[0].as_string().unwrap(), "time");
}

#[test]
fn get_missing_key_fails() {
    let doc = weather();
    let err = doc.get("nope").unwrap_err();
    assert!(matches!(err, OmflError::MissingKey { ref key, .. } if key == "nope"));
}

#[test]
fn get_missing_dotted_segment_fails() {
    let doc = parse("[a.b]\nx = true\n");
    assert!(matches!(
        doc.get("a.c"),
        Err(OmflError::MissingKey { ref key, .. }) if key == "c"
    ));
}

#[test]
fn get_dotted_path_through_leaf_fails() {
    let doc = weather();
    assert!(doc.get("days.value").is_err());
}

#[test]
fn get_plain_name_on_leaf_returns_leaf() {
    let doc = weather();
    let days = doc.get("days").unwrap();
    let again = days.get("anything").unwrap();
    assert_eq!(again.as_integer().unwrap(), 3);
    assert_eq!(again.key(), "days");
}

#[test]
fn get_empty_segment_fails() {
    let doc = weather();
    assert!(doc.get("location..city").is_err());
    assert!(doc.get("").is_err());
}

// ============================================================================
// Typed accessors
// ============================================================================

#[test]
fn typed_accessors_match_kind() {
    let doc = weather();
    let location = doc.get("location").unwrap();

    assert!(location.get("latitude").unwrap().is_float());
    assert_eq!(location.get("latitude").unwrap().as_float().unwrap(), 59.94);
    assert!(location.get("exact").unwrap().is_bool());
    assert!(!location.get("exact").unwrap().as_bool().unwrap());
    assert!(location.get("city").unwrap().is_string());
    assert!(doc.get("frequency").unwrap().is_integer());
    assert!(doc.get("display.table.widths").unwrap().is_array());
}

#[test]
fn typed_accessor_mismatch_fails() {
    let doc = weather();
    let city = doc.get("location.city").unwrap();
    let err = city.as_integer().unwrap_err();
    assert!(matches!(
        err,
        OmflError::TypeMismatch {
            expected: Kind::Integer,
            found: Kind::String
        }
    ));
    assert_eq!(err.to_string(), "type mismatch: expected integer, found string");
}

#[test]
fn integer_is_not_widened_to_float() {
    let doc = weather();
    assert!(doc.get("days").unwrap().as_float().is_err());
}

#[test]
fn or_default_accessors_never_fail() {
    let doc = weather();
    let city = doc.get("location.city").unwrap();
    assert_eq!(city.as_integer_or_default(-1), -1);
    assert_eq!(city.as_float_or_default(0.5), 0.5);
    assert!(city.as_bool_or_default(true));
    assert_eq!(city.as_string_or_default("x"), "Saint Petersburg");

    let days = doc.get("days").unwrap();
    assert_eq!(days.as_integer_or_default(-1), 3);
    assert_eq!(days.as_string_or_default("fallback"), "fallback");
}

#[test]
fn section_accessors() {
    let doc = weather();
    let location = doc.get("location").unwrap();
    assert_eq!(location.kind(), Kind::Section);
    assert_eq!(location.len(), 4);
    let keys: Vec<&str> = location.keys().collect();
    assert_eq!(keys, ["city", "exact", "latitude", "longitude"]);
    assert!(location.as_integer().is_err());
}

// ============================================================================
// Array indexing
// ============================================================================

#[test]
fn index_in_range() {
    let doc = parse("arr = [1,2]\n");
    let arr = doc.get("arr").unwrap();
    assert_eq!(arr[0].as_integer().unwrap(), 1);
    assert_eq!(arr[1].as_integer().unwrap(), 2);
}

#[test]
fn index_past_end_is_undefined_sentinel() {
    let doc = parse("arr = [1,2]\n");
    let arr = doc.get("arr").unwrap();
    assert_eq!(arr[5].kind(), Kind::Undefined);
    assert!(arr[2].is_undefined());
    assert_eq!(arr[2].key(), "");
    assert_eq!(arr[2].as_integer_or_default(7), 7);
}

#[test]
fn probe_until_undefined() {
    let doc = weather();
    let columns = doc.get("display.table.columns").unwrap();
    let mut names = Vec::new();
    let mut i = 0;
    while !columns[i].is_undefined() {
        names.push(columns[i].as_string().unwrap());
        i += 1;
    }
    assert_eq!(names, ["time", "temp", "wind"]);
}

#[test]
fn nested_index() {
    let doc = weather();
    let widths = doc.get("display.table.widths").unwrap();
    assert_eq!(widths[0][1].as_integer().unwrap(), 10);
    assert_eq!(widths[1][0].as_integer().unwrap(), 6);
    assert!(widths[1][1].is_undefined());
    assert!(widths[2].is_undefined());
}

#[test]
fn at_on_non_array_fails() {
    let doc = weather();
    let err = doc.get("days").unwrap().at(0).unwrap_err();
    assert!(matches!(err, OmflError::NotArray(Kind::Integer)));
}

#[test]
#[should_panic(expected = "not array-accessible")]
fn index_operator_on_non_array_panics() {
    let doc = weather();
    let _ = &doc.get("location").unwrap()[0];
}

#[test]
fn iterate_array_elements() {
    let doc = weather();
    let columns = doc.get("display.table.columns").unwrap();
    assert_eq!(columns.len(), 3);
    let names: Vec<&str> = columns.iter().map(|n| n.as_string().unwrap()).collect();
    assert_eq!(names, ["time", "temp", "wind"]);
    assert_eq!(columns.as_array().unwrap().len(), 3);
}

// ============================================================================
// Sharing
// ============================================================================

#[test]
fn document_is_shareable_across_threads() {
    let doc = std::sync::Arc::new(weather());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let doc = std::sync::Arc::clone(&doc);
            std::thread::spawn(move || doc.get("days").unwrap().as_integer().unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}
