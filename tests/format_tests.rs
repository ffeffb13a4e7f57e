//! Line-format conformance: the documented examples and edge cases.

use pyson::{from_str, to_string, Error, PysonType, Record, Value, Writer, WriterOptions};

#[test]
fn test_decode_int_line() {
    let record = Record::from_line("count:int:42").unwrap();
    assert_eq!(record.name(), "count");
    assert_eq!(record.value(), &Value::Int(42));
}

#[test]
fn test_decode_list_line() {
    let record = Record::from_line("tags:list:red(*)green(*)blue").unwrap();
    assert_eq!(record.value(), &Value::from(vec!["red", "green", "blue"]));
}

#[test]
fn test_decode_bad_int() {
    let err = Record::from_line("bad:int:notanumber").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_list_payload_encoding() {
    assert_eq!(
        Value::from(vec!["a", "b", "c"]).value_as_string(),
        "a(*)b(*)c"
    );
    assert_eq!(Value::List(vec![]).value_as_string(), "");
}

#[test]
fn test_empty_payload_decodes_to_single_empty_element() {
    assert_eq!(Value::from_pyson_list(""), Value::List(vec![String::new()]));

    let records = from_str("empty:list:\n").unwrap();
    assert_eq!(records[0].value(), &Value::List(vec![String::new()]));
}

#[test]
fn test_empty_list_written_reads_back_as_one_empty_element() {
    let text = to_string(&[Record::new("e", Vec::<String>::new())]).unwrap();
    assert_eq!(text, "e:list:\n");
    let back = from_str(&text).unwrap();
    assert_ne!(back[0].value(), &Value::List(vec![]));
    assert_eq!(back[0].value().list_or_empty(), &[String::new()]);
}

#[test]
fn test_int_or_zero_on_string() {
    let value = Value::from("123");
    assert_eq!(value.int_or_zero(), 0);
    assert_eq!(value.get_int(), None);
}

#[test]
fn test_defaults_do_not_prove_mismatch() {
    let zero = Value::Int(0);
    assert_eq!(zero.int_or_zero(), 0);
    assert_eq!(zero.get_int(), Some(0));
}

#[test]
fn test_wrong_type_carries_both_tags() {
    let err = Value::List(vec![]).try_str().unwrap_err();
    assert_eq!(
        err,
        Error::WrongType {
            expected: PysonType::Str,
            actual: PysonType::List
        }
    );
}

#[test]
fn test_equality_is_tag_sensitive() {
    assert_ne!(Value::Int(1), Value::Float(1.0));
    assert_ne!(Value::from("1"), Value::Int(1));
    assert_ne!(Value::from(""), Value::List(vec![]));
    assert_eq!(Value::from(vec!["a"]), Value::List(vec!["a".to_string()]));
}

#[test]
fn test_integer_extremes() {
    for n in [i64::MIN, -1, 0, i32::MAX as i64 + 1, i64::MAX] {
        let line = Record::new("n", n).to_line();
        assert_eq!(Record::from_line(&line).unwrap().value(), &Value::Int(n));
    }
    assert!(Record::from_line("n:int:9223372036854775808").is_err());
}

#[test]
fn test_float_forms() {
    for (text, expected) in [
        ("1", 1.0),
        ("-0.5", -0.5),
        ("2.5e3", 2500.0),
        ("inf", f64::INFINITY),
    ] {
        let record = Record::from_line(&format!("f:float:{}", text)).unwrap();
        assert_eq!(record.value().get_float(), Some(expected));
    }
    let whole = Record::new("f", 3.0).to_line();
    assert_eq!(Record::from_line(&whole).unwrap().value(), &Value::Float(3.0));
}

#[test]
fn test_type_token_is_case_sensitive() {
    assert!(Record::from_line("x:INT:1").is_err());
    assert!(Record::from_line("x:String:abc").is_err());
}

#[test]
fn test_separator_in_element_is_misread() {
    let mut lenient = Writer::with_options(Vec::new(), WriterOptions::new().with_strict_lists(false));
    lenient
        .write_record(&Record::new("l", vec!["a(*)b", "c"]))
        .unwrap();
    let text = String::from_utf8(lenient.into_inner()).unwrap();
    let back = from_str(&text).unwrap();
    assert_eq!(back[0].value(), &Value::from(vec!["a", "b", "c"]));
}

#[test]
fn test_display_matches_encoding() {
    let record = Record::new("pi", 3.25);
    assert_eq!(record.to_string(), "pi:float:3.25");
    assert_eq!(record.value().to_string(), "3.25");
}
