use pyson::{pyson, to_string, Record, Value};

#[test]
fn test_pyson_macro_numbers() {
    assert_eq!(pyson!(42), Value::Int(42));
    assert_eq!(pyson!(-123), Value::Int(-123));
    assert_eq!(pyson!(3.5), Value::Float(3.5));
    assert_eq!(pyson!(i64::MAX), Value::Int(i64::MAX));
}

#[test]
fn test_pyson_macro_strings() {
    assert_eq!(pyson!("hello world"), Value::Str("hello world".to_string()));
    assert_eq!(pyson!(""), Value::Str(String::new()));
    let owned = String::from("owned");
    assert_eq!(pyson!(owned), Value::from("owned"));
}

#[test]
fn test_pyson_macro_lists() {
    assert_eq!(pyson!([]), Value::List(vec![]));
    assert_eq!(
        pyson!(["red", "green", "blue"]),
        Value::from(vec!["red", "green", "blue"])
    );
    let dynamic = format!("item-{}", 2);
    assert_eq!(
        pyson!(["item-1", dynamic]),
        Value::from(vec!["item-1", "item-2"])
    );
}

#[test]
fn test_pyson_macro_record_block() {
    let records = pyson!({
        "host": "localhost",
        "port": 8080,
        "load": 0.75,
        "features": ["auth", "logging"],
        "delta": (-1)
    });

    assert_eq!(records.len(), 5);
    assert_eq!(records[1], Record::new("port", 8080));
    assert_eq!(
        to_string(&records).unwrap(),
        "host:str:localhost\nport:int:8080\nload:float:0.75\nfeatures:list:auth(*)logging\ndelta:int:-1\n"
    );
}

#[test]
fn test_pyson_macro_empty_block() {
    let records: Vec<Record> = pyson!({});
    assert!(records.is_empty());
}
