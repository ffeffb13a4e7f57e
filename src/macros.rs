/// Builds a [`Value`](crate::Value), or a `Vec<Record>` from a brace block.
///
/// ```rust
/// use pyson::{pyson, Value};
///
/// assert_eq!(pyson!(42), Value::Int(42));
/// assert_eq!(pyson!(["a", "b"]), Value::from(vec!["a", "b"]));
///
/// let records = pyson!({
///     "width": 640,
///     "ratio": 1.5,
///     "offset": (-3),
///     "tags": ["x", "y"]
/// });
/// assert_eq!(records[2].to_line(), "offset:int:-3");
/// ```
#[macro_export]
macro_rules! pyson {
    // Empty list
    ([]) => {
        $crate::Value::List(::std::vec::Vec::new())
    };

    // List of strings
    ([ $($elem:expr),* $(,)? ]) => {
        $crate::Value::List(::std::vec![$(::std::string::String::from($elem)),*])
    };

    // Empty record block
    ({}) => {
        ::std::vec::Vec::<$crate::Record>::new()
    };

    // Record block, in order
    ({ $($name:literal : $value:tt),* $(,)? }) => {
        ::std::vec![$($crate::Record::new($name, $crate::pyson!($value))),*]
    };

    // Any scalar convertible into a Value
    ($value:expr) => {
        $crate::Value::from($value)
    };
}
