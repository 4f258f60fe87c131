use appmarket_macros::value_object;
use std::collections::HashSet;

#[value_object]
struct Amount {
    value: i64,
}

#[value_object(debug = false)]
struct NonDebugVO(i32);

#[value_object]
enum Level {
    #[default]
    Low,
    High,
}

fn main() {
    let _ = format!("{:?}", Amount { value: 0 });

    let a = Amount::default();
    let b = a.clone();
    assert!(a == b);

    let mut set = HashSet::new();
    set.insert(Level::Low);
    set.insert(Level::High);
    set.insert(Level::default());
    assert_eq!(set.len(), 2);

    let _ = NonDebugVO(1);

    let json = serde_json::to_string(&Amount { value: 7 }).unwrap();
    let back: Amount = serde_json::from_str(&json).unwrap();
    assert!(back == Amount { value: 7 });
}
