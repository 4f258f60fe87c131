use appmarket_macros::value_object;

// 没有合法空值的值对象：关闭 Default，手写 Default 不应与派生冲突
#[value_object(default = false)]
#[serde(try_from = "String")]
struct Tag(String);

impl TryFrom<String> for Tag {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            Err("empty tag".to_string())
        } else {
            Ok(Self(value))
        }
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self("untagged".to_string())
    }
}

#[value_object(debug = false, default = false)]
struct Secret {
    inner: String,
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret(..)")
    }
}

fn main() {
    assert_eq!(Tag::default().0, "untagged");
    assert!(serde_json::from_str::<Tag>("\"\"").is_err());
    assert!(serde_json::from_str::<Tag>("\"red\"").is_ok());

    let s = Secret {
        inner: "hunter2".to_string(),
    };
    assert_eq!(format!("{:?}", s), "Secret(..)");
    assert_eq!(s.clone().inner, "hunter2");
}
