use std::sync::Arc;

use crate::data_type::DataType;

/// Represents a single scalar value stored in a table cell.
///
/// This enum wraps all supported cell types into a single type that can be
/// passed around the query operations. It includes support for SQL `NULL`
/// values. Only nullable integers and strings exist, which keeps the type
/// hashable and usable directly as a join key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Represents an empty or missing value.
    Null,
    /// A 64-bit signed integer value.
    Int(i64),
    /// A UTF-8 string value, wrapped in an [Arc] for cheap cloning when rows
    /// are copied into result tables.
    Text(Arc<str>),
}

impl Value {
    /// Returns `true` if the value is [Value::Null].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the inner integer value if this is a [Value::Int].
    /// Otherwise, returns `None`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns a reference to the inner string slice if this is a [Value::Text].
    /// Otherwise, returns `None`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the logical [DataType] corresponding to this value.
    ///
    /// Returns `None` if the value is [Value::Null]: a standalone NULL is
    /// untyped until it is placed in a [crate::column::Column].
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Self::Null => None,
            Self::Int(_) => Some(DataType::Int),
            Self::Text(_) => Some(DataType::Text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::DataType;

    #[test]
    fn test_is_null() {
        assert!(Value::Null.is_null());
        assert!(!Value::Int(1).is_null());
        assert!(!Value::Text("x".into()).is_null());
    }

    #[test]
    fn test_as_int() {
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Null.as_int(), None);
        assert_eq!(Value::Text("42".into()).as_int(), None);
    }

    #[test]
    fn test_as_str() {
        let v = Value::Text("hello".into());

        assert_eq!(v.as_str(), Some("hello"));
        assert_eq!(Value::Null.as_str(), None);
        assert_eq!(Value::Int(1).as_str(), None);
    }

    #[test]
    fn test_data_type() {
        assert_eq!(Value::Null.data_type(), None);
        assert_eq!(Value::Int(1).data_type(), Some(DataType::Int));
        assert_eq!(Value::Text("x".into()).data_type(), Some(DataType::Text));
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::Null, Value::Null);
        assert_eq!(Value::Int(10), Value::Int(10));
        assert_ne!(Value::Int(10), Value::Int(20));
        assert_eq!(Value::Text("abc".into()), Value::Text("abc".into()));
        assert_ne!(Value::Text("abc".into()), Value::Text("abd".into()));
    }

    #[test]
    fn test_usable_as_hash_key() {
        use std::collections::HashMap;

        let mut map: HashMap<Value, usize> = HashMap::new();
        map.insert(Value::Int(1), 10);
        map.insert(Value::Text("a".into()), 20);

        assert_eq!(map.get(&Value::Int(1)), Some(&10));
        assert_eq!(map.get(&Value::Text("a".into())), Some(&20));
        assert_eq!(map.get(&Value::Int(2)), None);
    }
}
