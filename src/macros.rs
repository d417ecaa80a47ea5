#[macro_export]
macro_rules! value {
    // Handle undefined
    (undefined) => {
        $crate::Value::Undefined
    };

    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $val:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($val));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any other expression
    ($other:expr) => {{
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Map, Number, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(undefined), Value::Undefined);
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_arrays() {
        assert_eq!(value!([]), Value::Array(vec![]));

        let arr = value!([1, 2, 3]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::Number(Number::Integer(1)));
                assert_eq!(vec[1], Value::Number(Number::Integer(2)));
                assert_eq!(vec[2], Value::Number(Number::Integer(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_value_macro_mixed_array() {
        let arr = value!(["x", null, undefined, [2, 3]]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 4);
                assert_eq!(vec[0], Value::String("x".to_string()));
                assert_eq!(vec[1], Value::Null);
                assert_eq!(vec[2], Value::Undefined);
                assert!(vec[3].is_array());
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_value_macro_objects() {
        assert_eq!(value!({}), Value::Object(Map::new()));

        let obj = value!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_value_macro_expression_fallback() {
        let name = "Bob".to_string();
        assert_eq!(value!(name), Value::String("Bob".to_string()));
        assert_eq!(value!(2 + 2), Value::Number(Number::Integer(4)));
        assert_eq!(value!(Option::<i32>::None), Value::Null);
    }
}
