use std::collections::HashMap;
use neox_core::kind::{type_name, HasKind, ValueKind};
use neox_core::traits::FromNeoxValue;
use neox_core::value::{NeoxBytes, Point2D, Point3D};
use neox_core::NeoxError;
use neo4rs::BoltType;

#[test]
fn test_from_value_integer() {
    let val = BoltType::Integer(neo4rs::BoltInteger { value: 42 });
    let res = i64::from_value(val).unwrap();
    assert_eq!(res, 42);
}

#[test]
fn test_from_value_string() {
    let val = BoltType::String(neo4rs::BoltString { value: "hello".to_string() });
    let res = String::from_value(val).unwrap();
    assert_eq!(res, "hello");
}

#[test]
fn test_from_value_bool() {
    let val = BoltType::Boolean(neo4rs::BoltBoolean { value: true });
    let res = bool::from_value(val).unwrap();
    assert!(res);
}

#[test]
fn test_from_value_f32() {
    let val = BoltType::Float(neo4rs::BoltFloat::new(65.25));
    let res = f32::from_value(val).unwrap();
    assert_eq!(res, 65.25_f32);
}

#[test]
fn test_from_value_list() {
    let val = BoltType::List(neo4rs::BoltList {
        value: vec![
            BoltType::Integer(neo4rs::BoltInteger { value: 1 }),
            BoltType::Integer(neo4rs::BoltInteger { value: 2 }),
        ],
    });
    let res = Vec::<i64>::from_value(val).unwrap();
    assert_eq!(res, vec![1, 2]);
}

#[test]
fn test_from_value_option() {
    let val = BoltType::Null(neo4rs::BoltNull);
    let res = Option::<i64>::from_value(val).unwrap();
    assert_eq!(res, None);

    let val = BoltType::Integer(neo4rs::BoltInteger { value: 42 });
    let res = Option::<i64>::from_value(val).unwrap();
    assert_eq!(res, Some(42));
}

#[test]
fn test_type_mismatch_error() {
    let val = BoltType::String(neo4rs::BoltString { value: "oops".to_string() });
    let err = i64::from_value(val).unwrap_err();
    match &err {
        NeoxError::TypeMismatch { expected, got, .. } => {
            assert_eq!(expected, "Integer");
            assert_eq!(got, "String");
        }
        other => panic!("expected TypeMismatch, got: {other}"),
    }
}

#[test]
fn test_hashmap_from_value() {
    let mut map = neo4rs::BoltMap::new();
    map.put(
        neo4rs::BoltString { value: "a".to_string() },
        BoltType::Integer(neo4rs::BoltInteger { value: 1 }),
    );
    map.put(
        neo4rs::BoltString { value: "b".to_string() },
        BoltType::Integer(neo4rs::BoltInteger { value: 2 }),
    );

    let val = BoltType::Map(map);
    let res = HashMap::<String, i64>::from_value(val).unwrap();
    assert_eq!(res.get("a"), Some(&1));
    assert_eq!(res.get("b"), Some(&2));
}

#[test]
fn test_hashmap_type_mismatch() {
    let val = BoltType::Integer(neo4rs::BoltInteger { value: 42 });
    let err = HashMap::<String, i64>::from_value(val).unwrap_err();
    match &err {
        NeoxError::TypeMismatch { expected, got, .. } => {
            assert_eq!(expected, "Map");
            assert_eq!(got, "Integer");
        }
        other => panic!("expected TypeMismatch, got: {other}"),
    }
}

// --- Integer widths ---

#[test]
fn test_from_value_u32() {
    let val = BoltType::Integer(neo4rs::BoltInteger { value: 100 });
    let res = u32::from_value(val).unwrap();
    assert_eq!(res, 100u32);
}

#[test]
fn test_from_value_i16() {
    let val = BoltType::Integer(neo4rs::BoltInteger { value: -300 });
    let res = i16::from_value(val).unwrap();
    assert_eq!(res, -300i16);
}

#[test]
fn test_from_value_u8_out_of_range() {
    let val = BoltType::Integer(neo4rs::BoltInteger { value: 256 });
    let err = u8::from_value(val).unwrap_err();
    assert!(matches!(err, NeoxError::Mapping(_)), "got: {err}");
}

#[test]
fn test_from_value_unsigned_rejects_negative() {
    let val = BoltType::Integer(neo4rs::BoltInteger { value: -1 });
    assert!(u64::from_value(val).is_err());
}

// --- Point2D / Point3D ---

#[test]
fn test_point2d_from_value() {
    let val = BoltType::Point2D(neo4rs::BoltPoint2D {
        sr_id: neo4rs::BoltInteger::new(4326),
        x: neo4rs::BoltFloat::new(1.0),
        y: neo4rs::BoltFloat::new(2.0),
    });
    let p = Point2D::from_value(val).unwrap();
    assert_eq!(p, Point2D { sr_id: 4326, x: 1.0, y: 2.0 });
}

#[test]
fn test_point3d_from_value() {
    let val = BoltType::Point3D(neo4rs::BoltPoint3D {
        sr_id: neo4rs::BoltInteger::new(4979),
        x: neo4rs::BoltFloat::new(1.0),
        y: neo4rs::BoltFloat::new(2.0),
        z: neo4rs::BoltFloat::new(3.0),
    });
    let p = Point3D::from_value(val).unwrap();
    assert_eq!(p.sr_id, 4979);
    assert_eq!(p.z, 3.0);
}

#[test]
fn test_point2d_type_mismatch() {
    let val = BoltType::Integer(neo4rs::BoltInteger { value: 1 });
    let err = Point2D::from_value(val).unwrap_err();
    match &err {
        NeoxError::TypeMismatch { expected, got, .. } => {
            assert_eq!(expected, "Point2D");
            assert_eq!(got, "Integer");
        }
        other => panic!("expected TypeMismatch, got: {other}"),
    }
}

// --- Bytes ---

#[test]
fn test_neox_bytes_from_value() {
    let val = BoltType::Bytes(neo4rs::BoltBytes::new(bytes::Bytes::from_static(b"hello")));
    let b = NeoxBytes::from_value(val).unwrap();
    assert_eq!(b.0, b"hello");
}

#[test]
fn test_neox_bytes_rejects_list() {
    let val = BoltType::List(neo4rs::BoltList {
        value: vec![BoltType::Integer(neo4rs::BoltInteger { value: 1 })],
    });
    let err = NeoxBytes::from_value(val).unwrap_err();
    match &err {
        NeoxError::TypeMismatch { expected, got, .. } => {
            assert_eq!(expected, "Bytes");
            assert_eq!(got, "List");
        }
        other => panic!("expected TypeMismatch, got: {other}"),
    }
}

// --- Kinds ---

#[test]
fn test_kind_of_values() {
    assert_eq!(ValueKind::of(&BoltType::from("x")), ValueKind::String);
    assert_eq!(ValueKind::of(&BoltType::from(1)), ValueKind::Integer);
    assert_eq!(ValueKind::of(&BoltType::Float(neo4rs::BoltFloat::new(1.5))), ValueKind::Float);
    assert_eq!(ValueKind::of(&BoltType::Null(neo4rs::BoltNull)), ValueKind::Null);
    assert_eq!(type_name(&BoltType::from(true)), "Boolean");
}

#[test]
fn test_static_kinds() {
    assert_eq!(<u32 as HasKind>::KIND, ValueKind::Integer);
    assert_eq!(<f32 as HasKind>::KIND, ValueKind::Float);
    assert_eq!(<Vec<String> as HasKind>::KIND, ValueKind::List);
    assert_eq!(<Option<bool> as HasKind>::KIND, ValueKind::Boolean);
    assert!(<Option<bool> as HasKind>::NULLABLE);
    assert!(!<bool as HasKind>::NULLABLE);
    assert_eq!(<BoltType as HasKind>::KIND, ValueKind::Any);
}

fn expected_kind<T: FromNeoxValue + HasKind>(wrong: BoltType) -> (String, String) {
    match T::from_value(wrong) {
        Err(NeoxError::TypeMismatch { expected, context, .. }) => (expected, context),
        Err(other) => panic!("expected TypeMismatch, got: {other}"),
        Ok(_) => panic!("conversion accepted a value of the wrong kind"),
    }
}

#[test]
fn test_mismatch_names_the_declared_kind() {
    let null = || BoltType::Null(neo4rs::BoltNull);
    let cases = [
        (expected_kind::<u16>(null()), <u16 as HasKind>::KIND),
        (expected_kind::<f32>(null()), <f32 as HasKind>::KIND),
        (expected_kind::<NeoxBytes>(null()), <NeoxBytes as HasKind>::KIND),
        (expected_kind::<chrono::NaiveDate>(null()), <chrono::NaiveDate as HasKind>::KIND),
        (expected_kind::<Vec<i64>>(null()), <Vec<i64> as HasKind>::KIND),
        (expected_kind::<HashMap<String, i64>>(null()), <HashMap<String, i64> as HasKind>::KIND),
        (
            expected_kind::<chrono::DateTime<chrono::FixedOffset>>(null()),
            ValueKind::DateTime,
        ),
    ];
    for ((expected, context), kind) in cases {
        assert_eq!(expected, kind.name());
        assert!(!context.is_empty());
    }

    let (_, context) = expected_kind::<u16>(BoltType::from("x"));
    assert_eq!(context, "u16");
}

#[test]
fn test_integer_overflow_names_target_type() {
    let err = u8::from_value(BoltType::from(300)).unwrap_err();
    match &err {
        NeoxError::Mapping(msg) => {
            assert!(msg.contains("u8"), "got: {msg}");
            assert!(msg.contains("300"), "got: {msg}");
        }
        other => panic!("expected Mapping, got: {other}"),
    }
}

#[test]
fn test_kind_accepts() {
    assert!(ValueKind::Integer.accepts(ValueKind::Integer));
    assert!(!ValueKind::Float.accepts(ValueKind::Integer));
    assert!(!ValueKind::Float.accepts(ValueKind::String));
    assert!(ValueKind::Any.accepts(ValueKind::Node));
    assert!(ValueKind::DateTime.accepts(ValueKind::DateTimeZoneId));
    assert!(!ValueKind::DateTimeZoneId.accepts(ValueKind::DateTime));
}

// --- Error context chaining ---

#[test]
fn test_error_with_context() {
    let err = NeoxError::type_mismatch("Integer", "String", "age");
    let ctx = err.with_context("User::age");
    let msg = ctx.to_string();
    assert!(msg.contains("User::age"));
    assert!(msg.contains("type mismatch"));
}

#[test]
fn test_invalid_destination_error() {
    let err = NeoxError::invalid_destination("Integer");
    assert!(err.is_invalid_destination());
    assert!(err.to_string().contains("expected a struct, got Integer"));
}
