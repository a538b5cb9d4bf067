use crate::{ByteOrder, PrimitiveType};

#[test]
fn sizes() {
    assert_eq!(PrimitiveType::Char.size(), 1);
    assert_eq!(PrimitiveType::Uint8.size(), 1);
    assert_eq!(PrimitiveType::Int16.size(), 2);
    assert_eq!(PrimitiveType::Uint32.size(), 4);
    assert_eq!(PrimitiveType::Float.size(), 4);
    assert_eq!(PrimitiveType::Int64.size(), 8);
    assert_eq!(PrimitiveType::Double.size(), 8);
}

#[test]
fn from_name_accepts_every_schema_name() {
    for p in PrimitiveType::ALL {
        assert_eq!(PrimitiveType::from_name(p.name()), Some(p));
    }
}

#[test]
fn from_name_rejects_unknown() {
    assert_eq!(PrimitiveType::from_name("uint128"), None);
    assert_eq!(PrimitiveType::from_name("UINT32"), None);
    assert_eq!(PrimitiveType::from_name(""), None);
}

#[test]
fn signedness() {
    assert!(PrimitiveType::Int32.is_signed());
    assert!(PrimitiveType::Double.is_signed());
    assert!(!PrimitiveType::Uint64.is_signed());
    assert!(!PrimitiveType::Char.is_signed());

    assert!(PrimitiveType::Float.is_floating_point());
    assert!(!PrimitiveType::Int64.is_floating_point());
}

#[test]
fn serde_uses_schema_names() {
    let json = serde_json::to_string(&PrimitiveType::Uint16).unwrap();
    assert_eq!(json, r#""uint16""#);

    let order: ByteOrder = serde_json::from_str(r#""big_endian""#).unwrap();
    assert_eq!(order, ByteOrder::BigEndian);
}

#[test]
fn byte_order_labels() {
    assert_eq!(ByteOrder::default(), ByteOrder::LittleEndian);
    assert_eq!(ByteOrder::LittleEndian.to_string(), "le");
    assert_eq!(ByteOrder::BigEndian.to_string(), "be");
}
