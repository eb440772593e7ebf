use cqlmapper::{InstanceMapper, Mapper, Primitive, Record, Value};
use pretty_assertions::assert_eq;

#[derive(Debug, Default, Record)]
#[allow(non_snake_case)]
struct Inner {
    Inner: String,
}

#[derive(Debug, Default, Record)]
#[allow(non_snake_case)]
struct Outer {
    Inner: Inner,
    Outer: String,
}

#[derive(Debug, Default, Record)]
#[allow(non_snake_case)]
struct Nested {
    Outer: Outer,
    #[tag(cqlm = "leaf_id")]
    Id: u64,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Address {
    street: String,
    zip: Option<u32>,
}

/// Holds a record under a name other than its type: one column.
#[derive(Debug, Default, Record)]
#[allow(non_snake_case)]
struct Holder {
    Id: u64,
    Home: Address,
    Payload: Vec<u8>,
}

#[test]
fn embedded_fields_are_flattened() {
    let mapper = Mapper::underscore();
    let mut record = Outer {
        Inner: Inner {
            Inner: "inner".to_string(),
        },
        Outer: "outer".to_string(),
    };

    let instance = InstanceMapper::new(&mapper, &mut record).unwrap();
    assert_eq!(instance.table_name(), "outer");
    assert_eq!(instance.column_names(), ["inner", "outer"]);
    assert_eq!(
        instance.field_values(),
        [Value::from("inner"), Value::from("outer")]
    );
    assert_eq!(
        instance.select_query(&[]),
        "SELECT inner, outer FROM outer"
    );

    let columns = instance.columns();
    assert!(columns[0].embedded);
    assert!(!columns[1].embedded);
}

#[test]
fn embedded_slots_point_into_nested_record() {
    let mapper = Mapper::underscore();
    let mut record = Outer::default();

    {
        let mut instance = InstanceMapper::new(&mapper, &mut record).unwrap();
        let mut slots = instance.field_addresses();
        slots[0].assign(Value::from("Test")).unwrap();
        slots[1].assign(Value::from("Outer")).unwrap();
    }

    assert_eq!(record.Inner.Inner, "Test");
    assert_eq!(record.Outer, "Outer");
}

#[test]
fn embedding_recurses() {
    let mapper = Mapper::raw();
    let mut record = Nested::default();
    record.Outer.Inner.Inner = "deep".to_string();
    record.Id = 3;

    let instance = InstanceMapper::new(&mapper, &mut record).unwrap();
    assert_eq!(instance.column_names(), ["Inner", "Outer", "leaf_id"]);
    assert_eq!(
        instance.field_values(),
        [Value::from("deep"), Value::from(""), Value::U64(3)]
    );

    let ordinals: Vec<_> = instance.columns().iter().map(|c| c.ordinal).collect();
    assert_eq!(ordinals, [0, 1, 2]);
}

#[test]
fn record_under_another_name_is_one_column() {
    let mapper = Mapper::underscore();
    let mut record = Holder {
        Id: 1,
        Home: Address {
            street: "Main".to_string(),
            zip: None,
        },
        Payload: vec![1, 2, 3],
    };

    let instance = InstanceMapper::new(&mapper, &mut record).unwrap();
    assert_eq!(instance.column_names(), ["id", "home", "payload"]);
    assert!(instance.columns().iter().all(|column| !column.embedded));
    assert_eq!(
        instance.field_values(),
        [
            Value::U64(1),
            Value::Record(vec![Value::from("Main"), Value::Null]),
            Value::Bytes(vec![1, 2, 3]),
        ]
    );
    assert_eq!(
        instance.insert_query(),
        "INSERT INTO holder (id, home, payload) VALUES(?, ?, ?)"
    );
}

#[test]
fn record_column_slot_loads_record_value() {
    let mapper = Mapper::underscore();
    let mut record = Holder::default();

    {
        let mut instance = InstanceMapper::new(&mapper, &mut record).unwrap();
        let mut slots = instance.field_addresses();
        assert_eq!(slots.len(), 3);

        slots[1]
            .assign(Value::Record(vec![Value::from("Elm"), Value::U16(12345)]))
            .unwrap();

        // Field count must match the record
        let err = slots[1]
            .assign(Value::Record(vec![Value::from("Elm")]))
            .unwrap_err();
        assert!(err.is_type_conversion());
        assert_eq!(err.to_string(), "cannot convert Record to Address");
    }

    assert_eq!(
        record.Home,
        Address {
            street: "Elm".to_string(),
            zip: Some(12345),
        }
    );
}

#[test]
fn embedded_record_nests_in_column_value() {
    let outer = Outer {
        Inner: Inner {
            Inner: "in".to_string(),
        },
        Outer: "out".to_string(),
    };

    assert_eq!(
        Primitive::to_value(&outer),
        Value::Record(vec![
            Value::Record(vec![Value::from("in")]),
            Value::from("out"),
        ])
    );

    let loaded = Outer::load(Primitive::to_value(&outer)).unwrap();
    assert_eq!(loaded.Inner.Inner, "in");
    assert_eq!(loaded.Outer, "out");
}
