use cqlmapper::{InstanceMapper, Mapper, Record, Value};
use pretty_assertions::assert_eq;

#[derive(Debug, Default, Record)]
struct ExampleTable {
    id: u64,
    value: String,
    value2: Option<i32>,
}

#[derive(Debug, Default, Record)]
struct Event {
    bucket: String,
    id: i64,
    payload: Option<String>,
}

#[test]
fn update_sets_every_non_key_column() {
    let mapper = Mapper::underscore();
    let mut record = ExampleTable::default();
    let instance = InstanceMapper::new(&mapper, &mut record).unwrap();

    let query = instance.update_query(&["id"]);
    assert_eq!(
        query,
        "UPDATE example_table SET value = ?, value2 = ? WHERE id = ?"
    );
    assert_eq!(query.params(), 3);
}

#[test]
fn update_arguments_drop_key_columns() {
    let mapper = Mapper::underscore();
    let mut record = ExampleTable::default();
    let instance = InstanceMapper::new(&mapper, &mut record).unwrap();

    let arguments = vec![Value::U64(1), Value::from("v"), Value::I32(2)];
    assert_eq!(
        instance.update_arguments(arguments, &["id"]),
        [Value::from("v"), Value::I32(2)]
    );
}

#[test]
fn update_arguments_line_up_with_set_clause_when_quoted() {
    let mapper = Mapper::underscore().quoted();
    let mut record = ExampleTable {
        id: 9,
        value: "v".to_string(),
        value2: None,
    };
    let instance = InstanceMapper::new(&mapper, &mut record).unwrap();

    assert_eq!(
        instance.update_query(&["id"]),
        r#"UPDATE "example_table" SET "value" = ?, "value2" = ? WHERE "id" = ?"#
    );
    assert_eq!(
        instance.update_arguments(instance.field_values(), &["id"]),
        [Value::from("v"), Value::Null]
    );
}

#[test]
fn composite_keys_keep_given_order() {
    let mapper = Mapper::underscore();
    let mut record = Event::default();
    let instance = InstanceMapper::new(&mapper, &mut record).unwrap();

    assert_eq!(
        instance.update_query(&["id", "bucket"]),
        "UPDATE event SET payload = ? WHERE id = ? AND bucket = ?"
    );
    assert_eq!(
        instance.delete_query(&["id", "bucket"]),
        "DELETE FROM event WHERE id = ? AND bucket = ?"
    );
}

#[test]
fn none_is_bound_as_null() {
    let mapper = Mapper::underscore();
    let mut record = Event {
        bucket: "b".to_string(),
        id: 1,
        payload: None,
    };
    let instance = InstanceMapper::new(&mapper, &mut record).unwrap();

    assert_eq!(
        instance.field_values(),
        [Value::from("b"), Value::I64(1), Value::Null]
    );
}

#[test]
fn empty_key_list_omits_where_clause() {
    let mapper = Mapper::underscore();
    let mut record = Event::default();
    let instance = InstanceMapper::new(&mapper, &mut record).unwrap();

    assert_eq!(
        instance.update_query(&[]),
        "UPDATE event SET bucket = ?, id = ?, payload = ?"
    );
    assert_eq!(instance.delete_query(&[]), "DELETE FROM event");
}
