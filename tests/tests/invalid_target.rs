use cqlmapper::{InstanceMapper, Mapper, Record};
use pretty_assertions::assert_eq;

#[derive(Debug, Default, Record)]
struct MyTable {
    id: u32,
    value: String,
}

#[test]
fn record_by_value_is_rejected() {
    let mapper = Mapper::underscore();

    let err = InstanceMapper::new(&mapper, MyTable::default()).unwrap_err();
    assert!(err.is_invalid_target());
    assert_eq!(
        err.to_string(),
        "expected a mutable reference to a record, found `MyTable`"
    );
}

#[test]
fn shared_reference_is_rejected() {
    let mapper = Mapper::underscore();
    let record = MyTable::default();

    let err = mapper.introspect(&record).unwrap_err();
    assert!(err.is_invalid_target());
    assert_eq!(
        err.to_string(),
        "expected a mutable reference to a record, found `&MyTable`"
    );
}

#[test]
fn missing_record_is_rejected() {
    let mapper = Mapper::raw();

    let err = mapper.introspect(None::<&mut MyTable>).unwrap_err();
    assert!(err.is_invalid_target());
}

#[test]
fn mutable_reference_is_accepted() {
    let mapper = Mapper::underscore();
    let mut record = MyTable::default();

    assert!(InstanceMapper::new(&mapper, Some(&mut record)).is_ok());
    assert!(InstanceMapper::new(&mapper, &mut record).is_ok());
}
