use cqlmapper::{InstanceMapper, Mapper, Record, Value};
use pretty_assertions::assert_eq;
use tests::{RecordingSession, SessionOp};
use uuid::Uuid;

#[derive(Debug, Default, Record)]
struct User {
    id: Uuid,
    name: String,
    age: Option<u8>,
}

fn execute(query: &str, params: Vec<Value>) -> SessionOp {
    SessionOp::Execute {
        query: query.to_string(),
        params,
    }
}

fn scan(query: &str, params: Vec<Value>) -> SessionOp {
    SessionOp::Scan {
        query: query.to_string(),
        params,
    }
}

#[test]
fn write_operations_bind_in_query_order() {
    tests::init_logging();

    let mapper = Mapper::underscore();
    let mut session = RecordingSession::new();
    let id = Uuid::new_v4();
    let mut user = User {
        id,
        name: "Ann".to_string(),
        age: Some(30),
    };

    let instance = InstanceMapper::new(&mapper, &mut user).unwrap();
    instance.insert(&mut session).unwrap();
    instance.update(&mut session, &["id"]).unwrap();
    instance.delete(&mut session, &["id"]).unwrap();

    assert_eq!(
        session.ops,
        [
            execute(
                "INSERT INTO user (id, name, age) VALUES(?, ?, ?)",
                vec![Value::Uuid(id), Value::from("Ann"), Value::U8(30)],
            ),
            execute(
                "UPDATE user SET name = ?, age = ? WHERE id = ?",
                vec![Value::from("Ann"), Value::U8(30), Value::Uuid(id)],
            ),
            execute("DELETE FROM user WHERE id = ?", vec![Value::Uuid(id)]),
        ]
    );
}

#[test]
fn select_loads_row_into_record() {
    let mapper = Mapper::underscore();
    let mut session = RecordingSession::new();
    let id = Uuid::new_v4();
    session.push_row([
        Value::String(id.to_string()),
        Value::from("Bob"),
        Value::Null,
    ]);

    let mut user = User {
        age: Some(1),
        ..User::default()
    };
    {
        let mut instance = InstanceMapper::new(&mapper, &mut user).unwrap();
        let found = instance
            .select(&mut session, &["id"], vec![Value::Uuid(id)])
            .unwrap();
        assert!(found);

        // Queue is empty now
        let found = instance
            .select(&mut session, &["id"], vec![Value::Uuid(id)])
            .unwrap();
        assert!(!found);
    }

    assert_eq!(user.id, id);
    assert_eq!(user.name, "Bob");
    assert_eq!(user.age, None);
    assert_eq!(
        session.ops[0],
        scan(
            "SELECT id, name, age FROM user WHERE id = ?",
            vec![Value::Uuid(id)]
        )
    );
}

#[test]
fn count_scans_into_integer() {
    let mapper = Mapper::underscore();
    let mut session = RecordingSession::new();
    session.push_row([Value::I64(12)]);

    let mut user = User::default();
    let instance = InstanceMapper::new(&mapper, &mut user).unwrap();

    let count = instance
        .count(&mut session, &["name"], vec![Value::from("Ann")])
        .unwrap();
    assert_eq!(count, 12);

    // No row counts as zero
    assert_eq!(instance.count(&mut session, &[], vec![]).unwrap(), 0);

    assert_eq!(
        session.ops,
        [
            scan(
                "SELECT count(1) FROM user WHERE name = ?",
                vec![Value::from("Ann")]
            ),
            scan("SELECT count(1) FROM user", vec![]),
        ]
    );
}

#[test]
fn session_errors_carry_context() {
    let mapper = Mapper::underscore();
    let mut session = RecordingSession::new();
    session.fail_with("connection reset");

    let mut user = User::default();
    let instance = InstanceMapper::new(&mapper, &mut user).unwrap();

    let err = instance.insert(&mut session).unwrap_err();
    assert_eq!(err.to_string(), "failed to insert into user: connection reset");
}

#[test]
fn mismatched_value_fails_the_scan() {
    let mapper = Mapper::underscore();
    let mut session = RecordingSession::new();
    session.push_row([Value::Uuid(Uuid::nil()), Value::I32(5), Value::Null]);

    let mut user = User::default();
    let mut instance = InstanceMapper::new(&mapper, &mut user).unwrap();

    let err = instance.select(&mut session, &[], vec![]).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "failed to select from user: cannot convert I32 to String"
    );
}

#[test]
fn key_that_is_not_a_column_is_rejected() {
    let mapper = Mapper::underscore();
    let mut session = RecordingSession::new();
    let mut user = User::default();
    let instance = InstanceMapper::new(&mapper, &mut user).unwrap();

    // Column names are case sensitive
    let err = instance.delete(&mut session, &["Id"]).unwrap_err();
    assert!(err.is_unknown_column());
    assert_eq!(err.to_string(), "table `user` has no column `Id`");

    let err = instance.update(&mut session, &["ident"]).unwrap_err();
    assert!(err.is_unknown_column());

    // Nothing reached the driver
    assert!(session.ops.is_empty());
}

#[test]
fn arguments_must_match_filter_columns() {
    let mapper = Mapper::underscore();
    let mut session = RecordingSession::new();
    let mut user = User::default();
    let mut instance = InstanceMapper::new(&mapper, &mut user).unwrap();

    let err = instance
        .select(&mut session, &["id", "name"], vec![Value::Uuid(Uuid::nil())])
        .unwrap_err();
    assert!(err.is_argument_count());
    assert_eq!(err.to_string(), "query expects 2 arguments, 1 given");

    let err = instance
        .count(&mut session, &[], vec![Value::from("extra")])
        .unwrap_err();
    assert!(err.is_argument_count());

    assert!(session.ops.is_empty());
}
