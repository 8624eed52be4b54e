use pretty_assertions::assert_eq;
use tests::{models, Test};
use tombstone::{
    driver::Operation,
    record,
    stmt::{Type, Value},
};
use tombstone_soft_delete::Flag;

#[tokio::test]
async fn stored_flags_decode() {
    let t = Test::new([models::item()]).await;
    let items = || t.db.model("Item").unwrap();

    items().create(record! { "id" => 1 }).await.unwrap();
    items()
        .create(record! { "id" => 2, "deleted_at" => Flag::Deleted })
        .await
        .unwrap();

    let rows = items()
        .unscoped()
        .order_by("id", tombstone::stmt::Direction::Asc)
        .all()
        .await
        .unwrap();

    let flags = rows
        .into_iter()
        .map(|row| Flag::try_from(row.value("deleted_at")))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(flags, [Flag::Active, Flag::Deleted]);

    // Created already deleted, so hidden by default
    assert_eq!(items().count().await.unwrap(), 1);
}

#[tokio::test]
async fn non_boolean_values_fail_to_decode() {
    let t = Test::new([models::item()]).await;
    t.db.model("Item")
        .unwrap()
        .create(record! { "id" => 1, "name" => "one" })
        .await
        .unwrap();

    // Read the flag column back without a type hint
    let response = t
        .db
        .exec(Operation::query(
            r#"SELECT "deleted_at", "name" FROM "items""#,
            vec![],
            vec![],
        ))
        .await
        .unwrap();
    let row = response.rows.into_values().unwrap().remove(0);

    let err = Flag::try_from(row[0].clone()).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert I64 to Flag");

    assert!(Flag::try_from(row[1].clone()).is_err());

    // Typed reads decode to booleans
    let response = t
        .db
        .exec(Operation::query(
            r#"SELECT "deleted_at" FROM "items""#,
            vec![],
            vec![Type::Bool],
        ))
        .await
        .unwrap();
    let row = response.rows.into_values().unwrap().remove(0);
    assert_eq!(row, [Value::Bool(false)]);
    assert_eq!(Flag::try_from(row[0].clone()).unwrap(), Flag::Active);

}
