use pretty_assertions::assert_eq;
use tests::{models, Test};
use tombstone::{
    record,
    stmt::{Expr, Value},
};

#[tokio::test]
async fn delete_by_key_flags_the_row() {
    let t = Test::new([models::item()]).await;
    let items = || t.db.model("Item").unwrap();

    items()
        .create(record! { "id" => 7, "deleted_at" => false })
        .await
        .unwrap();
    t.clear_log();

    let affected = items().dest(record! { "id" => 7 }).delete().await.unwrap();
    assert_eq!(affected, 1);

    let ops = t.ops();
    assert_eq!(ops.len(), 1);
    assert_eq!(
        ops[0].operation.sql(),
        r#"UPDATE "items" SET "deleted_at" = ?1 WHERE "items"."id" IN (?2) AND "items"."deleted_at" = ?3"#
    );
    assert_eq!(
        ops[0].operation.params(),
        [Value::Bool(true), Value::I64(7), Value::Bool(false)]
    );

    let found = items()
        .filter(Expr::eq(Expr::column("id"), 7))
        .all()
        .await
        .unwrap();
    assert!(found.is_empty());

    // The row is still stored, flagged
    let row = t.raw_row("items", 7).await.unwrap();
    assert_eq!(row[2], Value::I64(1));
}

#[tokio::test]
async fn deleting_twice_affects_nothing() {
    let t = Test::new([models::item()]).await;
    let items = || t.db.model("Item").unwrap();

    items().create(record! { "id" => 1 }).await.unwrap();

    assert_eq!(items().dest(record! { "id" => 1 }).delete().await.unwrap(), 1);
    assert_eq!(items().dest(record! { "id" => 1 }).delete().await.unwrap(), 0);
    assert_eq!(items().unscoped().count().await.unwrap(), 1);
}

#[tokio::test]
async fn delete_sets_timestamp_companion() {
    let t = Test::new([models::user()]).await;
    let users = || t.db.model("User").unwrap();

    users()
        .create(record! { "id" => 1, "name" => "ann" })
        .await
        .unwrap();
    users()
        .create(record! { "id" => 2, "name" => "bob" })
        .await
        .unwrap();

    users().dest(record! { "id" => 1 }).delete().await.unwrap();

    let ann = users()
        .unscoped()
        .filter(Expr::eq(Expr::column("id"), 1))
        .first()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ann.get("deleted"), Some(&Value::Bool(true)));
    assert_eq!(
        ann.get("deleted_at"),
        Some(&Value::Timestamp(tests::fixed_now()))
    );

    let bob = users()
        .unscoped()
        .filter(Expr::eq(Expr::column("id"), 2))
        .first()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bob.get("deleted"), Some(&Value::Bool(false)));
    assert_eq!(bob.get("deleted_at"), Some(&Value::Null));
}

#[tokio::test]
async fn batch_delete_flags_every_bound_record() {
    let t = Test::new([models::item()]).await;
    let items = || t.db.model("Item").unwrap();

    for id in 1..=4 {
        items().create(record! { "id" => id }).await.unwrap();
    }

    let affected = items()
        .dest(vec![record! { "id" => 1 }, record! { "id" => 3 }])
        .delete()
        .await
        .unwrap();
    assert_eq!(affected, 2);

    let remaining = items()
        .order_by("id", tombstone::stmt::Direction::Asc)
        .all()
        .await
        .unwrap();
    let ids: Vec<_> = remaining.iter().map(|r| r.value("id")).collect();
    assert_eq!(ids, [Value::I64(2), Value::I64(4)]);
}

#[tokio::test]
async fn delete_by_condition() {
    let t = Test::new([models::user()]).await;
    let users = || t.db.model("User").unwrap();

    for (id, name) in [(1, "ann"), (2, "bob"), (3, "ann")] {
        users()
            .create(record! { "id" => id, "name" => name })
            .await
            .unwrap();
    }

    let affected = users()
        .filter(Expr::eq(Expr::column("name"), "ann"))
        .delete()
        .await
        .unwrap();
    assert_eq!(affected, 2);
    assert_eq!(users().count().await.unwrap(), 1);
}

#[tokio::test]
async fn or_filters_do_not_widen_a_keyed_delete() {
    let t = Test::new([models::user()]).await;
    let users = || t.db.model("User").unwrap();

    for (id, name) in [(1, "ann"), (2, "bob"), (7, "bob")] {
        users()
            .create(record! { "id" => id, "name" => name })
            .await
            .unwrap();
    }
    t.clear_log();

    let affected = users()
        .filter(Expr::eq(Expr::column("name"), "ann"))
        .or_filter(Expr::eq(Expr::column("name"), "bob"))
        .dest(record! { "id" => 7 })
        .delete()
        .await
        .unwrap();
    assert_eq!(affected, 1);
    assert_eq!(
        t.log(),
        [r#"UPDATE "users" SET "deleted" = ?1, "deleted_at" = ?2 WHERE ("name" = ?3 OR "name" = ?4) AND "users"."id" IN (?5) AND "users"."deleted" = ?6"#]
    );

    assert_eq!(users().count().await.unwrap(), 2);
    assert!(users()
        .filter(Expr::eq(Expr::column("id"), 7))
        .first()
        .await
        .unwrap()
        .is_none());
}
