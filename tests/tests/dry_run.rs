use pretty_assertions::assert_eq;
use tests::{models, Test};
use tombstone::{
    record,
    stmt::{Direction, Expr, Op, Value},
};

#[tokio::test]
async fn dry_runs_do_not_execute() {
    let t = Test::new([models::user(), models::tag()]).await;
    let users = || t.db.model("User").unwrap();

    let stmt = users()
        .filter(Expr::eq(Expr::column("name"), "ann"))
        .order_by("id", Direction::Desc)
        .limit(10)
        .to_sql_query()
        .unwrap();
    assert_eq!(
        stmt.sql,
        r#"SELECT "users"."id", "users"."name", "users"."deleted", "users"."deleted_at" FROM "users" WHERE "name" = ?1 AND "users"."deleted" = ?2 ORDER BY "users"."id" DESC LIMIT 10"#
    );

    let stmt = users().to_sql_count().unwrap();
    assert_eq!(
        stmt.sql,
        r#"SELECT COUNT(*) FROM "users" WHERE "users"."deleted" = ?1"#
    );

    let stmt = users()
        .to_sql_create(&record! { "id" => 1, "name" => "ann" })
        .unwrap();
    assert_eq!(stmt.sql, r#"INSERT INTO "users" ("id", "name") VALUES (?1, ?2)"#);

    let stmt = users()
        .dest(record! { "id" => 7 })
        .to_sql_delete()
        .unwrap();
    assert_eq!(stmt.op, Op::Update);
    assert_eq!(
        stmt.sql,
        r#"UPDATE "users" SET "deleted" = ?1, "deleted_at" = ?2 WHERE "users"."id" IN (?3) AND "users"."deleted" = ?4"#
    );
    assert_eq!(stmt.params[1], Value::Timestamp(tests::fixed_now()));
    assert!(stmt.changed("deleted"));
    assert!(stmt.changed("deleted_at"));

    let stmt = t
        .db
        .model("Tag")
        .unwrap()
        .dest(record! { "id" => 7 })
        .to_sql_delete()
        .unwrap();
    assert_eq!(stmt.op, Op::Delete);
    assert_eq!(stmt.sql, r#"DELETE FROM "tags" WHERE "tags"."id" IN (?1)"#);

    assert!(t.log().is_empty());
}

#[tokio::test]
async fn diverging_destination_and_model_value() {
    let t = Test::new([models::item()]).await;
    let items = || t.db.model("Item").unwrap();

    for id in 1..=3 {
        items().create(record! { "id" => id }).await.unwrap();
    }

    let scope = items()
        .dest(vec![record! { "id" => 1 }, record! { "id" => 2 }])
        .model_value(record! { "id" => 2 });

    let stmt = scope.to_sql_delete().unwrap();
    assert_eq!(
        stmt.sql,
        r#"UPDATE "items" SET "deleted_at" = ?1 WHERE "items"."id" IN (?2, ?3) AND "items"."id" IN (?4) AND "items"."deleted_at" = ?5"#
    );

    assert_eq!(scope.delete().await.unwrap(), 1);
    assert_eq!(items().count().await.unwrap(), 2);
}
