use pretty_assertions::assert_eq;
use tests::{models, Test};
use tombstone::{
    record,
    stmt::{Expr, Value},
};

#[tokio::test]
async fn update_skips_deleted_rows() {
    let t = Test::new([models::user()]).await;
    let users = || t.db.model("User").unwrap();

    for (id, name) in [(1, "ann"), (2, "bob")] {
        users()
            .create(record! { "id" => id, "name" => name })
            .await
            .unwrap();
    }
    users().dest(record! { "id" => 2 }).delete().await.unwrap();

    let affected = users()
        .filter(Expr::ge(Expr::column("id"), 1))
        .update(record! { "name" => "renamed" })
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let bob = users()
        .unscoped()
        .filter(Expr::eq(Expr::column("id"), 2))
        .first()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bob.value("name"), Value::from("bob"));
}

#[tokio::test]
async fn unscoped_update_reaches_deleted_rows() {
    let t = Test::new([models::user()]).await;
    let users = || t.db.model("User").unwrap();

    users()
        .create(record! { "id" => 1, "name" => "ann" })
        .await
        .unwrap();
    users().dest(record! { "id" => 1 }).delete().await.unwrap();

    let affected = users()
        .unscoped()
        .filter(Expr::eq(Expr::column("id"), 1))
        .update(record! { "name" => "restored name" })
        .await
        .unwrap();
    assert_eq!(affected, 1);
}

#[tokio::test]
async fn update_by_model_value_targets_its_key() {
    let t = Test::new([models::user()]).await;
    let users = || t.db.model("User").unwrap();

    for (id, name) in [(1, "ann"), (2, "bob")] {
        users()
            .create(record! { "id" => id, "name" => name })
            .await
            .unwrap();
    }

    t.clear_log();
    let affected = users()
        .model_value(record! { "id" => 2, "name" => "bob" })
        .update(record! { "name" => "robert" })
        .await
        .unwrap();
    assert_eq!(affected, 1);
    assert_eq!(
        t.log(),
        [r#"UPDATE "users" SET "name" = ?1 WHERE "users"."deleted" = ?2 AND "users"."id" IN (?3)"#]
    );

    let ann = users()
        .filter(Expr::eq(Expr::column("id"), 1))
        .first()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ann.value("name"), Value::from("ann"));
}

#[tokio::test]
async fn update_without_condition_is_refused() {
    let t = Test::new([models::user()]).await;

    let err = t
        .db
        .model("User")
        .unwrap()
        .update(record! { "name" => "everyone" })
        .await
        .unwrap_err();
    assert!(err.is_missing_where_clause());
    assert!(t.log().is_empty());
}

#[tokio::test]
async fn global_update_when_allowed() {
    let t = Test::new([models::user()]).await;
    let users = || t.db.model("User").unwrap();

    for (id, name) in [(1, "ann"), (2, "bob")] {
        users()
            .create(record! { "id" => id, "name" => name })
            .await
            .unwrap();
    }

    let affected = users()
        .allow_global_update()
        .update(record! { "name" => "same" })
        .await
        .unwrap();
    assert_eq!(affected, 2);
}

#[tokio::test]
async fn unknown_columns_are_rejected() {
    let t = Test::new([models::user()]).await;

    let err = t
        .db
        .model("User")
        .unwrap()
        .filter(Expr::eq(Expr::column("id"), 1))
        .update(record! { "nickname" => "x" })
        .await
        .unwrap_err();
    assert!(err.is_invalid_statement());
    assert_eq!(
        err.to_string(),
        "invalid statement: model `User` has no column `nickname`"
    );
}

#[tokio::test]
async fn mistyped_values_are_rejected() {
    let t = Test::new([models::user()]).await;

    let err = t
        .db
        .model("User")
        .unwrap()
        .create(record! { "id" => 1, "name" => 5 })
        .await
        .unwrap_err();
    assert!(err.is_invalid_statement());
    assert_eq!(
        err.to_string(),
        "invalid statement: column `name` of `User` is String, got I64"
    );
}

#[tokio::test]
async fn unscoped_update_keeps_key_outside_or_filters() {
    let t = Test::new([models::user()]).await;
    let users = || t.db.model("User").unwrap();

    for (id, name) in [(1, "ann"), (2, "bob")] {
        users()
            .create(record! { "id" => id, "name" => name })
            .await
            .unwrap();
    }
    t.clear_log();

    let affected = users()
        .unscoped()
        .filter(Expr::eq(Expr::column("name"), "ann"))
        .or_filter(Expr::eq(Expr::column("name"), "bob"))
        .model_value(record! { "id" => 2, "name" => "bob" })
        .update(record! { "name" => "robert" })
        .await
        .unwrap();
    assert_eq!(affected, 1);
    assert_eq!(
        t.log(),
        [r#"UPDATE "users" SET "name" = ?1 WHERE ("name" = ?2 OR "name" = ?3) AND "users"."id" IN (?4)"#]
    );

    let ann = users()
        .filter(Expr::eq(Expr::column("id"), 1))
        .first()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ann.value("name"), Value::from("ann"));
}
