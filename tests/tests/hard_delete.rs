use pretty_assertions::assert_eq;
use tests::{models, Test};
use tombstone::{record, stmt::Expr};

#[tokio::test]
async fn models_without_soft_delete_remove_rows() {
    let t = Test::new([models::tag()]).await;
    let tags = || t.db.model("Tag").unwrap();

    tags()
        .create(record! { "id" => 1, "label" => "red" })
        .await
        .unwrap();
    t.clear_log();

    let affected = tags().dest(record! { "id" => 1 }).delete().await.unwrap();
    assert_eq!(affected, 1);
    assert_eq!(
        t.log(),
        [r#"DELETE FROM "tags" WHERE "tags"."id" IN (?1)"#]
    );
    assert!(t.raw_row("tags", 1).await.is_none());
}

#[tokio::test]
async fn unscoped_delete_removes_soft_deletable_rows() {
    let t = Test::new([models::user()]).await;
    let users = || t.db.model("User").unwrap();

    users()
        .create(record! { "id" => 1, "name" => "ann" })
        .await
        .unwrap();
    t.clear_log();

    users()
        .unscoped()
        .dest(record! { "id" => 1 })
        .delete()
        .await
        .unwrap();

    assert_eq!(
        t.log(),
        [r#"DELETE FROM "users" WHERE "users"."id" IN (?1)"#]
    );
    assert_eq!(users().unscoped().count().await.unwrap(), 0);
}

#[tokio::test]
async fn delete_without_key_or_condition_is_refused() {
    for model in [models::user(), models::tag()] {
        let name = model.name.clone();
        let t = Test::new([model]).await;

        let err = t.db.model(&name).unwrap().delete().await.unwrap_err();
        assert!(err.is_missing_where_clause(), "model={name}; err={err}");

        // A record without a key does not scope the delete either
        let err = t
            .db
            .model(&name)
            .unwrap()
            .dest(record! { "id" => 0 })
            .delete()
            .await
            .unwrap_err();
        assert!(err.is_missing_where_clause(), "model={name}; err={err}");

        assert!(t.log().is_empty());
    }
}

#[tokio::test]
async fn global_soft_delete_when_allowed() {
    let t = Test::new([models::user()]).await;
    let users = || t.db.model("User").unwrap();

    for (id, name) in [(1, "ann"), (2, "bob")] {
        users()
            .create(record! { "id" => id, "name" => name })
            .await
            .unwrap();
    }

    assert_eq!(users().allow_global_update().delete().await.unwrap(), 2);
    assert_eq!(users().count().await.unwrap(), 0);
    assert_eq!(users().unscoped().count().await.unwrap(), 2);
}

#[tokio::test]
async fn hard_delete_by_condition() {
    let t = Test::new([models::tag()]).await;
    let tags = || t.db.model("Tag").unwrap();

    for (id, label) in [(1, "red"), (2, "blue")] {
        tags()
            .create(record! { "id" => id, "label" => label })
            .await
            .unwrap();
    }

    let affected = tags()
        .filter(Expr::eq(Expr::column("label"), "red"))
        .delete()
        .await
        .unwrap();
    assert_eq!(affected, 1);
    assert_eq!(tags().count().await.unwrap(), 1);
}

#[tokio::test]
async fn or_filters_do_not_widen_a_keyed_hard_delete() {
    let t = Test::new([models::tag()]).await;
    let tags = || t.db.model("Tag").unwrap();

    for (id, label) in [(1, "red"), (2, "blue"), (7, "blue")] {
        tags()
            .create(record! { "id" => id, "label" => label })
            .await
            .unwrap();
    }
    t.clear_log();

    let affected = tags()
        .filter(Expr::eq(Expr::column("label"), "red"))
        .or_filter(Expr::eq(Expr::column("label"), "blue"))
        .dest(record! { "id" => 7 })
        .delete()
        .await
        .unwrap();
    assert_eq!(affected, 1);
    assert_eq!(
        t.log(),
        [r#"DELETE FROM "tags" WHERE ("label" = ?1 OR "label" = ?2) AND "tags"."id" IN (?3)"#]
    );
    assert_eq!(tags().count().await.unwrap(), 2);
}
