use pretty_assertions::assert_eq;
use tests::{models, Test};
use tombstone::{
    record,
    stmt::{Direction, Expr, Value},
};

#[tokio::test]
async fn default_scope_never_returns_deleted_rows() {
    let t = Test::new([models::user()]).await;
    let users = || t.db.model("User").unwrap();

    for (id, name) in [(1, "ann"), (2, "bob"), (3, "cat")] {
        users()
            .create(record! { "id" => id, "name" => name })
            .await
            .unwrap();
    }

    users().dest(record! { "id" => 2 }).delete().await.unwrap();

    let names: Vec<_> = users()
        .order_by("id", Direction::Asc)
        .all()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.value("name"))
        .collect();
    assert_eq!(names, [Value::from("ann"), Value::from("cat")]);

    assert_eq!(users().count().await.unwrap(), 2);
    assert!(users()
        .filter(Expr::eq(Expr::column("id"), 2))
        .first()
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn unscoped_queries_see_deleted_rows() {
    let t = Test::new([models::user()]).await;
    let users = || t.db.model("User").unwrap();

    users()
        .create(record! { "id" => 1, "name" => "ann" })
        .await
        .unwrap();
    users().dest(record! { "id" => 1 }).delete().await.unwrap();

    assert_eq!(users().count().await.unwrap(), 0);
    assert_eq!(users().unscoped().count().await.unwrap(), 1);

    t.clear_log();
    users().unscoped().all().await.unwrap();
    assert_eq!(
        t.log(),
        [r#"SELECT "users"."id", "users"."name", "users"."deleted", "users"."deleted_at" FROM "users""#]
    );
}

#[tokio::test]
async fn null_sentinel_returns_only_unset_rows() {
    let t = Test::new([models::note()]).await;
    let notes = || t.db.model("Note").unwrap();

    notes()
        .create(record! { "id" => 1, "title" => "unset" })
        .await
        .unwrap();
    notes()
        .create(record! { "id" => 2, "title" => "kept", "archived" => false })
        .await
        .unwrap();
    notes()
        .create(record! { "id" => 3, "title" => "gone" })
        .await
        .unwrap();

    notes().dest(record! { "id" => 3 }).delete().await.unwrap();

    let titles: Vec<_> = notes()
        .all()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.value("title"))
        .collect();
    assert_eq!(titles, [Value::from("unset")]);
    assert_eq!(notes().unscoped().count().await.unwrap(), 3);
}

#[tokio::test]
async fn or_filters_stay_inside_the_scope() {
    let t = Test::new([models::user()]).await;
    let users = || t.db.model("User").unwrap();

    for (id, name) in [(1, "ann"), (2, "bob")] {
        users()
            .create(record! { "id" => id, "name" => name })
            .await
            .unwrap();
    }
    users().dest(record! { "id" => 2 }).delete().await.unwrap();

    t.clear_log();
    let found = users()
        .filter(Expr::eq(Expr::column("name"), "ann"))
        .or_filter(Expr::eq(Expr::column("name"), "bob"))
        .all()
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].value("name"), Value::from("ann"));
    assert!(t.log()[0].ends_with(
        r#"WHERE ("name" = ?1 OR "name" = ?2) AND "users"."deleted" = ?3"#
    ));
}

#[tokio::test]
async fn limit_and_offset_apply_after_filtering() {
    let t = Test::new([models::item()]).await;
    let items = || t.db.model("Item").unwrap();

    for id in 1..=5 {
        items().create(record! { "id" => id }).await.unwrap();
    }
    items().dest(record! { "id" => 1 }).delete().await.unwrap();

    let page = items()
        .order_by("id", Direction::Asc)
        .limit(2)
        .offset(1)
        .all()
        .await
        .unwrap();
    let ids: Vec<_> = page.iter().map(|r| r.value("id")).collect();
    assert_eq!(ids, [Value::I64(3), Value::I64(4)]);
}
