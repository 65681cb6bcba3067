use chorm::{
    Direction, Fetched, Filter, Include, IncludeOptions, QueryOptions, Record, Value,
};
use tests::{models, Test};

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

const ANN: &str = "6f1c2a8e-3b1d-4c55-9a3e-0c7d2b9e4f10";
const BOB: &str = "0b3f9c1e-8d2a-4e7f-b1c6-5a9d3e2f7c80";

async fn seed(t: &Test) {
    t.db.create("User", &Record::new().with("id", ANN).with("name", "Ann").with("age", 30u8))
        .await
        .unwrap();
    t.db.create("User", &Record::new().with("id", BOB).with("name", "Bob").with("age", 41u8))
        .await
        .unwrap();

    for (id, user_id, title, hour) in [
        ("a0000000-0000-0000-0000-000000000001", ANN, "first", 9),
        ("a0000000-0000-0000-0000-000000000002", ANN, "second", 11),
        ("b0000000-0000-0000-0000-000000000001", BOB, "hello", 10),
    ] {
        t.db.create(
            "Post",
            &Record::new()
                .with("id", id)
                .with("user_id", user_id)
                .with("title", title)
                .with("published", true)
                .with(
                    "created_at",
                    Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap(),
                ),
        )
        .await
        .unwrap();
    }
}

fn titles(value: &Value) -> Vec<String> {
    value
        .as_list()
        .unwrap()
        .iter()
        .map(|post| post.as_record().unwrap()["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn posts_newest_first() {
    let mut t = Test::new(models::all()).await;
    seed(&t).await;
    t.log.clear();

    let user = t
        .db
        .fetch(
            "User",
            &Filter::new().eq("id", ANN),
            &QueryOptions::new().limit(1).include(
                "posts",
                IncludeOptions::new().order_by("created_at", Direction::Desc),
            ),
        )
        .await
        .unwrap()
        .into_one()
        .unwrap();

    assert_eq!(titles(&user["posts"]), ["second", "first"]);

    assert_eq!(
        t.log.sql(),
        [
            format!("SELECT * FROM users WHERE id = '{ANN}' LIMIT 1"),
            format!("SELECT * FROM posts WHERE user_id = '{ANN}' ORDER BY created_at DESC"),
        ]
    );
}

#[tokio::test]
async fn each_parent_gets_its_own_children() {
    let t = Test::new(models::all()).await;
    seed(&t).await;

    let users = t
        .db
        .fetch(
            "User",
            &Filter::new(),
            &QueryOptions::new()
                .order_by("name", Direction::Asc)
                .include("posts", Include::All),
        )
        .await
        .unwrap()
        .into_many();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["name"], Value::from("Ann"));
    assert_eq!(users[1]["name"], Value::from("Bob"));

    for user in &users {
        let posts = user["posts"].as_list().unwrap();
        assert!(!posts.is_empty());
        for post in posts {
            assert_eq!(post.as_record().unwrap()["user_id"], user["id"]);
        }
    }

    assert_eq!(titles(&users[1]["posts"]), ["hello"]);
}

#[tokio::test]
async fn include_filter_cannot_override_the_relation() {
    let t = Test::new(models::all()).await;
    seed(&t).await;

    let user = t
        .db
        .fetch(
            "User",
            &Filter::new().eq("id", ANN),
            &QueryOptions::new().limit(1).include(
                "posts",
                IncludeOptions::new()
                    .filter(Filter::new().eq("user_id", BOB).eq("title", "second")),
            ),
        )
        .await
        .unwrap()
        .into_one()
        .unwrap();

    assert_eq!(titles(&user["posts"]), ["second"]);
}

#[tokio::test]
async fn include_limit_one_attaches_a_record() {
    let t = Test::new(models::all()).await;
    seed(&t).await;

    let user = t
        .db
        .fetch(
            "User",
            &Filter::new().eq("id", ANN),
            &QueryOptions::new().limit(1).include(
                "posts",
                IncludeOptions::new()
                    .order_by("created_at", Direction::Asc)
                    .limit(1),
            ),
        )
        .await
        .unwrap()
        .into_one()
        .unwrap();

    let post = user["posts"].as_record().unwrap();
    assert_eq!(post["title"], Value::from("first"));
}

#[tokio::test]
async fn many_to_one_joins_on_the_foreign_key() {
    let mut t = Test::new(models::all()).await;
    seed(&t).await;
    t.log.clear();

    let post = t
        .db
        .fetch(
            "Post",
            &Filter::new().eq("title", "hello"),
            &QueryOptions::new().limit(1).include("author", Include::All),
        )
        .await
        .unwrap()
        .into_one()
        .unwrap();

    let author = post["author"].as_record().unwrap();
    assert_eq!(author["name"], Value::from("Bob"));

    assert_eq!(
        t.log.sql()[1],
        format!("SELECT * FROM users WHERE id = '{BOB}' LIMIT 1")
    );
}

#[tokio::test]
async fn missing_one_to_one_is_null() {
    let t = Test::new(models::all()).await;
    seed(&t).await;

    t.db.create(
        "Profile",
        &Record::new()
            .with("id", "c0000000-0000-0000-0000-000000000001")
            .with("user_id", BOB)
            .with("bio", "hi"),
    )
    .await
    .unwrap();

    let users = t
        .db
        .fetch(
            "User",
            &Filter::new(),
            &QueryOptions::new()
                .order_by("name", Direction::Asc)
                .include("profile", Include::All),
        )
        .await
        .unwrap()
        .into_many();

    assert_eq!(users[0]["profile"], Value::Null);
    assert_eq!(
        users[1]["profile"].as_record().unwrap()["bio"],
        Value::from("hi")
    );
}

#[tokio::test]
async fn parent_without_key_is_not_queried() {
    let mut t = Test::new(models::all()).await;

    t.db.create(
        "Post",
        &Record::new()
            .with("id", "d0000000-0000-0000-0000-000000000001")
            .with("title", "orphan"),
    )
    .await
    .unwrap();
    t.log.clear();

    let post = t
        .db
        .fetch(
            "Post",
            &Filter::new().eq("title", "orphan"),
            &QueryOptions::new().limit(1).include("author", Include::All),
        )
        .await
        .unwrap();

    assert_eq!(
        post,
        Fetched::One(Some(
            Record::new()
                .with("id", "d0000000-0000-0000-0000-000000000001")
                .with("title", "orphan")
                .with("author", Value::Null)
        ))
    );
    assert_eq!(t.log.len(), 1);
}

#[tokio::test]
async fn undeclared_relation_is_not_found() {
    let t = Test::new(models::all()).await;
    seed(&t).await;

    let err = t
        .db
        .fetch(
            "User",
            &Filter::new(),
            &QueryOptions::new().include("comments", Include::All),
        )
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "not found: relation `comments` on model `User`"
    );
}

#[tokio::test]
async fn include_errors_carry_context() {
    let t = Test::new(models::all()).await;
    seed(&t).await;

    let err = t
        .db
        .fetch(
            "User",
            &Filter::new().eq("id", ANN),
            &QueryOptions::new().include(
                "posts",
                IncludeOptions::new().order_by("rating", Direction::Desc),
            ),
        )
        .await
        .unwrap_err();

    assert!(err.is_config());
    assert_eq!(
        err.to_string(),
        "including `posts` on model `User`: configuration error: \
         field `rating` is not declared on model `Post`"
    );
}

#[tokio::test]
async fn include_overrides_are_checked_without_parent_rows() {
    let mut t = Test::new(models::all()).await;

    let err = t
        .db
        .fetch(
            "User",
            &Filter::new(),
            &QueryOptions::new().include(
                "posts",
                IncludeOptions::new().order_by("rating", Direction::Desc),
            ),
        )
        .await
        .unwrap_err();

    assert!(err.is_config());
    assert_eq!(
        err.to_string(),
        "including `posts` on model `User`: configuration error: \
         field `rating` is not declared on model `Post`"
    );
    assert_eq!(t.log.pop_sql(), "SELECT * FROM users");
    assert!(t.log.is_empty());

    let err = t
        .db
        .fetch(
            "User",
            &Filter::new(),
            &QueryOptions::new().include(
                "posts",
                IncludeOptions::new().filter(Filter::new().eq("draft", true)),
            ),
        )
        .await
        .unwrap_err();
    assert!(err.is_config());
}

#[tokio::test]
async fn include_overrides_are_checked_when_no_parent_has_a_key() {
    let t = Test::new(models::all()).await;

    t.db.create(
        "Post",
        &Record::new()
            .with("id", "d0000000-0000-0000-0000-000000000001")
            .with("title", "orphan"),
    )
    .await
    .unwrap();

    let err = t
        .db
        .fetch(
            "Post",
            &Filter::new(),
            &QueryOptions::new().include(
                "author",
                IncludeOptions::new().filter(Filter::new().eq("nickname", "annie")),
            ),
        )
        .await
        .unwrap_err();

    assert!(err.is_config());
}
