use chorm::{Db, Field, FieldTy, Model};
use tests::{capture_logs, models, LoggingDriver, MemoryStore, Test};

use pretty_assertions::assert_eq;
use tracing::Level;

#[tokio::test]
async fn push_schema_creates_tables_in_registration_order() {
    let mut t = Test::unpushed(MemoryStore::new(), models::all());

    t.db.push_schema().await.unwrap();

    assert_eq!(
        t.log.sql(),
        [
            "CREATE TABLE IF NOT EXISTS users (id UUID, name String, age UInt8) \
             ENGINE = MergeTree() ORDER BY (id)",
            "CREATE TABLE IF NOT EXISTS posts (id UUID, user_id UUID, title String, \
             published Bool, created_at DateTime) \
             ENGINE = MergeTree() ORDER BY (user_id, created_at)",
            "CREATE TABLE IF NOT EXISTS profiles (id UUID, user_id UUID, bio Nullable(String)) \
             ENGINE = MergeTree()",
        ]
    );
    assert_eq!(t.store.tables(), ["users", "posts", "profiles"]);

    // Pushing again is harmless
    t.log.clear();
    t.db.push_schema().await.unwrap();
    assert_eq!(t.log.len(), 3);
}

#[tokio::test]
async fn push_schema_stops_at_first_failure() {
    let store = MemoryStore::new().fail_create_table("posts");
    let t = Test::unpushed(store, models::all());

    let err = t.db.push_schema().await.unwrap_err();

    assert!(err.is_store());
    assert_eq!(
        err.to_string(),
        "creating table for model `Post`: store error: cannot create table `posts`"
    );

    // Tables created before the failure stay; nothing after it is attempted
    assert_eq!(t.store.tables(), ["users"]);
    assert_eq!(t.log.len(), 1);
}

#[tokio::test]
async fn push_schema_rejects_unrenderable_types_before_issuing_them() {
    let t = Test::unpushed(MemoryStore::new(), models::all());

    // A descriptor assembled by hand can skip `ModelBuilder::build` checks
    let mut broken = Model::builder("Broken")
        .field("id", Field::new(FieldTy::UInt64))
        .build()
        .unwrap();
    broken
        .fields
        .insert("tags".into(), Field::new(FieldTy::Array));
    t.db.register(broken);

    let err = t.db.push_schema().await.unwrap_err();

    assert!(err.is_config());
    assert_eq!(t.store.tables(), ["users", "posts", "profiles"]);
}

#[tokio::test]
async fn models_registered_before_bind_are_flushed_in_order() {
    let db = Db::new();
    db.register(models::post());
    db.register(models::user());

    let store = MemoryStore::new();
    db.bind(LoggingDriver::new(Box::new(store.clone()))).unwrap();

    // Registration after bind goes straight into the schema
    db.register(models::profile());

    db.push_schema().await.unwrap();
    assert_eq!(store.tables(), ["posts", "users", "profiles"]);
}

#[tokio::test]
async fn binding_twice_is_config_error() {
    let db = Db::with_driver(MemoryStore::new());

    let err = db.bind(MemoryStore::new()).unwrap_err();

    assert!(err.is_config());
    assert_eq!(
        err.to_string(),
        "configuration error: registry is already bound to a driver"
    );
}

#[test]
fn re_registration_replaces_and_warns() {
    let db = Db::new();
    db.register(models::user());

    let replacement = Model::builder("User")
        .field("id", Field::new(FieldTy::Uuid))
        .build()
        .unwrap();

    let (_, events) = capture_logs(|| {
        db.register(replacement);
    });

    let warning = events
        .iter()
        .find(|event| event.level == Level::WARN)
        .expect("re-registration warns");
    assert_eq!(warning.field("model"), Some("User"));

    let user = db.model("User").unwrap();
    assert_eq!(user.fields.len(), 1);
}

#[test]
fn statements_are_logged_at_debug() {
    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let t = rt.block_on(Test::new(models::all()));

    let ((), events) = capture_logs(|| {
        rt.block_on(async {
            t.db.delete("User", &chorm::Filter::new().eq("name", "x"))
                .await
                .unwrap();
        })
    });

    let exec = events
        .iter()
        .find(|event| event.level == Level::DEBUG && event.message == "exec")
        .expect("statement logged");
    assert_eq!(
        exec.field("sql"),
        Some("ALTER TABLE users DELETE WHERE name = 'x'")
    );
    assert_eq!(exec.field("table"), Some("users"));
}
