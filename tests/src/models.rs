//! Models shared by the scenario tests.
//!
//! `User` has many `Post`s and at most one `Profile`; each `Post` belongs to
//! its author.

use chorm::{Field, FieldTy, Model, Relation, TableOptions};

pub fn user() -> Model {
    Model::builder("User")
        .field("id", Field::new(FieldTy::Uuid).required())
        .field("name", Field::new(FieldTy::String).required())
        .field("age", Field::new(FieldTy::UInt8))
        .relation("posts", Relation::one_to_many("Post").foreign_key("user_id"))
        .relation("profile", Relation::one_to_one("Profile").foreign_key("user_id"))
        .table(TableOptions::new().table_name("users").order_by(["id"]))
        .build()
        .unwrap()
}

pub fn post() -> Model {
    Model::builder("Post")
        .field("id", Field::new(FieldTy::Uuid).required())
        .field("user_id", Field::new(FieldTy::Uuid))
        .field("title", Field::new(FieldTy::String))
        .field("published", Field::new(FieldTy::Bool))
        .field("created_at", Field::new(FieldTy::DateTime))
        .relation("author", Relation::many_to_one("User"))
        .table(
            TableOptions::new()
                .table_name("posts")
                .order_by(["user_id", "created_at"]),
        )
        .build()
        .unwrap()
}

pub fn profile() -> Model {
    Model::builder("Profile")
        .field("id", Field::new(FieldTy::Uuid).required())
        .field("user_id", Field::new(FieldTy::Uuid))
        .field("bio", Field::new(FieldTy::String).nullable())
        .table(TableOptions::new().table_name("profiles"))
        .build()
        .unwrap()
}

pub fn all() -> Vec<Model> {
    vec![user(), post(), profile()]
}
