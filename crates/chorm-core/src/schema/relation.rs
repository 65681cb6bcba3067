/// A declared relationship from one model to another.
///
/// The target is held by name and resolved against the registry when an
/// include is evaluated, so models may reference each other in any order,
/// including cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Relation name, the key under which related rows are attached. Set
    /// when the relation is added to a model.
    pub name: String,

    pub kind: RelationKind,

    /// Name of the related model
    pub target: String,

    /// Foreign-key column. Defaults to `<lowercased target>_id`.
    pub foreign_key: String,

    /// Declared for documentation purposes. Deletes are never cascaded.
    pub cascade_delete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// The target holds a foreign key to this model; at most one target row
    OneToOne,

    /// The target holds a foreign key to this model
    OneToMany,

    /// This model holds a foreign key to the target
    ManyToOne,
}

impl Relation {
    pub fn new(kind: RelationKind, target: impl Into<String>) -> Relation {
        let target = target.into();
        let foreign_key = format!("{}_id", target.to_lowercase());

        Relation {
            name: String::new(),
            kind,
            target,
            foreign_key,
            cascade_delete: false,
        }
    }

    pub fn one_to_one(target: impl Into<String>) -> Relation {
        Relation::new(RelationKind::OneToOne, target)
    }

    pub fn one_to_many(target: impl Into<String>) -> Relation {
        Relation::new(RelationKind::OneToMany, target)
    }

    pub fn many_to_one(target: impl Into<String>) -> Relation {
        Relation::new(RelationKind::ManyToOne, target)
    }

    pub fn foreign_key(mut self, foreign_key: impl Into<String>) -> Self {
        self.foreign_key = foreign_key.into();
        self
    }

    pub fn cascade_delete(mut self, cascade_delete: bool) -> Self {
        self.cascade_delete = cascade_delete;
        self
    }

    /// Whether a parent has at most one related row.
    pub fn is_single(&self) -> bool {
        !matches!(self.kind, RelationKind::OneToMany)
    }
}
