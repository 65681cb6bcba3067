use super::{Field, Relation, TableOptions};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Descriptor for a declared model.
///
/// Built once through [`ModelBuilder`], immutable afterwards. Field order is
/// declaration order and drives the column order of the generated DDL.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub name: String,
    pub fields: IndexMap<String, Field>,
    pub relations: IndexMap<String, Relation>,
    pub table: TableOptions,
}

#[derive(Debug)]
pub struct ModelBuilder {
    model: Model,
}

impl Model {
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            model: Model {
                name: name.into(),
                fields: IndexMap::new(),
                relations: IndexMap::new(),
                table: TableOptions::default(),
            },
        }
    }

    /// Name of the backing table.
    pub fn table_name(&self) -> &str {
        self.table.table_name.as_deref().unwrap_or(&self.name)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Resolves a field referenced by a filter, data map or ordering.
    /// Undeclared names are a configuration error so they never reach SQL.
    pub fn resolve_field(&self, name: &str) -> Result<&Field> {
        self.fields
            .get(name)
            .ok_or_else(|| Error::undeclared_field(&self.name, name))
    }

    pub fn relation(&self, name: &str) -> Result<&Relation> {
        self.relations
            .get(name)
            .ok_or_else(|| Error::relation_not_found(&self.name, name))
    }

    /// Finds the field backed by `column`.
    pub fn field_for_column(&self, column: &str) -> Option<&Field> {
        self.fields.values().find(|field| field.column() == column)
    }

    pub(crate) fn verify(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::config("model name must not be empty"));
        }

        if self.fields.is_empty() {
            return Err(Error::config(format!(
                "model `{}` declares no fields",
                self.name
            )));
        }

        let mut columns = std::collections::HashSet::new();

        for field in self.fields.values() {
            field
                .verify()
                .map_err(|err| err.context(format!("model `{}`", self.name)))?;

            if !columns.insert(field.column()) {
                return Err(Error::config(format!(
                    "model `{}` maps more than one field to column `{}`",
                    self.name,
                    field.column()
                )));
            }
        }

        for relation in self.relations.values() {
            if relation.target.is_empty() {
                return Err(Error::config(format!(
                    "relation `{}` on model `{}` has no target",
                    relation.name, self.name
                )));
            }
        }

        Ok(())
    }
}

impl ModelBuilder {
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        let name = name.into();
        let field = Field {
            name: name.clone(),
            ..field
        };
        self.model.fields.insert(name, field);
        self
    }

    pub fn relation(mut self, name: impl Into<String>, relation: Relation) -> Self {
        let name = name.into();
        let relation = Relation {
            name: name.clone(),
            ..relation
        };
        self.model.relations.insert(name, relation);
        self
    }

    pub fn table(mut self, table: TableOptions) -> Self {
        self.model.table = table;
        self
    }

    /// Validates the descriptor and returns it.
    pub fn build(self) -> Result<Model> {
        self.model.verify()?;
        Ok(self.model)
    }
}
