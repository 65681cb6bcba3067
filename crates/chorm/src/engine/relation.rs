use super::Engine;
use crate::Fetched;

use chorm_core::{
    schema::{Model, Relation, RelationKind},
    stmt::{Filter, Include, Record, Value},
    Error, Result,
};
use chorm_sql::Statement;

use indexmap::IndexMap;

/// Key field every model is joined on.
const PRIMARY_KEY: &str = "id";

/// Resolves each requested relation for every parent row and attaches the
/// related rows under the relation name.
///
/// Parents are resolved one at a time, one round trip each, so the rows
/// attached to a parent are always the rows matching that parent's key.
pub(super) async fn include(
    engine: &Engine<'_>,
    model: &Model,
    rows: &mut [Record],
    include: &IndexMap<String, Include>,
) -> Result<()> {
    for (name, include) in include {
        let relation = model.relation(name)?;
        let target = engine.model(&relation.target)?;
        let options = include.options().cloned().unwrap_or_default();

        let single = relation.is_single() || options.limit == Some(1);
        let limit = options.limit.or(relation.is_single().then_some(1));

        let context =
            |err: Error| err.context(format!("including `{name}` on model `{}`", model.name));

        // Overrides are checked once, so they are rejected even when no
        // parent row has a key to join on.
        Statement::select(target, &options.filter, &options.order_by, limit, options.offset)
            .map_err(context)?;

        for row in rows.iter_mut() {
            let related = match predicate(relation, row) {
                Some(predicate) => {
                    // The relation predicate wins over the caller's filter
                    let filter = predicate.merge(&options.filter);

                    tracing::trace!(
                        model = %model.name,
                        relation = %name,
                        target = %target.name,
                        "resolving include"
                    );

                    engine
                        .select(target, &filter, &options.order_by, limit, options.offset)
                        .await
                        .map_err(context)?
                }
                None => Vec::new(),
            };

            row.insert(name.clone(), attach(related, single));
        }
    }

    Ok(())
}

/// Filter selecting the rows related to `row`, or `None` when the row has
/// no key to join on.
fn predicate(relation: &Relation, row: &Record) -> Option<Filter> {
    let (field, key) = match relation.kind {
        RelationKind::OneToOne | RelationKind::OneToMany => {
            (relation.foreign_key.as_str(), row.get(PRIMARY_KEY)?)
        }
        RelationKind::ManyToOne => (PRIMARY_KEY, row.get(&relation.foreign_key)?),
    };

    if key.is_null() {
        return None;
    }

    Some(Filter::new().eq(field, key.clone()))
}

fn attach(related: Vec<Record>, single: bool) -> Value {
    if single {
        Fetched::One(related.into_iter().next()).into()
    } else {
        Fetched::Many(related).into()
    }
}
