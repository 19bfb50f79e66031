//! Generic repository operations over any entity in the schema.
//!
//! These are thin, uniformly-shaped wrappers around `SeaORM`'s query builder:
//! fetch by surrogate key, fetch all (optionally filtered), fetch the first
//! match, and persist one or many models. Absence is a typed `None`, never an
//! error. Every function is generic over [`ConnectionTrait`], so callers that
//! own a transaction pass the transaction and callers that don't pass the
//! plain connection; this layer never opens or closes transactions itself.

use crate::errors::Result;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, EntityTrait, Insert, IntoActiveModel,
    PrimaryKeyTrait, QueryFilter, TryIntoModel,
};

/// Fetches one entity by its primary key, `None` if no row matches.
pub async fn get<E, C>(
    db: &C,
    id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
) -> Result<Option<E::Model>>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    E::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Fetches all rows of an entity, optionally filtered by a predicate.
/// Row order is insertion order unless the predicate implies otherwise.
pub async fn list<E, C>(db: &C, predicate: Option<SimpleExpr>) -> Result<Vec<E::Model>>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let mut query = E::find();
    if let Some(predicate) = predicate {
        query = query.filter(predicate);
    }
    query.all(db).await.map_err(Into::into)
}

/// Fetches the first row matching a predicate, `None` if no row matches.
pub async fn find_one<E, C>(db: &C, predicate: SimpleExpr) -> Result<Option<E::Model>>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    E::find().filter(predicate).one(db).await.map_err(Into::into)
}

/// Persists one new or updated entity and returns the resulting model.
///
/// Inserts when the primary key is unset, updates otherwise.
pub async fn save<A, C>(db: &C, entity: A) -> Result<<A::Entity as EntityTrait>::Model>
where
    A: ActiveModelTrait
        + ActiveModelBehavior
        + Send
        + TryIntoModel<<A::Entity as EntityTrait>::Model>,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    let saved = entity.save(db).await?;
    saved.try_into_model().map_err(Into::into)
}

/// Persists a batch of new entities in a single insert statement.
/// A no-op on an empty batch.
pub async fn save_all<A, C, I>(db: &C, entities: I) -> Result<()>
where
    A: ActiveModelTrait,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    I: IntoIterator<Item = A>,
    C: ConnectionTrait,
{
    Insert::many(entities)
        .on_empty_do_nothing()
        .exec_without_returning(db)
        .await?;
    Ok(())
}
