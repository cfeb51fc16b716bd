//! `PostgreSQL` implementation of the `CreatureRepository` trait.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::debug;

use pokeparty_core::creature::{Creature, CreatureId, StatLine};
use pokeparty_core::error::DomainError;
use pokeparty_core::repository::{CreatureFilter, CreatureRepository};

/// PostgreSQL-backed creature repository.
#[derive(Debug, Clone)]
pub struct PgCreatureRepository {
    pool: PgPool,
}

impl PgCreatureRepository {
    /// Creates a new `PgCreatureRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// One row of the `pokemon` table.
#[derive(Debug, sqlx::FromRow)]
struct PokemonRow {
    id: i32,
    name: String,
    sprite: Option<String>,
    types: Json<Vec<String>>,
    stats: Json<Vec<StatLine>>,
    in_box: bool,
}

impl From<PokemonRow> for Creature {
    fn from(row: PokemonRow) -> Self {
        Creature {
            id: row.id,
            name: row.name,
            sprite: row.sprite,
            types: row.types.0,
            stats: row.stats.0,
            in_box: row.in_box,
        }
    }
}

/// `None` matches every row; `Some(flag)` matches rows with that flag.
fn in_box_param(filter: CreatureFilter) -> Option<bool> {
    match filter {
        CreatureFilter::All => None,
        CreatureFilter::Party => Some(false),
        CreatureFilter::Boxed => Some(true),
    }
}

#[allow(clippy::needless_pass_by_value)]
fn infrastructure(e: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(e.to_string())
}

#[async_trait]
impl CreatureRepository for PgCreatureRepository {
    async fn find_many(&self, filter: CreatureFilter) -> Result<Vec<Creature>, DomainError> {
        let rows: Vec<PokemonRow> = sqlx::query_as(
            "SELECT id, name, sprite, types, stats, in_box FROM pokemon \
             WHERE ($1::boolean IS NULL OR in_box = $1) \
             ORDER BY id ASC",
        )
        .bind(in_box_param(filter))
        .fetch_all(&self.pool)
        .await
        .map_err(infrastructure)?;

        Ok(rows.into_iter().map(Creature::from).collect())
    }

    async fn find_unique(&self, id: CreatureId) -> Result<Option<Creature>, DomainError> {
        let row: Option<PokemonRow> = sqlx::query_as(
            "SELECT id, name, sprite, types, stats, in_box FROM pokemon WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(infrastructure)?;

        Ok(row.map(Creature::from))
    }

    async fn count(&self, filter: CreatureFilter) -> Result<usize, DomainError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM pokemon WHERE ($1::boolean IS NULL OR in_box = $1)",
        )
        .bind(in_box_param(filter))
        .fetch_one(&self.pool)
        .await
        .map_err(infrastructure)?;

        usize::try_from(count)
            .map_err(|e| DomainError::Infrastructure(format!("invalid row count {count}: {e}")))
    }

    async fn upsert(&self, creature: &Creature) -> Result<Creature, DomainError> {
        let row: PokemonRow = sqlx::query_as(
            "INSERT INTO pokemon (id, name, sprite, types, stats, in_box) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 sprite = EXCLUDED.sprite, \
                 types = EXCLUDED.types, \
                 stats = EXCLUDED.stats, \
                 in_box = EXCLUDED.in_box \
             RETURNING id, name, sprite, types, stats, in_box",
        )
        .bind(creature.id)
        .bind(&creature.name)
        .bind(&creature.sprite)
        .bind(Json(&creature.types))
        .bind(Json(&creature.stats))
        .bind(creature.in_box)
        .fetch_one(&self.pool)
        .await
        .map_err(infrastructure)?;

        debug!(creature_id = row.id, in_box = row.in_box, "upserted creature");
        Ok(row.into())
    }

    async fn set_in_box(&self, id: CreatureId, in_box: bool) -> Result<Creature, DomainError> {
        let row: Option<PokemonRow> = sqlx::query_as(
            "UPDATE pokemon SET in_box = $2 WHERE id = $1 \
             RETURNING id, name, sprite, types, stats, in_box",
        )
        .bind(id)
        .bind(in_box)
        .fetch_optional(&self.pool)
        .await
        .map_err(infrastructure)?;

        row.map(Creature::from).ok_or(DomainError::NotFound(id))
    }

    async fn delete(&self, id: CreatureId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM pokemon WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(infrastructure)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(id));
        }
        Ok(())
    }

    async fn rebalance_party(&self, party_ids: &[CreatureId]) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(infrastructure)?;

        sqlx::query("UPDATE pokemon SET in_box = TRUE")
            .execute(&mut *tx)
            .await
            .map_err(infrastructure)?;

        sqlx::query("UPDATE pokemon SET in_box = FALSE WHERE id = ANY($1)")
            .bind(party_ids)
            .execute(&mut *tx)
            .await
            .map_err(infrastructure)?;

        tx.commit().await.map_err(infrastructure)?;

        debug!(?party_ids, "rebalanced party");
        Ok(())
    }
}
