//! Many-to-many link tables and reference lookups.
//!
//! A link table holds `(owner_id, target_id)` pairs under a composite
//! primary key. Both sides cascade on delete, so removing either record
//! drops the link and nothing else.

use std::collections::HashMap;

use sqlx::{PgPool, Postgres, Transaction};
use vernissage_core::types::DbId;

/// One junction table, named by its owner and target columns.
#[derive(Debug, Clone, Copy)]
pub struct LinkTable {
    pub table: &'static str,
    pub owner: &'static str,
    pub target: &'static str,
}

pub const PAINTING_GENRES: LinkTable = LinkTable {
    table: "painting_genres",
    owner: "painting_id",
    target: "genre_id",
};

pub const GALLERY_PAINTINGS: LinkTable = LinkTable {
    table: "gallery_paintings",
    owner: "gallery_id",
    target: "painting_id",
};

pub const EVENT_PAINTINGS: LinkTable = LinkTable {
    table: "event_paintings",
    owner: "event_id",
    target: "painting_id",
};

pub const EVENT_ARTISTS: LinkTable = LinkTable {
    table: "event_artists",
    owner: "event_id",
    target: "artist_id",
};

pub const ARTICLE_PLACES: LinkTable = LinkTable {
    table: "article_places",
    owner: "article_id",
    target: "place_id",
};

pub const ARTICLE_PAINTINGS: LinkTable = LinkTable {
    table: "article_paintings",
    owner: "article_id",
    target: "painting_id",
};

pub const ARTICLE_ARTISTS: LinkTable = LinkTable {
    table: "article_artists",
    owner: "article_id",
    target: "artist_id",
};

pub const ARTICLE_EVENTS: LinkTable = LinkTable {
    table: "article_events",
    owner: "article_id",
    target: "event_id",
};

impl LinkTable {
    /// Replace the owner's whole link set within an existing transaction.
    ///
    /// `target_ids` must already be normalized (sorted, no duplicates).
    pub async fn replace(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner_id: DbId,
        target_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let delete = format!("DELETE FROM {} WHERE {} = $1", self.table, self.owner);
        sqlx::query(&delete)
            .bind(owner_id)
            .execute(&mut **tx)
            .await?;

        if target_ids.is_empty() {
            return Ok(());
        }

        let insert = format!(
            "INSERT INTO {} ({}, {}) \
             SELECT $1, UNNEST($2::bigint[])",
            self.table, self.owner, self.target
        );
        sqlx::query(&insert)
            .bind(owner_id)
            .bind(target_ids)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    /// The target ids linked to one owner, ascending.
    pub async fn load(&self, pool: &PgPool, owner_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        let query = format!(
            "SELECT {target} FROM {table} WHERE {owner} = $1 ORDER BY {target}",
            table = self.table,
            owner = self.owner,
            target = self.target,
        );
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Target ids for many owners in one query, keyed by owner id.
    ///
    /// Owners without links are absent from the map.
    pub async fn load_many(
        &self,
        pool: &PgPool,
        owner_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<DbId>>, sqlx::Error> {
        if owner_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let query = format!(
            "SELECT {owner}, {target} FROM {table} \
             WHERE {owner} = ANY($1) \
             ORDER BY {owner}, {target}",
            table = self.table,
            owner = self.owner,
            target = self.target,
        );
        let rows = sqlx::query_as::<_, (DbId, DbId)>(&query)
            .bind(owner_ids)
            .fetch_all(pool)
            .await?;

        let mut map: HashMap<DbId, Vec<DbId>> = HashMap::new();
        for (owner_id, target_id) in rows {
            map.entry(owner_id).or_default().push(target_id);
        }
        Ok(map)
    }
}

/// Tables that relationship fields may point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefTable {
    Artists,
    Genres,
    Paintings,
    Places,
    Events,
    Articles,
    Comments,
}

impl RefTable {
    pub fn table_name(self) -> &'static str {
        match self {
            RefTable::Artists => "artists",
            RefTable::Genres => "genres",
            RefTable::Paintings => "paintings",
            RefTable::Places => "places",
            RefTable::Events => "events",
            RefTable::Articles => "articles",
            RefTable::Comments => "comments",
        }
    }

    /// The subset of `ids` with no row in this table, ascending and distinct.
    pub async fn missing_ids(self, pool: &PgPool, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT DISTINCT wanted.id \
             FROM UNNEST($1::bigint[]) AS wanted(id) \
             WHERE NOT EXISTS (SELECT 1 FROM {} t WHERE t.id = wanted.id) \
             ORDER BY wanted.id",
            self.table_name()
        );
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
