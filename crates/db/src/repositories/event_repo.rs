//! Repository for the `events` table and its painting / artist links.

use sqlx::PgPool;
use vernissage_core::relations::normalize_ids;
use vernissage_core::types::DbId;

use crate::models::event::{CreateEvent, Event, EventWithLinks, UpdateEvent};
use crate::repositories::links::{EVENT_ARTISTS, EVENT_PAINTINGS};

const COLUMNS: &str = "id, name, photo, place_id, event_date, created_at, updated_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert an event with both link sets in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<EventWithLinks, sqlx::Error> {
        let paintings = normalize_ids(&input.paintings);
        let artists = normalize_ids(&input.artists);
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO events (name, photo, place_id, event_date) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(&input.name)
            .bind(&input.photo)
            .bind(input.place)
            .bind(input.event_date)
            .fetch_one(&mut *tx)
            .await?;

        EVENT_PAINTINGS.replace(&mut tx, event.id, &paintings).await?;
        EVENT_ARTISTS.replace(&mut tx, event.id, &artists).await?;

        tx.commit().await?;
        Ok(EventWithLinks {
            event,
            paintings,
            artists,
        })
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EventWithLinks>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        match event {
            Some(event) => {
                let paintings = EVENT_PAINTINGS.load(pool, event.id).await?;
                let artists = EVENT_ARTISTS.load(pool, event.id).await?;
                Ok(Some(EventWithLinks {
                    event,
                    paintings,
                    artists,
                }))
            }
            None => Ok(None),
        }
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<EventWithLinks>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY id");
        let events = sqlx::query_as::<_, Event>(&query).fetch_all(pool).await?;

        let ids: Vec<DbId> = events.iter().map(|e| e.id).collect();
        let mut paintings = EVENT_PAINTINGS.load_many(pool, &ids).await?;
        let mut artists = EVENT_ARTISTS.load_many(pool, &ids).await?;
        Ok(events
            .into_iter()
            .map(|event| EventWithLinks {
                paintings: paintings.remove(&event.id).unwrap_or_default(),
                artists: artists.remove(&event.id).unwrap_or_default(),
                event,
            })
            .collect())
    }

    /// Replace every field of an event, link sets included.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<EventWithLinks>, sqlx::Error> {
        let paintings = normalize_ids(&input.paintings);
        let artists = normalize_ids(&input.artists);
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE events SET \
                name = $2, \
                photo = $3, \
                place_id = $4, \
                event_date = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.photo)
            .bind(input.place)
            .bind(input.event_date)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(event) = event else {
            return Ok(None);
        };
        EVENT_PAINTINGS.replace(&mut tx, event.id, &paintings).await?;
        EVENT_ARTISTS.replace(&mut tx, event.id, &artists).await?;

        tx.commit().await?;
        Ok(Some(EventWithLinks {
            event,
            paintings,
            artists,
        }))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
