//! Repository for the `paintings` table and its genre links.

use sqlx::PgPool;
use vernissage_core::relations::normalize_ids;
use vernissage_core::types::DbId;

use crate::models::painting::{CreatePainting, Painting, PaintingWithGenres, UpdatePainting};
use crate::repositories::links::PAINTING_GENRES;

const COLUMNS: &str = "id, title, photo, author_id, painting_date, description, \
    created_at, updated_at";

/// Provides CRUD operations for paintings and their genre associations.
pub struct PaintingRepo;

impl PaintingRepo {
    /// Insert a painting and its genre links in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePainting,
    ) -> Result<PaintingWithGenres, sqlx::Error> {
        let genres = normalize_ids(&input.genres);
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO paintings (title, photo, author_id, painting_date, description) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let painting = sqlx::query_as::<_, Painting>(&query)
            .bind(&input.title)
            .bind(&input.photo)
            .bind(input.author)
            .bind(input.painting_date)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        PAINTING_GENRES.replace(&mut tx, painting.id, &genres).await?;

        tx.commit().await?;
        Ok(PaintingWithGenres { painting, genres })
    }

    /// Find a painting by ID, enriched with its genres.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PaintingWithGenres>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM paintings WHERE id = $1");
        let painting = sqlx::query_as::<_, Painting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        match painting {
            Some(painting) => {
                let genres = PAINTING_GENRES.load(pool, painting.id).await?;
                Ok(Some(PaintingWithGenres { painting, genres }))
            }
            None => Ok(None),
        }
    }

    /// List all paintings ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<PaintingWithGenres>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM paintings ORDER BY id");
        let paintings = sqlx::query_as::<_, Painting>(&query)
            .fetch_all(pool)
            .await?;
        Self::with_genres(pool, paintings).await
    }

    /// List the paintings authored by one artist, ordered by ID.
    pub async fn list_by_author(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<PaintingWithGenres>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM paintings WHERE author_id = $1 ORDER BY id");
        let paintings = sqlx::query_as::<_, Painting>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await?;
        Self::with_genres(pool, paintings).await
    }

    /// Replace every field of a painting, genre set included.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePainting,
    ) -> Result<Option<PaintingWithGenres>, sqlx::Error> {
        let genres = normalize_ids(&input.genres);
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE paintings SET \
                title = $2, \
                photo = $3, \
                author_id = $4, \
                painting_date = $5, \
                description = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let painting = sqlx::query_as::<_, Painting>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.photo)
            .bind(input.author)
            .bind(input.painting_date)
            .bind(&input.description)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(painting) = painting else {
            return Ok(None);
        };
        PAINTING_GENRES.replace(&mut tx, painting.id, &genres).await?;

        tx.commit().await?;
        Ok(Some(PaintingWithGenres { painting, genres }))
    }

    /// Delete a painting. Its gallery, event and article links go with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM paintings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn with_genres(
        pool: &PgPool,
        paintings: Vec<Painting>,
    ) -> Result<Vec<PaintingWithGenres>, sqlx::Error> {
        let ids: Vec<DbId> = paintings.iter().map(|p| p.id).collect();
        let mut genres = PAINTING_GENRES.load_many(pool, &ids).await?;
        Ok(paintings
            .into_iter()
            .map(|painting| PaintingWithGenres {
                genres: genres.remove(&painting.id).unwrap_or_default(),
                painting,
            })
            .collect())
    }
}
