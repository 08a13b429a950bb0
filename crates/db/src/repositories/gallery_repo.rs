//! Repository for the `galleries` table and its painting links.

use sqlx::PgPool;
use vernissage_core::relations::normalize_ids;
use vernissage_core::types::DbId;

use crate::models::gallery::{CreateGallery, Gallery, GalleryWithPaintings, UpdateGallery};
use crate::repositories::links::GALLERY_PAINTINGS;

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for thematic galleries.
pub struct GalleryRepo;

impl GalleryRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateGallery,
    ) -> Result<GalleryWithPaintings, sqlx::Error> {
        let paintings = normalize_ids(&input.paintings);
        let mut tx = pool.begin().await?;

        let query = format!("INSERT INTO galleries (name) VALUES ($1) RETURNING {COLUMNS}");
        let gallery = sqlx::query_as::<_, Gallery>(&query)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;

        GALLERY_PAINTINGS
            .replace(&mut tx, gallery.id, &paintings)
            .await?;

        tx.commit().await?;
        Ok(GalleryWithPaintings { gallery, paintings })
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GalleryWithPaintings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galleries WHERE id = $1");
        let gallery = sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        match gallery {
            Some(gallery) => {
                let paintings = GALLERY_PAINTINGS.load(pool, gallery.id).await?;
                Ok(Some(GalleryWithPaintings { gallery, paintings }))
            }
            None => Ok(None),
        }
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<GalleryWithPaintings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galleries ORDER BY id");
        let galleries = sqlx::query_as::<_, Gallery>(&query)
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = galleries.iter().map(|g| g.id).collect();
        let mut paintings = GALLERY_PAINTINGS.load_many(pool, &ids).await?;
        Ok(galleries
            .into_iter()
            .map(|gallery| GalleryWithPaintings {
                paintings: paintings.remove(&gallery.id).unwrap_or_default(),
                gallery,
            })
            .collect())
    }

    /// Rename a gallery and replace its painting set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGallery,
    ) -> Result<Option<GalleryWithPaintings>, sqlx::Error> {
        let paintings = normalize_ids(&input.paintings);
        let mut tx = pool.begin().await?;

        let query = format!("UPDATE galleries SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let gallery = sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(gallery) = gallery else {
            return Ok(None);
        };
        GALLERY_PAINTINGS
            .replace(&mut tx, gallery.id, &paintings)
            .await?;

        tx.commit().await?;
        Ok(Some(GalleryWithPaintings { gallery, paintings }))
    }

    /// Delete a gallery. The paintings it showed are untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM galleries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
