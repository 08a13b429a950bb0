//! Repository for the `articles` table and its four link tables.
//!
//! Articles are split into two feeds by `for_main`. Feed-scoped lookups,
//! updates and deletes only see articles of that feed; the unscoped
//! variants see every article.

use sqlx::PgPool;
use vernissage_core::relations::normalize_ids;
use vernissage_core::types::DbId;

use crate::models::article::{
    Article, ArticleFeed, ArticleWithLinks, CreateArticle, UpdateArticle,
};
use crate::repositories::links::{
    ARTICLE_ARTISTS, ARTICLE_EVENTS, ARTICLE_PAINTINGS, ARTICLE_PLACES,
};

const COLUMNS: &str = "id, for_main, title, content, created_at, updated_at";

/// Normalized link sets of an article write.
struct LinkSets {
    places: Vec<DbId>,
    paintings: Vec<DbId>,
    artists: Vec<DbId>,
    events: Vec<DbId>,
}

impl LinkSets {
    fn from_input(input: &CreateArticle) -> Self {
        Self {
            places: normalize_ids(&input.places),
            paintings: normalize_ids(&input.paintings),
            artists: normalize_ids(&input.artists),
            events: normalize_ids(&input.events),
        }
    }

    fn attach(self, article: Article) -> ArticleWithLinks {
        ArticleWithLinks {
            article,
            places: self.places,
            paintings: self.paintings,
            artists: self.artists,
            events: self.events,
        }
    }

    async fn store(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        article_id: DbId,
    ) -> Result<(), sqlx::Error> {
        ARTICLE_PLACES.replace(tx, article_id, &self.places).await?;
        ARTICLE_PAINTINGS
            .replace(tx, article_id, &self.paintings)
            .await?;
        ARTICLE_ARTISTS.replace(tx, article_id, &self.artists).await?;
        ARTICLE_EVENTS.replace(tx, article_id, &self.events).await?;
        Ok(())
    }
}

/// Provides CRUD operations for articles and their link sets.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert an article with all link sets in one transaction.
    ///
    /// `for_main` is stored as given; callers serving a feed set it first.
    pub async fn create(
        pool: &PgPool,
        input: &CreateArticle,
    ) -> Result<ArticleWithLinks, sqlx::Error> {
        let links = LinkSets::from_input(input);
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO articles (for_main, title, content) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(input.for_main)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(&mut *tx)
            .await?;

        links.store(&mut tx, article.id).await?;

        tx.commit().await?;
        Ok(links.attach(article))
    }

    /// Find any article by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ArticleWithLinks>, sqlx::Error> {
        Self::find_scoped(pool, id, None).await
    }

    /// Find an article by ID only if it belongs to `feed`.
    pub async fn find_in_feed(
        pool: &PgPool,
        id: DbId,
        feed: ArticleFeed,
    ) -> Result<Option<ArticleWithLinks>, sqlx::Error> {
        Self::find_scoped(pool, id, Some(feed.for_main())).await
    }

    /// List the articles of one feed, ordered by ID.
    pub async fn list(
        pool: &PgPool,
        feed: ArticleFeed,
    ) -> Result<Vec<ArticleWithLinks>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE for_main = $1 ORDER BY id");
        let articles = sqlx::query_as::<_, Article>(&query)
            .bind(feed.for_main())
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = articles.iter().map(|a| a.id).collect();
        let mut places = ARTICLE_PLACES.load_many(pool, &ids).await?;
        let mut paintings = ARTICLE_PAINTINGS.load_many(pool, &ids).await?;
        let mut artists = ARTICLE_ARTISTS.load_many(pool, &ids).await?;
        let mut events = ARTICLE_EVENTS.load_many(pool, &ids).await?;
        Ok(articles
            .into_iter()
            .map(|article| ArticleWithLinks {
                places: places.remove(&article.id).unwrap_or_default(),
                paintings: paintings.remove(&article.id).unwrap_or_default(),
                artists: artists.remove(&article.id).unwrap_or_default(),
                events: events.remove(&article.id).unwrap_or_default(),
                article,
            })
            .collect())
    }

    /// Replace every field of any article, link sets included.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<ArticleWithLinks>, sqlx::Error> {
        Self::update_scoped(pool, id, None, input).await
    }

    /// Replace an article only if it currently belongs to `feed`.
    pub async fn update_in_feed(
        pool: &PgPool,
        id: DbId,
        feed: ArticleFeed,
        input: &UpdateArticle,
    ) -> Result<Option<ArticleWithLinks>, sqlx::Error> {
        Self::update_scoped(pool, id, Some(feed.for_main()), input).await
    }

    /// Delete any article. Its comments are removed with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        Self::delete_scoped(pool, id, None).await
    }

    /// Delete an article only if it belongs to `feed`.
    pub async fn delete_in_feed(
        pool: &PgPool,
        id: DbId,
        feed: ArticleFeed,
    ) -> Result<bool, sqlx::Error> {
        Self::delete_scoped(pool, id, Some(feed.for_main())).await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn find_scoped(
        pool: &PgPool,
        id: DbId,
        for_main: Option<bool>,
    ) -> Result<Option<ArticleWithLinks>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles \
             WHERE id = $1 AND ($2::boolean IS NULL OR for_main = $2)"
        );
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(for_main)
            .fetch_optional(pool)
            .await?;
        match article {
            Some(article) => {
                let links = LinkSets {
                    places: ARTICLE_PLACES.load(pool, article.id).await?,
                    paintings: ARTICLE_PAINTINGS.load(pool, article.id).await?,
                    artists: ARTICLE_ARTISTS.load(pool, article.id).await?,
                    events: ARTICLE_EVENTS.load(pool, article.id).await?,
                };
                Ok(Some(links.attach(article)))
            }
            None => Ok(None),
        }
    }

    async fn update_scoped(
        pool: &PgPool,
        id: DbId,
        for_main: Option<bool>,
        input: &UpdateArticle,
    ) -> Result<Option<ArticleWithLinks>, sqlx::Error> {
        let links = LinkSets::from_input(input);
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE articles SET \
                for_main = $3, \
                title = $4, \
                content = $5 \
             WHERE id = $1 AND ($2::boolean IS NULL OR for_main = $2) \
             RETURNING {COLUMNS}"
        );
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(for_main)
            .bind(input.for_main)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(article) = article else {
            return Ok(None);
        };
        links.store(&mut tx, article.id).await?;

        tx.commit().await?;
        Ok(Some(links.attach(article)))
    }

    async fn delete_scoped(
        pool: &PgPool,
        id: DbId,
        for_main: Option<bool>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM articles \
             WHERE id = $1 AND ($2::boolean IS NULL OR for_main = $2)",
        )
        .bind(id)
        .bind(for_main)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
