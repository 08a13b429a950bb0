//! Integration tests for the repository layer against a real database:
//! - Link sets are stored as sorted sets
//! - Nullify-on-delete for painting authors, event places and comment parents
//! - Cascade delete for link rows and article comments
//! - Unique constraint and foreign key violations
//! - Article feeds

use assert_matches::assert_matches;
use sqlx::PgPool;
use vernissage_db::models::article::{ArticleFeed, CreateArticle};
use vernissage_db::models::artist::CreateArtist;
use vernissage_db::models::comment::CreateComment;
use vernissage_db::models::event::CreateEvent;
use vernissage_db::models::gallery::CreateGallery;
use vernissage_db::models::genre::CreateGenre;
use vernissage_db::models::painting::CreatePainting;
use vernissage_db::models::place::CreatePlace;
use vernissage_db::repositories::{
    ArticleRepo, ArtistRepo, CommentRepo, EventRepo, GalleryRepo, GenreRepo, PaintingRepo,
    PlaceRepo, RefTable,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_artist(name: &str) -> CreateArtist {
    CreateArtist {
        name: name.to_string(),
        ..Default::default()
    }
}

fn new_genre(name: &str) -> CreateGenre {
    CreateGenre {
        genre_name: name.to_string(),
        ..Default::default()
    }
}

fn new_painting(title: &str, author: Option<i64>, genres: Vec<i64>) -> CreatePainting {
    CreatePainting {
        title: title.to_string(),
        author,
        genres,
        ..Default::default()
    }
}

fn new_article(title: &str, for_main: bool) -> CreateArticle {
    CreateArticle {
        title: title.to_string(),
        for_main,
        ..Default::default()
    }
}

fn new_comment(article: i64, parent: Option<i64>, content: &str) -> CreateComment {
    CreateComment {
        article,
        parent,
        content: content.to_string(),
        ..Default::default()
    }
}

fn constraint_of(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint().map(str::to_string),
        _ => None,
    }
}

fn code_of(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Link sets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_painting_genres_are_sorted_and_deduplicated(pool: PgPool) {
    let a = GenreRepo::create(&pool, &new_genre("Пейзаж")).await.unwrap();
    let b = GenreRepo::create(&pool, &new_genre("Портрет")).await.unwrap();

    let painting = PaintingRepo::create(&pool, &new_painting("Утро", None, vec![b.id, a.id, b.id]))
        .await
        .unwrap();
    assert_eq!(painting.genres, vec![a.id, b.id]);

    let fetched = PaintingRepo::find_by_id(&pool, painting.painting.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.genres, vec![a.id, b.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_whole_link_set(pool: PgPool) {
    let a = GenreRepo::create(&pool, &new_genre("Пейзаж")).await.unwrap();
    let b = GenreRepo::create(&pool, &new_genre("Портрет")).await.unwrap();
    let painting = PaintingRepo::create(&pool, &new_painting("Утро", None, vec![a.id]))
        .await
        .unwrap();
    let id = painting.painting.id;

    let updated = PaintingRepo::update(&pool, id, &new_painting("Утро", None, vec![b.id]))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.genres, vec![b.id]);

    let cleared = PaintingRepo::update(&pool, id, &new_painting("Утро", None, vec![]))
        .await
        .unwrap()
        .unwrap();
    assert!(cleared.genres.is_empty());
    let listed = PaintingRepo::list(&pool).await.unwrap();
    assert!(listed[0].genres.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let result = GalleryRepo::update(
        &pool,
        999,
        &CreateGallery {
            name: "Нет".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_ids_reports_only_absent_rows(pool: PgPool) {
    let genre = GenreRepo::create(&pool, &new_genre("Натюрморт")).await.unwrap();
    let missing = RefTable::Genres
        .missing_ids(&pool, &[genre.id + 7, genre.id, genre.id + 3, genre.id + 7])
        .await
        .unwrap();
    assert_eq!(missing, vec![genre.id + 3, genre.id + 7]);

    let none = RefTable::Genres.missing_ids(&pool, &[]).await.unwrap();
    assert!(none.is_empty());
}

// ---------------------------------------------------------------------------
// Delete rules
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_artist_clears_painting_author(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("Шишкин")).await.unwrap();
    let painting = PaintingRepo::create(&pool, &new_painting("Рожь", Some(artist.id), vec![]))
        .await
        .unwrap();
    let event = EventRepo::create(
        &pool,
        &CreateEvent {
            name: "Выставка".into(),
            artists: vec![artist.id],
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(ArtistRepo::delete(&pool, artist.id).await.unwrap());

    let painting = PaintingRepo::find_by_id(&pool, painting.painting.id)
        .await
        .unwrap()
        .expect("painting survives its author");
    assert_eq!(painting.painting.author_id, None);

    let event = EventRepo::find_by_id(&pool, event.event.id)
        .await
        .unwrap()
        .expect("event survives");
    assert!(event.artists.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_place_clears_event_place(pool: PgPool) {
    let place = PlaceRepo::create(
        &pool,
        &CreatePlace {
            name: "Галерея Ижад".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let event = EventRepo::create(
        &pool,
        &CreateEvent {
            name: "Вернисаж".into(),
            place: Some(place.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(PlaceRepo::delete(&pool, place.id).await.unwrap());

    let event = EventRepo::find_by_id(&pool, event.event.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(event.event.place_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_genre_keeps_painting(pool: PgPool) {
    let genre = GenreRepo::create(&pool, &new_genre("Марина")).await.unwrap();
    let painting = PaintingRepo::create(&pool, &new_painting("Девятый вал", None, vec![genre.id]))
        .await
        .unwrap();

    assert!(GenreRepo::delete(&pool, genre.id).await.unwrap());

    let painting = PaintingRepo::find_by_id(&pool, painting.painting.id)
        .await
        .unwrap()
        .unwrap();
    assert!(painting.genres.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_painting_unlinks_gallery(pool: PgPool) {
    let painting = PaintingRepo::create(&pool, &new_painting("Грачи", None, vec![]))
        .await
        .unwrap();
    let gallery = GalleryRepo::create(
        &pool,
        &CreateGallery {
            name: "Весна".into(),
            paintings: vec![painting.painting.id],
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(gallery.paintings, vec![painting.painting.id]);

    assert!(PaintingRepo::delete(&pool, painting.painting.id).await.unwrap());

    let gallery = GalleryRepo::find_by_id(&pool, gallery.gallery.id)
        .await
        .unwrap()
        .unwrap();
    assert!(gallery.paintings.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_article_cascades_to_comments(pool: PgPool) {
    let article = ArticleRepo::create(&pool, &new_article("Открытие", false))
        .await
        .unwrap();
    let article_id = article.article.id;
    let root = CommentRepo::create(&pool, &new_comment(article_id, None, "Первый"))
        .await
        .unwrap();
    let reply = CommentRepo::create(&pool, &new_comment(article_id, Some(root.id), "Ответ"))
        .await
        .unwrap();

    assert!(ArticleRepo::delete(&pool, article_id).await.unwrap());

    assert!(CommentRepo::find_by_id(&pool, root.id).await.unwrap().is_none());
    assert!(CommentRepo::find_by_id(&pool, reply.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_parent_comment_promotes_replies(pool: PgPool) {
    let article = ArticleRepo::create(&pool, &new_article("Открытие", false))
        .await
        .unwrap();
    let article_id = article.article.id;
    let root = CommentRepo::create(&pool, &new_comment(article_id, None, "Первый"))
        .await
        .unwrap();
    let reply = CommentRepo::create(&pool, &new_comment(article_id, Some(root.id), "Ответ"))
        .await
        .unwrap();

    assert!(CommentRepo::delete(&pool, root.id).await.unwrap());

    let reply = CommentRepo::find_by_id(&pool, reply.id).await.unwrap().unwrap();
    assert_eq!(reply.parent_id, None);
    assert_eq!(reply.article_id, article_id);
    assert!(ArticleRepo::find_by_id(&pool, article_id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_row_returns_false(pool: PgPool) {
    assert!(!ArtistRepo::delete(&pool, 12345).await.unwrap());
    assert!(!CommentRepo::delete(&pool, 12345).await.unwrap());
}

// ---------------------------------------------------------------------------
// Constraint violations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_genre_name_is_rejected(pool: PgPool) {
    GenreRepo::create(&pool, &new_genre("Пейзаж")).await.unwrap();
    let err = GenreRepo::create(&pool, &new_genre("Пейзаж"))
        .await
        .unwrap_err();
    assert_eq!(constraint_of(&err).as_deref(), Some("uq_genres_genre_name"));
    assert_eq!(GenreRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_artist_name_is_rejected_on_update(pool: PgPool) {
    ArtistRepo::create(&pool, &new_artist("Левитан")).await.unwrap();
    let other = ArtistRepo::create(&pool, &new_artist("Саврасов")).await.unwrap();

    let err = ArtistRepo::update(&pool, other.id, &new_artist("Левитан"))
        .await
        .unwrap_err();
    assert_eq!(constraint_of(&err).as_deref(), Some("uq_artists_name"));

    let unchanged = ArtistRepo::find_by_id(&pool, other.id).await.unwrap().unwrap();
    assert_eq!(unchanged.name, "Саврасов");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_link_target_rolls_back_insert(pool: PgPool) {
    let err = PaintingRepo::create(&pool, &new_painting("Утро", None, vec![424242]))
        .await
        .unwrap_err();
    assert_matches!(code_of(&err).as_deref(), Some("23503"));
    assert!(PaintingRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Comments and article feeds
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ancestor_ids_walks_parent_chain(pool: PgPool) {
    let article = ArticleRepo::create(&pool, &new_article("Открытие", false))
        .await
        .unwrap();
    let article_id = article.article.id;
    let a = CommentRepo::create(&pool, &new_comment(article_id, None, "a"))
        .await
        .unwrap();
    let b = CommentRepo::create(&pool, &new_comment(article_id, Some(a.id), "b"))
        .await
        .unwrap();
    let c = CommentRepo::create(&pool, &new_comment(article_id, Some(b.id), "c"))
        .await
        .unwrap();

    assert_eq!(CommentRepo::ancestor_ids(&pool, c.id).await.unwrap(), vec![a.id, b.id]);
    assert!(CommentRepo::ancestor_ids(&pool, a.id).await.unwrap().is_empty());

    let listed = CommentRepo::list_by_article(&pool, article_id).await.unwrap();
    assert_eq!(listed.len(), 3);

    assert!(CommentRepo::has_replies(&pool, b.id).await.unwrap());
    assert!(!CommentRepo::has_replies(&pool, c.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_article_feeds_are_disjoint(pool: PgPool) {
    let blog = ArticleRepo::create(&pool, &new_article("Блог", false))
        .await
        .unwrap();
    let main = ArticleRepo::create(&pool, &new_article("Главная", true))
        .await
        .unwrap();

    let blog_ids: Vec<i64> = ArticleRepo::list(&pool, ArticleFeed::Blog)
        .await
        .unwrap()
        .iter()
        .map(|a| a.article.id)
        .collect();
    let main_ids: Vec<i64> = ArticleRepo::list(&pool, ArticleFeed::Homepage)
        .await
        .unwrap()
        .iter()
        .map(|a| a.article.id)
        .collect();
    assert_eq!(blog_ids, vec![blog.article.id]);
    assert_eq!(main_ids, vec![main.article.id]);

    assert!(ArticleRepo::find_in_feed(&pool, blog.article.id, ArticleFeed::Homepage)
        .await
        .unwrap()
        .is_none());
    assert!(!ArticleRepo::delete_in_feed(&pool, blog.article.id, ArticleFeed::Homepage)
        .await
        .unwrap());
    assert!(ArticleRepo::find_by_id(&pool, blog.article.id)
        .await
        .unwrap()
        .is_some());
}
