//! PostgreSQL implementation of the repository ports

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use gobeer::{AddingRepository, Beer, DomainError, ListingRepository, Review, ReviewingRepository};

/// PostgreSQL storage for beers and reviews
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct BeerRow {
    id: Uuid,
    name: String,
    brewery: String,
    style: String,
    abv: f64,
    short_desc: String,
    score: f64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<BeerRow> for Beer {
    fn from(row: BeerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            brewery: row.brewery,
            style: row.style,
            abv: row.abv,
            short_desc: row.short_desc,
            score: row.score,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    beer_id: Uuid,
    user_id: String,
    score: f64,
    comment: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: row.id,
            beer_id: row.beer_id,
            user_id: row.user_id,
            score: row.score,
            comment: row.comment,
            created_at: row.created_at,
        }
    }
}

/// Beers with their average review score, computed at read time
const SELECT_BEERS: &str = r#"
    SELECT
        b.id,
        b.name,
        b.brewery,
        b.style,
        b.abv,
        b.short_desc,
        COALESCE(AVG(r.score), 0)::FLOAT8 AS score,
        b.created_at
    FROM beers AS b
    LEFT JOIN reviews AS r ON r.beer_id = b.id
"#;

fn repository_error(e: sqlx::Error) -> DomainError {
    DomainError::Repository(e.to_string())
}

#[async_trait]
impl AddingRepository for PgStorage {
    async fn create_beer(&self, beer: &Beer) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO beers (id, name, brewery, style, abv, short_desc, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(beer.id)
        .bind(&beer.name)
        .bind(&beer.brewery)
        .bind(&beer.style)
        .bind(beer.abv)
        .bind(&beer.short_desc)
        .bind(beer.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            // Lost the race against a concurrent add of the same pair
            sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::AlreadyExists,
            other => repository_error(other),
        })?;

        Ok(())
    }

    async fn beer_exists(&self, name: &str, brewery: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM beers WHERE name = $1 AND brewery = $2)",
        )
        .bind(name)
        .bind(brewery)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)
    }
}

#[async_trait]
impl ListingRepository for PgStorage {
    async fn list_beers(&self) -> Result<Vec<Beer>, DomainError> {
        let query = format!("{SELECT_BEERS} GROUP BY b.id ORDER BY b.created_at");
        let rows = sqlx::query_as::<_, BeerRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_reviews(&self, beer_id: Uuid) -> Result<Vec<Review>, DomainError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, beer_id, user_id, score, comment, created_at
            FROM reviews
            WHERE beer_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(beer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ReviewingRepository for PgStorage {
    async fn get_beer(&self, id: Uuid) -> Result<Beer, DomainError> {
        let query = format!("{SELECT_BEERS} WHERE b.id = $1 GROUP BY b.id");
        let row = sqlx::query_as::<_, BeerRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        row.map(Into::into).ok_or(DomainError::NotFound)
    }

    async fn create_review(&self, review: &Review) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO reviews (id, beer_id, user_id, score, comment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(review.id)
        .bind(review.beer_id)
        .bind(&review.user_id)
        .bind(review.score)
        .bind(&review.comment)
        .bind(review.created_at)
        .execute(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(())
    }
}
