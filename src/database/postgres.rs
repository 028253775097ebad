//! Postgres-backed `EntityStore` implementations.
//!
//! Queries are runtime-checked `query_as` calls so the crate builds without
//! a live database. Saves with a generated key use INSERT .. RETURNING;
//! saves that already carry a key upsert the full row at that key.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::{
    MenuItemReview, RecommendationRequest, UcsbDiningCommonsMenuItem, UcsbOrganization,
};
use crate::database::store::EntityStore;
use crate::database::DatabaseError;

pub struct PgMenuItemReviewStore {
    pool: PgPool,
}

impl PgMenuItemReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<MenuItemReview, i64> for PgMenuItemReviewStore {
    async fn find_by_id(&self, key: &i64) -> Result<Option<MenuItemReview>, DatabaseError> {
        let row = sqlx::query_as::<_, MenuItemReview>(
            "SELECT * FROM menu_item_reviews WHERE id = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<MenuItemReview>, DatabaseError> {
        let rows = sqlx::query_as::<_, MenuItemReview>(
            "SELECT * FROM menu_item_reviews ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn save(&self, entity: MenuItemReview) -> Result<MenuItemReview, DatabaseError> {
        let saved = if entity.id == 0 {
            sqlx::query_as::<_, MenuItemReview>(
                r#"
                INSERT INTO menu_item_reviews
                    (item_id, reviewer_email, stars, date_reviewed, comments)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(entity.item_id)
            .bind(&entity.reviewer_email)
            .bind(entity.stars)
            .bind(entity.date_reviewed)
            .bind(&entity.comments)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, MenuItemReview>(
                r#"
                INSERT INTO menu_item_reviews
                    (id, item_id, reviewer_email, stars, date_reviewed, comments)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (id) DO UPDATE SET
                    item_id = EXCLUDED.item_id,
                    reviewer_email = EXCLUDED.reviewer_email,
                    stars = EXCLUDED.stars,
                    date_reviewed = EXCLUDED.date_reviewed,
                    comments = EXCLUDED.comments
                RETURNING *
                "#,
            )
            .bind(entity.id)
            .bind(entity.item_id)
            .bind(&entity.reviewer_email)
            .bind(entity.stars)
            .bind(entity.date_reviewed)
            .bind(&entity.comments)
            .fetch_one(&self.pool)
            .await?
        };

        Ok(saved)
    }

    async fn delete(&self, entity: &MenuItemReview) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM menu_item_reviews WHERE id = $1")
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

pub struct PgDiningCommonsMenuItemStore {
    pool: PgPool,
}

impl PgDiningCommonsMenuItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<UcsbDiningCommonsMenuItem, i64> for PgDiningCommonsMenuItemStore {
    async fn find_by_id(
        &self,
        key: &i64,
    ) -> Result<Option<UcsbDiningCommonsMenuItem>, DatabaseError> {
        let row = sqlx::query_as::<_, UcsbDiningCommonsMenuItem>(
            "SELECT * FROM ucsb_dining_commons_menu_items WHERE id = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<UcsbDiningCommonsMenuItem>, DatabaseError> {
        let rows = sqlx::query_as::<_, UcsbDiningCommonsMenuItem>(
            "SELECT * FROM ucsb_dining_commons_menu_items ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn save(
        &self,
        entity: UcsbDiningCommonsMenuItem,
    ) -> Result<UcsbDiningCommonsMenuItem, DatabaseError> {
        let saved = if entity.id == 0 {
            sqlx::query_as::<_, UcsbDiningCommonsMenuItem>(
                r#"
                INSERT INTO ucsb_dining_commons_menu_items
                    (dining_commons_code, name, station)
                VALUES ($1, $2, $3)
                RETURNING *
                "#,
            )
            .bind(&entity.dining_commons_code)
            .bind(&entity.name)
            .bind(&entity.station)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, UcsbDiningCommonsMenuItem>(
                r#"
                INSERT INTO ucsb_dining_commons_menu_items
                    (id, dining_commons_code, name, station)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO UPDATE SET
                    dining_commons_code = EXCLUDED.dining_commons_code,
                    name = EXCLUDED.name,
                    station = EXCLUDED.station
                RETURNING *
                "#,
            )
            .bind(entity.id)
            .bind(&entity.dining_commons_code)
            .bind(&entity.name)
            .bind(&entity.station)
            .fetch_one(&self.pool)
            .await?
        };

        Ok(saved)
    }

    async fn delete(&self, entity: &UcsbDiningCommonsMenuItem) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM ucsb_dining_commons_menu_items WHERE id = $1")
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

pub struct PgRecommendationRequestStore {
    pool: PgPool,
}

impl PgRecommendationRequestStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<RecommendationRequest, i64> for PgRecommendationRequestStore {
    async fn find_by_id(&self, key: &i64) -> Result<Option<RecommendationRequest>, DatabaseError> {
        let row = sqlx::query_as::<_, RecommendationRequest>(
            "SELECT * FROM recommendation_requests WHERE id = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<RecommendationRequest>, DatabaseError> {
        let rows = sqlx::query_as::<_, RecommendationRequest>(
            "SELECT * FROM recommendation_requests ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn save(
        &self,
        entity: RecommendationRequest,
    ) -> Result<RecommendationRequest, DatabaseError> {
        let saved = if entity.id == 0 {
            sqlx::query_as::<_, RecommendationRequest>(
                r#"
                INSERT INTO recommendation_requests
                    (requester_email, professor_email, explanation,
                     date_requested, date_needed, done)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
                "#,
            )
            .bind(&entity.requester_email)
            .bind(&entity.professor_email)
            .bind(&entity.explanation)
            .bind(entity.date_requested)
            .bind(entity.date_needed)
            .bind(entity.done)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, RecommendationRequest>(
                r#"
                INSERT INTO recommendation_requests
                    (id, requester_email, professor_email, explanation,
                     date_requested, date_needed, done)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (id) DO UPDATE SET
                    requester_email = EXCLUDED.requester_email,
                    professor_email = EXCLUDED.professor_email,
                    explanation = EXCLUDED.explanation,
                    date_requested = EXCLUDED.date_requested,
                    date_needed = EXCLUDED.date_needed,
                    done = EXCLUDED.done
                RETURNING *
                "#,
            )
            .bind(entity.id)
            .bind(&entity.requester_email)
            .bind(&entity.professor_email)
            .bind(&entity.explanation)
            .bind(entity.date_requested)
            .bind(entity.date_needed)
            .bind(entity.done)
            .fetch_one(&self.pool)
            .await?
        };

        Ok(saved)
    }

    async fn delete(&self, entity: &RecommendationRequest) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM recommendation_requests WHERE id = $1")
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

pub struct PgOrganizationStore {
    pool: PgPool,
}

impl PgOrganizationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<UcsbOrganization, String> for PgOrganizationStore {
    async fn find_by_id(&self, key: &String) -> Result<Option<UcsbOrganization>, DatabaseError> {
        let row = sqlx::query_as::<_, UcsbOrganization>(
            "SELECT * FROM ucsb_organizations WHERE org_code = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<UcsbOrganization>, DatabaseError> {
        let rows = sqlx::query_as::<_, UcsbOrganization>(
            "SELECT * FROM ucsb_organizations ORDER BY org_code",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn save(&self, entity: UcsbOrganization) -> Result<UcsbOrganization, DatabaseError> {
        // org_code is caller-supplied, so save is always a full-row upsert
        let saved = sqlx::query_as::<_, UcsbOrganization>(
            r#"
            INSERT INTO ucsb_organizations
                (org_code, org_translation_short, org_translation, inactive)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (org_code) DO UPDATE SET
                org_translation_short = EXCLUDED.org_translation_short,
                org_translation = EXCLUDED.org_translation,
                inactive = EXCLUDED.inactive
            RETURNING *
            "#,
        )
        .bind(&entity.org_code)
        .bind(&entity.org_translation_short)
        .bind(&entity.org_translation)
        .bind(entity.inactive)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn delete(&self, entity: &UcsbOrganization) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM ucsb_organizations WHERE org_code = $1")
            .bind(&entity.org_code)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
