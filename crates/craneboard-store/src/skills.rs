//! Skill registration repository: users record years of experience
//! against catalog technologies.

use craneboard_core::model::{UserSkill, UserSkillWithTechnology, now_unix_secs};

use crate::rows::{SkillTechRow, UserSkillRow};
use crate::{Store, StoreError};

impl Store {
    /// All skills registered by a user, joined with their technologies,
    /// in registration order.
    pub async fn user_skills(
        &self,
        user_id: &str,
    ) -> Result<Vec<UserSkillWithTechnology>, StoreError> {
        let rows: Vec<SkillTechRow> = sqlx::query_as(
            "SELECT s.user_id, s.years, s.created_at, \
                    t.id AS tech_id, t.title AS tech_title, t.slug AS tech_slug, \
                    t.created_at AS tech_created_at \
             FROM user_skills s \
             JOIN technologies t ON t.id = s.technology_id \
             WHERE s.user_id = ? \
             ORDER BY s.rowid",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(SkillTechRow::into_skill_with_technology)
            .collect())
    }

    /// Register a skill, or update the years if already registered.
    pub async fn upsert_user_skill(
        &self,
        user_id: &str,
        technology_id: &str,
        years: i64,
    ) -> Result<UserSkill, StoreError> {
        let row: UserSkillRow = sqlx::query_as(
            "INSERT INTO user_skills (user_id, technology_id, years, created_at) \
             VALUES (?, ?, ?, ?) \
             ON CONFLICT (user_id, technology_id) DO UPDATE SET years = excluded.years \
             RETURNING *",
        )
        .bind(user_id)
        .bind(technology_id)
        .bind(years)
        .bind(now_unix_secs())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into_user_skill())
    }

    /// Remove a registered skill.
    pub async fn remove_user_skill(
        &self,
        user_id: &str,
        technology_id: &str,
    ) -> Result<(), StoreError> {
        let result =
            sqlx::query("DELETE FROM user_skills WHERE user_id = ? AND technology_id = ?")
                .bind(user_id)
                .bind(technology_id)
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
