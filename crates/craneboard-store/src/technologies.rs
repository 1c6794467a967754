//! Technology catalog repository.

use craneboard_core::model::{Technology, new_id, now_unix_secs};

use crate::rows::TechnologyRow;
use crate::{Store, StoreError};

impl Store {
    /// Number of technologies in the catalog.
    pub async fn count_technologies(&self) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM technologies")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Insert a technology with a pre-computed slug.
    pub async fn create_technology(
        &self,
        title: &str,
        slug: &str,
    ) -> Result<Technology, StoreError> {
        let row: TechnologyRow = sqlx::query_as(
            "INSERT INTO technologies (id, title, slug, created_at) \
             VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(new_id())
        .bind(title)
        .bind(slug)
        .bind(now_unix_secs())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into_technology())
    }

    /// One page of the catalog in insertion order, plus the total count.
    pub async fn list_technologies(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<Technology>, i64), StoreError> {
        let count = self.count_technologies().await?;

        let offset = i64::from(page.saturating_sub(1)) * i64::from(limit);
        let rows: Vec<TechnologyRow> =
            sqlx::query_as("SELECT * FROM technologies ORDER BY rowid LIMIT ? OFFSET ?")
                .bind(i64::from(limit))
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
        Ok((
            rows.into_iter().map(TechnologyRow::into_technology).collect(),
            count,
        ))
    }

    /// The full catalog, for skill pickers and job forms.
    pub async fn all_technologies(&self) -> Result<Vec<Technology>, StoreError> {
        let rows: Vec<TechnologyRow> =
            sqlx::query_as("SELECT * FROM technologies ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(TechnologyRow::into_technology).collect())
    }

    /// Look up a set of technologies by id. Unknown ids are simply absent
    /// from the result; callers compare lengths to detect them.
    pub async fn technologies_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<Technology>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "SELECT * FROM technologies WHERE id IN ({placeholders}) ORDER BY rowid"
        );
        let mut query = sqlx::query_as::<_, TechnologyRow>(&sql);
        for id in ids {
            query = query.bind(id);
        }
        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(TechnologyRow::into_technology).collect())
    }

    /// Remove a technology from the catalog.
    pub async fn delete_technology(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM technologies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
