//! Company repository: one company per user, upsert semantics.

use craneboard_core::model::{Company, CompanySize, new_id, now_unix_secs};

use crate::rows::CompanyRow;
use crate::{Store, StoreError};

/// Fields for creating or replacing a company profile.
#[derive(Debug, Clone)]
pub struct CompanyInput {
    pub name: String,
    pub size: CompanySize,
    pub location: String,
    pub about: String,
}

impl Store {
    /// The company owned by the given user, if any.
    pub async fn company_for_user(&self, user_id: &str) -> Result<Option<Company>, StoreError> {
        let row: Option<CompanyRow> =
            sqlx::query_as("SELECT * FROM companies WHERE user_id = ?")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(CompanyRow::into_company).transpose()
    }

    /// Create the user's company, or update it in place if one exists.
    pub async fn upsert_company(
        &self,
        user_id: &str,
        input: &CompanyInput,
    ) -> Result<Company, StoreError> {
        let row: CompanyRow = sqlx::query_as(
            "INSERT INTO companies (id, user_id, name, size, location, about, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 name = excluded.name, \
                 size = excluded.size, \
                 location = excluded.location, \
                 about = excluded.about \
             RETURNING *",
        )
        .bind(new_id())
        .bind(user_id)
        .bind(&input.name)
        .bind(input.size.as_str())
        .bind(&input.location)
        .bind(&input.about)
        .bind(now_unix_secs())
        .fetch_one(&self.pool)
        .await?;
        row.into_company()
    }
}
