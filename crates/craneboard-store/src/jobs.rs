//! Job repository: postings, technology links, and the paged/latest lists.

use craneboard_core::model::{
    Job, JobDetail, JobLevel, JobWithCompany, JobWithTechnologies, Technology, new_id,
    now_unix_secs,
};

use crate::rows::{CompanyRow, JobCardRow, JobRow, TechnologyRow};
use crate::{Store, StoreError};

/// Fields for creating or updating a job posting. Salary is integer cents.
#[derive(Debug, Clone)]
pub struct JobInput {
    pub company_id: String,
    pub title: String,
    pub location: String,
    pub salary: i64,
    pub description: String,
    pub requirements: String,
    pub remote: bool,
    pub level: JobLevel,
}

impl Store {
    /// Insert a job and link its technologies, atomically.
    pub async fn create_job(
        &self,
        input: &JobInput,
        technology_ids: &[String],
    ) -> Result<Job, StoreError> {
        let id = new_id();
        let created_at = now_unix_secs();

        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "INSERT INTO jobs (id, company_id, title, location, salary, description, \
                               requirements, remote, level, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&input.company_id)
        .bind(&input.title)
        .bind(&input.location)
        .bind(input.salary)
        .bind(&input.description)
        .bind(&input.requirements)
        .bind(input.remote)
        .bind(input.level.as_str())
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        for technology_id in technology_ids {
            sqlx::query("INSERT INTO job_technologies (job_id, technology_id) VALUES (?, ?)")
                .bind(&id)
                .bind(technology_id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        Ok(Job {
            id,
            company_id: input.company_id.clone(),
            title: input.title.clone(),
            location: input.location.clone(),
            salary: input.salary,
            description: input.description.clone(),
            requirements: input.requirements.clone(),
            remote: input.remote,
            level: input.level,
            created_at,
        })
    }

    /// Rewrite a job's fields and replace its technology links.
    ///
    /// Fails with [`StoreError::NotFound`] when the job does not exist.
    pub async fn update_job(
        &self,
        job_id: &str,
        input: &JobInput,
        technology_ids: &[String],
    ) -> Result<Job, StoreError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(
            "UPDATE jobs SET title = ?, location = ?, salary = ?, description = ?, \
                             requirements = ?, remote = ?, level = ? \
             WHERE id = ?",
        )
        .bind(&input.title)
        .bind(&input.location)
        .bind(input.salary)
        .bind(&input.description)
        .bind(&input.requirements)
        .bind(input.remote)
        .bind(input.level.as_str())
        .bind(job_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        sqlx::query("DELETE FROM job_technologies WHERE job_id = ?")
            .bind(job_id)
            .execute(&mut *tx)
            .await?;
        for technology_id in technology_ids {
            sqlx::query("INSERT INTO job_technologies (job_id, technology_id) VALUES (?, ?)")
                .bind(job_id)
                .bind(technology_id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        match self.job_by_id(job_id).await? {
            Some(job) => Ok(job),
            None => Err(StoreError::NotFound),
        }
    }

    /// Delete a job. Technology links go with it (cascade).
    pub async fn delete_job(&self, job_id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = ?")
            .bind(job_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Fetch a bare job record.
    pub async fn job_by_id(&self, job_id: &str) -> Result<Option<Job>, StoreError> {
        let row: Option<JobRow> = sqlx::query_as("SELECT * FROM jobs WHERE id = ?")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(JobRow::into_job).transpose()
    }

    /// Fetch the public job page: posting, company, and technologies.
    pub async fn job_detail(&self, job_id: &str) -> Result<Option<JobDetail>, StoreError> {
        let Some(job) = self.job_by_id(job_id).await? else {
            return Ok(None);
        };

        let company: CompanyRow = sqlx::query_as("SELECT * FROM companies WHERE id = ?")
            .bind(&job.company_id)
            .fetch_one(&self.pool)
            .await?;
        let technologies = self.job_technologies(job_id).await?;

        Ok(Some(JobDetail {
            job,
            company: company.into_company()?,
            technologies,
        }))
    }

    /// Technologies linked to a job, in catalog order.
    pub async fn job_technologies(&self, job_id: &str) -> Result<Vec<Technology>, StoreError> {
        let rows: Vec<TechnologyRow> = sqlx::query_as(
            "SELECT t.* FROM technologies t \
             JOIN job_technologies jt ON jt.technology_id = t.id \
             WHERE jt.job_id = ? \
             ORDER BY t.rowid",
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(TechnologyRow::into_technology).collect())
    }

    /// One page of a company's jobs (newest first) plus the total count.
    pub async fn list_company_jobs(
        &self,
        company_id: &str,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<JobWithTechnologies>, i64), StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs WHERE company_id = ?")
            .bind(company_id)
            .fetch_one(&self.pool)
            .await?;

        let offset = i64::from(page.saturating_sub(1)) * i64::from(limit);
        let rows: Vec<JobRow> = sqlx::query_as(
            "SELECT * FROM jobs WHERE company_id = ? \
             ORDER BY created_at DESC, rowid DESC \
             LIMIT ? OFFSET ?",
        )
        .bind(company_id)
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let mut jobs = Vec::with_capacity(rows.len());
        for row in rows {
            let job = row.into_job()?;
            let technologies = self.job_technologies(&job.id).await?;
            jobs.push(JobWithTechnologies { job, technologies });
        }
        Ok((jobs, count))
    }

    /// The newest postings across all companies, with company summaries.
    pub async fn latest_jobs(&self, limit: u32) -> Result<Vec<JobWithCompany>, StoreError> {
        let rows: Vec<JobCardRow> = sqlx::query_as(
            "SELECT j.*, c.name AS company_name, c.size AS company_size \
             FROM jobs j JOIN companies c ON c.id = j.company_id \
             ORDER BY j.created_at DESC, j.rowid DESC \
             LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(JobCardRow::into_job_with_company)
            .collect()
    }
}
