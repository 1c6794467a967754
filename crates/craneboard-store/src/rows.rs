//! Row types decoded from SQLite and their conversions into domain records.
//!
//! Enum columns are stored as text; conversion surfaces unknown values as
//! [`StoreError::Corrupt`] instead of panicking.

use craneboard_core::model::{
    Company, CompanySummary, Job, JobWithCompany, Technology, UserSkill, UserSkillWithTechnology,
};
use sqlx::FromRow;

use crate::StoreError;

#[derive(Debug, FromRow)]
pub(crate) struct CompanyRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub size: String,
    pub location: String,
    pub about: String,
    pub created_at: i64,
}

impl CompanyRow {
    pub fn into_company(self) -> Result<Company, StoreError> {
        Ok(Company {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            size: self.size.parse()?,
            location: self.location,
            about: self.about,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct JobRow {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub location: String,
    pub salary: i64,
    pub description: String,
    pub requirements: String,
    pub remote: bool,
    pub level: String,
    pub created_at: i64,
}

impl JobRow {
    pub fn into_job(self) -> Result<Job, StoreError> {
        Ok(Job {
            id: self.id,
            company_id: self.company_id,
            title: self.title,
            location: self.location,
            salary: self.salary,
            description: self.description,
            requirements: self.requirements,
            remote: self.remote,
            level: self.level.parse()?,
            created_at: self.created_at,
        })
    }
}

/// A job joined with the company columns shown on job cards.
#[derive(Debug, FromRow)]
pub(crate) struct JobCardRow {
    #[sqlx(flatten)]
    pub job: JobRow,
    pub company_name: String,
    pub company_size: String,
}

impl JobCardRow {
    pub fn into_job_with_company(self) -> Result<JobWithCompany, StoreError> {
        Ok(JobWithCompany {
            job: self.job.into_job()?,
            company: CompanySummary {
                name: self.company_name,
                size: self.company_size.parse()?,
            },
        })
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct TechnologyRow {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub created_at: i64,
}

impl TechnologyRow {
    pub fn into_technology(self) -> Technology {
        Technology {
            id: self.id,
            title: self.title,
            slug: self.slug,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct UserSkillRow {
    pub user_id: String,
    pub technology_id: String,
    pub years: i64,
    pub created_at: i64,
}

impl UserSkillRow {
    pub fn into_user_skill(self) -> UserSkill {
        UserSkill {
            user_id: self.user_id,
            technology_id: self.technology_id,
            years: self.years,
            created_at: self.created_at,
        }
    }
}

/// A skill registration joined with its technology record.
#[derive(Debug, FromRow)]
pub(crate) struct SkillTechRow {
    pub user_id: String,
    pub years: i64,
    pub created_at: i64,
    pub tech_id: String,
    pub tech_title: String,
    pub tech_slug: String,
    pub tech_created_at: i64,
}

impl SkillTechRow {
    pub fn into_skill_with_technology(self) -> UserSkillWithTechnology {
        UserSkillWithTechnology {
            user_id: self.user_id,
            years: self.years,
            created_at: self.created_at,
            technology: Technology {
                id: self.tech_id,
                title: self.tech_title,
                slug: self.tech_slug,
                created_at: self.tech_created_at,
            },
        }
    }
}
