//! Domain records shared between the store, the API server, and the client.
//!
//! All ids are UUIDv4 strings; all timestamps are unix seconds. Enum fields
//! serialize (and persist) as SCREAMING_SNAKE_CASE strings.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Error for enum values read from storage or the wire that match no variant.
#[derive(Debug, thiserror::Error)]
#[error("unrecognized {kind} value: {value:?}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

/// Generate a fresh record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current wall-clock time as unix seconds.
pub fn now_unix_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs() as i64)
}

/// Headcount bracket of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    pub fn as_str(self) -> &'static str {
        match self {
            CompanySize::Startup => "STARTUP",
            CompanySize::Small => "SMALL",
            CompanySize::Medium => "MEDIUM",
            CompanySize::Large => "LARGE",
            CompanySize::Enterprise => "ENTERPRISE",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanySize {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STARTUP" => Ok(CompanySize::Startup),
            "SMALL" => Ok(CompanySize::Small),
            "MEDIUM" => Ok(CompanySize::Medium),
            "LARGE" => Ok(CompanySize::Large),
            "ENTERPRISE" => Ok(CompanySize::Enterprise),
            _ => Err(ParseEnumError {
                kind: "company size",
                value: s.to_string(),
            }),
        }
    }
}

/// Seniority level of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobLevel {
    Junior,
    Mid,
    Senior,
    Lead,
}

impl JobLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            JobLevel::Junior => "JUNIOR",
            JobLevel::Mid => "MID",
            JobLevel::Senior => "SENIOR",
            JobLevel::Lead => "LEAD",
        }
    }
}

impl fmt::Display for JobLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JUNIOR" => Ok(JobLevel::Junior),
            "MID" => Ok(JobLevel::Mid),
            "SENIOR" => Ok(JobLevel::Senior),
            "LEAD" => Ok(JobLevel::Lead),
            _ => Err(ParseEnumError {
                kind: "job level",
                value: s.to_string(),
            }),
        }
    }
}

/// A company profile. Each user owns at most one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub size: CompanySize,
    pub location: String,
    pub about: String,
    pub created_at: i64,
}

/// A job posting. Salary is integer cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub location: String,
    pub salary: i64,
    pub description: String,
    pub requirements: String,
    pub remote: bool,
    pub level: JobLevel,
    pub created_at: i64,
}

/// A technology tag. Doubles as the skill catalog users register against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub created_at: i64,
}

/// A user's self-reported experience with a technology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSkill {
    pub user_id: String,
    pub technology_id: String,
    pub years: i64,
    pub created_at: i64,
}

/// Company fields shown on job cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub name: String,
    pub size: CompanySize,
}

/// A job with the company summary, as listed on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobWithCompany {
    #[serde(flatten)]
    pub job: Job,
    pub company: CompanySummary,
}

/// A job with its technology tags, as listed on the company dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobWithTechnologies {
    #[serde(flatten)]
    pub job: Job,
    pub technologies: Vec<Technology>,
}

/// The full public job page: posting, company, and technologies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub job: Job,
    pub company: Company,
    pub technologies: Vec<Technology>,
}

/// A registered skill joined with its technology record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSkillWithTechnology {
    pub user_id: String,
    pub years: i64,
    pub created_at: i64,
    pub technology: Technology,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_enum_round_trip() {
        for size in [
            CompanySize::Startup,
            CompanySize::Small,
            CompanySize::Medium,
            CompanySize::Large,
            CompanySize::Enterprise,
        ] {
            assert_eq!(size.as_str().parse::<CompanySize>().unwrap(), size);
        }
        for level in [
            JobLevel::Junior,
            JobLevel::Mid,
            JobLevel::Senior,
            JobLevel::Lead,
        ] {
            assert_eq!(level.as_str().parse::<JobLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_enum_rejects_unknown() {
        assert!("GIGANTIC".parse::<CompanySize>().is_err());
        assert!("PRINCIPAL".parse::<JobLevel>().is_err());
    }

    #[test]
    fn test_serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&JobLevel::Senior).unwrap();
        assert_eq!(json, "\"SENIOR\"");
        let back: CompanySize = serde_json::from_str("\"ENTERPRISE\"").unwrap();
        assert_eq!(back, CompanySize::Enterprise);
    }

    #[test]
    fn test_job_detail_flattens_job_fields() {
        let job = Job {
            id: new_id(),
            company_id: new_id(),
            title: "Systems Engineer".to_string(),
            location: "Berlin".to_string(),
            salary: 9_500_000,
            description: "d".to_string(),
            requirements: "r".to_string(),
            remote: true,
            level: JobLevel::Senior,
            created_at: now_unix_secs(),
        };
        let with_techs = JobWithTechnologies {
            job: job.clone(),
            technologies: vec![],
        };
        let value = serde_json::to_value(&with_techs).unwrap();
        assert_eq!(value["title"], "Systems Engineer");
        assert_eq!(value["level"], "SENIOR");
        assert!(value["technologies"].is_array());
    }

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }
}
