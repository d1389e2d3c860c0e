use super::entity::Application;
use crate::domain::{DomainError, DomainResult};

/// Validates all Application invariants
pub fn validate_application(application: &Application) -> DomainResult<()> {
    validate_match_score(application)?;
    Ok(())
}

/// Match score invariants:
/// 1. Assigned once at creation by the portal's matching process
/// 2. Always within 0..=100
fn validate_match_score(application: &Application) -> DomainResult<()> {
    let score = application.match_score;
    if !(0.0..=100.0).contains(&score) || !score.is_finite() {
        return Err(DomainError::MatchScoreOutOfRange(score));
    }
    Ok(())
}

/// Critical Application Invariants:
///
/// 1. Application MUST reference exactly one job and one applicant
/// 2. At most one application per (job_id, applicant_id) pair, enforced by
///    the portal; the client only checks advisorily
/// 3. match_score is immutable after creation
/// 4. status is one of exactly four enumerated states
/// 5. Application id is immutable

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::application::ApplicationStatus;
    use chrono::Utc;

    fn sample(match_score: f32) -> Application {
        Application {
            id: 1,
            job_id: 7,
            applicant_id: 3,
            resume_id: 5,
            application_date: Utc::now(),
            status: ApplicationStatus::Pending,
            match_score,
            job_title: "Backend Engineer".to_string(),
            applicant_name: None,
            applicant_email: None,
        }
    }

    #[test]
    fn test_valid_application() {
        assert!(validate_application(&sample(72.5)).is_ok());
        assert!(validate_application(&sample(0.0)).is_ok());
        assert!(validate_application(&sample(100.0)).is_ok());
    }

    #[test]
    fn test_score_out_of_range_fails() {
        assert!(validate_application(&sample(100.1)).is_err());
        assert!(validate_application(&sample(-1.0)).is_err());
        assert!(validate_application(&sample(f32::NAN)).is_err());
    }
}
