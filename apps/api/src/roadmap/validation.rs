//! Form validation for roadmap submissions. All violations are reported together.

use crate::errors::AppError;
use crate::roadmap::models::RoadmapInput;
use crate::roadmap::tokenizer::tokenize_list;

pub const MIN_SKILLS: usize = 3;
pub const MIN_RESPONSIBILITIES: usize = 3;
pub const MAX_YEARS_EXPERIENCE: f64 = 50.0;

/// Returns every rule the submission breaks, in field order. Empty means valid.
pub fn collect_violations(input: &RoadmapInput) -> Vec<String> {
    let mut violations = Vec::new();

    if input.full_name.trim().is_empty() {
        violations.push("full_name is required".to_string());
    }

    if input.email.trim().is_empty() {
        violations.push("email is required".to_string());
    } else if !is_valid_email(input.email.trim()) {
        violations.push(format!("email '{}' is not a valid address", input.email.trim()));
    }

    if input.current_role.trim().is_empty() {
        violations.push("current_role is required".to_string());
    }

    let years = input.years_experience;
    if !years.is_finite() || !(0.0..=MAX_YEARS_EXPERIENCE).contains(&years) {
        violations.push(format!(
            "years_experience must be between 0 and {MAX_YEARS_EXPERIENCE}"
        ));
    }

    let skills = tokenize_list(&input.skills).len();
    if skills < MIN_SKILLS {
        violations.push(format!(
            "select at least {MIN_SKILLS} skills (got {skills})"
        ));
    }

    let responsibilities = input.responsibilities.tokens().len();
    if responsibilities < MIN_RESPONSIBILITIES {
        violations.push(format!(
            "list at least {MIN_RESPONSIBILITIES} responsibilities (got {responsibilities})"
        ));
    }

    violations
}

/// Rejects the submission with a single `Validation` error listing every violation.
pub fn validate_input(input: &RoadmapInput) -> Result<(), AppError> {
    let violations = collect_violations(input);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(violations.join("; ")))
    }
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot strictly inside the domain.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}
