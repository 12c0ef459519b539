use serde::{Deserialize, Serialize};

/// Free-form text that arrives either as one delimited string or as a list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FreeText {
    Text(String),
    List(Vec<String>),
}

impl Default for FreeText {
    fn default() -> Self {
        FreeText::Text(String::new())
    }
}

impl From<&str> for FreeText {
    fn from(text: &str) -> Self {
        FreeText::Text(text.to_string())
    }
}

/// Self-reported profile submitted through the roadmap form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadmapInput {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub current_role: String,
    #[serde(default)]
    pub years_experience: f64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub responsibilities: FreeText,
}

/// A titled link: general resource or platform course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRef {
    pub title: String,
    pub url: String,
}

/// One stage of the three-step career narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextStep {
    pub timeframe: String,
    pub title: String,
    pub reason: String,
    pub skills_impacted: Vec<String>,
}

/// One month of the twelve-month learning plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPlanEntry {
    pub month: u8,
    pub learning: String,
    pub practicing: String,
    pub implementing: String,
}

/// Full roadmap returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub track: String,
    pub track_id: String,
    pub confidence: f64, // 0.30 – 1.00, two decimals
    pub summary: String,
    pub next_steps: Vec<NextStep>,        // always 3
    pub skills_to_develop: Vec<String>,   // at most 5
    pub certifications: Vec<String>,
    pub resources: Vec<LinkRef>,
    pub courses: Vec<LinkRef>,
    pub monthly_plan: Vec<MonthlyPlanEntry>, // always 12
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_likely_role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responsibilities_accepts_string() {
        let json = r#"{
            "full_name": "Jane Doe",
            "email": "jane@company.com",
            "current_role": "Recruiter",
            "years_experience": 4,
            "skills": ["Recruitment"],
            "responsibilities": "Sourcing, Onboarding"
        }"#;
        let input: RoadmapInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.responsibilities, FreeText::from("Sourcing, Onboarding"));
        assert_eq!(input.years_experience, 4.0);
    }

    #[test]
    fn test_responsibilities_accepts_list() {
        let json = r#"{"responsibilities": ["Sourcing", "Onboarding"]}"#;
        let input: RoadmapInput = serde_json::from_str(json).unwrap();
        assert_eq!(
            input.responsibilities,
            FreeText::List(vec!["Sourcing".to_string(), "Onboarding".to_string()])
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let input: RoadmapInput = serde_json::from_str("{}").unwrap();
        assert!(input.full_name.is_empty());
        assert!(input.skills.is_empty());
        assert_eq!(input.years_experience, 0.0);
        assert_eq!(input.responsibilities, FreeText::default());
    }

    #[test]
    fn test_absent_next_role_is_not_serialized() {
        let roadmap = Roadmap {
            track: "Talent Acquisition".to_string(),
            track_id: "ta".to_string(),
            confidence: 0.3,
            summary: String::new(),
            next_steps: vec![],
            skills_to_develop: vec![],
            certifications: vec![],
            resources: vec![],
            courses: vec![],
            monthly_plan: vec![],
            next_likely_role: None,
        };
        let value = serde_json::to_value(&roadmap).unwrap();
        assert!(value.get("next_likely_role").is_none());
    }
}
