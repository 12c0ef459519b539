//! Roadmap Engine: assembles a full roadmap from a form submission.
//!
//! Pipeline: tokenize → track keyword scoring + role-combination scoring → resolution →
//! gaps, next steps, monthly plan, track/role content → `Roadmap`.
//!
//! `AppState` holds an `Arc<dyn RoadmapEngine>`; `RuleBasedEngine` is the default.

use tracing::debug;

use crate::roadmap::catalog::Link;
use crate::roadmap::classifier::{classify_track, resolve};
use crate::roadmap::combinations::best_combination;
use crate::roadmap::gaps::skill_gaps;
use crate::roadmap::models::{LinkRef, Roadmap, RoadmapInput};
use crate::roadmap::monthly_plan::select_monthly_plan;
use crate::roadmap::next_steps::build_next_steps;
use crate::roadmap::overrides::find_override;
use crate::roadmap::tokenizer::tokenize_list;

/// The roadmap engine trait. Implement this to swap the recommendation backend without
/// touching handlers.
pub trait RoadmapEngine: Send + Sync {
    fn build(&self, input: &RoadmapInput) -> Roadmap;

    /// Short label for transparency in logs and responses.
    fn name(&self) -> &'static str;
}

/// Deterministic engine over the static catalogs.
pub struct RuleBasedEngine;

impl RoadmapEngine for RuleBasedEngine {
    fn build(&self, input: &RoadmapInput) -> Roadmap {
        build_roadmap(input)
    }

    fn name(&self) -> &'static str {
        "rule_based"
    }
}

const SUMMARY_TAIL: &str =
    "The plan below focuses on clear next roles, skill gaps, and high-ROI learning.";

/// Builds a roadmap. Pure: identical input always yields identical output.
pub fn build_roadmap(input: &RoadmapInput) -> Roadmap {
    let skills = tokenize_list(&input.skills);
    let responsibilities = input.responsibilities.tokens();
    let all_tokens: Vec<String> = skills.iter().chain(&responsibilities).cloned().collect();

    let (baseline, keyword_score) = classify_track(&all_tokens);
    let best = best_combination(
        &input.current_role,
        input.years_experience,
        &skills,
        &responsibilities,
    );
    let resolution = resolve(baseline, keyword_score, &best);
    let track = resolution.track;
    let next_likely_role = resolution.next_likely_role;

    debug!(
        baseline = baseline.id,
        track = track.id,
        keyword_score = resolution.keyword_score,
        combo_score = resolution.combo_score,
        confidence = resolution.confidence,
        next_likely_role = ?next_likely_role,
        "Resolved roadmap track"
    );

    let next_steps = build_next_steps(
        track,
        &input.current_role,
        input.years_experience,
        next_likely_role,
    );

    let plan_keys = next_likely_role
        .into_iter()
        .chain([input.current_role.as_str(), track.name]);
    let monthly_plan = select_monthly_plan(plan_keys);

    let certifications = track.certifications.iter().map(|c| c.to_string()).collect();

    let (skills_to_develop, resources, courses) =
        match next_likely_role.and_then(find_override) {
            Some(role) => (
                role.skills_to_develop.iter().map(|s| s.to_string()).collect(),
                to_link_refs(role.resources),
                to_link_refs(role.courses),
            ),
            None => (
                skill_gaps(track, &all_tokens),
                to_link_refs(track.resources),
                to_link_refs(track.courses),
            ),
        };

    Roadmap {
        track: track.name.to_string(),
        track_id: track.id.to_string(),
        confidence: resolution.confidence,
        summary: build_summary(input, track.name, next_likely_role),
        next_steps,
        skills_to_develop,
        certifications,
        resources,
        courses,
        monthly_plan,
        next_likely_role: next_likely_role.map(str::to_string),
    }
}

fn to_link_refs(links: &[Link]) -> Vec<LinkRef> {
    links.iter().map(Link::to_owned_ref).collect()
}

fn build_summary(input: &RoadmapInput, track_name: &str, next_role: Option<&str>) -> String {
    let first_name = input.full_name.split(' ').next().unwrap_or_default();
    let role = if input.current_role.is_empty() {
        "HR"
    } else {
        input.current_role.as_str()
    };

    let base = format!(
        "{first_name}, based on your {} years in {role}, your strongest trajectory is {track_name}.",
        input.years_experience
    );

    match next_role {
        Some(next) => format!("{base} Likely next role: {next}. {SUMMARY_TAIL}"),
        None => format!("{base} {SUMMARY_TAIL}"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::classifier::STRONG_COMBO_THRESHOLD;
    use crate::roadmap::combinations::rank_combinations;
    use crate::roadmap::models::FreeText;

    fn make_input(
        role: &str,
        years: f64,
        skills: &[&str],
        responsibilities: &str,
    ) -> RoadmapInput {
        RoadmapInput {
            full_name: "Jane Doe".to_string(),
            email: "jane@company.com".to_string(),
            current_role: role.to_string(),
            years_experience: years,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            responsibilities: FreeText::from(responsibilities),
        }
    }

    fn recruiter_input() -> RoadmapInput {
        make_input(
            "Recruiter",
            4.0,
            &["recruitment", "talent acquisition", "hr operations"],
            "sourcing candidates, interview scheduling, onboarding",
        )
    }

    fn zero_signal_input() -> RoadmapInput {
        make_input(
            "",
            0.0,
            &["communication", "teamwork", "punctuality"],
            "meetings, emails, filing",
        )
    }

    fn sample_inputs() -> Vec<RoadmapInput> {
        vec![
            recruiter_input(),
            zero_signal_input(),
            make_input("", 0.0, &[], ""),
            make_input(
                "Payroll Executive",
                2.0,
                &["Payroll Processing", "Compliance", "Data Management"],
                "Payroll calculations\nStatutory reporting",
            ),
            make_input(
                "HR Business Partner (HRBP)",
                9.0,
                &["Performance Management", "Employee Relations", "HR Operations"],
                "Engagement programs, Compliance audits, Policy administration",
            ),
            make_input(
                "Chief Happiness Officer",
                35.0,
                &["Excel", "SQL", "Dashboards"],
                "Metrics, Data pipelines, BI",
            ),
            make_input(
                "Learning & Development Specialist",
                5.5,
                &["Learning & Development", "Training", "Employee Engagement"],
                "Training coordination, Onboarding, Engagement programs",
            ),
        ]
    }

    #[test]
    fn test_recruiter_scenario() {
        let roadmap = build_roadmap(&recruiter_input());
        assert_eq!(roadmap.track, "Talent Acquisition");
        assert_eq!(roadmap.track_id, "ta");
        assert_eq!(roadmap.next_likely_role.as_deref(), Some("Senior Recruiter"));
        assert_eq!(roadmap.confidence, 0.76);
        assert_eq!(roadmap.next_steps[0].title, "Target next role: Senior Recruiter");
        assert_eq!(roadmap.next_steps[1].title, "Talent Acquisition Lead / Manager");
        assert_eq!(
            roadmap.skills_to_develop,
            vec!["Strategic sourcing", "Analytics", "Leadership"]
        );
        // recruiter plan via "senior recruiter"
        assert_eq!(
            roadmap.monthly_plan[0].learning,
            "Study advanced interview frameworks"
        );
        assert_eq!(
            roadmap.summary,
            "Jane, based on your 4 years in Recruiter, your strongest trajectory is Talent Acquisition. \
             Likely next role: Senior Recruiter. The plan below focuses on clear next roles, skill gaps, and high-ROI learning."
        );
    }

    #[test]
    fn test_zero_signal_scenario() {
        let roadmap = build_roadmap(&zero_signal_input());
        assert_eq!(roadmap.confidence, 0.3);
        assert_eq!(roadmap.track, "Talent Acquisition");
        assert!(roadmap.next_likely_role.is_none());
        assert!(!roadmap.next_steps[0].title.starts_with("Target next role"));
        assert_eq!(roadmap.monthly_plan[0].learning, "Study core HR concepts");
        assert!(roadmap
            .summary
            .starts_with("Jane, based on your 0 years in HR, your strongest trajectory"));
    }

    #[test]
    fn test_unmatched_role_has_no_next_role() {
        let input = make_input("Chief Happiness Officer", 35.0, &["Excel"], "Metrics");
        let roadmap = build_roadmap(&input);
        assert!(roadmap.next_likely_role.is_none());
        assert!(!roadmap.next_steps[0].title.starts_with("Target next role"));
        assert_eq!(roadmap.track, "People Analytics");
        // without a prediction, track-level content is used
        let pa = crate::roadmap::catalog::find_track("pa").unwrap();
        assert_eq!(roadmap.resources, to_link_refs(pa.resources));
        assert_eq!(roadmap.courses, to_link_refs(pa.courses));
    }

    #[test]
    fn test_combo_track_overrides_keyword_baseline() {
        // Keywords alone favour People Analytics; the payroll executive rule points at ops.
        let input = make_input(
            "Payroll Executive",
            2.0,
            &["Payroll Processing", "Data Management", "Excel dashboards"],
            "Payroll calculations, Statutory reporting",
        );
        let roadmap = build_roadmap(&input);
        assert_eq!(roadmap.track_id, "ops");
        assert_eq!(roadmap.next_likely_role.as_deref(), Some("Payroll Manager"));
        // certifications always follow the resolved track
        assert_eq!(
            roadmap.certifications,
            vec!["Workday / SAP module", "Payroll Foundations", "Lean / Six Sigma Yellow"]
        );
    }

    #[test]
    fn test_override_replaces_courses_even_when_empty() {
        let input = make_input(
            "Talent Acquisition Analyst",
            3.0,
            &["Talent Market Research", "Sourcing Analytics", "Analytics"],
            "Analyze recruitment data, Market mapping",
        );
        let roadmap = build_roadmap(&input);
        assert_eq!(
            roadmap.next_likely_role.as_deref(),
            Some("Talent Acquisition Manager")
        );
        assert!(roadmap.courses.is_empty());
        assert_eq!(
            roadmap.skills_to_develop,
            vec!["Strategic Sourcing", "Communication"]
        );
        assert_eq!(roadmap.monthly_plan[0].learning, "Develop strategic sourcing plans");
    }

    #[test]
    fn test_monthly_plan_prefers_next_role() {
        let input = make_input(
            "HR Generalist",
            3.0,
            &["HR Operations", "Compliance", "Payroll"],
            "Documentation",
        );
        let roadmap = build_roadmap(&input);
        assert_eq!(
            roadmap.next_likely_role.as_deref(),
            Some("HR Manager/Employee Relations")
        );
        assert_eq!(
            roadmap.monthly_plan[0].learning,
            "Study advanced labor laws & union rules"
        );
    }

    #[test]
    fn test_monthly_plan_falls_back_to_current_role() {
        // "Payroll Manager" has no plan of its own; "HR Specialist" does.
        let input = make_input(
            "HR Specialist",
            2.0,
            &["Payroll Processing", "Compliance", "Data Management"],
            "Payroll calculations",
        );
        let roadmap = build_roadmap(&input);
        assert_eq!(roadmap.next_likely_role.as_deref(), Some("Payroll Manager"));
        assert_eq!(roadmap.monthly_plan[0].learning, "Deep dive HR compliance and laws");
    }

    #[test]
    fn test_monthly_plan_generic_when_nothing_matches() {
        let input = make_input(
            "Payroll Executive",
            2.0,
            &["Payroll Processing", "Compliance", "Data Management"],
            "Payroll calculations",
        );
        let roadmap = build_roadmap(&input);
        assert_eq!(roadmap.next_likely_role.as_deref(), Some("Payroll Manager"));
        assert_eq!(roadmap.monthly_plan[0].learning, "Study core HR concepts");
    }

    #[test]
    fn test_invariants_hold_for_sample_inputs() {
        for input in sample_inputs() {
            let roadmap = build_roadmap(&input);
            assert!((0.3..=1.0).contains(&roadmap.confidence));
            let scaled = roadmap.confidence * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
            assert_eq!(roadmap.next_steps.len(), 3);
            assert!(roadmap.skills_to_develop.len() <= 5);
            assert_eq!(roadmap.monthly_plan.len(), 12);
            for (i, month) in roadmap.monthly_plan.iter().enumerate() {
                assert_eq!(month.month as usize, i + 1);
            }
        }
    }

    #[test]
    fn test_threshold_law() {
        for input in sample_inputs() {
            let skills = tokenize_list(&input.skills);
            let resp = input.responsibilities.tokens();
            let top = rank_combinations(&input.current_role, input.years_experience, &skills, &resp)
                [0]
            .score;
            let roadmap = build_roadmap(&input);
            assert_eq!(
                roadmap.next_likely_role.is_some(),
                top >= STRONG_COMBO_THRESHOLD,
                "role {:?} scored {top}",
                input.current_role
            );
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        for input in sample_inputs() {
            let first = serde_json::to_string(&build_roadmap(&input)).unwrap();
            let second = serde_json::to_string(&build_roadmap(&input)).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_rule_based_engine_delegates() {
        let engine = RuleBasedEngine;
        assert_eq!(engine.build(&recruiter_input()), build_roadmap(&recruiter_input()));
        assert_eq!(engine.name(), "rule_based");
    }

    #[test]
    fn test_fractional_years_in_summary() {
        let mut input = zero_signal_input();
        input.years_experience = 2.5;
        input.full_name = "Priya".to_string();
        let roadmap = build_roadmap(&input);
        assert!(roadmap.summary.starts_with("Priya, based on your 2.5 years in HR"));
    }
}
