//! Next-step narrative: three stages chosen by experience bucket.

use crate::roadmap::catalog::Track;
use crate::roadmap::models::NextStep;

fn step(timeframe: &str, title: String, reason: &str, skills: &[&str]) -> NextStep {
    NextStep {
        timeframe: timeframe.to_string(),
        title,
        reason: reason.to_string(),
        skills_impacted: skills.iter().map(|s| s.to_string()).collect(),
    }
}

/// Builds the three stages for `years` of experience (<3, <7, ≥7).
///
/// When a next role is predicted, the first stage becomes a "Target next role" entry that
/// keeps only the replaced stage's timeframe and impacted skills.
pub fn build_next_steps(
    track: &Track,
    current_role: &str,
    years: f64,
    next_likely_role: Option<&str>,
) -> Vec<NextStep> {
    let base_role = if current_role.is_empty() {
        track.name
    } else {
        current_role
    };

    let mut steps = if years < 3.0 {
        let senior_of = if base_role.contains(track.name) {
            base_role
        } else {
            track.name
        };
        let lead = if track.id == "hrbp" { "HRBP" } else { "Lead" };
        vec![
            step(
                "Stage 1",
                format!("Strengthen {} foundations", track.name),
                &format!(
                    "Solidify fundamentals and ship 2–3 portfolio examples in {}.",
                    track.name
                ),
                &[
                    "Core HR competencies",
                    "Process efficiency",
                    "Stakeholder communication",
                ],
            ),
            step(
                "Stage 2",
                format!("Progress to Senior {senior_of}"),
                "Own end-to-end initiatives and mentor juniors.",
                &["Technical expertise", "Leadership skills", "Project management"],
            ),
            step(
                "Stage 3",
                format!("{lead} role readiness"),
                "Demonstrate measurable business impact; lead cross-functional projects.",
                &["Strategic thinking", "Business acumen", "Change leadership"],
            ),
        ]
    } else if years < 7.0 {
        vec![
            step(
                "Stage 1",
                format!("Own a core pillar in {}", track.name),
                "Define KPIs and deliver a playbook for repeatability.",
                &["Subject matter expertise", "Process optimization", "Analytics"],
            ),
            step(
                "Stage 2",
                format!("{} Lead / Manager", track.name),
                "Lead small team or programs across regions/business units.",
                &[
                    "People management",
                    "Cross-functional collaboration",
                    "Strategic planning",
                ],
            ),
            step(
                "Stage 3",
                format!("Head of {} (scope expansion)", track.name),
                "Expand remit, budget, and stakeholder complexity.",
                &["Executive presence", "Budget management", "Organizational design"],
            ),
        ]
    } else {
        vec![
            step(
                "Stage 1",
                format!("Sharpen strategic narrative in {}", track.name),
                "Create a 12–18 month strategy with ROI model.",
                &[
                    "Strategic vision",
                    "Financial acumen",
                    "Executive communication",
                ],
            ),
            step(
                "Stage 2",
                format!("Head/Director of {}", track.name),
                "Define operating model and governance; scale team.",
                &[
                    "Organizational transformation",
                    "Governance design",
                    "Talent management",
                ],
            ),
            step(
                "Stage 3",
                format!("VP People – {} focus", track.name),
                "Own multi-pillar strategy aligned to business outcomes.",
                &[
                    "Business partnership",
                    "Cultural transformation",
                    "Board-level influence",
                ],
            ),
        ]
    };

    if let Some(role) = next_likely_role {
        let first = &mut steps[0];
        first.title = format!("Target next role: {role}");
        first.reason =
            "Based on your role, experience, and selected skills/responsibilities.".to_string();
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::catalog::find_track;

    fn titles(steps: &[NextStep]) -> Vec<&str> {
        steps.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_junior_bucket() {
        let ta = find_track("ta").unwrap();
        let steps = build_next_steps(ta, "Recruitment Coordinator", 1.0, None);
        assert_eq!(
            titles(&steps),
            vec![
                "Strengthen Talent Acquisition foundations",
                "Progress to Senior Talent Acquisition",
                "Lead role readiness"
            ]
        );
        assert_eq!(steps[0].timeframe, "Stage 1");
    }

    #[test]
    fn test_junior_bucket_keeps_role_containing_track_name() {
        let ta = find_track("ta").unwrap();
        let steps = build_next_steps(ta, "Talent Acquisition Executive", 2.9, None);
        assert_eq!(steps[1].title, "Progress to Senior Talent Acquisition Executive");
    }

    #[test]
    fn test_junior_hrbp_readiness() {
        let hrbp = find_track("hrbp").unwrap();
        let steps = build_next_steps(hrbp, "", 0.0, None);
        assert_eq!(steps[2].title, "HRBP role readiness");
    }

    #[test]
    fn test_mid_bucket_boundaries() {
        let cb = find_track("cb").unwrap();
        let at_three = build_next_steps(cb, "Payroll Executive", 3.0, None);
        assert_eq!(at_three[0].title, "Own a core pillar in Compensation & Benefits");
        let below_seven = build_next_steps(cb, "Payroll Executive", 6.9, None);
        assert_eq!(below_seven[2].title, "Head of Compensation & Benefits (scope expansion)");
    }

    #[test]
    fn test_senior_bucket() {
        let pa = find_track("pa").unwrap();
        let steps = build_next_steps(pa, "HR Manager", 7.0, None);
        assert_eq!(
            titles(&steps),
            vec![
                "Sharpen strategic narrative in People Analytics",
                "Head/Director of People Analytics",
                "VP People – People Analytics focus"
            ]
        );
    }

    #[test]
    fn test_next_role_overwrites_first_step_only() {
        let ta = find_track("ta").unwrap();
        let plain = build_next_steps(ta, "Recruiter", 4.0, None);
        let steps = build_next_steps(ta, "Recruiter", 4.0, Some("Senior Recruiter"));
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].title, "Target next role: Senior Recruiter");
        assert_eq!(steps[0].timeframe, plain[0].timeframe);
        assert_eq!(steps[0].skills_impacted, plain[0].skills_impacted);
        assert_ne!(steps[0].reason, plain[0].reason);
        assert_eq!(steps[1..], plain[1..]);
    }
}
