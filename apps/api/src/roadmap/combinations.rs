//! Role-combination rules: role/skill/responsibility/experience patterns mapped to a
//! predicted next role.
//!
//! Score per rule:
//! - role-name hit: +3 if the current role contains any role pattern
//! - skill hits: +1 per key skill found inside some skill token
//! - responsibility hits: +0.8 per responsibility found inside some responsibility token
//! - experience: +2 inside [min, max], +1 within one year of either bound, else 0

use serde::Serialize;

/// A static pattern mapping a profile shape to a likely next role.
#[derive(Debug, Serialize)]
pub struct RoleCombination {
    pub role_patterns: &'static [&'static str],
    pub key_skills: &'static [&'static str],
    pub responsibilities: &'static [&'static str],
    pub min_exp: f64,
    /// `None` means unbounded.
    pub max_exp: Option<f64>,
    pub next_role: &'static str,
    pub track_id: Option<&'static str>,
}

const ROLE_HIT_WEIGHT: f64 = 3.0;
const SKILL_HIT_WEIGHT: f64 = 1.0;
const RESPONSIBILITY_HIT_WEIGHT: f64 = 0.8;
const IN_RANGE_SCORE: f64 = 2.0;
const NEAR_RANGE_SCORE: f64 = 1.0;

pub const ROLE_COMBINATIONS: &[RoleCombination] = &[
    // Entry level
    RoleCombination {
        role_patterns: &["hr assistant", "hr executive"],
        key_skills: &["recruitment", "hr operations", "payroll"],
        responsibilities: &["interview scheduling", "onboarding", "sourcing", "documentation"],
        min_exp: 0.0,
        max_exp: Some(2.0),
        next_role: "Recruitment Coordinator",
        track_id: Some("ops"),
    },
    RoleCombination {
        role_patterns: &["recruitment coordinator"],
        key_skills: &["recruitment", "talent acquisition", "hr operations"],
        responsibilities: &["sourcing", "interview scheduling", "onboarding"],
        min_exp: 0.0,
        max_exp: Some(2.0),
        next_role: "Recruiter",
        track_id: Some("ta"),
    },
    RoleCombination {
        role_patterns: &["talent acquisition executive"],
        key_skills: &["recruitment", "talent acquisition", "learning dev"],
        responsibilities: &["sourcing", "interview scheduling", "onboarding", "training coordination"],
        min_exp: 0.0,
        max_exp: Some(2.0),
        next_role: "Recruiter/TA Manager",
        track_id: Some("ta"),
    },
    // Mid level
    RoleCombination {
        role_patterns: &["hr generalist", "operations specialist"],
        key_skills: &["hr operations", "employee relations", "compliance"],
        responsibilities: &["onboarding", "policy administration", "training coordination", "payroll"],
        min_exp: 2.0,
        max_exp: Some(7.0),
        next_role: "HR Manager/Employee Relations",
        track_id: Some("ops"),
    },
    RoleCombination {
        role_patterns: &["recruiter", "recruitment manager"],
        key_skills: &["recruitment", "talent acquisition", "hr operations"],
        responsibilities: &["full cycle hiring", "onboarding", "policy administration"],
        min_exp: 2.0,
        max_exp: Some(7.0),
        next_role: "Senior Recruiter",
        track_id: Some("ta"),
    },
    RoleCombination {
        role_patterns: &["senior recruiter"],
        key_skills: &["recruitment strategy", "stakeholder management", "analytics"],
        responsibilities: &["leading recruitment campaigns", "employer branding"],
        min_exp: 4.0,
        max_exp: Some(8.0),
        next_role: "TA Manager",
        track_id: Some("ta"),
    },
    RoleCombination {
        role_patterns: &["talent acquisition manager"],
        key_skills: &["team leadership", "talent management", "hr strategy"],
        responsibilities: &["managing recruitment teams", "planning workforce strategy"],
        min_exp: 5.0,
        max_exp: Some(10.0),
        next_role: "Head TA/HRBP",
        track_id: Some("ta"),
    },
    RoleCombination {
        role_patterns: &["payroll executive"],
        key_skills: &["payroll processing", "compliance", "data management"],
        responsibilities: &["payroll calculations", "statutory reporting"],
        min_exp: 1.0,
        max_exp: Some(4.0),
        next_role: "Payroll Manager",
        track_id: Some("ops"),
    },
    RoleCombination {
        role_patterns: &["payroll manager"],
        key_skills: &["payroll system management", "compliance"],
        responsibilities: &["oversee payroll processes", "audits", "team management"],
        min_exp: 5.0,
        max_exp: Some(10.0),
        next_role: "HR Manager",
        track_id: Some("ops"),
    },
    RoleCombination {
        role_patterns: &["compensation", "benefits specialist"],
        key_skills: &["c&b strategy", "salary benchmarking", "compliance"],
        responsibilities: &["benefits administration", "salary analysis", "employee queries"],
        min_exp: 3.0,
        max_exp: Some(7.0),
        next_role: "Compensation Manager",
        track_id: Some("cb"),
    },
    RoleCombination {
        role_patterns: &["compensation", "benefits manager"],
        key_skills: &["compensation design", "benefits strategy"],
        responsibilities: &["design pay structures", "manage benefits"],
        min_exp: 8.0,
        max_exp: Some(12.0),
        next_role: "HR Director",
        track_id: Some("cb"),
    },
    RoleCombination {
        role_patterns: &["learning", "development specialist"],
        key_skills: &["learning & development", "performance management", "employee engagement"],
        responsibilities: &["training coordination", "onboarding", "engagement programs"],
        min_exp: 2.0,
        max_exp: Some(7.0),
        next_role: "L&D Manager",
        track_id: Some("ld"),
    },
    RoleCombination {
        role_patterns: &["l&d manager"],
        key_skills: &["l&d strategy", "program management"],
        responsibilities: &["lead l&d programs", "content curation", "evaluation"],
        min_exp: 5.0,
        max_exp: Some(10.0),
        next_role: "Head L&D",
        track_id: Some("ld"),
    },
    RoleCombination {
        role_patterns: &["employee relations specialist", "labor relations specialist"],
        key_skills: &["labor law", "grievance handling", "compliance"],
        responsibilities: &["grievance handling", "union relations", "compliance"],
        min_exp: 2.0,
        max_exp: Some(7.0),
        next_role: "Employee Relations Mgr",
        track_id: Some("hrbp"),
    },
    RoleCombination {
        role_patterns: &["employee relations manager"],
        key_skills: &["conflict resolution", "employee relations", "leadership"],
        responsibilities: &["lead employee relations", "investigations"],
        min_exp: 5.0,
        max_exp: Some(10.0),
        next_role: "HR Manager",
        track_id: Some("hrbp"),
    },
    RoleCombination {
        role_patterns: &["hr business partner", "hrbp"],
        key_skills: &["performance management", "hr operations", "employee relations"],
        responsibilities: &["engagement programs", "policy administration", "compliance audits"],
        min_exp: 7.0,
        max_exp: Some(10.0),
        next_role: "Director/CHRO",
        track_id: Some("hrbp"),
    },
    // Senior
    RoleCombination {
        role_patterns: &["hr manager"],
        key_skills: &["hr operations", "employee relations", "compliance"],
        responsibilities: &["policy administration", "compliance", "team leadership"],
        min_exp: 7.0,
        max_exp: Some(12.0),
        next_role: "HR Director",
        track_id: Some("hrbp"),
    },
    RoleCombination {
        role_patterns: &["hr director"],
        key_skills: &["strategic hr", "leadership", "compliance"],
        responsibilities: &["policy planning", "hr department leadership"],
        min_exp: 10.0,
        max_exp: Some(15.0),
        next_role: "VP HR",
        track_id: Some("hrbp"),
    },
    RoleCombination {
        role_patterns: &["vice president hr", "vp hr"],
        key_skills: &["organizational development", "leadership", "strategy"],
        responsibilities: &["overseeing hr functions", "business integration"],
        min_exp: 12.0,
        max_exp: Some(18.0),
        next_role: "CHRO",
        track_id: Some("hrbp"),
    },
    // Executive
    RoleCombination {
        role_patterns: &["chief hr officer", "chro"],
        key_skills: &["hr transformation", "business leadership"],
        responsibilities: &["hr vision", "people strategy", "compliance", "board liaison"],
        min_exp: 15.0,
        max_exp: Some(25.0),
        next_role: "Group CHRO",
        track_id: Some("hrbp"),
    },
    RoleCombination {
        role_patterns: &["hr consultant"],
        key_skills: &["hr strategy", "compliance", "project management"],
        responsibilities: &["advising organizations", "solution design"],
        min_exp: 10.0,
        max_exp: Some(20.0),
        next_role: "Senior Consultant",
        track_id: Some("hrbp"),
    },
    RoleCombination {
        role_patterns: &["hris analyst"],
        key_skills: &["hr tech", "data analysis", "reporting"],
        responsibilities: &["hr system management", "reporting"],
        min_exp: 1.0,
        max_exp: Some(4.0),
        next_role: "HRIS Manager",
        track_id: Some("ops"),
    },
    // Specialist roles
    RoleCombination {
        role_patterns: &["hris manager"],
        key_skills: &["hr tech strategy", "team leadership"],
        responsibilities: &["manage hr tech implementation", "user training"],
        min_exp: 5.0,
        max_exp: Some(10.0),
        next_role: "HR Manager",
        track_id: Some("ops"),
    },
    RoleCombination {
        role_patterns: &["talent management specialist"],
        key_skills: &["succession planning", "career development"],
        responsibilities: &["manage talent pipelines", "development plans"],
        min_exp: 3.0,
        max_exp: Some(7.0),
        next_role: "Talent Management Manager",
        track_id: Some("ld"),
    },
    RoleCombination {
        role_patterns: &["org development specialist"],
        key_skills: &["change management", "culture", "training"],
        responsibilities: &["drive change initiatives", "culture programs"],
        min_exp: 5.0,
        max_exp: Some(10.0),
        next_role: "Head of Org Development",
        track_id: Some("ld"),
    },
    RoleCombination {
        role_patterns: &["diversity", "inclusion specialist"],
        key_skills: &["dei strategy", "policy", "training"],
        responsibilities: &["implement diversity initiatives", "track compliance"],
        min_exp: 3.0,
        max_exp: Some(7.0),
        next_role: "D&I Manager",
        track_id: Some("hrbp"),
    },
    RoleCombination {
        role_patterns: &["recruitment analyst"],
        key_skills: &["recruitment metrics", "data analytics"],
        responsibilities: &["track hiring kpis", "analyze candidate funnel"],
        min_exp: 1.0,
        max_exp: Some(4.0),
        next_role: "Recruitment Manager",
        track_id: Some("ta"),
    },
    RoleCombination {
        role_patterns: &["talent acquisition analyst"],
        key_skills: &["talent market research", "sourcing analytics"],
        responsibilities: &["analyze recruitment data", "market mapping"],
        min_exp: 2.0,
        max_exp: Some(5.0),
        next_role: "Talent Acquisition Manager",
        track_id: Some("ta"),
    },
];

/// A rule together with its composite score for one input.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCombination {
    pub combination: &'static RoleCombination,
    pub score: f64,
}

impl RoleCombination {
    /// Scores this rule against the lowercased current role and tokenized input.
    pub fn score(
        &self,
        current_role: &str,
        years_experience: f64,
        skills: &[String],
        responsibilities: &[String],
    ) -> f64 {
        let role = current_role.to_lowercase();

        let role_hit = if self.role_patterns.iter().any(|p| role.contains(p)) {
            ROLE_HIT_WEIGHT
        } else {
            0.0
        };

        let skill_hits = count_phrase_hits(self.key_skills, skills) as f64 * SKILL_HIT_WEIGHT;
        let responsibility_hits = count_phrase_hits(self.responsibilities, responsibilities) as f64
            * RESPONSIBILITY_HIT_WEIGHT;

        role_hit + skill_hits + responsibility_hits + self.experience_score(years_experience)
    }

    fn experience_score(&self, years: f64) -> f64 {
        let in_range = years >= self.min_exp && self.max_exp.map_or(true, |max| years <= max);
        let near = (years - self.min_exp).abs() <= 1.0
            || self.max_exp.map_or(false, |max| (years - max).abs() <= 1.0);

        if in_range {
            IN_RANGE_SCORE
        } else if near {
            NEAR_RANGE_SCORE
        } else {
            0.0
        }
    }
}

/// Number of phrases contained (case-insensitively) in at least one token.
fn count_phrase_hits(phrases: &[&str], tokens: &[String]) -> usize {
    phrases
        .iter()
        .filter(|phrase| {
            let phrase = phrase.to_lowercase();
            tokens.iter().any(|token| token.contains(&phrase))
        })
        .count()
}

/// Scores every rule and returns them highest first.
///
/// The sort is stable, so among equal scores the earliest-declared rule stays first.
pub fn rank_combinations(
    current_role: &str,
    years_experience: f64,
    skills: &[String],
    responsibilities: &[String],
) -> Vec<ScoredCombination> {
    let mut ranked: Vec<ScoredCombination> = ROLE_COMBINATIONS
        .iter()
        .map(|combination| ScoredCombination {
            combination,
            score: combination.score(current_role, years_experience, skills, responsibilities),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}

/// The highest-scoring rule for this input.
pub fn best_combination(
    current_role: &str,
    years_experience: f64,
    skills: &[String],
    responsibilities: &[String],
) -> ScoredCombination {
    rank_combinations(current_role, years_experience, skills, responsibilities)
        .into_iter()
        .next()
        .unwrap_or(ScoredCombination {
            combination: &ROLE_COMBINATIONS[0],
            score: 0.0,
        })
}
