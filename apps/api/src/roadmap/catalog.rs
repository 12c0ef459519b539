//! Track catalog: the six HR specialization tracks and their per-track content.
//!
//! Declaration order matters: the keyword classifier breaks ties in favour of the
//! earliest track, and an all-zero score falls back to the first one.

use serde::Serialize;

use crate::roadmap::models::LinkRef;

/// A static title + URL pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Link {
    pub title: &'static str,
    pub url: &'static str,
}

impl Link {
    pub fn to_owned_ref(&self) -> LinkRef {
        LinkRef {
            title: self.title.to_string(),
            url: self.url.to_string(),
        }
    }
}

/// An HR specialization track with its matching keywords and recommended content.
#[derive(Debug, Serialize)]
pub struct Track {
    pub id: &'static str,
    pub name: &'static str,
    /// Substrings matched against input tokens.
    pub keywords: &'static [&'static str],
    pub core_competencies: &'static [&'static str],
    pub certifications: &'static [&'static str],
    pub resources: &'static [Link],
    pub courses: &'static [Link],
}

pub const TRACKS: &[Track] = &[
    Track {
        id: "ta",
        name: "Talent Acquisition",
        keywords: &["recruit", "sourc", "hiring", "interview", "employer branding"],
        core_competencies: &[
            "sourcing",
            "interviewing",
            "stakeholder mgmt",
            "employer branding",
            "candidate experience",
        ],
        certifications: &["LinkedIn Talent Solutions Cert", "Social Talent TA", "SHRM-CP"],
        resources: &[
            Link { title: "Social Talent - Recruiting", url: "https://www.socialtalent.com/" },
            Link { title: "Boolean basics", url: "https://booleanstrings.com/" },
        ],
        courses: &[
            Link {
                title: "Keka ATS Certification course",
                url: "https://academy.keka.com/courses/keka-hire-ats-certification/",
            },
            Link {
                title: "HR BootCamp Masterclass Certification",
                url: "https://academy.keka.com/courses/hr-bootcamp/",
            },
        ],
    },
    Track {
        id: "hrbp",
        name: "HR Business Partner",
        keywords: &[
            "employee relations",
            "business partner",
            "stakeholder",
            "workforce planning",
            "org design",
            "performance",
        ],
        core_competencies: &[
            "employee relations",
            "org design",
            "workforce planning",
            "performance mgmt",
            "change mgmt",
        ],
        certifications: &["PHR / SHRM-CP", "SHRM-SCP (later)", "CIPD Level 5"],
        resources: &[
            Link { title: "Josh Bersin - HRBP", url: "https://joshbersin.com/" },
            Link {
                title: "Org Design Basics",
                url: "https://hbr.org/topic/subject/organizational-structure",
            },
        ],
        courses: &[
            Link {
                title: "HR Generalist Certification Course",
                url: "https://academy.keka.com/courses/hr-generalist-certification-course/",
            },
            Link {
                title: "Employee Engagement Certification Course",
                url: "https://academy.keka.com/courses/employee-engagement-course/",
            },
            Link {
                title: "PMS (Performance Management) Certification Course",
                url: "https://academy.keka.com/courses/performance-management/",
            },
            Link {
                title: "POSH Certification Course",
                url: "https://academy.keka.com/courses/posh-certification-fundamentals-for-hr/",
            },
        ],
    },
    Track {
        id: "cb",
        name: "Compensation & Benefits",
        keywords: &["compensation", "benefit", "payroll", "salary", "benchmark", "job grading"],
        core_competencies: &[
            "salary benchmarking",
            "job architecture",
            "pay equity",
            "benefits design",
            "reward strategy",
        ],
        certifications: &["WorldatWork C1-C4", "Excel/SQL for HR", "SHRM-SCP"],
        resources: &[
            Link { title: "WorldatWork", url: "https://worldatwork.org/" },
            Link { title: "Radford Surveys", url: "https://radford.aon.com/" },
        ],
        courses: &[
            Link {
                title: "Compensation and Benefits Certification Course",
                url: "https://academy.keka.com/courses/compensation-and-benefits/",
            },
            Link {
                title: "India Payroll Certification Course",
                url: "https://academy.keka.com/courses/indian-payroll/",
            },
        ],
    },
    Track {
        id: "ld",
        name: "Learning & Development",
        keywords: &["learning", "training", "facilitation", "coaching", "enablement", "onboarding"],
        core_competencies: &[
            "needs analysis",
            "curriculum design",
            "facilitation",
            "lms admin",
            "evaluation (kirkpatrick)",
        ],
        certifications: &["ATD CPLP / APTD", "Instructional Design", "Facilitation Skills"],
        resources: &[
            Link { title: "ATD", url: "https://www.td.org/" },
            Link { title: "Instructional Design 101", url: "https://www.coursera.org/" },
        ],
        courses: &[
            Link {
                title: "HR BootCamp Masterclass Certification",
                url: "https://academy.keka.com/courses/hr-bootcamp/",
            },
            Link {
                title: "AI in HR Certification Course",
                url: "https://academy.keka.com/courses/ai-in-hr/",
            },
            Link {
                title: "Employee Engagement Certification Course",
                url: "https://academy.keka.com/courses/employee-engagement-course/",
            },
        ],
    },
    Track {
        id: "pa",
        name: "People Analytics",
        keywords: &["analytics", "data", "excel", "sql", "bi", "dashboard", "metrics"],
        core_competencies: &[
            "excel / sheets",
            "sql or no-sql",
            "data visualization",
            "people metrics",
            "experimentation",
        ],
        certifications: &["Google Data Analytics", "People Analytics (Wharton)", "SQL Basics"],
        resources: &[
            Link {
                title: "Google Data Analytics",
                url: "https://www.coursera.org/professional-certificates/google-data-analytics",
            },
            Link {
                title: "People Analytics Intro",
                url: "https://www.coursera.org/learn/wharton-people-analytics",
            },
        ],
        courses: &[
            Link {
                title: "People Analytics Certification Course",
                url: "https://academy.keka.com/courses/people-analytics-certification/",
            },
            Link {
                title: "AI in HR Certification Course",
                url: "https://academy.keka.com/courses/ai-in-hr/",
            },
        ],
    },
    Track {
        id: "ops",
        name: "HR Operations / HRIS",
        keywords: &["hris", "workday", "sap", "system", "process", "policy", "ops", "operations"],
        core_competencies: &[
            "hris admin",
            "process design",
            "policy writing",
            "payroll coordination",
            "compliance",
        ],
        certifications: &["Workday / SAP module", "Payroll Foundations", "Lean / Six Sigma Yellow"],
        resources: &[
            Link { title: "Workday Learning", url: "https://www.workday.com/" },
            Link { title: "Lean Basics", url: "https://www.coursera.org/learn/lean-six-sigma" },
        ],
        courses: &[
            Link { title: "Core HR Certification Course", url: "https://academy.keka.com/courses/core-hr/" },
            Link {
                title: "India Payroll Certification Course",
                url: "https://academy.keka.com/courses/indian-payroll/",
            },
            Link {
                title: "HR Generalist Certification Course",
                url: "https://academy.keka.com/courses/hr-generalist-certification-course/",
            },
        ],
    },
];

/// Looks up a track by id.
pub fn find_track(id: &str) -> Option<&'static Track> {
    TRACKS.iter().find(|t| t.id == id)
}

/// The fallback track used when nothing matches.
pub fn default_track() -> &'static Track {
    &TRACKS[0]
}

/// Enumerated values offered by the roadmap form.
pub const ROLE_OPTIONS: &[&str] = &[
    "HR Assistant / HR Executive",
    "Recruitment Coordinator",
    "Talent Acquisition Executive",
    "HR Generalist/Operations Specialist",
    "Recruiter/Recruitment Manager",
    "Senior Recruiter",
    "Talent Acquisition Manager",
    "Payroll Executive",
    "Payroll Manager",
    "Compensation & Benefits Specialist",
    "Compensation & Benefits Manager",
    "Learning & Development Specialist",
    "L&D Manager",
    "Employee/Labor Relations Specialist",
    "Employee Relations Manager",
    "HR Business Partner (HRBP)",
    "HR Manager",
    "HR Consultant",
    "HRIS Analyst",
    "HRIS Manager",
    "Talent Management Specialist",
    "Org Development Specialist",
    "Diversity & Inclusion Specialist",
    "Recruitment Analyst",
    "Talent Acquisition Analyst",
];

pub const SKILL_OPTIONS: &[&str] = &[
    "Recruitment",
    "HR Operations",
    "Payroll",
    "Talent Acquisition",
    "Learning Dev",
    "Employee Relations",
    "Compliance",
    "Recruitment Strategy",
    "Stakeholder Management",
    "Analytics",
    "Team Leadership",
    "Talent Management",
    "HR Strategy",
    "Payroll Processing",
    "Data Management",
    "Payroll System Management",
    "C&B Strategy",
    "Salary Benchmarking",
    "Compensation Design",
    "Benefits Strategy",
    "Learning & Development",
    "Performance Management",
    "Employee Engagement",
    "L&D Strategy",
    "Program Management",
    "Labor Law",
    "Grievance Handling",
    "Conflict Resolution",
    "Leadership",
    "Organizational Development",
    "Strategy",
    "HR Transformation",
    "Business Leadership",
    "Project Management",
    "HR Tech",
    "Data Analysis",
    "Reporting",
    "HR Tech Strategy",
    "Succession Planning",
    "Career Development",
    "Change Management",
    "Culture",
    "Training",
    "DEI Strategy",
    "Policy",
    "Recruitment Metrics",
    "Data Analytics",
    "Talent Market Research",
    "Sourcing Analytics",
];

pub const RESPONSIBILITY_OPTIONS: &[&str] = &[
    "Interview scheduling",
    "Onboarding",
    "Sourcing",
    "Documentation",
    "Interviewing",
    "Training coordination",
    "Payroll",
    "Policy administration",
    "Full cycle hiring",
    "Leading recruitment campaigns",
    "Employer branding",
    "Managing teams",
    "Planning workforce strategy",
    "Payroll calculations",
    "Statutory reporting",
    "Oversee payroll processes",
    "Audits",
    "Team management",
    "Benefits administration",
    "Salary analysis",
    "Employee queries",
    "Design pay structures",
    "Manage benefits",
    "Engagement programs",
    "Lead L&D programs",
    "Content curation",
    "Evaluation",
    "Grievance handling",
    "Union relations",
    "Compliance",
    "Investigations",
    "Compliance audits",
    "Team leadership",
    "Policy planning",
    "Overseeing department functions",
    "Business integration",
    "HR vision",
    "People strategy",
    "Board liaison",
    "Advising organizations",
    "Solution design",
    "HR system management",
    "Reporting",
    "Manage tech implementation",
    "User training",
    "Manage talent pipelines",
    "Development plans",
    "Drive change initiatives",
    "Culture programs",
    "Implement diversity initiatives",
    "Track compliance",
    "Track hiring KPIs",
    "Analyze candidate funnel",
    "Analyze recruitment data",
    "Market mapping",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_six_tracks_with_unique_ids() {
        assert_eq!(TRACKS.len(), 6);
        let ids: HashSet<_> = TRACKS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TRACKS.len());
    }

    #[test]
    fn test_every_track_has_content() {
        for track in TRACKS {
            assert!(!track.keywords.is_empty(), "{} has no keywords", track.id);
            assert!(!track.core_competencies.is_empty(), "{} has no competencies", track.id);
            assert!(!track.certifications.is_empty(), "{} has no certifications", track.id);
            assert!(!track.resources.is_empty(), "{} has no resources", track.id);
            assert!(!track.courses.is_empty(), "{} has no courses", track.id);
        }
    }

    #[test]
    fn test_find_track() {
        assert_eq!(find_track("cb").map(|t| t.name), Some("Compensation & Benefits"));
        assert!(find_track("unknown").is_none());
    }

    #[test]
    fn test_default_track_is_talent_acquisition() {
        assert_eq!(default_track().name, "Talent Acquisition");
    }
}
