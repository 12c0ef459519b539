//! Role-specific content that replaces the track-level lists once a next role is predicted.
//!
//! Keyed by the exact next-role label. Certifications are never overridden.

use crate::roadmap::catalog::Link;

#[derive(Debug)]
pub struct RoleOverride {
    pub role: &'static str,
    pub courses: &'static [Link],
    pub skills_to_develop: &'static [&'static str],
    pub resources: &'static [Link],
}

pub const ROLE_OVERRIDES: &[RoleOverride] = &[
    RoleOverride {
        role: "Recruitment Coordinator",
        courses: &[
            Link {
                title: "Core HR Certification",
                url: "https://academy.keka.com/courses/core-hr-certification",
            },
            Link {
                title: "Keka Hire ATS Certification",
                url: "https://academy.keka.com/courses/keka-hire-ats-certification",
            },
        ],
        skills_to_develop: &["Communication", "ATS use", "Recruitment coordination"],
        resources: &[
            Link {
                title: "HR Foundations",
                url: "https://www.linkedin.com/learning/hr-foundations",
            },
            Link {
                title: "Recruitment Foundations",
                url: "https://www.linkedin.com/learning/recruitment-foundations",
            },
        ],
    },
    RoleOverride {
        role: "Recruiter",
        courses: &[
            Link {
                title: "Keka Hire ATS Certification",
                url: "https://academy.keka.com/courses/keka-hire-ats-certification",
            },
        ],
        skills_to_develop: &["Candidate screening", "CV writing", "Interview scheduling"],
        resources: &[
            Link {
                title: "Recruitment Strategies",
                url: "https://www.linkedin.com/learning/recruitment-strategies",
            },
        ],
    },
    RoleOverride {
        role: "Recruiter/TA Manager",
        courses: &[
            Link {
                title: "HR Generalist Certification",
                url: "https://academy.keka.com/courses/hr-generalist-certification",
            },
        ],
        skills_to_develop: &["Employer branding", "Negotiation", "TA metrics"],
        resources: &[
            Link {
                title: "Advanced Interviewing Techniques",
                url: "https://www.linkedin.com/learning/advanced-interviewing-techniques",
            },
        ],
    },
    RoleOverride {
        role: "HR Manager/Employee Relations",
        courses: &[
            Link {
                title: "Core HR Certification",
                url: "https://academy.keka.com/courses/core-hr-certification",
            },
        ],
        skills_to_develop: &["Employee relations", "Policy", "Conflict resolution"],
        resources: &[
            Link {
                title: "HR Business Partner Foundations",
                url: "https://www.linkedin.com/learning/hr-business-partner-foundations",
            },
        ],
    },
    RoleOverride {
        role: "Senior Recruiter",
        courses: &[
            Link {
                title: "Performance Management System",
                url: "https://academy.keka.com/courses/performance-management-system",
            },
        ],
        skills_to_develop: &["Strategic sourcing", "Analytics", "Leadership"],
        resources: &[
            Link {
                title: "Recruitment Analytics and Reporting",
                url: "https://www.linkedin.com/learning/recruitment-analytics-and-reporting",
            },
        ],
    },
    RoleOverride {
        role: "TA Manager",
        courses: &[
            Link {
                title: "Keka Hire ATS Sol-in-HR",
                url: "https://academy.keka.com/courses/sol-in-hr",
            },
        ],
        skills_to_develop: &["Sourcing teams", "Influencing", "Analytics"],
        resources: &[
            Link {
                title: "Talent Sourcing Techniques",
                url: "https://www.linkedin.com/learning/talent-sourcing-techniques",
            },
        ],
    },
    RoleOverride {
        role: "Head TA/HRBP",
        courses: &[
            Link {
                title: "HR Generalist Certification",
                url: "https://academy.keka.com/courses/hr-generalist-certification",
            },
        ],
        skills_to_develop: &["Leadership", "Strategy", "Analytics"],
        resources: &[
            Link {
                title: "Strategic Talent Acquisition",
                url: "https://www.linkedin.com/learning/strategic-talent-acquisition",
            },
        ],
    },
    RoleOverride {
        role: "Payroll Manager",
        courses: &[
            Link {
                title: "Crafting Pay in India Master Payroll",
                url: "https://academy.keka.com/courses/crafting-pay-in-india-master-payroll",
            },
        ],
        skills_to_develop: &["Payroll tech", "Accuracy", "Tax knowledge"],
        resources: &[
            Link {
                title: "Payroll Fundamentals",
                url: "https://www.linkedin.com/learning/payroll-fundamentals",
            },
        ],
    },
    RoleOverride {
        role: "HR Manager",
        courses: &[
            Link {
                title: "Core HR Certification",
                url: "https://academy.keka.com/courses/core-hr-certification",
            },
        ],
        skills_to_develop: &["Leadership", "Audit", "Systems integration"],
        resources: &[
            Link {
                title: "Advanced Payroll Management",
                url: "https://www.linkedin.com/learning/advanced-payroll-management",
            },
        ],
    },
    RoleOverride {
        role: "Compensation Manager",
        courses: &[
            Link {
                title: "Compensation and Benefits",
                url: "https://academy.keka.com/courses/compensation-and-benefits",
            },
        ],
        skills_to_develop: &["Salary design", "Negotiation", "Data analysis"],
        resources: &[
            Link {
                title: "Compensation and Benefits",
                url: "https://www.linkedin.com/learning/compensation-and-benefits",
            },
        ],
    },
    RoleOverride {
        role: "HR Director",
        courses: &[
            Link {
                title: "Performance Management System",
                url: "https://academy.keka.com/courses/performance-management-system",
            },
        ],
        skills_to_develop: &["Strategy", "Change management", "Leadership"],
        resources: &[
            Link {
                title: "Strategic Compensation",
                url: "https://www.linkedin.com/learning/strategic-compensation",
            },
        ],
    },
    RoleOverride {
        role: "L&D Manager",
        courses: &[
            Link {
                title: "Performance Management System",
                url: "https://academy.keka.com/courses/performance-management-system",
            },
        ],
        skills_to_develop: &["Instructional design", "Engagement", "Soft skills"],
        resources: &[
            Link {
                title: "Learning and Development Foundations",
                url: "https://www.linkedin.com/learning/learning-and-development-foundations",
            },
        ],
    },
    RoleOverride {
        role: "Head L&D",
        courses: &[
            Link {
                title: "Keka Hire ATS Sol-in-HR",
                url: "https://academy.keka.com/courses/sol-in-hr",
            },
        ],
        skills_to_develop: &["Strategy", "Vendor management", "Data interpretation"],
        resources: &[
            Link {
                title: "Learning and Development",
                url: "https://www.linkedin.com/learning/learning-and-development",
            },
        ],
    },
    RoleOverride {
        role: "Employee Relations Mgr",
        courses: &[
            Link {
                title: "HR Generalist Certification",
                url: "https://academy.keka.com/courses/hr-generalist-certification",
            },
        ],
        skills_to_develop: &["Negotiation", "Legal knowledge", "Mediation"],
        resources: &[
            Link {
                title: "Employee Relations",
                url: "https://www.linkedin.com/learning/employee-relations",
            },
        ],
    },
    RoleOverride {
        role: "Director/CHRO",
        courses: &[
            Link {
                title: "AI in HR",
                url: "https://academy.keka.com/courses/ai-in-hr",
            },
        ],
        skills_to_develop: &["Strategic partnership", "Data literacy", "Digital HR"],
        resources: &[
            Link {
                title: "HR Business Partner Foundations",
                url: "https://www.linkedin.com/learning/hr-business-partner-foundations",
            },
        ],
    },
    RoleOverride {
        role: "VP HR",
        courses: &[
            Link {
                title: "Performance Management System",
                url: "https://academy.keka.com/courses/performance-management-system",
            },
        ],
        skills_to_develop: &["Executive coaching", "Business strategy", "Risk management"],
        resources: &[
            Link {
                title: "Executive Leadership",
                url: "https://www.linkedin.com/learning/executive-leadership",
            },
        ],
    },
    RoleOverride {
        role: "CHRO",
        courses: &[],
        skills_to_develop: &["Enterprise leadership", "Transformation management"],
        resources: &[
            Link {
                title: "Leading People Through Change",
                url: "https://www.linkedin.com/learning/leading-people-through-change",
            },
        ],
    },
    RoleOverride {
        role: "Group CHRO",
        courses: &[],
        skills_to_develop: &["Leadership", "Decision-making", "Governance"],
        resources: &[
            Link {
                title: "Strategic Human Resources Planning",
                url: "https://www.linkedin.com/learning/strategic-human-resources-planning",
            },
        ],
    },
    RoleOverride {
        role: "Senior Consultant",
        courses: &[],
        skills_to_develop: &["Client management", "Business analysis", "Agile HR"],
        resources: &[
            Link {
                title: "Business Consulting Foundations",
                url: "https://www.linkedin.com/learning/business-consulting-foundations",
            },
        ],
    },
    RoleOverride {
        role: "HRIS Manager",
        courses: &[
            Link {
                title: "Fundamentals of People Analytics",
                url: "https://academy.keka.com/courses/fundamentals-of-people-analytics",
            },
        ],
        skills_to_develop: &["System Configuration", "Data Visualization"],
        resources: &[
            Link {
                title: "HR Technology",
                url: "https://www.linkedin.com/learning/hr-technology",
            },
        ],
    },
    RoleOverride {
        role: "Talent Management Manager",
        courses: &[],
        skills_to_develop: &["Project Management", "Leadership"],
        resources: &[
            Link {
                title: "Project Management Foundations",
                url: "https://www.linkedin.com/learning/project-management-foundations",
            },
        ],
    },
    RoleOverride {
        role: "Head of Org Development",
        courses: &[],
        skills_to_develop: &["Strategic HR", "Communication"],
        resources: &[
            Link {
                title: "Organizational Change Management",
                url: "https://www.linkedin.com/learning/organizational-change-management",
            },
        ],
    },
    RoleOverride {
        role: "D&I Manager",
        courses: &[],
        skills_to_develop: &["Advocacy", "Program Management"],
        resources: &[
            Link {
                title: "Diversity and Inclusion in the Workplace",
                url: "https://www.linkedin.com/learning/diversity-and-inclusion-in-the-workplace",
            },
        ],
    },
    RoleOverride {
        role: "Recruitment Manager",
        courses: &[],
        skills_to_develop: &["Reporting", "Data Interpretation"],
        resources: &[
            Link {
                title: "Hiring Analytics and Reporting",
                url: "https://www.linkedin.com/learning/hiring-analytics-and-reporting",
            },
        ],
    },
    RoleOverride {
        role: "Talent Acquisition Manager",
        courses: &[],
        skills_to_develop: &["Strategic Sourcing", "Communication"],
        resources: &[
            Link {
                title: "Strategic Talent Acquisition",
                url: "https://www.linkedin.com/learning/strategic-talent-acquisition",
            },
        ],
    },
];

/// Exact-label lookup.
pub fn find_override(role: &str) -> Option<&'static RoleOverride> {
    ROLE_OVERRIDES.iter().find(|o| o.role == role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::combinations::ROLE_COMBINATIONS;

    #[test]
    fn test_every_predicted_role_has_an_override() {
        for combo in ROLE_COMBINATIONS {
            assert!(
                find_override(combo.next_role).is_some(),
                "missing override for {}",
                combo.next_role
            );
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(find_override("Senior Recruiter").is_some());
        assert!(find_override("senior recruiter").is_none());
        assert!(find_override("Senior Recruiter ").is_none());
    }

    #[test]
    fn test_override_skill_lists_fit_in_five() {
        for o in ROLE_OVERRIDES {
            assert!(!o.skills_to_develop.is_empty(), "{} has no skills", o.role);
            assert!(o.skills_to_develop.len() <= 5, "{} has too many skills", o.role);
        }
    }

    #[test]
    fn test_some_overrides_carry_no_courses() {
        let chro = find_override("CHRO").unwrap();
        assert!(chro.courses.is_empty());
        assert_eq!(chro.resources.len(), 1);
    }
}
