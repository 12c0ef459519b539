//! Static expert directory, grouped by the next-role label a roadmap predicts.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Expert {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub experience_years: u8,
    pub specializations: &'static [&'static str],
    pub rating: f32,
    pub review_count: u32,
    pub price: &'static str,
    pub availability: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct ExpertGroup {
    pub next_role: &'static str,
    pub experts: &'static [Expert],
}

pub const EXPERT_DIRECTORY: &[ExpertGroup] = &[
    ExpertGroup {
        next_role: "HR Manager",
        experts: &[
            Expert {
                id: "1",
                name: "Sarah Johnson",
                title: "Senior HR Manager",
                company: "Tech Innovations Ltd",
                experience_years: 12,
                specializations: &["Team Leadership", "Policy Development", "Performance Management"],
                rating: 4.9,
                review_count: 127,
                price: "₹2,500/session",
                availability: "Available this week",
                description: "Seasoned HR Manager with expertise in scaling HR operations and building high-performance teams.",
            },
            Expert {
                id: "2",
                name: "Rajesh Kumar",
                title: "HR Manager",
                company: "Global Solutions Inc",
                experience_years: 8,
                specializations: &["HR Operations", "Employee Relations", "Compliance"],
                rating: 4.7,
                review_count: 89,
                price: "₹2,000/session",
                availability: "Available next week",
                description: "Results-driven HR Manager specializing in streamlining HR processes and improving employee satisfaction.",
            },
        ],
    },
    ExpertGroup {
        next_role: "HR Business Partner (HRBP)",
        experts: &[Expert {
            id: "3",
            name: "Priya Sharma",
            title: "Senior HR Business Partner",
            company: "Enterprise Corp",
            experience_years: 10,
            specializations: &["Business Partnership", "Strategic HR", "Organizational Development"],
            rating: 4.8,
            review_count: 156,
            price: "₹3,000/session",
            availability: "Available today",
            description: "Strategic HRBP with proven track record of aligning HR initiatives with business objectives.",
        }],
    },
    ExpertGroup {
        next_role: "Talent Acquisition Manager",
        experts: &[Expert {
            id: "4",
            name: "Amit Patel",
            title: "Talent Acquisition Manager",
            company: "Growth Ventures",
            experience_years: 7,
            specializations: &["Recruitment Strategy", "Talent Pipeline", "Employer Branding"],
            rating: 4.6,
            review_count: 203,
            price: "₹2,200/session",
            availability: "Available this week",
            description: "Expert in building robust talent acquisition processes and innovative recruitment strategies.",
        }],
    },
    ExpertGroup {
        next_role: "L&D Manager",
        experts: &[Expert {
            id: "5",
            name: "Meera Reddy",
            title: "Learning & Development Manager",
            company: "Skills Academy",
            experience_years: 9,
            specializations: &["Training Programs", "Leadership Development", "Performance Coaching"],
            rating: 4.9,
            review_count: 134,
            price: "₹2,800/session",
            availability: "Available next week",
            description: "Passionate L&D professional focused on creating impactful learning experiences and developing future leaders.",
        }],
    },
    ExpertGroup {
        next_role: "Compensation & Benefits Manager",
        experts: &[Expert {
            id: "6",
            name: "Vikram Singh",
            title: "Compensation & Benefits Manager",
            company: "Financial Services Ltd",
            experience_years: 11,
            specializations: &["Compensation Design", "Benefits Strategy", "Salary Benchmarking"],
            rating: 4.7,
            review_count: 98,
            price: "₹3,200/session",
            availability: "Available this week",
            description: "Expert in designing competitive compensation packages and comprehensive benefits programs.",
        }],
    },
];

/// Experts for an exact (case-sensitive) next-role label. Unknown labels yield none.
pub fn experts_for(next_role: &str) -> &'static [Expert] {
    EXPERT_DIRECTORY
        .iter()
        .find(|group| group.next_role == next_role)
        .map(|group| group.experts)
        .unwrap_or(&[])
}
