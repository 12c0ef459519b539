//! Monthly plan selector: twelve-month learning plans keyed by role-name fragments.
//!
//! Rules are evaluated top to bottom against the lowercased key; the first match wins.
//! Lookup order: predicted next role, current role, track name, then the generic plan.

use crate::roadmap::models::MonthlyPlanEntry;

/// One month of guidance: what to learn, what to practise, how to implement and measure.
#[derive(Debug, Clone, Copy)]
pub struct PlanMonth {
    pub learning: &'static str,
    pub practicing: &'static str,
    pub implementing: &'static str,
}

pub type Plan = [PlanMonth; 12];

const fn month(
    learning: &'static str,
    practicing: &'static str,
    implementing: &'static str,
) -> PlanMonth {
    PlanMonth {
        learning,
        practicing,
        implementing,
    }
}

/// A plan guarded by substring predicates over the lowercased key.
///
/// Matches when any `any_of` fragment is present (or `any_of` is empty), every `all_of`
/// fragment is present, and no `none_of` fragment is present.
#[derive(Debug)]
pub struct PlanRule {
    pub any_of: &'static [&'static str],
    pub all_of: &'static [&'static str],
    pub none_of: &'static [&'static str],
    pub plan: &'static Plan,
}

impl PlanRule {
    pub fn matches(&self, key: &str) -> bool {
        let any = self.any_of.is_empty() || self.any_of.iter().any(|f| key.contains(f));
        let all = self.all_of.iter().all(|f| key.contains(f));
        let excluded = self.none_of.iter().any(|f| key.contains(f));
        any && all && !excluded
    }
}

pub const PLAN_RULES: &[PlanRule] = &[
    PlanRule {
        any_of: &["hr coordinator", "hr co-ordinator"],
        all_of: &[],
        none_of: &[],
        plan: &HR_COORDINATOR,
    },
    PlanRule {
        any_of: &["hr assistant", "hr executive"],
        all_of: &[],
        none_of: &[],
        plan: &HR_ASSISTANT,
    },
    PlanRule {
        any_of: &["recruitment coordinator"],
        all_of: &[],
        none_of: &[],
        plan: &RECRUITMENT_COORDINATOR,
    },
    PlanRule {
        any_of: &["talent acquisition executive"],
        all_of: &[],
        none_of: &[],
        plan: &TA_EXECUTIVE,
    },
    PlanRule {
        any_of: &["hr generalist", "hr specialist"],
        all_of: &[],
        none_of: &[],
        plan: &HR_GENERALIST,
    },
    PlanRule {
        any_of: &["recruiter", "recruitment manager"],
        all_of: &[],
        none_of: &[],
        plan: &RECRUITER,
    },
    PlanRule {
        any_of: &["learning & development"],
        all_of: &[],
        none_of: &[],
        plan: &LD_SPECIALIST,
    },
    PlanRule {
        any_of: &["employee relations", "labor relations"],
        all_of: &[],
        none_of: &[],
        plan: &EMPLOYEE_RELATIONS,
    },
    PlanRule {
        any_of: &["hr manager", "hr director"],
        all_of: &[],
        none_of: &[],
        plan: &HR_MANAGER,
    },
    PlanRule {
        any_of: &["hr business partner", "hrbp"],
        all_of: &[],
        none_of: &[],
        plan: &HRBP,
    },
    PlanRule {
        any_of: &["l&d manager"],
        all_of: &[],
        none_of: &[],
        plan: &LD_MANAGER,
    },
    PlanRule {
        any_of: &["head l&d"],
        all_of: &[],
        none_of: &[],
        plan: &HEAD_LD,
    },
    PlanRule {
        any_of: &[],
        all_of: &["director", "chro"],
        none_of: &[],
        plan: &DIRECTOR_CHRO,
    },
    PlanRule {
        any_of: &["vp hr"],
        all_of: &[],
        none_of: &[],
        plan: &VP_HR,
    },
    PlanRule {
        any_of: &["chro"],
        all_of: &[],
        none_of: &["group"],
        plan: &CHRO,
    },
    PlanRule {
        any_of: &["group chro"],
        all_of: &[],
        none_of: &[],
        plan: &GROUP_CHRO,
    },
    PlanRule {
        any_of: &["senior consultant"],
        all_of: &[],
        none_of: &[],
        plan: &SENIOR_CONSULTANT,
    },
    PlanRule {
        any_of: &["hris manager"],
        all_of: &[],
        none_of: &[],
        plan: &HRIS_MANAGER,
    },
    PlanRule {
        any_of: &["talent management manager"],
        all_of: &[],
        none_of: &[],
        plan: &TALENT_MANAGEMENT_MANAGER,
    },
    PlanRule {
        any_of: &["head of org development", "organizational development"],
        all_of: &[],
        none_of: &[],
        plan: &ORG_DEVELOPMENT,
    },
    PlanRule {
        any_of: &["d&i manager", "diversity", "inclusion"],
        all_of: &[],
        none_of: &[],
        plan: &DIVERSITY_INCLUSION,
    },
    PlanRule {
        any_of: &["talent acquisition manager"],
        all_of: &[],
        none_of: &[],
        plan: &TA_MANAGER,
    },
];

/// First plan whose rule matches `key`, if any.
pub fn find_plan(key: &str) -> Option<&'static Plan> {
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    PLAN_RULES
        .iter()
        .find(|rule| rule.matches(&key))
        .map(|rule| rule.plan)
}

/// Resolves the plan for the first key with a specific match, else the generic plan.
pub fn select_monthly_plan<'a, I>(keys: I) -> Vec<MonthlyPlanEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let plan = keys
        .into_iter()
        .find_map(find_plan)
        .unwrap_or(&DEFAULT_PLAN);
    materialize(plan)
}

fn materialize(plan: &Plan) -> Vec<MonthlyPlanEntry> {
    plan.iter()
        .enumerate()
        .map(|(i, m)| MonthlyPlanEntry {
            month: (i + 1) as u8,
            learning: m.learning.to_string(),
            practicing: m.practicing.to_string(),
            implementing: m.implementing.to_string(),
        })
        .collect()
}

const HR_COORDINATOR: Plan = [
    month("Understand core HR functions and HR admin duties", "Assist with employee data management and document filing", "Ensure accurate and organized employee records"),
    month("Study recruitment basics and interview coordination", "Support scheduling interviews and candidate communication", "Track scheduling accuracy and candidate feedback"),
    month("Learn onboarding processes and documentation", "Help onboard new hires and prepare orientation materials", "Collect and report new hire feedback"),
    month("Study HR policies and compliance requirements", "Review and organize policy documents", "Update records and ensure compliance alignment"),
    month("Take basic HRIS training", "Enter and maintain employee data in HRIS", "Audit HRIS entries for accuracy and report issues"),
    month("Understand payroll process basics", "Support payroll data collection and validation", "Report payroll discrepancies to HR coordinator"),
    month("Develop communication and interpersonal skills", "Handle employee queries and assist with HR communication", "Improve employee satisfaction through clear communication"),
    month("Participate in HR meetings and team discussions", "Share insights or assist in note-taking during meetings", "Enhance team collaboration and follow-up execution"),
    month("Learn basic Excel and data tracking skills", "Maintain recruitment and onboarding trackers", "Ensure data integrity and generate status reports"),
    month("Study candidate sourcing methods and tools", "Assist in sourcing and maintaining candidate database", "Improve candidate pipeline quality and data accuracy"),
    month("Join HR forums and online communities", "Engage in discussions and share HR best practices", "Apply learned ideas to streamline HR admin tasks"),
    month("Review yearly performance and set new goals", "Request feedback from supervisors and peers", "Draft a transition plan for role upgrade to HR Coordinator"),
];

const HR_ASSISTANT: Plan = [
    month("Study HR basics (recruitment payroll)", "Assist interview scheduling & documentation", "Track new processes learned"),
    month("Learn onboarding best practices", "Support onboarding of 1-2 new hires", "Collect new hire feedback"),
    month("Take HRIS basics course", "Enter/update employee data into system", "Audit for data errors"),
    month("Read blog documentation & compliance", "Organize employee files", "Cross-check organization vs. checklist"),
    month("Study basic HR policies", "Draft template for onboarding docs", "Review/check with supervisor"),
    month("Understand payroll fundamentals", "Support payroll processing", "Report discrepancies, suggest improvement"),
    month("Attend HR webinars", "Summarize learnings for team", "Email summary, ask for feedback"),
    month("Shadow a senior HR executive", "Note best practices in onboarding", "Suggest 1 improvement for policy"),
    month("Complete basic job design Excel training", "Complete an employee onboarding tracker", "Check for 100% completion, adjust"),
    month("Read about recruitment trends", "Research and test new sourcing channels", "Present findings in team meeting"),
    month("Join HR community group", "Discuss a challenge, post question online", "Share answers with manager"),
    month("Review the year & set next job goals", "Request formal feedback from manager", "Draft transition document for Coordinator"),
];

const RECRUITMENT_COORDINATOR: Plan = [
    month("Take course on talent sourcing", "Source resumes for 2 open roles", "Log and update tracker weekly"),
    month("Study JD writing", "Write/review at least 2 job descriptions", "Track quality of applications"),
    month("Learn phone screening techniques", "Conduct 3 candidate screenings", "Create screening script, compare outcomes"),
    month("Shadow recruiter on interviews", "Schedule and coordinate 5+ interviews", "Minimize scheduling errors"),
    month("Read blog candidate experience", "Collect post-interview candidate feedback", "Report insights to team"),
    month("Begin LinkedIn/recruitment networking", "Refer 2 candidates via referrals", "Share response rate"),
    month("Take compliance & documentation mini-course", "Prepare hiring docs for new joiners", "Audit docs for errors"),
    month("Learn ATS tracking features", "Tag 10 new candidates, rate them", "Share updates with supervisor"),
    month("Study metrics for recruitment process", "Maintain recruitment dashboard", "Present summary mid-month"),
    month("Plan & run a small hiring campaign", "Measure campaign success", "Analyze gaps, write improvement plan"),
    month("Peer review another Coordinator's work", "Give/receive process feedback", "Implement 1 process change"),
    month("Review YTD metrics", "Compile lessons learned", "Update resume, plan path to Recruiter"),
];

const TA_EXECUTIVE: Plan = [
    month("Study advanced sourcing (Boolean, niche)", "Source for a challenging open role", "Log results, share sourcing report"),
    month("Research campus recruitment", "Attend/assist in campus drive", "Assess process, suggest one improvement"),
    month("L&D onboard training coordination", "Organize new joiner orientation session", "Gather new hire feedback"),
    month("Study employer branding blogs", "Recommend improvements for job posts", "Test one creative job post"),
    month("Run reference checks independently", "Structure reference templates", "Report compliance rate"),
    month("Manage a mini project schedule 40+ interviews", "Track candidate drop-off points", "Analyze, suggest solutions"),
    month("Study offer & negotiation techniques", "Participate in 2 offer negotiations", "Analyze acceptance/rejection reasons"),
    month("Shadow TA Manager on analytics review", "Build TA activity report with metrics", "Compare with team avg, present ideas"),
    month("Head retention blog posts", "Survey new joiners on recruitment process", "Suggest process change"),
    month("Coordinate with L&D on hiring feedback", "Sit in L&D module for a learning module", "Document integration areas"),
    month("Join recruiter networking group", "Attend 1 networking event", "Share learning with TA team"),
    month("Review annual sourcing and recruitment data", "Reflect with supervisor on next career step", "Chart your path to TA Manager"),
];

const HR_GENERALIST: Plan = [
    month("Deep dive HR compliance and laws", "Do mini-audit of existing HR policies", "Write audit report to supervisor"),
    month("Study engagement survey methods", "Draft, send, and analyze pulse survey", "Present engagement summary"),
    month("Learn basic benefits admin", "Prepare data for payroll run, benefits", "Support review and correction"),
    month("Attend conflict resolution workshop", "Assist in 1 ER/HR issue", "Write meeting notes, update SOP"),
    month("HRIS: learn advanced features", "Generate HR reports from system", "Spot/report system data errors"),
    month("Take basic L&D planning course", "Track learning activity completions", "Suggest training calendar improvement"),
    month("Write/update onboarding policy", "Share with new hires from another function", "Gather feedback, log for manager"),
    month("Study HR analytics basics", "Build monthly attrition report", "Track and analyze trends"),
    month("Understand payroll dispute handling", "Resolve 1 real or mock payroll issue", "Document fix process, share outcome"),
    month("Review compliance documentation", "Ensure 100% audit compliance for dept", "Close gaps, suggest one new control"),
    month("Study digital HR transformation blogs", "Automate one manual HR process", "Present efficiency results"),
    month("Self-review and manager feedback", "Summarize yearly contributions", "Prepare for move to HR Manager role"),
];

const RECRUITER: Plan = [
    month("Study advanced interview frameworks", "Lead 2+ panel interviews", "Gather structured feedback"),
    month("Learn advanced sourcing (niche, referrals)", "Lead team refresher on sourcing tactics", "Track ROI by channel, write summary"),
    month("Shadow hiring manager on 3D question", "Lead first round screening", "Compare outcomes to role profile"),
    month("Review latest recruitment analytics tools", "Deploy one new metric/tracker", "Share dashboard/monthly metrics report"),
    month("Study offer management best practices", "Negotiate at least 1 senior hire", "Analyze negotiation result"),
    month("Lead early-career hiring days", "Report feedback and improvement ideas", "Implement 1 new step in next event"),
    month("Take compliance course on recruiting", "Review all candidate records for audit", "Address/document any compliance risks"),
    month("Mentor a junior recruiter", "Share interview feedback with them", "Track mentee growth"),
    month("Share sourcing success in HR team meet", "Pilot social sourcing campaign", "Measure applications generated"),
    month("Study employer branding tactics", "Lead 1 employer brand project", "Measure digital engagement"),
    month("Join online recruiter group", "Attend 1 knowledge sharing session", "Share insight with management"),
    month("Complete annual recruitment report", "Review performance with director", "Set path for Talent Acquisition Director"),
];

const LD_SPECIALIST: Plan = [
    month("Take L&D strategy course", "Redesign 1 training session", "Collect feedback, modify slides"),
    month("Study adult learning theory", "Survey employees on development needs", "Analyze/segment needs"),
    month("Shadow L&D manager on a coaching session", "Observe learner engagement/recovery", "List improvement actions"),
    month("Attend digital learning workshop", "Deploy a microlearning pilot", "Measure and present engagement stats"),
    month("Learn about ROI on training methods", "Build ROI tracker for a learning module", "Report ROI, iterate"),
    month("Read best practices in content creation", "Create 1 new e-learning module", "Collect usage/quiz scores"),
    month("Build feedback loop with participants", "Gather midpoint pulse-check", "Share trends with management"),
    month("Join virtual L&D community", "Attend 1 external L&D event", "Present external insight"),
    month("Study performance improvement tools", "Coach 2 employees post-training", "Share coaching outcomes"),
    month("Implement blended learning approaches", "A/B test two module formats", "Survey learners, track preference"),
    month("Review reward/recognition systems", "Integrate into L&D experience", "Share increased engagement data"),
    month("Complete annual L&D impact report", "Review feedback, set next year's strategy", "Prepare for HRBP or L&D Manager"),
];

const EMPLOYEE_RELATIONS: Plan = [
    month("Study advanced labor laws & union rules", "Review active grievances/cases", "Write summary report for resolution trends"),
    month("Learn conflict mediation techniques", "Participate in grievance handling", "Draft 1 conflict resolution case"),
    month("Read compliance and audit processes", "Assist in workplace inspections", "Note compliance gaps, suggest fixes"),
    month("Attend webinar on labor relation updates", "Meet union representatives if possible", "Prepare briefing document"),
    month("Study employee handbook policies", "Review policy adherence in 1 department", "Present compliance improvement plan"),
    month("Learn negotiation techniques", "Observe 1 collective bargaining session", "Document lessons learned"),
    month("Take course on workplace psychology", "Design engagement survey for unionized staff", "Analyze feedback and report"),
    month("Study labor market trends", "Research competitor labor policies", "Present benchmarking report"),
    month("Shadow senior ER manager", "Manage case from start to finish", "Log outcome and feedback"),
    month("Assist in team training on ER best practices", "Lead 1 email labor relations training", "Gather training effectiveness data"),
    month("Read court rulings related to labor law", "Update HR team on new regulations", "Circulate concise labor update newsletter"),
    month("Conduct annual ER effectiveness review", "Prepare and submit year-end-report", "Plan next year's ER initiatives"),
];

const HR_MANAGER: Plan = [
    month("Enroll in executive leadership program", "Conduct HR strategy review", "Set HR goals aligned with company vision"),
    month("Study advanced compliance & legal issues", "Review departmental audit reports", "Present audit outcomes & action plan"),
    month("Learn cutting-edge HR technology trends", "Pilot HR tech innovation", "Measure KPIs for efficiency gains"),
    month("Mentor multiple junior and mid-level HR", "Develop leadership workshops", "Collect feedback & iterate"),
    month("Attend diversity & inclusion certification", "Lead company-wide DEI initiatives", "Measure participation & impact"),
    month("Study global HR best practices", "Benchmark HR policies with competitors", "Present comparison report"),
    month("Work on change management certifications", "Lead change management pilot project", "Report on project milestones"),
    month("Alter reward and benefit schemes", "Rework performance management policy", "Assess employee satisfaction post-change"),
    month("Study labor market & talent retention strategies", "Forecast workforce needs", "Present 3-year talent roadmap"),
    month("Join C-suite roundtable or HR leadership forum", "Lead quarterly HR business review", "Use insights for strategy"),
    month("Coach 1-2 emerging HR leaders", "Develop succession plans", "Report on readiness"),
    month("Complete unit annual performance review", "Set personal development goals", "Plan roadmap to Director to CHRO transition"),
];

const HRBP: Plan = [
    month("Take advanced HRBP certification course", "Shadow leadership meetings", "Note priorities and business challenges"),
    month("Study performance management systems", "Design solution for critical team issues", "Present solution & receive feedback"),
    month("Complete stakeholder management training", "Facilitate cross-team HR programs", "Track engagement and adoption"),
    month("Learn analytics tools for HRBP", "Develop HR dashboards for business units", "Analyze and improve HR impact"),
    month("Explore organizational development methods", "Assess one department's culture", "Propose interventions"),
    month("Join leadership strategy webinars", "Influence HR strategy changes", "Get executive feedback"),
    month("Attend inspiration and influence workshop", "Coach managers on people management", "Log progress and feedback"),
    month("Study conflict resolution for HRBPs", "Handle escalated employee relations issues", "Document resolutions and improvements"),
    month("Research latest workforce planning methods", "Build talent pipeline strategies", "Present talent strategy roadmap"),
    month("Participate in industry HRBP forums", "Lead leadership training sessions", "Measure leadership development success"),
    month("Self-reflect and peer review", "Present quarterly HRBP business impact report", "Plan next steps for career growth"),
    month("Review succession plans and team readiness", "Align with CHRO/director on future needs", "Set goals for Director/CHRO progression"),
];

const LD_MANAGER: Plan = [
    month("Study instructional design basics", "Design sample training modules", "Present modules for peer review"),
    month("Adult learning theory", "Develop interactive learning activities", "Pilot training session"),
    month("Employee engagement techniques", "Conduct surveys", "Analyze and report engagement results"),
    month("Communication and presentation skills", "Run workshops", "Increase participant satisfaction"),
    month("Technology for e-learning", "Use LMS software", "Launch digital training"),
    month("Training needs analysis", "Conduct department assessments", "Create tailored learning plans"),
    month("Coaching & feedback methods", "Provide coaching sessions", "Measure participant progress"),
    month("Content creation best practices", "Write engaging content", "Publish course materials"),
    month("Soft skills development", "Facilitate soft skills workshops", "Track skill adoption"),
    month("Evaluation of training impact", "Develop training ROI metrics", "Present impact metrics to leadership"),
    month("Vendor management", "Manage external training vendors", "Ensure vendor adherence to quality standards"),
    month("Annual L&D review and planning", "Report annual L&D outcomes", "Set improvement goals and growth path"),
];

const HEAD_LD: Plan = [
    month("Study L&D strategic frameworks", "Review current strategy", "Identify areas for strategic enhancement"),
    month("Data analytics for measuring learning impact", "Analyze training metrics", "Present actionable insights"),
    month("Advanced vendor management", "Review vendor contracts", "Negotiate improvements or renewals"),
    month("Change management in L&D", "Lead rollout of new initiatives", "Measure adoption and feedback"),
    month("Leadership and influence", "Coach L&D managers", "Track leadership progress"),
    month("Budgeting and resource allocation", "Plan annual L&D budget", "Align spend with business priorities"),
    month("Digital learning trends", "Pilot new learning technologies", "Evaluate user engagement and satisfaction"),
    month("Learning culture development", "Drive employee engagement campaigns", "Increase participation rates"),
    month("Collaboration with business leaders", "Facilitate cross-functional workshops", "Improve stakeholder buy-in"),
    month("Talent development", "Design leadership development plans", "Track talent pipeline improvements"),
    month("HR data literacy", "Train team on interpreting data", "Enhance team decision-making"),
    month("Strategic L&D report & roadmap", "Present year-end strategy", "Gain leadership approval for next phase"),
];

const DIRECTOR_CHRO: Plan = [
    month("Study enterprise HR strategy", "Review organizational HR strategy", "Identify strategic gaps"),
    month("Data literacy & analytics", "Analyze workforce and business data", "Present strategic insights"),
    month("Digital HR tools & transformation", "Evaluate digital HR initiatives", "Recommend technology upgrades"),
    month("Executive leadership", "Lead senior leadership meetings", "Influence organizational decision-making"),
    month("Change management", "Sponsor HR transformation projects", "Measure adoption and impact"),
    month("Talent management strategy", "Build succession plans", "Strengthen leadership pipelines"),
    month("Diversity & inclusion strategy", "Develop enterprise-wide DEI programs", "Track inclusion metrics"),
    month("Stakeholder engagement", "Manage C-suite relationships", "Improve strategic partnerships"),
    month("Governance & compliance", "Ensure HR policies meet regulatory standards", "Implement risk mitigation"),
    month("Business partnership", "Collaborate cross-functionally", "Align HR with business goals"),
    month("Mergers & acquisitions HR", "Lead HR due diligence & integration", "Ensure smooth workforce transitions"),
    month("Annual strategy review", "Present CHRO report to board", "Set vision and goals for next fiscal year"),
];

const VP_HR: Plan = [
    month("Executive coaching certification", "Coach HR leaders", "Collect feedback from coachees"),
    month("Business strategy fundamentals", "Contribute to executive strategy", "Present HRs role in business strategy"),
    month("Risk identification and mitigation", "Lead HR risk assessment", "Create HR risk mitigation plans"),
    month("Leadership influence", "Develop executive presence", "Improve stakeholder relationships"),
    month("Change leadership", "Sponsor large-scale organizational change", "Monitor outcomes and adjust as needed"),
    month("Talent development", "Design leadership development programs", "Track leadership bench strength"),
    month("Diversity and inclusion", "Lead enterprise-wide D&I initiatives", "Improve cultural inclusivity"),
    month("Workforce analytics", "Provide data-driven workforce insights", "Influence leadership decision-making"),
    month("HR governance", "Review and improve HR policy compliance", "Reduce governance risks"),
    month("Executive communications", "Lead corporate-wide HR communications", "Improve message clarity and engagement"),
    month("Succession planning", "Finalize succession plans", "Ensure readiness of key roles"),
    month("Annual strategic review", "Present HR achievements to board", "Set priorities for next fiscal year"),
];

const CHRO: Plan = [
    month("Enterprise leadership skills", "Lead executive team HR strategy", "Align enterprise HR vision"),
    month("Transformation management frameworks", "Oversee HR transformation program", "Achieve project milestones"),
    month("Corporate governance", "Develop governance policies", "Improve compliance and transparency"),
    month("Culture and change leadership", "Drive cultural transformation", "Increase employee engagement"),
    month("Talent strategy", "Lead enterprise talent review", "Strengthen talent pipelines"),
    month("Risk and compliance management", "Manage HR regulatory risks", "Implement risk controls"),
    month("Digital HR strategy", "Oversee HR technology upgrades", "Meet digital transformation goals"),
    month("Executive coaching & development", "Mentor senior executives", "Measure leadership effectiveness"),
    month("Workforce analytics", "Present high-level analytics", "Inform strategic decisions"),
    month("Stakeholder partnership", "Build relationships with board and leadership", "Enhance HR influence"),
    month("Succession management", "Ensure leadership readiness", "Maintain talent continuity"),
    month("Year-end strategy review", "Deliver enterprise HR report", "Set vision for upcoming year"),
];

const GROUP_CHRO: Plan = [
    month("Advanced leadership development", "Facilitate executive retreats", "Improve leadership cohesion"),
    month("Corporate governance", "Oversee group-wide compliance", "Align regional HR policies"),
    month("Decision-making frameworks", "Lead HR strategic decisions", "Increase decision speed and effectiveness"),
    month("Workforce planning at scale", "Coordinate multi-business unit planning", "Achieve cross-unit talent alignment"),
    month("Change leadership", "Manage complex organizational change", "Ensure change adoption across units"),
    month("Enterprise risk management", "Oversee enterprise HR risk", "Implement mitigation strategies"),
    month("Diversity, equity & inclusion", "Lead global D&I strategy", "Drive measurable inclusion targets"),
    month("HR analytics for groups", "Aggregate HR data across divisions", "Present group-wide HR metrics"),
    month("Corporate culture", "Foster unified culture", "Measure cultural integration"),
    month("Executive coaching", "Coach group leadership teams", "Track leadership development"),
    month("Stakeholder engagement", "Partner with regional leaders", "Enhance trust and collaboration"),
    month("Strategic planning", "Develop next three-year HR strategy", "Gain consensus across group"),
];

const SENIOR_CONSULTANT: Plan = [
    month("Study client management fundamentals", "Support client meetings", "Improve client satisfaction"),
    month("Learn business analysis techniques", "Analyze HR business processes", "Deliver analysis reports"),
    month("Understand Agile HR principles", "Participate in Agile HR projects", "Apply Agile in project tasks"),
    month("Develop consulting skills", "Draft proposals for clients", "Gain peer review and improve"),
    month("Communication and negotiation", "Lead client workshops", "Receive positive feedback from clients"),
    month("Advanced business process mapping", "Map client HR processes", "Identify optimization opportunities"),
    month("Change management frameworks", "Support change initiatives", "Measure change impact"),
    month("Data analysis and visualization", "Build client HR dashboards", "Present actionable insights"),
    month("Coaching and facilitation", "Facilitate client training sessions", "Achieve high participant satisfaction"),
    month("Stakeholder engagement", "Manage multiple client relationships", "Strengthen client partnerships"),
    month("Industry HR trends", "Share insights in consulting forums", "Enhance consulting relevance"),
    month("Review annual client feedback", "Develop consulting improvement plan", "Increase repeat business"),
];

const HRIS_MANAGER: Plan = [
    month("Study HRIS system architecture", "Explore current HRIS configurations", "Document system configurations"),
    month("Data visualization basics", "Create HR reports using visualization tools", "Improve report clarity and usability"),
    month("Master system configuration", "Test and modify system workflows", "Implement process improvements"),
    month("Learn data security and privacy", "Audit HRIS data access controls", "Address security gaps"),
    month("Analyze user feedback", "Collect and prioritize system enhancement requests", "Improve user satisfaction"),
    month("Reporting automation", "Develop automated report solutions", "Reduce report turnaround time"),
    month("Integration with other HR systems", "Coordinate integration projects", "Achieve seamless data flow during upgrades"),
    month("System upgrade planning", "Plan system upgrades", "Minimize disruption during upgrades"),
    month("Compliance in HR data", "Ensure system meets data regulations", "Achieve zero compliance issues"),
    month("User training", "Document training materials", "Train HR users effectively"),
    month("Project management", "Lead HRIS projects", "Deliver projects on time"),
    month("Review HRIS strategy", "Present system performance and upgrade plan", "Align HRIS strategy with organizational goals"),
];

const TALENT_MANAGEMENT_MANAGER: Plan = [
    month("Study talent management strategy", "Review current programs", "Identify improvement areas"),
    month("Leadership coaching fundamentals", "Coach high-potential employees", "Document coaching outcomes"),
    month("Workforce planning and talent review", "Conduct skills gap analysis", "Develop talent development plans"),
    month("Succession planning", "Create succession plans for key roles", "Strengthen leadership bench"),
    month("Performance management", "Oversee appraisal processes", "Increase performance review completion rate"),
    month("Employee engagement", "Launch talent engagement initiatives", "Measure engagement improvements"),
    month("Learning and development strategy", "Align learning with talent needs", "Improve program participation"),
    month("Change management", "Support organizational development efforts", "Facilitate smoother talent transitions"),
    month("Data-driven talent decisions", "Use analytics for talent insights", "Present talent dashboards"),
    month("Coaching advanced techniques", "Group coaching sessions", "Improve leadership capabilities"),
    month("Diversity and inclusion in talent", "Promote inclusive talent initiatives", "Improve diversity metrics"),
    month("Year-end talent review", "Present talent management report", "Set next year's talent strategy"),
];

const ORG_DEVELOPMENT: Plan = [
    month("Study organizational development strategy", "Analyze organizational effectiveness", "Identify focus areas"),
    month("Develop communication skills", "Facilitate stakeholder meetings", "Improve message clarity"),
    month("Change diagnostics", "Conduct change readiness assessments", "Report findings"),
    month("Leadership development", "Design leadership programs", "Increase participation"),
    month("Culture assessment", "Lead cultural surveys", "Develop culture change plans"),
    month("Coaching and mentoring", "Coach leaders on organizational development", "Track leader growth"),
    month("Performance management systems", "Optimize performance evaluation processes", "Enhance feedback culture"),
    month("Talent mobility", "Develop job rotation programs", "Support skill diversification"),
    month("Data interpretation", "Analyze OD program data", "Present impact reports"),
    month("Stakeholder engagement", "Manage cross-functional collaboration", "Improve organizational alignment"),
    month("Facilitation skills", "Lead OD workshops", "Increase employee involvement"),
    month("Strategy review", "Prepare annual OD strategic report", "Set direction for next year"),
];

const DIVERSITY_INCLUSION: Plan = [
    month("Study D&I frameworks and laws", "Review current D&I policies", "Identify gaps"),
    month("Develop advocacy skills", "Lead awareness campaigns", "Increase employee participation"),
    month("Program management basics", "Design new D&I programs", "Obtain stakeholder feedback"),
    month("Communication for inclusion", "Facilitate inclusive communication", "Boost inclusiveness in messages"),
    month("Data collection & analysis", "Collect diversity metrics", "Report progress"),
    month("Leadership engagement", "Conduct trainings for leaders", "Gain leadership buy-in"),
    month("Handling bias and microaggressions", "Conduct workshops", "Improve awareness scores"),
    month("Inclusive recruitment", "Revise hiring practices", "Improve diverse candidate pools"),
    month("Collaborate with ER teams", "Address employee concerns", "Reduce bias-related grievances"),
    month("Program evaluation", "Analyze program outcomes", "Adjust initiatives"),
    month("External partnership development", "Build relationships with NGOs", "Leverage external expertise"),
    month("Annual D&I report", "Present D&I impact", "Plan next year"),
];

const TA_MANAGER: Plan = [
    month("Develop strategic sourcing plans", "Map sourcing channels", "Identify high-yield sources"),
    month("Enhance communication skills", "Lead recruiter communication", "Improve candidate engagement"),
    month("Market research", "Analyze labor market trends", "Adjust sourcing strategies"),
    month("Employer branding techniques", "Lead social recruiting campaigns", "Increase brand visibility"),
    month("Negotiation skills", "Conduct offer negotiations", "Improve acceptance rate"),
    month("Stakeholder management", "Collaborate with hiring managers", "Align hiring needs"),
    month("Data-driven decision making", "Use analytics for sourcing decisions", "Present findings"),
    month("Diversity sourcing strategies", "Expand underrepresented candidate pools", "Increase diversity hires"),
    month("Talent pipeline development", "Build long-term sourcing plans", "Maintain candidate pools"),
    month("Technology utilization", "Pilot sourcing automation tools", "Increase recruitment efficiency"),
    month("Coaching and mentoring", "Mentor recruiting team members", "Track team skill improvements"),
    month("Annual review and goal setting", "Report yearly sourcing outcomes", "Set strategic sourcing goals"),
];

const DEFAULT_PLAN: Plan = [
    month("Study core HR concepts", "Apply learnings in daily work", "Track progress and improvements"),
    month("Develop specialized skills", "Lead small HR projects", "Measure project outcomes"),
    month("Build stakeholder relationships", "Collaborate across departments", "Gather feedback from partners"),
    month("Learn new HR technologies", "Implement process improvements", "Document efficiency gains"),
    month("Attend industry events", "Share insights with team", "Apply best practices learned"),
    month("Focus on data and analytics", "Create meaningful HR reports", "Use data to drive decisions"),
    month("Develop leadership skills", "Mentor junior colleagues", "Track mentoring outcomes"),
    month("Study compliance requirements", "Conduct compliance audits", "Address any gaps found"),
    month("Explore strategic HR topics", "Contribute to strategic planning", "Present strategic recommendations"),
    month("Build external network", "Participate in HR communities", "Share learnings with organization"),
    month("Review year's accomplishments", "Prepare for next role transition", "Create development roadmap"),
    month("Plan next year's growth", "Set challenging new goals", "Align goals with career path"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn first_learning(key: &str) -> Option<&'static str> {
        find_plan(key).map(|plan| plan[0].learning)
    }

    #[test]
    fn test_plan_months_are_numbered_in_order() {
        let plan = select_monthly_plan(["Recruiter"]);
        assert_eq!(plan.len(), 12);
        let months: Vec<u8> = plan.iter().map(|m| m.month).collect();
        assert_eq!(months, (1..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn test_unknown_key_uses_default_plan() {
        let plan = select_monthly_plan(["Chief Happiness Officer"]);
        assert_eq!(plan[0].learning, "Study core HR concepts");
        assert_eq!(plan.len(), 12);
    }

    #[test]
    fn test_no_keys_uses_default_plan() {
        let plan = select_monthly_plan(std::iter::empty::<&str>());
        assert_eq!(plan[0].learning, "Study core HR concepts");
    }

    #[test]
    fn test_first_match_wins() {
        // "Senior Recruiter" and "Recruitment Manager" share the recruiter plan.
        assert_eq!(
            first_learning("Senior Recruiter"),
            Some("Study advanced interview frameworks")
        );
        assert_eq!(
            first_learning("Recruitment Manager"),
            Some("Study advanced interview frameworks")
        );
        // Employee relations is checked before HR manager.
        assert_eq!(
            first_learning("HR Manager/Employee Relations"),
            Some("Study advanced labor laws & union rules")
        );
    }

    #[test]
    fn test_chro_variants() {
        assert_eq!(first_learning("Director/CHRO"), Some("Study enterprise HR strategy"));
        assert_eq!(first_learning("CHRO"), Some("Enterprise leadership skills"));
        assert_eq!(first_learning("Group CHRO"), Some("Advanced leadership development"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(first_learning("hris MANAGER"), Some("Study HRIS system architecture"));
    }

    #[test]
    fn test_blank_key_matches_nothing() {
        assert!(find_plan("   ").is_none());
    }

    #[test]
    fn test_falls_through_keys_in_order() {
        // "Payroll Manager" has no plan; the next key does.
        let plan = select_monthly_plan(["Payroll Manager", "HR Generalist"]);
        assert_eq!(plan[0].learning, "Deep dive HR compliance and laws");
    }

    #[test]
    fn test_track_name_can_select_a_plan() {
        assert_eq!(first_learning("Learning & Development"), Some("Take L&D strategy course"));
        assert!(find_plan("People Analytics").is_none());
    }
}
