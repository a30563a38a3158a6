//! Fixed keyword and category lookup tables
//!
//! Scoring logic consumes these tables; extending a dictionary never requires
//! touching a scorer. Every table keeps a fixed iteration order because the
//! first matching entry wins.

/// Skill dictionary used to mine skills out of free-text descriptions.
pub const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "javascript",
    "java",
    "c++",
    "c#",
    "react",
    "angular",
    "vue",
    "node.js",
    "django",
    "flask",
    "spring",
    "sql",
    "nosql",
    "mongodb",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "ci/cd",
    "git",
    "agile",
    "scrum",
    "product management",
    "project management",
    "machine learning",
    "ai",
    "data science",
    "data analysis",
    "full stack",
    "frontend",
    "backend",
    "devops",
    "cloud",
    "security",
];

/// Degree names mapped to ordinal levels, checked by substring in order.
pub const DEGREE_LEVELS: &[(&str, u8)] = &[
    ("high school", 1),
    ("associate", 2),
    ("bachelor", 3),
    ("master", 4),
    ("phd", 5),
    ("doctorate", 5),
];

/// Role buckets used by the title scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleCategory {
    Developer,
    Data,
    Design,
    Product,
    Devops,
    Qa,
    Fullstack,
    Frontend,
    Backend,
    Solution,
}

/// Title keywords per role category; a title is assigned the first category
/// whose keyword list it matches.
pub const ROLE_CATEGORIES: &[(RoleCategory, &[&str])] = &[
    (
        RoleCategory::Developer,
        &["developer", "engineer", "programmer", "coder", "software"],
    ),
    (
        RoleCategory::Data,
        &["data", "analyst", "scientist", "analytics", "business intelligence"],
    ),
    (
        RoleCategory::Design,
        &["designer", "ux", "ui", "user experience", "user interface"],
    ),
    (
        RoleCategory::Product,
        &["product", "manager", "owner", "management"],
    ),
    (
        RoleCategory::Devops,
        &["devops", "sre", "reliability", "operations", "infrastructure"],
    ),
    (
        RoleCategory::Qa,
        &["qa", "quality", "tester", "testing", "assurance"],
    ),
    (
        RoleCategory::Fullstack,
        &["fullstack", "full stack", "full-stack"],
    ),
    (
        RoleCategory::Frontend,
        &["frontend", "front end", "front-end"],
    ),
    (RoleCategory::Backend, &["backend", "back end", "back-end"]),
    (
        RoleCategory::Solution,
        &["solution", "architect", "consultant", "engineering"],
    ),
];

/// Categories considered related for a 0.8 title score.
pub const RELATED_CATEGORIES: &[(RoleCategory, &[RoleCategory])] = &[
    (
        RoleCategory::Developer,
        &[
            RoleCategory::Fullstack,
            RoleCategory::Frontend,
            RoleCategory::Backend,
            RoleCategory::Solution,
        ],
    ),
    (
        RoleCategory::Fullstack,
        &[
            RoleCategory::Developer,
            RoleCategory::Frontend,
            RoleCategory::Backend,
            RoleCategory::Solution,
        ],
    ),
    (
        RoleCategory::Frontend,
        &[
            RoleCategory::Developer,
            RoleCategory::Fullstack,
            RoleCategory::Design,
        ],
    ),
    (
        RoleCategory::Backend,
        &[
            RoleCategory::Developer,
            RoleCategory::Fullstack,
            RoleCategory::Devops,
        ],
    ),
    (
        RoleCategory::Solution,
        &[
            RoleCategory::Developer,
            RoleCategory::Fullstack,
            RoleCategory::Product,
        ],
    ),
];

/// Culture tags and the description keywords that indicate them.
pub const CULTURE_INDICATORS: &[(&str, &[&str])] = &[
    (
        "fast-paced",
        &["fast-paced", "fast paced", "dynamic", "rapidly", "quickly"],
    ),
    (
        "innovative",
        &[
            "innovative",
            "innovation",
            "cutting-edge",
            "cutting edge",
            "state-of-the-art",
        ],
    ),
    (
        "collaborative",
        &["collaborative", "team", "teamwork", "together", "cooperation"],
    ),
    (
        "flexible",
        &["flexible", "flexibility", "work-life balance", "remote", "hybrid"],
    ),
    (
        "growth-oriented",
        &["growth", "learning", "development", "career", "opportunity"],
    ),
];

/// Assign a role category to a lowercased title, first match wins.
pub fn role_category(title: &str) -> Option<RoleCategory> {
    for (category, keywords) in ROLE_CATEGORIES {
        if keywords.iter().any(|keyword| title.contains(keyword)) {
            return Some(*category);
        }
    }
    None
}

/// Whether two distinct categories count as related.
pub fn categories_related(a: RoleCategory, b: RoleCategory) -> bool {
    RELATED_CATEGORIES
        .iter()
        .find(|(category, _)| *category == a)
        .map(|(_, related)| related.contains(&b))
        .unwrap_or(false)
}

/// Ordinal degree level found in free text, 0 when no degree word appears.
pub fn degree_level(text: &str) -> u8 {
    let lowered = text.to_lowercase();
    for (name, level) in DEGREE_LEVELS {
        if lowered.contains(name) {
            return *level;
        }
    }
    0
}
