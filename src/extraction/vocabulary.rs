//! Fixed vocabularies used by keyword extraction: stop words, soft-skill
//! exclusions, the technical-term set, and known multi-word phrases.

use std::collections::HashSet;

/// Common English function words plus recruiting boilerplate that carries no
/// signal in a job posting ("experience", "team", "role", ...).
pub fn stop_words() -> HashSet<&'static str> {
    [
        "a", "an", "and", "are", "as", "at", "be", "been", "but", "by",
        "can", "could", "did", "do", "does", "for", "from", "had", "has",
        "have", "he", "her", "him", "his", "how", "if", "in", "into", "is",
        "it", "its", "may", "might", "must", "no", "not", "of", "on", "or",
        "our", "out", "over", "own", "she", "should", "so", "some", "such",
        "than", "that", "the", "their", "them", "then", "these", "they",
        "this", "those", "through", "to", "too", "under", "until", "up",
        "was", "we", "were", "what", "when", "where", "which", "while",
        "who", "why", "will", "with", "within", "without", "would", "you",
        "your",
        // recruiting boilerplate
        "ability", "able", "about", "across", "all", "also", "among",
        "applicant", "apply", "benefits", "best", "candidate", "candidates",
        "career", "company", "days", "degree", "description", "duties",
        "employee", "employees", "environment", "equal", "experience",
        "full-time", "great", "help", "hire", "hiring", "ideal", "include",
        "including", "job", "join", "looking", "member", "minimum", "more",
        "need", "needs", "new", "offer", "opportunity", "other", "part",
        "people", "person", "please", "plus", "position", "preferred",
        "qualifications", "related", "required", "requirements", "responsibilities",
        "responsible", "role", "salary", "seeking", "skills", "strong",
        "successful", "team", "time", "using", "well", "work", "working",
        "years",
    ]
    .into_iter()
    .collect()
}

/// Interpersonal/soft-skill terms excluded from extraction. Force-injecting
/// these into a resume reads as generic filler, so they never make the cut.
/// Also carries a small denylist of unrelated product names that show up in
/// postings but never belong on a tailored resume.
pub fn soft_skills() -> HashSet<&'static str> {
    [
        "communication", "leadership", "teamwork", "collaboration",
        "collaborative", "interpersonal", "motivated", "self-motivated",
        "self-starter", "passionate", "passion", "enthusiasm",
        "enthusiastic", "organized", "organizational", "detail-oriented",
        "multitasking", "adaptable", "adaptability", "flexible",
        "flexibility", "creative", "creativity", "proactive", "dedicated",
        "dependable", "reliable", "punctual", "positive", "attitude",
        "mentoring", "coaching", "presentation", "negotiation",
        "problem-solving", "critical-thinking",
        // unrelated product names seen in boilerplate
        "outlook", "word", "excel", "powerpoint", "sharepoint",
    ]
    .into_iter()
    .collect()
}

/// Languages, frameworks, cloud/platform/tooling names, and certifications.
/// An occurrence of any of these is weighted heavily during scoring.
pub fn technical_terms() -> HashSet<&'static str> {
    [
        // languages
        "rust", "python", "javascript", "typescript", "java", "c++", "c#",
        "go", "golang", "ruby", "php", "swift", "kotlin", "scala", "perl",
        "matlab", "sql", "nosql", "html", "css", "bash", "powershell",
        // frameworks and libraries
        "react", "angular", "vue", "svelte", "nextjs", "next.js", "node",
        "node.js", "nodejs", "express", "django", "flask", "fastapi",
        "rails", "spring", "laravel", ".net", "dotnet", "graphql", "rest",
        "grpc", "tensorflow", "pytorch", "pandas", "numpy", "spark",
        "hadoop", "kafka", "airflow", "tailwind", "bootstrap", "jquery",
        "webpack", "redux",
        // cloud, platforms, tooling
        "aws", "azure", "gcp", "docker", "kubernetes", "terraform",
        "ansible", "jenkins", "git", "github", "gitlab", "linux", "unix",
        "nginx", "redis", "elasticsearch", "postgresql", "postgres",
        "mysql", "mongodb", "sqlite", "dynamodb", "cassandra", "snowflake",
        "databricks", "tableau", "salesforce", "jira", "grafana",
        "prometheus", "splunk", "selenium", "cypress", "jest", "pytest",
        "junit", "maven", "gradle",
        // methodology and certifications
        "agile", "scrum", "kanban", "devops", "microservices", "cicd",
        "pmp", "cissp", "ccna", "cpa", "cfa", "itil", "six-sigma",
        "comptia", "cka", "ckad",
    ]
    .into_iter()
    .collect()
}

/// Multi-word technical phrases matched by substring containment against the
/// lowercased posting text. Each phrase found anywhere earns a flat bonus.
pub const TECHNICAL_PHRASES: &[&str] = &[
    "machine learning",
    "deep learning",
    "data science",
    "data engineering",
    "data analysis",
    "natural language processing",
    "computer vision",
    "artificial intelligence",
    "software engineering",
    "software development",
    "web development",
    "cloud computing",
    "cloud infrastructure",
    "distributed systems",
    "ci/cd",
    "continuous integration",
    "continuous deployment",
    "full-stack",
    "full stack",
    "front-end",
    "back-end",
    "object-oriented",
    "test-driven development",
    "version control",
    "project management",
    "product management",
    "business intelligence",
    "quality assurance",
    "site reliability",
    "infrastructure as code",
    "api design",
    "system design",
];
