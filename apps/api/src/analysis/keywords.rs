//! Reference vocabularies for skill and education matching.
//!
//! These are configuration data: read-only, defined once, shared across every
//! request. List order matters for degrees and fields (first match wins).

/// Skill labels reported when their text appears anywhere in a document.
///
/// Single-letter labels (the R language) are left out: under substring
/// matching they would be reported for almost every document.
pub const SKILL_KEYWORDS: &[&str] = &[
    // Programming languages
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "Go",
    "Golang",
    "C++",
    "C#",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "Rust",
    "Scala",
    "MATLAB",
    // Web
    "HTML",
    "CSS",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "FastAPI",
    "Spring",
    "ASP.NET",
    "jQuery",
    // Databases
    "SQL",
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "Oracle",
    "SQL Server",
    "MariaDB",
    "Cassandra",
    "DynamoDB",
    "SQLite",
    // Cloud & DevOps
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Jenkins",
    "Git",
    "GitHub",
    "GitLab",
    "CI/CD",
    "Terraform",
    "Ansible",
    // Data science & ML
    "Machine Learning",
    "Deep Learning",
    "TensorFlow",
    "PyTorch",
    "scikit-learn",
    "Pandas",
    "NumPy",
    "Data Analysis",
    "NLP",
    // Mobile
    "Android",
    "iOS",
    "React Native",
    "Flutter",
    "Xamarin",
    // Practices & platforms
    "REST API",
    "GraphQL",
    "Microservices",
    "Agile",
    "Scrum",
    "Linux",
    "Unix",
    "Windows Server",
    "Networking",
    "Security",
];

/// Degree levels, highest first: doctoral, master's, bachelor's, associate/diploma.
pub const DEGREE_KEYWORDS: &[&str] = &[
    "Ph.D",
    "PhD",
    "Doctor of Philosophy",
    "Master",
    "M.S",
    "M.Sc",
    "MBA",
    "M.A",
    "Bachelor",
    "B.S",
    "B.Sc",
    "B.A",
    "B.E",
    "B.Tech",
    "Associate",
    "Diploma",
];

/// Fields of study, most specific first.
pub const FIELD_KEYWORDS: &[&str] = &[
    "Computer Science",
    "Software Engineering",
    "Information Technology",
    "Engineering",
    "Mathematics",
    "Physics",
    "Business Administration",
    "Data Science",
    "Artificial Intelligence",
];
