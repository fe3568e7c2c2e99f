use crate::board::domain::{JobId, JobPosting};

const SAMPLE_POSTINGS: [(&str, &str, &str, &str, &str, &str); 12] = [
    (
        "1",
        "Machine Learning Engineer",
        "DeepMind",
        "London, UK",
        "Full-time",
        "AI Research",
    ),
    (
        "2",
        "AI Ethics Researcher",
        "Anthropic",
        "San Francisco, CA",
        "Full-time",
        "AI Safety",
    ),
    (
        "3",
        "Applied Mathematician",
        "Jane Street",
        "New York, NY",
        "Full-time",
        "Mathematics",
    ),
    (
        "4",
        "Research Scientist",
        "OpenAI",
        "San Francisco, CA",
        "Full-time",
        "AI Research",
    ),
    (
        "5",
        "Data Engineer",
        "Databricks",
        "Remote",
        "Contract",
        "Data Infrastructure",
    ),
    (
        "6",
        "Computer Vision Engineer",
        "NVIDIA",
        "Santa Clara, CA",
        "Full-time",
        "Computer Vision",
    ),
    (
        "7",
        "NLP Research Intern",
        "Hugging Face",
        "Remote",
        "Internship",
        "Natural Language Processing",
    ),
    (
        "8",
        "MLOps Engineer",
        "Scale AI",
        "Remote",
        "Contract",
        "ML Infrastructure",
    ),
    (
        "9",
        "Robotics Software Engineer",
        "Boston Dynamics",
        "Waltham, MA",
        "Full-time",
        "Robotics",
    ),
    (
        "10",
        "Quantitative Researcher",
        "Two Sigma",
        "New York, NY",
        "Full-time",
        "Quantitative Finance",
    ),
    (
        "11",
        "Product Manager, AI Platform",
        "Microsoft",
        "Redmond, WA",
        "Full-time",
        "Product",
    ),
    (
        "12",
        "Prompt Engineer",
        "Cohere",
        "Toronto, ON",
        "Part-time",
        "AI Applications",
    ),
];

/// The postings published on the summit job board. Links are placeholders.
pub fn sample_catalog() -> Vec<JobPosting> {
    SAMPLE_POSTINGS
        .iter()
        .map(
            |&(id, role, company, location, employment_type, category)| JobPosting {
                id: JobId::from(id),
                role: role.to_string(),
                company: company.to_string(),
                location: location.to_string(),
                employment_type: employment_type.to_string(),
                category: category.to_string(),
                url: "#".to_string(),
            },
        )
        .collect()
}
