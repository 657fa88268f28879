//! Static career reference data.
//!
//! Match scores are fixed reference values. They are intentionally NOT
//! derived from quiz answers — the quiz emits its answer map and the
//! catalog stands alone, so a real scoring backend can be wired in later
//! without changing either side.

use crate::models::career::{Career, RoadmapStep, StepStatus};

fn career(
    id: &str,
    title: &str,
    icon: &str,
    match_score: u32,
    description: &str,
    avg_salary: &str,
) -> Career {
    Career {
        id: id.to_string(),
        title: title.to_string(),
        icon: icon.to_string(),
        match_score,
        description: description.to_string(),
        avg_salary: avg_salary.to_string(),
    }
}

/// The five careers shown on the results screen, best match first.
pub fn career_matches() -> Vec<Career> {
    vec![
        career(
            "graphic-designer",
            "Graphic Designer",
            "🎨",
            92,
            "Create visual concepts to communicate ideas",
            "₹3-8 LPA",
        ),
        career(
            "software-engineer",
            "Software Engineer",
            "💻",
            88,
            "Design and develop software applications",
            "₹5-15 LPA",
        ),
        career(
            "ux-designer",
            "UX Designer",
            "📱",
            85,
            "Design user-friendly digital experiences",
            "₹4-12 LPA",
        ),
        career(
            "data-scientist",
            "Data Scientist",
            "📊",
            82,
            "Analyze data to solve business problems",
            "₹6-20 LPA",
        ),
        career(
            "digital-marketer",
            "Digital Marketer",
            "📈",
            79,
            "Promote brands through digital channels",
            "₹3-10 LPA",
        ),
    ]
}

pub fn career_by_id(id: &str) -> Option<Career> {
    career_matches().into_iter().find(|c| c.id == id)
}

fn step(
    id: u32,
    title: &str,
    description: &str,
    timeframe: &str,
    status: StepStatus,
) -> RoadmapStep {
    RoadmapStep {
        id,
        title: title.to_string(),
        description: description.to_string(),
        timeframe: timeframe.to_string(),
        status,
    }
}

/// The guided roadmap shown once a career is selected. One shared track
/// for now; per-career tracks would slot in here.
pub fn roadmap_steps() -> Vec<RoadmapStep> {
    use StepStatus::*;
    vec![
        step(
            1,
            "Complete 10th Grade Successfully",
            "Focus on getting good grades across all subjects",
            "Current Year",
            Completed,
        ),
        step(
            2,
            "Choose the Right Stream",
            "Select Arts or Commerce with Computer Science",
            "After 10th Results",
            Completed,
        ),
        step(
            3,
            "Excel in Key Subjects",
            "Focus on English, Computer Science, and Fine Arts",
            "11th & 12th Grade",
            Current,
        ),
        step(
            4,
            "Build Your Portfolio",
            "Start creating design projects and build a strong portfolio",
            "11th & 12th Grade",
            Pending,
        ),
        step(
            5,
            "Research Design Colleges",
            "Explore BFA and B.Des programs in and around J&K",
            "12th Grade",
            Pending,
        ),
        step(
            6,
            "Prepare for Entrance Exams",
            "UCEED, CEED, and college-specific design entrance tests",
            "12th Grade",
            Pending,
        ),
        step(
            7,
            "Apply to Colleges",
            "Submit applications with your portfolio",
            "After 12th",
            Pending,
        ),
        step(
            8,
            "Complete Design Degree",
            "Excel in your chosen design program",
            "3-4 Years",
            Future,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_holds_five_careers_best_match_first() {
        let careers = career_matches();
        assert_eq!(careers.len(), 5);
        assert!(careers.windows(2).all(|w| w[0].match_score >= w[1].match_score));
        assert_eq!(careers[0].id, "graphic-designer");
    }

    #[test]
    fn test_career_lookup_by_id() {
        let career = career_by_id("software-engineer").unwrap();
        assert_eq!(career.title, "Software Engineer");
        assert_eq!(career.match_score, 88);
    }

    #[test]
    fn test_unknown_career_id_is_none() {
        assert!(career_by_id("astronaut").is_none());
    }

    #[test]
    fn test_roadmap_has_eight_ordered_steps() {
        let steps = roadmap_steps();
        assert_eq!(steps.len(), 8);
        assert!(steps.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(steps[2].status, StepStatus::Current);
        assert_eq!(steps[7].status, StepStatus::Future);
    }
}
