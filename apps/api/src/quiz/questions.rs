//! The fixed compass-test question bank: 5 questions, 4 options each.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<QuizOption>,
}

fn question(id: u32, text: &str, options: &[(&str, &str)]) -> Question {
    Question {
        id,
        question: text.to_string(),
        options: options
            .iter()
            .map(|(text, value)| QuizOption {
                text: text.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}

pub fn question_bank() -> Vec<Question> {
    vec![
        question(
            1,
            "What type of activities do you enjoy the most?",
            &[
                ("Working with computers and technology", "tech"),
                ("Helping and caring for people", "people"),
                ("Creating art, music, or writing", "creative"),
                ("Solving math and science problems", "analytical"),
            ],
        ),
        question(
            2,
            "In a group project, you usually:",
            &[
                ("Take charge and lead the team", "leader"),
                ("Research and analyze information", "researcher"),
                ("Come up with creative ideas", "creative"),
                ("Make sure everyone gets along", "collaborative"),
            ],
        ),
        question(
            3,
            "Your ideal work environment would be:",
            &[
                ("A quiet office with computers", "tech"),
                ("Outdoors or in nature", "outdoor"),
                ("A busy hospital or clinic", "healthcare"),
                ("A creative studio or lab", "creative"),
            ],
        ),
        question(
            4,
            "What motivates you the most?",
            &[
                ("Making a positive impact on society", "impact"),
                ("Earning good money and financial security", "financial"),
                ("Learning new things constantly", "learning"),
                ("Being recognized for my achievements", "recognition"),
            ],
        ),
        question(
            5,
            "Which subject do you find most interesting?",
            &[
                ("Mathematics and Physics", "stem"),
                ("Biology and Chemistry", "science"),
                ("History and Social Studies", "humanities"),
                ("Art and Literature", "arts"),
            ],
        ),
    ]
}
