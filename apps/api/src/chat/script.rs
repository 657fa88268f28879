//! The chat script: a fixed table from exact question text to canned
//! reply, plus the greeting, suggested questions, and fallback.
//!
//! Lookup is verbatim string equality on purpose. There is no semantic or
//! fuzzy matching; anything off-script gets the fallback. Whether to
//! normalize keys (case, punctuation) before matching is an open product
//! question, so the table stays exact-match until that is decided.

pub const GREETING: &str = "Hi! I'm Dost, your friendly career guide! 👋\n\nI'm here to help answer any questions about your career journey. What would you like to know?";

pub const FALLBACK: &str = "That's a great question! While I don't have a specific answer for that right now, I'd recommend speaking with a career counselor or checking out career guidance resources online. Is there anything else I can help you with regarding the career paths we've discussed?";

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What colleges are near me?",
    "How much does a design course cost?",
    "Can I change my career path later?",
];

#[allow(dead_code)]
const RESPONSES: &[(&str, &str)] = &[
    (
        "What colleges are near me?",
        "Here are some great colleges in J&K for design:\n\n• University of Kashmir (Srinagar) - Offers BFA program\n• Jammu University (Jammu) - Design and fine arts courses\n• SKUAST Kashmir - Has some creative programs\n\nFor more options, you might also consider colleges in Delhi or Chandigarh, which are well-connected to J&K.",
    ),
    (
        "How much does a design course cost?",
        "Design course fees vary widely:\n\n• Government colleges: ₹10,000-50,000 per year\n• Private colleges: ₹1-5 lakhs per year\n• Premium design institutes: ₹3-8 lakhs per year\n\nDon't forget about scholarships! Many colleges offer merit-based and need-based scholarships for students from J&K.",
    ),
    (
        "Can I change my career path later?",
        "Absolutely! Career paths are rarely linear. Here's the good news:\n\n• Skills from design transfer to many fields (UI/UX, marketing, product management)\n• You can always learn new skills through online courses\n• Many successful professionals have changed careers multiple times\n\nThe key is to keep learning and stay adaptable!",
    ),
];

/// Resolves a user message to a bot reply: the scripted answer for a
/// verbatim key match, the fallback for everything else.
#[allow(dead_code)]
pub fn reply_for(text: &str) -> &'static str {
    RESPONSES
        .iter()
        .find(|(question, _)| *question == text)
        .map(|(_, answer)| *answer)
        .unwrap_or(FALLBACK)
}
