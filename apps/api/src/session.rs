//! The screen-journey state machine.
//!
//! One value holds everything the front-end session tracks: the active
//! screen, the collected quiz answers, the selected career, and the chat
//! overlay flags. Transitions go through a pure `apply(state, event)`
//! function, so the whole journey is unit-testable with no rendering
//! surface behind it.

use thiserror::Error;

use crate::careers::catalog::career_by_id;
use crate::models::career::Career;
use crate::quiz::flow::QuizAnswers;

/// The mutually exclusive top-level screens.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Quiz,
    Results,
    Exploration,
    Roadmap,
    Chat,
}

/// User-driven navigation events.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum NavEvent {
    StartJourney,
    CompleteQuiz(QuizAnswers),
    ViewCareer(String),
    ViewRoadmap,
    BackToHome,
    BackToResults,
    BackToExploration,
    ToggleChat,
}

#[allow(dead_code)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("no career selected")]
    NoCareerSelected,

    #[error("unknown career '{0}'")]
    UnknownCareer(String),

    #[error("chat is not available before the quiz is completed")]
    ChatUnavailable,
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Session {
    screen: Screen,
    answers: QuizAnswers,
    selected_career: Option<Career>,
    chat_available: bool,
    chat_open: bool,
    /// Where closing the chat overlay returns to.
    return_screen: Screen,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl Session {
    pub fn new() -> Self {
        Session {
            screen: Screen::Home,
            answers: QuizAnswers::new(),
            selected_career: None,
            chat_available: false,
            chat_open: false,
            return_screen: Screen::Results,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn selected_career(&self) -> Option<&Career> {
        self.selected_career.as_ref()
    }

    /// Whether the chat affordance is shown (enabled once the quiz
    /// completes, hidden again on returning home).
    pub fn chat_available(&self) -> bool {
        self.chat_available
    }

    pub fn chat_open(&self) -> bool {
        self.chat_open
    }

    /// The transition function. Returns the next session value; guard
    /// violations return a typed error and leave `self` untouched.
    pub fn apply(&self, event: NavEvent) -> Result<Session, TransitionError> {
        let mut next = self.clone();
        match event {
            NavEvent::StartJourney => {
                next.screen = Screen::Quiz;
            }
            NavEvent::CompleteQuiz(answers) => {
                next.answers = answers;
                next.screen = Screen::Results;
                next.chat_available = true;
            }
            NavEvent::ViewCareer(id) => {
                let career =
                    career_by_id(&id).ok_or_else(|| TransitionError::UnknownCareer(id))?;
                next.selected_career = Some(career);
                next.screen = Screen::Exploration;
            }
            NavEvent::ViewRoadmap => {
                if next.selected_career.is_none() {
                    return Err(TransitionError::NoCareerSelected);
                }
                next.screen = Screen::Roadmap;
            }
            NavEvent::BackToHome => {
                next.screen = Screen::Home;
                next.chat_available = false;
                next.chat_open = false;
            }
            NavEvent::BackToResults => {
                next.screen = Screen::Results;
            }
            NavEvent::BackToExploration => {
                if next.selected_career.is_none() {
                    return Err(TransitionError::NoCareerSelected);
                }
                next.screen = Screen::Exploration;
            }
            NavEvent::ToggleChat => {
                if !next.chat_available {
                    return Err(TransitionError::ChatUnavailable);
                }
                if next.chat_open {
                    next.chat_open = false;
                    next.screen = next.return_screen;
                } else {
                    next.return_screen = next.screen;
                    next.chat_open = true;
                    next.screen = Screen::Chat;
                }
            }
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_answers() -> QuizAnswers {
        (1..=5).map(|id| (id, "tech".to_string())).collect()
    }

    fn session_at_results() -> Session {
        Session::new()
            .apply(NavEvent::StartJourney)
            .unwrap()
            .apply(NavEvent::CompleteQuiz(completed_answers()))
            .unwrap()
    }

    #[test]
    fn test_fresh_session_sits_on_home() {
        let session = Session::new();
        assert_eq!(session.screen(), Screen::Home);
        assert!(!session.chat_available());
        assert!(session.selected_career().is_none());
    }

    #[test]
    fn test_start_journey_enters_the_quiz() {
        let session = Session::new().apply(NavEvent::StartJourney).unwrap();
        assert_eq!(session.screen(), Screen::Quiz);
    }

    #[test]
    fn test_complete_quiz_stores_answers_and_enables_chat() {
        let session = session_at_results();
        assert_eq!(session.screen(), Screen::Results);
        assert_eq!(session.answers().len(), 5);
        assert!(session.chat_available());
    }

    #[test]
    fn test_view_career_selects_and_enters_exploration() {
        let session = session_at_results()
            .apply(NavEvent::ViewCareer("software-engineer".to_string()))
            .unwrap();
        assert_eq!(session.screen(), Screen::Exploration);
        assert_eq!(
            session.selected_career().unwrap().title,
            "Software Engineer"
        );
    }

    #[test]
    fn test_unknown_career_is_rejected() {
        let err = session_at_results()
            .apply(NavEvent::ViewCareer("pilot".to_string()))
            .unwrap_err();
        assert_eq!(err, TransitionError::UnknownCareer("pilot".to_string()));
    }

    #[test]
    fn test_roadmap_requires_a_selected_career() {
        let err = session_at_results().apply(NavEvent::ViewRoadmap).unwrap_err();
        assert_eq!(err, TransitionError::NoCareerSelected);

        let session = session_at_results()
            .apply(NavEvent::ViewCareer("ux-designer".to_string()))
            .unwrap()
            .apply(NavEvent::ViewRoadmap)
            .unwrap();
        assert_eq!(session.screen(), Screen::Roadmap);
    }

    #[test]
    fn test_back_to_home_resets_chat_but_keeps_answers() {
        let session = session_at_results().apply(NavEvent::BackToHome).unwrap();
        assert_eq!(session.screen(), Screen::Home);
        assert!(!session.chat_available());
        assert!(!session.chat_open());
        assert_eq!(session.answers().len(), 5);
    }

    #[test]
    fn test_chat_unavailable_before_quiz_completion() {
        let err = Session::new().apply(NavEvent::ToggleChat).unwrap_err();
        assert_eq!(err, TransitionError::ChatUnavailable);
    }

    #[test]
    fn test_toggle_chat_round_trips_to_the_prior_screen() {
        let session = session_at_results().apply(NavEvent::ToggleChat).unwrap();
        assert_eq!(session.screen(), Screen::Chat);
        assert!(session.chat_open());

        let session = session.apply(NavEvent::ToggleChat).unwrap();
        assert_eq!(session.screen(), Screen::Results);
        assert!(!session.chat_open());
    }

    #[test]
    fn test_guard_violation_leaves_the_session_usable() {
        let session = session_at_results();
        assert_eq!(
            session.apply(NavEvent::ViewRoadmap).unwrap_err(),
            TransitionError::NoCareerSelected
        );
        // The rejected event changed nothing; the same value keeps going.
        assert_eq!(session.screen(), Screen::Results);
        let session = session
            .apply(NavEvent::ViewCareer("ux-designer".to_string()))
            .unwrap();
        assert_eq!(session.screen(), Screen::Exploration);
    }

    #[test]
    fn test_roadmap_back_returns_to_exploration() {
        let session = session_at_results()
            .apply(NavEvent::ViewCareer("data-scientist".to_string()))
            .unwrap()
            .apply(NavEvent::ViewRoadmap)
            .unwrap()
            .apply(NavEvent::BackToExploration)
            .unwrap();
        assert_eq!(session.screen(), Screen::Exploration);
    }

    #[test]
    fn test_full_journey_home_to_roadmap_and_back() {
        let session = Session::new()
            .apply(NavEvent::StartJourney)
            .unwrap()
            .apply(NavEvent::CompleteQuiz(completed_answers()))
            .unwrap()
            .apply(NavEvent::ViewCareer("graphic-designer".to_string()))
            .unwrap()
            .apply(NavEvent::ViewRoadmap)
            .unwrap()
            .apply(NavEvent::BackToExploration)
            .unwrap()
            .apply(NavEvent::BackToResults)
            .unwrap()
            .apply(NavEvent::BackToHome)
            .unwrap();
        assert_eq!(session.screen(), Screen::Home);
    }
}
