use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<QuizOption>,
    pub correct_answer_id: String,
}

impl Question {
    pub fn new(id: String, question: String, options: Vec<QuizOption>, correct_answer_id: String) -> Self {
        Self {
            id,
            question,
            options,
            correct_answer_id,
        }
    }

    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_answer_id == option_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

impl QuizOption {
    pub fn new(id: String, text: String) -> Self {
        Self { id, text }
    }
}

/// Grades every answered question. Unanswered questions get no entry,
/// they are "not graded yet" rather than wrong.
pub fn grade(answers: &HashMap<String, String>, questions: &[Question]) -> HashMap<String, bool> {
    questions
        .iter()
        .filter_map(|q| {
            answers
                .get(&q.id)
                .map(|chosen| (q.id.clone(), q.is_correct(chosen)))
        })
        .collect()
}

/// How an option should be presented given the current selections and the
/// last verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFeedback {
    Neutral,
    Selected,
    Correct,
    Incorrect,
}

/// Answer selections and grading results of one mounted quiz.
///
/// Results only exist after [`QuizSession::verify`] and are dropped as a
/// whole on the next selection, so a stale per-question verdict can never
/// be shown next to an edited answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizSession {
    answers: HashMap<String, String>,
    results: Option<HashMap<String, bool>>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, question_id: &str, option_id: &str) {
        self.answers
            .insert(question_id.to_string(), option_id.to_string());
        self.results = None;
    }

    pub fn selected(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn verify(&mut self, quiz: &Quiz) {
        let results = grade(&self.answers, &quiz.questions);
        log::debug!(
            "Verified quiz: {} of {} questions answered",
            results.len(),
            quiz.questions.len()
        );
        self.results = Some(results);
    }

    pub fn results(&self) -> Option<&HashMap<String, bool>> {
        self.results.as_ref()
    }

    pub fn is_verified(&self) -> bool {
        self.results.is_some()
    }

    pub fn outcome(&self, question_id: &str) -> Option<bool> {
        self.results.as_ref()?.get(question_id).copied()
    }

    /// True once a verification graded every question of the quiz as correct.
    pub fn all_correct(&self, quiz: &Quiz) -> bool {
        !quiz.is_empty()
            && quiz
                .questions
                .iter()
                .all(|q| self.outcome(&q.id) == Some(true))
    }

    pub fn feedback(&self, question: &Question, option_id: &str) -> OptionFeedback {
        let selected = self.selected(&question.id) == Some(option_id);
        // the answer is only revealed for questions the last verify graded
        if self.outcome(&question.id).is_some() {
            if question.is_correct(option_id) {
                return OptionFeedback::Correct;
            }
            if selected {
                return OptionFeedback::Incorrect;
            }
        }
        if selected {
            OptionFeedback::Selected
        } else {
            OptionFeedback::Neutral
        }
    }
}
