//! Static course content: modules, their lessons and the optional quiz of
//! each lesson. Loaded once at startup from `content/course.json` and never
//! mutated afterwards.

use std::collections::HashSet;

use thiserror::Error;

use crate::quiz::Quiz;

const EMBEDDED_COURSE: &str = include_str!("../content/course.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("course content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{kind} has an empty id")]
    EmptyId { kind: &'static str },

    /// Module and lesson ids share the page anchor namespace.
    #[error("duplicate anchor id '{0}'")]
    DuplicateAnchor(String),

    #[error("duplicate question id '{0}'")]
    DuplicateQuestion(String),

    #[error("question '{0}' needs at least two options")]
    TooFewOptions(String),

    #[error("question '{question}' lists option '{option}' twice")]
    DuplicateOption { question: String, option: String },

    #[error("question '{question}' expects answer '{answer}' which is not one of its options")]
    UnknownCorrectAnswer { question: String, answer: String },
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub declarative_content: String,
    pub procedural_content: String,
    /// Trusted, author-controlled markup. Rendered as-is.
    pub example_html: String,
    #[serde(default)]
    pub quiz: Option<Quiz>,
}

impl Lesson {
    /// The quiz to show, if the lesson has one with at least one question.
    pub fn active_quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref().filter(|quiz| !quiz.is_empty())
    }
}

impl Catalog {
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_COURSE)
    }

    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut anchors = HashSet::new();
        let mut questions = HashSet::new();

        for module in &self.modules {
            check_anchor(&mut anchors, "module", &module.id)?;
            for lesson in &module.lessons {
                check_anchor(&mut anchors, "lesson", &lesson.id)?;
                let Some(quiz) = &lesson.quiz else {
                    continue;
                };
                for question in &quiz.questions {
                    if question.id.is_empty() {
                        return Err(CatalogError::EmptyId { kind: "question" });
                    }
                    // radio groups are keyed by question id across the whole page
                    if !questions.insert(question.id.as_str()) {
                        return Err(CatalogError::DuplicateQuestion(question.id.clone()));
                    }
                    if question.options.len() < 2 {
                        return Err(CatalogError::TooFewOptions(question.id.clone()));
                    }
                    let mut options = HashSet::new();
                    for option in &question.options {
                        if !options.insert(option.id.as_str()) {
                            return Err(CatalogError::DuplicateOption {
                                question: question.id.clone(),
                                option: option.id.clone(),
                            });
                        }
                    }
                    if !options.contains(question.correct_answer_id.as_str()) {
                        return Err(CatalogError::UnknownCorrectAnswer {
                            question: question.id.clone(),
                            answer: question.correct_answer_id.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_anchor<'a>(
    seen: &mut HashSet<&'a str>,
    kind: &'static str,
    id: &'a str,
) -> Result<(), CatalogError> {
    if id.is_empty() {
        return Err(CatalogError::EmptyId { kind });
    }
    if !seen.insert(id) {
        return Err(CatalogError::DuplicateAnchor(id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_course_is_valid() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.modules[0].id, "module1");
        assert_eq!(catalog.modules[0].lessons.len(), 3);
        assert!(catalog.modules[1..].iter().all(|m| m.lessons.is_empty()));

        let first = &catalog.modules[0].lessons[0];
        let quiz = first.active_quiz().unwrap();
        assert_eq!(quiz.questions.len(), 3);
        assert_eq!(quiz.questions[0].correct_answer_id, "q1-1-c");
    }

    #[test]
    fn lesson_without_quiz_field_parses() {
        let catalog = Catalog::from_json(
            r#"{"modules":[{"id":"m","title":"M","lessons":[{"id":"l","title":"L",
            "declarativeContent":"d","proceduralContent":"p","exampleHtml":"<p>x</p>"}]}]}"#,
        )
        .unwrap();
        assert!(catalog.modules[0].lessons[0].active_quiz().is_none());
    }

    #[test]
    fn empty_quiz_is_not_active() {
        let lesson = Lesson {
            quiz: Some(Quiz::default()),
            ..Lesson::default()
        };
        assert!(lesson.active_quiz().is_none());
    }

    fn single_question(options: &str, correct: &str) -> String {
        format!(
            r#"{{"modules":[{{"id":"m","title":"M","lessons":[{{"id":"l","title":"L",
            "declarativeContent":"","proceduralContent":"","exampleHtml":"",
            "quiz":{{"questions":[{{"id":"q","question":"?","options":[{}],"correctAnswerId":"{}"}}]}}}}]}}]}}"#,
            options, correct
        )
    }

    #[test]
    fn rejects_answer_that_is_not_an_option() {
        let source = single_question(r#"{"id":"a","text":"A"},{"id":"b","text":"B"}"#, "z");
        let err = Catalog::from_json(&source).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCorrectAnswer { .. }));
    }

    #[test]
    fn rejects_single_option_question() {
        let source = single_question(r#"{"id":"a","text":"A"}"#, "a");
        let err = Catalog::from_json(&source).unwrap_err();
        assert!(matches!(err, CatalogError::TooFewOptions(q) if q == "q"));
    }

    #[test]
    fn rejects_duplicate_option_ids() {
        let source = single_question(r#"{"id":"a","text":"A"},{"id":"a","text":"B"}"#, "a");
        let err = Catalog::from_json(&source).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateOption { .. }));
    }

    #[test]
    fn rejects_lesson_reusing_module_anchor() {
        let source = r#"{"modules":[{"id":"m","title":"M","lessons":[{"id":"m","title":"L",
            "declarativeContent":"","proceduralContent":"","exampleHtml":""}]}]}"#;
        let err = Catalog::from_json(source).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateAnchor(id) if id == "m"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("{\"modules\": [").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
