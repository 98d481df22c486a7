use log::{debug, warn};
use thiserror::Error;

use super::answers::{AnswerVector, MAX_ANSWER, MIN_ANSWER, UNANSWERED};
use super::questions::{Category, Question};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Lütfen tüm soruları cevaplayın. ({answered} / {total})")]
    Incomplete { answered: usize, total: usize },
    #[error("Bilinmeyen soru: {0}")]
    UnknownQuestion(u32),
    #[error("Geçersiz cevap: {0} (1-5 arasında olmalıdır)")]
    InvalidAnswer(u8),
}

/// Display group of questions sharing one category.
#[derive(Debug, Clone)]
pub struct FormSection<'a> {
    pub category: Category,
    pub questions: Vec<&'a Question>,
}

impl FormSection<'_> {
    pub fn title(&self) -> &'static str {
        self.category.title()
    }
}

/// Working state of one questionnaire.
///
/// Grouping by category is only a view; answers are always stored at
/// `id - 1` so the submitted vector follows catalog declaration order.
pub struct QuestionForm<'a> {
    catalog: &'a [Question],
    answers: AnswerVector,
}

impl<'a> QuestionForm<'a> {
    pub fn new(catalog: &'a [Question]) -> Self {
        Self {
            catalog,
            answers: AnswerVector::new(),
        }
    }

    pub fn answer(&self, question_id: u32) -> Option<u8> {
        self.find(question_id)
            .and_then(|q| q.index())
            .and_then(|index| self.answers.get(index))
    }

    pub fn sections(&self) -> Vec<FormSection<'a>> {
        let mut sections: Vec<FormSection<'a>> = Vec::new();
        for question in self.catalog {
            match sections.iter_mut().find(|s| s.category == question.category) {
                Some(section) => section.questions.push(question),
                None => sections.push(FormSection {
                    category: question.category,
                    questions: vec![question],
                }),
            }
        }
        sections
    }

    pub fn set_answer(&mut self, question_id: u32, value: u8) -> Result<(), FormError> {
        let index = self
            .find(question_id)
            .and_then(|q| q.index())
            .ok_or(FormError::UnknownQuestion(question_id))?;
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
            return Err(FormError::InvalidAnswer(value));
        }
        if !self.answers.set(index, value) {
            return Err(FormError::UnknownQuestion(question_id));
        }
        debug!("Answer {} = {} ({} / {})", question_id, value, self.answered_count(), self.total());
        Ok(())
    }

    pub fn answered_count(&self) -> usize {
        self.answers.answered_count()
    }

    pub fn total(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.is_complete()
    }

    /// Next unanswered question in display order.
    pub fn next_unanswered(&self) -> Option<&'a Question> {
        self.sections()
            .into_iter()
            .flat_map(|s| s.questions)
            .find(|q| q.index().and_then(|i| self.answers.get(i)) == Some(UNANSWERED))
    }

    /// Hand a copy of the answers to `on_submit` once every question is
    /// answered. Never clears the form.
    pub fn submit<F>(&self, on_submit: F) -> Result<(), FormError>
    where
        F: FnOnce(AnswerVector),
    {
        if !self.is_complete() {
            warn!("Submit refused: {} / {} answered", self.answered_count(), self.total());
            return Err(FormError::Incomplete {
                answered: self.answered_count(),
                total: self.total(),
            });
        }
        on_submit(self.answers);
        Ok(())
    }

    fn find(&self, question_id: u32) -> Option<&'a Question> {
        self.catalog.iter().find(|q| q.id == question_id)
    }
}
