use serde::{Serialize, Serializer};

use super::questions::QUESTION_COUNT;

/// Value stored for a question that has not been answered yet.
pub const UNANSWERED: u8 = 0;
pub const MIN_ANSWER: u8 = 1;
pub const MAX_ANSWER: u8 = 5;

/// One Likert answer per catalog question, indexed by `id - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerVector([u8; QUESTION_COUNT]);

impl AnswerVector {
    pub fn new() -> Self {
        Self([UNANSWERED; QUESTION_COUNT])
    }

    /// Every slot set to `value`, as used by the sample profiles in tests.
    pub fn filled(value: u8) -> Self {
        Self([value; QUESTION_COUNT])
    }

    pub fn from_array(values: [u8; QUESTION_COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// Returns `false` and leaves the vector untouched when `index` is out of range.
    pub(crate) fn set(&mut self, index: usize, value: u8) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn answered_count(&self) -> usize {
        self.0.iter().filter(|&&v| v != UNANSWERED).count()
    }

    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|&v| v != UNANSWERED)
    }
}

impl Default for AnswerVector {
    fn default() -> Self {
        Self::new()
    }
}

// serde only derives for arrays up to 32 elements
impl Serialize for AnswerVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

/// One selectable option of a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: u8,
    pub label: &'static str,
    pub enabled: bool,
}

static CHOICES: [Choice; 6] = [
    Choice { value: UNANSWERED, label: "Seçiniz", enabled: false },
    Choice { value: 1, label: "1 - Kesinlikle Katılmıyorum", enabled: true },
    Choice { value: 2, label: "2 - Katılmıyorum", enabled: true },
    Choice { value: 3, label: "3 - Kararsızım", enabled: true },
    Choice { value: 4, label: "4 - Katılıyorum", enabled: true },
    Choice { value: 5, label: "5 - Kesinlikle Katılıyorum", enabled: true },
];

/// Placeholder first, then the five Likert levels.
pub fn choices() -> &'static [Choice] {
    &CHOICES
}

pub fn choice_label(value: u8) -> &'static str {
    CHOICES
        .iter()
        .find(|c| c.value == value)
        .map(|c| c.label)
        .unwrap_or(CHOICES[0].label)
}
