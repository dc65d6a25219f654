//! Plan model definition and related functionality.

use std::collections::HashSet;

use jiff::Timestamp;
use rand::{seq::IndexedRandom, Rng};
use serde::{Deserialize, Serialize};

use super::Question;
use crate::error::{Result, TrackerError};

/// A study plan: an ordered list of questions plus metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Display name of the plan
    pub name: String,

    /// Timestamp when the plan was initialized (UTC)
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub started_at: Timestamp,

    /// Questions in extraction order
    pub questions: Vec<Question>,
}

/// Outcome of marking a set of question ids as complete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionReport {
    /// Ids that went from unsolved to solved
    pub newly_completed: Vec<String>,
    /// Ids that matched but were already solved
    pub already_completed: Vec<String>,
    /// Requested ids that are not part of the plan
    pub unknown: Vec<String>,
}

impl CompletionReport {
    /// Number of requested ids that matched a question in the plan.
    pub fn marked(&self) -> usize {
        self.newly_completed.len() + self.already_completed.len()
    }

    /// Whether the plan was modified.
    pub fn changed(&self) -> bool {
        !self.newly_completed.is_empty()
    }
}

impl Plan {
    /// Creates a plan started now.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if the name is blank or two
    /// questions share an id.
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TrackerError::invalid_input("name").with_reason("Plan name cannot be empty"));
        }
        if let Some(id) = first_duplicate_id(&questions) {
            return Err(TrackerError::invalid_input("questions")
                .with_reason(format!("Duplicate question id '{id}'")));
        }

        Ok(Self {
            name,
            started_at: Timestamp::now(),
            questions,
        })
    }

    /// Ids of all unsolved questions, in plan order.
    pub fn unsolved_questions(&self) -> Vec<&str> {
        self.questions
            .iter()
            .filter(|q| !q.completed)
            .map(|q| q.id.as_str())
            .collect()
    }

    /// Number of solved questions.
    pub fn completed_count(&self) -> usize {
        self.questions.iter().filter(|q| q.completed).count()
    }

    /// Total number of questions.
    pub fn total_count(&self) -> usize {
        self.questions.len()
    }

    /// Looks up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Marks every question whose id is in `ids` as complete at `now`.
    ///
    /// Unknown ids are ignored and reported. Questions that are already
    /// complete keep their original `completed_at`.
    pub fn mark_complete<S: AsRef<str>>(&mut self, ids: &[S], now: Timestamp) -> CompletionReport {
        let requested: HashSet<&str> = ids.iter().map(AsRef::as_ref).collect();
        let mut report = CompletionReport::default();
        let mut matched = HashSet::new();

        for question in self
            .questions
            .iter_mut()
            .filter(|q| requested.contains(q.id.as_str()))
        {
            matched.insert(question.id.clone());
            if question.mark_complete(now) {
                report.newly_completed.push(question.id.clone());
            } else {
                report.already_completed.push(question.id.clone());
            }
        }

        let mut seen = HashSet::new();
        report.unknown = ids
            .iter()
            .map(AsRef::as_ref)
            .filter(|id| !matched.contains(*id) && seen.insert(*id))
            .map(str::to_string)
            .collect();

        report
    }

    /// Picks up to `n` distinct unsolved question ids uniformly at random.
    ///
    /// Returns every unsolved id when fewer than `n` remain.
    pub fn sample_unsolved<R>(&self, n: usize, rng: &mut R) -> Vec<&str>
    where
        R: Rng + ?Sized,
    {
        let unsolved = self.unsolved_questions();
        let amount = n.min(unsolved.len());
        unsolved.choose_multiple(rng, amount).copied().collect()
    }

    /// Checks the structural rules a persisted plan must satisfy.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Parse` naming the first violated rule.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| {
            Err(TrackerError::parse(format!("plan '{}'", self.name)).with_reason(reason))
        };

        if self.name.trim().is_empty() {
            return invalid("plan name is empty".to_string());
        }
        for (index, question) in self.questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                return invalid(format!("question #{index} has an empty id"));
            }
            if question.name.trim().is_empty() {
                return invalid(format!("question '{}' has an empty name", question.id));
            }
            if !question.completed && question.completed_at.is_some() {
                return invalid(format!(
                    "question '{}' has a completion time but is not completed",
                    question.id
                ));
            }
        }
        if let Some(id) = first_duplicate_id(&self.questions) {
            return invalid(format!("duplicate question id '{id}'"));
        }

        Ok(())
    }
}

fn first_duplicate_id(questions: &[Question]) -> Option<&str> {
    let mut seen = HashSet::new();
    questions
        .iter()
        .map(|q| q.id.as_str())
        .find(|id| !seen.insert(*id))
}
