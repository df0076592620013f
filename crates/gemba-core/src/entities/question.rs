use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CategoryId;

/// Which departments a checklist question applies to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "scope", content = "departments", rename_all = "snake_case")]
pub enum Applicability {
    AllDepartments,
    SpecificDepartments(BTreeSet<String>),
}

impl Applicability {
    /// Restrict a question to the given departments.
    pub fn only<I, S>(departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::SpecificDepartments(departments.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn applies_to(&self, department: &str) -> bool {
        match self {
            Self::AllDepartments => true,
            Self::SpecificDepartments(set) => set.contains(department),
        }
    }
}

/// A single checklist question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub applicability: Applicability,
}

/// One 5S pillar and its ordered questions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Category {
    /// Questions of this category that apply to `department`, in order.
    pub fn applicable_questions<'a>(
        &'a self,
        department: &'a str,
    ) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions
            .iter()
            .filter(move |q| q.applicability.applies_to(department))
    }
}
