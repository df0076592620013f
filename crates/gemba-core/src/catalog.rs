//! The 5S checklist catalog.
//!
//! A `Catalog` is a read-only snapshot of the five categories and their
//! questions. Scoring, corrective-action generation, and draft validation all
//! walk it through the helpers here so they agree on which questions apply to
//! a department.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Applicability, AuditDraft, Category, Question};
use crate::enums::CategoryId;
use crate::errors::CoreError;

/// Departments seeded into a fresh installation.
pub const DEFAULT_DEPARTMENTS: [&str; 6] = [
    "Production - Line A",
    "Production - Line B",
    "Maintenance",
    "Warehouse",
    "Human Resources",
    "Cafeteria",
];

/// Ordered categories with their questions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, checking that it holds exactly the five categories in
    /// checklist order and that question IDs are unique.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the structure is not a 5S checklist.
    pub fn new(categories: Vec<Category>) -> Result<Self, CoreError> {
        let ids: Vec<CategoryId> = categories.iter().map(|c| c.id).collect();
        if ids != CategoryId::ALL {
            return Err(CoreError::Validation(format!(
                "catalog must list the five 5S categories in order, got {ids:?}"
            )));
        }

        let mut seen = HashSet::new();
        for question in categories.iter().flat_map(|c| &c.questions) {
            if !seen.insert(question.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }
        }

        Ok(Self { categories })
    }

    /// Parse and validate a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` on malformed JSON or structure.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        #[derive(Deserialize)]
        struct Raw {
            categories: Vec<Category>,
        }
        let raw: Raw = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("invalid catalog JSON: {e}")))?;
        Self::new(raw.categories)
    }

    /// The standard 5S checklist.
    #[must_use]
    pub fn standard() -> Self {
        let all = |id: u32, text: &str| Question {
            id,
            text: text.to_string(),
            applicability: Applicability::AllDepartments,
        };
        let only = |id: u32, text: &str, departments: &[&str]| Question {
            id,
            text: text.to_string(),
            applicability: Applicability::only(departments.iter().copied()),
        };

        let categories = vec![
            Category {
                id: CategoryId::Seiri,
                title: "1. Seiri (Sort)".into(),
                description: "Separate the necessary from the unnecessary.".into(),
                questions: vec![
                    all(101, "Are there unnecessary materials or equipment in the area?"),
                    all(102, "Have obsolete or broken items been removed?"),
                    all(103, "Is the space being used efficiently?"),
                    only(
                        104,
                        "Are special tools segregated correctly?",
                        &["Maintenance"],
                    ),
                ],
            },
            Category {
                id: CategoryId::Seiton,
                title: "2. Seiton (Set in order)".into(),
                description: "A place for everything.".into(),
                questions: vec![
                    all(201, "Does every item have a defined, labelled location?"),
                    all(202, "Is it easy to find, take and return objects?"),
                    all(203, "Are aisles and walkways clear?"),
                ],
            },
            Category {
                id: CategoryId::Seiso,
                title: "3. Seiso (Shine)".into(),
                description: "Clean and inspect.".into(),
                questions: vec![
                    all(301, "Are floors, walls and equipment clean?"),
                    all(302, "Have the sources of dirt been identified?"),
                    only(
                        303,
                        "Is pest control up to date?",
                        &["Cafeteria", "Warehouse"],
                    ),
                ],
            },
            Category {
                id: CategoryId::Seiketsu,
                title: "4. Seiketsu (Standardize)".into(),
                description: "Maintain the standards.".into(),
                questions: vec![
                    all(401, "Are the 5S rules visible?"),
                    all(402, "Is visual signage standardized?"),
                ],
            },
            Category {
                id: CategoryId::Shitsuke,
                title: "5. Shitsuke (Sustain)".into(),
                description: "Commitment.".into(),
                questions: vec![
                    all(501, "Do employees follow the rules?"),
                    all(502, "Is there a spirit of continuous improvement?"),
                ],
            },
        ];

        Self { categories }
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Locate a question and the category that owns it.
    #[must_use]
    pub fn find_question(&self, question_id: u32) -> Option<(&Category, &Question)> {
        self.categories.iter().find_map(|category| {
            category
                .questions
                .iter()
                .find(|q| q.id == question_id)
                .map(|q| (category, q))
        })
    }

    #[must_use]
    pub fn question_text(&self, question_id: u32) -> Option<&str> {
        self.find_question(question_id).map(|(_, q)| q.text.as_str())
    }

    #[must_use]
    pub fn category_of(&self, question_id: u32) -> Option<CategoryId> {
        self.find_question(question_id).map(|(c, _)| c.id)
    }

    /// Applicable questions that the draft has not answered yet, in
    /// checklist order.
    #[must_use]
    pub fn unanswered_questions(&self, draft: &AuditDraft) -> Vec<u32> {
        self.categories
            .iter()
            .flat_map(|c| c.applicable_questions(&draft.department))
            .filter(|q| !draft.answers.contains_key(&q.id))
            .map(|q| q.id)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
