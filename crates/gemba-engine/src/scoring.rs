//! Score aggregation.
//!
//! A category score is the mean of the scored answers to the questions that
//! apply to the audited department. The overall score is the mean of the
//! category scores that exist. Missing data yields `None`, never zero.

use std::collections::BTreeMap;

use gemba_core::catalog::Catalog;
use gemba_core::entities::{Answer, Category};
use gemba_core::responses::ScoreBreakdown;

/// Score one audit's answers against the catalog.
#[must_use]
pub fn compute_score(
    department: &str,
    answers: &BTreeMap<u32, Answer>,
    catalog: &Catalog,
) -> ScoreBreakdown {
    let per_category: BTreeMap<_, _> = catalog
        .categories()
        .iter()
        .map(|category| (category.id, category_score(category, department, answers)))
        .collect();

    let overall_score = mean(per_category.values().filter_map(|score| *score));

    ScoreBreakdown {
        overall_score,
        per_category,
    }
}

fn category_score(
    category: &Category,
    department: &str,
    answers: &BTreeMap<u32, Answer>,
) -> Option<f64> {
    mean(
        category
            .applicable_questions(department)
            .filter_map(|q| answers.get(&q.id))
            .filter(|a| a.is_scored())
            .filter_map(|a| a.score)
            .map(f64::from),
    )
}

/// Arithmetic mean, `None` for an empty input.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
