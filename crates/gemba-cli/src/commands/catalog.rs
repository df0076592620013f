use gemba_core::catalog::DEFAULT_DEPARTMENTS;
use gemba_core::entities::Applicability;
use gemba_core::enums::CategoryId;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CatalogArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CatalogRow<'a> {
    id: u32,
    category: CategoryId,
    text: &'a str,
    evidence_required: bool,
    scope: String,
}

/// Handle `gemba catalog`.
pub fn handle(args: &CatalogArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.departments {
        return output(&DEFAULT_DEPARTMENTS, flags.format);
    }

    let department = ctx.department(args.department.as_deref());
    let rows = ctx
        .service
        .catalog()
        .categories()
        .iter()
        .flat_map(|category| {
            category
                .questions
                .iter()
                .filter(move |q| department.is_none_or(|d| q.applicability.applies_to(d)))
                .map(move |q| CatalogRow {
                    id: q.id,
                    category: category.id,
                    text: &q.text,
                    evidence_required: category.id.requires_evidence(),
                    scope: scope_label(&q.applicability),
                })
        })
        .collect::<Vec<_>>();

    output(&rows, flags.format)
}

fn scope_label(applicability: &Applicability) -> String {
    match applicability {
        Applicability::AllDepartments => String::from("all"),
        Applicability::SpecificDepartments(departments) => departments
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    }
}
