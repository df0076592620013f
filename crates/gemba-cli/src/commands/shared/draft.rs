use std::io::Read;
use std::path::Path;

use anyhow::Context;
use gemba_core::entities::AuditDraft;

/// Read a draft audit from a JSON file, or from stdin when the path is `-`.
pub fn read_draft(path: &Path) -> anyhow::Result<AuditDraft> {
    let json = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read draft from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read draft {}", path.display()))?
    };
    parse_draft(&json)
}

pub fn parse_draft(json: &str) -> anyhow::Result<AuditDraft> {
    serde_json::from_str(json).context("draft is not a valid audit JSON document")
}
