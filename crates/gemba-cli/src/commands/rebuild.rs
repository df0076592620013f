use std::path::Path;

use anyhow::Context;
use gemba_store::TrailReplayer;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RebuildArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RebuildDryRunResponse {
    dry_run: bool,
    trail_dir: String,
    trail_files: usize,
    operations_detected: usize,
}

/// Handle `gemba rebuild`.
pub fn handle(args: &RebuildArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let trail_dir = args.trail_dir.clone().unwrap_or_else(|| ctx.trail_dir());

    if args.dry_run {
        let (trail_files, operations_detected) = count_trail_files_and_ops(&trail_dir)?;
        return output(
            &RebuildDryRunResponse {
                dry_run: true,
                trail_dir: trail_dir.to_string_lossy().to_string(),
                trail_files,
                operations_detected,
            },
            flags.format,
        );
    }

    let response = TrailReplayer::rebuild(&mut ctx.service, &trail_dir)
        .context("rebuild: failed to replay trail files")?;
    output(&response, flags.format)
}

fn count_trail_files_and_ops(trail_dir: &Path) -> anyhow::Result<(usize, usize)> {
    if !trail_dir.is_dir() {
        return Ok((0, 0));
    }
    let mut files = 0usize;
    let mut ops = 0usize;
    for entry in std::fs::read_dir(trail_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|v| v.to_str()) != Some("jsonl") {
            continue;
        }
        files += 1;
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("rebuild: failed to read {}", path.display()))?;
        ops += content.lines().filter(|line| !line.trim().is_empty()).count();
    }
    Ok((files, ops))
}
