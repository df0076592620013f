use std::collections::BTreeMap;

use gemba_core::enums::CategoryId;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse repeated `category=score` pairs into goal targets.
pub fn parse_targets(raw: &[String]) -> anyhow::Result<BTreeMap<CategoryId, f64>> {
    let mut targets = BTreeMap::new();
    for pair in raw {
        let (category, score) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("invalid target '{pair}': expected category=score"))?;
        let category: CategoryId = parse_enum(category, "category")?;
        let score: f64 = score
            .trim()
            .parse()
            .map_err(|error| anyhow::anyhow!("invalid target score in '{pair}': {error}"))?;
        if targets.insert(category, score).is_some() {
            anyhow::bail!("duplicate target for {category}");
        }
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use gemba_core::enums::{ActionStatus, CategoryId, Decision};
    use pretty_assertions::assert_eq;

    use super::{parse_enum, parse_targets};

    #[test]
    fn parses_snake_case_enum() {
        let status: ActionStatus = parse_enum("executed", "status").expect("status should parse");
        assert_eq!(status, ActionStatus::Executed);
    }

    #[test]
    fn parses_uppercase_value() {
        let decision: Decision = parse_enum("REJECTED", "decision").expect("decision should parse");
        assert_eq!(decision, Decision::Rejected);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Decision>("maybe", "decision").expect_err("should fail");
        assert!(err.to_string().contains("invalid decision 'maybe'"));
    }

    #[test]
    fn parses_targets() {
        let targets = parse_targets(&["seiri=8".to_string(), "Seiso = 9.5".to_string()])
            .expect("targets should parse");
        assert_eq!(targets.get(&CategoryId::Seiri), Some(&8.0));
        assert_eq!(targets.get(&CategoryId::Seiso), Some(&9.5));
    }

    #[test]
    fn rejects_malformed_targets() {
        assert!(parse_targets(&["seiri".to_string()]).is_err());
        assert!(parse_targets(&["tidy=8".to_string()]).is_err());
        assert!(parse_targets(&["seiri=high".to_string()]).is_err());
        assert!(parse_targets(&["seiri=8".to_string(), "seiri=9".to_string()]).is_err());
    }
}
