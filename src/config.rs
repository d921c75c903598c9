use crate::batch::FailurePolicy;
use crate::engines::EngineKind;
use crate::Args;
use std::path::PathBuf;

/// Region used when neither AWS_REGION nor AWS_DEFAULT_REGION is set
pub const DEFAULT_REGION: &str = "us-east-1";

/// Scanner configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub csv_output: Option<PathBuf>,
    pub engine: EngineKind,
    pub failure_policy: FailurePolicy,
    pub language: String,
    pub tessdata_path: Option<String>,
    pub region: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let failure_policy = if args.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::Continue
        };

        Self {
            input: args.path,
            csv_output: args.csv,
            engine: args.engine,
            failure_policy,
            language: args.language,
            tessdata_path: args.tessdata_path,
            region: resolve_region(
                std::env::var("AWS_REGION").ok(),
                std::env::var("AWS_DEFAULT_REGION").ok(),
            ),
        }
    }
}

/// AWS_REGION wins over AWS_DEFAULT_REGION; empty values count as unset.
pub fn resolve_region(aws_region: Option<String>, aws_default_region: Option<String>) -> String {
    [aws_region, aws_default_region]
        .into_iter()
        .flatten()
        .map(|r| r.trim().to_string())
        .find(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_REGION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_prefers_aws_region() {
        let region = resolve_region(Some("eu-west-1".into()), Some("ap-south-1".into()));
        assert_eq!(region, "eu-west-1");
    }

    #[test]
    fn test_region_falls_back_to_default_region_var() {
        let region = resolve_region(None, Some("ap-south-1".into()));
        assert_eq!(region, "ap-south-1");
    }

    #[test]
    fn test_region_ignores_empty_values() {
        let region = resolve_region(Some("  ".into()), Some("".into()));
        assert_eq!(region, DEFAULT_REGION);
    }

    #[test]
    fn test_region_hardcoded_default() {
        assert_eq!(resolve_region(None, None), "us-east-1");
    }
}
