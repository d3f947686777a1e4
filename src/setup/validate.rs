use super::SetupContext;
use crate::core::outcome::Outcome;

/// Run `<compositor> validate`. Its output is passed through untouched on
/// failure.
pub fn validate(ctx: &SetupContext) -> Outcome {
    let out = ctx
        .runner
        .run(&ctx.config.compositor, &["validate".to_string()]);

    if out.success {
        Outcome::success(vec![format!(
            "{} configuration is valid.",
            ctx.config.display_name()
        )])
    } else {
        Outcome::fail(format!("Validation failed: {}", out.output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::CommandOutput;
    use crate::test_support::{ScriptedRunner, test_context};
    use std::sync::Arc;

    #[test]
    fn test_valid_config() {
        let runner = Arc::new(ScriptedRunner::new().on("niri validate", CommandOutput::ok("")));
        let outcome = validate(&test_context(&std::env::temp_dir(), runner.clone()));
        assert!(outcome.is_ok());
        assert_eq!(outcome.lines, vec!["Niri configuration is valid."]);
        assert_eq!(runner.calls(), vec!["niri validate"]);
    }

    #[test]
    fn test_invalid_config_passes_output_through() {
        let detail = "Error: error loading config\n  × unexpected token at line 3\n";
        let runner = Arc::new(
            ScriptedRunner::new().on("niri validate", CommandOutput::failed(detail)),
        );
        let outcome = validate(&test_context(&std::env::temp_dir(), runner));
        assert_eq!(
            outcome.error.as_deref(),
            Some(format!("Validation failed: {detail}").as_str())
        );
    }
}
