use anyhow::Result;
use log::{debug, info};

use crate::config::EnvMap;
use crate::ui::Prompter;

pub fn parameter_placeholder(parameter: &str) -> String {
    format!("Provide the parameter '{}'", parameter)
}

/// Ask for a value for every declared parameter, one prompt at a time.
///
/// Returns `None` when nothing is declared. A dismissed prompt yields an empty
/// string, so every declared name ends up in the result.
pub fn collect_parameters<U: Prompter>(
    ui: &U,
    parameter_names: &[String],
) -> Result<Option<EnvMap>> {
    if parameter_names.is_empty() {
        debug!("No parameters declared, skipping prompts");
        return Ok(None);
    }

    info!("Collecting {} parameter(s)", parameter_names.len());

    let mut values = EnvMap::new();
    for parameter in parameter_names {
        let value = ui.show_text_prompt(&parameter_placeholder(parameter))?;
        if value.is_none() {
            debug!("No value given for '{}', using an empty string", parameter);
        }
        values.insert(parameter.clone(), value.unwrap_or_default());
    }

    Ok(Some(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUi;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_no_parameters_no_prompt() {
        let ui = MockUi::new();
        assert_eq!(collect_parameters(&ui, &[]).unwrap(), None);
        assert_eq!(ui.text_prompt_call_count(), 0);
    }

    #[test]
    fn test_cancelled_prompt_becomes_empty_string() {
        let ui = MockUi::new();
        ui.expect_text(Some("v1"));
        ui.expect_text(None);

        let values = collect_parameters(&ui, &names(&["p1", "p2"]))
            .unwrap()
            .unwrap();

        assert_eq!(values.len(), 2);
        assert_eq!(values["p1"], "v1");
        assert_eq!(values["p2"], "");
    }

    #[test]
    fn test_prompts_follow_declaration_order() {
        let ui = MockUi::new();
        ui.expect_text(Some("main"));
        ui.expect_text(Some("8080"));

        let values = collect_parameters(&ui, &names(&["BRANCH", "PORT"]))
            .unwrap()
            .unwrap();

        assert_eq!(
            ui.get_text_prompt_calls(),
            vec![
                "Provide the parameter 'BRANCH'",
                "Provide the parameter 'PORT'"
            ]
        );
        assert_eq!(values["BRANCH"], "main");
        assert_eq!(values["PORT"], "8080");
    }

    #[test]
    fn test_empty_answer_is_kept() {
        let ui = MockUi::new();
        ui.expect_text(Some(""));

        let values = collect_parameters(&ui, &names(&["OPTIONAL"]))
            .unwrap()
            .unwrap();
        assert_eq!(values["OPTIONAL"], "");
    }
}
