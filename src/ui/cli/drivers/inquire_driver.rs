use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, CustomType, Select, Text, validator::Validation};

pub struct InquireDriver;

/// `None` when `x` is inside the optional bounds, else the message to show.
fn out_of_range(x: u64, min: Option<u64>, max: Option<u64>) -> Option<String> {
    match (min, max) {
        (Some(lo), Some(hi)) if x < lo || x > hi => Some(format!("Must be between {lo} and {hi}")),
        (Some(lo), None) if x < lo => Some(format!("Must be ≥ {lo}")),
        (None, Some(hi)) if x > hi => Some(format!("Must be ≤ {hi}")),
        _ => None,
    }
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        Ok(CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &u64| {
                Ok(match out_of_range(*x, min, max) {
                    Some(msg) => Validation::Invalid(msg.into()),
                    None => Validation::Valid,
                })
            })
            .prompt()?)
    }

    fn ask_select(&self, title: &str, help: Option<&str>, options: &[String]) -> Result<usize> {
        let mut select = Select::new(title, options.to_vec());
        if let Some(help) = help {
            select = select.with_help_message(help);
        }
        Ok(select.raw_prompt()?.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_messages() {
        assert_eq!(out_of_range(5, Some(1), Some(10)), None);
        assert_eq!(
            out_of_range(0, Some(1), Some(10)).as_deref(),
            Some("Must be between 1 and 10")
        );
        assert_eq!(out_of_range(0, Some(1), None).as_deref(), Some("Must be ≥ 1"));
        assert_eq!(out_of_range(3, None, Some(2)).as_deref(), Some("Must be ≤ 2"));
        assert_eq!(out_of_range(3, None, None), None);
    }
}
