use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::prompt_choice;
use crate::ui::types::choices::{ExportChoice, SourceChoice, UIChoice};
use crate::visualization::{DEFAULT_BINS, DEFAULT_N_SPACES};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_true() -> bool {
    true
}

fn default_n_spaces() -> u64 {
    DEFAULT_N_SPACES as u64
}

fn default_bins() -> u64 {
    DEFAULT_BINS as u64
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FitParameters {
    #[schemars(skip)]
    pub source: SourceChoice,

    #[serde(default)]
    #[schemars(skip)]
    pub export: Option<ExportChoice>,

    #[serde(default = "default_true")]
    #[schemars(
        title = "Sample Correction",
        description = "Divide by n - 1 (sample) instead of n (population)?"
    )]
    pub sample_correction: bool,

    #[serde(default = "default_n_spaces")]
    #[schemars(
        title = "Curve Points",
        description = "Number of points on the density curve",
        range(min = 1, max = 100_000)
    )]
    pub n_spaces: u64,

    #[serde(default = "default_bins")]
    #[schemars(
        title = "Histogram Bins",
        description = "Number of equal-width histogram bins",
        range(min = 1, max = 10_000)
    )]
    pub bins: u64,

    #[serde(default = "default_true")]
    #[schemars(
        title = "Normalize Histogram",
        description = "Scale bars so the histogram integrates to 1?"
    )]
    pub normalize_histogram: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Fit Gaussian",
        detailed_message = "Estimate mean and standard deviation, then build density and histogram data."
    ))]
    FitGaussian(FitParameters),
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            TaskKind::FitGaussian => json!({
                "sample_correction": true,
                "n_spaces": DEFAULT_N_SPACES,
                "bins": DEFAULT_BINS,
                "normalize_histogram": true,
            }),
        }
    }

    fn subprompts<D: PromptDriver>(
        driver: &D,
        kind: Self::Kind,
    ) -> anyhow::Result<Option<Map<String, Value>>> {
        match kind {
            TaskKind::FitGaussian => {
                let source = prompt_choice::<SourceChoice, _>(driver)?;
                let export = if driver.ask_bool(
                    "Export density curve?",
                    "Write the x/density points to a file",
                    false,
                )? {
                    Some(prompt_choice::<ExportChoice, _>(driver)?)
                } else {
                    None
                };

                let mut m = Map::new();
                m.insert("source".into(), serde_json::to_value(source)?);
                m.insert("export".into(), serde_json::to_value(export)?);
                Ok(Some(m))
            }
        }
    }

    fn from_parts(kind: Self::Kind, params: Value) -> anyhow::Result<Self> {
        match kind {
            TaskKind::FitGaussian => {
                let p: FitParameters = serde_json::from_value(params)?;
                Ok(TaskChoice::FitGaussian(p))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::InlineSourceParameters;

    #[test]
    fn missing_numeric_params_fall_back_to_defaults() {
        let params = json!({
            "source": { "type": "inline", "params": { "values": "1,2,3" } },
        });
        let TaskChoice::FitGaussian(p) = TaskChoice::from_parts(TaskKind::FitGaussian, params).unwrap();
        assert!(p.sample_correction);
        assert_eq!(p.n_spaces, 50);
        assert_eq!(p.bins, 10);
        assert!(p.normalize_histogram);
        assert!(p.export.is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let choice = TaskChoice::FitGaussian(FitParameters {
            source: SourceChoice::Inline(InlineSourceParameters {
                values: "4, 5".into(),
            }),
            export: None,
            sample_correction: false,
            n_spaces: 20,
            bins: 4,
            normalize_histogram: false,
        });
        let v = serde_json::to_value(&choice).unwrap();
        assert_eq!(v["type"], "fit-gaussian");
        assert_eq!(v["params"]["n_spaces"], 20);

        let back: TaskChoice = serde_json::from_value(v).unwrap();
        let TaskChoice::FitGaussian(p) = back;
        assert!(!p.sample_correction);
        assert_eq!(p.bins, 4);
    }
}
