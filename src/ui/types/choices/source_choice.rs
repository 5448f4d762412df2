use crate::ui::cli::wizard::PathRule;
use crate::ui::types::choices::UIChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct FileSourceParameters {
    #[schemars(
        with = "String",
        title = "Sample File",
        description = "Text file with one integer per line",
        extend("format" = "path", "x-file" = true, "x-must-exist" = true)
    )]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct InlineSourceParameters {
    #[schemars(title = "Values", description = "Comma-separated integers, e.g. 1, 2, 3")]
    pub values: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SourceKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SourceChoice {
    #[strum_discriminants(strum(
        message = "Sample File",
        detailed_message = "Read samples from a text file, one integer per line."
    ))]
    File(FileSourceParameters),

    #[strum_discriminants(strum(
        message = "Inline Values",
        detailed_message = "Type the samples directly."
    ))]
    Inline(InlineSourceParameters),
}

impl UIChoice for SourceChoice {
    type Kind = SourceKind;

    fn schema() -> Schema {
        schema_for!(SourceChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a sample source:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            SourceKind::File => json!({ "path": "" }),
            SourceKind::Inline => json!({ "values": "" }),
        }
    }

    fn path_rule(kind: Self::Kind) -> Option<PathRule> {
        match kind {
            SourceKind::File => Some(PathRule {
                must_exist: true,
                extensions: &[],
            }),
            SourceKind::Inline => None,
        }
    }
}
