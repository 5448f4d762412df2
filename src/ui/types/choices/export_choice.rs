use crate::ui::cli::wizard::PathRule;
use crate::ui::types::choices::UIChoice;
use crate::visualization::CurveFormat;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct ExportParameters {
    #[schemars(
        with = "String",
        title = "Output Path",
        description = "Where to write the density curve",
        extend("format" = "path", "x-file" = true)
    )]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ExportKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ExportChoice {
    #[strum_discriminants(strum(message = "CSV", detailed_message = "Comma-separated x,density rows."))]
    Csv(ExportParameters),

    #[strum_discriminants(strum(message = "TSV", detailed_message = "Tab-separated x,density rows."))]
    Tsv(ExportParameters),

    #[strum_discriminants(strum(message = "JSON", detailed_message = "Array of {x, density} objects."))]
    Json(ExportParameters),
}

impl ExportChoice {
    pub fn format(&self) -> CurveFormat {
        match self {
            ExportChoice::Csv(_) => CurveFormat::Csv,
            ExportChoice::Tsv(_) => CurveFormat::Tsv,
            ExportChoice::Json(_) => CurveFormat::Json,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ExportChoice::Csv(p) | ExportChoice::Tsv(p) | ExportChoice::Json(p) => &p.path,
        }
    }
}

impl UIChoice for ExportChoice {
    type Kind = ExportKind;

    fn schema() -> Schema {
        schema_for!(ExportChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose an export format:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        let key: &'static str = kind.into();
        json!({ "path": format!("density.{key}") })
    }

    fn path_rule(kind: Self::Kind) -> Option<PathRule> {
        let extensions: &'static [&'static str] = match kind {
            ExportKind::Csv => &["csv"],
            ExportKind::Tsv => &["tsv"],
            ExportKind::Json => &["json"],
        };
        Some(PathRule {
            must_exist: false,
            extensions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_and_path_follow_variant() {
        let c = ExportChoice::Tsv(ExportParameters {
            path: "out.tsv".into(),
        });
        assert_eq!(c.format(), CurveFormat::Tsv);
        assert_eq!(c.path(), Path::new("out.tsv"));
    }

    #[test]
    fn default_path_uses_kind_extension() {
        assert_eq!(
            ExportChoice::default_params(ExportKind::Json),
            json!({ "path": "density.json" })
        );
    }
}
