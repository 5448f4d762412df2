use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, TaskChoice, UIChoice, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

/// Constraints on a `path` parameter.
#[derive(Debug, Clone, Copy)]
pub struct PathRule {
    pub must_exist: bool,
    /// Accepted extensions without the dot; empty accepts any.
    pub extensions: &'static [&'static str],
}

fn kind_items<K>() -> (Vec<K>, Vec<String>)
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            (k, text)
        })
        .unzip()
}

/// Runs the whole wizard: task, its parameters, source and export target.
pub fn prompt_task<D: PromptDriver>(driver: &D) -> Result<TaskChoice> {
    prompt_choice::<TaskChoice, D>(driver)
}

pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let (kinds, labels) = kind_items::<C::Kind>();
    let idx = driver.ask_select(C::prompt_label(), C::prompt_help(), &labels)?;
    let choice_kind: C::Kind = *kinds.get(idx).context("selection out of range")?;

    let key: &'static str = choice_kind.into();
    let schema = C::schema();
    let specs = specs_for_kind(&schema, key)?;

    let defaults = C::default_params(choice_kind);

    let mut params = Map::new();
    for s in specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        let help = s.description.as_deref().unwrap_or("");

        let val = match s.kind {
            FieldKind::Boolean => {
                let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
                Value::Bool(driver.ask_bool(&s.title, help, def)?)
            }
            FieldKind::String => {
                let def = init
                    .and_then(|v| v.as_str().map(|s| s.to_string()))
                    .unwrap_or_default();

                let answered = match C::path_rule(choice_kind) {
                    Some(rule) if s.name == "path" => {
                        let pb = prompt_path_until_ok(driver, &s.title, help, &def, rule)?;
                        pb.to_string_lossy().into_owned()
                    }
                    _ if s.required => prompt_non_empty(driver, &s.title, help, &def)?,
                    _ => driver.ask_string(&s.title, help, &def)?,
                };

                Value::String(answered)
            }
            FieldKind::Integer => {
                let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
                Value::from(driver.ask_u64(
                    &s.title,
                    help,
                    def,
                    s.min.map(|x| x as u64),
                    s.max.map(|x| x as u64),
                )?)
            }
        };

        params.insert(s.name.clone(), val);
    }

    if let Some(extra) = C::subprompts(driver, choice_kind)? {
        params.extend(extra);
    }
    C::from_parts(choice_kind, Value::Object(params))
}

fn prompt_non_empty<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
) -> Result<String> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        if !answer.trim().is_empty() {
            return Ok(answer);
        }
        eprintln!("✗ {title} is required");
    }
}

fn validate_path_str(input: &str, rule: PathRule) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if rule.must_exist && !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if p.exists() && !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    if !rule.extensions.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if rule.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => return Err(format!("Expected a .{} file", rule.extensions.join(" / ."))),
        }
    }
    Ok(())
}

fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    rule: PathRule,
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_path_str(&answer, rule) {
            Ok(()) => return Ok(PathBuf::from(answer.trim())),
            Err(msg) => {
                eprintln!("✗ {}", msg);
            }
        }
    }
}
