use std::collections::HashSet;
use std::fmt;

use crate::{
    config::model::{INTRO_NAV_ID, MANUAL_NAV_ID, ProductConfig},
    module::kind::ModuleKind,
    nav::derive::download_action,
};

/// One step of a JSON-path-like location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathElem {
    /// Object field.
    Field(String),
    /// Array index.
    Index(usize),
}

/// A single authoring problem with its location.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    /// Location inside the configuration document.
    pub path: Vec<PathElem>,
    /// Human-readable description.
    pub message: String,
}

impl ConfigIssue {
    fn at(path: Vec<PathElem>, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

fn field(name: &str) -> PathElem {
    PathElem::Field(name.to_string())
}

fn nav_path(idx: usize, name: &str) -> Vec<PathElem> {
    vec![field("navigation"), PathElem::Index(idx), field(name)]
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[PathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match p {
            PathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            PathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

/// Every issue found in one configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssues {
    /// Issues in discovery order.
    pub issues: Vec<ConfigIssue>,
}

impl fmt::Display for ConfigIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigIssues {}

/// Check a configuration for authoring mistakes the renderer would silently degrade on.
pub fn validate_config(cfg: &ProductConfig) -> Result<(), ConfigIssues> {
    let mut issues = Vec::new();

    validate_product(cfg, &mut issues);
    validate_modules(cfg, &mut issues);
    validate_navigation(cfg, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ConfigIssues { issues })
    }
}

fn validate_product(cfg: &ProductConfig, issues: &mut Vec<ConfigIssue>) {
    if cfg.product.brand.trim().is_empty() {
        issues.push(ConfigIssue::at(
            vec![field("product"), field("brand")],
            "brand must be non-empty",
        ));
    }
    if cfg.product.name.trim().is_empty() {
        issues.push(ConfigIssue::at(
            vec![field("product"), field("name")],
            "name must be non-empty",
        ));
    }
}

fn validate_modules(cfg: &ProductConfig, issues: &mut Vec<ConfigIssue>) {
    for key in cfg.unknown_module_keys() {
        issues.push(ConfigIssue::at(
            vec![field("modules"), field(key)],
            "unknown module kind",
        ));
    }
    for kind in ModuleKind::ALL {
        if let Some(Err(e)) = cfg.parse_module(kind) {
            issues.push(ConfigIssue::at(
                vec![field("modules"), field(kind.key())],
                format!("malformed payload: {e}"),
            ));
        }
    }
}

fn validate_navigation(cfg: &ProductConfig, issues: &mut Vec<ConfigIssue>) {
    let mut seen = HashSet::<&str>::new();
    // (nav index, kind) of enabled scroll targets, for the order check.
    let mut scroll_targets = Vec::<(usize, ModuleKind)>::new();

    for (idx, item) in cfg.navigation.iter().enumerate() {
        if !seen.insert(item.id.as_str()) {
            issues.push(ConfigIssue::at(
                nav_path(idx, "id"),
                format!("duplicate navigation id '{}'", item.id),
            ));
        }

        if item.id == INTRO_NAV_ID {
            continue;
        }

        if item.is_download || item.id == MANUAL_NAV_ID {
            if item.enabled && download_action(cfg, item).is_none() {
                issues.push(ConfigIssue::at(
                    nav_path(idx, "id"),
                    format!("download entry '{}' has no resolvable download action", item.id),
                ));
            }
            continue;
        }

        let Some(kind) = ModuleKind::from_key(&item.id) else {
            issues.push(ConfigIssue::at(
                nav_path(idx, "id"),
                format!("navigation id '{}' names no module", item.id),
            ));
            continue;
        };

        if !item.enabled {
            continue;
        }
        if !cfg.module_is_renderable(kind) {
            issues.push(ConfigIssue::at(
                nav_path(idx, "id"),
                format!(
                    "navigation entry '{}' targets a module that renders no section",
                    item.id
                ),
            ));
            continue;
        }
        scroll_targets.push((idx, kind));
    }

    for pair in scroll_targets.windows(2) {
        let (_, prev) = pair[0];
        let (idx, kind) = pair[1];
        if kind.page_index() < prev.page_index() {
            issues.push(ConfigIssue::at(
                nav_path(idx, "id"),
                format!("'{kind}' is listed after '{prev}' but appears above it on the page"),
            ));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/validate.rs"]
mod tests;
