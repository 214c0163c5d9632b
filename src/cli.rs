use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use crate::session::Session;
use crate::url_parser::{UrlComponent, UrlPartType};

#[derive(Parser, Debug)]
#[command(name = "url-decomposer", version, about = "Break URLs into parts, toggle them, rebuild")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the components of a URL
    Parse {
        url: String,

        /// Emit the parse result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rebuild a URL after disabling or editing some of its components
    Rebuild {
        url: String,

        /// Component to leave out, e.g. `port`, `hash` or `search:utm_source`
        #[arg(long = "disable", value_name = "SELECTOR")]
        disable: Vec<Selector>,

        /// New value for a component, e.g. `hostname=example.org`
        #[arg(long = "set", value_name = "SELECTOR=VALUE")]
        set: Vec<Assignment>,
    },

    /// Serve the JSON API over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,

        /// Config file (TOML, JSON or YAML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Picks components by type, and for query parameters optionally by key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub part_type: UrlPartType,
    pub key: Option<String>,
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((ty, key)) => {
                let part_type = ty.parse::<UrlPartType>()?;
                if part_type != UrlPartType::Search {
                    return Err(format!("Only search selectors take a key: {}", s));
                }
                Ok(Selector {
                    part_type,
                    key: Some(key.to_string()),
                })
            }
            None => Ok(Selector {
                part_type: s.parse()?,
                key: None,
            }),
        }
    }
}

/// A selector paired with a replacement value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub selector: Selector,
    pub value: String,
}

impl FromStr for Assignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (selector, value) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected SELECTOR=VALUE, got {}", s))?;
        Ok(Assignment {
            selector: selector.parse()?,
            value: value.to_string(),
        })
    }
}

/// Applies edits first and then the disables, returning the selectors that
/// matched nothing
pub fn apply_edits(session: &mut Session, disable: &[Selector], set: &[Assignment]) -> Vec<String> {
    let mut unmatched = Vec::new();

    for assignment in set {
        let Selector { part_type, key } = &assignment.selector;
        if session.set_value_where(*part_type, key.as_deref(), &assignment.value) == 0 {
            unmatched.push(describe(&assignment.selector));
        }
    }

    for selector in disable {
        if session.set_enabled_where(selector.part_type, selector.key.as_deref(), false) == 0 {
            unmatched.push(describe(selector));
        }
    }

    unmatched
}

fn describe(selector: &Selector) -> String {
    match &selector.key {
        Some(key) => format!("{}:{}", selector.part_type, key),
        None => selector.part_type.to_string(),
    }
}

/// Renders components as a plain-text table
pub fn render_table(parts: &[UrlComponent]) -> String {
    let mut out = format!("{:<8} {:<10} {:<16} {}\n", "Include", "Type", "Key / Label", "Value");
    for part in parts {
        let name = match part.part_type {
            UrlPartType::Search => part.key.as_deref().unwrap_or_default(),
            _ => part.label.as_str(),
        };
        out.push_str(&format!(
            "{:<8} {:<10} {:<16} {}\n",
            if part.is_enabled { "[x]" } else { "[ ]" },
            part.part_type,
            name,
            part.value
        ));
    }
    out
}
