//! Snapshot renderer CLI.
//!
//! # Responsibility
//! - Load a JSON snapshot of person records and print the family forest
//!   as an indented text tree.
//! - Exercise the full core pipeline (intake -> status filter -> scope
//!   -> build -> walk) without any UI runtime.

use kintree_core::{
    build_forest, filter_by_status, normalize_records, select_family, FamilyForest, FamilyUnit,
    Gender, RawPersonRecord,
};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::process::ExitCode;

const DEFAULT_DEPTH: u32 = 2;

#[derive(Debug)]
enum CliError {
    Usage(String),
    Io(std::io::Error),
    Decode(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage(message) => write!(f, "{message}"),
            Self::Io(err) => write!(f, "cannot read snapshot: {err}"),
            Self::Decode(err) => write!(f, "snapshot is not a valid record array: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Usage(_) => None,
            Self::Io(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

struct Options {
    snapshot_path: String,
    family: Option<String>,
    depth: u32,
    show_inactive: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, CliError> {
    let mut snapshot_path = None;
    let mut family = None;
    let mut depth = DEFAULT_DEPTH;
    let mut show_inactive = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--family" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--family requires a person id".to_string()))?;
                family = Some(value);
            }
            "--depth" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--depth requires a number".to_string()))?;
                depth = value.parse().map_err(|_| {
                    CliError::Usage(format!("--depth must be a positive integer, got `{value}`"))
                })?;
                if depth == 0 {
                    return Err(CliError::Usage("--depth must be at least 1".to_string()));
                }
            }
            "--inactive" => show_inactive = true,
            other if other.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option `{other}`")));
            }
            _ if snapshot_path.is_none() => snapshot_path = Some(arg),
            other => {
                return Err(CliError::Usage(format!("unexpected argument `{other}`")));
            }
        }
    }

    let snapshot_path = snapshot_path.ok_or_else(|| {
        CliError::Usage(
            "usage: kintree_cli <snapshot.json> [--family <id>] [--depth <n>] [--inactive]"
                .to_string(),
        )
    })?;

    Ok(Options {
        snapshot_path,
        family,
        depth,
        show_inactive,
    })
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("kintree: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let options = parse_args(std::env::args().skip(1))?;
    let payload = std::fs::read_to_string(&options.snapshot_path)?;
    let raw: Vec<RawPersonRecord> = serde_json::from_str(&payload)?;

    let people = filter_by_status(normalize_records(raw), options.show_inactive);
    let people = match &options.family {
        Some(start_id) => select_family(&people, start_id, options.depth),
        None => people,
    };

    let forest = build_forest(&people);
    if forest.is_empty() {
        println!("no people in snapshot");
        return Ok(());
    }

    let mut visited = HashSet::new();
    for root in forest.roots() {
        print_unit(&forest, root, 0, &mut visited);
    }
    Ok(())
}

fn print_unit(
    forest: &FamilyForest,
    unit: &FamilyUnit,
    indent: usize,
    visited: &mut HashSet<String>,
) {
    if !visited.insert(unit.person.id.clone()) {
        return;
    }

    let pad = "  ".repeat(indent);
    let mut line = format!("{pad}{} {}", gender_symbol(unit), unit.person.display_name());
    if let Some(spouse) = forest.spouse_of(unit) {
        line.push_str(&format!(
            " = {} {}",
            gender_symbol(spouse),
            spouse.person.display_name()
        ));
        let tally = forest.gender_tally(unit);
        if tally.sons > 0 || tally.daughters > 0 {
            line.push_str(&format!(" ({}m|{}f)", tally.sons, tally.daughters));
        }
    }
    println!("{line}");

    if !unit.expanded {
        return;
    }
    for child in forest.children_of(unit) {
        print_unit(forest, child, indent + 1, visited);
    }
}

fn gender_symbol(unit: &FamilyUnit) -> &'static str {
    match unit.person.gender {
        Some(Gender::Male) => "M",
        Some(Gender::Female) => "F",
        _ => "o",
    }
}
