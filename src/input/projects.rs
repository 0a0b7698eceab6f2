//! Project list import from CSV and JSON

use crate::error::{MatcherError, Result};
use crate::matching::Project;
use log::warn;
use serde::Deserialize;

/// Title used for CSV rows whose first field is blank
pub const UNTITLED_ROW: &str = "Untitled";

/// Parse headerless `title,skills,description` rows, one per line.
///
/// Skills inside the second field may be separated by spaces or semicolons.
/// Any fields past the second are re-joined with commas into the description.
/// Quoted fields may contain commas but not newlines: each line is read on its
/// own, so an unclosed quote only spoils its own row. Rows that yield no
/// skills are skipped.
pub fn parse_projects_csv(content: &str, source: &str) -> Result<Vec<Project>> {
    let mut projects = Vec::new();

    let rows = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    for (index, (line_index, line)) in rows.enumerate() {
        let line_no = line_index + 1;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(line.as_bytes());

        let record = match reader.records().next() {
            Some(Ok(record)) => record,
            Some(Err(e)) => {
                warn!("Skipping CSV line {}: {}", line_no, e);
                continue;
            }
            None => continue,
        };

        let title = match record.get(0).unwrap_or("") {
            "" => UNTITLED_ROW,
            t => t,
        };
        let skills = record.get(1).unwrap_or("");
        let description = record.iter().skip(2).collect::<Vec<_>>().join(",");

        match Project::from_raw(format!("{}-{}", source, index + 1), title, skills, &description) {
            Ok(project) => projects.push(project),
            Err(_) => warn!("Skipping CSV line {} ('{}'): no skills", line_no, title),
        }
    }

    Ok(projects)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SkillsField {
    List(Vec<String>),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct ProjectRecord {
    id: Option<String>,
    #[serde(default)]
    title: String,
    skills: SkillsField,
    #[serde(default)]
    description: String,
}

/// Parse a JSON array of `{ id?, title?, skills, description? }` objects.
///
/// `skills` may be a list or a single delimited string; either way it is
/// normalized through the tokenizer. Unlike CSV rows, a JSON project without
/// skills is an error.
pub fn parse_projects_json(content: &str, source: &str) -> Result<Vec<Project>> {
    let records: Vec<ProjectRecord> = serde_json::from_str(content)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let id = record.id.unwrap_or_else(|| format!("{}-{}", source, index + 1));
            let skills_text = match record.skills {
                SkillsField::List(items) => items.join(","),
                SkillsField::Text(text) => text,
            };

            Project::from_raw(id, &record.title, &skills_text, &record.description).map_err(|e| {
                MatcherError::InvalidInput(format!("Project #{} in {}: {}", index + 1, source, e))
            })
        })
        .collect()
}
