use reqwest::Url;
use std::collections::HashSet;
use std::{fs, path::PathBuf};

use crate::args::types::Roster;
use crate::model::Team;

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) URL
pub fn check_http_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("'{value}' is not a valid url: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        other => Err(format!("'{value}' uses unsupported scheme '{other}'.")),
    }
}

/// # Errors
///
/// Will return `Err` if the file is not readable or does not hold a valid roster
pub fn check_readable_file_and_roster(file: &str) -> Result<Roster, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The roster file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("Cannot read roster '{file}': {e}"))?;
    parse_roster(&contents).map(Roster)
}

/// Parse a roster and check it: at least one team, names unique, golfers non-empty.
///
/// # Errors
///
/// Will return `Err` if the json is malformed or breaks one of those rules
pub fn parse_roster(contents: &str) -> Result<Vec<Team>, String> {
    let teams: Vec<Team> = serde_json::from_str::<Vec<Team>>(contents)
        .map_err(|e| format!("The roster json is not in the correct format: {e}"))?
        .iter()
        .map(Team::trimmed)
        .collect();
    if teams.is_empty() {
        return Err("The roster must contain at least one team.".to_string());
    }
    let mut seen = HashSet::new();
    for team in &teams {
        if team.name.is_empty() {
            return Err("Every team needs a name.".to_string());
        }
        if !seen.insert(team.name.as_str()) {
            return Err(format!("Duplicate team name '{}'.", team.name));
        }
        if team.golfer1.is_empty() || team.golfer2.is_empty() {
            return Err(format!("Team '{}' needs two golfers.", team.name));
        }
    }
    Ok(teams)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_rules() {
        let ok = r#"[{"name":"A","golfer1":"Rory McIlroy","golfer2":"Sam Burns"}]"#;
        assert_eq!(parse_roster(ok).unwrap().len(), 1);

        let dup = r#"[{"name":"A","golfer1":"x y","golfer2":"z w"},{"name":"A","golfer1":"a b","golfer2":"c d"}]"#;
        assert!(parse_roster(dup).unwrap_err().contains("Duplicate"));

        assert!(parse_roster("[]").is_err());
        assert!(parse_roster(r#"[{"name":"A","golfer1":"","golfer2":"z"}]"#).is_err());
        assert!(parse_roster("{").is_err());
    }

    #[test]
    fn roster_names_are_trimmed() {
        let padded = r#"[{"name":" A ","golfer1":" Rory McIlroy","golfer2":"Sam Burns  "}]"#;
        let teams = parse_roster(padded).unwrap();
        assert_eq!(teams[0], Team::new("A", "Rory McIlroy", "Sam Burns"));

        let dup = r#"[{"name":"A","golfer1":"x y","golfer2":"z w"},{"name":" A","golfer1":"a b","golfer2":"c d"}]"#;
        assert!(parse_roster(dup).unwrap_err().contains("Duplicate"));
    }

    #[test]
    fn urls() {
        assert!(check_http_url("https://www.pgatour.com/").is_ok());
        assert!(check_http_url("ftp://example.com").is_err());
        assert!(check_http_url("nope").is_err());
    }
}
