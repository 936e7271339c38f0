/// Short first-name forms seen on compact leaderboards.
const FIRST_NAME_ABBREVIATIONS: &[(&str, &str)] = &[
    ("cam", "cameron"),
    ("j", "justin"),
    ("r", "rory"),
    ("t", "tommy"),
    ("l", "ludvig"),
    ("v", "viktor"),
    ("p", "patrick"),
    ("c", "collin"),
    ("s", "scottie"),
    ("h", "hideki"),
    ("k", "keegan"),
    ("m", "maverick"),
    ("b", "ben"),
    ("a", "akshay"),
];

/// Lowercase, keep letters, digits, whitespace, `.`, `-` and `_`.
fn clean(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '.' | '-' | '_'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Does a leaderboard line name this golfer?
///
/// Accepts the exact name, an abbreviated first name with the full last name
/// (`R. McIlroy`, `Cam. Young`), the last name alone, or a first-name
/// abbreviation from a fixed table.
#[must_use]
pub fn matches_golfer_name(line: &str, golfer: &str) -> bool {
    let clean_line = clean(line);
    let clean_golfer = clean(golfer);

    if clean_line.is_empty() {
        return false;
    }
    if clean_line == clean_golfer {
        return true;
    }

    let line_parts: Vec<&str> = clean_line.split_whitespace().collect();
    let golfer_parts: Vec<&str> = clean_golfer.split_whitespace().collect();
    let [golfer_first, golfer_rest @ ..] = golfer_parts.as_slice() else {
        return false;
    };
    if golfer_rest.is_empty() {
        return false;
    }
    let golfer_last = golfer_rest.join(" ");

    for &part in &line_parts {
        if !part.contains('.') {
            continue;
        }
        let abbrev = part.replacen('.', "", 1);
        let rest_of_line = line_parts
            .iter()
            .filter(|&&p| p != part)
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        if golfer_first.starts_with(&abbrev) && rest_of_line == golfer_last {
            return true;
        }
    }

    if line_parts
        .iter()
        .any(|&p| p == golfer_last || p.replacen('.', "", 1) == golfer_last)
    {
        return true;
    }

    FIRST_NAME_ABBREVIATIONS.iter().any(|(abbrev, full)| {
        (clean_line.contains(&format!("{abbrev}.")) || clean_line.contains(&format!("{abbrev} ")))
            && golfer_first.starts_with(full)
            && clean_line.contains(&golfer_last)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviated_first_names() {
        assert!(matches_golfer_name("R. McIlroy", "Rory McIlroy"));
        assert!(matches_golfer_name("Cam. Young", "Cameron Young"));
        assert!(matches_golfer_name("L. Åberg", "Ludvig Åberg"));
        assert!(matches_golfer_name("J. Spaun", "J.J. Spaun"));
    }

    #[test]
    fn last_name_alone_and_misses() {
        assert!(matches_golfer_name("Fleetwood", "Tommy Fleetwood"));
        assert!(!matches_golfer_name("R. McIlroy", "Justin Rose"));
        assert!(!matches_golfer_name("+850", "Rory McIlroy"));
        assert!(!matches_golfer_name("", "Rory McIlroy"));
    }
}
