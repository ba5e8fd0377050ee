use crate::ID_SEPARATOR;
use crate::domain::requirement::RequirementStatement;

/// Parse raw multi-line input into requirement statements.
///
/// Each non-empty line is split on the first [`ID_SEPARATOR`] into an
/// identifier and a description, both trimmed. Lines without the separator,
/// or where either side trims to empty, are dropped rather than failing
/// the whole batch.
pub fn parse_requirements(input: &str) -> Vec<RequirementStatement> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let (id, description) = line.split_once(ID_SEPARATOR)?;
            let id = id.trim();
            let description = description.trim();
            if id.is_empty() || description.is_empty() {
                return None;
            }
            Some(RequirementStatement {
                id: id.to_string(),
                description: description.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_requirements;

    #[test]
    fn splits_on_first_separator_and_trims() {
        let parsed = parse_requirements("  REQ1 - Must keep a time-stamped audit trail  ");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, "REQ1");
        assert_eq!(parsed[0].description, "Must keep a time-stamped audit trail");
    }

    #[test]
    fn keeps_input_order() {
        let parsed = parse_requirements("REQ2 - second\nREQ1 - first");
        let ids: Vec<&str> = parsed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["REQ2", "REQ1"]);
    }

    #[test]
    fn drops_lines_without_separator() {
        let parsed = parse_requirements("REQ1 - valid\njust some text\nREQ2 - also valid");
        let ids: Vec<&str> = parsed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["REQ1", "REQ2"]);
    }

    #[test]
    fn drops_lines_with_empty_id_or_description() {
        let parsed = parse_requirements(" - orphan description\nREQ1 -   \nREQ2 - ok");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, "REQ2");
    }

    #[test]
    fn skips_blank_lines() {
        let parsed = parse_requirements("\n\n  \nREQ1 - ok\n\n");
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn empty_input_parses_to_nothing() {
        assert!(parse_requirements("").is_empty());
        assert!(parse_requirements("   \n\t\n").is_empty());
    }
}
