use ndarray::Array2;

use crate::domain::requirement::{MatchGroup, RequirementStatement};
use crate::processing::embedding::TextEncoder;
use crate::processing::parser::parse_requirements;
use crate::processing::similarity::{best_match_indices, cosine_similarity_matrix};
use crate::processing::{MatchError, MatchResult};

/// A catalog's entries together with their precomputed embedding matrix.
///
/// Built once at startup per catalog; requests score against the cached
/// matrix instead of re-encoding the catalog on every call.
pub struct CatalogIndex {
    entries: Vec<String>,
    embeddings: Array2<f32>,
}

impl CatalogIndex {
    pub fn build(entries: &[&str], encoder: &dyn TextEncoder) -> MatchResult<Self> {
        let texts: Vec<String> = entries.iter().map(|entry| entry.to_string()).collect();
        let vectors = encoder.encode(&texts)?;
        let embeddings = to_matrix(vectors)?;
        Ok(Self {
            entries: texts,
            embeddings,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Run the full matching pipeline for one request.
///
/// Parse the input, embed the requirement descriptions, score them against
/// the catalog and group the identifiers by best-matching entry.
pub fn match_requirements(
    input: &str,
    encoder: &dyn TextEncoder,
    catalog: &CatalogIndex,
) -> MatchResult<Vec<MatchGroup>> {
    let requirements = parse_requirements(input);
    if requirements.is_empty() {
        return Err(MatchError::EmptyInput);
    }

    let descriptions: Vec<String> = requirements
        .iter()
        .map(|requirement| requirement.description.clone())
        .collect();
    let vectors = encoder.encode(&descriptions)?;
    let requirement_matrix = to_matrix(vectors)?;

    let similarities =
        cosine_similarity_matrix(requirement_matrix.view(), catalog.embeddings.view())?;
    let selected = best_match_indices(&similarities);

    let groups = group_by_entry(&requirements, &selected, catalog);
    log::info!(
        "Matched {} requirements into {} groups against {} catalog entries",
        requirements.len(),
        groups.len(),
        catalog.len()
    );
    Ok(groups)
}

/// Group requirement identifiers by selected catalog entry.
///
/// Requirements are visited in input order and groups are emitted in the
/// order their entry was first matched, not in catalog order.
fn group_by_entry(
    requirements: &[RequirementStatement],
    selected: &[usize],
    catalog: &CatalogIndex,
) -> Vec<MatchGroup> {
    let mut groups: Vec<(usize, MatchGroup)> = Vec::new();
    for (requirement, &entry_index) in requirements.iter().zip(selected) {
        match groups.iter_mut().find(|(index, _)| *index == entry_index) {
            Some((_, group)) => group.requirement_ids.push(requirement.id.clone()),
            None => groups.push((
                entry_index,
                MatchGroup {
                    catalog_text: catalog.entries[entry_index].clone(),
                    requirement_ids: vec![requirement.id.clone()],
                },
            )),
        }
    }
    groups.into_iter().map(|(_, group)| group).collect()
}

/// Stack per-text vectors into a dense row matrix.
fn to_matrix(vectors: Vec<Vec<f32>>) -> MatchResult<Array2<f32>> {
    let rows = vectors.len();
    let width = vectors.first().map(Vec::len).unwrap_or(0);
    if let Some(ragged) = vectors.iter().find(|vector| vector.len() != width) {
        return Err(MatchError::DimensionMismatch {
            left: width,
            right: ragged.len(),
        });
    }
    let flat: Vec<f32> = vectors.into_iter().flatten().collect();
    Array2::from_shape_vec((rows, width), flat)
        .map_err(|error| MatchError::Embedding(format!("bad embedding shape: {error}")))
}

#[cfg(test)]
mod tests {
    use super::{CatalogIndex, match_requirements};
    use crate::processing::MatchError;
    use crate::processing::embedding::stub::MapEncoder;

    const AUDIT: &str = "Systems must keep a secure audit trail of record changes";
    const ACCESS: &str = "Only authorized users may access the system";
    const TRAINING: &str = "Staff must be trained for their assigned tasks";

    fn encoder() -> MapEncoder {
        MapEncoder::new(
            3,
            &[
                (AUDIT, &[1.0, 0.0, 0.0]),
                (ACCESS, &[0.0, 1.0, 0.0]),
                (TRAINING, &[0.0, 0.0, 1.0]),
                ("Keep an audit log of every change", &[0.9, 0.1, 0.0]),
                ("Restrict access to approved users", &[0.1, 0.9, 0.0]),
                ("Restrict access to signed-off users", &[0.2, 0.8, 0.0]),
            ],
        )
    }

    fn catalog(encoder: &MapEncoder) -> CatalogIndex {
        CatalogIndex::build(&[AUDIT, ACCESS, TRAINING], encoder).expect("catalog builds")
    }

    #[test]
    fn identical_descriptions_match_their_entries() {
        let encoder = encoder();
        let catalog = catalog(&encoder);
        let input = format!("REQ1 - {AUDIT}\nREQ2 - {ACCESS}");

        let groups = match_requirements(&input, &encoder, &catalog).expect("matches");

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].catalog_text, AUDIT);
        assert_eq!(groups[0].requirement_ids, vec!["REQ1"]);
        assert_eq!(groups[1].catalog_text, ACCESS);
        assert_eq!(groups[1].requirement_ids, vec!["REQ2"]);
    }

    #[test]
    fn near_identical_descriptions_share_one_group_in_input_order() {
        let encoder = encoder();
        let catalog = catalog(&encoder);
        let input = "R2 - Restrict access to approved users\nR1 - Restrict access to signed-off users";

        let groups = match_requirements(input, &encoder, &catalog).expect("matches");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].catalog_text, ACCESS);
        assert_eq!(groups[0].requirement_ids, vec!["R2", "R1"]);
        assert_eq!(groups[0].joined_ids(), "R2, R1");
    }

    #[test]
    fn groups_are_ordered_by_first_match_not_catalog_order() {
        let encoder = encoder();
        let catalog = catalog(&encoder);
        let input = format!("A - {TRAINING}\nB - {AUDIT}");

        let groups = match_requirements(&input, &encoder, &catalog).expect("matches");

        let texts: Vec<&str> = groups.iter().map(|g| g.catalog_text.as_str()).collect();
        assert_eq!(texts, vec![TRAINING, AUDIT]);
    }

    #[test]
    fn every_parsed_identifier_lands_in_exactly_one_group() {
        let encoder = encoder();
        let catalog = catalog(&encoder);
        let input = format!(
            "REQ1 - {AUDIT}\nnot a requirement line\nREQ2 - {ACCESS}\nREQ3 - Keep an audit log of every change"
        );

        let groups = match_requirements(&input, &encoder, &catalog).expect("matches");

        let mut ids: Vec<&str> = groups
            .iter()
            .flat_map(|group| group.requirement_ids.iter().map(String::as_str))
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["REQ1", "REQ2", "REQ3"]);
    }

    #[test]
    fn rerunning_the_same_input_is_deterministic() {
        let encoder = encoder();
        let catalog = catalog(&encoder);
        let input = format!("REQ1 - {AUDIT}\nREQ2 - {ACCESS}\nREQ3 - Restrict access to approved users");

        let first = match_requirements(&input, &encoder, &catalog).expect("matches");
        let second = match_requirements(&input, &encoder, &catalog).expect("matches");

        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_is_a_caller_error() {
        let encoder = encoder();
        let catalog = catalog(&encoder);

        for input in ["", "   \n  \n", "no separator here"] {
            let result = match_requirements(input, &encoder, &catalog);
            assert!(matches!(result, Err(MatchError::EmptyInput)), "input: {input:?}");
        }
    }

    #[test]
    fn unknown_description_still_gets_assigned_somewhere() {
        // Zero-vector embeddings score 0.0 against every entry; the argmax
        // tie-break assigns them to the first catalog entry.
        let encoder = encoder();
        let catalog = catalog(&encoder);

        let groups =
            match_requirements("REQX - completely unrelated text", &encoder, &catalog)
                .expect("matches");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].catalog_text, AUDIT);
        assert_eq!(groups[0].requirement_ids, vec!["REQX"]);
    }
}
