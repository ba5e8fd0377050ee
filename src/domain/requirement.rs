/// One user-supplied requirement: an identifier and the free-text
/// description to be classified. Both fields are non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementStatement {
    pub id: String,
    pub description: String,
}

/// One catalog entry together with the identifiers of every requirement
/// whose best match it is, in original input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    pub catalog_text: String,
    pub requirement_ids: Vec<String>,
}

impl MatchGroup {
    /// Render the identifier list the way the response format expects it.
    pub fn joined_ids(&self) -> String {
        self.requirement_ids.join(", ")
    }
}
