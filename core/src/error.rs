use thiserror::Error;

/// Expected, recoverable outcomes of graph queries that produce no answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The word is not a node of the graph.
    #[error("word '{0}' is not in the graph")]
    UnknownNode(String),

    /// Both words are nodes but no directed path connects them.
    #[error("no path from '{from}' to '{to}'")]
    Unreachable { from: String, to: String },

    /// Hop counts must be non-negative (and fit in a u32).
    #[error("invalid hop count {0}: must be non-negative")]
    InvalidHopCount(i64),
}

/// Validate a signed hop count at the API boundary.
pub fn check_hop_count(hops: i64) -> Result<u32, QueryError> {
    u32::try_from(hops).map_err(|_| QueryError::InvalidHopCount(hops))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_hop_count() {
        assert_eq!(check_hop_count(0), Ok(0));
        assert_eq!(check_hop_count(3), Ok(3));
        assert_eq!(check_hop_count(-1), Err(QueryError::InvalidHopCount(-1)));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            QueryError::UnknownNode("zz".into()).to_string(),
            "word 'zz' is not in the graph"
        );
        assert_eq!(
            QueryError::Unreachable {
                from: "a".into(),
                to: "b".into()
            }
            .to_string(),
            "no path from 'a' to 'b'"
        );
    }
}
