//! Endpoint token and seed list parsing.

use mongodb::options::ServerAddress;

use crate::error::{DatasourceError, DatasourceResult};

/// Parse a single `host` or `host:port` token into a server address.
pub fn parse_endpoint(token: &str) -> DatasourceResult<ServerAddress> {
    ServerAddress::parse(token)
        .map_err(|e| DatasourceError::invalid_endpoint(token, e.to_string()))
}

/// Parse a seed list of endpoint tokens separated by commas and/or
/// whitespace, in any mixture and repetition.
///
/// Order is preserved; empty tokens between consecutive separators are
/// discarded, so `"a, b,,c"` yields three endpoints. A blank input yields
/// an empty list.
pub fn parse_seed_list(list: &str) -> DatasourceResult<Vec<ServerAddress>> {
    list.split(seed_separator)
        .filter(|token| !token.is_empty())
        .map(parse_endpoint)
        .collect()
}

fn seed_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}
