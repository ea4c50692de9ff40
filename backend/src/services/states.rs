//! US state name to USPS code mapping used by the choropleth.

/// The 50 states plus the District of Columbia, sorted by name.
pub const STATE_CODES: [(&str, &str); 51] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

/// USPS code for an exact state name, `None` for anything else.
pub fn state_code(region_name: &str) -> Option<&'static str> {
    STATE_CODES
        .binary_search_by(|(name, _)| (*name).cmp(region_name))
        .ok()
        .map(|idx| STATE_CODES[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_for_binary_search() {
        assert!(STATE_CODES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<&str> = STATE_CODES.iter().map(|(_, c)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 51);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(state_code("California"), Some("CA"));
        assert_eq!(state_code("District of Columbia"), Some("DC"));
        assert_eq!(state_code("Wyoming"), Some("WY"));
        assert_eq!(state_code("Alabama"), Some("AL"));
    }

    #[test]
    fn test_unmapped_names() {
        assert_eq!(state_code("Ontario"), None);
        assert_eq!(state_code("california"), None);
        assert_eq!(state_code(""), None);
    }
}
