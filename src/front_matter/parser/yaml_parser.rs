use crate::front_matter::types::FrontMatter;

/// Decode a YAML front matter block
///
/// An empty block (`---` immediately followed by `---`) is valid and yields
/// empty metadata.
pub fn parse_yaml(raw: &str) -> Result<FrontMatter, serde_yaml::Error> {
    if raw.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    serde_yaml::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let fm = parse_yaml("title: Test Page\nlayout: default\n").unwrap();
        assert_eq!(fm.title.as_deref(), Some("Test Page"));
        assert_eq!(fm.layout.as_deref(), Some("default"));
        assert_eq!(fm.permalink, None);
    }

    #[test]
    fn test_empty_block() {
        assert!(parse_yaml("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(parse_yaml("title: [oops").is_err());
    }
}
