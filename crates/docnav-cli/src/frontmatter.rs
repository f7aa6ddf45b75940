//! YAML front matter extraction from Markdown sources.

use docnav_core::Frontmatter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Opening `---` fence without a closing one.
    #[error("front matter is not closed")]
    Unterminated,
    #[error("invalid front matter: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Return the raw YAML block at the top of `source`, if any.
///
/// The block must start on the first line with `---` and end with a line
/// that is exactly `---` or `...`.
pub fn extract(source: &str) -> Result<Option<&str>, FrontmatterError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let Some(rest) = source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))
    else {
        return Ok(None);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed == "---" || trimmed == "..." {
            return Ok(Some(&rest[..offset]));
        }
        offset += line.len();
    }
    Err(FrontmatterError::Unterminated)
}

/// Parse the front matter of a Markdown document.
pub fn parse(source: &str) -> Result<Option<Frontmatter>, FrontmatterError> {
    let Some(yaml) = extract(source)? else {
        return Ok(None);
    };
    if yaml.trim().is_empty() {
        return Ok(Some(Frontmatter::default()));
    }
    Ok(Some(serde_norway::from_str(yaml)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let doc = "---\ntitle: Setting up\nauthors:\n  - Ada\n  - Grace\ndate: 2020-01-02\ntags: [x]\n---\n# Body\n";
        let fm = parse(doc).unwrap().expect("should have front matter");
        assert_eq!(fm.title.as_deref(), Some("Setting up"));
        assert_eq!(fm.authors, vec!["Ada", "Grace"]);
        assert_eq!(fm.date.as_deref(), Some("2020-01-02"));
    }

    #[test]
    fn test_single_author() {
        let fm = parse("---\nauthors: Ada\n---\n").unwrap().unwrap();
        assert_eq!(fm.authors, vec!["Ada"]);
    }

    #[test]
    fn test_no_front_matter() {
        assert!(parse("# Just a heading\n---\n").unwrap().is_none());
        assert!(parse("").unwrap().is_none());
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(parse("---\n---\nbody").unwrap(), Some(Frontmatter::default()));
    }

    #[test]
    fn test_crlf_and_dots_terminator() {
        let doc = "---\r\ntitle: Windows\r\n...\r\nbody";
        assert_eq!(extract(doc).unwrap(), Some("title: Windows\r\n"));
        let fm = parse(doc).unwrap().unwrap();
        assert_eq!(fm.title.as_deref(), Some("Windows"));
    }

    #[test]
    fn test_unterminated() {
        assert!(matches!(
            parse("---\ntitle: x\n"),
            Err(FrontmatterError::Unterminated)
        ));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            parse("---\ntitle: [unclosed\n---\n"),
            Err(FrontmatterError::Yaml(_))
        ));
    }
}
