//! "Did you mean" suggestions for the not-found page.

use crate::format::segments;
use crate::matcher::PathMatcher;

/// Suggests known paths for a location that did not resolve.
pub trait PathCorrector {
    /// At most `max` candidates from `known`, best first.
    fn corrections(&self, location: &str, known: &[String], max: usize) -> Vec<String>;
}

/// Ranks candidates by how many location segments they share.
///
/// Segments are compared case-insensitively and only below `root`.
/// Candidates sharing nothing are dropped; equal scores keep the order
/// of `known`.
#[derive(Clone, Debug)]
pub struct SegmentCorrector {
    root: PathMatcher,
}

impl SegmentCorrector {
    pub fn new(root: &str) -> Self {
        Self {
            root: PathMatcher::new(root),
        }
    }

    fn relative_segments(&self, path: &str) -> Vec<String> {
        let relative = if self.root.matches(path) {
            &path[self.root.root().len()..]
        } else {
            path
        };
        segments(relative).map(str::to_lowercase).collect()
    }
}

impl PathCorrector for SegmentCorrector {
    fn corrections(&self, location: &str, known: &[String], max: usize) -> Vec<String> {
        let wanted = self.relative_segments(location);
        if wanted.is_empty() || max == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(usize, &String)> = known
            .iter()
            .map(|candidate| {
                let have = self.relative_segments(candidate);
                let score = wanted.iter().filter(|s| have.contains(s)).count();
                (score, candidate)
            })
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(max)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Vec<String> {
        [
            "/resources/guides/setup",
            "/resources/guides/intro",
            "/resources/api/client",
            "/resources/api/setup",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_ranks_by_shared_segments() {
        let corrector = SegmentCorrector::new("/resources");
        let got = corrector.corrections("/resources/api/Setup", &known(), 8);
        assert_eq!(
            got,
            vec![
                "/resources/api/setup",
                "/resources/guides/setup",
                "/resources/api/client",
            ]
        );
    }

    #[test]
    fn test_respects_max() {
        let corrector = SegmentCorrector::new("/resources");
        let got = corrector.corrections("/resources/api/setup", &known(), 1);
        assert_eq!(got, vec!["/resources/api/setup"]);
        assert!(corrector.corrections("/resources/api", &known(), 0).is_empty());
    }

    #[test]
    fn test_root_segment_not_counted() {
        let corrector = SegmentCorrector::new("/resources");
        assert!(corrector.corrections("/resources/nothing", &known(), 8).is_empty());
        assert!(corrector.corrections("/resources", &known(), 8).is_empty());
    }
}
