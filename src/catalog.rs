//! Paper catalog: subjects, sessions, file naming and request validation.
//!
//! Papers in the archive are addressed by subject, year, session, kind and
//! variant:
//!
//! ```text
//! {base}/{slug}-{subject}/{year}/{subject}_{session}{yy}_{kind}_{paper}{variant}.pdf
//! e.g. .../mathematics-further-9231/2019/9231_s19_qp_12.pdf
//! ```

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use serde::Serialize;

use crate::error::{Error, Result};

/// Earliest year accepted in a request.
pub const MIN_YEAR: u16 = 2010;

/// Latest year accepted in a request.
pub const MAX_YEAR: u16 = 2025;

lazy_static! {
    /// Subject code → archive slug, in catalog order.
    static ref SUBJECTS: IndexMap<&'static str, &'static str> = IndexMap::from([
        ("9700", "biology"),
        ("9701", "chemistry"),
        ("9702", "physics"),
        ("9709", "mathematics"),
        ("9231", "mathematics-further"),
        ("9618", "computer-science"),
        ("9608", "computer-science"),
        ("9626", "information-technology"),
        ("9084", "law"),
        ("9189", "history"),
        ("9990", "psychology"),
        ("9699", "sociology"),
        ("9696", "geography"),
        ("9093", "english-language"),
        ("9695", "english-literature"),
        ("9708", "economics"),
        ("9609", "business"),
    ]);
}

/// Archive slug for a subject code.
pub fn subject_slug(subject_code: &str) -> Option<&'static str> {
    SUBJECTS.get(subject_code).copied()
}

/// All `(code, slug)` pairs in catalog order.
pub fn subjects() -> impl Iterator<Item = (&'static str, &'static str)> {
    SUBJECTS.iter().map(|(code, slug)| (*code, *slug))
}

/// Examination session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Session {
    /// February/March (`m`).
    FebMarch,
    /// May/June (`s`).
    Summer,
    /// October/November (`w`).
    Winter,
}

impl Session {
    /// Single-letter archive code.
    pub fn code(self) -> char {
        match self {
            Session::FebMarch => 'm',
            Session::Summer => 's',
            Session::Winter => 'w',
        }
    }

    /// Variant digits published for this session.
    pub fn variants(self) -> &'static [char] {
        match self {
            Session::FebMarch => &['2'],
            Session::Summer | Session::Winter => &['1', '2', '3'],
        }
    }
}

impl FromStr for Session {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "m" => Ok(Session::FebMarch),
            "s" => Ok(Session::Summer),
            "w" => Ok(Session::Winter),
            other => Err(Error::InvalidRequest(vec![format!("Invalid session: '{}'", other)])),
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Question paper or mark scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperKind {
    /// Question paper (`qp`).
    Qp,
    /// Mark scheme (`ms`).
    Ms,
}

impl PaperKind {
    /// Archive code.
    pub fn code(self) -> &'static str {
        match self {
            PaperKind::Qp => "qp",
            PaperKind::Ms => "ms",
        }
    }
}

impl fmt::Display for PaperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One paper in the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperRef {
    /// Subject code.
    pub subject_code: String,
    /// Four-digit year.
    pub year: u16,
    /// Session.
    pub session: Session,
    /// Question paper or mark scheme.
    pub kind: PaperKind,
    /// Paper number followed by variant digit, e.g. `"12"`.
    pub variant: String,
}

impl PaperRef {
    /// File name in the archive, e.g. `9231_s19_qp_12.pdf`.
    pub fn filename(&self) -> String {
        format!(
            "{}_{}{:02}_{}_{}.pdf",
            self.subject_code,
            self.session.code(),
            self.year % 100,
            self.kind.code(),
            self.variant
        )
    }

    /// Full URL under `base_url`; `None` for subjects outside the catalog.
    pub fn url(&self, base_url: &str) -> Option<String> {
        let slug = subject_slug(&self.subject_code)?;
        Some(format!(
            "{}/{}-{}/{}/{}",
            base_url.trim_end_matches('/'),
            slug,
            self.subject_code,
            self.year,
            self.filename()
        ))
    }
}

/// A request for a range of papers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperRequest {
    /// Subject code.
    pub subject_code: String,
    /// Paper number, 1 to 9.
    pub paper_number: u8,
    /// First year, inclusive.
    pub start_year: u16,
    /// Last year, inclusive.
    pub end_year: u16,
    /// Sessions in the order requested.
    pub sessions: Vec<Session>,
    /// Also download and merge mark schemes.
    pub include_mark_scheme: bool,
    /// Split the merged question paper by topic.
    pub generate_topical: bool,
}

impl PaperRequest {
    /// Request without mark schemes or topical generation.
    pub fn new(
        subject_code: impl Into<String>,
        paper_number: u8,
        start_year: u16,
        end_year: u16,
        sessions: Vec<Session>,
    ) -> Self {
        Self {
            subject_code: subject_code.into(),
            paper_number,
            start_year,
            end_year,
            sessions,
            include_mark_scheme: false,
            generate_topical: false,
        }
    }

    /// Also fetch mark schemes.
    pub fn with_mark_scheme(mut self, value: bool) -> Self {
        self.include_mark_scheme = value;
        self
    }

    /// Also generate topical PDFs.
    pub fn with_topical(mut self, value: bool) -> Self {
        self.generate_topical = value;
        self
    }

    /// Check every field; all violations are reported together.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.subject_code.is_empty() {
            problems.push("Please select a subject.".to_string());
        } else if subject_slug(&self.subject_code).is_none() {
            problems.push(format!("Invalid subject code selected: {}.", self.subject_code));
        }
        if !(1..=9).contains(&self.paper_number) {
            problems.push("Invalid paper number. Please enter a single digit (e.g., 1, 2, 4).".to_string());
        }
        if self.start_year > self.end_year || self.start_year < MIN_YEAR || self.end_year > MAX_YEAR {
            problems.push(format!(
                "Invalid year range. Use YYYY-YYYY within {}-{}.",
                MIN_YEAR, MAX_YEAR
            ));
        }
        if self.sessions.is_empty() {
            problems.push("Please select at least one session.".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidRequest(problems))
        }
    }

    /// Kinds to fetch: always `qp`, then `ms` when requested.
    pub fn kinds(&self) -> Vec<PaperKind> {
        if self.include_mark_scheme {
            vec![PaperKind::Qp, PaperKind::Ms]
        } else {
            vec![PaperKind::Qp]
        }
    }

    /// Every paper of `kind`, ordered by year, then session, then variant.
    pub fn papers(&self, kind: PaperKind) -> Vec<PaperRef> {
        let mut papers = Vec::new();
        for year in self.start_year..=self.end_year {
            for &session in &self.sessions {
                for variant in session.variants() {
                    papers.push(PaperRef {
                        subject_code: self.subject_code.clone(),
                        year,
                        session,
                        kind,
                        variant: format!("{}{}", self.paper_number, variant),
                    });
                }
            }
        }
        papers
    }

    /// Name of the merged document for `kind`,
    /// e.g. `9231_1_2018-2023_sw_qp_merged.pdf`.
    pub fn merged_filename(&self, kind: PaperKind) -> String {
        let sessions: String = self.sessions.iter().map(|s| s.code()).collect();
        format!(
            "{}_{}_{}-{}_{}_{}_merged.pdf",
            self.subject_code,
            self.paper_number,
            self.start_year,
            self.end_year,
            sessions,
            kind.code()
        )
    }
}

/// Parse `"YYYY-YYYY"` into `(start, end)`.
pub fn parse_year_range(range: &str) -> Result<(u16, u16)> {
    let invalid = || {
        Error::InvalidRequest(vec![
            "Invalid year range format. Use YYYY-YYYY (e.g., 2018-2023).".to_string(),
        ])
    };

    let (start, end) = range.split_once('-').ok_or_else(invalid)?;
    let start = start.trim().parse::<u16>().map_err(|_| invalid())?;
    let end = end.trim().parse::<u16>().map_err(|_| invalid())?;
    Ok((start, end))
}

/// Parse a session list such as `"s,w"` or `"sw"`.
///
/// Unknown letters are dropped; an input with no valid session is an error.
pub fn parse_sessions(input: &str) -> Result<Vec<Session>> {
    let mut sessions = Vec::new();
    for c in input.chars().filter(|c| c.is_alphabetic()) {
        if let Ok(session) = c.to_string().parse::<Session>() {
            if !sessions.contains(&session) {
                sessions.push(session);
            }
        }
    }

    if sessions.is_empty() {
        Err(Error::InvalidRequest(vec!["Invalid session selection.".to_string()]))
    } else {
        Ok(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PaperRequest {
        PaperRequest::new("9231", 1, 2018, 2019, vec![Session::FebMarch, Session::Summer])
    }

    #[test]
    fn test_subject_slug() {
        assert_eq!(subject_slug("9231"), Some("mathematics-further"));
        assert_eq!(subject_slug("0000"), None);
        assert_eq!(subjects().count(), 17);
        assert_eq!(subjects().next(), Some(("9700", "biology")));
    }

    #[test]
    fn test_paper_filename_and_url() {
        let paper = PaperRef {
            subject_code: "9231".to_string(),
            year: 2019,
            session: Session::Summer,
            kind: PaperKind::Qp,
            variant: "12".to_string(),
        };
        assert_eq!(paper.filename(), "9231_s19_qp_12.pdf");
        assert_eq!(
            paper.url("https://example.com/a-level/").unwrap(),
            "https://example.com/a-level/mathematics-further-9231/2019/9231_s19_qp_12.pdf"
        );
    }

    #[test]
    fn test_papers_enumeration_order() {
        let papers = request().papers(PaperKind::Ms);
        let names: Vec<_> = papers.iter().map(|p| p.filename()).collect();
        assert_eq!(
            names,
            vec![
                "9231_m18_ms_12.pdf",
                "9231_s18_ms_11.pdf",
                "9231_s18_ms_12.pdf",
                "9231_s18_ms_13.pdf",
                "9231_m19_ms_12.pdf",
                "9231_s19_ms_11.pdf",
                "9231_s19_ms_12.pdf",
                "9231_s19_ms_13.pdf",
            ]
        );
    }

    #[test]
    fn test_merged_filename() {
        assert_eq!(request().merged_filename(PaperKind::Qp), "9231_1_2018-2019_ms_qp_merged.pdf");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(request().kinds(), vec![PaperKind::Qp]);
        assert_eq!(
            request().with_mark_scheme(true).kinds(),
            vec![PaperKind::Qp, PaperKind::Ms]
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_problems() {
        let bad = PaperRequest::new("1234", 0, 2009, 2030, vec![]);
        match bad.validate() {
            Err(Error::InvalidRequest(problems)) => assert_eq!(problems.len(), 4),
            other => panic!("expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_reversed_years() {
        let bad = PaperRequest::new("9231", 1, 2020, 2018, vec![Session::Winter]);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_parse_year_range() {
        assert_eq!(parse_year_range("2018-2023").unwrap(), (2018, 2023));
        assert_eq!(parse_year_range(" 2018 - 2019 ").unwrap(), (2018, 2019));
        assert!(parse_year_range("2018").is_err());
        assert!(parse_year_range("abcd-2019").is_err());
    }

    #[test]
    fn test_parse_sessions() {
        assert_eq!(
            parse_sessions("s,w").unwrap(),
            vec![Session::Summer, Session::Winter]
        );
        assert_eq!(parse_sessions("wsw").unwrap(), vec![Session::Winter, Session::Summer]);
        assert_eq!(parse_sessions("x,m").unwrap(), vec![Session::FebMarch]);
        assert!(parse_sessions("xyz").is_err());
    }
}
