use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::models::BookSummary;

/// Era selector for the book list. Mutually exclusive categories evaluated
/// against the current calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EraFilter {
    #[default]
    All,
    /// Published within the last 10 years.
    Recent,
    /// Published more than 30 years ago.
    Classic,
    Decade2000s,
    Decade2010s,
    Decade2020s,
}

impl EraFilter {
    /// Cycle to the next era, for the TUI selector.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Recent,
            Self::Recent => Self::Decade2020s,
            Self::Decade2020s => Self::Decade2010s,
            Self::Decade2010s => Self::Decade2000s,
            Self::Decade2000s => Self::Classic,
            Self::Classic => Self::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Classic,
            Self::Recent => Self::All,
            Self::Decade2020s => Self::Recent,
            Self::Decade2010s => Self::Decade2020s,
            Self::Decade2000s => Self::Decade2010s,
            Self::Classic => Self::Decade2000s,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all years",
            Self::Recent => "recent (last 10 years)",
            Self::Classic => "classic (30+ years)",
            Self::Decade2000s => "2000s",
            Self::Decade2010s => "2010s",
            Self::Decade2020s => "2020s",
        }
    }

    /// Whether a publish year falls inside this era. Books without a year
    /// belong to no era except `All`.
    fn matches(self, year: Option<i32>, current_year: i32) -> bool {
        if self == Self::All {
            return true;
        }
        let Some(year) = year else {
            return false;
        };
        match self {
            Self::All => true,
            Self::Recent => year >= current_year - 10,
            Self::Classic => year < current_year - 30,
            Self::Decade2000s => (2000..2010).contains(&year),
            Self::Decade2010s => (2010..2020).contains(&year),
            Self::Decade2020s => year >= 2020,
        }
    }
}

impl std::fmt::Display for EraFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Recent => "recent",
            Self::Classic => "classic",
            Self::Decade2000s => "2000s",
            Self::Decade2010s => "2010s",
            Self::Decade2020s => "2020s",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for EraFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "recent" => Ok(Self::Recent),
            "classic" => Ok(Self::Classic),
            "2000s" => Ok(Self::Decade2000s),
            "2010s" => Ok(Self::Decade2010s),
            "2020s" => Ok(Self::Decade2020s),
            other => Err(format!(
                "unknown era '{other}' (expected all, recent, classic, 2000s, 2010s, 2020s)"
            )),
        }
    }
}

/// Filter the collection by free-text query and era, preserving order.
///
/// The query matches case-insensitively against the title or any author;
/// a blank query disables text filtering. Text and era compose with AND.
/// The source collection is never mutated.
pub fn filter_books(
    books: &[BookSummary],
    query: &str,
    era: EraFilter,
    current_year: i32,
) -> Vec<BookSummary> {
    let needle = query.trim().to_lowercase();
    books
        .iter()
        .filter(|book| {
            needle.is_empty()
                || book.title.to_lowercase().contains(&needle)
                || book
                    .authors
                    .iter()
                    .any(|author| author.to_lowercase().contains(&needle))
        })
        .filter(|book| era.matches(book.first_publish_year, current_year))
        .cloned()
        .collect()
}

/// [`filter_books`] against the current calendar year.
pub fn filter_books_now(books: &[BookSummary], query: &str, era: EraFilter) -> Vec<BookSummary> {
    filter_books(books, query, era, chrono::Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNKNOWN_AUTHOR;

    fn book(title: &str, authors: &[&str], year: Option<i32>) -> BookSummary {
        BookSummary {
            key: format!("/works/{title}"),
            id: title.to_string(),
            title: title.to_string(),
            authors: authors.iter().map(ToString::to_string).collect(),
            first_publish_year: year,
            cover_image_url: String::new(),
            subjects: vec![],
            edition_count: 1,
        }
    }

    fn collection() -> Vec<BookSummary> {
        vec![
            book("The Hobbit", &["J. R. R. Tolkien"], Some(1937)),
            book("Tolkien: A Biography", &["Humphrey Carpenter"], Some(1977)),
            book("The Rust Programming Language", &["Steve Klabnik"], Some(2019)),
            book("Mystery Manuscript", &[UNKNOWN_AUTHOR], None),
            book("Clean Code", &["Robert C. Martin"], Some(2008)),
        ]
    }

    #[test]
    fn blank_query_and_all_era_is_identity() {
        let books = collection();
        let filtered = filter_books(&books, "", EraFilter::All, 2024);
        let titles: Vec<&str> = filtered.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            books.iter().map(|b| b.title.as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn query_matches_title_or_author_case_insensitively() {
        let books = collection();
        let filtered = filter_books(&books, "tolkien", EraFilter::All, 2024);
        let titles: Vec<&str> = filtered.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["The Hobbit", "Tolkien: A Biography"]);
    }

    #[test]
    fn classic_era_excludes_recent_and_sentinel_years() {
        let books = collection();
        let filtered = filter_books(&books, "", EraFilter::Classic, 2024);
        assert!(filtered
            .iter()
            .all(|b| b.first_publish_year.is_some_and(|y| y < 1994)));
        let titles: Vec<&str> = filtered.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["The Hobbit", "Tolkien: A Biography"]);
    }

    #[test]
    fn recent_era_uses_current_year_window() {
        let books = collection();
        let filtered = filter_books(&books, "", EraFilter::Recent, 2024);
        let titles: Vec<&str> = filtered.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["The Rust Programming Language"]);
    }

    #[test]
    fn decade_eras_use_half_open_ranges() {
        let books = vec![
            book("a", &["x"], Some(1999)),
            book("b", &["x"], Some(2000)),
            book("c", &["x"], Some(2009)),
            book("d", &["x"], Some(2010)),
            book("e", &["x"], Some(2020)),
        ];
        let in_2000s = filter_books(&books, "", EraFilter::Decade2000s, 2024);
        let titles: Vec<&str> = in_2000s.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "c"]);

        let in_2020s = filter_books(&books, "", EraFilter::Decade2020s, 2024);
        assert_eq!(in_2020s.len(), 1);
        assert_eq!(in_2020s[0].title, "e");
    }

    #[test]
    fn text_and_era_compose_conjunctively() {
        let books = collection();
        let filtered = filter_books(&books, "tolkien", EraFilter::Classic, 2024);
        let titles: Vec<&str> = filtered.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["The Hobbit", "Tolkien: A Biography"]);

        let none = filter_books(&books, "tolkien", EraFilter::Recent, 2024);
        assert!(none.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let books = collection();
        let once = filter_books(&books, "the", EraFilter::Classic, 2024);
        let twice = filter_books(&once, "the", EraFilter::Classic, 2024);
        let once_titles: Vec<&str> = once.iter().map(|b| b.title.as_str()).collect();
        let twice_titles: Vec<&str> = twice.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(once_titles, twice_titles);
    }

    #[test]
    fn era_round_trips_through_strings() {
        for era in [
            EraFilter::All,
            EraFilter::Recent,
            EraFilter::Classic,
            EraFilter::Decade2000s,
            EraFilter::Decade2010s,
            EraFilter::Decade2020s,
        ] {
            let parsed: EraFilter = era.to_string().parse().unwrap();
            assert_eq!(parsed, era);
        }
        assert!("victorian".parse::<EraFilter>().is_err());
    }

    #[test]
    fn era_cycle_visits_every_variant() {
        let mut era = EraFilter::All;
        let mut seen = vec![era];
        loop {
            era = era.next();
            if era == EraFilter::All {
                break;
            }
            seen.push(era);
        }
        assert_eq!(seen.len(), 6);
        for e in &seen {
            assert_eq!(e.prev().next(), *e);
        }
    }
}
