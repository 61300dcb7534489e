use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::BookSummary;

/// Summary statistics over the whole fetched collection, recomputed in full
/// whenever the collection changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_books: usize,
    /// Mean edition count, rounded half-up. 0 for the empty collection.
    pub avg_editions: u32,
    /// 0 when no entry carries a valid year.
    pub oldest_year: i32,
    /// 0 when no entry carries a valid year.
    pub newest_year: i32,
    /// Entries whose author list is not the sentinel.
    pub books_with_authors: usize,
    /// Sum of author-list lengths; a sentinel list counts as 1.
    pub total_authors: usize,
}

/// One bar of the decade histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecadeBucket {
    pub decade: i32,
    pub count: u32,
}

impl DecadeBucket {
    pub fn label(&self) -> String {
        format!("{}s", self.decade)
    }
}

/// One slice of the edition-count distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditionRangeBucket {
    pub range: &'static str,
    pub value: u32,
}

const EDITION_RANGES: [&str; 4] = ["1-10", "11-50", "51-100", "100+"];

/// Compute the dashboard statistics. Pure function of the collection.
pub fn compute_stats(books: &[BookSummary]) -> DashboardStats {
    let valid_years: Vec<i32> = books
        .iter()
        .filter_map(|b| b.first_publish_year)
        .filter(|&year| year > 0)
        .collect();

    let books_with_authors = books.iter().filter(|b| b.has_known_authors()).count();
    let total_authors = books.iter().map(|b| b.authors.len()).sum();

    let avg_editions = if books.is_empty() {
        0
    } else {
        let sum: u64 = books.iter().map(|b| u64::from(b.edition_count)).sum();
        (sum as f64 / books.len() as f64).round() as u32
    };

    DashboardStats {
        total_books: books.len(),
        avg_editions,
        oldest_year: valid_years.iter().copied().min().unwrap_or(0),
        newest_year: valid_years.iter().copied().max().unwrap_or(0),
        books_with_authors,
        total_authors,
    }
}

/// Histogram of publish decades, ascending. Entries without a year are
/// skipped entirely.
pub fn decade_distribution(books: &[BookSummary]) -> Vec<DecadeBucket> {
    let mut decades: BTreeMap<i32, u32> = BTreeMap::new();
    for book in books {
        if let Some(year) = book.first_publish_year {
            let decade = (year as f64 / 10.0).floor() as i32 * 10;
            *decades.entry(decade).or_insert(0) += 1;
        }
    }
    decades
        .into_iter()
        .map(|(decade, count)| DecadeBucket { decade, count })
        .collect()
}

/// Distribution of edition counts over four fixed ranges. All four ranges
/// are always present, in order, so the chart shape is stable.
pub fn edition_range_distribution(books: &[BookSummary]) -> Vec<EditionRangeBucket> {
    let mut values = [0u32; 4];
    for book in books {
        let slot = match book.edition_count {
            0..=10 => 0,
            11..=50 => 1,
            51..=100 => 2,
            _ => 3,
        };
        values[slot] += 1;
    }
    EDITION_RANGES
        .iter()
        .zip(values)
        .map(|(range, value)| EditionRangeBucket { range, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(year: Option<i32>, editions: u32, authors: &[&str]) -> BookSummary {
        BookSummary {
            key: "/works/OL0W".into(),
            id: "OL0W".into(),
            title: "Test".into(),
            authors: authors.iter().map(ToString::to_string).collect(),
            first_publish_year: year,
            cover_image_url: String::new(),
            subjects: vec![],
            edition_count: editions,
        }
    }

    #[test]
    fn stats_match_known_collection() {
        let books = vec![
            book(Some(1990), 5, &["A"]),
            book(Some(2005), 15, &["B", "C"]),
            book(None, 0, &["Unknown Author"]),
        ];
        let stats = compute_stats(&books);
        assert_eq!(stats.total_books, 3);
        assert_eq!(stats.oldest_year, 1990);
        assert_eq!(stats.newest_year, 2005);
        assert_eq!(stats.avg_editions, 7); // round(20 / 3)
        assert_eq!(stats.books_with_authors, 2);
        assert_eq!(stats.total_authors, 4);
    }

    #[test]
    fn stats_on_empty_collection_are_zero() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn stats_without_valid_years_yield_zero_bounds() {
        let books = vec![book(None, 3, &["A"]), book(None, 9, &["B"])];
        let stats = compute_stats(&books);
        assert_eq!(stats.oldest_year, 0);
        assert_eq!(stats.newest_year, 0);
        assert_eq!(stats.avg_editions, 6);
    }

    #[test]
    fn avg_editions_rounds_half_up() {
        // 5 / 2 = 2.5 → 3
        let books = vec![book(None, 2, &["A"]), book(None, 3, &["B"])];
        assert_eq!(compute_stats(&books).avg_editions, 3);
    }

    #[test]
    fn decades_are_ascending_and_unique() {
        let books = vec![
            book(Some(2015), 1, &["A"]),
            book(Some(1987), 1, &["A"]),
            book(Some(2012), 1, &["A"]),
            book(None, 1, &["A"]),
            book(Some(1999), 1, &["A"]),
        ];
        let dist = decade_distribution(&books);
        let decades: Vec<i32> = dist.iter().map(|d| d.decade).collect();
        assert_eq!(decades, vec![1980, 1990, 2010]);
        assert!(decades.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(dist[2].count, 2);
        assert_eq!(dist[2].label(), "2010s");
    }

    #[test]
    fn edition_ranges_are_fixed_and_sum_to_collection_size() {
        let books = vec![
            book(None, 0, &["A"]),
            book(None, 10, &["A"]),
            book(None, 11, &["A"]),
            book(None, 100, &["A"]),
            book(None, 101, &["A"]),
        ];
        let dist = edition_range_distribution(&books);
        let ranges: Vec<&str> = dist.iter().map(|d| d.range).collect();
        assert_eq!(ranges, vec!["1-10", "11-50", "51-100", "100+"]);
        assert_eq!(dist.iter().map(|d| d.value).sum::<u32>() as usize, books.len());
        assert_eq!(dist[0].value, 2);
        assert_eq!(dist[1].value, 1);
        assert_eq!(dist[2].value, 1);
        assert_eq!(dist[3].value, 1);
    }

    #[test]
    fn edition_ranges_all_present_for_empty_input() {
        let dist = edition_range_distribution(&[]);
        assert_eq!(dist.len(), 4);
        assert!(dist.iter().all(|d| d.value == 0));
    }
}
