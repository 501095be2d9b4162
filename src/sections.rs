use std::ops::Range;

use crate::media::{CardStyle, ContentSection, ContinueWatchingEntry, NormalizedCard, RawShow};

/// The catalog page is wider than the home screen needs; everything below
/// works on this leading slice.
pub const CATALOG_SLICE: usize = 60;

pub const SECTION_LIMIT: usize = 12;

const TRENDING_RANGE: Range<usize> = 20..32;
const CONTINUE_WATCHING_RANGE: Range<usize> = 32..40;

/// Synthetic remaining-time values, one per continue-watching slot.
const MINUTES_LEFT: [u32; 8] = [56, 80, 130, 36, 64, 52, 45, 39];
const DEFAULT_MINUTES_LEFT: u32 = 45;

pub fn normalize_cards(shows: &[RawShow]) -> Vec<NormalizedCard> {
    shows
        .iter()
        .take(CATALOG_SLICE)
        .map(NormalizedCard::from)
        .collect()
}

fn slice_clamped(cards: &[NormalizedCard], range: Range<usize>) -> &[NormalizedCard] {
    let start = range.start.min(cards.len());
    let end = range.end.min(cards.len());
    &cards[start..end]
}

fn top_rated(cards: &[NormalizedCard]) -> Vec<NormalizedCard> {
    let mut rated: Vec<NormalizedCard> = cards
        .iter()
        .filter(|c| c.rating.is_some())
        .cloned()
        .collect();
    // stable sort keeps catalog order between equal ratings
    rated.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rated.truncate(SECTION_LIMIT);
    rated
}

/// Partitions the card slice into the three home-screen rows, in their
/// fixed display order.
pub fn build_sections(cards: &[NormalizedCard]) -> Vec<ContentSection> {
    vec![
        ContentSection {
            title: String::from("Popular on Stream"),
            card_style: CardStyle::Poster,
            content: cards.iter().take(SECTION_LIMIT).cloned().collect(),
        },
        ContentSection {
            title: String::from("Top Rated Shows"),
            card_style: CardStyle::Poster,
            content: top_rated(cards),
        },
        ContentSection {
            title: String::from("Trending Now"),
            card_style: CardStyle::Banner,
            content: slice_clamped(cards, TRENDING_RANGE).to_vec(),
        },
    ]
}

pub fn synthesize_continue_watching(cards: &[NormalizedCard]) -> Vec<ContinueWatchingEntry> {
    slice_clamped(cards, CONTINUE_WATCHING_RANGE)
        .iter()
        .enumerate()
        .map(|(idx, card)| ContinueWatchingEntry {
            card: card.clone(),
            minutes_left: MINUTES_LEFT
                .get(idx)
                .copied()
                .unwrap_or(DEFAULT_MINUTES_LEFT),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{ShowRating, UNKNOWN_NETWORK};

    fn catalog(len: usize) -> Vec<RawShow> {
        (0..len)
            .map(|i| RawShow {
                id: i as u64,
                name: Some(format!("Show {}", i)),
                ..RawShow::default()
            })
            .collect()
    }

    fn rated_catalog(ratings: &[Option<f64>]) -> Vec<NormalizedCard> {
        let shows: Vec<RawShow> = ratings
            .iter()
            .copied()
            .enumerate()
            .map(|(i, r)| RawShow {
                id: i as u64,
                name: Some(format!("Show {}", i)),
                rating: r.map(|average| ShowRating {
                    average: Some(average),
                }),
                ..RawShow::default()
            })
            .collect();
        normalize_cards(&shows)
    }

    #[test]
    fn normalize_caps_at_sixty_cards() {
        let cards = normalize_cards(&catalog(120));
        assert_eq!(cards.len(), 60);
        assert_eq!(cards[0].id, 0);
        assert_eq!(cards[59].id, 59);
    }

    #[test]
    fn popular_is_first_twelve_in_catalog_order() {
        let cards = normalize_cards(&catalog(60));
        let sections = build_sections(&cards);
        assert_eq!(sections[0].title, "Popular on Stream");
        assert_eq!(sections[0].card_style, CardStyle::Poster);
        let ids: Vec<u64> = sections[0].content.iter().map(|c| c.id).collect();
        assert_eq!(ids, (0..12).collect::<Vec<u64>>());
    }

    #[test]
    fn trending_is_positions_twenty_to_thirty_one() {
        let cards = normalize_cards(&catalog(60));
        let sections = build_sections(&cards);
        assert_eq!(sections[2].title, "Trending Now");
        assert_eq!(sections[2].card_style, CardStyle::Banner);
        let ids: Vec<u64> = sections[2].content.iter().map(|c| c.id).collect();
        assert_eq!(ids, (20..32).collect::<Vec<u64>>());
    }

    #[test]
    fn top_rated_sorts_descending_and_drops_unrated() {
        let cards = rated_catalog(&[Some(6.0), None, Some(9.0), Some(7.5), None]);
        let sections = build_sections(&cards);
        assert_eq!(sections[1].title, "Top Rated Shows");
        let ids: Vec<u64> = sections[1].content.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 0]);
    }

    #[test]
    fn top_rated_ties_keep_catalog_order() {
        let cards = rated_catalog(&[Some(8.0), Some(9.0), Some(8.0), Some(8.0)]);
        let sections = build_sections(&cards);
        let ids: Vec<u64> = sections[1].content.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 0, 2, 3]);
    }

    #[test]
    fn top_rated_never_exceeds_limit() {
        let ratings: Vec<Option<f64>> = (0..40).map(|i| Some(f64::from(i))).collect();
        let cards = rated_catalog(&ratings);
        assert_eq!(build_sections(&cards)[1].content.len(), SECTION_LIMIT);
    }

    #[test]
    fn continue_watching_uses_fixed_minutes_table() {
        let cards = normalize_cards(&catalog(60));
        let entries = synthesize_continue_watching(&cards);
        assert_eq!(entries.len(), 8);
        let minutes: Vec<u32> = entries.iter().map(|e| e.minutes_left).collect();
        assert_eq!(minutes, vec![56, 80, 130, 36, 64, 52, 45, 39]);
        assert_eq!(entries[0].card.id, 32);
        assert_eq!(entries[7].card.id, 39);
    }

    #[test]
    fn continue_watching_truncates_on_short_catalog() {
        let cards = normalize_cards(&catalog(35));
        let entries = synthesize_continue_watching(&cards);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].minutes_left, 130);
    }

    #[test]
    fn tiny_catalog_leaves_later_rows_empty() {
        let cards = normalize_cards(&catalog(5));
        let sections = build_sections(&cards);
        assert_eq!(sections[0].content.len(), 5);
        assert!(sections[2].content.is_empty());
        assert!(synthesize_continue_watching(&cards).is_empty());
    }

    #[test]
    fn partially_covered_trending_range_is_clamped() {
        let cards = normalize_cards(&catalog(25));
        let sections = build_sections(&cards);
        let ids: Vec<u64> = sections[2].content.iter().map(|c| c.id).collect();
        assert_eq!(ids, (20..25).collect::<Vec<u64>>());
    }

    #[test]
    fn cards_carry_normalization_defaults() {
        let cards = normalize_cards(&catalog(1));
        assert_eq!(cards[0].author, UNKNOWN_NETWORK);
        assert!(!cards[0].image_url.is_empty());
    }
}
