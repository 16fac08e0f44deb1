//! Comparison of flashcard kanji against a Kanji Study backup.
//!
//! A `.ksdata` backup is an SQLite database; its `user_kanji_info` table
//! holds one study rating per kanji (0 new, 1 seen, 2 and above familiar or
//! known).

use crate::error::{FuriError, Result};
use crate::script::is_cjk_char;
use rusqlite::{Connection, OpenFlags};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

const RATINGS_QUERY: &str =
    "SELECT kanji_code, study_rating FROM user_kanji_info WHERE is_radical = 0";

/// Study rating per kanji.
pub type Ratings = BTreeMap<char, i64>;

/// Reads the study ratings of every non-radical kanji in a backup.
pub fn load_ratings(path: &Path) -> Result<Ratings> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    let mut stmt = conn.prepare(RATINGS_QUERY)?;
    let rows = stmt.query_map([], |row| {
        let code: i64 = row.get(0)?;
        let rating: i64 = row.get(1)?;
        Ok((code, rating))
    })?;

    let mut ratings = Ratings::new();
    for row in rows {
        let (code, rating) = row?;
        let kanji = u32::try_from(code)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| FuriError::InvalidData(format!("kanji code {} is not a character", code)))?;
        if ratings.insert(kanji, rating).is_some() {
            return Err(FuriError::InvalidData(format!(
                "kanji {} appears twice in {}",
                kanji,
                path.display()
            )));
        }
    }
    tracing::debug!(kanji = ratings.len(), path = %path.display(), "loaded kanji study ratings");
    Ok(ratings)
}

/// A familiar kanji missing from the active cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Familiar {
    pub kanji: char,
    /// Present on a suspended card.
    pub suspended: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KanjiReport {
    /// On an active card, never studied.
    pub new: Vec<char>,
    /// On an active card, rated seen.
    pub seen: Vec<char>,
    /// Rated familiar or known, on no active card.
    pub familiar: Vec<Familiar>,
}

fn kanji_of<T: AsRef<str>>(cards: &[T]) -> BTreeSet<char> {
    cards
        .iter()
        .flat_map(|card| card.as_ref().chars())
        .filter(|&ch| is_cjk_char(ch))
        .collect()
}

/// Buckets the kanji of `active` cards by rating. `all` adds suspended
/// cards, used only to flag familiar kanji that are merely suspended.
pub fn compare<T: AsRef<str>>(active: &[T], all: Option<&[T]>, ratings: &Ratings) -> KanjiReport {
    let on_active = kanji_of(active);
    let on_any = all.map(kanji_of).unwrap_or_else(|| on_active.clone());

    let mut report = KanjiReport::default();
    for &kanji in &on_active {
        match ratings.get(&kanji).copied().unwrap_or(0) {
            0 => report.new.push(kanji),
            1 => report.seen.push(kanji),
            _ => {}
        }
    }
    for (&kanji, &rating) in ratings {
        if rating >= 2 && !on_active.contains(&kanji) {
            report.familiar.push(Familiar {
                kanji,
                suspended: on_any.contains(&kanji),
            });
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn backup(dir: &Path, rows: &[(u32, i64, i64)]) -> std::path::PathBuf {
        let path = dir.join("backup.ksdata");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE user_kanji_info (kanji_code INTEGER, study_rating INTEGER, is_radical INTEGER);",
        )
        .unwrap();
        for (code, rating, radical) in rows {
            conn.execute(
                "INSERT INTO user_kanji_info VALUES (?1, ?2, ?3)",
                rusqlite::params![code, rating, radical],
            )
            .unwrap();
        }
        path
    }

    #[test]
    fn reads_non_radical_ratings() {
        let dir = tempdir().unwrap();
        let path = backup(
            dir.path(),
            &[('猫' as u32, 2, 0), ('犬' as u32, 1, 0), ('人' as u32, 3, 1)],
        );
        let ratings = load_ratings(&path).unwrap();
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[&'猫'], 2);
        assert!(!ratings.contains_key(&'人'));
    }

    #[test]
    fn duplicate_kanji_is_invalid() {
        let dir = tempdir().unwrap();
        let path = backup(dir.path(), &[('猫' as u32, 2, 0), ('猫' as u32, 1, 0)]);
        assert!(matches!(load_ratings(&path), Err(FuriError::InvalidData(_))));
    }

    #[test]
    fn buckets_kanji_by_rating() {
        let ratings: Ratings = [('犬', 1), ('鳥', 2), ('魚', 3), ('猫', 2), ('馬', 0)]
            .into_iter()
            .collect();
        let active = ["猫と犬", "花[はな]"];
        let all = ["猫と犬", "花[はな]", "魚"];

        let report = compare(&active, Some(&all[..]), &ratings);
        assert_eq!(report.new, ['花']);
        assert_eq!(report.seen, ['犬']);
        assert_eq!(
            report.familiar,
            [
                Familiar { kanji: '魚', suspended: true },
                Familiar { kanji: '鳥', suspended: false },
            ]
        );
    }

    #[test]
    fn lists_are_sorted_by_code_point() {
        let ratings = Ratings::new();
        let report = compare(&["鳥犬猫"], None, &ratings);
        assert_eq!(report.new, ['犬', '猫', '鳥']);
        assert!(report.familiar.is_empty());
    }
}
