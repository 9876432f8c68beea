//! 照合結果の並べ替え
//!
//! 教室名は小文字化したうえでUnicode照合順序（UCA / CLDRルート）で比較する。
//! 番兵値は常に末尾で、`Found but no classroom` → `Not Found` の順に並ぶ。
//! 安定ソートなので同じキーの行は元の順序を保つ。

use crate::types::{Classroom, MatchResult};
use feruca::Collator;
use std::cmp::Ordering;

fn sentinel_rank(classroom: &Classroom) -> u8 {
    match classroom {
        Classroom::Assigned(_) => 0,
        Classroom::FoundButNoClassroom => 1,
        Classroom::NotFound => 2,
    }
}

/// 教室の比較器（照合器を使い回す）
pub struct ClassroomOrder {
    collator: Collator,
}

impl Default for ClassroomOrder {
    fn default() -> Self {
        Self {
            collator: Collator::default(),
        }
    }
}

impl ClassroomOrder {
    pub fn compare(&mut self, a: &Classroom, b: &Classroom) -> Ordering {
        match (a, b) {
            (Classroom::Assigned(x), Classroom::Assigned(y)) => {
                let x = x.to_lowercase();
                let y = y.to_lowercase();
                self.collator.collate(x.as_str(), y.as_str())
            }
            _ => sentinel_rank(a).cmp(&sentinel_rank(b)),
        }
    }
}

/// 教室の比較関数
pub fn compare_classrooms(a: &Classroom, b: &Classroom) -> Ordering {
    ClassroomOrder::default().compare(a, b)
}

/// 教室順に並べ替え
pub fn sort_results(results: &mut [MatchResult]) {
    let mut order = ClassroomOrder::default();
    results.sort_by(|a, b| order.compare(&a.classroom, &b.classroom));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StudentRecord;

    fn result(name: &str, classroom: Classroom) -> MatchResult {
        MatchResult::new(
            StudentRecord {
                full_name: name.to_string(),
                ..Default::default()
            },
            classroom,
        )
    }

    fn assigned(room: &str) -> Classroom {
        Classroom::Assigned(room.to_string())
    }

    #[test]
    fn test_compare_case_insensitive() {
        assert_eq!(compare_classrooms(&assigned("b"), &assigned("A")), Ordering::Greater);
        assert_eq!(compare_classrooms(&assigned("Lab"), &assigned("lab")), Ordering::Equal);
    }

    #[test]
    fn test_compare_accented_rooms() {
        assert_eq!(compare_classrooms(&assigned("Élan"), &assigned("Fab")), Ordering::Less);
        assert_eq!(compare_classrooms(&assigned("élan"), &assigned("Dune")), Ordering::Greater);
        assert_eq!(compare_classrooms(&assigned("ÉLAN"), &assigned("élan")), Ordering::Equal);
    }

    #[test]
    fn test_sort_non_latin_rooms_among_latin() {
        let mut results = vec![
            result("z", assigned("Zeta")),
            result("o", assigned("Öst")),
            result("a", assigned("Alpha")),
            result("p", assigned("Pi")),
        ];
        sort_results(&mut results);
        let names: Vec<&str> = results.iter().map(|r| r.record.full_name.as_str()).collect();
        assert_eq!(names, vec!["a", "o", "p", "z"]);
    }

    #[test]
    fn test_sentinels_last() {
        assert_eq!(
            compare_classrooms(&assigned("zzz"), &Classroom::FoundButNoClassroom),
            Ordering::Less
        );
        assert_eq!(
            compare_classrooms(&Classroom::FoundButNoClassroom, &Classroom::NotFound),
            Ordering::Less
        );
        assert_eq!(compare_classrooms(&Classroom::NotFound, &assigned("a")), Ordering::Greater);
    }

    #[test]
    fn test_sort_results() {
        let mut results = vec![
            result("n1", Classroom::NotFound),
            result("r2", assigned("202")),
            result("f1", Classroom::FoundButNoClassroom),
            result("r1", assigned("101")),
            result("n2", Classroom::NotFound),
            result("f2", Classroom::FoundButNoClassroom),
        ];
        sort_results(&mut results);

        let names: Vec<&str> = results.iter().map(|r| r.record.full_name.as_str()).collect();
        assert_eq!(names, vec!["r1", "r2", "f1", "f2", "n1", "n2"]);
    }

    #[test]
    fn test_sort_lexicographic_not_numeric() {
        let mut results = vec![result("a", assigned("20")), result("b", assigned("101"))];
        sort_results(&mut results);
        assert_eq!(results[0].classroom, assigned("101"));
    }

    #[test]
    fn test_sort_stable_for_equal_rooms() {
        let mut results = vec![
            result("first", assigned("Lab")),
            result("x", assigned("A")),
            result("second", assigned("lab")),
        ];
        sort_results(&mut results);
        let names: Vec<&str> = results.iter().map(|r| r.record.full_name.as_str()).collect();
        assert_eq!(names, vec!["x", "first", "second"]);
    }
}
