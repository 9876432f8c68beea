//! 名簿照合
//!
//! 主データの各行について、参照データを先頭から線形に走査し、
//! 正規化した氏名が最初に一致した行の教室を割り当てる。

use crate::normalize::name_key;
use crate::sorter::sort_results;
use crate::types::{Classroom, MatchResult, RosterEntry, StudentRecord};
use log::{debug, warn};
use std::collections::HashMap;

/// 1件の氏名から教室を決める
///
/// 空の氏名はどの行にも一致しない。
pub fn find_classroom(full_name: &str, reference: &[RosterEntry]) -> Classroom {
    let key = name_key(full_name);
    if key.is_empty() {
        return Classroom::NotFound;
    }

    match reference.iter().find(|entry| name_key(&entry.corrected_name) == key) {
        Some(entry) => {
            let room = entry.classroom.trim();
            if room.is_empty() {
                Classroom::FoundButNoClassroom
            } else {
                Classroom::Assigned(room.to_string())
            }
        }
        None => Classroom::NotFound,
    }
}

/// 全行を照合（主データの順序を保つ）
pub fn match_records(primary: &[StudentRecord], reference: &[RosterEntry]) -> Vec<MatchResult> {
    primary
        .iter()
        .map(|record| {
            let classroom = find_classroom(&record.full_name, reference);
            debug!("{} → {}", record.full_name, classroom);
            MatchResult::new(record.clone(), classroom)
        })
        .collect()
}

/// 照合 + 並べ替え
pub fn process(primary: &[StudentRecord], reference: &[RosterEntry]) -> Vec<MatchResult> {
    let mut results = match_records(primary, reference);
    sort_results(&mut results);
    results
}

/// 参照データ内で重複している氏名（正規化後）
///
/// 照合は先頭一致のままなので、ここでは警告用に列挙するだけ。
/// 返す順序は参照データ内で最初に現れた順。
pub fn duplicate_names(reference: &[RosterEntry]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order = Vec::new();

    for entry in reference {
        let key = name_key(&entry.corrected_name);
        if key.is_empty() {
            continue;
        }
        let count = counts.entry(key.clone()).or_insert(0);
        *count += 1;
        if *count == 2 {
            order.push(key);
        }
    }

    for name in &order {
        warn!("名簿に重複した氏名: {} ({}件)", name, counts[name]);
    }
    order
}

/// 照合結果の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub total: usize,
    pub assigned: usize,
    pub found_but_no_classroom: usize,
    pub not_found: usize,
}

impl MatchSummary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Default::default()
        };
        for result in results {
            match result.classroom {
                Classroom::Assigned(_) => summary.assigned += 1,
                Classroom::FoundButNoClassroom => summary.found_but_no_classroom += 1,
                Classroom::NotFound => summary.not_found += 1,
            }
        }
        summary
    }
}
