//! 表データ → 型付きレコード
//!
//! 列の解決は `ColumnMap` で一度だけ行い、各行から値を取り出す。

use crate::headers::{ColumnMap, Field, HeaderAliases};
use crate::table::Table;
use crate::types::{RosterEntry, StudentRecord};
use log::warn;

/// 読み込んだレコードと、見つからなかった列
#[derive(Debug, Clone, Default)]
pub struct Dataset<T> {
    pub records: Vec<T>,
    /// どのエイリアスにも一致しなかった列（値は空文字で読まれる）
    pub missing_columns: Vec<Field>,
}

impl<T> Dataset<T> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn resolve(table: &Table, fields: &[Field], aliases: &HeaderAliases) -> ColumnMap {
    let columns = ColumnMap::resolve(&table.headers, fields, aliases);
    for field in columns.missing() {
        warn!("列 '{}' が見つかりません（見出し: {:?}）", field, table.headers);
    }
    columns
}

/// 主データ（試験結果）として読む
pub fn read_students(table: &Table, aliases: &HeaderAliases) -> Dataset<StudentRecord> {
    let columns = resolve(table, &Field::PRIMARY, aliases);

    let records = table
        .rows
        .iter()
        .map(|row| StudentRecord {
            course: columns.get(row, Field::Course),
            full_name: columns.get(row, Field::FullName),
            exam_marks: columns.get(row, Field::ExamMarks),
            total: columns.get(row, Field::Total),
        })
        .collect();

    Dataset {
        records,
        missing_columns: columns.missing(),
    }
}

/// 参照データ（名簿）として読む
pub fn read_roster(table: &Table, aliases: &HeaderAliases) -> Dataset<RosterEntry> {
    let columns = resolve(table, &Field::REFERENCE, aliases);

    let records = table
        .rows
        .iter()
        .map(|row| RosterEntry {
            corrected_name: columns.get(row, Field::CorrectedName),
            classroom: columns.get(row, Field::Classroom),
        })
        .collect();

    Dataset {
        records,
        missing_columns: columns.missing(),
    }
}
