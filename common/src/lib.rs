//! Roster Match Common Library
//!
//! 試験結果と名簿の照合ロジック、入出力コーデック（バッファ単位）

pub mod types;
pub mod error;
pub mod headers;
pub mod table;
pub mod dataset;
pub mod normalize;
pub mod matcher;
pub mod sorter;
pub mod export;

pub use types::{Classroom, MatchResult, RosterEntry, StudentRecord, FOUND_BUT_NO_CLASSROOM, NOT_FOUND};
pub use error::{Error, Result};
pub use headers::{ColumnMap, Field, HeaderAliases};
pub use table::Table;
pub use dataset::{read_roster, read_students, Dataset};
pub use matcher::{duplicate_names, match_records, process, MatchSummary};
pub use sorter::{sort_results, ClassroomOrder};
