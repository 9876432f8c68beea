//! 氏名の正規化

/// 照合用のキー（前後の空白を除去して小文字化）
///
/// ```
/// use roster_match_common::normalize::name_key;
///
/// assert_eq!(name_key("  JANE Doe "), "jane doe");
/// ```
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
