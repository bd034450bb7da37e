//! Saved summary rows.

use serde::{Deserialize, Serialize};

use crate::calculation::format_won;

/// Header of the exported summary table.
pub const SAVED_ROW_HEADER: [&str; 8] = [
    "No",
    "일자",
    "일비(순액)",
    "식비(순액)",
    "교통비",
    "숙박비",
    "총 감액",
    "지급예상금액",
];

/// An immutable snapshot of one trip's computed totals.
///
/// # Example
///
/// ```
/// use trip_expense::models::SavedRow;
///
/// let row = SavedRow {
///     sequence_number: 1,
///     period_label: "2025-09-10~2025-09-10 (1일)".to_string(),
///     per_diem_net: 25000,
///     meal_net: 25000,
///     transport_total: 45000,
///     lodging_total: 0,
///     total_deduction: 0,
///     grand_total: 95000,
/// };
/// assert_eq!(row.export_cells()[7], "95,000원");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRow {
    /// Position in the saved list, starting at 1.
    pub sequence_number: u32,
    /// The trip period label.
    pub period_label: String,
    /// Per-diem payable.
    pub per_diem_net: i64,
    /// Meal allowance payable.
    pub meal_net: i64,
    /// Sum of fares.
    pub transport_total: i64,
    /// Sum of lodging.
    pub lodging_total: i64,
    /// All deductions combined.
    pub total_deduction: i64,
    /// The amount expected to be paid.
    pub grand_total: i64,
}

impl SavedRow {
    /// Returns the row as export cells, in [`SAVED_ROW_HEADER`] order.
    ///
    /// Amounts are formatted as currency; the sequence number is left raw.
    pub fn export_cells(&self) -> Vec<String> {
        vec![
            self.sequence_number.to_string(),
            self.period_label.clone(),
            format_won(self.per_diem_net),
            format_won(self.meal_net),
            format_won(self.transport_total),
            format_won(self.lodging_total),
            format_won(self.total_deduction),
            format_won(self.grand_total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_cells_match_header_width() {
        let row = SavedRow {
            sequence_number: 12,
            period_label: "2025-09-10~2025-09-12 (3일)".to_string(),
            per_diem_net: 62500,
            meal_net: 75000,
            transport_total: 90000,
            lodging_total: 120000,
            total_deduction: 12500,
            grand_total: 347500,
        };
        let cells = row.export_cells();
        assert_eq!(cells.len(), SAVED_ROW_HEADER.len());
        assert_eq!(
            cells,
            vec![
                "12",
                "2025-09-10~2025-09-12 (3일)",
                "62,500원",
                "75,000원",
                "90,000원",
                "120,000원",
                "12,500원",
                "347,500원",
            ]
        );
    }
}
