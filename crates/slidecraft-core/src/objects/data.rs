//! Tabular and chart objects.

use super::text::TextStyle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStyle {
    pub header_bg: String,
    pub cell_bg: String,
    pub border_color: String,
    #[serde(default)]
    pub text_style: TextStyle,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header_bg: "#f3f4f6".to_string(),
            cell_bg: "#ffffff".to_string(),
            border_color: "#e5e7eb".to_string(),
            text_style: TextStyle::default(),
        }
    }
}

/// A grid of text cells. `data` is row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<String>>,
    #[serde(default)]
    pub style: TableStyle,
}

impl Table {
    /// Create an empty `rows` x `cols` table.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![vec![String::new(); cols]; rows],
            style: TableStyle::default(),
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.data.get(row)?.get(col).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
    Area,
    Scatter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub chart_type: ChartType,
    pub data: Vec<ChartPoint>,
    #[serde(default)]
    pub colors: Vec<String>,
}
