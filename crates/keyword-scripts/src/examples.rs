//! Example tables built from datasets.

use crate::format::format_cell;
use crate::model::Dataset;

/// Header and value row describing one dataset.
///
/// Columns are sorted by parameter name so the table layout does not
/// depend on the iteration order of the dataset's values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleTable {
    tag: String,
    columns: Vec<String>,
    cells: Vec<String>,
}

impl ExampleTable {
    /// Build the table for `dataset`.
    ///
    /// # Examples
    /// ```
    /// use keyword_scripts::{Dataset, ExampleTable};
    ///
    /// let dataset = Dataset::new("first", [("B", "smith"), ("A", "5")]);
    /// let table = ExampleTable::from_dataset(&dataset);
    /// assert_eq!(table.tag(), "@first");
    /// assert_eq!(table.header_row(), "| A | B |");
    /// assert_eq!(table.value_row(), "| 5 | \"smith\" |");
    /// ```
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut entries: Vec<_> = dataset.values().iter().collect();
        entries.sort_by(|(left, _), (right, _)| left.cmp(right));
        let (columns, cells): (Vec<String>, Vec<String>) = entries
            .into_iter()
            .map(|(name, value)| (name.clone(), format_cell(value)))
            .unzip();
        Self {
            tag: dataset.tag(),
            columns,
            cells,
        }
    }

    /// Tag line identifying the dataset.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Sorted parameter names.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Pipe-delimited header row.
    #[must_use]
    pub fn header_row(&self) -> String {
        pipe_row(&self.columns)
    }

    /// Pipe-delimited value row, aligned with [`header_row`](Self::header_row).
    #[must_use]
    pub fn value_row(&self) -> String {
        pipe_row(&self.cells)
    }
}

fn pipe_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_name_order_not_insertion_order() {
        let forward = Dataset::new("d", [("alpha", "1"), ("beta", "x"), ("gamma", "2.5")]);
        let backward = Dataset::new("d", [("gamma", "2.5"), ("beta", "x"), ("alpha", "1")]);
        let table = ExampleTable::from_dataset(&forward);
        assert_eq!(table, ExampleTable::from_dataset(&backward));
        assert_eq!(table.header_row(), "| alpha | beta | gamma |");
        assert_eq!(table.value_row(), "| 1 | \"x\" | 2.5 |");
    }

    #[test]
    fn cell_values_are_trimmed() {
        let dataset = Dataset::new("padded set", [("login", "  root  "), ("pin", " 0042 ")]);
        let table = ExampleTable::from_dataset(&dataset);
        assert_eq!(table.tag(), "@padded_set");
        assert_eq!(table.value_row(), "| \"root\" | 0042 |");
    }

    #[test]
    fn uppercase_names_sort_before_lowercase() {
        let dataset = Dataset::new("d", [("b", "1"), ("A", "2")]);
        let table = ExampleTable::from_dataset(&dataset);
        assert_eq!(table.columns(), &["A".to_string(), "b".to_string()]);
    }
}
