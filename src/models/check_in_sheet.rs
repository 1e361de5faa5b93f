//! In-memory check-in list: one row per connection plus a checkbox per row.
//! The checkbox state lives only as long as the sheet itself.

use super::connection::Connection;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub contact_id: Option<String>,
    pub name: String,
    pub last_checked: String,
    pub next_check_in: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CheckInSheet {
    rows: Vec<SheetRow>,
    checked: Vec<bool>,
}

impl CheckInSheet {
    pub fn from_connections(connections: &[Connection]) -> Self {
        let rows: Vec<SheetRow> = connections
            .iter()
            .map(|c| SheetRow {
                contact_id: Some(c.contact_id.clone()),
                name: c.name.clone(),
                last_checked: c.last_check_in_str(),
                next_check_in: Some(c.check_in_date.format("%Y-%m-%d").to_string()),
            })
            .collect();

        let checked = vec![false; rows.len()];
        Self { rows, checked }
    }

    /// Build a sheet from positional arrays (names, former check-ins and,
    /// optionally, next check-ins). All arrays must have the same length.
    pub fn from_parallel(
        names: &[&str],
        former_check_ins: &[&str],
        next_check_ins: Option<&[&str]>,
    ) -> AppResult<Self> {
        if names.len() != former_check_ins.len() {
            return Err(AppError::Sheet(format!(
                "{} names but {} former check-ins",
                names.len(),
                former_check_ins.len()
            )));
        }
        if let Some(next) = next_check_ins
            && next.len() != names.len()
        {
            return Err(AppError::Sheet(format!(
                "{} names but {} next check-ins",
                names.len(),
                next.len()
            )));
        }

        let rows: Vec<SheetRow> = names
            .iter()
            .enumerate()
            .map(|(i, name)| SheetRow {
                contact_id: None,
                name: name.to_string(),
                last_checked: former_check_ins[i].to_string(),
                next_check_in: next_check_ins.map(|n| n[i].to_string()),
            })
            .collect();

        let checked = vec![false; rows.len()];
        Ok(Self { rows, checked })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[SheetRow] {
        &self.rows
    }

    /// Flip the checkbox of row `index` and return its new value.
    pub fn toggle(&mut self, index: usize) -> AppResult<bool> {
        let len = self.checked.len();
        let flag = self
            .checked
            .get_mut(index)
            .ok_or_else(|| AppError::Sheet(format!("row {} out of range (0..{})", index, len)))?;
        *flag = !*flag;
        Ok(*flag)
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// Indices of the rows currently checked, in row order.
    pub fn checked(&self) -> Vec<usize> {
        self.checked
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.then_some(i))
            .collect()
    }

    /// Contact ids of checked rows (rows built from parallel arrays have none).
    pub fn checked_contact_ids(&self) -> Vec<String> {
        self.checked()
            .into_iter()
            .filter_map(|i| self.rows[i].contact_id.clone())
            .collect()
    }
}
