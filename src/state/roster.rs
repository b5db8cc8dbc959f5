#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use crate::net::types::{StudentPage, StudentRecord};

/// Records per page. The server caps pages at this size.
pub const PAGE_SIZE: u32 = 10;

/// Columns the student table can sort on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Id,
    Name,
    RollNo,
    Age,
    Grade,
}

impl SortField {
    /// All columns in display order.
    pub const ALL: [Self; 5] = [Self::Id, Self::Name, Self::RollNo, Self::Age, Self::Grade];

    /// The `sort_by` query-parameter value.
    pub fn query_name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::RollNo => "roll_no",
            Self::Age => "age",
            Self::Grade => "grade",
        }
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "NAME",
            Self::RollNo => "ROLL NO",
            Self::Age => "AGE",
            Self::Grade => "GRADE",
        }
    }
}

/// Sort direction for the active column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The `sort_order` query-parameter value.
    pub fn query_name(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Header indicator for the active sort column.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "\u{25b2}",
            Self::Desc => "\u{25bc}",
        }
    }
}

/// Paging, sorting, and filter parameters driving the next list fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub limit: u32,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub name_filter: String,
    pub grade_filter: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PAGE_SIZE,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
            name_filter: String::new(),
            grade_filter: String::new(),
        }
    }
}

impl QueryState {
    /// Sort by `field`: repeated requests on the active column flip the
    /// direction, a new column starts ascending.
    pub fn sort_by(&mut self, field: SortField) {
        if self.sort_by == field {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_by = field;
            self.sort_order = SortOrder::Asc;
        }
    }

    /// Apply submitted filters and jump back to the first page.
    pub fn search(&mut self, name: String, grade: String) {
        self.name_filter = name;
        self.grade_filter = grade;
        self.page = 1;
    }
}

/// Student table state: the loaded page, totals, and row selection.
///
/// Mutating methods only update in-memory state; the owning component
/// issues the follow-up fetch explicitly, so every network round trip
/// has a visible call site.
#[derive(Clone, Debug, Default)]
pub struct RosterState {
    pub records: Vec<StudentRecord>,
    pub total_records: u32,
    pub selected_id: Option<i64>,
    pub loading: bool,
    pub query: QueryState,
}

impl RosterState {
    /// Number of pages for the current total. Zero when the result set
    /// is empty.
    pub fn total_pages(&self) -> u32 {
        self.total_records.div_ceil(self.query.limit)
    }

    /// Move to page `n` if it is within `[1, total_pages]`.
    ///
    /// Returns whether the page changed; out-of-range requests are
    /// no-ops so callers skip the refetch.
    pub fn set_page(&mut self, n: u32) -> bool {
        if n < 1 || n > self.total_pages() || n == self.query.page {
            return false;
        }
        self.query.page = n;
        true
    }

    /// See [`QueryState::sort_by`].
    pub fn sort_by(&mut self, field: SortField) {
        self.query.sort_by(field);
    }

    /// See [`QueryState::search`].
    pub fn search(&mut self, name: String, grade: String) {
        self.query.search(name, grade);
    }

    /// Select the row with `id`. Idempotent.
    pub fn select(&mut self, id: i64) {
        self.selected_id = Some(id);
    }

    /// The currently selected record, looked up in the loaded page.
    pub fn selected_record(&self) -> Option<&StudentRecord> {
        let id = self.selected_id?;
        self.records.iter().find(|r| r.id == id)
    }

    /// Replace the displayed page with a fetch result.
    ///
    /// A selection whose id is no longer present in the fresh page is
    /// dropped, so `selected_record` stays truthful after refetches.
    pub fn apply_page(&mut self, page: StudentPage) {
        self.records = page.students;
        self.total_records = page.total_records;
        self.loading = false;
        if let Some(id) = self.selected_id {
            if !self.records.iter().any(|r| r.id == id) {
                self.selected_id = None;
            }
        }
    }
}
