#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::net::types::{StudentDraft, StudentRecord};

/// Whether the editor creates a new record or updates an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Create,
    Edit,
}

/// Text-typed fields bound to the editor inputs.
///
/// Everything is kept as entered; conversion and validation happen in
/// [`StudentForm::to_draft`] when the form is submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub id: String,
    pub name: String,
    pub roll_no: String,
    pub age: String,
    pub grade: String,
}

/// A form field failed validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a number")]
    NotNumeric(&'static str),
}

impl StudentForm {
    /// Bind a copy of an existing record for editing.
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            roll_no: record.roll_no.to_string(),
            age: record.age.to_string(),
            grade: record.grade.clone(),
        }
    }

    /// Validate the entered values and convert them to a request body.
    ///
    /// All fields are mandatory; `roll_no` and `age` must parse as
    /// numbers. The id field never reaches the draft: the server
    /// assigns it on create and the URL addresses it on update.
    pub fn to_draft(&self) -> Result<StudentDraft, FormError> {
        let name = required_text("name", &self.name)?;
        let roll_no = required_number("roll no", &self.roll_no)?;
        let age = required_number("age", &self.age)?;
        let grade = required_text("grade", &self.grade)?;

        Ok(StudentDraft { name, roll_no, age, grade })
    }
}

fn required_text(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(trimmed.to_owned())
}

fn required_number(field: &'static str, value: &str) -> Result<i64, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing(field));
    }
    trimmed.parse().map_err(|_| FormError::NotNumeric(field))
}

/// Modal editor state for the add/edit workflow.
#[derive(Clone, Debug, Default)]
pub struct EditorState {
    pub open: bool,
    pub mode: EditorMode,
    pub form: StudentForm,
    /// Id of the record being edited; `None` in create mode.
    pub editing_id: Option<i64>,
}

impl EditorState {
    /// Open with an empty form in create mode.
    pub fn open_for_create(&mut self) {
        self.mode = EditorMode::Create;
        self.form = StudentForm::default();
        self.editing_id = None;
        self.open = true;
    }

    /// Open in edit mode bound to a copy of `record`.
    ///
    /// The caller resolves the selection first; an empty selection is
    /// reported to the user before this is reached.
    pub fn open_for_edit(&mut self, record: &StudentRecord) {
        self.mode = EditorMode::Edit;
        self.form = StudentForm::from_record(record);
        self.editing_id = Some(record.id);
        self.open = true;
    }

    /// Close, keeping the entered values.
    pub fn close(&mut self) {
        self.open = false;
    }
}
