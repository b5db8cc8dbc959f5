use super::*;

fn bob() -> StudentRecord {
    StudentRecord {
        id: 9,
        name: "Bob".to_owned(),
        roll_no: 12,
        age: 10,
        grade: "5A".to_owned(),
    }
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn editor_starts_closed() {
    let editor = EditorState::default();
    assert!(!editor.open);
    assert_eq!(editor.mode, EditorMode::Create);
}

#[test]
fn open_for_create_clears_the_form() {
    let mut editor = EditorState::default();
    editor.open_for_edit(&bob());

    editor.open_for_create();

    assert!(editor.open);
    assert_eq!(editor.mode, EditorMode::Create);
    assert_eq!(editor.form, StudentForm::default());
    assert_eq!(editor.editing_id, None);
}

#[test]
fn open_for_edit_binds_a_copy_of_the_record() {
    let mut editor = EditorState::default();
    editor.open_for_edit(&bob());

    assert!(editor.open);
    assert_eq!(editor.mode, EditorMode::Edit);
    assert_eq!(editor.editing_id, Some(9));
    assert_eq!(editor.form.id, "9");
    assert_eq!(editor.form.name, "Bob");
    assert_eq!(editor.form.roll_no, "12");
    assert_eq!(editor.form.age, "10");
    assert_eq!(editor.form.grade, "5A");
}

#[test]
fn close_keeps_entered_values() {
    let mut editor = EditorState::default();
    editor.open_for_create();
    editor.form.name = "half-typed".to_owned();

    editor.close();

    assert!(!editor.open);
    assert_eq!(editor.form.name, "half-typed");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_form_produces_a_draft_without_the_id() {
    let form = StudentForm {
        id: "999".to_owned(),
        name: "Bob".to_owned(),
        roll_no: "12".to_owned(),
        age: "10".to_owned(),
        grade: "5A".to_owned(),
    };

    let draft = form.to_draft().expect("valid form");
    assert_eq!(
        draft,
        StudentDraft {
            name: "Bob".to_owned(),
            roll_no: 12,
            age: 10,
            grade: "5A".to_owned(),
        }
    );
}

#[test]
fn every_field_is_mandatory() {
    let mut form = StudentForm {
        id: String::new(),
        name: "Bob".to_owned(),
        roll_no: "12".to_owned(),
        age: "10".to_owned(),
        grade: "5A".to_owned(),
    };
    assert!(form.to_draft().is_ok());

    form.name = "   ".to_owned();
    assert_eq!(form.to_draft(), Err(FormError::Missing("name")));

    form.name = "Bob".to_owned();
    form.grade = String::new();
    assert_eq!(form.to_draft(), Err(FormError::Missing("grade")));

    form.grade = "5A".to_owned();
    form.age = String::new();
    assert_eq!(form.to_draft(), Err(FormError::Missing("age")));
}

#[test]
fn numeric_fields_reject_text() {
    let form = StudentForm {
        id: String::new(),
        name: "Bob".to_owned(),
        roll_no: "twelve".to_owned(),
        age: "10".to_owned(),
        grade: "5A".to_owned(),
    };
    assert_eq!(form.to_draft(), Err(FormError::NotNumeric("roll no")));
}

#[test]
fn entered_values_are_trimmed() {
    let form = StudentForm {
        id: String::new(),
        name: "  Bob  ".to_owned(),
        roll_no: " 12 ".to_owned(),
        age: "10".to_owned(),
        grade: " 5A".to_owned(),
    };

    let draft = form.to_draft().expect("valid form");
    assert_eq!(draft.name, "Bob");
    assert_eq!(draft.roll_no, 12);
    assert_eq!(draft.grade, "5A");
}

#[test]
fn form_round_trips_record_values() {
    let record = bob();
    let form = StudentForm::from_record(&record);
    let draft = form.to_draft().expect("bound form is valid");

    // Server-assigned id aside, the draft equals the source record.
    assert_eq!(draft.name, record.name);
    assert_eq!(draft.roll_no, record.roll_no);
    assert_eq!(draft.age, record.age);
    assert_eq!(draft.grade, record.grade);
}
