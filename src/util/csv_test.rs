use super::*;

fn record(id: i64, name: &str, roll_no: i64, age: i64, grade: &str) -> StudentRecord {
    StudentRecord {
        id,
        name: name.to_owned(),
        roll_no,
        age,
        grade: grade.to_owned(),
    }
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn n_records_produce_n_plus_one_lines() {
    let records = vec![
        record(1, "Alice", 7, 11, "5A"),
        record(2, "Bob", 12, 10, "5A"),
        record(3, "Cara", 1, 12, "6B"),
    ];

    let csv = page_to_csv(&records);
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn columns_follow_the_fixed_header_order() {
    let csv = page_to_csv(&[record(2, "Bob", 12, 10, "5A")]);
    assert_eq!(csv, "ID,Name,Roll No,Age,Grade\n2,Bob,12,10,5A");
}

#[test]
fn empty_page_serializes_to_header_only() {
    // The UI never reaches this for an empty page (it alerts instead),
    // but the serializer itself stays total.
    assert_eq!(page_to_csv(&[]), CSV_HEADER);
}

// =============================================================
// File name
// =============================================================

#[test]
fn filename_embeds_the_date() {
    assert_eq!(
        export_filename("2026-08-08"),
        "students_data_2026-08-08.csv"
    );
}
