//! CSV export of the loaded student page.
//!
//! Serialization is plain string building so it stays testable on the
//! host; only the download itself touches browser APIs. Fields are
//! comma-joined without quoting, so embedded commas shift columns — a
//! known limitation of the export format.

#[cfg(test)]
#[path = "csv_test.rs"]
mod csv_test;

use crate::net::types::StudentRecord;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Fixed header row, in display column order.
pub const CSV_HEADER: &str = "ID,Name,Roll No,Age,Grade";

/// Serialize the loaded records: the header plus one row per record.
///
/// Callers check for an empty page first and surface a "no data"
/// message instead of producing a header-only file.
pub fn page_to_csv(records: &[StudentRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_owned());
    for r in records {
        lines.push(format!("{},{},{},{},{}", r.id, r.name, r.roll_no, r.age, r.grade));
    }
    lines.join("\n")
}

/// Export file name for a given `YYYY-MM-DD` date.
pub fn export_filename(date: &str) -> String {
    format!("students_data_{date}.csv")
}

/// Today's date as `YYYY-MM-DD`, from the browser clock.
pub fn current_date() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.split('T').next().unwrap_or(&iso).to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Offer `content` as a downloadable file via a temporary object URL
/// and anchor element. No-op outside the browser.
pub fn download(filename: &str, content: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8;");
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };

        let Ok(link) = document
            .create_element("a")
            .map_err(|_| ())
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().map_err(|_| ()))
        else {
            let _ = web_sys::Url::revoke_object_url(&url);
            return;
        };

        link.set_href(&url);
        link.set_download(filename);
        if let Some(body) = document.body() {
            let _ = body.append_child(&link);
            link.click();
            link.remove();
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, content);
    }
}
