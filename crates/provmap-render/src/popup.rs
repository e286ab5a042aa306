//! Popup content for markers

use base64::Engine as _;
use htmlize::escape_text;
use provmap_domain::PopupEntry;

/// HTML fragment listing every event at a marker
///
/// Entries are separated by a blank line; all text is escaped.
pub fn popup_html(entries: &[PopupEntry]) -> String {
    let body = entries
        .iter()
        .map(|entry| {
            format!(
                "<b>{}. {}</b><br>{}<br>{}<br><i>{}</i>",
                entry.step,
                escape_text(entry.location.as_str()),
                escape_text(entry.action.as_str()),
                escape_text(entry.owner.as_str()),
                escape_text(entry.date.as_str()),
            )
        })
        .collect::<Vec<_>>()
        .join("<br><br>");

    format!("<div style='width:fit-content; max-width:400px; white-space:normal;'>{body}</div>")
}

/// `data:` URI of a standalone document showing the popup
///
/// Popups live in an iframe so their markup cannot leak into the page.
pub fn popup_iframe_src(entries: &[PopupEntry]) -> String {
    let document = format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head>\
         <body style=\"margin:0;font-family:sans-serif;font-size:13px\">{}</body></html>",
        popup_html(entries)
    );
    let encoded = base64::engine::general_purpose::STANDARD.encode(document.as_bytes());
    format!("data:text/html;charset=utf-8;base64,{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(step: usize, location: &str, action: &str) -> PopupEntry {
        PopupEntry {
            step,
            location: location.to_string(),
            action: action.to_string(),
            owner: "Owner".to_string(),
            date: "1900".to_string(),
        }
    }

    #[test]
    fn test_popup_html_joins_entries() {
        let html = popup_html(&[entry(1, "A", "Create"), entry(3, "A", "Sell")]);
        assert!(html.starts_with("<div style='width:fit-content"));
        assert!(html.contains("<b>1. A</b><br>Create<br>Owner<br><i>1900</i><br><br><b>3. A</b>"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_popup_html_escapes_text() {
        let html = popup_html(&[entry(1, "<script>alert(1)</script>", "Sold & kept")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Sold &amp; kept"));
    }

    #[test]
    fn test_iframe_src_is_base64_document() {
        let src = popup_iframe_src(&[entry(2, "Rome", "Loaned")]);
        let encoded = src
            .strip_prefix("data:text/html;charset=utf-8;base64,")
            .unwrap();
        let decoded = base64::engine::general_purpose::STANDARD.decode(encoded).unwrap();
        let document = String::from_utf8(decoded).unwrap();
        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains("<b>2. Rome</b>"));
    }
}
