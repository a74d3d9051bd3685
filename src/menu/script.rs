//! Client-side code generated for menu actions.
//!
//! Every value spliced into generated code goes through [`encode`], and each
//! value has exactly one injection point in a fixed code template. The method
//! names (`closestAjaxTable`, `getSingleSelectedRowData`,
//! `showRemoteModalForRow`, `treeNodeToggleAll`) are the contract with the
//! browser-side table runtime and must not change.

use serde::Serialize;
use serde_json::Value;

/// Serialize `value` as JSON that is safe to embed in a `<script>` element or
/// in generated JavaScript.
///
/// On top of standard JSON string escaping (quotes, backslashes, control
/// characters), `<`, `>`, `&`, U+2028 and U+2029 are written as `\uXXXX`
/// escapes so the output can never contain `</script>`, `<!--` or a raw line
/// terminator. Those characters only occur inside JSON strings, so the
/// substitution keeps the text valid JSON that decodes to `value`.
pub fn encode<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value)?;
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Open a remote modal from the closest ajax table, not bound to a row.
pub fn remote_modal(
    title: &str,
    url: &str,
    dialog_parameters: Option<&Value>,
) -> Result<String, serde_json::Error> {
    Ok(format!(
        "var table = $(this).closestAjaxTable();\n\
         table.showRemoteModalForRow(null, {title}, {url}, {params});",
        title = encode(title)?,
        url = encode(url)?,
        params = encode(&dialog_parameters)?,
    ))
}

/// Open a remote modal for the single selected row; does nothing when no row
/// is selected. `title_template` and `url_template` are evaluated client side
/// against the row data.
pub fn remote_modal_for_selected_row(
    title_template: &str,
    url_template: &str,
    dialog_parameters: Option<&Value>,
) -> Result<String, serde_json::Error> {
    Ok(format!(
        "var table = $(this).closestAjaxTable();\n\
         var row = table.getSingleSelectedRowData();\n\
         row && table.showRemoteModalForRow(row, {title}, {url}, {params});",
        title = encode(title_template)?,
        url = encode(url_template)?,
        params = encode(&dialog_parameters)?,
    ))
}

/// Expand or collapse every node of the closest ajax table tree.
pub fn toggle_all_tree(level_member: &str) -> Result<String, serde_json::Error> {
    Ok(format!(
        "$(this).closestAjaxTable().treeNodeToggleAll({level})",
        level = encode(level_member)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== encode Tests ====================

    #[test]
    fn test_encode_plain_string() {
        assert_eq!(encode("Edit").unwrap(), r#""Edit""#);
    }

    #[test]
    fn test_encode_quotes_and_backslashes() {
        let encoded = encode(r#"say "hi" \ bye"#).unwrap();
        assert_eq!(encoded, r#""say \"hi\" \\ bye""#);
    }

    #[test]
    fn test_encode_script_close() {
        let encoded = encode("</script><script>alert(1)</script>").unwrap();
        assert!(!encoded.contains('<'));
        assert!(!encoded.contains('>'));
        let decoded: String = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, "</script><script>alert(1)</script>");
    }

    #[test]
    fn test_encode_line_terminators() {
        let encoded = encode("a\nb\u{2028}c\u{2029}d").unwrap();
        assert_eq!(encoded, "\"a\\nb\\u2028c\\u2029d\"");
    }

    #[test]
    fn test_encode_ampersand() {
        assert_eq!(encode("a&b").unwrap(), r#""a\u0026b""#);
    }

    #[test]
    fn test_encode_none_is_null() {
        let params: Option<&Value> = None;
        assert_eq!(encode(&params).unwrap(), "null");
    }

    #[test]
    fn test_encode_object() {
        let params = json!({ "size": "size-wide", "title": "<i>" });
        let encoded = encode(&params).unwrap();
        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, params);
    }

    // ==================== Code Template Tests ====================

    #[test]
    fn test_remote_modal_code() {
        let code = remote_modal("Add", "/admin/article/add", None).unwrap();
        assert_eq!(
            code,
            "var table = $(this).closestAjaxTable();\n\
             table.showRemoteModalForRow(null, \"Add\", \"/admin/article/add\", null);"
        );
    }

    #[test]
    fn test_remote_modal_code_with_parameters() {
        let params = json!({ "size": "size-wide" });
        let code = remote_modal("Add", "/add", Some(&params)).unwrap();
        assert!(code.ends_with(r#""/add", {"size":"size-wide"});"#));
    }

    #[test]
    fn test_selected_row_code_is_guarded() {
        let code = remote_modal_for_selected_row(
            "Edit <%-row.Title%>",
            "/admin/article/edit?id=<%-row.Id%>",
            None,
        )
        .unwrap();

        assert_eq!(
            code,
            "var table = $(this).closestAjaxTable();\n\
             var row = table.getSingleSelectedRowData();\n\
             row && table.showRemoteModalForRow(row, \"Edit \\u003c%-row.Title%\\u003e\", \
             \"/admin/article/edit?id=\\u003c%-row.Id%\\u003e\", null);"
        );
    }

    #[test]
    fn test_toggle_all_code() {
        let code = toggle_all_tree("Level").unwrap();
        assert_eq!(code, r#"$(this).closestAjaxTable().treeNodeToggleAll("Level")"#);
    }
}
