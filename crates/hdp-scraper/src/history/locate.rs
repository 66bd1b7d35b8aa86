//! Locates AJAX fragment URLs embedded in the page's inline scripts.
//!
//! This is the only place that sniffs script text for fragment URLs. Swap the
//! strategy here (for instance for a parse of the embedded module config)
//! without touching callers.

use regex::Regex;

/// Finds the root-relative `AjaxRender.htm` URL registered for `module_label`.
///
/// The URL must be immediately followed by `",jsModule:"<module_label>`.
/// Returns `None` when no such URL exists.
pub fn locate_fragment_url(page_text: &str, module_label: &str) -> Option<String> {
    let pattern = format!(
        r#"(/AjaxRender\.htm\?encparams=[\w\-~=]+&rwebid=\d+&rhost=\d)",jsModule:"{}"#,
        regex::escape(module_label)
    );
    let re = Regex::new(&pattern).expect("valid fragment url regex");
    re.captures(page_text).map(|caps| caps[1].to_owned())
}
