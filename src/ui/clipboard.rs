//! Copying plain text to the clipboard
//!
//! Tries the async Clipboard API first. Insecure contexts and older browsers
//! don't expose it, so the legacy `execCommand("copy")` path on an off-screen
//! textarea is the fallback.

#[cfg(not(feature = "ssr"))]
use leptos::logging::warn;

/// How the text reached the clipboard, if it did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// `navigator.clipboard.writeText` resolved
    Clipboard,
    /// The textarea + `execCommand` fallback reported success
    Legacy,
    /// Neither path worked
    Failed,
}

impl CopyOutcome {
    pub fn is_copied(self) -> bool {
        !matches!(self, CopyOutcome::Failed)
    }
}

pub async fn copy_text(text: &str) -> CopyOutcome {
    #[cfg(not(feature = "ssr"))]
    {
        if write_with_clipboard_api(text).await {
            return CopyOutcome::Clipboard;
        }
        if write_with_textarea(text) {
            return CopyOutcome::Legacy;
        }
        warn!("clipboard copy failed");
        CopyOutcome::Failed
    }

    #[cfg(feature = "ssr")]
    {
        let _ = text;
        CopyOutcome::Failed
    }
}

#[cfg(not(feature = "ssr"))]
async fn write_with_clipboard_api(text: &str) -> bool {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let Some(window) = web_sys::window() else {
        return false;
    };

    // `navigator.clipboard` is undefined outside secure contexts
    let navigator = window.navigator();
    let clipboard = match js_sys::Reflect::get(&navigator, &"clipboard".into()) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return false,
    };
    let Ok(clipboard) = clipboard.dyn_into::<web_sys::Clipboard>() else {
        return false;
    };

    match JsFuture::from(clipboard.write_text(text)).await {
        Ok(_) => true,
        Err(err) => {
            warn!("clipboard API rejected write: {:?}", err);
            false
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn write_with_textarea(text: &str) -> bool {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Ok(textarea) = document
        .create_element("textarea")
        .map_err(|_| ())
        .and_then(|el| el.dyn_into::<web_sys::HtmlTextAreaElement>().map_err(|_| ()))
    else {
        return false;
    };

    textarea.set_value(text);
    let _ = textarea.set_attribute("readonly", "");
    let _ = textarea.style().set_property("position", "fixed");
    let _ = textarea.style().set_property("left", "-9999px");
    let _ = textarea.style().set_property("opacity", "0");

    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();

    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);

    textarea.remove();
    copied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_failed_copy_is_not_copied() {
        assert!(CopyOutcome::Clipboard.is_copied());
        assert!(CopyOutcome::Legacy.is_copied());
        assert!(!CopyOutcome::Failed.is_copied());
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_copy_without_browser_fails() {
        // The server has no clipboard, so the page must not confirm a copy
        let outcome = copy_text("Plan Estudio - $3,000").await;
        assert_eq!(outcome, CopyOutcome::Failed);
        assert!(!outcome.is_copied());
    }
}
