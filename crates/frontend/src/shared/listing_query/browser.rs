use contracts::shared::listing::UrlAccess;
use wasm_bindgen::JsValue;
use web_sys::window;

/// `UrlAccess` поверх `window.location` / `window.history`.
///
/// Без `window` (например, в тестах вне браузера) путь и query пустые,
/// а `replace` ничего не делает.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserUrl;

impl UrlAccess for BrowserUrl {
    fn current_path(&self) -> String {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn current_query(&self) -> String {
        window()
            .and_then(|w| w.location().search().ok())
            .map(|search| search.trim_start_matches('?').to_string())
            .unwrap_or_default()
    }

    fn replace(&self, path: &str, query: &str) {
        let Some(w) = window() else { return };
        // Якорь страницы не трогаем
        let hash = w.location().hash().unwrap_or_default();
        let url = if query.is_empty() {
            format!("{}{}", path, hash)
        } else {
            format!("{}?{}{}", path, query, hash)
        };

        match w.history() {
            Ok(history) => {
                if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                    log::warn!("replaceState failed for '{}': {:?}", url, e);
                }
            }
            Err(e) => log::warn!("window.history unavailable: {:?}", e),
        }
    }
}
