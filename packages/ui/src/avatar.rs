//! Avatar selection.
//!
//! The chosen image never leaves the browser: it is turned into an object URL
//! and only that reference is stored on the profile.

/// Object URL for the first file selected in the `<input type="file">` with
/// the given element id.
#[cfg(target_arch = "wasm32")]
pub fn object_url_from_input(input_id: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let input = document
        .get_element_by_id(input_id)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    let file = input.files()?.get(0)?;
    match web_sys::Url::create_object_url_with_blob(&file) {
        Ok(url) => {
            tracing::debug!("Avatar {} -> {}", file.name(), url);
            Some(url)
        }
        Err(e) => {
            tracing::warn!("Could not create object URL: {:?}", e);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn object_url_from_input(_input_id: &str) -> Option<String> {
    None
}
