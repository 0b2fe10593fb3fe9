//! Browser-side image handling: decoding for dimensions, preview reads and
//! animation frames.
//!
//! Each helper turns a one-shot DOM callback into a future with a
//! `oneshot` channel.

use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileList, FileReader, HtmlImageElement, Url};

use crate::error::{AppError, AppResult, ValidationError};
use crate::types::{Dimensions, SelectedFile};

/// Wrap a browser file.
pub fn selected_file(file: File) -> SelectedFile<File> {
    SelectedFile::new(file.name(), file.type_(), file)
}

/// Files of a picker or drop, in order.
pub fn files_from_list(list: Option<FileList>) -> Vec<SelectedFile<File>> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(selected_file)
        .collect()
}

/// Decode the file in an `<img>` and read its natural size.
pub async fn probe_dimensions(file: &File) -> Result<Dimensions, ValidationError> {
    let url = Url::create_object_url_with_blob(file)
        .map_err(|e| ValidationError::Undecodable(format!("{:?}", e)))?;
    let result = decode(&url).await;
    if let Err(e) = Url::revoke_object_url(&url) {
        log::warn!("Failed to revoke object URL: {:?}", e);
    }
    result
}

async fn decode(url: &str) -> Result<Dimensions, ValidationError> {
    let img = HtmlImageElement::new()
        .map_err(|e| ValidationError::Undecodable(format!("{:?}", e)))?;
    let (tx, rx) = oneshot::channel::<bool>();
    let tx = std::rc::Rc::new(std::cell::RefCell::new(Some(tx)));

    let on_load = {
        let tx = tx.clone();
        Closure::once(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        })
    };
    let on_error = Closure::once(move || {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(false);
        }
    });

    img.set_onload(Some(on_load.as_ref().unchecked_ref()));
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    img.set_src(url);

    let loaded = rx.await.unwrap_or(false);
    img.set_onload(None);
    img.set_onerror(None);

    if !loaded {
        return Err(ValidationError::Undecodable("browser failed to decode image".into()));
    }
    Ok(Dimensions::new(img.natural_width(), img.natural_height()))
}

/// Read the file as a data URL for the preview `<img>`.
pub async fn read_data_url(file: &File) -> AppResult<String> {
    let reader = FileReader::new().map_err(|e| AppError::Preview(format!("{:?}", e)))?;
    let (tx, rx) = oneshot::channel::<()>();

    let on_load_end = Closure::once(move || {
        let _ = tx.send(());
    });
    reader.set_onloadend(Some(on_load_end.as_ref().unchecked_ref()));
    if let Err(e) = reader.read_as_data_url(file) {
        reader.set_onloadend(None);
        return Err(AppError::Preview(format!("Failed to read file: {:?}", e)));
    }

    rx.await
        .map_err(|_| AppError::Preview("reader dropped".into()))?;
    reader.set_onloadend(None);

    reader
        .result()
        .map_err(|e| AppError::Preview(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| AppError::Preview("result is not a string".into()))
}

/// Resolve on the next `requestAnimationFrame` tick.
pub async fn next_animation_frame() {
    let (tx, rx) = oneshot::channel::<()>();
    let callback = Closure::once(move || {
        let _ = tx.send(());
    });

    let scheduled = web_sys::window()
        .map(|w| w.request_animation_frame(callback.as_ref().unchecked_ref()).is_ok())
        .unwrap_or(false);
    if scheduled {
        let _ = rx.await;
    }
}
