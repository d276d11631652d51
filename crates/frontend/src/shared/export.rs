/// Скачивание файлов, полученных от сервера (Excel выгрузка списка)
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::unified_list::ListError;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Имя файла выгрузки для ресурса
pub fn export_file_name(mode: &str) -> String {
    format!("{}_list.xlsx", mode)
}

/// Сохраняет байты ответа как файл через временную ссылку
pub fn download_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), ListError> {
    let blob = create_blob(bytes, mime)?;
    download_blob(&blob, filename)
}

/// Создает Blob из бинарных данных
fn create_blob(bytes: &[u8], mime: &str) -> Result<Blob, ListError> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| ListError::Dom(format!("Failed to create blob: {:?}", e)))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), ListError> {
    let window = web_sys::window().ok_or_else(|| ListError::Dom("No window object".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ListError::Dom("No document object".into()))?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| ListError::Dom(format!("Failed to create object URL: {:?}", e)))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| ListError::Dom(format!("Failed to create anchor: {:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| ListError::Dom(format!("Failed to cast to anchor: {:?}", e)))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| ListError::Dom(format!("Failed to set style: {:?}", e)))?;

    // Ссылка должна быть в DOM на время клика
    let body = document
        .body()
        .ok_or_else(|| ListError::Dom("No body element".into()))?;
    body.append_child(&anchor)
        .map_err(|e| ListError::Dom(format!("Failed to append anchor: {:?}", e)))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| ListError::Dom(format!("Failed to remove anchor: {:?}", e)))?;

    // URL освобождаем сразу после клика
    Url::revoke_object_url(&url)
        .map_err(|e| ListError::Dom(format!("Failed to revoke URL: {:?}", e)))?;

    Ok(())
}
