//! 头像上传前的浏览器端压缩
//!
//! 流程：object URL -> `<img>` 解码 -> canvas 缩放 -> `toBlob` -> 重新包装为 `File`。
//! 任一步失败都返回原文件，由服务器端决定是否接受。

use bookreview_shared::image::{MAX_HEIGHT, MAX_WIDTH, QUALITY, fit_within, output_mime};
use js_sys::{Array, Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, CanvasRenderingContext2d, File, FilePropertyBag, HtmlCanvasElement, HtmlImageElement, Url,
};

/// 压缩头像；失败时返回原文件
pub async fn compress_image(file: &File) -> File {
    match try_compress(file).await {
        Ok(compressed) => {
            log::debug!(
                "avatar compressed: {} bytes -> {} bytes",
                file.size(),
                compressed.size()
            );
            compressed
        }
        Err(e) => {
            log::warn!("avatar compression failed, uploading file as picked: {:?}", e);
            file.clone()
        }
    }
}

async fn try_compress(file: &File) -> Result<File, JsValue> {
    let object_url = Url::create_object_url_with_blob(file)?;
    let loaded = load_image(&object_url).await;
    let _ = Url::revoke_object_url(&object_url);
    let image = loaded?;

    let (width, height) = fit_within(
        image.natural_width(),
        image.natural_height(),
        MAX_WIDTH,
        MAX_HEIGHT,
    );

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;
    context.draw_image_with_html_image_element_and_dw_and_dh(
        &image,
        0.0,
        0.0,
        f64::from(width),
        f64::from(height),
    )?;

    let mime = output_mime(&file.type_(), file.size());
    let blob = canvas_to_blob(&canvas, &mime).await?;

    let options = FilePropertyBag::new();
    options.set_type(&mime);
    File::new_with_blob_sequence_and_options(&Array::of1(&blob), &file.name(), &options)
}

/// 等待 `<img>` 解码完成
async fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let onload = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("image decode failed"));
        });
        image.set_onload(Some(onload.unchecked_ref()));
        image.set_onerror(Some(onerror.unchecked_ref()));
    });

    image.set_src(src);
    let result = JsFuture::from(promise).await;
    image.set_onload(None);
    image.set_onerror(None);
    result?;

    Ok(image)
}

async fn canvas_to_blob(canvas: &HtmlCanvasElement, mime: &str) -> Result<Blob, JsValue> {
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let callback = Closure::once_into_js(move |blob: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &blob);
        });
        if let Err(e) = canvas.to_blob_with_type_and_encoder_options(
            callback.unchecked_ref(),
            mime,
            &JsValue::from_f64(QUALITY),
        ) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    // toBlob 在编码失败时回调 null
    JsFuture::from(promise).await?.dyn_into::<Blob>()
}
