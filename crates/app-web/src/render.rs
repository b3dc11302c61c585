use cranium::{ImageBuffer, RenderState, ViewRenderer};
use wasm_bindgen::JsValue;

/// Delegates image export to a page-supplied callback.
pub struct JsRenderer {
    callback: js_sys::Function,
}

impl JsRenderer {
    pub fn new(callback: js_sys::Function) -> Self {
        Self { callback }
    }
}

impl ViewRenderer for JsRenderer {
    fn render_to_image(&mut self, state: &RenderState) -> anyhow::Result<ImageBuffer> {
        #[allow(deprecated)]
        let arg = JsValue::from_serde(state)?;
        let out = self
            .callback
            .call1(&JsValue::NULL, &arg)
            .map_err(|e| anyhow::anyhow!("export callback failed: {:?}", e))?;
        if out.is_undefined() || out.is_null() {
            anyhow::bail!("export callback returned nothing");
        }
        let bytes = js_sys::Uint8Array::new(&out).to_vec();
        Ok(ImageBuffer { bytes })
    }
}
