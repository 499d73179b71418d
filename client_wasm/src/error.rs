use wasm_bindgen::JsValue;

/// Failures surfaced to JavaScript
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("client not initialized")]
    NotInitialized,

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no WebGPU adapter available")]
    NoAdapter,

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no texture formats")]
    NoSurfaceFormat,

    #[error("failed to acquire frame: {0}")]
    Frame(#[from] wgpu::SurfaceError),

    #[error(transparent)]
    Input(#[from] game_core::InputError),
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
