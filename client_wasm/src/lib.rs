//! WebGPU client for Pong
//!
//! Engine-free rendering using wgpu for WebGPU API.
//! Canvas surfaces only exist on the wasm32 target.

#![cfg(target_arch = "wasm32")]

mod camera;
mod error;
mod input;
mod mesh;
mod renderer;

use std::cell::RefCell;

use error::ClientError;
use game_core::{Config, FrameInput, Key, KeyboardState, Session};
use renderer::Renderer;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Main client state
struct Client {
    session: Session,
    keyboard: KeyboardState,
    renderer: Renderer,
}

impl Client {
    async fn new(canvas: HtmlCanvasElement) -> Result<Self, ClientError> {
        let config = Config::new();
        let renderer = Renderer::new(canvas, &config).await?;
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;

        Ok(Self {
            session: Session::new(config, seed),
            keyboard: KeyboardState::new(),
            renderer,
        })
    }

    /// One animation frame: poll input, step the session, draw
    fn frame(&mut self) -> Result<(), ClientError> {
        let input = FrameInput {
            keyboard: self.keyboard.clone(),
            gamepad: input::poll_gamepad(),
        };

        self.session.frame(&input);
        self.renderer.draw(&self.session)
    }
}

thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> Result<T, ClientError>) -> Result<T, JsValue> {
    CLIENT.with(|cell| {
        let mut slot = cell.borrow_mut();
        let client = slot.as_mut().ok_or(ClientError::NotInitialized)?;
        Ok(f(client)?)
    })
}

fn init_tracing() {
    let filter = EnvFilter::new("info,wgpu=error,naga=warn");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    // A second init (hot reload) keeps the first subscriber
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> js_sys::Promise {
    console_error_panic_hook::set_once();
    init_tracing();

    wasm_bindgen_futures::future_to_promise(async move {
        let client = Client::new(canvas).await?;
        info!(decoration = %client.session.decoration().label(), "Client ready");
        CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
        Ok(JsValue::UNDEFINED)
    })
}

/// Feed a `KeyboardEvent.key`; returns true when the game uses the key
#[wasm_bindgen]
pub fn key_down(key: &str) -> Result<bool, JsValue> {
    let Some(key) = Key::from_dom_key(key) else {
        return Ok(false);
    };
    with_client(|client| {
        client.keyboard.press(key);
        Ok(true)
    })
}

#[wasm_bindgen]
pub fn key_up(key: &str) -> Result<bool, JsValue> {
    let Some(key) = Key::from_dom_key(key) else {
        return Ok(false);
    };
    with_client(|client| {
        client.keyboard.release(key);
        Ok(true)
    })
}

/// Release every key, e.g. when the page loses focus
#[wasm_bindgen]
pub fn clear_keys() -> Result<(), JsValue> {
    with_client(|client| {
        client.keyboard.clear();
        Ok(())
    })
}

#[wasm_bindgen]
pub fn render_frame() -> Result<(), JsValue> {
    with_client(|client| client.frame())
}

/// `[left, right]`
#[wasm_bindgen]
pub fn scores() -> Result<Vec<u8>, JsValue> {
    with_client(|client| {
        let score = client.session.score();
        Ok(vec![score.left, score.right])
    })
}

/// Game-over message, empty while playing
#[wasm_bindgen]
pub fn status_text() -> Result<String, JsValue> {
    with_client(|client| Ok(client.session.status_text()))
}

#[wasm_bindgen]
pub fn decoration_label() -> Result<String, JsValue> {
    with_client(|client| Ok(client.session.decoration().label()))
}

/// Point a logical gamepad button (e.g. `"START"`) at a raw button index
#[wasm_bindgen]
pub fn set_button_mapping(name: &str, index: usize) -> Result<(), JsValue> {
    with_client(|client| {
        client.session.set_button_mapping(name, index).map_err(|e| {
            warn!("{}", e);
            ClientError::from(e)
        })?;
        Ok(())
    })
}
