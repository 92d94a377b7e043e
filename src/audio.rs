//! Feedback tones and the looping background melody, via the Web Audio
//! API. Everything here is fire-and-forget presentation feedback; errors
//! are returned to the caller, which is free to drop them. Audio never
//! touches simulation state.

use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AudioContext, OscillatorType};

thread_local! {
    // One lazily-created context for the whole session; browsers cap
    // how many a page may hold.
    static AUDIO_CTX: RefCell<Option<AudioContext>> = const { RefCell::new(None) };
}

fn with_context<R>(f: impl FnOnce(&AudioContext) -> Result<R, JsValue>) -> Result<R, JsValue> {
    AUDIO_CTX.with(|cell| {
        let mut slot = cell.borrow_mut();
        if let Some(ctx) = slot.as_ref() {
            return f(ctx);
        }
        let ctx = AudioContext::new()?;
        let out = f(&ctx);
        *slot = Some(ctx);
        out
    })
}

/// Schedule one decaying tone `delay_ms` from now.
fn schedule_tone(
    ctx: &AudioContext,
    wave: OscillatorType,
    freq: f32,
    gain: f32,
    duration_ms: f64,
    delay_ms: f64,
) -> Result<(), JsValue> {
    let osc = ctx.create_oscillator()?;
    let amp = ctx.create_gain()?;
    osc.connect_with_audio_node(&amp)?;
    amp.connect_with_audio_node(&ctx.destination())?;
    osc.set_type(wave);
    osc.frequency().set_value(freq);
    let start = ctx.current_time() + delay_ms / 1000.0;
    let end = start + duration_ms / 1000.0;
    amp.gain().set_value_at_time(gain, start)?;
    amp.gain().exponential_ramp_to_value_at_time(0.01, end)?;
    osc.start_with_when(start)?;
    osc.stop_with_when(end)?;
    Ok(())
}

/// Short square blip for a reactor tap.
pub fn tap_blip() -> Result<(), JsValue> {
    with_context(|ctx| schedule_tone(ctx, OscillatorType::Square, 800.0, 0.1, 80.0, 0.0))
}

/// Rising two-note chirp for a successful purchase.
pub fn purchase_chirp() -> Result<(), JsValue> {
    with_context(|ctx| {
        schedule_tone(ctx, OscillatorType::Square, 1200.0, 0.1, 150.0, 0.0)?;
        schedule_tone(ctx, OscillatorType::Square, 1400.0, 0.1, 100.0, 100.0)
    })
}

const MELODY_HZ: [f32; 8] = [523.0, 659.0, 784.0, 659.0, 523.0, 392.0, 523.0, 659.0];
const MELODY_NOTE_MS: f64 = 400.0;
const MELODY_STEP_MS: i32 = 500;

/// Handle to the looping background melody. Call [`Melody::stop`] to end
/// it; the interval outlives a plain drop.
pub struct Melody {
    interval_id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Melody {
    pub fn start() -> Result<Melody, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let mut note = 0usize;
        let mut play_next = move || {
            let freq = MELODY_HZ[note % MELODY_HZ.len()];
            note += 1;
            let _ = with_context(|ctx| {
                schedule_tone(ctx, OscillatorType::Sine, freq, 0.08, MELODY_NOTE_MS, 0.0)
            });
        };
        // First note right away, the rest on the interval.
        play_next();
        let tick = Closure::wrap(Box::new(play_next) as Box<dyn FnMut()>);
        let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            MELODY_STEP_MS,
        )?;
        Ok(Melody {
            interval_id,
            _tick: tick,
        })
    }

    pub fn stop(self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.interval_id);
        }
    }
}
