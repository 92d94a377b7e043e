// Shared display helpers.

/// Energy readouts show whole units only.
pub fn format_energy(value: f64) -> String {
    format!("{}", value.floor() as u64)
}

/// Derived efficiency readout: automatic per-second yield relative to
/// lifetime taps, as a floored percentage. Display-only; 0 whenever
/// either side of the ratio is missing.
pub fn efficiency_percent(energy_per_second: f64, clicks: u64) -> u32 {
    if energy_per_second <= 0.0 || clicks == 0 {
        return 0;
    }
    ((energy_per_second / clicks as f64) * 100.0).floor() as u32
}

/// Log a line to the browser console. No-op off wasm (tests).
pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}
