//! Emergency siren via the Web Audio API
//!
//! Purely a local feedback cue: any failure here is logged and swallowed so
//! it can never gate or fail an SOS submission.

use wasm_bindgen::JsValue;

const LOW_HZ: f32 = 800.0;
const HIGH_HZ: f32 = 1000.0;
const CYCLE_SECS: f64 = 0.5;
const VOLUME: f32 = 0.3;

/// Play the two-tone siren for `duration_ms`. Never returns an error.
pub fn play_siren(duration_ms: u32) {
    if let Err(e) = siren(duration_ms) {
        tracing::warn!(?e, "alert sound unavailable");
    }
}

fn siren(duration_ms: u32) -> Result<(), JsValue> {
    let ctx = web_sys::AudioContext::new()?;
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    let now = ctx.current_time();
    let duration = f64::from(duration_ms) / 1000.0;

    // Alternate between the two tones every half second
    oscillator.frequency().set_value_at_time(LOW_HZ, now)?;
    let cycles = (duration / CYCLE_SECS) as u32;
    for i in 0..cycles {
        let at = now + f64::from(i) * CYCLE_SECS;
        let freq = if i % 2 == 0 { HIGH_HZ } else { LOW_HZ };
        oscillator.frequency().set_value_at_time(freq, at)?;
    }

    // Ramp in and out to avoid clicks
    gain.gain().set_value_at_time(0.0, now)?;
    gain.gain().linear_ramp_to_value_at_time(VOLUME, now + 0.1)?;
    gain.gain()
        .set_value_at_time(VOLUME, now + (duration - 0.1).max(0.1))?;
    gain.gain().linear_ramp_to_value_at_time(0.0, now + duration)?;

    oscillator.start_with_when(now)?;
    oscillator.stop_with_when(now + duration)?;
    Ok(())
}
