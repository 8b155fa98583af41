// Web Audio tones and speech-synthesis praise.

use web_sys::{AudioContext, AudioContextState, OscillatorType, SpeechSynthesisUtterance};
use yew_garden::{FeedbackSink, PraiseCategory, SoundCategory};

/// (frequency Hz, duration s, waveform) per sound.
fn tone(category: SoundCategory) -> (f32, f64, OscillatorType) {
    match category {
        SoundCategory::Water => (600.0, 0.15, OscillatorType::Sine),
        SoundCategory::Plant => (440.0, 0.2, OscillatorType::Triangle),
        SoundCategory::Harvest => (880.0, 0.25, OscillatorType::Sine),
        SoundCategory::Mow => (150.0, 0.12, OscillatorType::Sawtooth),
        SoundCategory::Paint => (520.0, 0.1, OscillatorType::Sine),
        SoundCategory::Butterfly => (1040.0, 0.2, OscillatorType::Triangle),
        SoundCategory::Celebration => (660.0, 0.6, OscillatorType::Square),
        SoundCategory::Shape => (784.0, 0.15, OscillatorType::Triangle),
        SoundCategory::Sweep => (300.0, 0.15, OscillatorType::Sine),
        SoundCategory::Undo => (392.0, 0.1, OscillatorType::Sine),
        SoundCategory::Reset => (262.0, 0.4, OscillatorType::Triangle),
        SoundCategory::Season => (587.0, 0.3, OscillatorType::Sine),
    }
}

#[derive(Default)]
pub struct BrowserFeedback {
    ctx: Option<AudioContext>,
    pub sound_on: bool,
    pub voice_on: bool,
}

impl BrowserFeedback {
    pub fn new(sound_on: bool, voice_on: bool) -> Self {
        Self {
            ctx: None,
            sound_on,
            voice_on,
        }
    }

    /// Browsers only allow audio after a user gesture; call from one.
    pub fn unlock(&mut self) {
        if self.ctx.is_none() {
            match AudioContext::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(_) => log::warn!("Web Audio unavailable, sounds disabled"),
            }
        }
        if let Some(ctx) = &self.ctx {
            if ctx.state() == AudioContextState::Suspended {
                let _ = ctx.resume();
            }
        }
    }

    fn beep(&self, category: SoundCategory) -> Option<()> {
        let ctx = self.ctx.as_ref()?;
        let (freq, dur, wave) = tone(category);
        let now = ctx.current_time();
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;
        osc.set_type(wave);
        osc.frequency().set_value_at_time(freq, now).ok()?;
        if category == SoundCategory::Celebration {
            osc.frequency().linear_ramp_to_value_at_time(freq * 2.0, now + dur).ok()?;
        }
        gain.gain().set_value_at_time(0.2, now).ok()?;
        gain.gain().exponential_ramp_to_value_at_time(0.001, now + dur).ok()?;
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;
        osc.start().ok()?;
        osc.stop_with_when(now + dur).ok()?;
        Some(())
    }
}

impl FeedbackSink for BrowserFeedback {
    fn play_sound(&mut self, category: SoundCategory) {
        if self.sound_on && self.beep(category).is_none() && self.ctx.is_some() {
            log::debug!("could not play {category:?}");
        }
    }

    fn speak_praise(&mut self, category: PraiseCategory, phrase: &str) {
        if !self.voice_on {
            return;
        }
        let Some(synth) = web_sys::window().and_then(|w| w.speech_synthesis().ok()) else {
            return;
        };
        let Ok(utterance) = SpeechSynthesisUtterance::new_with_text(phrase) else {
            return;
        };
        utterance.set_rate(0.9);
        utterance.set_pitch(1.5);
        utterance.set_volume(0.8);
        // Counting follows the harvest cheer, so let that one finish.
        if !matches!(category, PraiseCategory::Counting(_)) {
            synth.cancel();
        }
        synth.speak(&utterance);
    }
}
