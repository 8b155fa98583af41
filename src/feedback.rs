//! Sound and praise events leaving the core.
//!
//! The session records what happened; a [`FeedbackSink`] decides whether
//! anything audible comes of it. Delayed events (the harvest count that
//! follows the harvest cheer) wait in the queue until their tick arrives.

use std::collections::VecDeque;

use crate::model::{GardenEvent, PraiseCategory, SoundCategory};
use crate::rng::GardenRng;

/// Receives feedback events. Implementations must not block.
pub trait FeedbackSink {
    fn play_sound(&mut self, category: SoundCategory);
    fn speak_praise(&mut self, category: PraiseCategory, phrase: &str);
}

/// Swallows every event (headless runs, muted front-end).
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl FeedbackSink for NullSink {
    fn play_sound(&mut self, _category: SoundCategory) {}
    fn speak_praise(&mut self, _category: PraiseCategory, _phrase: &str) {}
}

/// Collects events in order; handy for tests and for replaying into
/// several sinks.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<GardenEvent>,
    pub phrases: Vec<String>,
}

impl FeedbackSink for RecordingSink {
    fn play_sound(&mut self, category: SoundCategory) {
        self.events.push(GardenEvent::PlaySound(category));
    }

    fn speak_praise(&mut self, category: PraiseCategory, phrase: &str) {
        self.events.push(GardenEvent::SpeakPraise(category));
        self.phrases.push(phrase.to_string());
    }
}

const WATER: &[&str] = &["Good watering!", "Plants love water!", "Nice job!", "Keep it up!"];
const PLANT: &[&str] = &["Beautiful planting!", "Growing nicely!", "Amazing garden!", "Well done!"];
const HARVEST: &[&str] = &["Perfect harvest!", "Yummy vegetables!", "Good picking!", "Wonderful!"];
const MOW: &[&str] = &["Great mowing!", "Grass looks perfect!", "Nice cutting!", "Good job!"];
const PAINT: &[&str] = &["Beautiful colors!", "Great painting!", "So creative!", "Amazing art!"];
const BUTTERFLY: &[&str] = &["Pretty butterfly!", "Great catch!", "Flutter flutter!", "So magical!"];
const GENERAL: &[&str] = &["Good job!", "Well done!", "Keep going!", "Amazing!", "Wonderful!"];
const CELEBRATION: &[&str] = &["Fantastic work!", "You are amazing!", "Incredible garden!", "So proud of you!"];
const COUNTING: [&str; 10] = [
    "One!", "Two!", "Three!", "Four!", "Five!", "Six!", "Seven!", "Eight!", "Nine!", "Ten!",
];

/// Picks a phrase for `category`. Counting phrases are indexed, not random.
pub fn praise_phrase(category: PraiseCategory, rng: &mut GardenRng) -> &'static str {
    let table = match category {
        PraiseCategory::Counting(n) => {
            return n
                .checked_sub(1)
                .and_then(|i| COUNTING.get(i as usize).copied())
                .unwrap_or("Wow!");
        }
        PraiseCategory::Water => WATER,
        PraiseCategory::Plant => PLANT,
        PraiseCategory::Harvest => HARVEST,
        PraiseCategory::Mow => MOW,
        PraiseCategory::Paint => PAINT,
        PraiseCategory::Butterfly => BUTTERFLY,
        PraiseCategory::General => GENERAL,
        PraiseCategory::Celebration => CELEBRATION,
    };
    rng.pick(table).unwrap_or("Good job!")
}

#[derive(Clone, Debug, Default)]
pub struct FeedbackQueue {
    ready: VecDeque<GardenEvent>,
    /// `(fire_at_tick, event)`, kept sorted by tick; equal ticks keep
    /// insertion order.
    delayed: Vec<(u64, GardenEvent)>,
}

impl FeedbackQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GardenEvent) {
        self.ready.push_back(event);
    }

    pub fn sound(&mut self, category: SoundCategory) {
        self.push(GardenEvent::PlaySound(category));
    }

    pub fn praise(&mut self, category: PraiseCategory) {
        self.push(GardenEvent::SpeakPraise(category));
    }

    pub fn schedule(&mut self, fire_at_tick: u64, event: GardenEvent) {
        let at = self.delayed.partition_point(|(t, _)| *t <= fire_at_tick);
        self.delayed.insert(at, (fire_at_tick, event));
    }

    /// Moves every delayed event due at or before `tick` into the ready list.
    pub fn release_due(&mut self, tick: u64) {
        let due = self.delayed.partition_point(|(t, _)| *t <= tick);
        self.ready.extend(self.delayed.drain(..due).map(|(_, e)| e));
    }

    pub fn pending_ready(&self) -> usize {
        self.ready.len()
    }

    pub fn pending_delayed(&self) -> usize {
        self.delayed.len()
    }

    /// Hands ready events to `sink`, choosing praise phrases on the way.
    pub fn drain_into(&mut self, sink: &mut dyn FeedbackSink, rng: &mut GardenRng) -> usize {
        let n = self.ready.len();
        while let Some(event) = self.ready.pop_front() {
            match event {
                GardenEvent::PlaySound(c) => sink.play_sound(c),
                GardenEvent::SpeakPraise(c) => sink.speak_praise(c, praise_phrase(c, rng)),
            }
        }
        n
    }

    pub fn take_ready(&mut self) -> Vec<GardenEvent> {
        self.ready.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.ready.clear();
        self.delayed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delayed_events_fire_in_tick_order() {
        let mut q = FeedbackQueue::new();
        q.schedule(10, GardenEvent::SpeakPraise(PraiseCategory::Counting(2)));
        q.schedule(5, GardenEvent::SpeakPraise(PraiseCategory::Counting(1)));
        q.schedule(10, GardenEvent::PlaySound(SoundCategory::Harvest));
        q.release_due(4);
        assert_eq!(q.pending_ready(), 0);
        q.release_due(10);
        assert_eq!(
            q.take_ready(),
            vec![
                GardenEvent::SpeakPraise(PraiseCategory::Counting(1)),
                GardenEvent::SpeakPraise(PraiseCategory::Counting(2)),
                GardenEvent::PlaySound(SoundCategory::Harvest),
            ]
        );
        assert_eq!(q.pending_delayed(), 0);
    }

    #[test]
    fn counting_phrases_are_indexed() {
        let mut rng = GardenRng::default();
        assert_eq!(praise_phrase(PraiseCategory::Counting(1), &mut rng), "One!");
        assert_eq!(praise_phrase(PraiseCategory::Counting(10), &mut rng), "Ten!");
        assert_eq!(praise_phrase(PraiseCategory::Counting(0), &mut rng), "Wow!");
        assert!(WATER.contains(&praise_phrase(PraiseCategory::Water, &mut rng)));
    }

    #[test]
    fn drain_reaches_the_sink() {
        let mut rng = GardenRng::default();
        let mut q = FeedbackQueue::new();
        q.sound(SoundCategory::Water);
        q.praise(PraiseCategory::Water);
        let mut sink = RecordingSink::default();
        assert_eq!(q.drain_into(&mut sink, &mut rng), 2);
        assert_eq!(sink.events.len(), 2);
        assert_eq!(sink.phrases.len(), 1);
        assert_eq!(q.drain_into(&mut NullSink, &mut rng), 0);
    }
}
