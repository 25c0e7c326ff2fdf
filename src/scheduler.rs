//! The sampling loop: one read-decode-emit cycle per update interval.
//!
//! Processing time of each cycle is subtracted from the following sleep so frames stay on
//! interval boundaries instead of drifting by the processing time every cycle.

use core::convert::Infallible;

use fugit::MicrosDurationU64;
use tracing::{debug, info, warn};

use crate::{
    clock::{Clock, Instant},
    config::UpdateInterval,
    error::Result,
    pmic::{ADC_SETTLE, Axp209},
    protocol::Emitter,
    sample::SampleStore,
};

const ZERO: MicrosDurationU64 = MicrosDurationU64::from_ticks(0);

/// A started plugin. Construction runs the ADC enable sequence and writes the preamble, so
/// every `Sampler` has declared its charts exactly once before its first frame.
pub struct Sampler<S, W, C>
where
    S: embedded_io::Read + embedded_io::Write,
    W: std::io::Write,
    C: Clock,
{
    pmic: Axp209<S>,
    emitter: Emitter<W>,
    clock: C,
    interval: UpdateInterval,
    samples: SampleStore,
    /// End of the previous cycle. `None` until the first cycle completes.
    last_end: Option<Instant>,
    frames: u64,
}

impl<S, W, C> Sampler<S, W, C>
where
    S: embedded_io::Read + embedded_io::Write,
    W: std::io::Write,
    C: Clock,
{
    /// Enable the ADC, wait for it to settle when it was off, then declare the charts.
    pub fn start(
        mut pmic: Axp209<S>,
        mut emitter: Emitter<W>,
        mut clock: C,
        interval: UpdateInterval,
    ) -> Result<Self, S::Error> {
        if pmic.enable_adc()? {
            debug!(settle_ms = ADC_SETTLE.ticks(), "Waiting for first ADC conversion");
            clock.sleep(MicrosDurationU64::from_ticks(u64::from(ADC_SETTLE.to_micros())));
        }

        emitter.emit_preamble()?;
        info!(interval_s = interval.as_secs(), "Charts declared, sampling");

        Ok(Self {
            pmic,
            emitter,
            clock,
            interval,
            samples: SampleStore::new(),
            last_end: None,
            frames: 0,
        })
    }

    /// Run one cycle: sample, emit a frame, then sleep out the rest of the interval.
    ///
    /// Returns the time slept. A cycle longer than the interval sleeps zero and the next
    /// cycle starts straight away.
    pub fn cycle(&mut self) -> Result<MicrosDurationU64, S::Error> {
        let start = self.clock.now();
        let elapsed = self
            .last_end
            .and_then(|end| start.checked_duration_since(end))
            .unwrap_or(ZERO);

        self.pmic.sample(&mut self.samples)?;
        self.emitter.emit_frame(&self.samples, elapsed)?;
        self.frames += 1;

        let end = self.clock.now();
        self.last_end = Some(end);

        let busy = end.checked_duration_since(start).unwrap_or(ZERO);
        let interval = self.interval.as_micros();
        let pause = match interval.checked_sub(busy) {
            Some(pause) => pause,
            None => {
                warn!(
                    busy_us = busy.ticks(),
                    interval_us = interval.ticks(),
                    "Cycle overran the update interval"
                );
                ZERO
            }
        };
        debug!(
            frame = self.frames,
            elapsed_us = elapsed.ticks(),
            busy_us = busy.ticks(),
            "Frame emitted"
        );

        self.clock.sleep(pause);
        Ok(pause)
    }

    /// Cycle until an error. Only returns on failure.
    pub fn run(mut self) -> Result<Infallible, S::Error> {
        loop {
            self.cycle()?;
        }
    }

    /// Frames emitted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Values of the most recent cycle.
    pub fn samples(&self) -> &SampleStore {
        &self.samples
    }

    pub fn emitter(&self) -> &Emitter<W> {
        &self.emitter
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
