//! Line protocol spoken to the collector on standard output.
//!
//! The chart topology is declared once:
//!
//! ```text
//! CHART <chart-id> "" "<title>" "<units>"
//! DIMENSION <quantity-id> "<label>" <algorithm>
//! ```
//!
//! then every cycle sends, per chart:
//!
//! ```text
//! BEGIN <chart-id> [<microseconds since last update>]
//! SET <quantity-id> = <value or empty>
//! END
//! ```
//!
//! Charts and dimensions always come out in catalog order.

use std::io::Write;

use fugit::MicrosDurationU64;

use crate::{
    chart::{CHARTS, Chart},
    sample::SampleStore,
};

/// Renders the chart catalog and sample frames onto a writer, flushing after each unit.
pub struct Emitter<W: Write> {
    out: W,
    charts: &'static [Chart],
}

impl<W: Write> Emitter<W> {
    /// Emitter for the built-in chart catalog.
    pub fn new(out: W) -> Self {
        Self::with_charts(out, &CHARTS)
    }

    pub fn with_charts(out: W, charts: &'static [Chart]) -> Self {
        Self { out, charts }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Declare every chart and its dimensions.
    pub fn emit_preamble(&mut self) -> std::io::Result<()> {
        for chart in self.charts {
            writeln!(
                self.out,
                "CHART {} \"\" \"{}\" \"{}\"",
                chart.id, chart.title, chart.units
            )?;
            for quantity in chart.members {
                let info = quantity.info();
                writeln!(
                    self.out,
                    "DIMENSION {} \"{}\" {}",
                    info.id,
                    info.label,
                    info.algorithm.as_ref()
                )?;
            }
        }
        self.out.flush()
    }

    /// Send one frame of values. A zero `elapsed` leaves out the timing hint.
    pub fn emit_frame(
        &mut self,
        samples: &SampleStore,
        elapsed: MicrosDurationU64,
    ) -> std::io::Result<()> {
        for chart in self.charts {
            if elapsed.ticks() > 0 {
                writeln!(self.out, "BEGIN {} {}", chart.id, elapsed.ticks())?;
            } else {
                writeln!(self.out, "BEGIN {}", chart.id)?;
            }
            for quantity in chart.members {
                writeln!(
                    self.out,
                    "SET {} = {}",
                    quantity.id(),
                    samples.render(*quantity)
                )?;
            }
            writeln!(self.out, "END")?;
        }
        self.out.flush()
    }
}
