//! Schematic terminal view of lights and signs

use std::io::{self, Write};

use log::warn;

use crate::simulation::{LightState, Renderer, TrafficLight, TrafficSign};

/// Width of one intersection column in characters
const COLUMN_WIDTH: usize = 26;

/// Draws each step as a block of text columns, one per intersection
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(
        &mut self,
        lights: &[TrafficLight],
        signs: &[TrafficSign],
        time: usize,
    ) -> io::Result<()> {
        let rule = "=".repeat(COLUMN_WIDTH * lights.len().max(1));
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "Time: {}s", time)?;
        writeln!(self.out, "{}", rule)?;

        self.write_row(lights.iter().map(|l| {
            let lamp = match l.state {
                LightState::Green => "(G)",
                LightState::Red => "(R)",
            };
            format!("{} ID: {}", lamp, l.id)
        }))?;
        self.write_row(lights.iter().map(|l| format!("State: {}", l.state)))?;
        self.write_row(lights.iter().map(|l| format!("Timer: {}s", l.timer)))?;
        writeln!(self.out)?;

        self.write_row(signs.iter().map(|s| format!("Location: {}", s.location)))?;
        self.write_row(
            signs
                .iter()
                .map(|s| format!("Traffic: {} ({})", s.message, s.message.hangul())),
        )?;
        self.write_row(signs.iter().map(|s| format!("Color: {}", s.color)))?;
        writeln!(self.out)?;

        self.out.flush()
    }

    fn write_row<I>(&mut self, cells: I) -> io::Result<()>
    where
        I: Iterator<Item = String>,
    {
        let line: String = cells
            .map(|cell| format!("{:<width$}", cell, width = COLUMN_WIDTH))
            .collect();
        writeln!(self.out, "{}", line.trim_end())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, lights: &[TrafficLight], signs: &[TrafficSign], time: usize) {
        if let Err(e) = self.write_frame(lights, signs, time) {
            warn!("Failed to draw frame at t={}: {}", time, e);
        }
    }
}
