//! Display sinks the countdown writes into.
//!
//! A sink exposes text slots and visibility regions by stable identifier. Any
//! of them may be absent; writing to an absent one reports
//! `SinkError::MissingElement` and the ticker carries on with the rest.

use std::collections::HashMap;
use std::io::Write;

use thiserror::Error;

use crate::models::countdown::{CountdownFrame, RegionId, SlotId};
use crate::models::settings::Settings;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("display element '{0}' is not present")]
    MissingElement(&'static str),
    #[error("failed to write countdown output")]
    Io(#[from] std::io::Error),
    #[error("failed to encode countdown frame")]
    Encode(#[from] serde_json::Error),
}

pub trait DisplaySink {
    fn write_slot(&mut self, slot: SlotId, text: &str) -> Result<(), SinkError>;

    fn set_region_visible(&mut self, region: RegionId, visible: bool) -> Result<(), SinkError>;

    /// Called after every element of a rendered tick has been written.
    fn present(&mut self, _frame: &CountdownFrame) -> Result<(), SinkError> {
        Ok(())
    }
}

fn region_element_id(region: RegionId) -> &'static str {
    match region {
        RegionId::Primary => "countdown",
        RegionId::Fallback => "countdown-fallback",
    }
}

/// In-memory sink; only the slots and regions it was built with exist.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    slots: HashMap<SlotId, String>,
    regions: HashMap<RegionId, bool>,
    frames: Vec<CountdownFrame>,
}

impl RecordingSink {
    pub fn new(slots: &[SlotId], regions: &[RegionId]) -> Self {
        Self {
            slots: slots.iter().map(|slot| (*slot, String::new())).collect(),
            // The fallback starts visible, the primary hidden.
            regions: regions
                .iter()
                .map(|region| (*region, *region == RegionId::Fallback))
                .collect(),
            frames: Vec::new(),
        }
    }

    pub fn complete() -> Self {
        Self::new(&SlotId::ALL, &[RegionId::Primary, RegionId::Fallback])
    }

    pub fn text(&self, slot: SlotId) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    /// `[days, hours, minutes, seconds]`, empty for absent slots.
    pub fn texts(&self) -> [String; 4] {
        SlotId::ALL.map(|slot| self.text(slot).unwrap_or_default().to_string())
    }

    pub fn is_visible(&self, region: RegionId) -> Option<bool> {
        self.regions.get(&region).copied()
    }

    pub fn frames(&self) -> &[CountdownFrame] {
        &self.frames
    }
}

impl DisplaySink for RecordingSink {
    fn write_slot(&mut self, slot: SlotId, text: &str) -> Result<(), SinkError> {
        let entry = self
            .slots
            .get_mut(&slot)
            .ok_or(SinkError::MissingElement(slot.element_id()))?;
        entry.clear();
        entry.push_str(text);
        Ok(())
    }

    fn set_region_visible(&mut self, region: RegionId, visible: bool) -> Result<(), SinkError> {
        let entry = self
            .regions
            .get_mut(&region)
            .ok_or(SinkError::MissingElement(region_element_id(region)))?;
        *entry = visible;
        Ok(())
    }

    fn present(&mut self, frame: &CountdownFrame) -> Result<(), SinkError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line, rewritten in place every tick.
    #[default]
    Line,
    /// One JSON object per rendered tick.
    Json,
}

/// Renders the countdown on a terminal (or any writer).
pub struct TerminalSink<W: Write> {
    out: W,
    format: OutputFormat,
    label: String,
    fallback_message: String,
    slots: RecordingSink,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, settings: &Settings, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            label: settings.label.clone(),
            fallback_message: settings.fallback_message.clone(),
            slots: RecordingSink::new(&settings.slots, &[RegionId::Primary, RegionId::Fallback]),
        }
    }

    /// Prints the fallback message; the primary display is hidden until the
    /// first successful tick.
    pub fn show_fallback(&mut self) -> Result<(), SinkError> {
        if self.format == OutputFormat::Line {
            writeln!(self.out, "{}", self.fallback_message)?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Ends the in-place line so the shell prompt starts on a fresh one.
    pub fn finish(&mut self) -> Result<(), SinkError> {
        if self.format == OutputFormat::Line {
            writeln!(self.out)?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_line(&self) -> String {
        let mut line = self.label.clone();
        for slot in SlotId::ALL {
            if let Some(text) = self.slots.text(slot) {
                let unit = match slot {
                    SlotId::Days => 'd',
                    SlotId::Hours => 'h',
                    SlotId::Minutes => 'm',
                    SlotId::Seconds => 's',
                };
                line.push_str(&format!(" {}{}", text, unit));
            }
        }
        line
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn write_slot(&mut self, slot: SlotId, text: &str) -> Result<(), SinkError> {
        self.slots.write_slot(slot, text)
    }

    fn set_region_visible(&mut self, region: RegionId, visible: bool) -> Result<(), SinkError> {
        self.slots.set_region_visible(region, visible)
    }

    fn present(&mut self, frame: &CountdownFrame) -> Result<(), SinkError> {
        match self.format {
            OutputFormat::Line => {
                if self.slots.is_visible(RegionId::Primary) == Some(true) {
                    write!(self.out, "\r{}", self.render_line())?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, frame)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
