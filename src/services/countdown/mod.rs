mod sink;
mod ticker;

pub use sink::{DisplaySink, OutputFormat, RecordingSink, SinkError, TerminalSink};
pub use ticker::{CountdownTicker, TickOutcome, TickerState};
