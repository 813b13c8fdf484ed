#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use i8080_gpio16::{pin, BusContext, Gpio16Bus, PinPackage, PortInitialiser, RegisterIo};

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

pub const DATA_PORT: usize = 0x4800_0C00;
pub const CONTROL_PORT: usize = 0x4800_0800;

pub const PINS: PinPackage =
    PinPackage::new(DATA_PORT, CONTROL_PORT, pin(1), pin(0), pin(2));

/// Everything observable on the bus, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Data(u16),
    RsLow,
    RsHigh,
    WrLow,
    WrHigh,
    ResetLow,
    ResetHigh,
    DelayMs(u32),
}

/// What the panel latched on a WR rising edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latched {
    Command(u16),
    Data(u16),
}

#[derive(Debug, Default)]
struct Lines {
    data: Option<u16>,
    rs: Option<bool>,
    wr: Option<bool>,
    reset: Option<bool>,
}

#[derive(Debug, Default)]
pub struct Log {
    pub events: Vec<Event>,
    pub latched: Vec<Latched>,
    lines: Lines,
}

/// Shared log written by the fake register writer and the fake delay.
#[derive(Debug, Clone, Default)]
pub struct Recorder(Rc<RefCell<Log>>);

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn latched(&self) -> Vec<Latched> {
        self.0.borrow().latched.clone()
    }

    pub fn clear(&self) {
        let mut log = self.0.borrow_mut();
        log.events.clear();
        log.latched.clear();
    }

    pub fn count(&self, event: Event) -> usize {
        self.0.borrow().events.iter().filter(|&&e| e == event).count()
    }

    pub fn data_writes(&self) -> usize {
        self.0
            .borrow()
            .events
            .iter()
            .filter(|e| matches!(e, Event::Data(_)))
            .count()
    }

    pub fn wr_level(&self) -> Option<bool> {
        self.0.borrow().lines.wr
    }

    pub fn rs_level(&self) -> Option<bool> {
        self.0.borrow().lines.rs
    }

    pub fn reset_level(&self) -> Option<bool> {
        self.0.borrow().lines.reset
    }

    fn push(&self, event: Event) {
        let mut log = self.0.borrow_mut();
        let wr_low = log.lines.wr == Some(false);

        match event {
            Event::Data(value) => {
                assert!(!wr_low, "data port changed while WR low");
                log.lines.data = Some(value);
            }
            Event::RsLow | Event::RsHigh => {
                assert!(!wr_low, "RS changed while WR low");
                log.lines.rs = Some(event == Event::RsHigh);
            }
            Event::WrLow => {
                log.lines.wr = Some(false);
            }
            Event::WrHigh => {
                if wr_low {
                    let data = log.lines.data.expect("WR pulsed before any data");
                    let latched = match log.lines.rs {
                        Some(true) => Latched::Data(data),
                        Some(false) => Latched::Command(data),
                        None => panic!("WR pulsed before RS was driven"),
                    };
                    log.latched.push(latched);
                }
                log.lines.wr = Some(true);
            }
            Event::ResetLow => log.lines.reset = Some(false),
            Event::ResetHigh => log.lines.reset = Some(true),
            Event::DelayMs(_) => {}
        }
        log.events.push(event);
    }
}

// ---------------------------------------------------------------------------
// Fake register writer
// ---------------------------------------------------------------------------

/// Decodes stores against a bound context and feeds them to a [`Recorder`].
pub struct RecordingIo {
    ctx: BusContext,
    recorder: Recorder,
}

impl RecordingIo {
    pub fn new(recorder: &Recorder) -> Self {
        Self { ctx: BusContext::bind(&PINS), recorder: recorder.clone() }
    }

    fn control(&self, value: u16, high: bool) {
        let lines = [
            (self.ctx.register_select_mask(), Event::RsHigh, Event::RsLow),
            (self.ctx.reset_mask(), Event::ResetHigh, Event::ResetLow),
            (self.ctx.write_strobe_mask(), Event::WrHigh, Event::WrLow),
        ];
        let known = lines.iter().fold(0, |acc, (mask, _, _)| acc | mask);
        assert_eq!(value & !known, 0, "store to unwired control pin: {value:#06x}");

        for (mask, set, reset) in lines {
            if value & mask != 0 {
                self.recorder.push(if high { set } else { reset });
            }
        }
    }
}

impl RegisterIo for RecordingIo {
    fn store(&mut self, address: usize, value: u16) {
        if address == self.ctx.data_output_address() {
            self.recorder.push(Event::Data(value));
        } else if address == self.ctx.control_set_address() {
            self.control(value, true);
        } else if address == self.ctx.control_reset_address() {
            self.control(value, false);
        } else {
            panic!("store to unexpected address {address:#x}");
        }
    }
}

// ---------------------------------------------------------------------------
// Fake delay
// ---------------------------------------------------------------------------

pub struct RecordingDelay {
    recorder: Recorder,
    pub total_ns: u64,
}

impl RecordingDelay {
    pub fn new(recorder: &Recorder) -> Self {
        Self { recorder: recorder.clone(), total_ns: 0 }
    }

    fn record_ms(&mut self, ms: u32) {
        self.total_ns += u64::from(ms) * 1_000_000;
        self.recorder.push(Event::DelayMs(ms));
    }
}

impl embedded_hal::delay::DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record_ms(ms);
    }
}

impl embedded_hal_async::delay::DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.record_ms(ms);
    }
}

// ---------------------------------------------------------------------------
// Fake GPIO initialiser
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
pub struct InitFailed;

impl core::fmt::Display for InitFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "port refused")
    }
}

#[derive(Default)]
pub struct RecordingInit {
    /// `(port, pins)` per call.
    pub calls: Vec<(usize, u16)>,
    /// Port whose configuration fails.
    pub fail_port: Option<usize>,
    /// Bus events already recorded at each call.
    pub events_before: Vec<usize>,
    pub recorder: Option<Recorder>,
}

impl RecordingInit {
    pub fn watching(recorder: &Recorder) -> Self {
        Self { recorder: Some(recorder.clone()), ..Self::default() }
    }
}

impl PortInitialiser for RecordingInit {
    type Error = InitFailed;

    fn configure_outputs(&mut self, port: usize, pins: u16) -> Result<(), InitFailed> {
        self.calls.push((port, pins));
        if let Some(recorder) = &self.recorder {
            self.events_before.push(recorder.events().len());
        }
        if self.fail_port == Some(port) {
            return Err(InitFailed);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helper
// ---------------------------------------------------------------------------

/// A constructed bus with the construction-time events already cleared.
pub fn make_bus() -> (Gpio16Bus<RecordingIo>, Recorder) {
    let recorder = Recorder::new();
    let mut init = RecordingInit::default();
    let bus = Gpio16Bus::new(&PINS, RecordingIo::new(&recorder), &mut init)
        .expect("fake initialiser never fails");
    recorder.clear();
    (bus, recorder)
}

/// Reference for the bulk engine: one pulse per call.
pub fn naive_repeat(bus: &mut Gpio16Bus<RecordingIo>, count: u32, value: u16) {
    if count == 0 {
        return;
    }
    bus.write_data(value);
    for _ in 1..count {
        bus.write_data_again(value);
    }
}
