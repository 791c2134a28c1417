use nubos_ui_graphics::Point;
use web_time::Instant;

/// Device that produced a pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerOrigin {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A timestamped position on the nub surface.
///
/// Samples are consumed immediately by the recognizer; only the press
/// sample and the latest sample of the current gesture are retained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Point,
    pub time: Instant,
    pub origin: PointerOrigin,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, time: Instant) -> Self {
        Self {
            position: Point::new(x, y),
            time,
            origin: PointerOrigin::Touch,
        }
    }

    pub fn with_origin(mut self, origin: PointerOrigin) -> Self {
        self.origin = origin;
        self
    }
}

/// Raw pointer event as delivered by the host event loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub sample: PointerSample,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, sample: PointerSample) -> Self {
        Self { kind, sample }
    }

    pub fn down(sample: PointerSample) -> Self {
        Self::new(PointerEventKind::Down, sample)
    }

    pub fn moved(sample: PointerSample) -> Self {
        Self::new(PointerEventKind::Move, sample)
    }

    pub fn up(sample: PointerSample) -> Self {
        Self::new(PointerEventKind::Up, sample)
    }

    pub fn cancel(sample: PointerSample) -> Self {
        Self::new(PointerEventKind::Cancel, sample)
    }
}
