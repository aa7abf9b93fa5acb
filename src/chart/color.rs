use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rgb(pub(crate) u8, pub(crate) u8, pub(crate) u8);

impl Rgb {
    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Single color for the monthly bars.
pub(crate) const BAR_BLUE: Rgb = Rgb(0x42, 0x99, 0xE1);

/// Qualitative pastel palette, cycled per pie slice.
pub(crate) const PASTEL: [Rgb; 11] = [
    Rgb(102, 197, 204),
    Rgb(246, 207, 113),
    Rgb(248, 156, 116),
    Rgb(220, 176, 242),
    Rgb(135, 197, 95),
    Rgb(158, 185, 243),
    Rgb(254, 136, 177),
    Rgb(201, 219, 116),
    Rgb(139, 224, 164),
    Rgb(180, 151, 231),
    Rgb(179, 179, 179),
];

/// Continuous low→high color ramp with evenly spaced stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ColorScale {
    pub(crate) stops: Vec<Rgb>,
    pub(crate) min: f64,
    pub(crate) max: f64,
}

impl ColorScale {
    /// Green → blue → red.
    pub(crate) fn magnitude(min: f64, max: f64) -> Self {
        Self {
            stops: vec![
                Rgb(0x48, 0xBB, 0x78),
                Rgb(0x42, 0x99, 0xE1),
                Rgb(0xF5, 0x65, 0x65),
            ],
            min,
            max,
        }
    }

    /// Color for `value`, clamped to the scale's domain. A degenerate
    /// domain (min == max) maps to the midpoint.
    pub(crate) fn color_for(&self, value: f64) -> Rgb {
        let span = self.max - self.min;
        let t = if span.abs() < f64::EPSILON {
            0.5
        } else {
            ((value - self.min) / span).clamp(0.0, 1.0)
        };
        self.color_at(t)
    }

    /// Color at normalized position `t` in [0, 1].
    pub(crate) fn color_at(&self, t: f64) -> Rgb {
        match self.stops.as_slice() {
            [] => Rgb(0, 0, 0),
            [only] => *only,
            stops => {
                let segments = (stops.len() - 1) as f64;
                let pos = t.clamp(0.0, 1.0) * segments;
                let idx = (pos.floor() as usize).min(stops.len() - 2);
                stops[idx].lerp(stops[idx + 1], pos - idx as f64)
            }
        }
    }
}
