//! Cursor-reactive tilt and neon glow for the profile image.

const MAX_TILT_DEG: f64 = 8.0;
const MAX_GLOW_OFFSET_PX: f64 = 20.0;
const NEON_BLUE: &str = "rgba(59,130,246,0.85)";
const NEON_PURPLE: &str = "rgba(139,92,246,0.7)";

// -0.0 formats as "-0"
fn positive_zero(v: f64) -> f64 {
    v + 0.0
}

/// Pointer position relative to the tracked element's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from the element's center, scaled to `[-1, 1]` on each axis.
    /// `None` for an element without area.
    pub fn normalized(&self, width: f64, height: f64) -> Option<(f64, f64)> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let cx = width / 2.0;
        let cy = height / 2.0;
        let dx = ((self.x - cx) / cx).clamp(-1.0, 1.0);
        let dy = ((self.y - cy) / cy).clamp(-1.0, 1.0);
        Some((dx, dy))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub glow_x: f64,
    pub glow_y: f64,
}

impl Tilt {
    pub fn from_sample(sample: PointerSample, width: f64, height: f64) -> Option<Self> {
        let (dx, dy) = sample.normalized(width, height)?;
        Some(Self {
            rotate_x: positive_zero(-dy * MAX_TILT_DEG),
            rotate_y: positive_zero(dx * MAX_TILT_DEG),
            glow_x: positive_zero(-dx * MAX_GLOW_OFFSET_PX),
            glow_y: positive_zero(-dy * MAX_GLOW_OFFSET_PX),
        })
    }
}

/// Style applied to the tracked element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Highlight {
    #[default]
    Resting,
    Tilted(Tilt),
}

impl Highlight {
    pub fn transform(&self) -> String {
        match self {
            Highlight::Resting => "none".to_string(),
            Highlight::Tilted(t) => format!(
                "perspective(1000px) rotateX({}deg) rotateY({}deg) translateZ(8px)",
                t.rotate_x, t.rotate_y
            ),
        }
    }

    pub fn box_shadow(&self) -> String {
        match self {
            Highlight::Resting => String::new(),
            Highlight::Tilted(t) => format!(
                "{}px {}px 30px 6px {NEON_BLUE}, {}px {}px 60px 18px {NEON_PURPLE}",
                t.glow_x,
                t.glow_y,
                positive_zero(-t.glow_x),
                positive_zero(-t.glow_y)
            ),
        }
    }

    pub fn transition(&self) -> &'static str {
        match self {
            Highlight::Resting => "transform 300ms ease, box-shadow 300ms ease",
            Highlight::Tilted(_) => "transform 120ms ease, box-shadow 120ms ease",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_center_is_flat() {
        let tilt = Tilt::from_sample(PointerSample::new(160.0, 160.0), 320.0, 320.0)
            .expect("element has area");
        assert!(close(tilt.rotate_x, 0.0));
        assert!(close(tilt.rotate_y, 0.0));
        assert!(close(tilt.glow_x, 0.0));
        assert!(close(tilt.glow_y, 0.0));
    }

    #[test]
    fn test_center_styles_have_no_negative_zero() {
        let tilt = Tilt::from_sample(PointerSample::new(50.0, 50.0), 100.0, 100.0)
            .expect("element has area");
        let highlight = Highlight::Tilted(tilt);
        assert_eq!(
            highlight.transform(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(8px)"
        );
        assert_eq!(
            highlight.box_shadow(),
            "0px 0px 30px 6px rgba(59,130,246,0.85), 0px 0px 60px 18px rgba(139,92,246,0.7)"
        );
    }

    #[test]
    fn test_corners_hit_max_tilt() {
        // bottom-right corner tips the top toward the viewer and glows up-left
        let tilt = Tilt::from_sample(PointerSample::new(320.0, 320.0), 320.0, 320.0)
            .expect("element has area");
        assert!(close(tilt.rotate_x, -8.0));
        assert!(close(tilt.rotate_y, 8.0));
        assert!(close(tilt.glow_x, -20.0));
        assert!(close(tilt.glow_y, -20.0));

        let tilt = Tilt::from_sample(PointerSample::new(0.0, 0.0), 200.0, 100.0)
            .expect("element has area");
        assert!(close(tilt.rotate_x, 8.0));
        assert!(close(tilt.rotate_y, -8.0));
    }

    #[test]
    fn test_outside_pointer_is_clamped() {
        let (dx, dy) = PointerSample::new(-500.0, 900.0)
            .normalized(100.0, 100.0)
            .expect("element has area");
        assert!(close(dx, -1.0));
        assert!(close(dy, 1.0));
    }

    #[test]
    fn test_zero_sized_element_ignored() {
        assert_eq!(Tilt::from_sample(PointerSample::new(1.0, 1.0), 0.0, 10.0), None);
        assert_eq!(Tilt::from_sample(PointerSample::new(1.0, 1.0), 10.0, 0.0), None);
    }

    #[test]
    fn test_styles() {
        let rest = Highlight::default();
        assert_eq!(rest.transform(), "none");
        assert_eq!(rest.box_shadow(), "");
        assert!(rest.transition().contains("300ms"));

        let tilted = Highlight::Tilted(Tilt {
            rotate_x: -4.0,
            rotate_y: 2.5,
            glow_x: 10.0,
            glow_y: -5.0,
        });
        assert_eq!(
            tilted.transform(),
            "perspective(1000px) rotateX(-4deg) rotateY(2.5deg) translateZ(8px)"
        );
        assert_eq!(
            tilted.box_shadow(),
            "10px -5px 30px 6px rgba(59,130,246,0.85), -10px 5px 60px 18px rgba(139,92,246,0.7)"
        );
        assert!(tilted.transition().contains("120ms"));
    }
}
