use std::fmt;

/// Fractal type; selects the active shader program.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    Cube,
    Raymarcher,
}

impl FractalKind {
    /// Cycle order.
    pub const ALL: [FractalKind; 4] = [
        FractalKind::Mandelbrot,
        FractalKind::Julia,
        FractalKind::Cube,
        FractalKind::Raymarcher,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Successor in cycle order, wrapping to the first kind.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Only the cube is real geometry; the others draw a single full-screen quad.
    pub fn uses_depth(self) -> bool {
        self == FractalKind::Cube
    }

    /// Animated kinds keep requesting frames while shown.
    pub fn is_animated(self) -> bool {
        self == FractalKind::Cube
    }

    pub fn label(self) -> &'static str {
        match self {
            FractalKind::Mandelbrot => "Mandelbrot",
            FractalKind::Julia => "Julia",
            FractalKind::Cube => "3D cube",
            FractalKind::Raymarcher => "Raymarcher",
        }
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_kind_and_wraps() {
        let mut kind = FractalKind::Mandelbrot;
        let mut seen = Vec::new();
        for _ in 0..FractalKind::ALL.len() {
            seen.push(kind);
            kind = kind.next();
        }
        assert_eq!(seen, FractalKind::ALL);
        assert_eq!(kind, FractalKind::Mandelbrot);
    }

    #[test]
    fn raymarcher_wraps_to_mandelbrot() {
        assert_eq!(FractalKind::Raymarcher.next(), FractalKind::Mandelbrot);
    }

    #[test]
    fn depth_only_for_cube() {
        for kind in FractalKind::ALL {
            assert_eq!(kind.uses_depth(), kind == FractalKind::Cube, "{kind}");
        }
    }

    #[test]
    fn index_matches_cycle_position() {
        for (i, kind) in FractalKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
