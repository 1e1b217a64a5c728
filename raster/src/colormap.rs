//! The supported colormap catalogue.
//!
//! Each colormap is a fixed deterministic mapping from a normalized scalar
//! to an RGB color, backed by a colorgrad preset gradient. The catalogue is
//! immutable, process-wide configuration consumed by both the renderer and
//! the command-line layer.

use std::fmt;
use std::str::FromStr;

use crate::error::RasterError;

/// Named colormaps, in menu order. The first entry is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    Plasma,
    Viridis,
    Inferno,
    Magma,
    Cividis,
    Sinebow,
    Rainbow,
    Turbo,
    Spectral,
}

impl Colormap {
    /// The full ordered catalogue.
    pub const ALL: [Colormap; 9] = [
        Colormap::Plasma,
        Colormap::Viridis,
        Colormap::Inferno,
        Colormap::Magma,
        Colormap::Cividis,
        Colormap::Sinebow,
        Colormap::Rainbow,
        Colormap::Turbo,
        Colormap::Spectral,
    ];

    /// CLI/menu name.
    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Plasma => "plasma",
            Colormap::Viridis => "viridis",
            Colormap::Inferno => "inferno",
            Colormap::Magma => "magma",
            Colormap::Cividis => "cividis",
            Colormap::Sinebow => "sinebow",
            Colormap::Rainbow => "rainbow",
            Colormap::Turbo => "turbo",
            Colormap::Spectral => "spectral",
        }
    }

    /// The backing gradient.
    pub fn gradient(&self) -> colorgrad::Gradient {
        match self {
            Colormap::Plasma => colorgrad::plasma(),
            Colormap::Viridis => colorgrad::viridis(),
            Colormap::Inferno => colorgrad::inferno(),
            Colormap::Magma => colorgrad::magma(),
            Colormap::Cividis => colorgrad::cividis(),
            Colormap::Sinebow => colorgrad::sinebow(),
            Colormap::Rainbow => colorgrad::rainbow(),
            Colormap::Turbo => colorgrad::turbo(),
            Colormap::Spectral => colorgrad::spectral(),
        }
    }

    /// Next catalogue entry, wrapping at the end.
    pub fn next(&self) -> Colormap {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous catalogue entry, wrapping at the start.
    pub fn previous(&self) -> Colormap {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| RasterError::UnknownColormap(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for colormap in Colormap::ALL {
            let parsed: Colormap = colormap.name().parse().unwrap();
            assert_eq!(parsed, colormap);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        for name in ["jet", "PLASMA", "", "plasma "] {
            assert!(matches!(
                name.parse::<Colormap>(),
                Err(RasterError::UnknownColormap(_))
            ));
        }
    }

    #[test]
    fn test_default_is_first_entry() {
        assert_eq!(Colormap::ALL[0], Colormap::Plasma);
    }

    #[test]
    fn test_cycling_covers_catalogue_and_wraps() {
        let mut current = Colormap::ALL[0];
        let mut seen = Vec::new();
        for _ in 0..Colormap::ALL.len() {
            seen.push(current);
            current = current.next();
        }
        assert_eq!(seen, Colormap::ALL.to_vec());
        assert_eq!(current, Colormap::ALL[0]);

        assert_eq!(Colormap::ALL[0].previous(), *Colormap::ALL.last().unwrap());
        for colormap in Colormap::ALL {
            assert_eq!(colormap.next().previous(), colormap);
        }
    }

    #[test]
    fn test_gradients_are_deterministic() {
        for colormap in Colormap::ALL {
            let a = colormap.gradient().at(0.37).to_rgba8();
            let b = colormap.gradient().at(0.37).to_rgba8();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_gradients_are_pairwise_distinct() {
        // Two colormaps count as distinct if they disagree anywhere over a
        // 256-sample sweep of the unit interval.
        let sweeps: Vec<Vec<[u8; 4]>> = Colormap::ALL
            .iter()
            .map(|colormap| {
                let gradient = colormap.gradient();
                (0..256)
                    .map(|i| gradient.at(i as f64 / 255.0).to_rgba8())
                    .collect()
            })
            .collect();

        for i in 0..sweeps.len() {
            for j in (i + 1)..sweeps.len() {
                assert_ne!(
                    sweeps[i], sweeps[j],
                    "{} and {} produce identical sweeps",
                    Colormap::ALL[i],
                    Colormap::ALL[j]
                );
            }
        }
    }
}
