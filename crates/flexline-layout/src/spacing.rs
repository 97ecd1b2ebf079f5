//! Distribution of leftover space around items in a line, or around lines
//! in a container.

use flexline_core::{AlignContent, JustifyContent};

use crate::options::LayoutOptions;

/// Placement mode shared by `justify_content` and `align_content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl From<JustifyContent> for Placement {
    fn from(justify: JustifyContent) -> Self {
        match justify {
            JustifyContent::FlexStart => Self::Start,
            JustifyContent::FlexEnd => Self::End,
            JustifyContent::Center => Self::Center,
            JustifyContent::SpaceBetween => Self::SpaceBetween,
            JustifyContent::SpaceAround => Self::SpaceAround,
            JustifyContent::SpaceEvenly => Self::SpaceEvenly,
        }
    }
}

impl From<AlignContent> for Placement {
    fn from(align: AlignContent) -> Self {
        match align {
            AlignContent::FlexEnd => Self::End,
            AlignContent::Center => Self::Center,
            AlignContent::SpaceBetween => Self::SpaceBetween,
            AlignContent::SpaceAround => Self::SpaceAround,
            // Stretch grows the lines themselves; what is left packs at the start.
            AlignContent::FlexStart | AlignContent::Stretch => Self::Start,
        }
    }
}

/// Space before the first box and between adjacent boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Spacing {
    pub leading: f64,
    pub between: f64,
}

/// Split `free` space around `count` boxes.
///
/// Overflow (negative `free`) cannot be shared as gaps: space-between then
/// packs at the start and the space-around modes center instead.
pub(crate) fn distribute(placement: Placement, free: f64, count: usize) -> Spacing {
    let placement = match placement {
        Placement::SpaceBetween if free < 0.0 || count < 2 => Placement::Start,
        Placement::SpaceAround | Placement::SpaceEvenly if free < 0.0 => Placement::Center,
        other => other,
    };

    let n = count.max(1) as f64;
    let (leading, between) = match placement {
        Placement::Start => (0.0, 0.0),
        Placement::End => (free, 0.0),
        Placement::Center => (free / 2.0, 0.0),
        Placement::SpaceBetween => (0.0, free / (n - 1.0)),
        Placement::SpaceAround => {
            let space = free / n;
            (space / 2.0, space)
        }
        Placement::SpaceEvenly => {
            let space = free / (n + 1.0);
            (space, space)
        }
    };
    Spacing { leading, between }
}

/// Offsets to insert before each of `count` boxes: the leading space for the
/// first, the between space plus `fixed_gap` for the rest.
///
/// Under pixel rounding the shares are apportioned together, so the last
/// box of a space-between run still lands flush with the end.
pub(crate) fn offsets(spacing: Spacing, count: usize, fixed_gap: f64, options: &LayoutOptions) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }

    let mut shares = Vec::with_capacity(count);
    shares.push(spacing.leading);
    shares.extend(std::iter::repeat(spacing.between).take(count - 1));
    options.apportion(&mut shares);

    for share in shares.iter_mut().skip(1) {
        *share += fixed_gap;
    }
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spacing(placement: Placement, free: f64, count: usize) -> (f64, f64) {
        let s = distribute(placement, free, count);
        (s.leading, s.between)
    }

    #[test]
    fn test_packing_modes() {
        assert_eq!(spacing(Placement::Start, 90.0, 3), (0.0, 0.0));
        assert_eq!(spacing(Placement::End, 90.0, 3), (90.0, 0.0));
        assert_eq!(spacing(Placement::Center, 90.0, 3), (45.0, 0.0));
    }

    #[test]
    fn test_space_between() {
        assert_eq!(spacing(Placement::SpaceBetween, 150.0, 3), (0.0, 75.0));
        // A single box degenerates to start.
        assert_eq!(spacing(Placement::SpaceBetween, 150.0, 1), (0.0, 0.0));
    }

    #[test]
    fn test_space_around() {
        assert_eq!(spacing(Placement::SpaceAround, 100.0, 2), (25.0, 50.0));
    }

    #[test]
    fn test_space_evenly() {
        assert_eq!(spacing(Placement::SpaceEvenly, 90.0, 3), (22.5, 22.5));
    }

    #[test]
    fn test_overflow_fallbacks() {
        assert_eq!(spacing(Placement::SpaceBetween, -20.0, 3), (0.0, 0.0));
        assert_eq!(spacing(Placement::SpaceAround, -20.0, 3), (-10.0, 0.0));
        assert_eq!(spacing(Placement::SpaceEvenly, -20.0, 3), (-10.0, 0.0));
        assert_eq!(spacing(Placement::End, -20.0, 3), (-20.0, 0.0));
    }

    #[test]
    fn test_align_content_stretch_packs_at_start() {
        assert_eq!(Placement::from(AlignContent::Stretch), Placement::Start);
        assert_eq!(Placement::from(AlignContent::SpaceAround), Placement::SpaceAround);
    }

    #[test]
    fn test_offsets_exact() {
        let s = distribute(Placement::SpaceEvenly, 90.0, 3);
        let offsets = offsets(s, 3, 10.0, &LayoutOptions::default());
        assert_eq!(offsets, vec![22.5, 32.5, 32.5]);
    }

    #[test]
    fn test_offsets_pixel_remainder_trails() {
        // 100px over 3 gaps between 4 boxes: 33.33 each.
        let s = distribute(Placement::SpaceBetween, 100.0, 4);
        let offsets = offsets(s, 4, 0.0, &LayoutOptions::pixel());
        assert_eq!(offsets, vec![0.0, 33.0, 33.0, 34.0]);
    }

    #[test]
    fn test_offsets_empty() {
        let s = distribute(Placement::Start, 10.0, 0);
        assert!(offsets(s, 0, 0.0, &LayoutOptions::default()).is_empty());
    }
}
