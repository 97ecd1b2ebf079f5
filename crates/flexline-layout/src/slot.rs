//! Normalized per-item working state for a layout pass.
//!
//! A slot holds everything the engine needs about one item in logical
//! axis terms: main/cross instead of width/height, leading/trailing margins
//! instead of physical edges. Invalid inputs are normalized here so later
//! phases never see negative, NaN or inverted values.

use flexline_core::{AlignItems, Container, FlexItem};

use crate::options::LayoutOptions;

#[derive(Debug, Clone)]
pub(crate) struct FlexSlot {
    /// Index of the item in the caller's input
    pub index: usize,
    /// Hypothetical main size, before flexing
    pub base: f64,
    /// Resolved main size
    pub main: f64,
    pub min_main: f64,
    pub max_main: f64,
    pub main_lead: f64,
    pub main_trail: f64,
    /// Hypothetical cross size, later the resolved cross size
    pub cross: f64,
    pub min_cross: f64,
    pub max_cross: f64,
    pub cross_lead: f64,
    pub cross_trail: f64,
    pub grow: f64,
    pub shrink: f64,
    /// Effective alignment; baseline only when a baseline is usable
    pub align: AlignItems,
    /// Baseline distance from the item's cross-start edge
    pub baseline: Option<f64>,
    pub wrap_before: bool,
    /// Logical main-axis offset within the content box
    pub main_pos: f64,
    /// Logical cross-axis offset within the content box
    pub cross_pos: f64,
}

impl FlexSlot {
    pub fn new(index: usize, item: &FlexItem, container: &Container, options: &LayoutOptions) -> Self {
        let direction = container.flex_direction;
        let wrap = container.flex_wrap;

        let (min_main, max_main) = limits(item.min_main_size, item.max_main_size, options);
        let (min_cross, max_cross) = limits(item.min_cross_size, item.max_cross_size, options);

        let basis = if item.has_flex_basis() {
            let percent = item.flex_basis_percent.min(100.0);
            options.snap(container.main_size() * percent / 100.0)
        } else {
            options.snap(non_negative(item.measured_main_size))
        };
        let base = clamp(basis, min_main, max_main);
        let cross = clamp(options.snap(non_negative(item.measured_cross_size)), min_cross, max_cross);

        let (main_lead, main_trail) = item.margin.main_edges(direction);
        let (cross_lead, cross_trail) = item.margin.cross_edges(direction, wrap);

        let mut align = item.align_self.resolve(container.align_items);
        let mut baseline = None;
        if align == AlignItems::Baseline {
            // Baselines are horizontal, so they only apply across a vertical cross axis.
            match item.baseline.filter(|_| direction.is_row()) {
                Some(offset) => {
                    let offset = options.snap(non_negative(offset)).min(cross);
                    baseline = Some(if wrap.is_reverse() { cross - offset } else { offset });
                }
                None => align = AlignItems::FlexStart,
            }
        }

        Self {
            index,
            base,
            main: base,
            min_main,
            max_main,
            main_lead: options.snap(non_negative(main_lead)),
            main_trail: options.snap(non_negative(main_trail)),
            cross,
            min_cross,
            max_cross,
            cross_lead: options.snap(non_negative(cross_lead)),
            cross_trail: options.snap(non_negative(cross_trail)),
            grow: non_negative(item.flex_grow),
            shrink: non_negative(item.flex_shrink),
            align,
            baseline,
            wrap_before: item.wrap_before,
            main_pos: 0.0,
            cross_pos: 0.0,
        }
    }

    /// Base main size plus main margins.
    pub fn outer_base(&self) -> f64 {
        self.base + self.main_lead + self.main_trail
    }

    /// Resolved main size plus main margins.
    pub fn outer_main(&self) -> f64 {
        self.main + self.main_lead + self.main_trail
    }

    /// Cross size plus cross margins.
    pub fn outer_cross(&self) -> f64 {
        self.cross + self.cross_lead + self.cross_trail
    }

    pub fn clamp_main(&self, size: f64) -> f64 {
        clamp(size, self.min_main, self.max_main)
    }

    pub fn clamp_cross(&self, size: f64) -> f64 {
        clamp(size, self.min_cross, self.max_cross)
    }
}

/// Clamp with `min` winning over an inverted `max`.
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Map NaN and negative values to zero. Infinity passes through.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

fn limits(min: Option<f64>, max: Option<f64>, options: &LayoutOptions) -> (f64, f64) {
    let min = options.snap(min.map(non_negative).unwrap_or(0.0));
    let max = match max {
        Some(max) if !max.is_nan() => options.snap(max.max(0.0)),
        _ => f64::INFINITY,
    };
    (min, max.max(min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexline_core::{AlignSelf, FlexDirection, FlexWrap, Insets};

    fn slot(item: FlexItem, container: &Container) -> FlexSlot {
        FlexSlot::new(0, &item, container, &LayoutOptions::default())
    }

    #[test]
    fn test_base_uses_measured_size() {
        let container = Container::row(300.0, 100.0);
        let s = slot(FlexItem::new(80.0, 20.0), &container);
        assert!((s.base - 80.0).abs() < 0.001);
        assert!((s.cross - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_flex_basis_percent_overrides_measured() {
        let container = Container::row(300.0, 100.0);
        let s = slot(FlexItem::new(80.0, 20.0).with_flex_basis_percent(50.0), &container);
        assert!((s.base - 150.0).abs() < 0.001);
    }

    #[test]
    fn test_base_is_clamped() {
        let container = Container::row(300.0, 100.0);
        let s = slot(FlexItem::new(80.0, 20.0).with_max_main_size(60.0), &container);
        assert!((s.base - 60.0).abs() < 0.001);

        let s = slot(FlexItem::new(10.0, 20.0).with_min_main_size(30.0), &container);
        assert!((s.base - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_inverted_limits_let_min_win() {
        let container = Container::row(300.0, 100.0);
        let item = FlexItem::new(10.0, 10.0).with_min_main_size(50.0).with_max_main_size(20.0);
        let s = slot(item, &container);
        assert!((s.base - 50.0).abs() < 0.001);
        assert!((s.max_main - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_negative_and_nan_inputs_normalize() {
        let container = Container::row(300.0, 100.0);
        let item = FlexItem::new(-20.0, f64::NAN).with_flex_grow(-1.0);
        let s = slot(item, &container);
        assert_eq!(s.base, 0.0);
        assert_eq!(s.cross, 0.0);
        assert_eq!(s.grow, 0.0);
    }

    #[test]
    fn test_margins_follow_axes() {
        let container = Container::column(100.0, 300.0).with_wrap(FlexWrap::WrapReverse);
        let margin = Insets { top: 1.0, right: 2.0, bottom: 3.0, left: 4.0 };
        let s = slot(FlexItem::new(10.0, 10.0).with_margin(margin), &container);
        assert_eq!((s.main_lead, s.main_trail), (1.0, 3.0));
        assert_eq!((s.cross_lead, s.cross_trail), (2.0, 4.0));
    }

    #[test]
    fn test_baseline_fallbacks() {
        let row = Container::row(300.0, 100.0);
        let s = slot(FlexItem::new(10.0, 40.0).with_align_self(AlignSelf::Baseline), &row);
        assert_eq!(s.align, AlignItems::FlexStart);

        let column = Container::new(300.0, 100.0).with_direction(FlexDirection::Column);
        let item = FlexItem::new(10.0, 40.0).with_align_self(AlignSelf::Baseline).with_baseline(12.0);
        assert_eq!(slot(item.clone(), &column).align, AlignItems::FlexStart);

        let s = slot(item.clone(), &row);
        assert_eq!(s.align, AlignItems::Baseline);
        assert_eq!(s.baseline, Some(12.0));

        let reversed = row.with_wrap(FlexWrap::WrapReverse);
        assert_eq!(slot(item, &reversed).baseline, Some(28.0));
    }

    #[test]
    fn test_pixel_snapping() {
        let container = Container::row(300.0, 100.0);
        let item = FlexItem::new(10.4, 20.6).with_flex_basis_percent(33.3);
        let s = FlexSlot::new(0, &item, &container, &LayoutOptions::pixel());
        assert_eq!(s.base, 100.0);
        assert_eq!(s.cross, 21.0);
    }
}
