//! Property tests for the flex layout engine.

use flexline_layout::{
    layout, AlignContent, AlignItems, Container, FlexDirection, FlexEngine, FlexItem, FlexWrap,
    JustifyContent, LayoutOptions,
};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-4;

fn item_strategy() -> impl Strategy<Value = FlexItem> {
    (
        0.0..200.0f64,
        0.0..100.0f64,
        -3i32..3,
        prop_oneof![Just(0.0), 0.0..3.0f64],
        prop_oneof![Just(0.0), 0.0..3.0f64],
        prop::option::of(0.0..60.0f64),
    )
        .prop_map(|(main, cross, order, grow, shrink, min)| {
            let item = FlexItem::new(main, cross)
                .with_order(order)
                .with_flex_grow(grow)
                .with_flex_shrink(shrink);
            match min {
                Some(min) => item.with_min_main_size(min),
                None => item,
            }
        })
}

fn items_strategy() -> impl Strategy<Value = Vec<FlexItem>> {
    prop::collection::vec(item_strategy(), 0..12)
}

fn container_strategy() -> impl Strategy<Value = Container> {
    (
        0.0..500.0f64,
        0.0..500.0f64,
        prop_oneof![Just(FlexWrap::NoWrap), Just(FlexWrap::Wrap)],
        prop_oneof![
            Just(JustifyContent::FlexStart),
            Just(JustifyContent::FlexEnd),
            Just(JustifyContent::Center),
            Just(JustifyContent::SpaceBetween),
            Just(JustifyContent::SpaceAround),
            Just(JustifyContent::SpaceEvenly),
        ],
        prop_oneof![
            Just(AlignItems::FlexStart),
            Just(AlignItems::FlexEnd),
            Just(AlignItems::Center),
            Just(AlignItems::Stretch),
        ],
        prop_oneof![
            Just(AlignContent::FlexStart),
            Just(AlignContent::FlexEnd),
            Just(AlignContent::Center),
            Just(AlignContent::SpaceBetween),
            Just(AlignContent::SpaceAround),
            Just(AlignContent::Stretch),
        ],
    )
        .prop_map(|(width, height, wrap, justify, align_items, align_content)| {
            Container::row(width, height)
                .with_wrap(wrap)
                .with_justify_content(justify)
                .with_align_items(align_items)
                .with_align_content(align_content)
        })
}

proptest! {
    #[test]
    fn frames_cover_every_item(items in items_strategy(), container in container_strategy()) {
        let result = layout(&items, &container);
        prop_assert_eq!(result.frames.len(), items.len());

        let mut order = result.visual_order();
        order.sort_unstable();
        prop_assert_eq!(order, (0..items.len()).collect::<Vec<_>>());
    }

    #[test]
    fn grown_lines_fill_but_never_exceed(items in items_strategy(), container in container_strategy()) {
        let result = layout(&items, &container);
        let main_size = container.main_size();

        for line in &result.lines {
            if line.main_size > main_size {
                continue;
            }
            let used: f64 = line.items.iter().map(|&i| result.frames[i].width).sum();
            prop_assert!(used <= main_size + TOLERANCE, "used {} > {}", used, main_size);
            if line.total_flex_grow > 0.0 {
                prop_assert!((used - main_size).abs() < TOLERANCE, "used {} != {}", used, main_size);
            }
        }
    }

    #[test]
    fn shrink_respects_min_size(items in items_strategy(), container in container_strategy()) {
        let result = layout(&items, &container);
        for (item, frame) in items.iter().zip(&result.frames) {
            let floor = item.min_main_size.unwrap_or(0.0);
            prop_assert!(frame.width >= floor - TOLERANCE, "{} < {}", frame.width, floor);
        }
    }

    #[test]
    fn presorting_by_order_changes_nothing(items in items_strategy(), container in container_strategy()) {
        let mut permutation: Vec<usize> = (0..items.len()).collect();
        permutation.sort_by_key(|&i| items[i].order);
        let sorted: Vec<FlexItem> = permutation.iter().map(|&i| items[i].clone()).collect();

        let original = layout(&items, &container);
        let presorted = layout(&sorted, &container);

        for (k, &i) in permutation.iter().enumerate() {
            let a = original.frames[i];
            let b = presorted.frames[k];
            prop_assert!(a.approx_eq(&b, TOLERANCE), "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn row_reverse_mirrors_row(items in items_strategy(), container in container_strategy()) {
        let forward = layout(&items, &container);
        let reversed = layout(&items, &container.clone().with_direction(FlexDirection::RowReverse));

        for (a, b) in forward.frames.iter().zip(&reversed.frames) {
            prop_assert!((b.x - (container.width - a.x - a.width)).abs() < TOLERANCE);
            prop_assert!((b.y - a.y).abs() < TOLERANCE);
            prop_assert!((b.width - a.width).abs() < TOLERANCE);
            prop_assert!((b.height - a.height).abs() < TOLERANCE);
        }
    }

    #[test]
    fn column_reverse_mirrors_column(items in items_strategy(), container in container_strategy()) {
        let column = container.clone().with_direction(FlexDirection::Column);
        let forward = layout(&items, &column);
        let reversed = layout(&items, &column.clone().with_direction(FlexDirection::ColumnReverse));

        for (a, b) in forward.frames.iter().zip(&reversed.frames) {
            prop_assert!((b.y - (column.height - a.y - a.height)).abs() < TOLERANCE);
            prop_assert!((b.x - a.x).abs() < TOLERANCE);
            prop_assert!((b.height - a.height).abs() < TOLERANCE);
        }
    }

    #[test]
    fn wrap_reverse_mirrors_wrap(items in items_strategy(), container in container_strategy()) {
        let wrapped = container.clone().with_wrap(FlexWrap::Wrap);
        let forward = layout(&items, &wrapped);
        let reversed = layout(&items, &wrapped.clone().with_wrap(FlexWrap::WrapReverse));

        for (a, b) in forward.frames.iter().zip(&reversed.frames) {
            prop_assert!((b.y - (wrapped.height - a.y - a.height)).abs() < TOLERANCE);
            prop_assert!((b.x - a.x).abs() < TOLERANCE);
            prop_assert!((b.height - a.height).abs() < TOLERANCE);
        }
    }

    #[test]
    fn pixel_rounding_yields_whole_pixels(items in items_strategy(), container in container_strategy()) {
        let engine = FlexEngine::new(LayoutOptions::pixel());
        let result = engine.layout(&items, &container);
        for frame in &result.frames {
            for value in [frame.x, frame.y, frame.width, frame.height] {
                prop_assert!((value - value.round()).abs() < 1e-6, "{:?}", frame);
            }
        }
    }

    #[test]
    fn layout_is_deterministic(items in items_strategy(), container in container_strategy()) {
        prop_assert_eq!(layout(&items, &container), layout(&items, &container));
    }
}
