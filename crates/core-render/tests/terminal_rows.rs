use core_render::{ColorScheme, Region, RowRenderer, TerminalSurface, container_id, row_id};
use core_sort::{lane_count, merge_sort, range};
use core_terminal::TerminalCapabilities;
use proptest::prelude::*;

fn surface(width: u16, height: u16) -> TerminalSurface<Vec<u8>> {
    TerminalSurface::new(
        Vec::new(),
        container_id("term"),
        Region::new(2, 1, width, height),
        TerminalCapabilities::basic(),
    )
}

#[test]
fn one_frame_per_report() {
    let input: Vec<u32> = range(8).into_iter().rev().collect();
    let mut renderer =
        RowRenderer::new("term", 8, ColorScheme::default(), surface(16, 4)).unwrap();
    merge_sort(&input, &mut renderer);
    let surface = renderer.finish().unwrap();
    assert_eq!(surface.frames(), 15);
    for depth in 0..4 {
        assert_eq!(surface.row_fill(&row_id("term", depth)), Some(16));
    }
    let text = String::from_utf8(surface.into_inner()).unwrap();
    // Region origin (2, 1) -> first root cell at line 2, column 3 (1-based).
    assert!(text.contains("\x1b[2;3H"));
}

#[test]
fn too_few_lines_fails() {
    let mut renderer =
        RowRenderer::new("term", 8, ColorScheme::default(), surface(16, 2)).unwrap();
    let sorted = merge_sort(&range(8), &mut renderer);
    // The sort itself is unaffected by rendering failures.
    assert_eq!(sorted, range(8));
    assert!(renderer.finish().is_err());
}

proptest! {
    // Every lane of a completed sort spans exactly the region width.
    #[test]
    fn full_rows_span_region(n in 1usize..64, extra in 0u16..40) {
        let width = n as u16 + extra;
        let height = lane_count(n) as u16;
        let input: Vec<u32> = range(n).into_iter().rev().collect();
        let mut renderer =
            RowRenderer::new("term", n, ColorScheme::default(), surface(width, height)).unwrap();
        merge_sort(&input, &mut renderer);
        let surface = renderer.finish().unwrap();
        // The deepest lane only holds the leaves that reach it; all others are full.
        for depth in 0..lane_count(n).saturating_sub(1) {
            prop_assert_eq!(surface.row_fill(&row_id("term", depth)), Some(width));
        }
    }
}
