use super::*;

fn canvas() -> Canvas {
    Canvas {
        width: 1920,
        height: 1080,
    }
}

#[test]
fn row_count_is_ceiling_of_slots_over_columns() {
    assert_eq!(GridLayout::new(canvas(), 3, 7).unwrap().rows, 3);
    assert_eq!(GridLayout::new(canvas(), 3, 6).unwrap().rows, 2);
    assert_eq!(GridLayout::new(canvas(), 3, 1).unwrap().rows, 1);
    assert_eq!(GridLayout::new(canvas(), 1, 5).unwrap().rows, 5);
}

#[test]
fn single_row_cells_span_full_height() {
    let layout = GridLayout::new(canvas(), 4, 4).unwrap();
    assert_eq!(layout.rows, 1);
    assert_eq!(layout.cell_width, 480);
    assert_eq!(layout.cell_height, 1080);
}

#[test]
fn cell_dimensions_use_floor_division() {
    // 1920 / 7 = 274 rem 2; the remainder is dropped, not distributed.
    let layout = GridLayout::new(canvas(), 7, 7).unwrap();
    assert_eq!(layout.cell_width, 274);
    assert_eq!(layout.cell_height, 1080);
}

#[test]
fn cell_rect_positions_by_column_and_row() {
    let layout = GridLayout::new(canvas(), 3, 6).unwrap();
    let cell = layout.cell(2, 1, 1);
    assert_eq!(
        cell,
        CellRect {
            left: 1280,
            top: 540,
            width: 640,
            height: 540,
        }
    );
}

#[test]
fn cell_rect_widens_with_span() {
    let layout = GridLayout::new(canvas(), 3, 6).unwrap();
    let cell = layout.cell(1, 0, 2);
    assert_eq!(
        cell,
        CellRect {
            left: 640,
            top: 0,
            width: 1280,
            height: 540,
        }
    );
}

#[test]
fn zero_columns_rejected() {
    assert!(matches!(
        GridLayout::new(canvas(), 0, 4),
        Err(GridcutError::Validation(_))
    ));
}

#[test]
fn zero_slots_rejected() {
    assert!(matches!(
        GridLayout::new(canvas(), 2, 0),
        Err(GridcutError::Validation(_))
    ));
}
