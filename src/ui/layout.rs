use ratatui::layout::Rect;

/// Splits `total` cells into `parts` contiguous (offset, size) spans whose
/// sizes sum to exactly `total`. Leftover cells go to the leftmost spans, so
/// the board grid never leaves an unpainted column or row.
pub fn split_even(total: u16, parts: usize) -> Vec<(u16, u16)> {
    if parts == 0 {
        return Vec::new();
    }
    let base = total / parts as u16;
    let remainder = total as usize % parts;

    let mut spans = Vec::with_capacity(parts);
    let mut offset = 0;
    for index in 0..parts {
        let size = base + u16::from(index < remainder);
        spans.push((offset, size));
        offset += size;
    }
    spans
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 60;
    const MIN_POPUP_HEIGHT: u16 = 16;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_even_exact_division() {
        assert_eq!(split_even(12, 4), vec![(0, 3), (3, 3), (6, 3), (9, 3)]);
    }

    #[test]
    fn test_split_even_remainder_goes_left() {
        assert_eq!(split_even(10, 4), vec![(0, 3), (3, 3), (6, 2), (8, 2)]);
    }

    #[test]
    fn test_split_even_partitions_exactly() {
        for total in [0u16, 1, 7, 80, 131] {
            for parts in 1..=6 {
                let spans = split_even(total, parts);
                assert_eq!(spans.len(), parts);
                let sum: u16 = spans.iter().map(|(_, size)| size).sum();
                assert_eq!(sum, total, "total={total} parts={parts}");
                // Spans are contiguous from zero.
                let mut expected_offset = 0;
                for (offset, size) in spans {
                    assert_eq!(offset, expected_offset);
                    expected_offset += size;
                }
            }
        }
    }

    #[test]
    fn test_split_even_more_parts_than_cells() {
        let spans = split_even(3, 5);
        assert_eq!(spans, vec![(0, 1), (1, 1), (2, 1), (3, 0), (3, 0)]);
    }

    #[test]
    fn test_split_even_zero_parts() {
        assert!(split_even(10, 0).is_empty());
    }

    #[test]
    fn test_centered_rect_centers_within_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 50, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 20);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 10);
    }

    #[test]
    fn test_centered_rect_clamps_to_small_terminals() {
        let area = Rect::new(0, 0, 40, 12);
        let rect = centered_rect(70, 70, area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 12);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 0);
    }
}
