//! Horizontal pointer position to discrete region

/// Map a pointer x coordinate over an element to one of `region_count`
/// equal-width regions.
///
/// The pointer is clamped into `[left, left + width - 1]` first, so positions
/// outside the element resolve to the nearest edge region. Non-finite input,
/// a width below one pixel, or a zero count map to region 0.
pub fn region_from_pointer(
    pointer_x: f32,
    element_left: f32,
    element_width: f32,
    region_count: usize,
) -> usize {
    if region_count == 0
        || !pointer_x.is_finite()
        || !element_left.is_finite()
        || !element_width.is_finite()
        || element_width < 1.0
    {
        return 0;
    }

    let x = pointer_x.clamp(element_left, element_left + element_width - 1.0);
    let fraction = (x - element_left) / element_width;
    let region = (fraction * region_count as f32).floor() as usize;
    region.min(region_count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_equal_slices() {
        assert_eq!(region_from_pointer(100.0, 100.0, 300.0, 3), 0);
        assert_eq!(region_from_pointer(199.0, 100.0, 300.0, 3), 0);
        assert_eq!(region_from_pointer(200.0, 100.0, 300.0, 3), 1);
        assert_eq!(region_from_pointer(300.0, 100.0, 300.0, 3), 2);
        assert_eq!(region_from_pointer(399.0, 100.0, 300.0, 3), 2);
    }

    #[test]
    fn clamps_outside_pointer() {
        assert_eq!(region_from_pointer(-50.0, 100.0, 300.0, 4), 0);
        assert_eq!(region_from_pointer(5_000.0, 100.0, 300.0, 4), 3);
    }

    #[test]
    fn degenerate_inputs_map_to_zero() {
        assert_eq!(region_from_pointer(10.0, 0.0, 0.0, 4), 0);
        assert_eq!(region_from_pointer(10.0, 0.0, 0.5, 4), 0);
        assert_eq!(region_from_pointer(10.0, 0.0, 100.0, 0), 0);
        assert_eq!(region_from_pointer(f32::NAN, 0.0, 100.0, 4), 0);
    }

    #[test]
    fn mapping_is_monotonic() {
        for count in 1..=7 {
            for width in [1.0_f32, 37.0, 240.0, 999.5] {
                let mut last = 0;
                let mut x = -20.0_f32;
                while x < width + 20.0 {
                    let region = region_from_pointer(x, 0.0, width, count);
                    assert!(
                        region >= last,
                        "x={x} width={width} count={count}"
                    );
                    assert!(region < count);
                    last = region;
                    x += 0.25;
                }
            }
        }
    }
}
