/// Outcome of checking a block against the space left on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBreakDecision {
    pub fits: bool,
    /// Space between the cursor and the bottom of the content area, never negative.
    pub remaining_space: f32,
}

/// Centralized logic to check if a block fits in the remaining space.
///
/// * `cursor_y`: The current Y position on the page.
/// * `block_height`: The height the block needs, reserved in full.
/// * `content_bottom`: The lowest Y content may reach (footer band excluded).
pub fn check_block_fit(cursor_y: f32, block_height: f32, content_bottom: f32) -> PageBreakDecision {
    let available = (content_bottom - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    PageBreakDecision {
        fits: block_height <= available + EPSILON,
        remaining_space: available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_counts_as_fitting() {
        let d = check_block_fit(500.0, 252.0, 752.0);
        assert!(d.fits);
        assert_eq!(d.remaining_space, 252.0);
    }

    #[test]
    fn overflowed_cursor_reports_zero_remaining() {
        let d = check_block_fit(800.0, 10.0, 752.0);
        assert!(!d.fits);
        assert_eq!(d.remaining_space, 0.0);
    }

    #[test]
    fn eight_rows_do_not_fit_in_sixty_points() {
        let d = check_block_fit(692.0, 8.0 * 25.0, 752.0);
        assert!(!d.fits);
        assert_eq!(d.remaining_space, 60.0);
    }
}
