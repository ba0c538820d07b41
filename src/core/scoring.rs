//! Line-clear scoring, level progression and the gravity curve.

/// Base points by number of lines cleared at once (single / double / triple /
/// tetris), multiplied by the level at the time of the clear.
pub const SCORE_TABLE: [u32; 5] = [0, 100, 300, 500, 800];

/// Gravity interval at level 1, in milliseconds.
pub const BASE_DROP_MS: u64 = 1000;

/// Gravity speed-up per level, in milliseconds.
pub const DROP_STEP_MS: u64 = 100;

/// Gravity interval floor, in milliseconds.
pub const MIN_DROP_MS: u64 = 100;

/// Points awarded for clearing `lines` rows at `level`.
///
/// At most four rows fit any piece, so out-of-range counts score zero.
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    SCORE_TABLE[lines as usize] * level
}

/// Level for a cumulative line count: one level per ten lines, starting at 1.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / 10 + 1
}

/// Gravity interval for a level: `max(100, 1000 - (level-1) * 100)` ms.
///
/// This is frontend policy (the tick scheduler uses it); the engine itself
/// has no notion of wall-clock time.
pub fn drop_interval_ms(level: u32) -> u64 {
    BASE_DROP_MS
        .saturating_sub(u64::from(level.saturating_sub(1)) * DROP_STEP_MS)
        .max(MIN_DROP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_table_rewards() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(2, 1), 300);
        assert_eq!(line_clear_score(3, 1), 500);
        assert_eq!(line_clear_score(4, 1), 800);

        // Level scales the whole table.
        assert_eq!(line_clear_score(1, 2), 200);
        assert_eq!(line_clear_score(4, 3), 2400);

        // Impossible counts score nothing.
        assert_eq!(line_clear_score(5, 1), 0);
    }

    #[test]
    fn level_steps_every_ten_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(4), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn gravity_speeds_up_then_floors() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(50), 100);
    }
}
