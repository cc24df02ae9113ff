use crate::constants::MAX_SAMPLES_PER_FRAME;

/// Explicit playback state machine for the reveal animation.
///
/// State is the number of samples currently revealed, in `[0, total]`. Each
/// rendered frame feeds wall-clock time into the accumulator and one more
/// sample is revealed per `step_s` seconds, so playback advances in real time
/// matching the physical time step. Reaching `total` is terminal; further
/// ticks are no-ops.
pub(crate) struct Playback {
    revealed: usize,
    total: usize,
    step_s: f64,
    accumulator_s: f64,
}

impl Playback {
    pub(crate) fn new(total: usize, step_s: f64) -> Self {
        Self {
            revealed: 0,
            total,
            step_s: step_s.max(1e-6),
            accumulator_s: 0.0,
        }
    }

    pub(crate) fn revealed(&self) -> usize {
        self.revealed
    }

    pub(crate) fn is_done(&self) -> bool {
        self.revealed == self.total
    }

    pub(crate) fn advance(&mut self, frame_dt_s: f64) {
        if self.is_done() {
            return;
        }

        self.accumulator_s += frame_dt_s.max(0.0);

        // Bounded drain so a stalled frame cannot fast-forward the flight.
        let mut steps = 0;
        while self.accumulator_s >= self.step_s
            && !self.is_done()
            && steps < MAX_SAMPLES_PER_FRAME
        {
            self.accumulator_s -= self.step_s;
            self.revealed += 1;
            steps += 1;
        }

        if self.is_done() {
            self.accumulator_s = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Playback;
    use crate::constants::MAX_SAMPLES_PER_FRAME;

    #[test]
    fn reveals_one_sample_per_step() {
        let mut playback = Playback::new(10, 0.01);
        assert_eq!(playback.revealed(), 0);

        playback.advance(0.01);
        assert_eq!(playback.revealed(), 1);

        playback.advance(0.02);
        assert_eq!(playback.revealed(), 3);
    }

    #[test]
    fn accumulates_partial_frames() {
        let mut playback = Playback::new(10, 0.01);

        playback.advance(0.004);
        assert_eq!(playback.revealed(), 0);
        playback.advance(0.004);
        assert_eq!(playback.revealed(), 0);
        playback.advance(0.004);
        assert_eq!(playback.revealed(), 1);
    }

    #[test]
    fn stops_at_sequence_length() {
        let mut playback = Playback::new(3, 0.01);

        playback.advance(1.0);
        assert_eq!(playback.revealed(), 3);
        assert!(playback.is_done());

        playback.advance(1.0);
        assert_eq!(playback.revealed(), 3);
    }

    #[test]
    fn clamps_samples_revealed_in_one_frame() {
        let mut playback = Playback::new(1000, 0.01);

        // A 10 s stall is worth 1000 steps but only the clamp's worth lands.
        playback.advance(10.0);
        assert_eq!(playback.revealed(), MAX_SAMPLES_PER_FRAME);
    }

    #[test]
    fn empty_sequence_is_terminal_from_the_start() {
        let mut playback = Playback::new(0, 0.01);
        assert!(playback.is_done());

        playback.advance(0.5);
        assert_eq!(playback.revealed(), 0);
    }
}
