use std::time::{Duration, Instant};

pub struct LifeMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub frames_drawn: u64,
    pub peak_population: usize,
}

impl LifeMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            frames_drawn: 0,
            peak_population: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_frame(&mut self, population: usize) {
        self.frames_drawn += 1;
        if population > self.peak_population {
            self.peak_population = population;
        }
    }

    /// Board was randomized or cleared; the old peak no longer means anything
    pub fn on_reset(&mut self, population: usize) {
        self.peak_population = population;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for LifeMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = LifeMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_peak_population_tracking() {
        let mut metrics = LifeMetrics::new();

        metrics.on_frame(10);
        assert_eq!(metrics.peak_population, 10);
        assert_eq!(metrics.frames_drawn, 1);

        metrics.on_frame(5);
        assert_eq!(metrics.peak_population, 10); // Should not decrease
        assert_eq!(metrics.frames_drawn, 2);

        metrics.on_frame(15);
        assert_eq!(metrics.peak_population, 15);

        metrics.on_reset(3);
        assert_eq!(metrics.peak_population, 3);
        assert_eq!(metrics.frames_drawn, 3);
    }

    #[test]
    fn test_update_tracks_elapsed() {
        let mut metrics = LifeMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);
    }
}
