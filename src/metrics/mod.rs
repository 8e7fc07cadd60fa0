pub mod life_metrics;

pub use life_metrics::LifeMetrics;
