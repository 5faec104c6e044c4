// This binary runs the streetlights benchmark to completion:
// 100 000 iterations of online SGD over the 4-example dataset,
// printing one `Error:<value>` line every 10th iteration.
use streetlight_nn::{Dataset, TrainConfig, Trainer};

fn main() {
    let config = TrainConfig::new(100_000, 1);
    let mut trainer = Trainer::new(Dataset::streetlights(), config);
    trainer.run();
}
