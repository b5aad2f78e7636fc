use rand::{rngs::StdRng, Rng, SeedableRng};
use shared::SamplePair;

use crate::error::UiError;

/// Draws a scatter plot of `samples` into the page element `target`,
/// replacing whatever it showed before.
pub trait ScatterRenderer {
    fn render(&self, samples: &SamplePair, target: &str) -> Result<(), UiError>;
}

/// Draws `len` fresh samples from `rng` and hands them to `renderer`.
pub fn draw_fresh<R, G>(renderer: &R, rng: &mut G, len: usize, target: &str) -> Result<(), UiError>
where
    R: ScatterRenderer + ?Sized,
    G: Rng + ?Sized,
{
    let samples = SamplePair::standard_normal(rng, len);
    log::debug!("drawing {} samples into {target:?}", samples.len());
    renderer.render(&samples, target)
}

pub fn plot_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(String, SamplePair)>>);

    impl ScatterRenderer for Recorder {
        fn render(&self, samples: &SamplePair, target: &str) -> Result<(), UiError> {
            self.0
                .borrow_mut()
                .push((target.to_string(), samples.clone()));
            Ok(())
        }
    }

    #[test]
    fn draws_square_pairs_into_target() {
        let recorder = Recorder::default();
        let mut rng = plot_rng(Some(11));
        draw_fresh(&recorder, &mut rng, 100, "graph-area").unwrap();

        let calls = recorder.0.borrow();
        assert_eq!(calls.len(), 1);
        let (target, samples) = &calls[0];
        assert_eq!(target, "graph-area");
        assert_eq!(samples.x().len(), 100);
        assert_eq!(samples.y().len(), 100);
        assert!(samples.points().all(|(x, y)| y == x * x));
    }

    #[test]
    fn every_draw_is_fresh() {
        let recorder = Recorder::default();
        let mut rng = plot_rng(Some(5));
        draw_fresh(&recorder, &mut rng, 10, "a").unwrap();
        draw_fresh(&recorder, &mut rng, 10, "a").unwrap();
        let calls = recorder.0.borrow();
        assert_ne!(calls[0].1, calls[1].1);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = SamplePair::standard_normal(&mut plot_rng(Some(9)), 5);
        let b = SamplePair::standard_normal(&mut plot_rng(Some(9)), 5);
        assert_eq!(a, b);
    }
}
