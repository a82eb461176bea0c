use super::Action;
use crate::error::{Error, Result};
use crate::light::{LightState, StopLine};
use rand::Rng;
use rand_distr::{Beta, Distribution};

/// The shape parameters of the distribution of legal utility for
/// running an amber light before reaching the stop line.
const AMBER_SHAPE: (f64, f64) = (1.86, 1.0);

/// Computes the unweighted legal utility of an action.
///
/// Braking and proceeding through a green light are always legal, and
/// proceeding through a red light never is. Proceeding through an amber
/// light is legal once past the stop line; before it, the utility is drawn
/// from a Beta(1.86, 1) distribution.
pub fn legal_utility<R: Rng + ?Sized>(
    action: Action,
    light: LightState,
    stop_line: StopLine,
    rng: &mut R,
) -> Result<f64> {
    use LightState::*;
    let utility = match (action, light, stop_line) {
        (Action::Brake, _, _) => 1.0,
        (Action::Proceed, Green, _) => 1.0,
        (Action::Proceed, Red, _) => 0.0,
        (Action::Proceed, Amber, StopLine::Past) => 1.0,
        (Action::Proceed, Amber, StopLine::NotPast) => {
            let distr = Beta::new(AMBER_SHAPE.0, AMBER_SHAPE.1)
                .map_err(|_| Error::InvalidParameter("amber light distribution"))?;
            distr.sample(rng)
        }
    };
    Ok(utility)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn deterministic_cases() {
        let mut rng = StdRng::seed_from_u64(7);
        for light in [LightState::Green, LightState::Red, LightState::Amber] {
            for stop_line in [StopLine::Past, StopLine::NotPast] {
                assert_eq!(legal_utility(Action::Brake, light, stop_line, &mut rng), Ok(1.0));
            }
        }
        let proceed = |light, stop_line, rng: &mut StdRng| {
            legal_utility(Action::Proceed, light, stop_line, rng).unwrap()
        };
        assert_eq!(proceed(LightState::Green, StopLine::NotPast, &mut rng), 1.0);
        assert_eq!(proceed(LightState::Red, StopLine::Past, &mut rng), 0.0);
        assert_eq!(proceed(LightState::Amber, StopLine::Past, &mut rng), 1.0);
    }

    #[test]
    fn amber_before_stop_line_is_sampled() {
        let mut rng = StdRng::from_seed(*b"Vegemite sandwhich is not fun...");
        let samples = (0..2000)
            .map(|_| {
                legal_utility(Action::Proceed, LightState::Amber, StopLine::NotPast, &mut rng)
                    .unwrap()
            })
            .collect::<Vec<_>>();
        assert!(samples.iter().all(|u| (0.0..=1.0).contains(u)));
        // The mean of Beta(a, b) is a / (a + b)
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!((mean - 1.86 / 2.86).abs() < 0.03, "mean was {}", mean);
    }
}
