//! Cox-Ross-Rubinstein binomial tree pricing.
//!
//! Implements the original CRR parameterisation: per-step up and down
//! factors derived from volatility via `u = exp(σ√dt)`, `d = 1/u`, with the
//! risk-neutral up-probability fixed by the no-arbitrage condition
//! `p = (exp(r·dt) - d) / (u - d)`.
//!
//! ## Assumptions
//!
//! - No dividends
//! - Constant short rate and volatility over the horizon

use num_traits::Float;

use crate::instruments::OptionSpec;

/// Prices a vanilla option on a CRR binomial lattice.
///
/// Builds the terminal layer of the recombining tree, evaluates the payoff
/// at every terminal node, then backward-induces the discounted expected
/// value to time zero. For American exercise the continuation value is
/// compared against the immediate-exercise payoff at every node.
///
/// The function is a pure computation: a constructed [`OptionSpec`] already
/// satisfies every structural invariant, so no failure path remains here.
///
/// # Model caveats
///
/// - The risk-neutral probability `p` is not constrained to [0, 1]. For
///   extreme rate/volatility/step combinations it can leave that interval;
///   the model still produces a value, but one without a probabilistic
///   interpretation. This matches the classic CRR formulation.
/// - Zero volatility makes `u == d` and the usual `p` undefined; the tree
///   then collapses to the single deterministic forward path
///   `F_k = S·exp(r·k·dt)` and the value is the discounted payoff along it
///   (with the early-exercise comparison still applied for American style).
/// - Extreme inputs can overflow `u^N` in floating point; no special
///   handling is attempted.
///
/// # Examples
/// ```
/// use lattice_core::types::PayoffType;
/// use lattice_pricing::instruments::OptionSpec;
/// use lattice_pricing::lattice::crr;
///
/// let call = OptionSpec::new(PayoffType::Call, 100.0_f64, 100.0, 0.05, 0.2, 1.0).unwrap();
/// let price = crr::price(&call);
/// assert!((price - 10.45).abs() < 0.05);
/// ```
pub fn price<T: Float>(spec: &OptionSpec<T>) -> T {
    let steps = spec.steps();
    let dt = spec.maturity() / T::from(steps).unwrap();

    let up = (spec.volatility() * dt.sqrt()).exp();
    let down = up.recip();

    if up == down {
        return price_deterministic(spec, dt);
    }

    let growth = (spec.rate() * dt).exp();
    let discount = growth.recip();
    let prob_up = (growth - down) / (up - down);
    let prob_down = T::one() - prob_up;

    // Terminal layer, indexed by the number of up-moves j in [0, steps].
    let mut stock: Vec<T> = (0..=steps)
        .map(|j| spec.spot() * up.powi(j as i32) * down.powi((steps - j) as i32))
        .collect();
    let mut value: Vec<T> = stock.iter().map(|&s| spec.payoff(s)).collect();

    let early_exercise = spec.exercise_style().allows_early_exercise();

    // Backward induction: each pass shrinks the active layer by one node.
    for remaining in (1..=steps).rev() {
        for j in 0..remaining {
            value[j] = discount * (prob_up * value[j + 1] + prob_down * value[j]);
        }
        value.truncate(remaining);

        if early_exercise {
            stock.truncate(remaining);
            for j in 0..remaining {
                // Stepping the recombining tree back one level multiplies
                // every node price by u.
                stock[j] = stock[j] * up;
                value[j] = value[j].max(spec.payoff(stock[j]));
            }
        }
    }

    value[0]
}

/// Degenerate single-branch lattice for zero effective volatility.
///
/// With `u == d == 1` the no-arbitrage probability is undefined, but the
/// risk-neutral underlying still accrues at the short rate. Each level k
/// holds the single forward price `F_k = S·exp(r·k·dt)`.
fn price_deterministic<T: Float>(spec: &OptionSpec<T>, dt: T) -> T {
    let steps = spec.steps();
    let growth = (spec.rate() * dt).exp();
    let discount = growth.recip();

    let mut forward = spec.spot() * growth.powi(steps as i32);

    if !spec.exercise_style().allows_early_exercise() {
        return discount.powi(steps as i32) * spec.payoff(forward);
    }

    let mut value = spec.payoff(forward);
    for _ in 0..steps {
        forward = forward * discount;
        value = (discount * value).max(spec.payoff(forward));
    }
    value
}
