//! Property tests for tick resolution

use proptest::prelude::*;
use rewind_breakout::sim::{Depth, Tick, TimelineLog, resolve};

fn timeline() -> impl Strategy<Value = Vec<Depth>> {
    // Mostly forward play with bursts of rewinds, like real input
    prop::collection::vec(
        prop_oneof![
            6 => Just(0u32),
            1 => 1u32..=4,
        ],
        0..80,
    )
}

/// In-progress backward walk for one felt rewind
struct Walk {
    travel: Depth,
    open: u32,
    cursor: Tick,
}

/// Same walk with an explicit stack instead of recursion
fn resolve_with_stack(depths: &[Depth], tick: Tick, immunity: Depth) -> Tick {
    let depth_at = |t: Tick| depths[(t - 1) as usize];
    if tick == 0 || tick > depths.len() as Tick || depth_at(tick) <= immunity {
        return tick;
    }

    let mut stack = vec![Walk {
        travel: depth_at(tick),
        open: 1,
        cursor: tick - 1,
    }];
    loop {
        let top = stack.last_mut().expect("walk stack is never empty here");
        if top.open > 0 && top.cursor > 0 {
            let here = depth_at(top.cursor);
            if here == top.travel {
                top.open += 1;
                top.cursor -= 1;
            } else if here < top.travel {
                top.open -= 1;
                top.cursor -= 1;
            } else {
                let nested = top.cursor;
                stack.push(Walk {
                    travel: here,
                    open: 1,
                    cursor: nested - 1,
                });
            }
        } else {
            let result = top.cursor;
            stack.pop();
            match stack.last_mut() {
                Some(parent) => parent.cursor = result,
                None => return result,
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_origin_never_after_tick(depths in timeline(), extra in 0u64..5, immunity in 0u32..=4) {
        let log = TimelineLog::try_from(depths).unwrap();
        for tick in 0..=log.len() + extra {
            prop_assert!(resolve(&log, tick, immunity) <= tick);
        }
    }

    #[test]
    fn prop_unfelt_rewind_is_fresh(depths in timeline(), immunity in 0u32..=4) {
        let log = TimelineLog::try_from(depths).unwrap();
        for tick in 1..=log.len() {
            if log.read(tick).unwrap() <= immunity {
                prop_assert_eq!(resolve(&log, tick, immunity), tick);
            }
        }
    }

    #[test]
    fn prop_felt_rewind_goes_back(depths in timeline(), immunity in 0u32..=4) {
        let log = TimelineLog::try_from(depths).unwrap();
        for tick in 1..=log.len() {
            if log.read(tick).unwrap() > immunity {
                prop_assert!(resolve(&log, tick, immunity) < tick);
            }
        }
    }

    #[test]
    fn prop_full_immunity_sees_no_rewinds(depths in timeline()) {
        let log = TimelineLog::try_from(depths).unwrap();
        for tick in 0..=log.len() {
            prop_assert_eq!(resolve(&log, tick, 4), tick);
        }
    }

    #[test]
    fn prop_fresh_origin_is_fixed_point(depths in timeline(), immunity in 0u32..=4) {
        let log = TimelineLog::try_from(depths).unwrap();
        for tick in 0..=log.len() {
            let origin = resolve(&log, tick, immunity);
            if origin == 0 || log.read(origin).unwrap() <= immunity {
                prop_assert_eq!(resolve(&log, origin, immunity), origin);
            }
        }
    }

    #[test]
    fn prop_recursive_and_stack_walks_agree(depths in timeline(), immunity in 0u32..=4) {
        let log = TimelineLog::try_from(depths.clone()).unwrap();
        for tick in 0..=log.len() + 1 {
            prop_assert_eq!(
                resolve(&log, tick, immunity),
                resolve_with_stack(&depths, tick, immunity)
            );
        }
    }
}
