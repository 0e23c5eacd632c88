use petreels::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use petreels::ui::mvi::Reducer;

fn reduce_all(state: CarouselState, intents: &[CarouselIntent]) -> CarouselState {
    intents
        .iter()
        .fold(state, |state, intent| CarouselReducer::reduce(state, *intent))
}

#[test]
fn goto_normalizes_with_floored_modulo() {
    for n in 1..=6usize {
        for k in -13i64..=13 {
            let state = CarouselReducer::reduce(
                CarouselState::new(n),
                CarouselIntent::GoTo { index: k },
            );
            let expected = ((k % n as i64) + n as i64) % n as i64;
            assert_eq!(state.active_index(), Some(expected as usize), "n={n} k={k}");
        }
    }
}

#[test]
fn goto_minus_one_lands_on_last() {
    let state = CarouselReducer::reduce(CarouselState::new(4), CarouselIntent::GoTo { index: -1 });
    assert_eq!(state.active_index(), Some(3));
}

#[test]
fn goto_sets_manual_pause() {
    let state = CarouselReducer::reduce(CarouselState::new(4), CarouselIntent::GoTo { index: 2 });
    assert!(state.is_manually_paused());
    assert!(state.is_paused());
}

#[test]
fn next_wraps_from_last_to_first() {
    let state = reduce_all(
        CarouselState::new(4),
        &[CarouselIntent::GoTo { index: 3 }, CarouselIntent::Next],
    );
    assert_eq!(state.active_index(), Some(0));
    assert!(state.is_manually_paused());
}

#[test]
fn prev_wraps_from_first_to_last() {
    let state = CarouselReducer::reduce(CarouselState::new(4), CarouselIntent::Prev);
    assert_eq!(state.active_index(), Some(3));
    assert!(state.is_manually_paused());
}

#[test]
fn next_and_prev_pause_like_goto() {
    let via_goto =
        CarouselReducer::reduce(CarouselState::new(3), CarouselIntent::GoTo { index: 1 });
    let via_next = CarouselReducer::reduce(CarouselState::new(3), CarouselIntent::Next);
    assert_eq!(via_goto, via_next);
}

#[test]
fn tick_advances_without_pausing() {
    let state = CarouselReducer::reduce(CarouselState::new(4), CarouselIntent::Tick);
    assert_eq!(state.active_index(), Some(1));
    assert!(!state.is_paused());
}

#[test]
fn n_ticks_complete_a_cycle() {
    for n in 1..=5usize {
        let start = CarouselReducer::reduce(CarouselState::new(n), CarouselIntent::ScrollSync {
            index: n / 2,
        });
        let ticks = vec![CarouselIntent::Tick; n];
        let end = reduce_all(start.clone(), &ticks);
        assert_eq!(end.active_index(), start.active_index(), "n={n}");
    }
}

#[test]
fn empty_state_ignores_navigation() {
    let empty = CarouselState::new(0);
    let state = reduce_all(
        empty.clone(),
        &[
            CarouselIntent::GoTo { index: 5 },
            CarouselIntent::Next,
            CarouselIntent::Prev,
            CarouselIntent::Tick,
            CarouselIntent::ScrollSync { index: 2 },
        ],
    );
    assert_eq!(state, empty);
    assert_eq!(state.active_index(), None);
}

#[test]
fn hover_flags_toggle_independently_of_manual_pause() {
    let state = reduce_all(
        CarouselState::new(4),
        &[CarouselIntent::PointerEnter, CarouselIntent::Next, CarouselIntent::PointerLeave],
    );
    assert!(!state.is_hover_paused());
    assert!(state.is_manually_paused());
    assert!(state.is_paused());
}

#[test]
fn hover_alone_pauses_and_resumes() {
    let entered = CarouselReducer::reduce(CarouselState::new(4), CarouselIntent::PointerEnter);
    assert!(entered.is_paused());
    let left = CarouselReducer::reduce(entered, CarouselIntent::PointerLeave);
    assert!(!left.is_paused());
}

#[test]
fn scroll_sync_clamps_and_does_not_pause() {
    let state = CarouselReducer::reduce(
        CarouselState::new(4),
        CarouselIntent::ScrollSync { index: 10 },
    );
    assert_eq!(state.active_index(), Some(3));
    assert!(!state.is_paused());
}

#[test]
fn eligibility_tracks_every_driving_flag() {
    let ready = reduce_all(
        CarouselState::new(4),
        &[CarouselIntent::VisibilityChanged { in_view: true }],
    );
    assert!(ready.autoplay_eligible());

    let blocked = [
        CarouselIntent::VisibilityChanged { in_view: false },
        CarouselIntent::PointerEnter,
        CarouselIntent::ReducedMotionChanged { reduced: true },
        CarouselIntent::GoTo { index: 0 },
    ];
    for intent in blocked {
        let state = CarouselReducer::reduce(ready.clone(), intent);
        assert!(!state.autoplay_eligible(), "{intent:?}");
    }
}
