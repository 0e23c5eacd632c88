use crate::ui::carousel::intent::CarouselIntent;
use crate::ui::carousel::state::CarouselState;
use crate::ui::mvi::Reducer;

pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::GoTo { index } => go_to(state, index),
            CarouselIntent::Next => {
                let current = state.active_index.unwrap_or(0) as i64;
                go_to(state, current + 1)
            }
            CarouselIntent::Prev => {
                let current = state.active_index.unwrap_or(0) as i64;
                go_to(state, current - 1)
            }
            CarouselIntent::Tick => match state.active_index {
                Some(current) => CarouselState {
                    active_index: Some((current + 1) % state.slide_count),
                    ..state
                },
                None => state,
            },
            CarouselIntent::PointerEnter => CarouselState {
                hover_paused: true,
                ..state
            },
            // Leaving only lifts the hover pause; a manual pause survives.
            CarouselIntent::PointerLeave => CarouselState {
                hover_paused: false,
                ..state
            },
            CarouselIntent::VisibilityChanged { in_view } => CarouselState { in_view, ..state },
            CarouselIntent::ReducedMotionChanged { reduced } => CarouselState {
                prefers_reduced_motion: reduced,
                ..state
            },
            CarouselIntent::ScrollSync { index } => {
                if state.slide_count == 0 {
                    return state;
                }
                CarouselState {
                    active_index: Some(index.min(state.slide_count - 1)),
                    ..state
                }
            }
        }
    }
}

fn go_to(state: CarouselState, index: i64) -> CarouselState {
    if state.slide_count == 0 {
        return state;
    }
    let count = state.slide_count as i64;
    CarouselState {
        active_index: Some(index.rem_euclid(count) as usize),
        manually_paused: true,
        ..state
    }
}
