use crate::runtime::{Effect, EffectFuture, Environment, IntentSender};
use crate::ui::coordinator::{
    CoordinatorEffect, CoordinatorIntent, CoordinatorReducer, CoordinatorState,
};
use crate::ui::mvi::{Effects, Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    BookCoordinator(CoordinatorState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::BookCoordinator(CoordinatorState::default())
    }
}

impl UiState for AppState {}

impl AppState {
    pub fn book_coordinator(&self) -> Option<&CoordinatorState> {
        match self {
            AppState::BookCoordinator(state) => Some(state),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    View(AppViewIntent),
}

impl Intent for AppIntent {}

#[derive(Debug, Clone, PartialEq)]
pub enum AppViewIntent {
    BookCoordinator(CoordinatorIntent),
}

impl From<CoordinatorIntent> for AppIntent {
    fn from(intent: CoordinatorIntent) -> Self {
        AppIntent::View(AppViewIntent::BookCoordinator(intent))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEffect {
    BookCoordinator(CoordinatorEffect),
}

impl Effect for AppEffect {
    type Intent = AppIntent;

    fn run(self, env: Environment, send: IntentSender<AppIntent>) -> EffectFuture {
        match self {
            AppEffect::BookCoordinator(effect) => effect.run(env, send.map(AppIntent::from)),
        }
    }
}

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;
    type Effect = AppEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Effects<Self::Effect>) {
        match (state, intent) {
            (
                AppState::BookCoordinator(coordinator),
                AppIntent::View(AppViewIntent::BookCoordinator(intent)),
            ) => {
                let (coordinator, effects) = CoordinatorReducer::reduce(coordinator, intent);
                (
                    AppState::BookCoordinator(coordinator),
                    effects.map(AppEffect::BookCoordinator),
                )
            }
        }
    }
}
