use super::intent::{CoordinatorIntent, PathIntent};
use super::stack::{StackElementId, StackIntent};
use crate::runtime::{Effect, EffectFuture, Environment, IntentSender};
use crate::ui::book_list::BookListEffect;

#[derive(Debug, Clone, PartialEq)]
pub enum CoordinatorEffect {
    /// Feed an intent back into the coordinator.
    Send(CoordinatorIntent),

    /// Work requested by the root book list.
    BookList(BookListEffect),

    /// Work requested by the pushed screen at `id`.
    Path { id: StackElementId, effect: PathEffect },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathEffect {
    BookList(BookListEffect),
}

impl Effect for CoordinatorEffect {
    type Intent = CoordinatorIntent;

    fn run(self, env: Environment, send: IntentSender<CoordinatorIntent>) -> EffectFuture {
        match self {
            CoordinatorEffect::Send(intent) => Box::pin(async move {
                send.send(intent);
            }),
            CoordinatorEffect::BookList(effect) => {
                effect.run(env, send.map(CoordinatorIntent::BookList))
            }
            CoordinatorEffect::Path {
                id,
                effect: PathEffect::BookList(effect),
            } => effect.run(
                env,
                send.map(move |intent| {
                    CoordinatorIntent::Path(StackIntent::Element {
                        id,
                        intent: PathIntent::BookList(intent),
                    })
                }),
            ),
        }
    }
}
