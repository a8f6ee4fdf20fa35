//! Async adapters for consumers that pull windows from a [`Stream`], e.g. an infinite scroll
//! driven by an async UI loop.

use crate::{PageSource, PageWindow, SourceItem};
use futures::stream::{self, Stream};

impl<S: PageSource> PageWindow<S> {
    #[doc = include_str!("../doc/PageWindow__windows_stream")]
    pub fn windows_stream<'s>(&'s self) -> impl 's + Stream<Item = &'s [SourceItem<S>]> {
        stream::iter(self.windows())
    }

    #[doc = include_str!("../doc/PageWindow__into_windows_stream")]
    pub fn into_windows_stream(self) -> impl Stream<Item = Vec<SourceItem<S>>>
    where
        SourceItem<S>: Clone,
    {
        stream::unfold(WindowsState::new(self), next_window)
    }
}

struct WindowsState<S> {
    window: PageWindow<S>,
    exhausted: bool,
}

impl<S> WindowsState<S> {
    fn new(window: PageWindow<S>) -> Self {
        Self {
            window,
            exhausted: false,
        }
    }
}

async fn next_window<S>(
    mut state: WindowsState<S>,
) -> Option<(Vec<SourceItem<S>>, WindowsState<S>)>
where
    S: PageSource,
    SourceItem<S>: Clone,
{
    if state.exhausted {
        return None;
    }

    let items = state.window.data().to_vec();

    if state.window.can_go_next() {
        state.window.go_next();
    } else {
        state.exhausted = true;
    }

    Some((items, state))
}

#[cfg(test)]
mod tests;
