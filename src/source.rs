use std::ops::Deref;

/// An ordered in-memory collection a [`PageWindow`](crate::PageWindow) pages through.
///
/// Implemented for everything that dereferences to a slice: `Vec<T>`, `&[T]`, `Box<[T]>`,
/// `Rc<[T]>`, `Arc<[T]>` and so on. The window never mutates its source.
pub trait PageSource {
    type Item;

    fn items(&self) -> &[Self::Item];
}

impl<D, T> PageSource for D
where
    D: Deref<Target = [T]>,
{
    type Item = T;

    fn items(&self) -> &[T] {
        self.deref()
    }
}

/// Item type of the [`PageSource`] `S`.
pub type SourceItem<S> = <S as PageSource>::Item;
