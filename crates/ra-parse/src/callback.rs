//! Callback surface between the grammar and whatever builds the result.

use crate::Event;

/// Receives grammar events in source order.
pub trait ParseCallback<'src> {
    /// Handle one event. Returning `false` stops the parse, which then fails
    /// with [`ParseErrorKind::Aborted`](crate::ParseErrorKind::Aborted).
    fn event(&mut self, event: Event<'src>) -> bool;
}

impl<'src> ParseCallback<'src> for Vec<Event<'src>> {
    fn event(&mut self, event: Event<'src>) -> bool {
        self.push(event);
        true
    }
}

impl<'src, C: ParseCallback<'src> + ?Sized> ParseCallback<'src> for &mut C {
    fn event(&mut self, event: Event<'src>) -> bool {
        (**self).event(event)
    }
}
