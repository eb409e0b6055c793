use crate::{ComparisonResult, RandSource, compare};

/// A display surface for comparison results.
///
/// The core never renders anything itself; front ends implement this trait
/// and hand it to [`analyze`].
pub trait Presenter {
    /// Clears whatever the previous comparison left on screen.
    fn reset(&mut self);

    /// Shows a user-facing error message.
    fn show_error(&mut self, message: &str);

    /// Shows a finished comparison.
    fn show_result(&mut self, result: &ComparisonResult);
}

impl<P> Presenter for &mut P
where
    P: Presenter + ?Sized,
{
    fn reset(&mut self) {
        (**self).reset();
    }

    fn show_error(&mut self, message: &str) {
        (**self).show_error(message);
    }

    fn show_result(&mut self, result: &ComparisonResult) {
        (**self).show_result(result);
    }
}

/// Runs one comparison end to end against a presenter.
///
/// The presenter is reset first. On success the result is shown and returned;
/// on failure only the error's user-facing message is shown, while the
/// underlying cause goes to the log.
pub fn analyze<P, R>(presenter: &mut P, url1: &str, url2: &str, rng: &R) -> Option<ComparisonResult>
where
    P: Presenter + ?Sized,
    R: RandSource<u64> + ?Sized,
{
    presenter.reset();
    match compare(url1, url2, rng) {
        Ok(result) => {
            presenter.show_result(&result);
            Some(result)
        }
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::error!(error = ?err, "comparison failed");
            presenter.show_error(&err.to_string());
            None
        }
    }
}
