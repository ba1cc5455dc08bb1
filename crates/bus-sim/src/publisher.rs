//! The sink every report is delivered to.

use std::convert::Infallible;

use crate::PositionReport;

/// Delivers position reports to wherever consumers read them (a realtime
/// database, a message queue, a file, …).
///
/// The simulator never retries: an `Err` is returned to the caller of
/// [`Sim::step`][crate::Sim::step] and the traversal state is left exactly as
/// it was before the tick.
///
/// # Example: print every report
///
/// ```rust,ignore
/// struct Printer;
///
/// impl Publisher for Printer {
///     type Error = std::convert::Infallible;
///     fn publish(&mut self, report: &PositionReport) -> Result<(), Self::Error> {
///         println!("{:.5}, {:.5}", report.latitude, report.longitude);
///         Ok(())
///     }
/// }
/// ```
pub trait Publisher {
    type Error: std::error::Error + Send + Sync + 'static;

    fn publish(&mut self, report: &PositionReport) -> Result<(), Self::Error>;
}

/// A [`Publisher`] that discards everything.
pub struct NoopPublisher;

impl Publisher for NoopPublisher {
    type Error = Infallible;

    fn publish(&mut self, _report: &PositionReport) -> Result<(), Infallible> {
        Ok(())
    }
}

/// In-memory capture, handy for tests and replays.
impl Publisher for Vec<PositionReport> {
    type Error = Infallible;

    fn publish(&mut self, report: &PositionReport) -> Result<(), Infallible> {
        self.push(*report);
        Ok(())
    }
}

impl<P: Publisher + ?Sized> Publisher for &mut P {
    type Error = P::Error;

    fn publish(&mut self, report: &PositionReport) -> Result<(), P::Error> {
        (**self).publish(report)
    }
}
