//! Inquiry → plot status synchronization rule.
//!
//! An inquiry moving to `booked` reserves its plot. A booked inquiry that is
//! later `closed` releases the plot, but only when no other inquiry on the
//! same plot is still booked. Nothing else touches the plot.
//!
//! The rule is pure; the db layer evaluates it and applies the resulting
//! [`PlotEffect`] inside the same transaction as the inquiry update, with the
//! plot row locked so concurrent updates on one plot are serialized.

use crate::status::{InquiryStatus, PlotStatus};

/// What an inquiry status change requires of its plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotEffect {
    /// Leave the plot alone.
    None,
    /// Force the plot to `booked`, whatever it was.
    MarkBooked,
    /// Set the plot back to `available` if no other inquiry on it is booked.
    ReleaseIfUnbooked,
}

/// Decide the plot side effect for an inquiry moving from `old` to `new`.
///
/// An unchanged status never has an effect.
pub fn plot_effect(old: InquiryStatus, new: InquiryStatus) -> PlotEffect {
    if old == new {
        return PlotEffect::None;
    }
    match (old, new) {
        (_, InquiryStatus::Booked) => PlotEffect::MarkBooked,
        (InquiryStatus::Booked, InquiryStatus::Closed) => PlotEffect::ReleaseIfUnbooked,
        _ => PlotEffect::None,
    }
}

/// Resolve a [`PlotEffect::ReleaseIfUnbooked`] once the number of *other*
/// booked inquiries on the plot is known. Returns the new plot status, if any.
pub fn resolve_release(other_booked: i64) -> Option<PlotStatus> {
    (other_booked == 0).then_some(PlotStatus::Available)
}
