use super::{Dropped, Itinerary, Report, Summary, Totals};

/// Groups the extraction results into a [`Report`], keeping their order.
pub fn assemble(
    dropped_locations: Vec<Dropped>,
    itineraries: Vec<Itinerary>,
    summaries: Vec<Summary>,
    totals: Totals,
) -> Report {
    Report {
        dropped_locations,
        itineraries,
        summaries,
        totals,
    }
}
