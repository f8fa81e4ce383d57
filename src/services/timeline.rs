use std::collections::HashMap;

use chrono::NaiveDate;

use crate::db::entities::{Event, Setlist};
use crate::db::enums::SortOrder;

pub fn sort_events(events: &mut [Event], order: SortOrder) {
    match order {
        SortOrder::Asc => events.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Desc => events.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

/// Order setlists by the date of their event. Setlists whose event no longer
/// exists sort as the oldest.
pub fn sort_setlists(setlists: &mut [Setlist], events: &[Event], order: SortOrder) {
    // reversed so the first event with a given id wins
    let dates: HashMap<&str, NaiveDate> = events
        .iter()
        .rev()
        .map(|e| (e.id.as_str(), e.date))
        .collect();
    let date_of = |setlist: &Setlist| dates.get(setlist.event_id.as_str()).copied();

    match order {
        SortOrder::Asc => setlists.sort_by(|a, b| date_of(a).cmp(&date_of(b))),
        SortOrder::Desc => setlists.sort_by(|a, b| date_of(b).cmp(&date_of(a))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_event, test_setlist};

    #[test]
    fn test_sort_events_by_date() {
        let mut events = vec![
            test_event("e2", "2024-02-20", &[]),
            test_event("e1", "2024-01-15", &[]),
            test_event("e3", "2024-03-10", &[]),
        ];

        sort_events(&mut events, SortOrder::Desc);
        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e3", "e2", "e1"]);

        sort_events(&mut events, SortOrder::Asc);
        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn test_sort_setlists_by_event_date_with_dangling_oldest() {
        let events = vec![
            test_event("e1", "2024-01-15", &[]),
            test_event("e2", "2024-02-20", &[]),
        ];
        let mut setlists = vec![
            test_setlist("sl1", "e1", &[]),
            test_setlist("orphan", "deleted", &[]),
            test_setlist("sl2", "e2", &[]),
        ];

        sort_setlists(&mut setlists, &events, SortOrder::Desc);
        let ids: Vec<_> = setlists.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["sl2", "sl1", "orphan"]);

        sort_setlists(&mut setlists, &events, SortOrder::Asc);
        let ids: Vec<_> = setlists.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["orphan", "sl1", "sl2"]);
    }
}
