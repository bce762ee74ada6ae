use crate::stats::Table;

/// Folds one worker's completed table into the global table.
///
/// Insertion takes ownership of the station key; combination goes through
/// `Stats::merge`, whose associativity and commutativity make the global
/// result independent of worker completion order.
pub fn merge_tables(global: &mut Table, local: Table) {
    for (station, stats) in local {
        global
            .entry(station)
            .and_modify(|merged| merged.merge(stats))
            .or_insert(stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stats;

    fn table(entries: &[(&[u8], Stats)]) -> Table {
        entries
            .iter()
            .map(|(station, stats)| (station.to_vec(), *stats))
            .collect()
    }

    #[test]
    fn disjoint_keys_are_inserted() {
        let mut global = table(&[(b"A", Stats::new(1.0))]);
        merge_tables(&mut global, table(&[(b"B", Stats::new(2.0))]));
        assert_eq!(global.len(), 2);
        assert_eq!(global[b"B".as_slice()], Stats::new(2.0));
    }

    #[test]
    fn shared_keys_are_combined_in_place() {
        let mut left = Stats::new(1.0);
        left.record(5.0);

        let mut global = table(&[(b"A", left)]);
        merge_tables(&mut global, table(&[(b"A", Stats::new(-3.0))]));

        let a = &global[b"A".as_slice()];
        assert_eq!((a.min, a.max, a.sum, a.count), (-3.0, 5.0, 3.0, 3));
    }

    #[test]
    fn merge_order_does_not_matter() {
        let chunks = [
            table(&[(b"A".as_slice(), Stats::new(1.5)), (b"B", Stats::new(2.0))]),
            table(&[(b"B".as_slice(), Stats::new(-4.5))]),
            table(&[(b"A".as_slice(), Stats::new(0.5)), (b"C", Stats::new(9.0))]),
        ];

        let mut forward = Table::new();
        for chunk in chunks.clone() {
            merge_tables(&mut forward, chunk);
        }
        let mut backward = Table::new();
        for chunk in chunks.into_iter().rev() {
            merge_tables(&mut backward, chunk);
        }
        assert_eq!(forward, backward);
    }
}
