use model::{cursor::Cursor, record::ChangelogRecord};

/// Outcome of one resolution: either an ordered batch to publish, or a
/// bootstrap cursor to persist in place of publishing anything.
#[derive(Debug, PartialEq)]
pub enum Resolution {
    Publish(Vec<ChangelogRecord>),
    Bootstrap(Cursor),
}

/// Selects the records not yet covered by `cursor`, ascending by sort key
/// so publication order matches chronological/ID order.
///
/// On a true first run with `post_history` disabled, nothing is selected;
/// the returned cursor covers the whole observed batch instead, so the
/// historical backlog is never flooded into the sink.
pub fn resolve(records: Vec<ChangelogRecord>, cursor: &Cursor, post_history: bool) -> Resolution {
    if cursor.is_empty() && !post_history {
        let mut initialized = Cursor::default();
        for record in &records {
            initialized.advance(record);
        }
        return Resolution::Bootstrap(initialized);
    }

    let mut fresh: Vec<ChangelogRecord> = records
        .into_iter()
        .filter(|record| is_new(record, cursor))
        .collect();
    fresh.sort_by_key(ChangelogRecord::sort_key);

    Resolution::Publish(fresh)
}

/// A record with a numeric id is judged by the id alone; otherwise a
/// parseable timestamp is compared against the cursor. Records with
/// neither field cannot be deduplicated and are never selected.
fn is_new(record: &ChangelogRecord, cursor: &Cursor) -> bool {
    if let Some(id) = record.id {
        return cursor.last_id.is_none_or(|last| id > last);
    }
    if let Some(ts) = record.timestamp() {
        return cursor.last_timestamp.is_none_or(|last| ts > last);
    }
    false
}
