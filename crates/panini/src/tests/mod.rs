mod property_documents;
mod snapshot_events;
